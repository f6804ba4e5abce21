//! The hope theme.
//!
//! [`hope_theme`] builds the theme function from theme options. The
//! [`compat`] module keeps legacy configuration helpers working, converting
//! legacy option shapes and warning about each deprecated call.
//!
//! # Quick Start
//!
//! ```ignore
//! use hope_app::{AppEnv, FsApp};
//! use hope_config::LoadedOptions;
//! use hope_theme::hope_theme;
//!
//! let loaded = LoadedOptions::load(None)?;
//! let app = FsApp::new(pages, AppEnv::default());
//! let theme = hope_theme(loaded.options, false).call(&app)?;
//! theme.on_prepared(&app)?;
//! ```

pub mod compat;
mod helpers;
mod theme;

pub use compat::{
    LegacyAdapter, ThemeEntry, UserConfig, convert_theme_config, define_hope_config,
    define_navbar_config, define_sidebar_array_config, define_sidebar_config,
    define_sidebar_object_config, define_theme_config, hope_theme_legacy,
};
pub use helpers::{array_sidebar, navbar, object_sidebar, sidebar};
pub use theme::{THEME_NAME, Theme, ThemeError, ThemeFunction, hope_theme};
