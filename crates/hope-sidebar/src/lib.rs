//! Sidebar structure generation for hope.
//!
//! Sidebars configured as `"structure"` are generated from the site's page
//! layout instead of being written by hand. This crate finds every prefix that
//! asks for generated structure and builds a nested item tree for it.
//!
//! # Pipeline
//!
//! ```text
//! ThemeConfig ──collect_generate_paths──▶ ["/", "/guide/api/"]
//!                                              │ scope_for_prefix
//! pages ───────────get_sidebar_info──────▶ SidebarInfo tree (sorted)
//!                                              │ get_sidebar_items
//!                                         SidebarData ──▶ theme-hope/sidebar.js
//! ```
//!
//! # Quick Start
//!
//! ```ignore
//! use hope_app::{AppEnv, FsApp};
//! use hope_config::LoadedOptions;
//! use hope_sidebar::prepare_sidebar_data;
//!
//! let theme_config = LoadedOptions::load(None)?.theme_config()?;
//! let app = FsApp::new(pages, AppEnv { is_debug: false, temp_dir: ".temp".into() });
//! prepare_sidebar_data(&app, &theme_config, None)?;
//! ```

mod data;
mod info;
mod items;
mod paths;
mod sorter;

use hope_app::AppError;

pub use data::{SIDEBAR_TEMP_FILE, SidebarData, get_sidebar_data, prepare_sidebar_data};
pub use info::{SidebarDirInfo, SidebarFileInfo, SidebarGroupInfo, SidebarInfo, get_sidebar_info};
pub use items::get_sidebar_items;
pub use paths::{collect_generate_paths, generate_paths};
pub use sorter::{
    DEFAULT_SORTER_KEYS, SidebarCompareFn, SidebarSorter, SorterKey, UnknownSorterKey,
};

/// Error returned when sidebar data cannot be produced or persisted.
#[derive(Debug, thiserror::Error)]
pub enum SidebarError {
    /// Temp file write failed.
    #[error("{0}")]
    App(#[from] AppError),
    /// Serialization failed.
    #[error("Failed to serialize sidebar data: {0}")]
    Serialize(#[from] serde_json::Error),
}
