//! Compatibility layer for legacy configuration.
//!
//! Legacy `define_*` helpers keep working but log a deprecation warning on
//! every call. [`LegacyAdapter`] carries the logger the warnings go to; the
//! free functions use [`TracingLogger`].

mod convert;
mod user_config;

use hope_app::{Logger, TracingLogger};
use hope_config::{
    NavbarOptions, SidebarArrayOptions, SidebarObjectOptions, SidebarOptions, ThemeOptions,
};
use serde_json::Value;

pub use convert::convert_theme_config;
pub use user_config::{ThemeEntry, UserConfig};

use crate::theme::{ThemeFunction, hope_theme};

/// Usage shown when `define_hope_config` is called.
const HOPE_CONFIG_USAGE: &str = r#"use hope_theme::{ThemeEntry, UserConfig, hope_theme_legacy};

let config = UserConfig {
    // site config
    // ...

    theme: Some(ThemeEntry::Function(hope_theme_legacy(theme_options))),
    ..UserConfig::default()
};"#;

/// Create the theme function in legacy mode.
///
/// Options are converted from the legacy shape when the theme is built.
#[must_use]
pub fn hope_theme_legacy(options: ThemeOptions) -> ThemeFunction {
    hope_theme(options, true)
}

/// Legacy helpers bound to a logger.
#[derive(Clone, Copy)]
pub struct LegacyAdapter<'a> {
    logger: &'a dyn Logger,
}

impl Default for LegacyAdapter<'static> {
    fn default() -> Self {
        Self::new(&TracingLogger)
    }
}

impl<'a> LegacyAdapter<'a> {
    /// Create an adapter logging to `logger`.
    #[must_use]
    pub fn new(logger: &'a dyn Logger) -> Self {
        Self { logger }
    }

    fn deprecated(&self, name: &str, replacement: &str) {
        self.logger
            .warn(&format!("\"{name}\" is deprecated, please use {replacement} instead"));
    }

    /// Deprecated: use [`crate::navbar`].
    #[must_use]
    pub fn define_navbar_config(&self, config: NavbarOptions) -> NavbarOptions {
        self.deprecated("define_navbar_config", "`hope_theme::navbar`");
        config
    }

    /// Deprecated: use [`crate::sidebar`].
    #[must_use]
    pub fn define_sidebar_config(&self, config: SidebarOptions) -> SidebarOptions {
        self.deprecated("define_sidebar_config", "`hope_theme::sidebar`");
        config
    }

    /// Deprecated: use [`crate::array_sidebar`].
    #[must_use]
    pub fn define_sidebar_array_config(&self, config: SidebarArrayOptions) -> SidebarArrayOptions {
        self.deprecated("define_sidebar_array_config", "`hope_theme::array_sidebar`");
        config
    }

    /// Deprecated: use [`crate::object_sidebar`].
    #[must_use]
    pub fn define_sidebar_object_config(
        &self,
        config: SidebarObjectOptions,
    ) -> SidebarObjectOptions {
        self.deprecated("define_sidebar_object_config", "`hope_theme::object_sidebar`");
        config
    }

    /// Deprecated: use [`hope_theme_legacy`].
    ///
    /// Returns the options converted to the current shape.
    #[must_use]
    pub fn define_theme_config(&self, options: ThemeOptions) -> ThemeOptions {
        self.deprecated("define_theme_config", "`hope_theme::hope_theme_legacy`");
        convert_theme_config(options)
    }

    /// Deprecated: set `theme` to [`hope_theme_legacy`] instead.
    ///
    /// An object `theme_config` becomes a legacy theme function. A config
    /// still without a theme function gets one with empty options.
    #[must_use]
    pub fn define_hope_config(&self, mut config: UserConfig) -> UserConfig {
        self.logger.warn(&format!(
            "\"define_hope_config\" is deprecated, please use the following code instead:\n\n\
             {HOPE_CONFIG_USAGE}\n"
        ));

        if let Some(Value::Object(options)) = &config.theme_config {
            config.theme = Some(ThemeEntry::Function(hope_theme_legacy(
                ThemeOptions::from(options.clone()),
            )));
        }

        if !matches!(config.theme, Some(ThemeEntry::Function(_))) {
            config.theme = Some(ThemeEntry::Function(hope_theme_legacy(ThemeOptions::new())));
        }

        config
    }
}

/// Deprecated: use [`crate::navbar`].
#[must_use]
pub fn define_navbar_config(config: NavbarOptions) -> NavbarOptions {
    LegacyAdapter::default().define_navbar_config(config)
}

/// Deprecated: use [`crate::sidebar`].
#[must_use]
pub fn define_sidebar_config(config: SidebarOptions) -> SidebarOptions {
    LegacyAdapter::default().define_sidebar_config(config)
}

/// Deprecated: use [`crate::array_sidebar`].
#[must_use]
pub fn define_sidebar_array_config(config: SidebarArrayOptions) -> SidebarArrayOptions {
    LegacyAdapter::default().define_sidebar_array_config(config)
}

/// Deprecated: use [`crate::object_sidebar`].
#[must_use]
pub fn define_sidebar_object_config(config: SidebarObjectOptions) -> SidebarObjectOptions {
    LegacyAdapter::default().define_sidebar_object_config(config)
}

/// Deprecated: use [`hope_theme_legacy`].
#[must_use]
pub fn define_theme_config(options: ThemeOptions) -> ThemeOptions {
    LegacyAdapter::default().define_theme_config(options)
}

/// Deprecated: set `theme` to [`hope_theme_legacy`] instead.
#[must_use]
pub fn define_hope_config(config: UserConfig) -> UserConfig {
    LegacyAdapter::default().define_hope_config(config)
}
