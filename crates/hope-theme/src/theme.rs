//! Theme factory.
//!
//! [`hope_theme`] captures theme options and returns a [`ThemeFunction`].
//! The site build calls it with the [`App`] to get a [`Theme`]; the theme
//! then takes part in the build through its lifecycle hooks.

use std::path::PathBuf;

use hope_app::App;
use hope_config::{ConfigError, ThemeConfig, ThemeOptions};
use hope_sidebar::{SidebarError, SidebarSorter, UnknownSorterKey, prepare_sidebar_data};
use serde_json::Value;

use crate::compat::convert_theme_config;

/// Theme name.
pub const THEME_NAME: &str = "vuepress-theme-hope";

/// Option holding sidebar sorter names.
const SORTER_KEY: &str = "sidebarSorter";

/// Error returned when a theme cannot be built from its options.
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// Options do not resolve into a theme config.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// `sidebarSorter` names an unknown sorter.
    #[error("{0}")]
    Sorter(#[from] UnknownSorterKey),
    /// `sidebarSorter` is neither a string nor a list of strings.
    #[error("sidebarSorter must be a string or a list of strings, got {0}")]
    SorterShape(Value),
}

/// Callable theme factory.
#[derive(Clone, Debug)]
pub struct ThemeFunction {
    options: ThemeOptions,
    legacy: bool,
    sorter: Option<SidebarSorter>,
}

/// Create the theme factory.
///
/// # Arguments
///
/// * `options` - Theme options as written by the site author
/// * `legacy` - Accept legacy option names, converting them on build
#[must_use]
pub fn hope_theme(options: ThemeOptions, legacy: bool) -> ThemeFunction {
    ThemeFunction {
        options,
        legacy,
        sorter: None,
    }
}

impl ThemeFunction {
    /// Options the factory was created with, before any conversion.
    #[must_use]
    pub fn options(&self) -> &ThemeOptions {
        &self.options
    }

    /// Whether legacy compatibility mode is enabled.
    #[must_use]
    pub fn legacy(&self) -> bool {
        self.legacy
    }

    /// Use a custom sidebar sorter, overriding `sidebarSorter`.
    #[must_use]
    pub fn with_sorter(mut self, sorter: SidebarSorter) -> Self {
        self.sorter = Some(sorter);
        self
    }

    /// Build the theme for an app.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the options do not resolve.
    pub fn call(&self, app: &dyn App) -> Result<Theme, ThemeError> {
        let options = if self.legacy {
            convert_theme_config(self.options.clone())
        } else {
            self.options.clone()
        };
        let config = ThemeConfig::from_options(&options)?;
        let sorter = match &self.sorter {
            Some(sorter) => Some(sorter.clone()),
            None => sorter_from_options(&options)?,
        };

        tracing::debug!(
            legacy = self.legacy,
            locales = config.locales.len(),
            pages = app.pages().len(),
            "Built theme"
        );

        Ok(Theme {
            name: THEME_NAME,
            legacy: self.legacy,
            options,
            config,
            sorter,
        })
    }
}

/// Parse `sidebarSorter` from options.
fn sorter_from_options(options: &ThemeOptions) -> Result<Option<SidebarSorter>, ThemeError> {
    match options.get(SORTER_KEY) {
        None => Ok(None),
        Some(Value::String(name)) => Ok(Some(SidebarSorter::from_names(&[name])?)),
        Some(Value::Array(names)) => {
            let names = names
                .iter()
                .map(|name| {
                    name.as_str()
                        .ok_or_else(|| ThemeError::SorterShape(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(SidebarSorter::from_names(&names)?))
        }
        Some(other) => Err(ThemeError::SorterShape(other.clone())),
    }
}

/// Theme instance for one site build.
#[derive(Debug)]
pub struct Theme {
    /// Theme name.
    pub name: &'static str,
    /// Whether legacy compatibility mode is enabled.
    pub legacy: bool,
    /// Effective options, after legacy conversion.
    pub options: ThemeOptions,
    /// Resolved per-locale configuration.
    pub config: ThemeConfig,
    sorter: Option<SidebarSorter>,
}

impl Theme {
    /// Sidebar sorter in use, `None` for the default.
    #[must_use]
    pub fn sorter(&self) -> Option<&SidebarSorter> {
        self.sorter.as_ref()
    }

    /// Hook run once pages are loaded: writes generated sidebar data.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError`] if the sidebar module cannot be written.
    pub fn on_prepared(&self, app: &dyn App) -> Result<PathBuf, SidebarError> {
        prepare_sidebar_data(app, &self.config, self.sorter.as_ref())
    }
}
