//! Theme configuration for hope.
//!
//! Provides the typed theme configuration model ([`ThemeOptions`],
//! [`ThemeConfig`], sidebar and navbar option types) and loading of theme
//! option files.
//!
//! # Config Files
//!
//! Theme options are read from `hope.toml` (TOML) or any `.json` file. When no
//! path is given, `hope.toml` is searched in the current directory and its
//! parents.
//!
//! ```toml
//! logo = "/logo.svg"
//! sidebar = "structure"
//!
//! [locales."/zh/"]
//! sidebar = { "/zh/guide/" = "structure" }
//! ```

pub mod navbar;
pub mod path;
pub mod sidebar;
mod theme;

use std::path::{Path, PathBuf};

pub use navbar::{NavbarGroup, NavbarItem, NavbarLink, NavbarOptions};
pub use sidebar::{
    STRUCTURE, SidebarArrayOptions, SidebarChildren, SidebarGroup, SidebarItem, SidebarLink,
    SidebarObjectOptions, SidebarOptions, SidebarPrefixConfig,
};
pub use theme::{LocaleConfig, ROOT_LOCALE, ThemeConfig, ThemeOptions};

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "hope.toml";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Theme options together with the file they were read from.
#[derive(Debug, Default)]
pub struct LoadedOptions {
    /// Parsed theme options.
    pub options: ThemeOptions,
    /// Path to the config file, `None` when defaults were used.
    pub config_path: Option<PathBuf>,
}

impl LoadedOptions {
    /// Load theme options.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `hope.toml` in the current directory and parents, falling back to
    /// empty options.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Resolve the loaded options into per-locale configuration.
    ///
    /// # Errors
    ///
    /// See [`ThemeConfig::from_options`].
    pub fn theme_config(&self) -> Result<ThemeConfig, ConfigError> {
        ThemeConfig::from_options(&self.options)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load options from a specific file, choosing the format by extension.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let options: ThemeOptions = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            _ => toml::from_str(&content)?,
        };

        Ok(Self {
            options,
            config_path: Some(path.to_path_buf()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use serde_json::json;

    use super::*;

    #[test]
    fn test_load_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hope.toml");
        fs::write(
            &path,
            r#"
logo = "/logo.svg"
sidebar = "structure"

[locales."/zh/"]
sidebar = { "/zh/guide/" = "structure" }
"#,
        )
        .unwrap();

        let loaded = LoadedOptions::load(Some(&path)).unwrap();

        assert_eq!(loaded.config_path.as_deref(), Some(path.as_path()));
        assert_eq!(loaded.options.get("logo"), Some(&json!("/logo.svg")));
        let config = loaded.theme_config().unwrap();
        assert_eq!(config.locales["/"].sidebar, SidebarOptions::Structure);
        assert!(matches!(
            config.locales["/zh/"].sidebar,
            SidebarOptions::Prefixes(_)
        ));
    }

    #[test]
    fn test_load_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.json");
        fs::write(&path, r#"{ "sidebar": ["intro.md"] }"#).unwrap();

        let loaded = LoadedOptions::load(Some(&path)).unwrap();

        assert_eq!(loaded.options.get("sidebar"), Some(&json!(["intro.md"])));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let result = LoadedOptions::load(Some(Path::new("/nonexistent/hope.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hope.toml");
        fs::write(&path, "sidebar = [unclosed").unwrap();

        let result = LoadedOptions::load(Some(&path));
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
