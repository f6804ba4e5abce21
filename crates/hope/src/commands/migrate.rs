//! `hope migrate` command implementation.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use hope_config::{LoadedOptions, ThemeOptions};
use hope_theme::{ThemeEntry, UserConfig, convert_theme_config, define_hope_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the migrate command.
#[derive(Args)]
pub(crate) struct MigrateArgs {
    /// Path to theme options file (default: auto-discover hope.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Read a legacy site config (JSON with `themeConfig`) instead.
    #[arg(long, conflicts_with = "config")]
    site: Option<PathBuf>,

    /// Write converted options to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl MigrateArgs {
    /// Execute the migrate command.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or the output
    /// cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let options = match &self.site {
            Some(site) => site_theme_options(site)?,
            None => LoadedOptions::load(self.config.as_deref())?.options,
        };
        let json = migrated_json(options)?;

        match &self.output {
            Some(path) => {
                fs::write(path, format!("{json}\n"))?;
                output.success(&format!("Converted options written to {}", path.display()));
            }
            None => output.data(&json),
        }

        Ok(())
    }
}

/// Theme options of a legacy site config.
fn site_theme_options(path: &Path) -> Result<ThemeOptions, CliError> {
    let content = fs::read_to_string(path)?;
    let config: UserConfig = serde_json::from_str(&content)?;
    let config = define_hope_config(config);

    Ok(config
        .theme
        .as_ref()
        .and_then(ThemeEntry::as_function)
        .map(|function| function.options().clone())
        .unwrap_or_default())
}

/// Convert options and render them as pretty JSON.
fn migrated_json(options: ThemeOptions) -> Result<String, CliError> {
    Ok(serde_json::to_string_pretty(&convert_theme_config(options))?)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    use super::*;

    #[test]
    fn test_site_theme_options() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "title": "Docs", "themeConfig": { "nav": ["/guide/"], "copyCode": true } }"#,
        )
        .unwrap();

        let options = site_theme_options(&path).unwrap();
        let json: Value = serde_json::from_str(&migrated_json(options).unwrap()).unwrap();

        assert_eq!(
            json,
            json!({ "navbar": ["/guide/"], "plugins": { "copyCode": true } })
        );
    }

    #[test]
    fn test_site_without_theme_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "title": "Docs" }"#).unwrap();

        let options = site_theme_options(&path).unwrap();

        assert!(options.is_empty());
    }

    #[test]
    fn test_invalid_site_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(site_theme_options(&path), Err(CliError::Json(_))));
    }
}
