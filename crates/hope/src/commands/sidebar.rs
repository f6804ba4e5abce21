//! `hope sidebar` command implementation.

use std::path::{Path, PathBuf};

use clap::Args;
use hope_app::{AppEnv, FsApp, Page, load_pages};
use hope_config::LoadedOptions;
use hope_sidebar::SidebarSorter;
use hope_theme::hope_theme;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sidebar command.
#[derive(Args)]
pub(crate) struct SidebarArgs {
    /// Page manifest (JSON or YAML list of pages).
    #[arg(short, long)]
    pages: PathBuf,

    /// Path to theme options file (default: auto-discover hope.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory for generated modules.
    #[arg(short, long, env = "HOPE_TEMP_DIR", default_value = ".temp")]
    temp_dir: PathBuf,

    /// Sidebar sorter keys, comma separated (overrides config).
    #[arg(long, value_delimiter = ',')]
    sorter: Vec<String>,

    /// Treat theme options as legacy and convert them first.
    #[arg(long)]
    legacy: bool,

    /// Dump the generated sidebar data to the log.
    #[arg(long)]
    pub debug: bool,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,
}

impl SidebarArgs {
    /// Execute the sidebar command.
    ///
    /// # Errors
    ///
    /// Returns an error if options, pages or the theme fail to load, or the
    /// sidebar module cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let loaded = LoadedOptions::load(self.config.as_deref())?;
        if let Some(config_path) = &loaded.config_path {
            output.info(&format!("Config: {}", config_path.display()));
        }

        let pages = load_pages(&self.pages)?;
        output.info(&format!("Pages: {}", pages.len()));

        let written = generate(
            loaded,
            pages,
            &SidebarSettings {
                temp_dir: self.temp_dir,
                sorter: self.sorter,
                legacy: self.legacy,
                debug: self.debug,
            },
        )?;

        output.success(&format!("Sidebar data written to {}", written.display()));
        Ok(())
    }
}

/// Resolved command settings.
struct SidebarSettings {
    temp_dir: PathBuf,
    sorter: Vec<String>,
    legacy: bool,
    debug: bool,
}

/// Build the theme and write its sidebar module.
fn generate(
    loaded: LoadedOptions,
    pages: Vec<Page>,
    settings: &SidebarSettings,
) -> Result<PathBuf, CliError> {
    let app = FsApp::new(
        pages,
        AppEnv {
            is_debug: settings.debug,
            temp_dir: resolve_temp_dir(&settings.temp_dir, loaded.config_path.as_deref()),
        },
    );

    let mut function = hope_theme(loaded.options, settings.legacy);
    if !settings.sorter.is_empty() {
        function = function.with_sorter(SidebarSorter::from_names(&settings.sorter)?);
    }

    let theme = function.call(&app)?;
    Ok(theme.on_prepared(&app)?)
}

/// Resolve a relative temp dir against the config file's directory.
fn resolve_temp_dir(temp_dir: &Path, config_path: Option<&Path>) -> PathBuf {
    match config_path.and_then(Path::parent) {
        Some(base) if temp_dir.is_relative() => base.join(temp_dir),
        _ => temp_dir.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use hope_config::ThemeOptions;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn settings(temp_dir: &Path) -> SidebarSettings {
        SidebarSettings {
            temp_dir: temp_dir.to_path_buf(),
            sorter: Vec::new(),
            legacy: false,
            debug: false,
        }
    }

    fn loaded(value: serde_json::Value) -> LoadedOptions {
        LoadedOptions {
            options: serde_json::from_value::<ThemeOptions>(value).unwrap(),
            config_path: None,
        }
    }

    #[test]
    fn test_resolve_temp_dir_relative_to_config() {
        assert_eq!(
            resolve_temp_dir(Path::new(".temp"), Some(Path::new("/site/hope.toml"))),
            PathBuf::from("/site/.temp")
        );
        assert_eq!(
            resolve_temp_dir(Path::new("/tmp/out"), Some(Path::new("/site/hope.toml"))),
            PathBuf::from("/tmp/out")
        );
        assert_eq!(resolve_temp_dir(Path::new(".temp"), None), PathBuf::from(".temp"));
    }

    #[test]
    fn test_generate_writes_module() {
        let dir = tempfile::tempdir().unwrap();
        let pages = vec![Page::new("b.md", "B"), Page::new("a.md", "A")];

        let written = generate(
            loaded(json!({ "sidebar": "structure" })),
            pages,
            &settings(dir.path()),
        )
        .unwrap();

        assert_eq!(written, dir.path().join("theme-hope/sidebar.js"));
        assert_eq!(
            fs::read_to_string(written).unwrap(),
            "export const sidebarData = {\"/\":[\"a.md\",\"b.md\"]};\n"
        );
    }

    #[test]
    fn test_generate_rejects_unknown_sorter() {
        let dir = tempfile::tempdir().unwrap();
        let mut settings = settings(dir.path());
        settings.sorter = vec!["shuffle".to_owned()];

        let result = generate(loaded(json!({})), Vec::new(), &settings);

        assert!(matches!(result, Err(CliError::Sorter(_))));
    }
}
