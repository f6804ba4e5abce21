//! Site build application trait and the filesystem implementation.

use std::path::PathBuf;

use crate::AppError;
use crate::logger::{Logger, TracingLogger};
use crate::page::Page;

/// Build environment flags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppEnv {
    /// Debug mode: dump generated data to the log.
    pub is_debug: bool,
    /// Directory receiving generated temp files.
    pub temp_dir: PathBuf,
}

/// The site build as seen by theme code.
///
/// Implementations own the loaded page list and a place to write generated
/// modules. Theme code only reads pages and writes temp files.
pub trait App {
    /// All loaded pages.
    fn pages(&self) -> &[Page];

    /// Build environment.
    fn env(&self) -> &AppEnv;

    /// Shared build logger.
    fn logger(&self) -> &dyn Logger;

    /// Write a generated file under the temp directory.
    ///
    /// # Arguments
    ///
    /// * `file` - Path relative to the temp directory (e.g., "theme-hope/sidebar.js")
    /// * `content` - File content
    ///
    /// # Returns
    ///
    /// Location of the written file.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the file cannot be written.
    fn write_temp(&self, file: &str, content: &str) -> Result<PathBuf, AppError>;
}

/// [`App`] backed by the filesystem, logging through [`TracingLogger`].
#[derive(Debug)]
pub struct FsApp {
    pages: Vec<Page>,
    env: AppEnv,
    logger: TracingLogger,
}

impl FsApp {
    /// Create an app over loaded pages.
    #[must_use]
    pub fn new(pages: Vec<Page>, env: AppEnv) -> Self {
        Self {
            pages,
            env,
            logger: TracingLogger,
        }
    }
}

impl App for FsApp {
    fn pages(&self) -> &[Page] {
        &self.pages
    }

    fn env(&self) -> &AppEnv {
        &self.env
    }

    fn logger(&self) -> &dyn Logger {
        &self.logger
    }

    fn write_temp(&self, file: &str, content: &str) -> Result<PathBuf, AppError> {
        let path = self.env.temp_dir.join(file);
        let io_error = |source| AppError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(&path, content).map_err(io_error)?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Wrote temp file");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn test_write_temp_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let app = FsApp::new(
            Vec::new(),
            AppEnv {
                is_debug: false,
                temp_dir: dir.path().join(".temp"),
            },
        );

        let path = app
            .write_temp("theme-hope/sidebar.js", "export const a = 1;\n")
            .unwrap();

        assert_eq!(path, dir.path().join(".temp/theme-hope/sidebar.js"));
        assert_eq!(fs::read_to_string(path).unwrap(), "export const a = 1;\n");
    }

    #[test]
    fn test_write_temp_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let app = FsApp::new(
            Vec::new(),
            AppEnv {
                is_debug: false,
                temp_dir: dir.path().to_path_buf(),
            },
        );

        app.write_temp("out.js", "first").unwrap();
        let path = app.write_temp("out.js", "second").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }

    #[test]
    fn test_write_temp_reports_path_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not dir").unwrap();
        let app = FsApp::new(
            Vec::new(),
            AppEnv {
                is_debug: false,
                temp_dir: blocker,
            },
        );

        let result = app.write_temp("theme-hope/sidebar.js", "x");

        assert!(matches!(result, Err(AppError::Io { .. })));
    }
}
