//! In-memory app and logger for testing.
//!
//! Provides [`MockApp`] and [`MemoryLogger`] for unit testing theme code
//! without touching the filesystem or capturing console output.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, RwLock};

use crate::AppError;
use crate::app::{App, AppEnv};
use crate::logger::Logger;
use crate::page::Page;

/// Log level of a recorded entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// [`Logger::info`].
    Info,
    /// [`Logger::warn`].
    Warn,
    /// [`Logger::error`].
    Error,
}

/// A recorded log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogEntry {
    /// Entry level.
    pub level: LogLevel,
    /// Logged message.
    pub message: String,
}

/// [`Logger`] recording every entry in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    /// Create an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded entries, oldest first.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().unwrap().clone()
    }

    /// Messages recorded at `level`, oldest first.
    #[must_use]
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.level == level)
            .map(|entry| entry.message)
            .collect()
    }

    /// Recorded warnings.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.messages(LogLevel::Warn)
    }

    /// Recorded errors.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.messages(LogLevel::Error)
    }

    fn record(&self, level: LogLevel, message: &str) {
        self.entries.lock().unwrap().push(LogEntry {
            level,
            message: message.to_owned(),
        });
    }
}

impl Logger for MemoryLogger {
    fn info(&self, message: &str) {
        self.record(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.record(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.record(LogLevel::Error, message);
    }
}

/// Mock app for testing.
///
/// Holds pages in memory and records temp file writes. Use the builder
/// methods to configure the mock with test data.
///
/// # Example
///
/// ```ignore
/// use hope_app::{App, MockApp};
///
/// let app = MockApp::new()
///     .with_page("a.md", "A")
///     .with_page("b/c.md", "C");
///
/// app.write_temp("theme-hope/sidebar.js", "...").unwrap();
/// assert!(app.temp_file("theme-hope/sidebar.js").is_some());
/// ```
#[derive(Debug, Default)]
pub struct MockApp {
    pages: Vec<Page>,
    env: AppEnv,
    logger: MemoryLogger,
    temp_files: RwLock<HashMap<String, String>>,
}

impl MockApp {
    /// Create an empty mock app.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page with the given relative source path and title.
    #[must_use]
    pub fn with_page(mut self, file_path_relative: &str, title: &str) -> Self {
        self.pages.push(Page::new(file_path_relative, title));
        self
    }

    /// Add a fully specified page.
    #[must_use]
    pub fn with_page_record(mut self, page: Page) -> Self {
        self.pages.push(page);
        self
    }

    /// Set the debug flag.
    #[must_use]
    pub fn with_debug(mut self, is_debug: bool) -> Self {
        self.env.is_debug = is_debug;
        self
    }

    /// Recording logger of this app.
    #[must_use]
    pub fn memory_logger(&self) -> &MemoryLogger {
        &self.logger
    }

    /// Content written to a temp file, if any.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn temp_file(&self, file: &str) -> Option<String> {
        self.temp_files.read().unwrap().get(file).cloned()
    }
}

impl App for MockApp {
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
        self.temp_files
            .write()
            .unwrap()
            .insert(file.to_owned(), content.to_owned());
        Ok(self.env.temp_dir.join(file))
    }
}
