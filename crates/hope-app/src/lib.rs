//! Site build application seam for hope.
//!
//! Theme code never loads content or touches the output directory itself.
//! It talks to the surrounding site build through the [`App`] trait:
//!
//! - [`App::pages`] exposes the already-loaded [`Page`] list
//! - [`App::write_temp`] persists generated modules
//! - [`App::logger`] is the shared build [`Logger`]
//!
//! # Implementations
//!
//! - [`FsApp`] writes temp files under [`AppEnv::temp_dir`]
//! - `MockApp` keeps everything in memory (behind the `mock` feature flag)

mod app;
mod logger;
#[cfg(feature = "mock")]
mod mock;
mod page;

use std::path::PathBuf;

pub use app::{App, AppEnv, FsApp};
pub use logger::{Logger, TracingLogger};
#[cfg(feature = "mock")]
pub use mock::{LogEntry, LogLevel, MemoryLogger, MockApp};
pub use page::{DirFrontmatter, Page, PageFrontmatter, README, load_pages};

/// Application error.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// I/O error on a specific path.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// Affected path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
    /// Page manifest could not be parsed.
    #[error("Invalid page manifest: {0}")]
    Manifest(String),
}
