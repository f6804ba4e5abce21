//! CLI error types.

use hope_app::AppError;
use hope_config::ConfigError;
use hope_sidebar::{SidebarError, UnknownSorterKey};
use hope_theme::ThemeError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    App(#[from] AppError),

    #[error("{0}")]
    Theme(#[from] ThemeError),

    #[error("{0}")]
    Sidebar(#[from] SidebarError),

    #[error("{0}")]
    Sorter(#[from] UnknownSorterKey),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
