//! Page records supplied by the site build.
//!
//! Pages are produced by the content loading pipeline and are read-only here.
//! A page manifest (`pages.json` or `pages.yaml`) is a list of [`Page`]
//! records, used by the CLI to stand in for that pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::AppError;

/// Directory README filename.
pub const README: &str = "README.md";

/// A page known to the site build.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique page key.
    #[serde(default)]
    pub key: String,
    /// Route path (e.g., "/", "/guide/intro.html").
    pub path: String,
    /// Source path relative to the source directory (e.g., "guide/intro.md").
    /// `None` for pages without a source file.
    #[serde(default)]
    pub file_path_relative: Option<String>,
    /// Page title.
    #[serde(default)]
    pub title: String,
    /// Page frontmatter.
    #[serde(default)]
    pub frontmatter: PageFrontmatter,
}

/// Frontmatter fields used for sidebar grouping and ordering.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageFrontmatter {
    /// Sort order among siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Page date (ISO 8601, compared lexically).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Page icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// `false` excludes the page from generated sidebars.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
    /// Directory options, read from a directory's `README.md`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<DirFrontmatter>,
    /// Remaining frontmatter.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Directory-level options set in a directory's `README.md`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirFrontmatter {
    /// Group title (defaults to the README title).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Group icon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Sort order of the directory among its siblings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    /// Whether the group can be collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsable: Option<bool>,
    /// Make the README the group link instead of a child.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<bool>,
    /// `false` excludes the whole directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<bool>,
}

impl Page {
    /// Create a page from its relative source path and title.
    ///
    /// The route path is derived the way the site build does it:
    /// `README.md` maps to its directory, other files to `.html`.
    #[must_use]
    pub fn new(file_path_relative: impl Into<String>, title: impl Into<String>) -> Self {
        let file_path_relative = file_path_relative.into();
        let path = route_for_source(&file_path_relative);
        Self {
            key: path.clone(),
            path,
            file_path_relative: Some(file_path_relative),
            title: title.into(),
            frontmatter: PageFrontmatter::default(),
        }
    }

    /// Replace the frontmatter.
    #[must_use]
    pub fn with_frontmatter(mut self, frontmatter: PageFrontmatter) -> Self {
        self.frontmatter = frontmatter;
        self
    }
}

/// Derive a route path from a relative source path.
fn route_for_source(source: &str) -> String {
    if source == README {
        return "/".to_owned();
    }
    if let Some(dir) = source.strip_suffix("/README.md") {
        return format!("/{dir}/");
    }
    let stem = source.strip_suffix(".md").unwrap_or(source);
    format!("/{stem}.html")
}

/// Load a page manifest, choosing JSON or YAML by extension.
///
/// # Errors
///
/// Returns [`AppError::Io`] if the file cannot be read and
/// [`AppError::Manifest`] if it does not parse.
pub fn load_pages(path: &Path) -> Result<Vec<Page>, AppError> {
    let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pages = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml" | "yml") => serde_yaml::from_str(&content)
            .map_err(|e| AppError::Manifest(format!("{}: {e}", path.display())))?,
        _ => serde_json::from_str(&content)
            .map_err(|e| AppError::Manifest(format!("{}: {e}", path.display())))?,
    };

    tracing::debug!(path = %path.display(), "Loaded page manifest");
    Ok(pages)
}
