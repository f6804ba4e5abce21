//! Generated sidebar data and its persistence.
//!
//! [`get_sidebar_data`] computes one item list per generate path;
//! [`prepare_sidebar_data`] serializes the result as a JS module into the
//! app's temp directory:
//!
//! ```text
//! export const sidebarData = {"/":["a.md",{"text":"b","prefix":"b/","children":["c.md"]}]};
//! ```

use std::path::PathBuf;

use hope_app::App;
use hope_config::path::{ensure_ending_slash, ensure_leading_slash, scope_for_prefix};
use hope_config::{SidebarChildren, SidebarItem, ThemeConfig};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::SidebarError;
use crate::info::get_sidebar_info;
use crate::items::get_sidebar_items;
use crate::paths::collect_generate_paths;
use crate::sorter::SidebarSorter;

/// Temp file receiving the generated module.
pub const SIDEBAR_TEMP_FILE: &str = "theme-hope/sidebar.js";

/// Generated sidebar items keyed by generate path.
///
/// Keeps insertion order; serializes as a JSON object.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SidebarData {
    entries: Vec<(String, Vec<SidebarItem>)>,
}

impl SidebarData {
    /// Create empty data.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the items of a path.
    ///
    /// An existing entry keeps its position and gets the new items.
    ///
    /// # Returns
    ///
    /// The replaced items, if the path was already present.
    pub fn insert(&mut self, path: String, items: Vec<SidebarItem>) -> Option<Vec<SidebarItem>> {
        if let Some((_, existing)) = self.entries.iter_mut().find(|(key, _)| *key == path) {
            return Some(std::mem::replace(existing, items));
        }
        self.entries.push((path, items));
        None
    }

    /// Items of a path.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&[SidebarItem]> {
        self.entries
            .iter()
            .find(|(key, _)| key == path)
            .map(|(_, items)| items.as_slice())
    }

    /// Paths in insertion order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Full page paths of a path's items, depth first.
    ///
    /// Relative page paths are joined with the accumulated group prefixes;
    /// explicit links are listed as written.
    ///
    /// ```text
    /// "/" → ["a.md", { prefix: "b/", children: ["c.md"] }]
    ///     → ["/a.md", "/b/c.md"]
    /// ```
    #[must_use]
    pub fn resolved_links(&self, path: &str) -> Option<Vec<String>> {
        let items = self.get(path)?;
        let base = ensure_leading_slash(&ensure_ending_slash(path));
        let mut links = Vec::new();
        collect_links(items, &base, &mut links);
        Some(links)
    }

    /// Render the JS module written to the temp directory.
    ///
    /// # Errors
    ///
    /// Returns [`SidebarError::Serialize`] if serialization fails.
    pub fn to_module(&self) -> Result<String, SidebarError> {
        Ok(format!(
            "export const sidebarData = {};\n",
            serde_json::to_string(self)?
        ))
    }
}

fn join(base: &str, path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("{base}{path}")
    }
}

fn collect_links(items: &[SidebarItem], base: &str, links: &mut Vec<String>) {
    for item in items {
        match item {
            SidebarItem::Page(path) => links.push(join(base, path)),
            SidebarItem::Link(link) => links.push(link.link.clone()),
            SidebarItem::Group(group) => {
                let group_base = match &group.prefix {
                    Some(prefix) => join(base, prefix),
                    None => base.to_owned(),
                };
                if let Some(link) = &group.link {
                    links.push(join(&group_base, link));
                }
                if let SidebarChildren::Items(children) = &group.children {
                    collect_links(children, &group_base, links);
                }
            }
            SidebarItem::Invalid(_) => {}
        }
    }
}

impl Serialize for SidebarData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (path, items) in &self.entries {
            map.serialize_entry(path, items)?;
        }
        map.end()
    }
}

/// Compute generated sidebar data for every path requesting structure.
///
/// Each path is normalized into a page scope (leading slash stripped,
/// trailing slash ensured) and scanned against the full page list. When a
/// path is collected twice, the later result wins.
///
/// If the app runs in debug mode, the computed data is logged at info level.
///
/// # Arguments
///
/// * `app` - Site build providing pages and the logger
/// * `theme_config` - Resolved theme configuration
/// * `sorter` - Sibling ordering, default when `None`
#[must_use]
pub fn get_sidebar_data(
    app: &dyn App,
    theme_config: &ThemeConfig,
    sorter: Option<&SidebarSorter>,
) -> SidebarData {
    let default_sorter = SidebarSorter::default();
    let sorter = sorter.unwrap_or(&default_sorter);
    let logger = app.logger();

    let mut data = SidebarData::new();
    for path in collect_generate_paths(theme_config, logger) {
        let scope = scope_for_prefix(&path);
        let items = get_sidebar_items(&get_sidebar_info(app.pages(), &scope, sorter));
        if data.insert(path.clone(), items).is_some() {
            tracing::debug!(path = %path, "Duplicate sidebar generate path, keeping last");
        }
    }

    if app.env().is_debug {
        match serde_json::to_string_pretty(&data) {
            Ok(json) => logger.info(&format!("Sidebar structure data: {json}")),
            Err(e) => tracing::debug!(error = %e, "Failed to format sidebar data"),
        }
    }

    data
}

/// Compute sidebar data and write it to [`SIDEBAR_TEMP_FILE`].
///
/// # Returns
///
/// Location of the written module.
///
/// # Errors
///
/// Returns [`SidebarError::App`] if the temp file cannot be written.
pub fn prepare_sidebar_data(
    app: &dyn App,
    theme_config: &ThemeConfig,
    sorter: Option<&SidebarSorter>,
) -> Result<PathBuf, SidebarError> {
    let data = get_sidebar_data(app, theme_config, sorter);
    let module = data.to_module()?;
    let path = app.write_temp(SIDEBAR_TEMP_FILE, &module)?;

    tracing::info!(entries = data.len(), path = %path.display(), "Prepared sidebar data");
    Ok(path)
}
