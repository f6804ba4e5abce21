//! Collection of route prefixes that request generated structure.
//!
//! Walks every locale's sidebar configuration and returns the prefixes whose
//! sidebar (or some nested group's children) is the `"structure"` marker.
//! Nested group prefixes accumulate: a group with prefix `api/` inside a
//! group with prefix `/guide/` contributes `/guide/api/`.
//!
//! A group whose children are neither an array nor the marker is reported
//! through the logger and contributes nothing. Other unrecognised values
//! (items that are not groups, prefix mapping values, unknown sidebar
//! shapes) are skipped.

use hope_app::Logger;
use hope_config::{STRUCTURE, SidebarChildren, SidebarItem, SidebarOptions, ThemeConfig};
use serde_json::Value;

/// Collect all prefixes needing generated structure, in locale order.
#[must_use]
pub fn collect_generate_paths(theme_config: &ThemeConfig, logger: &dyn Logger) -> Vec<String> {
    let mut result = Vec::new();

    for (locale_path, locale) in &theme_config.locales {
        match &locale.sidebar {
            SidebarOptions::Disabled => {}
            SidebarOptions::Structure => result.push(locale_path.clone()),
            SidebarOptions::Items(items) => scan_items(items, "", logger, &mut result),
            SidebarOptions::Prefixes(prefixes) => {
                for (prefix, config) in prefixes {
                    match config {
                        SidebarChildren::Structure => result.push(prefix.clone()),
                        SidebarChildren::Items(items) => {
                            scan_items(items, prefix, logger, &mut result);
                        }
                        SidebarChildren::Invalid(value) => {
                            tracing::debug!(
                                locale = %locale_path,
                                prefix = %prefix,
                                %value,
                                "Skipped sidebar prefix config"
                            );
                        }
                    }
                }
            }
            SidebarOptions::Invalid(value) => {
                tracing::debug!(
                    locale = %locale_path,
                    %value,
                    "Skipped unknown sidebar config"
                );
            }
        }
    }

    tracing::debug!(paths = ?result, "Collected sidebar generate paths");
    result
}

/// Collect prefixes from a manual item list.
///
/// # Arguments
///
/// * `children` - Item list to scan; anything but an array is reported
/// * `prefix` - Accumulated prefix of the enclosing groups
#[must_use]
pub fn generate_paths(
    children: &SidebarChildren,
    prefix: &str,
    logger: &dyn Logger,
) -> Vec<String> {
    let mut result = Vec::new();
    match children {
        SidebarChildren::Items(items) => scan_items(items, prefix, logger, &mut result),
        SidebarChildren::Structure => {
            report_invalid(&Value::from(STRUCTURE), prefix, logger);
        }
        SidebarChildren::Invalid(value) => report_invalid(value, prefix, logger),
    }
    result
}

/// Handle a group's children.
fn scan_children(
    children: &SidebarChildren,
    prefix: &str,
    logger: &dyn Logger,
    result: &mut Vec<String>,
) {
    match children {
        SidebarChildren::Structure => result.push(prefix.to_owned()),
        SidebarChildren::Items(items) => scan_items(items, prefix, logger, result),
        SidebarChildren::Invalid(value) => report_invalid(value, prefix, logger),
    }
}

fn scan_items(items: &[SidebarItem], prefix: &str, logger: &dyn Logger, result: &mut Vec<String>) {
    for item in items {
        if let SidebarItem::Group(group) = item {
            let child_prefix = format!("{prefix}{}", group.prefix.as_deref().unwrap_or_default());
            scan_children(&group.children, &child_prefix, logger, result);
        }
    }
}

fn report_invalid(value: &Value, prefix: &str, logger: &dyn Logger) {
    let location = if prefix.is_empty() {
        String::new()
    } else {
        format!(" under {prefix}")
    };
    logger.error(&format!(
        "Expecting array, but getting invalid sidebar config{location} with: {value}"
    ));
}
