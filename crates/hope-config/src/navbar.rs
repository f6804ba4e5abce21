//! Navbar configuration types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Navbar item list.
pub type NavbarOptions = Vec<NavbarItem>;

/// One navbar entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavbarItem {
    /// Page source path, rendered with the page's own title.
    Page(String),
    /// Dropdown group.
    Group(NavbarGroup),
    /// Explicit link.
    Link(NavbarLink),
}

/// Explicit navbar link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarLink {
    /// Display text.
    pub text: String,
    /// Link target.
    pub link: String,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Other display options, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dropdown navbar group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavbarGroup {
    /// Group title.
    pub text: String,
    /// Prefix prepended to children paths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Dropdown entries.
    pub children: Vec<NavbarItem>,
    /// Other display options, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_mixed_navbar() {
        let navbar: NavbarOptions = serde_json::from_value(json!([
            "/guide/",
            { "text": "Blog", "link": "/blog/", "icon": "blog" },
            {
                "text": "More",
                "prefix": "/more/",
                "children": ["a.md", { "text": "B", "link": "b.md" }]
            }
        ]))
        .unwrap();

        assert_eq!(navbar[0], NavbarItem::Page("/guide/".to_owned()));
        assert!(matches!(
            &navbar[1],
            NavbarItem::Link(link) if link.icon.as_deref() == Some("blog")
        ));
        assert!(matches!(&navbar[2], NavbarItem::Group(group) if group.children.len() == 2));
    }
}
