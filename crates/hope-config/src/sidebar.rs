//! Sidebar configuration types.
//!
//! A locale's `sidebar` field takes one of several shapes:
//!
//! ```text
//! sidebar = "structure"                          # SidebarOptions::Structure
//! sidebar = ["intro.md", { text = "Guide", prefix = "guide/", children = "structure" }]
//! sidebar = { "/guide/" = "structure", "/api/" = ["a.md"] }   # SidebarOptions::Prefixes
//! sidebar = false                                # SidebarOptions::Disabled
//! ```
//!
//! Values are parsed through [`serde_json::Value`] so any serde format works.
//! Parsing never fails: a value matching none of the known shapes is kept
//! raw in an `Invalid` variant, and the generator skips or reports it.
//! Prefix mappings keep their configuration order.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Marker requesting auto-generated structure.
pub const STRUCTURE: &str = "structure";

/// The `sidebar` field of a locale.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum SidebarOptions {
    /// No sidebar (`false` or absent).
    #[default]
    Disabled,
    /// Generate the whole locale from its page structure.
    Structure,
    /// Manual ordered item list.
    Items(SidebarArrayOptions),
    /// Per-prefix configuration.
    Prefixes(SidebarObjectOptions),
    /// Any other value, such as an unknown marker string.
    Invalid(Value),
}

/// Manual sidebar item list.
pub type SidebarArrayOptions = Vec<SidebarItem>;

/// Mapping from route prefix to its sidebar, in configuration order.
pub type SidebarObjectOptions = IndexMap<String, SidebarPrefixConfig>;

/// Value of one entry of a [`SidebarObjectOptions`] mapping.
pub type SidebarPrefixConfig = SidebarChildren;

/// Children of a group, or the value of a prefix mapping entry.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarChildren {
    /// Generate from page structure under the accumulated prefix.
    Structure,
    /// Manual ordered items.
    Items(Vec<SidebarItem>),
    /// Anything other than an array or the structure marker.
    Invalid(Value),
}

/// One sidebar entry.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarItem {
    /// Page source path, rendered with the page's own title.
    Page(String),
    /// Explicit link.
    Link(SidebarLink),
    /// Nested group.
    Group(SidebarGroup),
    /// Any value that is neither a page path, a link nor a group.
    Invalid(Value),
}

impl SidebarItem {
    /// Create a page item.
    #[must_use]
    pub fn page(path: impl Into<String>) -> Self {
        Self::Page(path.into())
    }
}

/// Explicit sidebar link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarLink {
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

/// Sidebar group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarGroup {
    /// Group title.
    #[serde(default)]
    pub text: String,
    /// Prefix segment appended to the parent prefix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Link of the group title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Icon name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    /// Whether the group can be collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collapsable: Option<bool>,
    /// Group children.
    pub children: SidebarChildren,
    /// Other display options, passed through.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SidebarGroup {
    /// Create a group with text and children, all display options unset.
    #[must_use]
    pub fn new(text: impl Into<String>, children: SidebarChildren) -> Self {
        Self {
            text: text.into(),
            prefix: None,
            link: None,
            icon: None,
            collapsable: None,
            children,
            extra: Map::new(),
        }
    }

    /// Set the prefix segment.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }
}

impl From<Value> for SidebarItem {
    fn from(value: Value) -> Self {
        match value {
            Value::String(path) => Self::Page(path),
            Value::Object(map) => Self::from_object(map),
            other => Self::Invalid(other),
        }
    }
}

impl SidebarItem {
    /// Parse an object as a group (has `children`) or a link (has `link`).
    fn from_object(map: Map<String, Value>) -> Self {
        let parsed = if map.contains_key("children") {
            serde_json::from_value(Value::Object(map.clone())).map(Self::Group)
        } else if map.contains_key("link") {
            serde_json::from_value(Value::Object(map.clone())).map(Self::Link)
        } else {
            return Self::Invalid(Value::Object(map));
        };
        parsed.unwrap_or_else(|_| Self::Invalid(Value::Object(map)))
    }
}

impl From<Value> for SidebarChildren {
    fn from(value: Value) -> Self {
        match value {
            Value::String(marker) if marker == STRUCTURE => Self::Structure,
            Value::Array(items) => Self::Items(items.into_iter().map(SidebarItem::from).collect()),
            other => Self::Invalid(other),
        }
    }
}

impl From<Value> for SidebarOptions {
    fn from(value: Value) -> Self {
        match value {
            Value::Null | Value::Bool(false) => Self::Disabled,
            Value::String(marker) if marker == STRUCTURE => Self::Structure,
            Value::Array(items) => Self::Items(items.into_iter().map(SidebarItem::from).collect()),
            Value::Object(map) => Self::Prefixes(
                map.into_iter()
                    .map(|(prefix, config)| (prefix, SidebarChildren::from(config)))
                    .collect(),
            ),
            other => Self::Invalid(other),
        }
    }
}

macro_rules! deserialize_via_value {
    ($($ty:ty),+) => {
        $(
            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    Value::deserialize(deserializer).map(Self::from)
                }
            }
        )+
    };
}

deserialize_via_value!(SidebarItem, SidebarChildren, SidebarOptions);

impl Serialize for SidebarItem {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Page(path) => serializer.serialize_str(path),
            Self::Link(link) => link.serialize(serializer),
            Self::Group(group) => group.serialize(serializer),
            Self::Invalid(value) => value.serialize(serializer),
        }
    }
}

impl Serialize for SidebarChildren {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Structure => serializer.serialize_str(STRUCTURE),
            Self::Items(items) => items.serialize(serializer),
            Self::Invalid(value) => value.serialize(serializer),
        }
    }
}

impl Serialize for SidebarOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Disabled => serializer.serialize_bool(false),
            Self::Structure => serializer.serialize_str(STRUCTURE),
            Self::Items(items) => items.serialize(serializer),
            Self::Prefixes(prefixes) => prefixes.serialize(serializer),
            Self::Invalid(value) => value.serialize(serializer),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_structure_marker() {
        let options: SidebarOptions = serde_json::from_value(json!("structure")).unwrap();
        assert_eq!(options, SidebarOptions::Structure);
    }

    #[test]
    fn test_parse_false_disables_sidebar() {
        let options: SidebarOptions = serde_json::from_value(json!(false)).unwrap();
        assert_eq!(options, SidebarOptions::Disabled);
    }

    #[test]
    fn test_parse_unknown_string_kept_as_invalid() {
        let options: SidebarOptions = serde_json::from_value(json!("auto")).unwrap();
        assert_eq!(options, SidebarOptions::Invalid(json!("auto")));
    }

    #[test]
    fn test_parse_item_list() {
        let options: SidebarOptions = serde_json::from_value(json!([
            "intro.md",
            { "text": "Home", "link": "/" },
            { "text": "Guide", "prefix": "guide/", "children": "structure" }
        ]))
        .unwrap();

        let SidebarOptions::Items(items) = options else {
            panic!("expected items");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0], SidebarItem::page("intro.md"));
        assert!(matches!(&items[1], SidebarItem::Link(link) if link.link == "/"));
        let SidebarItem::Group(group) = &items[2] else {
            panic!("expected group");
        };
        assert_eq!(group.prefix.as_deref(), Some("guide/"));
        assert_eq!(group.children, SidebarChildren::Structure);
    }

    #[test]
    fn test_parse_prefix_map() {
        let options: SidebarOptions = serde_json::from_value(json!({
            "/guide/": "structure",
            "/api/": ["index.md"]
        }))
        .unwrap();

        let SidebarOptions::Prefixes(prefixes) = options else {
            panic!("expected prefixes");
        };
        assert_eq!(prefixes["/guide/"], SidebarChildren::Structure);
        assert_eq!(
            prefixes["/api/"],
            SidebarChildren::Items(vec![SidebarItem::page("index.md")])
        );
    }

    #[test]
    fn test_non_array_children_kept_as_invalid() {
        let item: SidebarItem = serde_json::from_value(json!({
            "text": "Broken",
            "children": { "not": "an array" }
        }))
        .unwrap();

        let SidebarItem::Group(group) = item else {
            panic!("expected group");
        };
        assert_eq!(
            group.children,
            SidebarChildren::Invalid(json!({ "not": "an array" }))
        );
    }

    #[test]
    fn test_group_extra_options_pass_through() {
        let value = json!({
            "text": "Guide",
            "prefix": "guide/",
            "collapsable": true,
            "customFlag": 3,
            "children": ["a.md"]
        });
        let item: SidebarItem = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn test_malformed_items_kept_as_invalid() {
        let options: SidebarOptions = serde_json::from_value(json!([
            "a.md",
            42,
            { "text": "no link" },
            { "text": 7, "children": [] }
        ]))
        .unwrap();

        assert_eq!(
            options,
            SidebarOptions::Items(vec![
                SidebarItem::page("a.md"),
                SidebarItem::Invalid(json!(42)),
                SidebarItem::Invalid(json!({ "text": "no link" })),
                SidebarItem::Invalid(json!({ "text": 7, "children": [] })),
            ])
        );
    }

    #[test]
    fn test_prefix_map_keeps_config_order() {
        let options: SidebarOptions = serde_json::from_str(
            r#"{ "/guide/": "structure", "/api/": "structure", "/blog/": [] }"#,
        )
        .unwrap();

        let SidebarOptions::Prefixes(prefixes) = options else {
            panic!("expected prefixes");
        };
        assert_eq!(
            prefixes.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["/guide/", "/api/", "/blog/"]
        );
    }

    #[test]
    fn test_parse_from_toml() {
        let toml = r#"
sidebar = ["intro.md", { text = "Guide", prefix = "guide/", children = "structure" }]
"#;
        #[derive(Deserialize)]
        struct Locale {
            sidebar: SidebarOptions,
        }
        let locale: Locale = toml::from_str(toml).unwrap();
        assert!(matches!(locale.sidebar, SidebarOptions::Items(items) if items.len() == 2));
    }
}
