//! Legacy site configuration.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::theme::ThemeFunction;

/// Site-level configuration as written for legacy setups.
///
/// Legacy configs put theme options under `themeConfig`; current ones set
/// `theme` to a theme function.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(from = "RawUserConfig")]
pub struct UserConfig {
    /// Theme entry.
    pub theme: Option<ThemeEntry>,
    /// Legacy theme options.
    pub theme_config: Option<Value>,
    /// Other site options, passed through.
    pub extra: Map<String, Value>,
}

/// Value of the `theme` field.
#[derive(Clone, Debug)]
pub enum ThemeEntry {
    /// A theme function.
    Function(ThemeFunction),
    /// Anything else, such as a theme name from a config file.
    Value(Value),
}

impl ThemeEntry {
    /// Theme function, if this entry is one.
    #[must_use]
    pub fn as_function(&self) -> Option<&ThemeFunction> {
        match self {
            Self::Function(function) => Some(function),
            Self::Value(_) => None,
        }
    }
}

#[derive(Deserialize)]
struct RawUserConfig {
    #[serde(default)]
    theme: Option<Value>,
    #[serde(default, rename = "themeConfig")]
    theme_config: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl From<RawUserConfig> for UserConfig {
    fn from(raw: RawUserConfig) -> Self {
        Self {
            theme: raw.theme.map(ThemeEntry::Value),
            theme_config: raw.theme_config,
            extra: raw.extra,
        }
    }
}
