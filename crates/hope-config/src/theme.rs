//! Theme options and the resolved per-locale theme configuration.
//!
//! [`ThemeOptions`] is what site authors write: one flat object whose
//! root-level keys apply to the `/` locale, plus a `locales` object with
//! per-locale overrides. [`ThemeConfig`] is the resolved shape the generator
//! reads, one [`LocaleConfig`] per locale path.
//!
//! # Resolution
//!
//! - Root-level options (everything except `locales`) form the `/` locale.
//! - Every `locales` entry is merged over the root options; locale keys win.
//! - A locale without `sidebar` inherits the root `sidebar`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ConfigError;
use crate::path::is_locale_path;
use crate::sidebar::SidebarOptions;

/// Key holding per-locale overrides.
const LOCALES_KEY: &str = "locales";

/// Root locale path.
pub const ROOT_LOCALE: &str = "/";

/// Theme options as written by site authors.
///
/// Kept as a JSON object: the theme accepts far more keys than this crate
/// interprets, and unknown keys must survive untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeOptions(Map<String, Value>);

impl ThemeOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an option by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Set an option, returning the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Whether no options are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Consume into the underlying object.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ThemeOptions {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<ThemeOptions> for Value {
    fn from(options: ThemeOptions) -> Self {
        Value::Object(options.0)
    }
}

/// Resolved settings of one locale.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Sidebar configuration.
    #[serde(default)]
    pub sidebar: SidebarOptions,
    /// Remaining locale settings, passed through.
    #[serde(flatten)]
    pub settings: Map<String, Value>,
}

/// Resolved theme configuration: locale path → settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Per-locale settings, keyed by locale path (`/`, `/zh/`).
    pub locales: BTreeMap<String, LocaleConfig>,
}

impl ThemeConfig {
    /// Create a configuration with a single root locale.
    #[must_use]
    pub fn with_root(locale: LocaleConfig) -> Self {
        let mut locales = BTreeMap::new();
        locales.insert(ROOT_LOCALE.to_owned(), locale);
        Self { locales }
    }

    /// Resolve theme options into per-locale configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `locales` is not an object or a
    /// locale key is not of the form `/` or `/xx/`, and [`ConfigError::Json`]
    /// if a locale's settings do not parse.
    pub fn from_options(options: &ThemeOptions) -> Result<Self, ConfigError> {
        let mut root = options.as_map().clone();
        let overrides = match root.remove(LOCALES_KEY) {
            None => Map::new(),
            Some(Value::Object(map)) => map,
            Some(other) => {
                return Err(ConfigError::Validation(format!(
                    "{LOCALES_KEY} must be an object, got {other}"
                )));
            }
        };

        let mut merged = BTreeMap::new();
        merged.insert(ROOT_LOCALE.to_owned(), root.clone());

        for (locale_path, locale_options) in overrides {
            if !is_locale_path(&locale_path) {
                return Err(ConfigError::Validation(format!(
                    "locale path {locale_path:?} must start and end with '/'"
                )));
            }
            let Value::Object(locale_options) = locale_options else {
                return Err(ConfigError::Validation(format!(
                    "{LOCALES_KEY}.{locale_path} must be an object"
                )));
            };

            let mut locale = root.clone();
            locale.extend(locale_options);
            merged.insert(locale_path, locale);
        }

        let locales = merged
            .into_iter()
            .map(|(path, settings)| {
                let locale = serde_json::from_value(Value::Object(settings))?;
                Ok((path, locale))
            })
            .collect::<Result<_, ConfigError>>()?;

        Ok(Self { locales })
    }
}
