//! Legacy theme option conversion.

use serde_json::{Map, Value};

use hope_config::ThemeOptions;

/// Option keys renamed since the legacy shape: `(legacy, current)`.
const RENAMED_KEYS: &[(&str, &str)] = &[("nav", "navbar"), ("sidebarDepth", "headerDepth")];

/// Plugin options that moved from the top level under `plugins`.
const PLUGIN_KEYS: &[&str] = &[
    "mdEnhance",
    "comment",
    "copyCode",
    "feed",
    "pwa",
    "photoSwipe",
    "seo",
    "sitemap",
    "git",
    "components",
];

const FOOTER_KEY: &str = "footer";
const LOCALES_KEY: &str = "locales";
const PLUGINS_KEY: &str = "plugins";

/// Convert legacy theme options into the current shape.
///
/// Renamed keys take their new names and plugin options move under
/// `plugins`. An object `footer` splits into `footer`, `displayFooter` and
/// `copyright`. Every `locales` entry is converted the same way. When both a
/// legacy key and its replacement are present the replacement wins. Unknown
/// keys pass through.
#[must_use]
pub fn convert_theme_config(options: ThemeOptions) -> ThemeOptions {
    let mut options = options.into_inner();

    convert_locale_options(&mut options, "");
    move_plugin_options(&mut options);

    if let Some(Value::Object(locales)) = options.get_mut(LOCALES_KEY) {
        for (locale_path, locale) in locales.iter_mut() {
            if let Value::Object(locale) = locale {
                convert_locale_options(locale, locale_path);
            }
        }
    }

    ThemeOptions::from(options)
}

/// Apply renames and the footer split to one option level.
fn convert_locale_options(options: &mut Map<String, Value>, scope: &str) {
    for &(legacy, current) in RENAMED_KEYS {
        let Some(value) = options.remove(legacy) else {
            continue;
        };
        if options.contains_key(current) {
            tracing::debug!(
                scope,
                legacy,
                current,
                "Dropped legacy option shadowed by current one"
            );
        } else {
            tracing::debug!(scope, legacy, current, "Renamed legacy option");
            options.insert(current.to_owned(), value);
        }
    }

    match options.remove(FOOTER_KEY) {
        Some(Value::Object(footer)) => split_footer(options, footer, scope),
        Some(other) => {
            options.insert(FOOTER_KEY.to_owned(), other);
        }
        None => {}
    }
}

/// Split a legacy `footer` object into flat options.
fn split_footer(options: &mut Map<String, Value>, mut footer: Map<String, Value>, scope: &str) {
    tracing::debug!(scope, "Split legacy footer object");

    for (field, target) in [
        ("content", FOOTER_KEY),
        ("display", "displayFooter"),
        ("copyright", "copyright"),
    ] {
        if let Some(value) = footer.remove(field) {
            options.entry(target).or_insert(value);
        }
    }
}

/// Move top level plugin options under `plugins`.
fn move_plugin_options(options: &mut Map<String, Value>) {
    let mut plugins = match options.remove(PLUGINS_KEY) {
        None => Map::new(),
        Some(Value::Object(plugins)) => plugins,
        Some(other) => {
            tracing::debug!(
                plugins = %other,
                "Kept legacy plugin options, plugins is not an object"
            );
            options.insert(PLUGINS_KEY.to_owned(), other);
            return;
        }
    };

    for &key in PLUGIN_KEYS {
        let Some(value) = options.remove(key) else {
            continue;
        };
        if plugins.contains_key(key) {
            tracing::debug!(
                plugin = key,
                "Dropped legacy plugin option shadowed by plugins entry"
            );
        } else {
            tracing::debug!(plugin = key, "Moved legacy plugin option under plugins");
            plugins.insert(key.to_owned(), value);
        }
    }

    if !plugins.is_empty() {
        options.insert(PLUGINS_KEY.to_owned(), Value::Object(plugins));
    }
}
