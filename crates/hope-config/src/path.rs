//! Route prefix normalization helpers.
//!
//! Sidebar prefixes are written by site authors in several shapes (`/guide/`,
//! `guide`, `/guide`). Page source paths are always relative (`guide/intro.md`),
//! so prefixes are normalized before they are compared against pages.

/// Append a trailing `/` unless the path already ends with one.
///
/// The empty path is returned as `/`.
#[must_use]
pub fn ensure_ending_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_owned()
    } else {
        format!("{path}/")
    }
}

/// Prepend a leading `/` unless the path already starts with one.
#[must_use]
pub fn ensure_leading_slash(path: &str) -> String {
    if path.starts_with('/') {
        path.to_owned()
    } else {
        format!("/{path}")
    }
}

/// Strip a single leading `/`.
#[must_use]
pub fn remove_leading_slash(path: &str) -> &str {
    path.strip_prefix('/').unwrap_or(path)
}

/// Turn a sidebar prefix into a page scope.
///
/// The scope has no leading slash and always ends with `/`, except for the
/// root scope, which is the empty string.
///
/// ```
/// use hope_config::path::scope_for_prefix;
///
/// assert_eq!(scope_for_prefix("/"), "");
/// assert_eq!(scope_for_prefix("/guide"), "guide/");
/// assert_eq!(scope_for_prefix("zh/guide/"), "zh/guide/");
/// ```
#[must_use]
pub fn scope_for_prefix(prefix: &str) -> String {
    remove_leading_slash(&ensure_ending_slash(prefix)).to_owned()
}

/// Whether a key is a valid locale path (`/` or `/xx/`).
#[must_use]
pub fn is_locale_path(path: &str) -> bool {
    path.starts_with('/') && path.ends_with('/')
}
