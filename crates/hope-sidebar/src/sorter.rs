//! Sibling ordering for generated sidebars.
//!
//! A [`SidebarSorter`] is either a list of [`SorterKey`]s applied in turn
//! (the first key that distinguishes two nodes decides) or a custom
//! comparator.
//!
//! # Order Semantics
//!
//! `order` values split into three bands:
//!
//! ```text
//! 1, 2, 3 ...   positive (and zero), ascending
//! (no order)
//! -3, -2, -1    negative, ascending, so -1 is last
//! ```
//!
//! Dates are compared as instants. RFC 3339 timestamps are normalized to UTC;
//! `YYYY-MM-DD`, `YYYY/MM/DD` and `YYYY-MM-DD HH:MM[:SS]` are read as given,
//! digits need not be zero-padded. Unparseable dates count as undated.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::info::SidebarInfo;

/// Comparator over sidebar nodes.
pub type SidebarCompareFn = dyn Fn(&SidebarInfo<'_>, &SidebarInfo<'_>) -> Ordering + Send + Sync;

/// One criterion of a key-based sorter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SorterKey {
    /// README files first.
    Readme,
    /// By `order`, see the module docs.
    Order,
    /// By date, older first; undated last.
    Date,
    /// By date, newer first; undated last.
    DateDesc,
    /// By title, case-insensitive.
    Title,
    /// By file or directory name.
    Filename,
}

/// Error for sorter names that match no [`SorterKey`].
#[derive(Debug, thiserror::Error)]
#[error("Unknown sidebar sorter: {0}")]
pub struct UnknownSorterKey(pub String);

impl FromStr for SorterKey {
    type Err = UnknownSorterKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "readme" => Ok(Self::Readme),
            "order" => Ok(Self::Order),
            "date" => Ok(Self::Date),
            "date-desc" => Ok(Self::DateDesc),
            "title" => Ok(Self::Title),
            "filename" => Ok(Self::Filename),
            other => Err(UnknownSorterKey(other.to_owned())),
        }
    }
}

/// Keys used when no sorter is configured.
pub const DEFAULT_SORTER_KEYS: [SorterKey; 4] = [
    SorterKey::Readme,
    SorterKey::Order,
    SorterKey::Title,
    SorterKey::Filename,
];

/// Sibling ordering policy.
#[derive(Clone)]
pub enum SidebarSorter {
    /// Apply keys in turn.
    Keys(Vec<SorterKey>),
    /// Custom comparator.
    Custom(Arc<SidebarCompareFn>),
}

impl Default for SidebarSorter {
    fn default() -> Self {
        Self::Keys(DEFAULT_SORTER_KEYS.to_vec())
    }
}

impl fmt::Debug for SidebarSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keys(keys) => f.debug_tuple("Keys").field(keys).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl SidebarSorter {
    /// Create a sorter from a custom comparator.
    pub fn custom(
        compare: impl Fn(&SidebarInfo<'_>, &SidebarInfo<'_>) -> Ordering + Send + Sync + 'static,
    ) -> Self {
        Self::Custom(Arc::new(compare))
    }

    /// Parse sorter key names (e.g., `["readme", "date-desc"]`).
    ///
    /// An empty list yields the default sorter.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSorterKey`] for the first unknown name.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, UnknownSorterKey> {
        if names.is_empty() {
            return Ok(Self::default());
        }
        names
            .iter()
            .map(|name| name.as_ref().parse())
            .collect::<Result<_, _>>()
            .map(Self::Keys)
    }

    /// Compare two sibling nodes.
    #[must_use]
    pub fn compare(&self, a: &SidebarInfo<'_>, b: &SidebarInfo<'_>) -> Ordering {
        match self {
            Self::Keys(keys) => keys
                .iter()
                .map(|key| compare_by_key(*key, a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal),
            Self::Custom(compare) => compare(a, b),
        }
    }
}

fn compare_by_key(key: SorterKey, a: &SidebarInfo<'_>, b: &SidebarInfo<'_>) -> Ordering {
    match key {
        SorterKey::Readme => b.is_readme().cmp(&a.is_readme()),
        SorterKey::Order => compare_order(a.order(), b.order()),
        SorterKey::Date => compare_present_first(parsed_date(a), parsed_date(b), |x, y| x.cmp(y)),
        SorterKey::DateDesc => {
            compare_present_first(parsed_date(a), parsed_date(b), |x, y| y.cmp(x))
        }
        SorterKey::Title => a
            .title()
            .to_lowercase()
            .cmp(&b.title().to_lowercase())
            .then_with(|| a.title().cmp(b.title())),
        SorterKey::Filename => a.name().cmp(b.name()),
    }
}

fn parsed_date(info: &SidebarInfo<'_>) -> Option<NaiveDateTime> {
    info.date().and_then(parse_date)
}

/// Parse a frontmatter date.
fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.naive_utc());
    }
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .or_else(|| {
            ["%Y-%m-%d", "%Y/%m/%d"]
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

/// Rank of an `order` value: positive band, unordered, negative band.
fn order_band(order: Option<i64>) -> u8 {
    match order {
        Some(value) if value >= 0 => 0,
        None => 1,
        Some(_) => 2,
    }
}

fn compare_order(a: Option<i64>, b: Option<i64>) -> Ordering {
    order_band(a)
        .cmp(&order_band(b))
        .then_with(|| a.cmp(&b))
}

fn compare_present_first<T>(
    a: Option<T>,
    b: Option<T>,
    compare: impl Fn(&T, &T) -> Ordering,
) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => compare(&x, &y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
