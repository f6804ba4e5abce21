//! Sidebar info tree built from the page list.
//!
//! # Layout Rules
//!
//! Pages are scanned under a scope (e.g., `guide/`) and grouped by their
//! immediate subdirectory:
//! - Files directly in the scope become [`SidebarInfo::File`] leaves
//! - Each subdirectory becomes a [`SidebarInfo::Dir`] branch, built recursively
//! - A directory `README.md` supplies the directory title, order and group info
//! - `index: false` in frontmatter hides a page; `dir.index: false` in a
//!   README hides the whole directory
//! - `dir.link: true` turns the README into the group link instead of a child
//! - Directories left without children or link are dropped
//!
//! Nodes borrow from the page list; nothing is copied out of it except the
//! path segments used as names.

use std::collections::BTreeMap;

use hope_app::{Page, README};

use crate::sorter::SidebarSorter;

/// Node of the sidebar info tree.
#[derive(Clone, Debug, PartialEq)]
pub enum SidebarInfo<'a> {
    /// Page file directly inside the current directory.
    File(SidebarFileInfo<'a>),
    /// Subdirectory with its own children.
    Dir(SidebarDirInfo<'a>),
}

/// Leaf node for a page file.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarFileInfo<'a> {
    /// File name relative to the containing directory (e.g., "intro.md").
    pub filename: &'a str,
    /// Page title.
    pub title: &'a str,
    /// Sort order from frontmatter.
    pub order: Option<i64>,
    /// Page date from frontmatter.
    pub date: Option<&'a str>,
    /// Source page.
    pub page: &'a Page,
}

/// Display options of a directory group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidebarGroupInfo {
    /// Group icon.
    pub icon: Option<String>,
    /// Whether the group can be collapsed.
    pub collapsable: Option<bool>,
    /// Group link, relative to the group prefix.
    pub link: Option<String>,
}

/// Branch node for a directory.
#[derive(Clone, Debug, PartialEq)]
pub struct SidebarDirInfo<'a> {
    /// Directory name relative to the containing directory (e.g., "guide").
    pub dirname: &'a str,
    /// Group title.
    pub title: String,
    /// Sort order from the README `dir` block.
    pub order: Option<i64>,
    /// README date.
    pub date: Option<&'a str>,
    /// Group display options.
    pub group_info: SidebarGroupInfo,
    /// Sorted children.
    pub children: Vec<SidebarInfo<'a>>,
}

impl<'a> SidebarInfo<'a> {
    /// Display title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::File(file) => file.title,
            Self::Dir(dir) => &dir.title,
        }
    }

    /// File or directory name.
    #[must_use]
    pub fn name(&self) -> &'a str {
        match self {
            Self::File(file) => file.filename,
            Self::Dir(dir) => dir.dirname,
        }
    }

    /// Sort order.
    #[must_use]
    pub fn order(&self) -> Option<i64> {
        match self {
            Self::File(file) => file.order,
            Self::Dir(dir) => dir.order,
        }
    }

    /// Date used by date sorting.
    #[must_use]
    pub fn date(&self) -> Option<&'a str> {
        match self {
            Self::File(file) => file.date,
            Self::Dir(dir) => dir.date,
        }
    }

    /// Whether this is the README of its directory.
    #[must_use]
    pub fn is_readme(&self) -> bool {
        matches!(self, Self::File(file) if file.filename == README)
    }
}

/// A page together with its path relative to the directory being built.
type Entry<'a> = (&'a str, &'a Page);

/// Build the sidebar info tree for all pages under `scope`.
///
/// # Arguments
///
/// * `pages` - All site pages
/// * `scope` - Relative source prefix without leading slash, ending with `/`
///   (e.g., "guide/"), or empty for the source root
/// * `sorter` - Sibling ordering
#[must_use]
pub fn get_sidebar_info<'a>(
    pages: &'a [Page],
    scope: &str,
    sorter: &SidebarSorter,
) -> Vec<SidebarInfo<'a>> {
    let entries: Vec<Entry<'a>> = pages
        .iter()
        .filter_map(|page| {
            let relative = page.file_path_relative.as_deref()?.strip_prefix(scope)?;
            (!relative.is_empty()).then_some((relative, page))
        })
        .collect();

    tracing::debug!(scope, pages = entries.len(), "Building sidebar info");
    build_level(&entries, sorter)
}

/// Build one directory level from entries relative to it.
fn build_level<'a>(entries: &[Entry<'a>], sorter: &SidebarSorter) -> Vec<SidebarInfo<'a>> {
    let mut infos = Vec::new();
    let mut dirs: BTreeMap<&'a str, Vec<Entry<'a>>> = BTreeMap::new();

    for &(relative, page) in entries {
        match relative.split_once('/') {
            Some((dirname, rest)) => dirs.entry(dirname).or_default().push((rest, page)),
            None => {
                if page.frontmatter.index != Some(false) {
                    infos.push(SidebarInfo::File(SidebarFileInfo {
                        filename: relative,
                        title: &page.title,
                        order: page.frontmatter.order,
                        date: page.frontmatter.date.as_deref(),
                        page,
                    }));
                }
            }
        }
    }

    for (dirname, children) in dirs {
        if let Some(dir) = build_dir(dirname, &children, sorter) {
            infos.push(SidebarInfo::Dir(dir));
        }
    }

    infos.sort_by(|a, b| sorter.compare(a, b));
    infos
}

/// Build a directory node, or `None` if it is hidden or empty.
fn build_dir<'a>(
    dirname: &'a str,
    entries: &[Entry<'a>],
    sorter: &SidebarSorter,
) -> Option<SidebarDirInfo<'a>> {
    let readme = entries
        .iter()
        .find(|(relative, _)| *relative == README)
        .map(|&(_, page)| page);
    let dir_options = readme
        .and_then(|page| page.frontmatter.dir.clone())
        .unwrap_or_default();

    if dir_options.index == Some(false) {
        tracing::debug!(dirname, "Skipping directory hidden by README");
        return None;
    }

    let readme_is_link = readme.is_some() && dir_options.link == Some(true);
    let children = if readme_is_link {
        let rest: Vec<Entry<'a>> = entries
            .iter()
            .copied()
            .filter(|(relative, _)| *relative != README)
            .collect();
        build_level(&rest, sorter)
    } else {
        build_level(entries, sorter)
    };

    if children.is_empty() && !readme_is_link {
        return None;
    }

    let title = dir_options
        .text
        .clone()
        .or_else(|| {
            readme
                .map(|page| page.title.clone())
                .filter(|title| !title.is_empty())
        })
        .unwrap_or_else(|| dirname.to_owned());

    let group_info = SidebarGroupInfo {
        icon: dir_options
            .icon
            .clone()
            .or_else(|| readme.and_then(|page| page.frontmatter.icon.clone())),
        collapsable: dir_options.collapsable,
        link: readme_is_link.then(|| README.to_owned()),
    };

    Some(SidebarDirInfo {
        dirname,
        title,
        order: dir_options
            .order
            .or_else(|| readme.and_then(|page| page.frontmatter.order)),
        date: readme.and_then(|page| page.frontmatter.date.as_deref()),
        group_info,
        children,
    })
}

#[cfg(test)]
mod tests {
    use hope_app::{DirFrontmatter, PageFrontmatter};
    use pretty_assertions::assert_eq;

    use super::*;

    fn names<'a>(infos: &[SidebarInfo<'a>]) -> Vec<&'a str> {
        infos.iter().map(SidebarInfo::name).collect()
    }

    fn readme(path: &str, title: &str, dir: DirFrontmatter) -> Page {
        Page::new(path, title).with_frontmatter(PageFrontmatter {
            dir: Some(dir),
            ..PageFrontmatter::default()
        })
    }

    #[test]
    fn test_files_and_dirs_at_root() {
        let pages = vec![Page::new("a.md", "A"), Page::new("b/c.md", "C")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md", "b"]);
        let SidebarInfo::Dir(dir) = &infos[1] else {
            panic!("expected dir");
        };
        assert_eq!(dir.title, "b");
        assert_eq!(names(&dir.children), vec!["c.md"]);
    }

    #[test]
    fn test_scope_filters_pages() {
        let pages = vec![
            Page::new("guide/a.md", "A"),
            Page::new("guide/deep/b.md", "B"),
            Page::new("api/c.md", "C"),
            Page::new("guidebook.md", "Guidebook"),
        ];

        let infos = get_sidebar_info(&pages, "guide/", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md", "deep"]);
    }

    #[test]
    fn test_pages_without_source_are_skipped() {
        let mut virtual_page = Page::new("x.md", "X");
        virtual_page.file_path_relative = None;
        let pages = vec![virtual_page, Page::new("a.md", "A")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md"]);
    }

    #[test]
    fn test_index_false_hides_page() {
        let hidden = Page::new("hidden.md", "Hidden").with_frontmatter(PageFrontmatter {
            index: Some(false),
            ..PageFrontmatter::default()
        });
        let pages = vec![hidden, Page::new("a.md", "A")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md"]);
    }

    #[test]
    fn test_readme_supplies_dir_title_and_info() {
        let pages = vec![
            readme(
                "guide/README.md",
                "Guide Home",
                DirFrontmatter {
                    text: Some("User Guide".to_owned()),
                    icon: Some("book".to_owned()),
                    collapsable: Some(true),
                    ..DirFrontmatter::default()
                },
            ),
            Page::new("guide/intro.md", "Intro"),
        ];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        let SidebarInfo::Dir(dir) = &infos[0] else {
            panic!("expected dir");
        };
        assert_eq!(dir.title, "User Guide");
        assert_eq!(dir.group_info.icon.as_deref(), Some("book"));
        assert_eq!(dir.group_info.collapsable, Some(true));
        assert_eq!(dir.group_info.link, None);
        // README stays listed (first) when it is not the group link
        assert_eq!(names(&dir.children), vec!["README.md", "intro.md"]);
    }

    #[test]
    fn test_readme_title_used_without_dir_text() {
        let pages = vec![
            Page::new("guide/README.md", "Guide Home"),
            Page::new("guide/intro.md", "Intro"),
        ];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(infos[0].title(), "Guide Home");
    }

    #[test]
    fn test_readme_link_becomes_group_link() {
        let pages = vec![
            readme(
                "guide/README.md",
                "Guide",
                DirFrontmatter {
                    link: Some(true),
                    ..DirFrontmatter::default()
                },
            ),
            Page::new("guide/intro.md", "Intro"),
        ];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        let SidebarInfo::Dir(dir) = &infos[0] else {
            panic!("expected dir");
        };
        assert_eq!(dir.group_info.link.as_deref(), Some("README.md"));
        assert_eq!(names(&dir.children), vec!["intro.md"]);
    }

    #[test]
    fn test_dir_index_false_hides_subtree() {
        let pages = vec![
            readme(
                "drafts/README.md",
                "Drafts",
                DirFrontmatter {
                    index: Some(false),
                    ..DirFrontmatter::default()
                },
            ),
            Page::new("drafts/wip.md", "WIP"),
            Page::new("a.md", "A"),
        ];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md"]);
    }

    #[test]
    fn test_dir_with_only_hidden_pages_dropped() {
        let hidden = Page::new("empty/hidden.md", "Hidden").with_frontmatter(PageFrontmatter {
            index: Some(false),
            ..PageFrontmatter::default()
        });
        let pages = vec![hidden, Page::new("a.md", "A")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["a.md"]);
    }

    #[test]
    fn test_dir_order_from_readme() {
        let pages = vec![
            readme(
                "zeta/README.md",
                "Zeta",
                DirFrontmatter {
                    order: Some(1),
                    ..DirFrontmatter::default()
                },
            ),
            Page::new("zeta/z.md", "Z"),
            Page::new("alpha.md", "Alpha"),
        ];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        assert_eq!(names(&infos), vec!["zeta", "alpha.md"]);
    }

    #[test]
    fn test_nested_dirs() {
        let pages = vec![Page::new("a/b/c/d.md", "D")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        let SidebarInfo::Dir(a) = &infos[0] else {
            panic!("expected dir a");
        };
        let SidebarInfo::Dir(b) = &a.children[0] else {
            panic!("expected dir b");
        };
        let SidebarInfo::Dir(c) = &b.children[0] else {
            panic!("expected dir c");
        };
        assert_eq!(names(&c.children), vec!["d.md"]);
    }

    #[test]
    fn test_file_info_borrows_page() {
        let pages = vec![Page::new("a.md", "A")];

        let infos = get_sidebar_info(&pages, "", &SidebarSorter::default());

        let SidebarInfo::File(file) = &infos[0] else {
            panic!("expected file");
        };
        assert!(std::ptr::eq(file.page, &pages[0]));
    }
}
