//! Rendering of the info tree into sidebar items.

use hope_config::{SidebarChildren, SidebarGroup, SidebarItem};
use serde_json::Map;

use crate::info::SidebarInfo;

/// Convert info nodes into sidebar items.
///
/// Files become bare page paths relative to the enclosing group; directories
/// become groups with `prefix` set to `<dirname>/`.
#[must_use]
pub fn get_sidebar_items(infos: &[SidebarInfo<'_>]) -> Vec<SidebarItem> {
    infos
        .iter()
        .map(|info| match info {
            SidebarInfo::File(file) => SidebarItem::page(file.filename),
            SidebarInfo::Dir(dir) => SidebarItem::Group(SidebarGroup {
                text: dir.title.clone(),
                prefix: Some(format!("{}/", dir.dirname)),
                link: dir.group_info.link.clone(),
                icon: dir.group_info.icon.clone(),
                collapsable: dir.group_info.collapsable,
                children: SidebarChildren::Items(get_sidebar_items(&dir.children)),
                extra: Map::new(),
            }),
        })
        .collect()
}
