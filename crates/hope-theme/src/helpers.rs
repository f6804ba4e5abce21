//! Typed config helpers.
//!
//! Identity functions that pin a value to its config type, so a config
//! written in its own module is checked against the theme's types.

use hope_config::{NavbarOptions, SidebarArrayOptions, SidebarObjectOptions, SidebarOptions};

/// Navbar config.
#[must_use]
pub fn navbar(config: NavbarOptions) -> NavbarOptions {
    config
}

/// Sidebar config of any shape.
#[must_use]
pub fn sidebar(config: SidebarOptions) -> SidebarOptions {
    config
}

/// Sidebar item list.
#[must_use]
pub fn array_sidebar(config: SidebarArrayOptions) -> SidebarArrayOptions {
    config
}

/// Sidebar prefix mapping.
#[must_use]
pub fn object_sidebar(config: SidebarObjectOptions) -> SidebarObjectOptions {
    config
}
