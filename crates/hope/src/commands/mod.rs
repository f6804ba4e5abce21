//! CLI command implementations.

pub(crate) mod migrate;
pub(crate) mod sidebar;

pub(crate) use migrate::MigrateArgs;
pub(crate) use sidebar::SidebarArgs;
