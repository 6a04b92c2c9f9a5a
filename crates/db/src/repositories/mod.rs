//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dashboard_repo;
pub mod plugin_repo;

pub use dashboard_repo::DashboardRepo;
pub use plugin_repo::PluginRepo;
