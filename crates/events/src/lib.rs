//! SitePulse platform event infrastructure.
//!
//! - [`EventBus`]: in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`. Carries platform notifications such as
//!   `user.deleted` and `dashboard.default_layout_computed`.
//! - [`HookRegistry`]: synchronous mutation hooks letting plugins rewrite
//!   the default dashboard layout before it is finalized.

pub mod bus;
pub mod hooks;

pub use bus::{EventBus, PlatformEvent};
pub use hooks::HookRegistry;

/// Published when a user account is removed; dashboard layouts for the
/// login are purged in response. Payload: `{"login": "..."}`.
pub const EVENT_USER_DELETED: &str = "user.deleted";

/// Published after the default dashboard layout has been computed,
/// filtered, and finalized. Payload: `{"layout": "..."}`.
pub const EVENT_DEFAULT_LAYOUT_COMPUTED: &str = "dashboard.default_layout_computed";
