//! Dashboard layout entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sitepulse_core::types::{DbId, Timestamp};

/// A row from the `user_dashboards` table.
///
/// Keyed by `(login, dashboard_id)`. `layout` is the JSON layout document
/// stored as text; `name` is the optional display name (unnamed dashboards
/// get a generated name at listing time).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserDashboard {
    pub login: String,
    pub dashboard_id: DbId,
    pub name: Option<String>,
    pub layout: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for saving a dashboard layout (lazy create or update).
#[derive(Debug, Clone, Deserialize)]
pub struct SaveDashboardLayout {
    /// Optional display name; `None` keeps an existing name untouched.
    pub name: Option<String>,
    /// The layout document, either parsed JSON or a raw encoded string.
    pub layout: serde_json::Value,
}
