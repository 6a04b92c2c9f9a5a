//! Plugin registry model.
//!
//! The registry only backs the enabled-plugin oracle used by the layout
//! filter; plugin installation and lifecycle are owned by the host platform.

use serde::Serialize;
use sqlx::FromRow;
use sitepulse_core::types::{DbId, Timestamp};

/// A row from the `plugins` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Plugin {
    pub id: DbId,
    pub name: String,
    pub enabled: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
