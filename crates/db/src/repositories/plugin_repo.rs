//! Repository for the `plugins` table.
//!
//! Only the pieces the layout filter needs: registering a plugin row,
//! flipping its enabled flag, and listing enabled module names for the
//! oracle. Everything else about plugins is the host platform's concern.

use std::collections::HashSet;

use sqlx::PgPool;

use crate::models::plugin::Plugin;

/// Column list for `plugins` queries.
const COLUMNS: &str = "id, name, enabled, created_at, updated_at";

/// Provides data access for the plugin registry.
pub struct PluginRepo;

impl PluginRepo {
    /// Register a plugin by name. Re-registering keeps the existing row.
    pub async fn insert(
        pool: &PgPool,
        name: &str,
        enabled: bool,
    ) -> Result<Plugin, sqlx::Error> {
        let query = format!(
            "INSERT INTO plugins (name, enabled) VALUES ($1, $2) \
             ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Plugin>(&query)
            .bind(name)
            .bind(enabled)
            .fetch_one(pool)
            .await
    }

    /// Enable or disable a plugin by name.
    ///
    /// Returns `true` if a row was updated.
    pub async fn set_enabled(
        pool: &PgPool,
        name: &str,
        enabled: bool,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("UPDATE plugins SET enabled = $2, updated_at = now() WHERE name = $1")
                .bind(name)
                .bind(enabled)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Names of all enabled plugins, as the set the layout filter consumes.
    pub async fn list_enabled_names(pool: &PgPool) -> Result<HashSet<String>, sqlx::Error> {
        let names: Vec<String> =
            sqlx::query_scalar("SELECT name FROM plugins WHERE enabled = true")
                .fetch_all(pool)
                .await?;
        Ok(names.into_iter().collect())
    }

    /// Whether the registry holds any plugin rows at all.
    ///
    /// An unpopulated registry is a different state from one where every
    /// plugin is disabled; the layout filter only treats the former as
    /// "everything enabled".
    pub async fn is_populated(pool: &PgPool) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM plugins)")
            .fetch_one(pool)
            .await
    }
}
