//! Repository for the `user_dashboards` table.

use sqlx::PgPool;
use sitepulse_core::layout;
use sitepulse_core::types::DbId;

use crate::models::dashboard::{SaveDashboardLayout, UserDashboard};

/// Column list for `user_dashboards` queries.
const COLUMNS: &str = "login, dashboard_id, name, layout, created_at, updated_at";

/// Provides CRUD operations for per-user dashboard layouts.
///
/// Missing rows are reported as `None` / empty collections, never as
/// errors; callers check for absence explicitly. Login and dashboard id
/// are assumed already validated by the caller.
pub struct DashboardRepo;

impl DashboardRepo {
    /// Find one dashboard by `(login, dashboard_id)`.
    ///
    /// Returns `None` if the user never saved this dashboard.
    pub async fn find_for_user(
        pool: &PgPool,
        login: &str,
        dashboard_id: DbId,
    ) -> Result<Option<UserDashboard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_dashboards \
             WHERE login = $1 AND dashboard_id = $2"
        );
        sqlx::query_as::<_, UserDashboard>(&query)
            .bind(login)
            .bind(dashboard_id)
            .fetch_optional(pool)
            .await
    }

    /// List all dashboards stored for a login, ordered by dashboard id.
    ///
    /// A user with zero dashboards yields an empty vec.
    pub async fn list_for_user(
        pool: &PgPool,
        login: &str,
    ) -> Result<Vec<UserDashboard>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM user_dashboards \
             WHERE login = $1 ORDER BY dashboard_id"
        );
        sqlx::query_as::<_, UserDashboard>(&query)
            .bind(login)
            .fetch_all(pool)
            .await
    }

    /// Save a dashboard layout, creating the row lazily on first save.
    ///
    /// The layout is normalized before storage: a string payload is treated
    /// as a raw encoded layout and decoded; undecodable input is stored as
    /// the `"[]"` sentinel, so the `layout` column always holds valid JSON.
    /// `name = None` keeps any existing name.
    pub async fn save_layout(
        pool: &PgPool,
        login: &str,
        dashboard_id: DbId,
        input: &SaveDashboardLayout,
    ) -> Result<UserDashboard, sqlx::Error> {
        let layout_text = normalize_layout(&input.layout);

        let query = format!(
            "INSERT INTO user_dashboards (login, dashboard_id, name, layout) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (login, dashboard_id) DO UPDATE \
             SET name = COALESCE($3, user_dashboards.name), \
                 layout = EXCLUDED.layout, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserDashboard>(&query)
            .bind(login)
            .bind(dashboard_id)
            .bind(&input.name)
            .bind(&layout_text)
            .fetch_one(pool)
            .await
    }

    /// Delete every dashboard for a login (user removal).
    ///
    /// Returns the number of rows deleted.
    pub async fn delete_all_for_user(pool: &PgPool, login: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM user_dashboards WHERE login = $1")
            .bind(login)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

/// Canonicalize a caller-supplied layout value to storable text.
fn normalize_layout(layout: &serde_json::Value) -> String {
    let decoded = match layout {
        serde_json::Value::String(raw) => layout::decode_layout(raw.as_str()),
        parsed => Some(parsed.clone()),
    };

    match decoded {
        Some(value) => layout::encode_layout(&value),
        None => layout::EMPTY_LAYOUT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_layout;
    use serde_json::json;

    #[test]
    fn parsed_layout_is_stored_canonically() {
        let value = json!([[{"uniqueId": "w1"}]]);
        assert_eq!(normalize_layout(&value), r#"[[{"uniqueId":"w1"}]]"#);
    }

    #[test]
    fn raw_string_layout_is_decoded_first() {
        let value = json!("[[{&quot;uniqueId&quot;:&quot;w1&quot;}]]");
        assert_eq!(normalize_layout(&value), r#"[[{"uniqueId":"w1"}]]"#);
    }

    #[test]
    fn undecodable_string_becomes_empty_sentinel() {
        let value = json!("definitely not a layout");
        assert_eq!(normalize_layout(&value), "[]");
    }
}
