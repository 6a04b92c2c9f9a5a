//! Integration tests for the dashboard layout repository.
//!
//! Exercises the repository layer against a real database:
//! - Lazy create / update via the upsert path
//! - Absence reported as `None` / empty collections
//! - Wholesale purge on user removal
//! - Plugin registry oracle queries

use serde_json::json;
use sqlx::PgPool;
use sitepulse_db::models::dashboard::SaveDashboardLayout;
use sitepulse_db::repositories::{DashboardRepo, PluginRepo};

fn save_input(layout: serde_json::Value) -> SaveDashboardLayout {
    SaveDashboardLayout { name: None, layout }
}

// ---------------------------------------------------------------------------
// Dashboard CRUD
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn find_missing_dashboard_returns_none(pool: PgPool) {
    let found = DashboardRepo::find_for_user(&pool, "alice", 1)
        .await
        .expect("query should succeed");
    assert!(found.is_none());
}

#[sqlx::test]
async fn list_for_user_with_no_dashboards_is_empty(pool: PgPool) {
    let dashboards = DashboardRepo::list_for_user(&pool, "nobody")
        .await
        .expect("query should succeed");
    assert!(dashboards.is_empty());
}

#[sqlx::test]
async fn save_creates_row_lazily_then_updates(pool: PgPool) {
    let created = DashboardRepo::save_layout(
        &pool,
        "alice",
        1,
        &save_input(json!([[{"uniqueId": "w1"}]])),
    )
    .await
    .expect("first save should insert");

    assert_eq!(created.login, "alice");
    assert_eq!(created.dashboard_id, 1);
    assert_eq!(created.layout, r#"[[{"uniqueId":"w1"}]]"#);
    assert!(created.name.is_none());

    let updated = DashboardRepo::save_layout(
        &pool,
        "alice",
        1,
        &SaveDashboardLayout {
            name: Some("My KPIs".to_string()),
            layout: json!([[{"uniqueId": "w2"}]]),
        },
    )
    .await
    .expect("second save should update");

    assert_eq!(updated.layout, r#"[[{"uniqueId":"w2"}]]"#);
    assert_eq!(updated.name.as_deref(), Some("My KPIs"));

    // name = None on a later save keeps the existing name.
    let kept = DashboardRepo::save_layout(&pool, "alice", 1, &save_input(json!([])))
        .await
        .expect("third save should update");
    assert_eq!(kept.name.as_deref(), Some("My KPIs"));

    let all = DashboardRepo::list_for_user(&pool, "alice")
        .await
        .expect("list should succeed");
    assert_eq!(all.len(), 1);
}

#[sqlx::test]
async fn raw_string_layout_is_normalized_before_storage(pool: PgPool) {
    let saved = DashboardRepo::save_layout(
        &pool,
        "bob",
        1,
        &save_input(json!("[[{&quot;uniqueId&quot;:&quot;w1&quot;}]]")),
    )
    .await
    .expect("save should succeed");

    assert_eq!(saved.layout, r#"[[{"uniqueId":"w1"}]]"#);
}

#[sqlx::test]
async fn malformed_layout_is_stored_as_empty_sentinel(pool: PgPool) {
    let saved = DashboardRepo::save_layout(&pool, "bob", 2, &save_input(json!("{{nope")))
        .await
        .expect("save should succeed");

    assert_eq!(saved.layout, "[]");
}

#[sqlx::test]
async fn delete_all_purges_every_dashboard_for_login(pool: PgPool) {
    for id in 1..=3 {
        DashboardRepo::save_layout(&pool, "alice", id, &save_input(json!([])))
            .await
            .expect("save should succeed");
    }
    DashboardRepo::save_layout(&pool, "bob", 1, &save_input(json!([])))
        .await
        .expect("save should succeed");

    let deleted = DashboardRepo::delete_all_for_user(&pool, "alice")
        .await
        .expect("delete should succeed");
    assert_eq!(deleted, 3);

    let remaining = DashboardRepo::list_for_user(&pool, "alice")
        .await
        .expect("list should succeed");
    assert!(remaining.is_empty());

    // Other users are untouched.
    let bob = DashboardRepo::list_for_user(&pool, "bob")
        .await
        .expect("list should succeed");
    assert_eq!(bob.len(), 1);

    // Deleting again is a no-op, not an error.
    let deleted_again = DashboardRepo::delete_all_for_user(&pool, "alice")
        .await
        .expect("delete should succeed");
    assert_eq!(deleted_again, 0);
}

// ---------------------------------------------------------------------------
// Plugin registry
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn enabled_names_reflect_registry_state(pool: PgPool) {
    PluginRepo::insert(&pool, "Live", true)
        .await
        .expect("insert should succeed");
    PluginRepo::insert(&pool, "Referrers", true)
        .await
        .expect("insert should succeed");
    PluginRepo::insert(&pool, "Legacy", false)
        .await
        .expect("insert should succeed");

    let enabled = PluginRepo::list_enabled_names(&pool)
        .await
        .expect("query should succeed");
    assert_eq!(enabled.len(), 2);
    assert!(enabled.contains("Live"));
    assert!(!enabled.contains("Legacy"));

    let flipped = PluginRepo::set_enabled(&pool, "Live", false)
        .await
        .expect("update should succeed");
    assert!(flipped);

    let enabled = PluginRepo::list_enabled_names(&pool)
        .await
        .expect("query should succeed");
    assert!(!enabled.contains("Live"));

    // Unknown plugin name updates nothing.
    let missing = PluginRepo::set_enabled(&pool, "Nope", true)
        .await
        .expect("update should succeed");
    assert!(!missing);
}

#[sqlx::test]
async fn population_is_distinct_from_the_enabled_set(pool: PgPool) {
    assert!(!PluginRepo::is_populated(&pool)
        .await
        .expect("query should succeed"));

    PluginRepo::insert(&pool, "Live", false)
        .await
        .expect("insert should succeed");

    // One row, zero enabled: populated, but the enabled set is empty.
    assert!(PluginRepo::is_populated(&pool)
        .await
        .expect("query should succeed"));
    let enabled = PluginRepo::list_enabled_names(&pool)
        .await
        .expect("query should succeed");
    assert!(enabled.is_empty());
}

#[sqlx::test]
async fn reregistering_a_plugin_keeps_existing_row(pool: PgPool) {
    let first = PluginRepo::insert(&pool, "Live", true)
        .await
        .expect("insert should succeed");
    PluginRepo::set_enabled(&pool, "Live", false)
        .await
        .expect("update should succeed");

    let again = PluginRepo::insert(&pool, "Live", true)
        .await
        .expect("re-insert should succeed");

    // Same row, and the enabled flag set by the admin is preserved.
    assert_eq!(first.id, again.id);
    assert!(!again.enabled);
}
