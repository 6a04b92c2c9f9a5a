pub mod dashboard;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /user/dashboards                 list dashboards (GET)
/// /user/dashboards/{id}/layout     get, save layout (GET, PUT)
///
/// /dashboard/default-layout        default layout pipeline (GET)
/// /dashboard/client/assets         client asset manifest (GET)
/// /dashboard/client/translations   client translation keys (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Per-user dashboard layout CRUD.
        .nest("/user/dashboards", dashboard::user_router())
        // Default layout and client enumeration.
        .nest("/dashboard", dashboard::router())
}
