//! Route definitions for dashboard layouts.

use axum::routing::get;
use axum::Router;

use crate::handlers::{client, dashboard};
use crate::state::AppState;

/// User dashboard routes mounted at `/user/dashboards`.
///
/// ```text
/// GET /              -> list_dashboards
/// GET /{id}/layout   -> get_layout
/// PUT /{id}/layout   -> save_layout
/// ```
pub fn user_router() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::list_dashboards))
        .route(
            "/{id}/layout",
            get(dashboard::get_layout).put(dashboard::save_layout),
        )
}

/// Dashboard-wide routes mounted at `/dashboard`.
///
/// ```text
/// GET /default-layout        -> default_layout
/// GET /client/assets         -> client::assets
/// GET /client/translations   -> client::translations
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/default-layout", get(dashboard::default_layout))
        .route("/client/assets", get(client::assets))
        .route("/client/translations", get(client::translations))
}
