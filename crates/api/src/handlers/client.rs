//! Client-facing enumeration endpoints.
//!
//! The web client asks the backend which dashboard script/style assets to
//! load and which translation keys it may use; both lists are static per
//! release.

use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::response::DataResponse;

/// Script assets served to the dashboard client, in load order.
const CLIENT_SCRIPTS: &[&str] = &[
    "dashboard/js/dashboards-model.js",
    "dashboard/js/widget-menu.js",
    "dashboard/js/dashboard-grid.js",
    "dashboard/js/dashboard-widget.js",
    "dashboard/js/dashboard.js",
];

/// Stylesheet assets served to the dashboard client.
const CLIENT_STYLESHEETS: &[&str] = &[
    "dashboard/css/dashboard.css",
    "dashboard/css/widget.css",
];

/// Translation keys the client is allowed to request.
const CLIENT_TRANSLATION_KEYS: &[&str] = &[
    "Dashboard_AddWidget",
    "Dashboard_RemoveWidget",
    "Dashboard_WidgetPreview",
    "Dashboard_Maximise",
    "Dashboard_Minimise",
    "Dashboard_LoadingWidget",
    "Dashboard_WidgetNotFound",
    "Dashboard_DashboardCopied",
    "General_Close",
    "General_Refresh",
];

/// Asset manifest payload.
#[derive(Debug, Serialize)]
pub struct ClientAssets {
    pub scripts: &'static [&'static str],
    pub stylesheets: &'static [&'static str],
}

/// GET /api/v1/dashboard/client/assets
///
/// Script and stylesheet paths the client should load for the dashboard.
pub async fn assets() -> impl IntoResponse {
    Json(DataResponse {
        data: ClientAssets {
            scripts: CLIENT_SCRIPTS,
            stylesheets: CLIENT_STYLESHEETS,
        },
    })
}

/// GET /api/v1/dashboard/client/translations
///
/// Translation keys exposed to the dashboard client.
pub async fn translations() -> impl IntoResponse {
    Json(DataResponse {
        data: CLIENT_TRANSLATION_KEYS,
    })
}
