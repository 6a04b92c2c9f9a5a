//! Handlers for per-user dashboard layouts.
//!
//! Layout CRUD plus the default-layout pipeline. Layout documents live in
//! the database as text; everything returned to the client has passed
//! through the normalizer, so the response is always parsed JSON in the
//! canonical envelope (or the raw decoded document for listings).

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use sitepulse_core::dashboard::{
    assign_dashboard_names, default_layout_template, DEFAULT_DASHBOARD_ID, DEFAULT_LAYOUT_LOGIN,
};
use sitepulse_core::layout::{decode_layout, remove_disabled_plugins, PluginOracle};
use sitepulse_core::types::DbId;
use sitepulse_db::models::dashboard::SaveDashboardLayout;
use sitepulse_db::repositories::{DashboardRepo, PluginRepo};
use sitepulse_events::{PlatformEvent, EVENT_DEFAULT_LAYOUT_COMPUTED};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

/// One dashboard in the `GET /user/dashboards` listing.
#[derive(Debug, Serialize)]
pub struct DashboardSummary {
    pub id: DbId,
    /// Display name; generated for unnamed dashboards.
    pub name: String,
    /// Decoded layout document. `null` when the stored text is unparsable.
    pub layout: Value,
}

/// A single layout document, parsed.
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: Value,
}

// ---------------------------------------------------------------------------
// Enabled-plugin oracle backed by the registry
// ---------------------------------------------------------------------------

/// Oracle over the plugin registry.
///
/// An unpopulated registry means the deployment does not track plugins at
/// all; in that case every module is treated as enabled rather than
/// filtering every widget out of every layout. A populated registry with
/// nothing enabled filters normally.
enum EnabledModules {
    All,
    Listed(HashSet<String>),
}

impl PluginOracle for EnabledModules {
    fn is_enabled(&self, module: &str) -> bool {
        match self {
            EnabledModules::All => true,
            EnabledModules::Listed(names) => names.contains(module),
        }
    }
}

async fn enabled_modules(pool: &sitepulse_db::DbPool) -> Result<EnabledModules, sqlx::Error> {
    let names = PluginRepo::list_enabled_names(pool).await?;

    // An empty enabled set is ambiguous: nothing registered, or everything
    // registered is disabled. Only the former opts out of filtering.
    if names.is_empty() && !PluginRepo::is_populated(pool).await? {
        return Ok(EnabledModules::All);
    }

    Ok(EnabledModules::Listed(names))
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// GET /api/v1/user/dashboards
///
/// All dashboards stored for the caller, with generated display names and
/// decoded layouts. A user with zero dashboards gets an empty list.
pub async fn list_dashboards(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = DashboardRepo::list_for_user(&state.pool, &auth.login).await?;

    let stored_names: Vec<Option<String>> = rows.iter().map(|d| d.name.clone()).collect();
    let names = assign_dashboard_names(&stored_names, &auth.login);

    let items: Vec<DashboardSummary> = rows
        .into_iter()
        .zip(names)
        .map(|(row, name)| {
            let raw = if row.layout.is_empty() {
                "[]"
            } else {
                row.layout.as_str()
            };
            DashboardSummary {
                id: row.dashboard_id,
                name,
                layout: decode_layout(raw).unwrap_or(Value::Null),
            }
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

// ---------------------------------------------------------------------------
// Layout get/save
// ---------------------------------------------------------------------------

/// GET /api/v1/user/dashboards/{id}/layout
///
/// The stored layout for `(caller, id)` passed through the disabled-plugin
/// filter. A dashboard the user never saved falls back to the
/// default-layout pipeline instead of a 404.
pub async fn get_layout(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(dashboard_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let stored = DashboardRepo::find_for_user(&state.pool, &auth.login, dashboard_id).await?;

    let layout_text = match stored {
        Some(row) if !row.layout.is_empty() => {
            let enabled = enabled_modules(&state.pool).await?;
            remove_disabled_plugins(row.layout, &enabled)
        }
        _ => compute_default_layout(&state, &auth).await?,
    };

    Ok(Json(DataResponse {
        data: LayoutResponse {
            layout: parse_filtered(&layout_text)?,
        },
    }))
}

/// PUT /api/v1/user/dashboards/{id}/layout
///
/// Save the caller's layout for one dashboard, creating the row lazily on
/// first save. The layout is normalized before storage.
pub async fn save_layout(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(dashboard_id): Path<DbId>,
    Json(input): Json<SaveDashboardLayout>,
) -> AppResult<impl IntoResponse> {
    let saved = DashboardRepo::save_layout(&state.pool, &auth.login, dashboard_id, &input).await?;

    tracing::info!(
        login = %auth.login,
        dashboard_id,
        "Dashboard layout saved",
    );

    Ok(Json(DataResponse { data: saved }))
}

// ---------------------------------------------------------------------------
// Default layout
// ---------------------------------------------------------------------------

/// GET /api/v1/dashboard/default-layout
///
/// The layout shown to users who never customized dashboard 1.
pub async fn default_layout(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let layout_text = compute_default_layout(&state, &auth).await?;

    Ok(Json(DataResponse {
        data: LayoutResponse {
            layout: parse_filtered(&layout_text)?,
        },
    }))
}

/// Resolve the default layout for a caller.
///
/// Order: the stored system-wide default row (reserved empty login,
/// dashboard 1) if present, else the hardcoded starter template (whose
/// first widget depends on the caller's privilege level). Registered
/// layout hooks may then rewrite the text, the disabled-plugin filter
/// re-encodes it, and the finalized layout is announced on the event bus.
async fn compute_default_layout(state: &AppState, auth: &AuthUser) -> AppResult<String> {
    let stored_default =
        DashboardRepo::find_for_user(&state.pool, DEFAULT_LAYOUT_LOGIN, DEFAULT_DASHBOARD_ID)
            .await?;

    let mut layout_text = match stored_default {
        Some(row) if !row.layout.is_empty() => row.layout,
        _ => default_layout_template(auth.super_user),
    };

    state.layout_hooks.apply(&mut layout_text);

    let enabled = enabled_modules(&state.pool).await?;
    let layout_text = remove_disabled_plugins(layout_text, &enabled);

    state.event_bus.publish(
        PlatformEvent::new(EVENT_DEFAULT_LAYOUT_COMPUTED)
            .with_actor(auth.login.as_str())
            .with_payload(serde_json::json!({ "layout": layout_text })),
    );

    Ok(layout_text)
}

/// Parse filter output back to a JSON value for the response body.
///
/// The filter always emits valid JSON, so a parse failure is a bug.
fn parse_filtered(layout_text: &str) -> Result<Value, AppError> {
    serde_json::from_str(layout_text)
        .map_err(|e| AppError::InternalError(format!("Filtered layout is not valid JSON: {e}")))
}
