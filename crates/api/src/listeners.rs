//! Platform event listeners owned by the dashboard service.
//!
//! Currently one concern: when a user account is removed elsewhere on the
//! platform, every dashboard layout for that login is purged.

use serde_json::Value;
use tokio::sync::broadcast;

use sitepulse_db::repositories::DashboardRepo;
use sitepulse_db::DbPool;
use sitepulse_events::{PlatformEvent, EVENT_USER_DELETED};

/// Run the listener loop.
///
/// Subscribes to the event bus via `receiver` and processes each event.
/// The loop exits when the channel is closed (i.e. the
/// [`EventBus`](sitepulse_events::EventBus) is dropped).
pub async fn run(pool: DbPool, mut receiver: broadcast::Receiver<PlatformEvent>) {
    loop {
        match receiver.recv().await {
            Ok(event) => {
                if let Err(e) = handle_event(&pool, &event).await {
                    tracing::error!(
                        error = %e,
                        event_type = %event.event_type,
                        "Failed to handle platform event"
                    );
                }
            }
            Err(broadcast::error::RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "Dashboard event listener lagged");
            }
            Err(broadcast::error::RecvError::Closed) => {
                tracing::info!("Event bus closed, dashboard event listener shutting down");
                break;
            }
        }
    }
}

/// Handle a single platform event.
///
/// Public so tests can drive the listener deterministically without the
/// broadcast loop.
pub async fn handle_event(pool: &DbPool, event: &PlatformEvent) -> Result<(), sqlx::Error> {
    if event.event_type != EVENT_USER_DELETED {
        return Ok(());
    }

    let login = event
        .payload
        .get("login")
        .and_then(Value::as_str)
        .or(event.actor_login.as_deref());

    match login {
        Some(login) => {
            let deleted = DashboardRepo::delete_all_for_user(pool, login).await?;
            tracing::info!(login, deleted, "Purged dashboard layouts for deleted user");
        }
        None => {
            tracing::warn!("user.deleted event carried no login, nothing to purge");
        }
    }

    Ok(())
}
