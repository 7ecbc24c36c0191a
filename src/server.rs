use crate::message::format_report;
use crate::report::DeviceReport;
use crate::telegram::Notifier;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Local;
use log::{error, info};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub struct AppState {
    pub notifier: Notifier,
}

/// In-band result reported back to the page. Transport failures keep the
/// HTTP status at 200 and surface through `success`/`error` instead.
#[derive(Serialize)]
pub struct SendOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// CORS stays permissive: the reporting page posts from arbitrary origins.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/send", post(send_report))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> &'static str {
    "✅ Telegram backend is running"
}

async fn send_report(
    State(state): State<Arc<AppState>>,
    Json(report): Json<DeviceReport>,
) -> Json<SendOutcome> {
    info!("Received device report, user agent: {}", report.user_agent);
    let text = format_report(&report, Local::now());
    match state.notifier.send(&text).await {
        Ok(()) => Json(SendOutcome {
            success: true,
            error: None,
        }),
        Err(e) => {
            error!("Failed to forward report: {e}");
            Json(SendOutcome {
                success: false,
                error: Some(e.to_string()),
            })
        }
    }
}
