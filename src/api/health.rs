use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::config::validate_daily_config;
use crate::error::Result;
use crate::state::AppState;

/// Health response structure
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub daily_configured: bool,
    pub daily: String,
    pub timestamp: String,
}

/// Health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

/// GET /health - Health check endpoint
async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    let configured = validate_daily_config(&state.config.daily);

    let daily_status = if !configured {
        "unconfigured"
    } else if state.daily.test_connection().await {
        "connected"
    } else {
        "unreachable"
    };

    let overall_status = if daily_status == "connected" {
        "healthy"
    } else {
        "unhealthy"
    };

    Ok(Json(HealthResponse {
        status: overall_status.to_string(),
        daily_configured: configured,
        daily: daily_status.to_string(),
        timestamp: Utc::now().to_rfc3339(),
    }))
}
