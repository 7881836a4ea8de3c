use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::api::require;
use crate::config::validate_daily_config;
use crate::daily::smoke_test_plan;
use crate::error::{AppError, Result};
use crate::models::{ConnectionTestResponse, RoomQuery};
use crate::state::AppState;

/// Diagnostic routes
pub fn diagnostic_routes() -> Router<AppState> {
    Router::new()
        .route("/test", get(test_connection))
        .route("/participants", get(list_participants))
}

fn test_failure(error: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ConnectionTestResponse {
            success: false,
            message: None,
            api_key_status: None,
            test_room: None,
            error: Some(error.to_string()),
        }),
    )
        .into_response()
}

/// GET /api/daily-co/test - Check credentials, then create a five-minute
/// throwaway room as a smoke test. No room is created if the check fails.
async fn test_connection(State(state): State<AppState>) -> Response {
    if !validate_daily_config(&state.config.daily) {
        return test_failure("Daily.co API key is not configured");
    }

    if !state.daily.test_connection().await {
        return test_failure("Failed to connect to Daily.co API");
    }

    let plan = smoke_test_plan(Utc::now(), &mut rand::rng());
    match state.daily.create_plan(plan).await {
        Ok(room) => Json(ConnectionTestResponse {
            success: true,
            message: Some("Daily.co API connection successful".to_string()),
            api_key_status: Some("Configured".to_string()),
            test_room: Some(room),
            error: None,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Daily.co smoke test room failed");
            test_failure("Failed to test Daily.co integration")
        }
    }
}

/// GET /api/daily-co/participants?roomName= - Vendor presence listing
async fn list_participants(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<serde_json::Value>> {
    let room_name = require(query.room_name, "Room name is required")?;

    let participants = state
        .daily
        .get_room_participants(&room_name)
        .await
        .map_err(AppError::upstream("Failed to fetch participants"))?;

    Ok(Json(json!({ "participants": participants })))
}
