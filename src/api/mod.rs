pub mod diagnostics;
pub mod health;
pub mod rooms;
pub mod sessions;
pub mod tokens;

use axum::Router;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/daily-co", api_routes())
        .merge(health::health_routes())
        .with_state(state)
}

/// Daily.co integration routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(rooms::room_routes())
        .merge(tokens::token_routes())
        .merge(sessions::session_routes())
        .merge(diagnostics::diagnostic_routes())
}

/// Non-blank request field, passed on as given, or a 400 with `message`
pub(crate) fn require(value: Option<String>, message: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}
