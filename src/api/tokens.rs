use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::api::require;
use crate::error::{AppError, Result};
use crate::models::{MeetingToken, TokenRequest};
use crate::state::AppState;

/// Token routes
pub fn token_routes() -> Router<AppState> {
    Router::new().route("/tokens", post(mint_token))
}

/// POST /api/daily-co/tokens - Mint a meeting token; `isOwner` defaults to false
async fn mint_token(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<MeetingToken>> {
    const MESSAGE: &str = "Room name and user name are required";
    let Json(request) = payload?;
    let room_name = require(request.room_name, MESSAGE)?;
    let user_name = require(request.user_name, MESSAGE)?;

    let token = state
        .daily
        .get_meeting_token(&room_name, &user_name, request.is_owner.unwrap_or(false))
        .await
        .map_err(AppError::upstream("Failed to generate token"))?;

    Ok(Json(MeetingToken { token }))
}
