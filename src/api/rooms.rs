use axum::{
    extract::{rejection::JsonRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::json;

use crate::api::require;
use crate::error::{AppError, Result};
use crate::models::{CreateRoomRequest, DailyRoom, RoomQuery};
use crate::state::AppState;

const ROOM_NAME_REQUIRED: &str = "Room name is required";

/// Room routes
pub fn room_routes() -> Router<AppState> {
    Router::new().route(
        "/rooms",
        get(get_room).post(create_room).delete(delete_room),
    )
}

/// POST /api/daily-co/rooms - Create a room, options passed through as overrides
async fn create_room(
    State(state): State<AppState>,
    payload: std::result::Result<Json<CreateRoomRequest>, JsonRejection>,
) -> Result<Json<DailyRoom>> {
    let Json(request) = payload?;
    let room_name = require(request.room_name, ROOM_NAME_REQUIRED)?;

    let room = state
        .daily
        .create_room(&room_name, request.options.unwrap_or_default())
        .await
        .map_err(AppError::upstream("Failed to create room"))?;

    Ok(Json(room))
}

/// GET /api/daily-co/rooms?roomName= - Fetch current room state
async fn get_room(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<DailyRoom>> {
    let room_name = require(query.room_name, ROOM_NAME_REQUIRED)?;

    let room = state
        .daily
        .get_room(&room_name)
        .await
        .map_err(AppError::upstream("Failed to fetch room"))?;

    Ok(Json(room))
}

/// DELETE /api/daily-co/rooms?roomName=
async fn delete_room(
    State(state): State<AppState>,
    Query(query): Query<RoomQuery>,
) -> Result<Json<serde_json::Value>> {
    let room_name = require(query.room_name, ROOM_NAME_REQUIRED)?;

    state
        .daily
        .delete_room(&room_name)
        .await
        .map_err(AppError::upstream("Failed to delete room"))?;

    Ok(Json(json!({ "deleted": true })))
}
