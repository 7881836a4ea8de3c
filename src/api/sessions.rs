use axum::{
    extract::{rejection::JsonRejection, State},
    routing::post,
    Json, Router,
};

use crate::api::require;
use crate::error::{AppError, Result};
use crate::models::{ProvisionKind, ProvisionRequest, ProvisionResponse};
use crate::state::AppState;

const DEFAULT_SESSION_MINUTES: u32 = 60;
const DEFAULT_WEBINAR_ATTENDEES: u32 = 100;

/// Provisioning routes
pub fn session_routes() -> Router<AppState> {
    Router::new().route("/sessions", post(provision_session))
}

/// POST /api/daily-co/sessions - Create a convenience room and the host's
/// owner token in one call.
///
/// A room whose token cannot be minted is deleted again before the error is
/// returned, so a failed provisioning never leaves an orphan behind for the
/// rest of its expiry window.
async fn provision_session(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ProvisionRequest>, JsonRejection>,
) -> Result<Json<ProvisionResponse>> {
    let Json(request) = payload?;
    let host_name = require(request.host_name, "Host name is required")?;
    let title = request.title.unwrap_or_default();

    let room = match request.kind {
        ProvisionKind::Session => {
            let minutes = request.duration_minutes.unwrap_or(DEFAULT_SESSION_MINUTES);
            state.daily.create_video_session_room(&title, minutes).await
        }
        ProvisionKind::Webinar => {
            let attendees = request.max_attendees.unwrap_or(DEFAULT_WEBINAR_ATTENDEES);
            if attendees == 0 {
                return Err(AppError::BadRequest(
                    "maxAttendees must be at least 1".to_string(),
                ));
            }
            state.daily.create_webinar_room(&title, attendees).await
        }
    }
    .map_err(AppError::upstream("Failed to create room"))?;

    let token = match state.daily.get_meeting_token(&room.name, &host_name, true).await {
        Ok(token) => token,
        Err(e) => {
            match state.daily.delete_room(&room.name).await {
                Ok(()) => tracing::warn!(room = %room.name, "Removed room after token mint failure"),
                Err(cleanup) => tracing::error!(
                    room = %room.name,
                    error = %cleanup,
                    "Failed to remove orphaned room"
                ),
            }
            return Err(AppError::upstream("Failed to generate token")(e));
        }
    };

    let join_url = state.daily.room_url(&room.name, Some(&token));
    tracing::info!(room = %room.name, kind = ?request.kind, "Session provisioned");

    Ok(Json(ProvisionResponse {
        room,
        token,
        join_url,
    }))
}
