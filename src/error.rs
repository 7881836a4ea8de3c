use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::daily::DailyError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Vendor call failed. Clients only ever see `context`; the source is
    /// logged when the response is built.
    #[error("{context}: {source}")]
    Upstream {
        context: &'static str,
        #[source]
        source: DailyError,
    },

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// `map_err` adapter tagging a vendor failure with the public message
    /// for the route that hit it.
    pub fn upstream(context: &'static str) -> impl FnOnce(DailyError) -> AppError {
        move |source| match source {
            DailyError::InvalidRequest(msg) => AppError::BadRequest(msg.to_string()),
            source => AppError::Upstream { context, source },
        }
    }
}

/// Malformed or mistyped JSON bodies get the usual `{error, code}` 400
/// instead of axum's plain-text rejection.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest("Invalid request body".to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Upstream { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16()
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
