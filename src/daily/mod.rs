pub mod client;
pub mod naming;

pub use client::DailyClient;
pub use naming::{generate_room_name, smoke_test_plan, video_session_plan, webinar_plan};

/// Failures talking to the Daily.co REST API
#[derive(Debug, thiserror::Error)]
pub enum DailyError {
    #[error("Daily.co API key is not configured")]
    MissingApiKey,

    #[error("Invalid Daily.co API URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(&'static str),

    /// Vendor answered with a non-success status
    #[error("Daily.co API returned {status}: {body}")]
    Integration { status: u16, body: String },

    #[error("Daily.co request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
