use serde::{Deserialize, Serialize};

/// Remote participant as reported by the call widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

impl Participant {
    pub fn new(session_id: impl Into<String>, user_name: Option<&str>) -> Self {
        Self {
            session_id: session_id.into(),
            user_name: user_name.map(str::to_string),
        }
    }

    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("Anonymous")
    }
}

/// Lifecycle events emitted by the call widget.
///
/// Tagged by `action` so a platform bridge can hand over the widget's JSON
/// payloads as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum CallEvent {
    #[serde(rename = "joined-meeting")]
    Joined,
    #[serde(rename = "left-meeting")]
    Left,
    ParticipantJoined {
        participant: Participant,
    },
    ParticipantLeft {
        participant: Participant,
    },
    /// Echo of the local camera/mic state after a toggle
    LocalMediaUpdated {
        video: bool,
        audio: bool,
    },
    RecordingStarted,
    RecordingStopped,
    Error {
        #[serde(rename = "errorMsg")]
        error_msg: String,
    },
}

/// Event names as emitted by the widget
pub mod event_names {
    pub const JOINED_MEETING: &str = "joined-meeting";
    pub const LEFT_MEETING: &str = "left-meeting";
    pub const PARTICIPANT_JOINED: &str = "participant-joined";
    pub const PARTICIPANT_LEFT: &str = "participant-left";
    pub const LOCAL_MEDIA_UPDATED: &str = "local-media-updated";
    pub const RECORDING_STARTED: &str = "recording-started";
    pub const RECORDING_STOPPED: &str = "recording-stopped";
    pub const ERROR: &str = "error";
}

impl CallEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CallEvent::Joined => event_names::JOINED_MEETING,
            CallEvent::Left => event_names::LEFT_MEETING,
            CallEvent::ParticipantJoined { .. } => event_names::PARTICIPANT_JOINED,
            CallEvent::ParticipantLeft { .. } => event_names::PARTICIPANT_LEFT,
            CallEvent::LocalMediaUpdated { .. } => event_names::LOCAL_MEDIA_UPDATED,
            CallEvent::RecordingStarted => event_names::RECORDING_STARTED,
            CallEvent::RecordingStopped => event_names::RECORDING_STOPPED,
            CallEvent::Error { .. } => event_names::ERROR,
        }
    }
}
