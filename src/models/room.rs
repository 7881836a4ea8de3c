use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Seconds a room stays open when the caller does not say otherwise
pub const DEFAULT_ROOM_TTL_SECONDS: i64 = 24 * 60 * 60;
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 10;

/// Room as returned by the Daily.co REST API.
///
/// Top-level fields not modeled here (`api_created`, ...) land in `extra` and
/// are written back out unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRoom {
    pub id: String,
    pub name: String,
    pub url: String,
    pub privacy: Privacy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, alias = "config")]
    pub properties: RoomProperties,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Room visibility. Values the vendor adds later are kept as `Other`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Privacy {
    #[default]
    Public,
    Private,
    Other(String),
}

impl From<String> for Privacy {
    fn from(value: String) -> Self {
        match value.as_str() {
            "public" => Self::Public,
            "private" => Self::Private,
            _ => Self::Other(value),
        }
    }
}

impl From<Privacy> for String {
    fn from(privacy: Privacy) -> Self {
        match privacy {
            Privacy::Public => "public".to_string(),
            Privacy::Private => "private".to_string(),
            Privacy::Other(value) => value,
        }
    }
}

/// `enable_recording` mode. Anything beyond the three common modes
/// (`raw-tracks`, ...) round-trips through `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RecordingMode {
    Cloud,
    Local,
    Off,
    Other(String),
}

impl From<String> for RecordingMode {
    fn from(value: String) -> Self {
        match value.as_str() {
            "cloud" => Self::Cloud,
            "local" => Self::Local,
            "off" => Self::Off,
            _ => Self::Other(value),
        }
    }
}

impl From<RecordingMode> for String {
    fn from(mode: RecordingMode) -> Self {
        match mode {
            RecordingMode::Cloud => "cloud".to_string(),
            RecordingMode::Local => "local".to_string(),
            RecordingMode::Off => "off".to_string(),
            RecordingMode::Other(value) => value,
        }
    }
}

/// Room property bag.
///
/// Every field is optional so the same type carries both caller overrides and
/// the fully merged bag sent to the vendor. Vendor properties this crate does
/// not model are kept in `extra` and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomProperties {
    /// Expiry, unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eject_at_room_exp: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_chat: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_recording: Option<RecordingMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_video_off: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_audio_off: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<u32>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RoomProperties {
    /// Defaults for a plain room created at `now` (unix seconds)
    pub fn defaults(now: i64) -> Self {
        Self {
            exp: Some(now + DEFAULT_ROOM_TTL_SECONDS),
            eject_at_room_exp: Some(true),
            enable_chat: Some(true),
            enable_recording: Some(RecordingMode::Cloud),
            start_video_off: Some(false),
            start_audio_off: Some(false),
            max_participants: Some(DEFAULT_MAX_PARTICIPANTS),
            extra: Map::new(),
        }
    }

    /// Lay `self` over `defaults`: any key set here wins, every other key
    /// keeps its default.
    pub fn merged_over(self, defaults: RoomProperties) -> RoomProperties {
        let mut extra = defaults.extra;
        extra.extend(self.extra);

        RoomProperties {
            exp: self.exp.or(defaults.exp),
            eject_at_room_exp: self.eject_at_room_exp.or(defaults.eject_at_room_exp),
            enable_chat: self.enable_chat.or(defaults.enable_chat),
            enable_recording: self.enable_recording.or(defaults.enable_recording),
            start_video_off: self.start_video_off.or(defaults.start_video_off),
            start_audio_off: self.start_audio_off.or(defaults.start_audio_off),
            max_participants: self.max_participants.or(defaults.max_participants),
            extra,
        }
    }
}

/// Body of `POST /rooms` on the vendor API
#[derive(Debug, Clone, Serialize)]
pub struct NewRoom {
    pub name: String,
    pub privacy: Privacy,
    pub properties: RoomProperties,
}

/// A room name plus the overrides a convenience constructor wants applied
#[derive(Debug, Clone, PartialEq)]
pub struct RoomPlan {
    pub name: String,
    pub properties: RoomProperties,
}

/// Entry of the vendor's participant (presence) listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomParticipant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, alias = "userName", skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, alias = "joinTime", skip_serializing_if = "Option::is_none")]
    pub join_time: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// POST /api/daily-co/rooms
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub options: Option<RoomProperties>,
}

/// `?roomName=` query used by the read/delete/diagnostic routes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomQuery {
    #[serde(default)]
    pub room_name: Option<String>,
}
