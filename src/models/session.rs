use serde::{Deserialize, Serialize};

use super::room::DailyRoom;

/// Which convenience room to provision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProvisionKind {
    Session,
    Webinar,
}

/// POST /api/daily-co/sessions
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequest {
    pub kind: ProvisionKind,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub host_name: Option<String>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub max_attendees: Option<u32>,
}

/// Room plus the host's owner token and ready-to-open link
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionResponse {
    pub room: DailyRoom,
    pub token: String,
    pub join_url: String,
}

/// GET /api/daily-co/test
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionTestResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_room: Option<DailyRoom>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
