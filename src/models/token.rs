use serde::{Deserialize, Serialize};

/// Meeting tokens are valid for one hour from minting
pub const TOKEN_TTL_SECONDS: i64 = 60 * 60;

/// Body of `POST /meeting-tokens` on the vendor API
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeetingTokenRequest {
    pub room: String,
    pub user_name: String,
    pub is_owner: bool,
    pub exp: i64,
    pub permissions: TokenPermissions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPermissions {
    pub can_send: bool,
    pub can_admin: bool,
    pub can_recording: bool,
}

impl MeetingTokenRequest {
    /// Owners get admin and recording rights; everyone may send media.
    pub fn new(room: &str, user_name: &str, is_owner: bool, now: i64) -> Self {
        Self {
            room: room.to_string(),
            user_name: user_name.to_string(),
            is_owner,
            exp: now + TOKEN_TTL_SECONDS,
            permissions: TokenPermissions {
                can_send: true,
                can_admin: is_owner,
                can_recording: is_owner,
            },
        }
    }
}

/// Token envelope, both from the vendor and to our API clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingToken {
    pub token: String,
}

/// POST /api/daily-co/tokens
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub room_name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub is_owner: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guest_token_has_no_elevated_permissions() {
        let request = MeetingTokenRequest::new("demo", "Alice", false, 1_000);

        assert!(request.permissions.can_send);
        assert!(!request.permissions.can_admin);
        assert!(!request.permissions.can_recording);
        assert_eq!(request.exp, 1_000 + TOKEN_TTL_SECONDS);
    }

    #[test]
    fn owner_token_can_admin_and_record() {
        let request = MeetingTokenRequest::new("demo", "Coach", true, 1_000);

        assert!(request.is_owner);
        assert!(request.permissions.can_send);
        assert!(request.permissions.can_admin);
        assert!(request.permissions.can_recording);
    }
}
