use chrono::Utc;
use reqwest::{Client, Response, Url};
use serde::Deserialize;

use crate::config::{validate_daily_config, DailyConfig};
use crate::daily::{naming, DailyError};
use crate::models::{
    DailyRoom, MeetingToken, MeetingTokenRequest, NewRoom, Privacy, RoomParticipant, RoomPlan,
    RoomProperties,
};

/// Daily.co REST client.
///
/// Plain request/response: no local state, no retries. Every non-success
/// status comes back as [`DailyError::Integration`] carrying the vendor's
/// status and body.
#[derive(Clone)]
pub struct DailyClient {
    client: Client,
    api_key: String,
    api_url: Url,
    domain: String,
}

#[derive(Deserialize)]
struct ParticipantList {
    #[serde(default)]
    data: Vec<RoomParticipant>,
}

impl DailyClient {
    pub fn new(config: &DailyConfig) -> Result<Self, DailyError> {
        if !validate_daily_config(config) {
            return Err(DailyError::MissingApiKey);
        }

        let api_url =
            Url::parse(&config.api_url).map_err(|e| DailyError::InvalidBaseUrl(e.to_string()))?;
        if api_url.cannot_be_a_base() {
            return Err(DailyError::InvalidBaseUrl(config.api_url.clone()));
        }

        Ok(Self {
            client: Client::new(),
            api_key: config.api_key.clone(),
            api_url,
            domain: config.domain.clone(),
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Pass successful responses through, turn everything else into an
    /// integration error. Callers decide whether and where to log it.
    async fn check(res: Response) -> Result<Response, DailyError> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let body = res.text().await.unwrap_or_default();

        Err(DailyError::Integration {
            status: status.as_u16(),
            body,
        })
    }

    // ==================== Rooms ====================

    /// Create a room, laying `overrides` over the default property bag.
    ///
    /// The name is sent exactly as given; a blank name is rejected.
    pub async fn create_room(
        &self,
        name: &str,
        overrides: RoomProperties,
    ) -> Result<DailyRoom, DailyError> {
        if name.trim().is_empty() {
            return Err(DailyError::InvalidRequest("room name is required"));
        }

        let now = Utc::now().timestamp();
        let properties = overrides.merged_over(RoomProperties::defaults(now));
        if properties.exp.is_some_and(|exp| exp <= now) {
            return Err(DailyError::InvalidRequest("room expiry must be in the future"));
        }

        let body = NewRoom {
            name: name.to_string(),
            privacy: Privacy::Public,
            properties,
        };

        let res = self
            .client
            .post(self.endpoint(&["rooms"]))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let room: DailyRoom = Self::check(res).await?.json().await?;
        tracing::info!(room = %room.name, exp = ?room.properties.exp, "Daily.co room created");

        Ok(room)
    }

    pub async fn get_room(&self, name: &str) -> Result<DailyRoom, DailyError> {
        let res = self
            .client
            .get(self.endpoint(&["rooms", name]))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Ok(Self::check(res).await?.json().await?)
    }

    /// Deleting an already deleted room fails like any other vendor error.
    pub async fn delete_room(&self, name: &str) -> Result<(), DailyError> {
        let res = self
            .client
            .delete(self.endpoint(&["rooms", name]))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        Self::check(res).await?;
        tracing::info!(room = %name, "Daily.co room deleted");

        Ok(())
    }

    /// Diagnostics only; live participant state comes from call events.
    pub async fn get_room_participants(
        &self,
        room_name: &str,
    ) -> Result<Vec<RoomParticipant>, DailyError> {
        let res = self
            .client
            .get(self.endpoint(&["rooms", room_name, "participants"]))
            .bearer_auth(&self.api_key)
            .send()
            .await?;

        let list: ParticipantList = Self::check(res).await?.json().await?;
        Ok(list.data)
    }

    // ==================== Tokens ====================

    /// Mint a one-hour token for `user_name` in `room_name`
    pub async fn get_meeting_token(
        &self,
        room_name: &str,
        user_name: &str,
        is_owner: bool,
    ) -> Result<String, DailyError> {
        if room_name.trim().is_empty() {
            return Err(DailyError::InvalidRequest("room name is required"));
        }
        if user_name.trim().is_empty() {
            return Err(DailyError::InvalidRequest("user name is required"));
        }

        let body = MeetingTokenRequest::new(room_name, user_name, is_owner, Utc::now().timestamp());

        let res = self
            .client
            .post(self.endpoint(&["meeting-tokens"]))
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let MeetingToken { token } = Self::check(res)
            .await?
            .json::<MeetingToken>()
            .await?;
        tracing::debug!(room = %room_name, is_owner, "Meeting token minted");

        Ok(token)
    }

    // ==================== Convenience ====================

    pub fn room_url(&self, room_name: &str, token: Option<&str>) -> String {
        match token {
            Some(token) => format!("https://{}/{}?t={}", self.domain, room_name, token),
            None => format!("https://{}/{}", self.domain, room_name),
        }
    }

    pub async fn create_plan(&self, plan: RoomPlan) -> Result<DailyRoom, DailyError> {
        self.create_room(&plan.name, plan.properties).await
    }

    /// Two-seat coaching room open for `duration_minutes`
    pub async fn create_video_session_room(
        &self,
        title: &str,
        duration_minutes: u32,
    ) -> Result<DailyRoom, DailyError> {
        let plan = naming::video_session_plan(duration_minutes, Utc::now(), &mut rand::rng());
        tracing::info!(title = %title, room = %plan.name, duration_minutes, "Creating video session room");
        self.create_plan(plan).await
    }

    /// Day-long broadcast room capped at `max_attendees`
    pub async fn create_webinar_room(
        &self,
        title: &str,
        max_attendees: u32,
    ) -> Result<DailyRoom, DailyError> {
        let plan = naming::webinar_plan(max_attendees, Utc::now(), &mut rand::rng());
        tracing::info!(title = %title, room = %plan.name, max_attendees, "Creating webinar room");
        self.create_plan(plan).await
    }

    /// Authenticated read used for health checks; never errors.
    pub async fn test_connection(&self) -> bool {
        let res = self
            .client
            .get(self.endpoint(&["rooms"]))
            .query(&[("limit", "1")])
            .bearer_auth(&self.api_key)
            .send()
            .await;

        match res {
            Ok(res) if res.status().is_success() => true,
            Ok(res) => {
                tracing::warn!(status = %res.status(), "Daily.co connection test rejected");
                false
            }
            Err(e) => {
                tracing::warn!(error = %e, "Daily.co connection test failed");
                false
            }
        }
    }
}
