//! Room names and property plans for the convenience constructors.
//!
//! Names are `{prefix}-{unix millis}-{9 base36 chars}`. Uniqueness is
//! probabilistic: two names minted in the same millisecond collide with
//! probability 36^-9 (about 1e-14), which needs no coordination between
//! concurrent callers.

use chrono::{DateTime, Utc};
use rand::Rng;

use crate::models::{RecordingMode, RoomPlan, RoomProperties};

pub const ROOM_SUFFIX_LEN: usize = 9;
pub const VIDEO_SESSION_PREFIX: &str = "session";
pub const WEBINAR_PREFIX: &str = "webinar";
pub const SMOKE_TEST_PREFIX: &str = "test";

const SUFFIX_CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

const WEBINAR_TTL_SECONDS: i64 = 24 * 60 * 60;
const SMOKE_TEST_TTL_SECONDS: i64 = 5 * 60;

pub fn generate_room_name<R: Rng>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let suffix: String = (0..ROOM_SUFFIX_LEN)
        .map(|_| SUFFIX_CHARSET[rng.random_range(0..SUFFIX_CHARSET.len())] as char)
        .collect();

    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

/// 1:1 coaching call: two seats, cloud recording, camera and mic on.
pub fn video_session_plan<R: Rng>(
    duration_minutes: u32,
    now: DateTime<Utc>,
    rng: &mut R,
) -> RoomPlan {
    RoomPlan {
        name: generate_room_name(VIDEO_SESSION_PREFIX, now, rng),
        properties: RoomProperties {
            exp: Some(now.timestamp() + i64::from(duration_minutes) * 60),
            max_participants: Some(2),
            enable_recording: Some(RecordingMode::Cloud),
            start_video_off: Some(false),
            start_audio_off: Some(false),
            ..Default::default()
        },
    }
}

/// Broadcast session: attendees join muted with camera off.
pub fn webinar_plan<R: Rng>(max_attendees: u32, now: DateTime<Utc>, rng: &mut R) -> RoomPlan {
    RoomPlan {
        name: generate_room_name(WEBINAR_PREFIX, now, rng),
        properties: RoomProperties {
            exp: Some(now.timestamp() + WEBINAR_TTL_SECONDS),
            max_participants: Some(max_attendees),
            enable_recording: Some(RecordingMode::Cloud),
            start_video_off: Some(true),
            start_audio_off: Some(true),
            ..Default::default()
        },
    }
}

/// Throwaway room for the connection test; gone after five minutes.
pub fn smoke_test_plan<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> RoomPlan {
    RoomPlan {
        name: generate_room_name(SMOKE_TEST_PREFIX, now, rng),
        properties: RoomProperties {
            exp: Some(now.timestamp() + SMOKE_TEST_TTL_SECONDS),
            max_participants: Some(2),
            ..Default::default()
        },
    }
}
