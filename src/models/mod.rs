pub mod room;
pub mod session;
pub mod token;

pub use room::{
    CreateRoomRequest,
    DailyRoom,
    NewRoom,
    Privacy,
    RecordingMode,
    RoomParticipant,
    RoomPlan,
    RoomProperties,
    RoomQuery,
};

pub use token::{MeetingToken, MeetingTokenRequest, TokenPermissions, TokenRequest};

pub use session::{ConnectionTestResponse, ProvisionKind, ProvisionRequest, ProvisionResponse};
