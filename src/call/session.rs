use crate::call::events::{CallEvent, Participant};

/// Lifecycle of one call attempt.
///
/// Camera, mic and recording are flags on [`CallSession`] while `Joined`
/// rather than separate states.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CallState {
    #[default]
    Unloaded,
    LoadingScript,
    Initializing,
    Joined,
    Left,
    Error(CallFailure),
}

/// Why a call attempt ended in [`CallState::Error`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CallFailure {
    #[error("Failed to load call widget: {0}")]
    ScriptLoad(String),
    #[error("Failed to initialize video room: {0}")]
    Initialize(String),
    #[error("Video error: {0}")]
    Runtime(String),
}

/// Local view of the active call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSession {
    pub state: CallState,
    pub video_enabled: bool,
    pub audio_enabled: bool,
    pub recording: bool,
    /// Remote participants in join order, unique by session id
    pub participants: Vec<Participant>,
}

impl Default for CallSession {
    fn default() -> Self {
        Self {
            state: CallState::Unloaded,
            video_enabled: true,
            audio_enabled: true,
            recording: false,
            participants: Vec::new(),
        }
    }
}

impl CallSession {
    /// Controls (toggles, leave, share) only act on a joined call
    pub fn controls_enabled(&self) -> bool {
        self.state == CallState::Joined
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, CallState::Left | CallState::Error(_))
    }

    pub fn failure(&self) -> Option<&CallFailure> {
        match &self.state {
            CallState::Error(failure) => Some(failure),
            _ => None,
        }
    }

    /// Remote participants plus the local user
    pub fn headcount(&self) -> usize {
        self.participants.len() + 1
    }

    fn upsert_participant(&mut self, participant: &Participant) {
        match self
            .participants
            .iter_mut()
            .find(|p| p.session_id == participant.session_id)
        {
            Some(existing) => *existing = participant.clone(),
            None => self.participants.push(participant.clone()),
        }
    }

    fn remove_participant(&mut self, session_id: &str) {
        self.participants.retain(|p| p.session_id != session_id);
    }
}

/// Next session state after `event`.
///
/// `Error` is terminal and ignores everything. `Left` only accepts a vendor
/// error. Everything else mirrors the event.
pub fn reduce(mut session: CallSession, event: &CallEvent) -> CallSession {
    if matches!(session.state, CallState::Error(_)) {
        return session;
    }

    if let CallEvent::Error { error_msg } = event {
        session.state = CallState::Error(CallFailure::Runtime(error_msg.clone()));
        return session;
    }

    if session.state == CallState::Left {
        return session;
    }

    match event {
        CallEvent::Joined => session.state = CallState::Joined,
        CallEvent::Left => {
            session.state = CallState::Left;
            session.recording = false;
            session.participants.clear();
        }
        CallEvent::ParticipantJoined { participant } => session.upsert_participant(participant),
        CallEvent::ParticipantLeft { participant } => {
            session.remove_participant(&participant.session_id)
        }
        CallEvent::LocalMediaUpdated { video, audio } => {
            session.video_enabled = *video;
            session.audio_enabled = *audio;
        }
        CallEvent::RecordingStarted => session.recording = true,
        CallEvent::RecordingStopped => session.recording = false,
        CallEvent::Error { .. } => {}
    }

    session
}
