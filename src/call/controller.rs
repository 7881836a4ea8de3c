use tokio::sync::mpsc;

use crate::call::events::CallEvent;
use crate::call::session::{reduce, CallFailure, CallSession, CallState};
use crate::call::widget::{CallFrame, CallWidgetProvider, FrameOptions, WidgetError};

/// Room and identity a controller joins with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinTarget {
    pub room_url: String,
    pub room_name: String,
    pub user_name: String,
    pub is_host: bool,
}

/// What the share control hands to the platform share sheet / clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    pub title: String,
    pub url: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ControlError {
    #[error("call controls are only available once joined")]
    NotJoined,

    #[error("only the host can control recording")]
    NotHost,

    /// Joined according to the event stream, but no frame is mounted
    #[error("no call frame is mounted")]
    NoFrame,

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

type LeaveCallback = Box<dyn FnMut() + Send>;

/// Owns the call frame for one mounted video room.
///
/// Local state only changes through [`CallFrameController::apply`]; controls
/// send a command and wait for the widget's echo event. The frame is
/// destroyed when the controller is dropped or remounted.
pub struct CallFrameController<P: CallWidgetProvider> {
    provider: P,
    target: JoinTarget,
    frame: Option<P::Frame>,
    events: Option<mpsc::UnboundedReceiver<CallEvent>>,
    session: CallSession,
    on_leave: Option<LeaveCallback>,
}

impl<P: CallWidgetProvider> CallFrameController<P> {
    pub fn new(provider: P, target: JoinTarget) -> Self {
        Self {
            provider,
            target,
            frame: None,
            events: None,
            session: CallSession::default(),
            on_leave: None,
        }
    }

    /// Callback fired once each time the call reaches `Left`
    pub fn on_leave(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_leave = Some(Box::new(callback));
        self
    }

    pub fn session(&self) -> &CallSession {
        &self.session
    }

    pub fn target(&self) -> &JoinTarget {
        &self.target
    }

    /// Load the widget if needed, build a frame and join right away.
    ///
    /// Any frame from a previous mount is destroyed first.
    pub async fn mount(&mut self) -> &CallSession {
        self.release();
        self.session = CallSession::default();

        if !self.provider.is_loaded() {
            self.session.state = CallState::LoadingScript;
            if let Err(e) = self.provider.load().await {
                return self.fail(CallFailure::ScriptLoad(e.to_string()));
            }
        }

        self.session.state = CallState::Initializing;
        let mut frame = match self.provider.create_frame(&FrameOptions::default()) {
            Ok(frame) => frame,
            Err(e) => return self.fail(CallFailure::Initialize(e.to_string())),
        };

        self.events = Some(frame.subscribe());
        let joined = frame
            .join(&self.target.room_url, &self.target.user_name)
            .await;
        self.frame = Some(frame);

        if let Err(e) = joined {
            return self.fail(CallFailure::Initialize(e.to_string()));
        }

        tracing::info!(
            room = %self.target.room_name,
            user = %self.target.user_name,
            "Joining call"
        );
        &self.session
    }

    /// Full reset: same as reloading the page that hosts the call.
    pub async fn retry(&mut self) -> &CallSession {
        tracing::info!(room = %self.target.room_name, "Retrying call");
        self.mount().await
    }

    /// Mirror one widget event into the session
    pub fn apply(&mut self, event: CallEvent) -> &CallSession {
        match &event {
            CallEvent::Error { error_msg } => {
                tracing::error!(room = %self.target.room_name, error = %error_msg, "Call error")
            }
            CallEvent::ParticipantJoined { participant }
            | CallEvent::ParticipantLeft { participant } => tracing::info!(
                event = event.name(),
                session_id = %participant.session_id,
                user = %participant.display_name(),
                "Participant event"
            ),
            other => tracing::debug!(event = other.name(), "Call event"),
        }

        let was_left = self.session.state == CallState::Left;
        self.session = reduce(std::mem::take(&mut self.session), &event);

        if !was_left && self.session.state == CallState::Left {
            if let Some(callback) = self.on_leave.as_mut() {
                callback();
            }
        }

        &self.session
    }

    /// Wait for the next widget event and apply it; `None` once the event
    /// stream is gone.
    pub async fn next_event(&mut self) -> Option<&CallSession> {
        let event = match self.events.as_mut() {
            Some(events) => events.recv().await?,
            None => return None,
        };
        Some(self.apply(event))
    }

    /// Drive the session until it leaves or fails. A frame whose event stream
    /// closes mid-call counts as a runtime failure.
    pub async fn run(&mut self) -> &CallSession {
        while !self.session.is_terminal() {
            let event = match self.events.as_mut() {
                Some(events) => events.recv().await,
                None => None,
            };

            match event {
                Some(event) => {
                    self.apply(event);
                }
                None => {
                    return self.fail(CallFailure::Runtime("call frame closed".to_string()));
                }
            }
        }

        &self.session
    }

    // ==================== Controls ====================

    fn joined_frame(&mut self) -> Result<&mut P::Frame, ControlError> {
        if !self.session.controls_enabled() {
            return Err(ControlError::NotJoined);
        }
        self.frame.as_mut().ok_or(ControlError::NoFrame)
    }

    pub async fn toggle_video(&mut self) -> Result<(), ControlError> {
        let enable = !self.session.video_enabled;
        self.joined_frame()?.set_local_video(enable).await?;
        Ok(())
    }

    pub async fn toggle_audio(&mut self) -> Result<(), ControlError> {
        let enable = !self.session.audio_enabled;
        self.joined_frame()?.set_local_audio(enable).await?;
        Ok(())
    }

    /// Host only
    pub async fn toggle_recording(&mut self) -> Result<(), ControlError> {
        let recording = self.session.recording;
        let is_host = self.target.is_host;
        let frame = self.joined_frame()?;

        if !is_host {
            return Err(ControlError::NotHost);
        }

        if recording {
            frame.stop_recording().await?;
        } else {
            frame.start_recording().await?;
        }
        Ok(())
    }

    pub async fn leave(&mut self) -> Result<(), ControlError> {
        self.joined_frame()?.leave().await?;
        Ok(())
    }

    pub fn share(&self) -> Result<ShareLink, ControlError> {
        if !self.session.controls_enabled() {
            return Err(ControlError::NotJoined);
        }

        Ok(ShareLink {
            title: format!("Join {}", self.target.room_name),
            url: self.target.room_url.clone(),
        })
    }

    // ==================== Internals ====================

    fn fail(&mut self, failure: CallFailure) -> &CallSession {
        tracing::error!(room = %self.target.room_name, error = %failure, "Call failed");
        self.session.state = CallState::Error(failure);
        &self.session
    }

    fn release(&mut self) {
        self.events = None;
        if let Some(mut frame) = self.frame.take() {
            frame.destroy();
            tracing::debug!(room = %self.target.room_name, "Call frame destroyed");
        }
    }
}

impl<P: CallWidgetProvider> Drop for CallFrameController<P> {
    fn drop(&mut self) {
        self.release();
    }
}
