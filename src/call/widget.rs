//! Capability the platform layer injects so the controller never touches the
//! widget runtime directly.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::call::events::CallEvent;

#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("call widget failed to load: {0}")]
    ScriptLoad(String),

    #[error("call frame could not be created: {0}")]
    Frame(String),

    #[error("call frame command failed: {0}")]
    Command(String),
}

/// Chrome options for a new frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOptions {
    pub show_leave_button: bool,
    pub show_fullscreen_button: bool,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            show_leave_button: true,
            show_fullscreen_button: true,
        }
    }
}

/// Loads the widget runtime and builds frames from it
#[async_trait]
pub trait CallWidgetProvider: Send + Sync {
    type Frame: CallFrame;

    /// Runtime already present, no load needed
    fn is_loaded(&self) -> bool;

    async fn load(&self) -> Result<(), WidgetError>;

    fn create_frame(&self, options: &FrameOptions) -> Result<Self::Frame, WidgetError>;
}

/// One live call frame.
///
/// Commands only ask the widget to act; the outcome arrives later as a
/// [`CallEvent`] on the subscribed channel.
#[async_trait]
pub trait CallFrame: Send {
    fn subscribe(&mut self) -> mpsc::UnboundedReceiver<CallEvent>;

    async fn join(&mut self, url: &str, user_name: &str) -> Result<(), WidgetError>;

    async fn leave(&mut self) -> Result<(), WidgetError>;

    async fn set_local_video(&mut self, enabled: bool) -> Result<(), WidgetError>;

    async fn set_local_audio(&mut self, enabled: bool) -> Result<(), WidgetError>;

    async fn start_recording(&mut self) -> Result<(), WidgetError>;

    async fn stop_recording(&mut self) -> Result<(), WidgetError>;

    /// Tear down the frame; called exactly once by its owner
    fn destroy(&mut self);
}
