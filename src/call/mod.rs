//! Live-call client: mirrors the embedded call widget's events into a
//! [`CallSession`] and routes user controls to the frame it owns.

pub mod controller;
pub mod events;
pub mod session;
pub mod widget;

pub use controller::{CallFrameController, ControlError, JoinTarget, ShareLink};
pub use events::{CallEvent, Participant};
pub use session::{reduce, CallFailure, CallSession, CallState};
pub use widget::{CallFrame, CallWidgetProvider, FrameOptions, WidgetError};
