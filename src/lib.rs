pub mod api;
pub mod call;
pub mod config;
pub mod daily;
pub mod error;
pub mod models;
pub mod state;

pub use config::Config;
pub use error::{AppError, Result};
pub use state::AppState;
