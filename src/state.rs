use std::sync::Arc;

use crate::config::Config;
use crate::daily::{DailyClient, DailyError};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub daily: Arc<DailyClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, DailyError> {
        let daily = DailyClient::new(&config.daily)?;

        Ok(Self {
            config: Arc::new(config),
            daily: Arc::new(daily),
        })
    }
}
