use std::sync::Arc;

use regen_config::Config;
use regen_core::{Clock, TokioClock};

/// Built once at startup and shared read-only
pub struct AppState {
    pub config: Config,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, Arc::new(TokioClock::new()))
    }

    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Self {
        Self { config, clock }
    }
}
