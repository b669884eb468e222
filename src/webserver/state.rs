/// Shared application state for the webserver
use crate::checker::EcoChecker;
use crate::config::ProvidersConfig;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub checker: Arc<EcoChecker>,

    /// Upstream endpoints, probed by the health route
    pub providers: Arc<ProvidersConfig>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(checker: Arc<EcoChecker>, providers: ProvidersConfig) -> Self {
        Self {
            checker,
            providers: Arc::new(providers),
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time).num_seconds().max(0) as u64
    }
}
