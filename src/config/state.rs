// Application state: the composition root wiring services into handlers

use std::sync::Arc;
use crate::api::ping::service::PingService;
use crate::config::environment::EnvironmentVariables;

#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub ping_service: Arc<PingService>,
}

impl AppState {
    /// Builds every service once and hands them out behind `Arc`
    pub fn new(environment: Arc<EnvironmentVariables>) -> Self {
        Self {
            environment,
            ping_service: Arc::new(PingService::new()),
        }
    }

    /// Wires the state from the process-wide configuration singleton
    pub fn from_env() -> anyhow::Result<Self> {
        let environment: Arc<EnvironmentVariables> = EnvironmentVariables::try_instance()?;
        Ok(Self::new(environment))
    }
}
