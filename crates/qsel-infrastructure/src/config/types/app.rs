//! Main application configuration

use serde::{Deserialize, Serialize};

use super::logging::LoggingConfig;
use super::resolution::ResolutionConfig;

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// How resolved views pick their default instance
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,
}
