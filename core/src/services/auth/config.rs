//! Configuration for the authentication service

use rd_shared::config::latency::LatencyConfig;

/// Configuration for the authentication service
#[derive(Debug, Clone, Default)]
pub struct AuthServiceConfig {
    /// Simulated latency applied before a result is reported
    pub latency: LatencyConfig,
}

impl AuthServiceConfig {
    /// Configuration with the interactive result pauses enabled
    pub fn interactive() -> Self {
        Self {
            latency: LatencyConfig::interactive(),
        }
    }
}
