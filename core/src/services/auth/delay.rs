//! Simulated result delay applied before login and recovery outcomes
//!
//! A fixed pause before a result is reported, for interactive deployments.
//! It carries no ordering or correctness guarantee and is disabled unless
//! the latency configuration enables it.

use std::time::Duration;

use rd_shared::config::latency::LatencyConfig;
use tracing::debug;

/// Applies the configured pre-result pauses
#[derive(Debug, Clone)]
pub struct ResultDelay {
    config: LatencyConfig,
}

impl ResultDelay {
    /// Create a new delay from the latency configuration
    pub fn new(config: LatencyConfig) -> Self {
        Self { config }
    }

    /// Pause applied before a login result
    pub fn login_delay(&self) -> Duration {
        if self.config.enabled {
            Duration::from_millis(self.config.login_delay_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Pause applied before a recovery result
    pub fn recovery_delay(&self) -> Duration {
        if self.config.enabled {
            Duration::from_millis(self.config.recovery_delay_ms)
        } else {
            Duration::ZERO
        }
    }

    /// Wait out the login pause, if any
    pub async fn before_login_result(&self) {
        Self::apply(self.login_delay()).await;
    }

    /// Wait out the recovery pause, if any
    pub async fn before_recovery_result(&self) {
        Self::apply(self.recovery_delay()).await;
    }

    async fn apply(delay: Duration) {
        if !delay.is_zero() {
            debug!(delay_ms = delay.as_millis() as u64, "Applying simulated result delay");
            tokio::time::sleep(delay).await;
        }
    }
}
