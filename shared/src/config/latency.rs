//! Simulated result latency configuration
//!
//! Interactive deployments pause for a fixed interval before showing the
//! outcome of a login or recovery attempt. The pause carries no ordering or
//! correctness guarantee and is disabled by default.

use serde::{Deserialize, Serialize};
use std::env;

/// Delay applied before a login result is reported, in milliseconds
pub const LOGIN_DELAY_MS: u64 = 1500;

/// Delay applied before a recovery result is reported, in milliseconds
pub const RECOVERY_DELAY_MS: u64 = 2000;

/// Simulated latency configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct LatencyConfig {
    /// Whether the artificial pause is applied at all
    pub enabled: bool,

    /// Pause before a login result, in milliseconds
    pub login_delay_ms: u64,

    /// Pause before a recovery result, in milliseconds
    pub recovery_delay_ms: u64,
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            login_delay_ms: LOGIN_DELAY_MS,
            recovery_delay_ms: RECOVERY_DELAY_MS,
        }
    }
}

impl LatencyConfig {
    /// Configuration with the interactive result pauses enabled
    pub fn interactive() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    /// Create from environment variables
    pub fn from_env() -> Self {
        let enabled = env::var("SIMULATED_LATENCY")
            .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "on"))
            .unwrap_or(false);
        let login_delay_ms = env::var("LOGIN_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(LOGIN_DELAY_MS);
        let recovery_delay_ms = env::var("RECOVERY_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(RECOVERY_DELAY_MS);

        Self {
            enabled,
            login_delay_ms,
            recovery_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_disabled() {
        let config = LatencyConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.login_delay_ms, 1500);
        assert_eq!(config.recovery_delay_ms, 2000);
    }

    #[test]
    fn test_interactive_enables_pauses() {
        let config = LatencyConfig::interactive();
        assert!(config.enabled);
    }
}
