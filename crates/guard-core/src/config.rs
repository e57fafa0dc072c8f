//! Configuration for the guard engine.

use serde::{Deserialize, Serialize};

use crate::error::GuardError;
use crate::Result;

/// Tunable thresholds for the jailbreak defense.
///
/// The config is immutable once handed to the engine. Validation happens
/// at engine construction, not at analysis time: a config that passes
/// [`GuardConfig::validate`] can never make `analyze` fail.
///
/// Note that `monitor_threshold <= block_threshold` is *not* enforced.
/// A caller that inverts the two gets a policy where the monitor tier
/// never fires; that is the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Risk score at or above which a prompt is blocked outright.
    pub block_threshold: f64,

    /// Risk score at or above which a prompt is paused for review.
    pub monitor_threshold: f64,

    /// Number of perturbed variants (including the original) scored per
    /// analysis. Must be at least 1.
    pub smoothing_samples: usize,

    /// Maximum number of reasons quoted in a block/monitor message.
    pub max_quoted_reasons: usize,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            block_threshold: 0.55,
            monitor_threshold: 0.4,
            smoothing_samples: 4,
            max_quoted_reasons: 3,
        }
    }
}

impl GuardConfig {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::Config`] if a threshold is non-finite or
    /// `smoothing_samples` is zero.
    pub fn validate(&self) -> Result<()> {
        if !self.block_threshold.is_finite() {
            return Err(GuardError::Config(format!(
                "block_threshold must be finite, got {}",
                self.block_threshold
            )));
        }
        if !self.monitor_threshold.is_finite() {
            return Err(GuardError::Config(format!(
                "monitor_threshold must be finite, got {}",
                self.monitor_threshold
            )));
        }
        if self.smoothing_samples == 0 {
            return Err(GuardError::Config(
                "smoothing_samples must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuardConfig::default();
        assert!((config.block_threshold - 0.55).abs() < f64::EPSILON);
        assert!((config.monitor_threshold - 0.4).abs() < f64::EPSILON);
        assert_eq!(config.smoothing_samples, 4);
        assert_eq!(config.max_quoted_reasons, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = GuardConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: GuardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.smoothing_samples, config.smoothing_samples);
        assert!((parsed.block_threshold - config.block_threshold).abs() < f64::EPSILON);
    }

    #[test]
    fn test_nonfinite_threshold_rejected() {
        let config = GuardConfig {
            block_threshold: f64::NAN,
            ..GuardConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GuardConfig {
            monitor_threshold: f64::INFINITY,
            ..GuardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_samples_rejected() {
        let config = GuardConfig {
            smoothing_samples: 0,
            ..GuardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_thresholds_accepted() {
        // Deliberately not validated; the monitor tier simply never fires.
        let config = GuardConfig {
            block_threshold: 0.3,
            monitor_threshold: 0.6,
            ..GuardConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
