//! Settings for histogram matching.
//!
//! The hosting application stores per-plugin settings as YAML. The matcher
//! has a single knob, `threshold`, which caps how far the swapped face's
//! distribution is pulled toward the original's.
//!
//! ```yaml
//! threshold: 0.95
//! ```
//!
//! # Example
//!
//! ```rust
//! use swapfx_ops::HistMatchConfig;
//!
//! let cfg = HistMatchConfig::from_yaml_str("threshold: 0.9").unwrap();
//! assert_eq!(cfg.threshold, 0.9);
//!
//! assert!(HistMatchConfig::from_yaml_str("threshold: 1.5").is_err());
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{OpsError, OpsResult};

/// Shipped default: match up to the 99th percentile.
pub const DEFAULT_THRESHOLD: f32 = 0.99;

/// Histogram matching settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistMatchConfig {
    /// Fraction in (0, 1] of the original CDF reached by the swapped face's
    /// brightest value. 1.0 is a full match.
    pub threshold: f32,
}

impl Default for HistMatchConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl HistMatchConfig {
    /// Creates a validated config.
    pub fn new(threshold: f32) -> OpsResult<Self> {
        let cfg = Self { threshold };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Creates a config from a percentage, as hosts usually present it.
    ///
    /// ```rust
    /// use swapfx_ops::HistMatchConfig;
    ///
    /// let cfg = HistMatchConfig::from_percent(99.0).unwrap();
    /// assert!((cfg.threshold - 0.99).abs() < 1e-6);
    /// ```
    pub fn from_percent(percent: f32) -> OpsResult<Self> {
        Self::new(percent / 100.0)
    }

    /// Checks that `threshold` is finite and in (0, 1].
    pub fn validate(&self) -> OpsResult<()> {
        validate_threshold(self.threshold)
    }

    /// Parses and validates a YAML document.
    pub fn from_yaml_str(yaml: &str) -> OpsResult<Self> {
        let cfg: Self = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Loads and validates a YAML config file.
    pub fn from_file(path: impl AsRef<Path>) -> OpsResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let cfg = Self::from_yaml_str(&text)?;
        debug!(path = %path.display(), threshold = cfg.threshold, "loaded hist match config");
        Ok(cfg)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> OpsResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

pub(crate) fn validate_threshold(threshold: f32) -> OpsResult<()> {
    if !threshold.is_finite() || threshold <= 0.0 || threshold > 1.0 {
        return Err(OpsError::InvalidParameter(format!(
            "threshold must be in (0, 1], got {threshold}"
        )));
    }
    Ok(())
}
