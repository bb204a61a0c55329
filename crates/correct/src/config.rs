//! Configuration for the correction engine.

use crate::error::CorrectError;

/// Configuration for hybrid-delta bias correction.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use deltaq_correct::CorrectConfig;
///
/// let config = CorrectConfig::new().with_extreme_z_threshold(4.0);
/// ```
#[derive(Clone, Debug)]
pub struct CorrectConfig {
    zero_flow_threshold: f64,
    extreme_z_threshold: f64,
    tail_extrapolation: bool,
}

impl CorrectConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `zero_flow_threshold = 1e-3`,
    /// `extreme_z_threshold = 3.5`, `tail_extrapolation = true`.
    pub fn new() -> Self {
        Self {
            zero_flow_threshold: 1e-3,
            extreme_z_threshold: 3.5,
            tail_extrapolation: true,
        }
    }

    // --- Builder methods ---

    /// Sets the threshold below which a flow is treated as exactly zero.
    pub fn with_zero_flow_threshold(mut self, v: f64) -> Self {
        self.zero_flow_threshold = v;
        self
    }

    /// Sets the |z| threshold for the extreme-anomaly linear rescale.
    pub fn with_extreme_z_threshold(mut self, v: f64) -> Self {
        self.extreme_z_threshold = v;
        self
    }

    /// Sets whether out-of-range values fall back to log-normal tail
    /// extrapolation. Disabling this makes out-of-range values an error.
    pub fn with_tail_extrapolation(mut self, b: bool) -> Self {
        self.tail_extrapolation = b;
        self
    }

    // --- Accessors ---

    /// Returns the zero-flow threshold.
    pub fn zero_flow_threshold(&self) -> f64 {
        self.zero_flow_threshold
    }

    /// Returns the extreme-anomaly |z| threshold.
    pub fn extreme_z_threshold(&self) -> f64 {
        self.extreme_z_threshold
    }

    /// Returns whether tail extrapolation is enabled.
    pub fn tail_extrapolation(&self) -> bool {
        self.tail_extrapolation
    }

    /// Validates this configuration.
    ///
    /// Checks that `zero_flow_threshold` is finite and positive and that
    /// `extreme_z_threshold` is finite and positive.
    pub fn validate(&self) -> Result<(), CorrectError> {
        if !self.zero_flow_threshold.is_finite() || self.zero_flow_threshold <= 0.0 {
            return Err(CorrectError::InvalidConfig {
                reason: format!(
                    "zero_flow_threshold must be finite and > 0, got {}",
                    self.zero_flow_threshold
                ),
            });
        }
        if !self.extreme_z_threshold.is_finite() || self.extreme_z_threshold <= 0.0 {
            return Err(CorrectError::InvalidConfig {
                reason: format!(
                    "extreme_z_threshold must be finite and > 0, got {}",
                    self.extreme_z_threshold
                ),
            });
        }
        Ok(())
    }
}

impl Default for CorrectConfig {
    fn default() -> Self {
        Self::new()
    }
}
