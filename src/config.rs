use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use deltaq_correct::CorrectConfig;

/// Top-level deltaq configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DeltaqConfig {
    /// Correction thresholds.
    #[serde(default)]
    pub correct: CorrectToml,

    /// Output naming.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrectToml {
    /// Flows below this magnitude pass through the correction as zero.
    #[serde(default = "default_zero_flow_threshold")]
    pub zero_flow_threshold: f64,

    /// Log-space anomalies beyond this many standard deviations fall
    /// back to a linear mean rescale.
    #[serde(default = "default_extreme_z_threshold")]
    pub extreme_z_threshold: f64,

    /// Extrapolate out-of-range values from the fitted log-normal tail.
    #[serde(default = "default_true")]
    pub tail_extrapolation: bool,
}

impl Default for CorrectToml {
    fn default() -> Self {
        Self {
            zero_flow_threshold: default_zero_flow_threshold(),
            extreme_z_threshold: default_extreme_z_threshold(),
            tail_extrapolation: true,
        }
    }
}

fn default_zero_flow_threshold() -> f64 {
    1e-3
}
fn default_extreme_z_threshold() -> f64 {
    3.5
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Marker inserted before the output extension, e.g. `flow.month`
    /// becomes `flow.HD.txt`.
    #[serde(default = "default_suffix")]
    pub suffix: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            suffix: default_suffix(),
        }
    }
}

fn default_suffix() -> String {
    "HD".to_string()
}

impl DeltaqConfig {
    /// Loads the TOML file at `path`, or the defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let toml_str = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read config file: {}", path.display()))?;
                toml::from_str(&toml_str).context("failed to parse TOML config")
            }
            None => Ok(Self::default()),
        }
    }

    /// Builds the engine configuration from the `[correct]` table.
    pub fn to_correct_config(&self) -> CorrectConfig {
        CorrectConfig::new()
            .with_zero_flow_threshold(self.correct.zero_flow_threshold)
            .with_extreme_z_threshold(self.correct.extreme_z_threshold)
            .with_tail_extrapolation(self.correct.tail_extrapolation)
    }
}
