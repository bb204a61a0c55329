//! Error types for the deltaq-correct crate.

use deltaq_series::SeriesError;

/// Which input series an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesRole {
    /// The observed record the correction targets.
    Observed,
    /// The baseline (historical-simulated) reference series.
    Baseline,
    /// The series being corrected.
    Future,
}

impl std::fmt::Display for SeriesRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SeriesRole::Observed => "observed",
            SeriesRole::Baseline => "baseline",
            SeriesRole::Future => "future",
        };
        f.write_str(name)
    }
}

/// Error type for all fallible operations in the deltaq-correct crate.
///
/// Every variant names the series and pipeline stage it arose from so a
/// batch driver can report which input failed and why before moving on.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CorrectError {
    /// Returned when a sample is too small for distribution fitting.
    #[error("{role} series, {stage}: {got} value(s), need at least {needed}")]
    InsufficientData {
        /// Series the sample was drawn from.
        role: SeriesRole,
        /// Pipeline stage building the sample.
        stage: String,
        /// Minimum sample size required.
        needed: usize,
        /// Actual sample size.
        got: usize,
    },

    /// Returned when every value in a sample is zero, leaving the
    /// log-space fit undefined.
    #[error("{role} series, {stage}: all values are non-positive, log-normal fit undefined")]
    NonPositiveSample {
        /// Series the sample was drawn from.
        role: SeriesRole,
        /// Pipeline stage building the sample.
        stage: String,
    },

    /// Returned when a value can be placed by neither interpolation nor
    /// tail extrapolation.
    ///
    /// Only reachable when tail extrapolation is disabled in the
    /// configuration; with the default configuration every out-of-range
    /// value is absorbed by extrapolation or the extreme-anomaly override.
    #[error("value {value} is outside both distributions and tail extrapolation is disabled")]
    OutOfRangeUnmapped {
        /// The value that could not be mapped.
        value: f64,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps a series-level failure (irregular timestep, misaligned
    /// water years, empty input).
    #[error("{role} series: {source}")]
    Series {
        /// Series the failure refers to.
        role: SeriesRole,
        /// The underlying series error.
        #[source]
        source: SeriesError,
    },
}

impl CorrectError {
    /// Attaches a series role to a [`SeriesError`].
    pub fn series(role: SeriesRole, source: SeriesError) -> Self {
        CorrectError::Series { role, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_display() {
        assert_eq!(SeriesRole::Observed.to_string(), "observed");
        assert_eq!(SeriesRole::Baseline.to_string(), "baseline");
        assert_eq!(SeriesRole::Future.to_string(), "future");
    }

    #[test]
    fn error_insufficient_data() {
        let e = CorrectError::InsufficientData {
            role: SeriesRole::Observed,
            stage: "monthly context for month 3".to_string(),
            needed: 2,
            got: 1,
        };
        assert_eq!(
            e.to_string(),
            "observed series, monthly context for month 3: 1 value(s), need at least 2"
        );
    }

    #[test]
    fn error_non_positive_sample() {
        let e = CorrectError::NonPositiveSample {
            role: SeriesRole::Baseline,
            stage: "annual context".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "baseline series, annual context: all values are non-positive, log-normal fit undefined"
        );
    }

    #[test]
    fn error_out_of_range() {
        let e = CorrectError::OutOfRangeUnmapped { value: 42.0 };
        assert_eq!(
            e.to_string(),
            "value 42 is outside both distributions and tail extrapolation is disabled"
        );
    }

    #[test]
    fn error_series_wrap() {
        let e = CorrectError::series(SeriesRole::Future, SeriesError::Empty);
        assert_eq!(e.to_string(), "future series: series is empty");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CorrectError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CorrectError>();
    }
}
