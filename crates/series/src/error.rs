//! Error types for deltaq-series.

/// Error type for all fallible operations in the deltaq-series crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeriesError {
    /// Returned when a series has no points.
    #[error("series is empty")]
    Empty,

    /// Returned when a flow value is negative.
    ///
    /// Negative flows break the log-domain distribution fitting, so they
    /// are rejected at construction time.
    #[error("negative flow value {value} at index {index}")]
    NegativeValue {
        /// Position of the offending point.
        index: usize,
        /// The negative value.
        value: f64,
    },

    /// Returned when a flow value is NaN or infinite.
    ///
    /// A corrupt input must surface as a typed error here instead of
    /// flowing through the correction as NaN.
    #[error("non-finite flow value {value} at index {index}")]
    NonFiniteValue {
        /// Position of the offending point.
        index: usize,
        /// The NaN or infinite value.
        value: f64,
    },

    /// Returned when points are not in chronological order.
    #[error("points not in chronological order at index {index}")]
    NotChronological {
        /// Position of the first out-of-order point.
        index: usize,
    },

    /// Returned when a series is neither strictly monthly nor strictly
    /// daily stepped.
    #[error("irregular timestep: {reason}")]
    IrregularTimestep {
        /// Description of the detected step.
        reason: String,
    },

    /// Returned when water-year truncation leaves no complete water year.
    #[error("no complete water year between {first} and {last}")]
    MisalignedWaterYear {
        /// First date of the input series.
        first: String,
        /// Last date of the input series.
        last: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty() {
        assert_eq!(SeriesError::Empty.to_string(), "series is empty");
    }

    #[test]
    fn error_negative_value() {
        let e = SeriesError::NegativeValue {
            index: 4,
            value: -2.5,
        };
        assert_eq!(e.to_string(), "negative flow value -2.5 at index 4");
    }

    #[test]
    fn error_non_finite_value() {
        let e = SeriesError::NonFiniteValue {
            index: 2,
            value: f64::NAN,
        };
        assert_eq!(e.to_string(), "non-finite flow value NaN at index 2");
    }

    #[test]
    fn error_not_chronological() {
        let e = SeriesError::NotChronological { index: 7 };
        assert_eq!(
            e.to_string(),
            "points not in chronological order at index 7"
        );
    }

    #[test]
    fn error_irregular_timestep() {
        let e = SeriesError::IrregularTimestep {
            reason: "first step spans 40 days".to_string(),
        };
        assert_eq!(e.to_string(), "irregular timestep: first step spans 40 days");
    }

    #[test]
    fn error_misaligned_water_year() {
        let e = SeriesError::MisalignedWaterYear {
            first: "2000-01-01".to_string(),
            last: "2000-08-01".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "no complete water year between 2000-01-01 and 2000-08-01"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeriesError>();
    }
}
