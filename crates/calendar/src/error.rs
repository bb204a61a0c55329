//! Error types for deltaq-calendar.

/// Error type for all fallible operations in the deltaq-calendar crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month value is outside 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month value.
        month: u8,
    },

    /// Returned when a day value is invalid for the given month and year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day value.
        day: u8,
        /// The month the day was checked against.
        month: u8,
        /// The year the day was checked against.
        year: i32,
        /// Maximum valid day for that month.
        max_day: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let e = CalendarError::InvalidMonth { month: 13 };
        assert_eq!(e.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_invalid_day() {
        let e = CalendarError::InvalidDay {
            day: 30,
            month: 2,
            year: 2001,
            max_day: 28,
        };
        assert_eq!(
            e.to_string(),
            "invalid day: 30 for month 2 of 2001 (max 28)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<CalendarError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<CalendarError>();
    }
}
