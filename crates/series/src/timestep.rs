//! Timestep detection for flow series.

use deltaq_calendar::Date;

use crate::error::SeriesError;

/// Temporal resolution of a flow series.
///
/// A series is either strictly monthly-stepped or strictly daily-stepped;
/// mixed or irregular stepping is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestep {
    /// One point per calendar month.
    Monthly,
    /// One point per calendar day.
    Daily,
}

/// Detects the timestep from the first two dates of a series.
///
/// The original detection compares the second date against the first
/// date advanced by one day and by one month; that per-pair rule is
/// what `TimeSeries::from_points` enforces over the whole series.
///
/// # Errors
///
/// Returns [`SeriesError::IrregularTimestep`] if the second date is
/// neither one day nor one month after the first.
pub fn detect_timestep(d1: Date, d2: Date) -> Result<Timestep, SeriesError> {
    if d2 == d1.next_day() {
        return Ok(Timestep::Daily);
    }
    if is_next_month(d1, d2) {
        return Ok(Timestep::Monthly);
    }
    Err(SeriesError::IrregularTimestep {
        reason: format!("step from {d1} to {d2} is neither one day nor one month"),
    })
}

/// Returns `true` if `d2` is the same day-of-month in the month after `d1`.
pub(crate) fn is_next_month(d1: Date, d2: Date) -> bool {
    let months1 = d1.year() * 12 + d1.month() as i32;
    let months2 = d2.year() * 12 + d2.month() as i32;
    months2 == months1 + 1 && d2.day() == d1.day()
}
