//! Pure trimming operations on flow series.
//!
//! The original tooling truncated caller-owned lists in place; these
//! functions return new series and leave their inputs untouched.

use crate::error::SeriesError;
use crate::series::TimeSeries;
use crate::timestep::Timestep;

/// Trims a series to whole water years (October through September).
///
/// Leading points before the first October point (October 1 for daily
/// series) and trailing points after the last September point
/// (September 30 for daily series) are dropped. The input is not
/// modified.
///
/// # Errors
///
/// Returns [`SeriesError::MisalignedWaterYear`] if no complete water
/// year remains after trimming, and propagates timestep detection
/// failures for degenerate inputs.
pub fn truncate_to_water_years(series: &TimeSeries) -> Result<TimeSeries, SeriesError> {
    let timestep = series.timestep()?;
    let points = series.points();

    let starts_water_year = |i: usize| {
        let d = points[i].date;
        d.month() == 10 && (timestep == Timestep::Monthly || d.day() == 1)
    };
    let ends_water_year = |i: usize| {
        let d = points[i].date;
        d.month() == 9 && (timestep == Timestep::Monthly || d.day() == 30)
    };

    let misaligned = || SeriesError::MisalignedWaterYear {
        first: series.first().date.to_string(),
        last: series.last().date.to_string(),
    };

    let start = (0..points.len())
        .find(|&i| starts_water_year(i))
        .ok_or_else(misaligned)?;
    let end = (0..points.len())
        .rev()
        .find(|&i| ends_water_year(i))
        .ok_or_else(misaligned)?;

    if start > end {
        return Err(misaligned());
    }

    TimeSeries::from_points(points[start..=end].to_vec())
}

/// Trims two series to their common date span.
///
/// Both inputs are left untouched; the returned pair covers
/// `[max(first dates), min(last dates)]`.
///
/// # Errors
///
/// Returns [`SeriesError::Empty`] if the spans do not overlap.
pub fn align_periods(
    a: &TimeSeries,
    b: &TimeSeries,
) -> Result<(TimeSeries, TimeSeries), SeriesError> {
    let start = a.first().date.max(b.first().date);
    let end = a.last().date.min(b.last().date);

    let clip = |s: &TimeSeries| {
        let points: Vec<_> = s
            .points()
            .iter()
            .copied()
            .filter(|pt| pt.date >= start && pt.date <= end)
            .collect();
        TimeSeries::from_points(points)
    };

    Ok((clip(a)?, clip(b)?))
}
