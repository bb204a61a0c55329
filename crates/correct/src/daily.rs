//! Daily disaggregation of a monthly correction.
//!
//! Each daily value is scaled by its month's correction factor (target
//! monthly value over the daily series' monthly mean). Per-month
//! constant factors leave visible jumps at month boundaries, so a
//! smoothing pass redistributes a quarter of each boundary jump, and a
//! second factor pass restores the monthly means the smoothing
//! perturbed.

use std::collections::BTreeMap;

use deltaq_series::{monthly_means, TimeSeries};

use crate::error::{CorrectError, SeriesRole};

fn month_values(series: &TimeSeries) -> BTreeMap<(i32, u8), f64> {
    series
        .points()
        .iter()
        .map(|pt| ((pt.date.year(), pt.date.month()), pt.value))
        .collect()
}

/// Scales every daily value by its month's factor against `target`.
fn apply_monthly_factors(
    daily: &TimeSeries,
    target: &BTreeMap<(i32, u8), f64>,
) -> Result<TimeSeries, CorrectError> {
    let aggregated = monthly_means(daily)
        .map_err(|e| CorrectError::series(SeriesRole::Future, e))?;
    let aggregated = month_values(&aggregated);

    let values = daily
        .points()
        .iter()
        .map(|pt| {
            let key = (pt.date.year(), pt.date.month());
            let agg = aggregated.get(&key).copied().unwrap_or(0.0);
            if agg > 0.0 {
                // Months missing from the target keep their mean.
                let tgt = target.get(&key).copied().unwrap_or(agg);
                pt.value * tgt / agg
            } else {
                pt.value
            }
        })
        .collect();

    Ok(daily.with_values(values))
}

/// Redistributes 25% of each month-boundary jump across the boundary.
///
/// For every last-day-of-month point `a` followed by `b` (the series'
/// final point excepted), the pair becomes `((3a+b)/4, (a+3b)/4)`,
/// computed from the pre-smoothing values so the pairwise sum `a + b`
/// is conserved.
fn smooth_month_boundaries(daily: &TimeSeries) -> TimeSeries {
    let points = daily.points();
    let mut values = daily.values();
    for i in 0..points.len().saturating_sub(1) {
        if points[i].date.is_month_end() {
            let a = points[i].value;
            let b = points[i + 1].value;
            values[i] = (3.0 * a + b) / 4.0;
            values[i + 1] = (a + 3.0 * b) / 4.0;
        }
    }
    daily.with_values(values)
}

/// Redistributes the corrected monthly series onto a daily series.
///
/// Two-pass: factor-and-apply, boundary smoothing, then a second
/// factor-and-apply so every month's mean matches `target_monthly`
/// again after smoothing.
pub(crate) fn disaggregate(
    daily: &TimeSeries,
    target_monthly: &TimeSeries,
) -> Result<TimeSeries, CorrectError> {
    let target = month_values(target_monthly);
    let scaled = apply_monthly_factors(daily, &target)?;
    let smoothed = smooth_month_boundaries(&scaled);
    apply_monthly_factors(&smoothed, &target)
}
