//! Water-year and monthly aggregation of flow series.

use std::collections::BTreeMap;

use deltaq_calendar::{days_in_month, days_in_year, water_year, Date};

use crate::error::SeriesError;
use crate::series::{Point, TimeSeries};
use crate::timestep::Timestep;

/// Calendar months in water-year order (October first).
pub const WATER_YEAR_MONTHS: [u8; 12] = [10, 11, 12, 1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Day weight of one point: month length for monthly series, 1 for daily.
fn day_weight(timestep: Timestep, date: Date) -> f64 {
    match timestep {
        Timestep::Monthly => {
            days_in_month(date.year(), date.month()).expect("validated month") as f64
        }
        Timestep::Daily => 1.0,
    }
}

/// Groups point values by water-year label, weighted by days.
///
/// Each entry accumulates `value * day_weight` so callers can derive
/// either volumes (the sum) or time-weighted averages (sum divided by
/// days in the water year).
fn water_year_weighted_sums(series: &TimeSeries) -> Result<BTreeMap<i32, f64>, SeriesError> {
    let timestep = series.timestep()?;
    let mut sums: BTreeMap<i32, f64> = BTreeMap::new();
    for pt in series.points() {
        let wy = water_year(pt.date.year(), pt.date.month());
        *sums.entry(wy).or_insert(0.0) += pt.value * day_weight(timestep, pt.date);
    }
    Ok(sums)
}

/// Water-year labels present in the series, ascending.
pub fn water_years(series: &TimeSeries) -> Vec<i32> {
    let mut labels: Vec<i32> = series
        .points()
        .iter()
        .map(|pt| water_year(pt.date.year(), pt.date.month()))
        .collect();
    labels.dedup();
    labels
}

/// Time-weighted water-year averages, one `(water_year, average)` pair
/// per water year, ascending.
///
/// Monthly values are weighted by their month length and the total is
/// divided by the real (leap-aware) day count of the water year, so a
/// 31-day January counts more than a 28-day February.
///
/// # Errors
///
/// Propagates timestep detection failure for degenerate series.
pub fn water_year_averages(series: &TimeSeries) -> Result<Vec<(i32, f64)>, SeriesError> {
    Ok(water_year_weighted_sums(series)?
        .into_iter()
        .map(|(wy, sum)| (wy, sum / days_in_year(wy) as f64))
        .collect())
}

/// Water-year flow volumes in value·days, one `(water_year, volume)`
/// pair per water year, ascending.
pub fn water_year_volumes(series: &TimeSeries) -> Result<Vec<(i32, f64)>, SeriesError> {
    Ok(water_year_weighted_sums(series)?.into_iter().collect())
}

/// Aggregates a daily series to monthly by simple arithmetic mean.
///
/// Each output point is dated the first of its month. No day-count
/// weighting is applied at this stage; the disaggregation factors are
/// derived against exactly this aggregation.
///
/// # Errors
///
/// Returns [`SeriesError::IrregularTimestep`] if the input is not daily.
pub fn monthly_means(series: &TimeSeries) -> Result<TimeSeries, SeriesError> {
    if series.timestep()? != Timestep::Daily {
        return Err(SeriesError::IrregularTimestep {
            reason: "monthly aggregation expects a daily series".to_string(),
        });
    }

    let mut points: Vec<Point> = Vec::new();
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut current: Option<Date> = None;

    for pt in series.points() {
        let month_start =
            Date::new(pt.date.year(), pt.date.month(), 1).expect("day 1 is always valid");
        if current != Some(month_start) {
            if let Some(d) = current {
                points.push(Point::new(d, sum / count as f64));
            }
            current = Some(month_start);
            sum = 0.0;
            count = 0;
        }
        sum += pt.value;
        count += 1;
    }
    if let Some(d) = current {
        points.push(Point::new(d, sum / count as f64));
    }

    TimeSeries::from_points(points)
}

/// Mean monthly hydrograph in water-year order (October..September).
///
/// Returns `(month, mean of that calendar month's values)` pairs; a
/// month absent from the series yields NaN.
pub fn mean_summary_hydrograph(series: &TimeSeries) -> Vec<(u8, f64)> {
    let mut sums = [0.0f64; 12];
    let mut counts = [0usize; 12];
    for pt in series.points() {
        let idx = (pt.date.month() - 1) as usize;
        sums[idx] += pt.value;
        counts[idx] += 1;
    }

    WATER_YEAR_MONTHS
        .iter()
        .map(|&m| {
            let idx = (m - 1) as usize;
            let mean = if counts[idx] == 0 {
                f64::NAN
            } else {
                sums[idx] / counts[idx] as f64
            };
            (m, mean)
        })
        .collect()
}
