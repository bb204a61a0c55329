//! Annual-scale (water-year) rescaling.
//!
//! Monthly quantile mapping corrects each month's distribution but can
//! leave water-year volumes biased. This stage quantile-maps the
//! future water-year averages through the annual context and rescales
//! every monthly-corrected value so its water year's time-weighted
//! average matches the mapped target exactly.

use std::collections::BTreeMap;

use deltaq_series::{water_year_averages, TimeSeries};
use tracing::warn;

use crate::config::CorrectConfig;
use crate::context::CorrectionContext;
use crate::error::{CorrectError, SeriesRole};
use crate::mapper::map_through;

/// Applies the water-year rescale to a monthly-corrected series.
///
/// Returns the rescaled series and the per-water-year factors applied.
///
/// # Errors
///
/// Propagates mapping failures and water-year aggregation failures.
pub(crate) fn correct_annual(
    future: &TimeSeries,
    monthly_corrected: &TimeSeries,
    ctx: &CorrectionContext,
    config: &CorrectConfig,
) -> Result<(TimeSeries, BTreeMap<i32, f64>), CorrectError> {
    let future_averages = water_year_averages(future)
        .map_err(|e| CorrectError::series(SeriesRole::Future, e))?;
    let corrected_averages: BTreeMap<i32, f64> = water_year_averages(monthly_corrected)
        .map_err(|e| CorrectError::series(SeriesRole::Future, e))?
        .into_iter()
        .collect();

    let mut factors: BTreeMap<i32, f64> = BTreeMap::new();
    for (wy, avg) in future_averages {
        let target = map_through(avg, ctx, config)?;
        let denom = corrected_averages.get(&wy).copied().unwrap_or(0.0);
        let factor = if denom > 0.0 {
            target / denom
        } else {
            // An all-zero water year cannot be rescaled to a non-zero
            // target; leave it untouched.
            if target != 0.0 {
                warn!(water_year = wy, target, "zero-volume water year left unscaled");
            }
            1.0
        };
        factors.insert(wy, factor);
    }

    let values = monthly_corrected
        .points()
        .iter()
        .map(|pt| {
            let wy = deltaq_calendar::water_year(pt.date.year(), pt.date.month());
            pt.value * factors.get(&wy).copied().unwrap_or(1.0)
        })
        .collect();

    Ok((monthly_corrected.with_values(values), factors))
}
