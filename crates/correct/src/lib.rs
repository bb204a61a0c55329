//! Hybrid-delta quantile-mapping bias correction for streamflow.
//!
//! This crate adjusts simulated streamflow so its statistical
//! distribution matches an observed record while preserving water-year
//! volumes.
//!
//! # Pipeline
//!
//! 1. **Truncate** all three series to whole water years (Oct–Sep)
//! 2. **Aggregate** daily input to monthly means
//! 3. **Monthly**: quantile-map each point through its calendar month's
//!    observed/baseline distribution pair
//! 4. **Annual**: quantile-map water-year averages and rescale each
//!    water year so its time-weighted average matches the mapped target
//! 5. **Disaggregate** back onto daily values with boundary smoothing,
//!    when the input was daily
//!
//! # Glossary
//!
//! - **Water year**: October–September, labeled by its ending year
//! - **Exceedance probability**: chance a draw equals or exceeds a value
//! - **Cunnane plotting position**: `(rank − 0.4) / (n + 0.2)`
//! - **z-anomaly**: standardized log-space deviation from a fitted
//!   log-normal distribution
//!
//! # Quick Start
//!
//! ```
//! use deltaq_calendar::Date;
//! use deltaq_correct::{bias_correct, CorrectConfig};
//! use deltaq_series::{Point, TimeSeries};
//!
//! // Two water years of monthly flow, Oct 1999 .. Sep 2001.
//! let mut d = Date::new(1999, 10, 1).unwrap();
//! let points: Vec<Point> = (0..24)
//!     .map(|i| {
//!         let seasonal = 100.0 + 10.0 * (i % 12) as f64;
//!         let yearly = 1.0 + 0.2 * (i / 12) as f64;
//!         let pt = Point::new(d, seasonal * yearly);
//!         d = d.next_month();
//!         pt
//!     })
//!     .collect();
//! let series = TimeSeries::from_points(points).unwrap();
//!
//! let config = CorrectConfig::new();
//! let result = bias_correct(&series, &series, &series, &config).unwrap();
//! assert_eq!(result.corrected().len(), 24);
//! ```

mod annual;
mod config;
mod context;
mod daily;
mod empirical;
mod error;
mod fit;
mod mapper;
mod monthly;
mod result;

pub use config::CorrectConfig;
pub use context::{annual_context, monthly_contexts, CorrectionContext, FittedCdf, MonthlyContexts};
pub use empirical::EmpiricalCdf;
pub use error::{CorrectError, SeriesRole};
pub use fit::LogNormalFit;
pub use result::CorrectionResult;

use deltaq_series::{
    align_periods, monthly_means, truncate_to_water_years, TimeSeries, Timestep,
};
use tracing::{debug, info};

use crate::error::SeriesRole as Role;

fn truncate(series: &TimeSeries, role: Role) -> Result<TimeSeries, CorrectError> {
    truncate_to_water_years(series).map_err(|e| CorrectError::series(role, e))
}

/// Aggregates a daily series to monthly means; monthly input passes
/// through unchanged.
fn to_monthly(series: &TimeSeries, role: Role) -> Result<TimeSeries, CorrectError> {
    match series.timestep().map_err(|e| CorrectError::series(role, e))? {
        Timestep::Monthly => Ok(series.clone()),
        Timestep::Daily => monthly_means(series).map_err(|e| CorrectError::series(role, e)),
    }
}

/// Runs the full hybrid-delta bias correction.
///
/// `observed` is the record the correction targets, `baseline` the
/// simulated series over the same historical period, and `future` the
/// series to correct (pass the baseline itself for a baseline run).
/// The result keeps the future input's temporal resolution.
///
/// # Errors
///
/// Returns [`CorrectError`] naming the offending series and stage for
/// degenerate samples, irregular stepping, or misaligned water years.
/// A failed run leaves no partial output.
pub fn bias_correct(
    observed: &TimeSeries,
    baseline: &TimeSeries,
    future: &TimeSeries,
    config: &CorrectConfig,
) -> Result<CorrectionResult, CorrectError> {
    config.validate()?;

    let observed = truncate(observed, Role::Observed)?;
    let baseline = truncate(baseline, Role::Baseline)?;
    let future = truncate(future, Role::Future)?;

    let future_timestep = future
        .timestep()
        .map_err(|e| CorrectError::series(Role::Future, e))?;

    // Distributions are fitted at monthly resolution on the common
    // observed/baseline period.
    let observed_monthly = to_monthly(&observed, Role::Observed)?;
    let baseline_monthly = to_monthly(&baseline, Role::Baseline)?;
    let (observed_monthly, baseline_monthly) =
        align_periods(&observed_monthly, &baseline_monthly)
            .map_err(|e| CorrectError::series(Role::Observed, e))?;
    let future_monthly = to_monthly(&future, Role::Future)?;

    debug!(
        observed_months = observed_monthly.len(),
        baseline_months = baseline_monthly.len(),
        future_months = future_monthly.len(),
        "series truncated and aggregated"
    );

    let contexts = monthly_contexts(&observed_monthly, &baseline_monthly)?;
    let monthly_corrected = monthly::correct_monthly(&future_monthly, &contexts, config)?;
    debug!("monthly quantile mapping complete");

    let annual_ctx = annual_context(&observed_monthly, &baseline_monthly)?;
    let (annual_corrected, factors) =
        annual::correct_annual(&future_monthly, &monthly_corrected, &annual_ctx, config)?;
    debug!(water_years = factors.len(), "annual rescaling complete");

    let corrected = match future_timestep {
        Timestep::Monthly => annual_corrected.clone(),
        Timestep::Daily => daily::disaggregate(&future, &annual_corrected)?,
    };

    info!(
        points = corrected.len(),
        water_years = factors.len(),
        "bias correction complete"
    );

    Ok(CorrectionResult::new(corrected, annual_corrected, factors))
}
