//! Cached correction contexts.
//!
//! A context pairs the observed and reference distributions a value is
//! mapped between. Contexts are built once per run (12 monthly plus one
//! annual) and threaded through both correction stages instead of being
//! re-derived per point.

use deltaq_series::{water_year_averages, TimeSeries};

use crate::empirical::EmpiricalCdf;
use crate::error::{CorrectError, SeriesRole};
use crate::fit::{FitIssue, LogNormalFit};

/// An empirical CDF together with the log-normal moments of the same
/// sample.
#[derive(Debug, Clone)]
pub struct FittedCdf {
    cdf: EmpiricalCdf,
    fit: LogNormalFit,
}

impl FittedCdf {
    /// Builds both projections of one sample, attaching series and stage
    /// context to any failure.
    pub(crate) fn from_sample(
        sample: &[f64],
        role: SeriesRole,
        stage: &str,
    ) -> Result<Self, CorrectError> {
        let cdf = EmpiricalCdf::from_sample(sample).ok_or_else(|| {
            CorrectError::InsufficientData {
                role,
                stage: stage.to_string(),
                needed: 1,
                got: 0,
            }
        })?;
        let fit = LogNormalFit::fit(sample).map_err(|issue| match issue {
            FitIssue::TooFew { got } => CorrectError::InsufficientData {
                role,
                stage: stage.to_string(),
                needed: 2,
                got,
            },
            FitIssue::NonPositive => CorrectError::NonPositiveSample {
                role,
                stage: stage.to_string(),
            },
        })?;
        Ok(Self { cdf, fit })
    }

    /// Returns the empirical distribution.
    pub fn cdf(&self) -> &EmpiricalCdf {
        &self.cdf
    }

    /// Returns the fitted moments.
    pub fn fit(&self) -> &LogNormalFit {
        &self.fit
    }
}

/// The observed/reference distribution pair one value is mapped through.
#[derive(Debug, Clone)]
pub struct CorrectionContext {
    observed: FittedCdf,
    reference: FittedCdf,
}

impl CorrectionContext {
    pub(crate) fn new(observed: FittedCdf, reference: FittedCdf) -> Self {
        Self {
            observed,
            reference,
        }
    }

    /// Returns the observed (target) side.
    pub fn observed(&self) -> &FittedCdf {
        &self.observed
    }

    /// Returns the reference (baseline) side.
    pub fn reference(&self) -> &FittedCdf {
        &self.reference
    }

    /// Maps one value from the reference distribution into the observed
    /// distribution's value space.
    ///
    /// # Errors
    ///
    /// Returns [`CorrectError::OutOfRangeUnmapped`] only when tail
    /// extrapolation is disabled in `config`.
    pub fn map(&self, value: f64, config: &crate::CorrectConfig) -> Result<f64, CorrectError> {
        crate::mapper::map_through(value, self, config)
    }
}

/// The twelve calendar-month contexts of one correction run.
#[derive(Debug, Clone)]
pub struct MonthlyContexts {
    contexts: Vec<CorrectionContext>,
}

impl MonthlyContexts {
    /// Returns the context for a 1-indexed calendar month.
    ///
    /// # Panics
    ///
    /// Panics if `month` is 0 or greater than 12.
    pub fn for_month(&self, month: u8) -> &CorrectionContext {
        assert!(
            (1..=12).contains(&month),
            "month must be in 1..=12, got {month}"
        );
        &self.contexts[(month - 1) as usize]
    }
}

/// Values of all points falling in one calendar month, across years.
fn month_sample(series: &TimeSeries, month: u8) -> Vec<f64> {
    series
        .points()
        .iter()
        .filter(|pt| pt.date.month() == month)
        .map(|pt| pt.value)
        .collect()
}

/// Builds the twelve per-calendar-month context pairs.
///
/// # Errors
///
/// Returns [`CorrectError`] naming the series and month if any month's
/// sample is too small or entirely non-positive.
pub fn monthly_contexts(
    observed: &TimeSeries,
    reference: &TimeSeries,
) -> Result<MonthlyContexts, CorrectError> {
    let mut contexts = Vec::with_capacity(12);
    for month in 1u8..=12 {
        let stage = format!("monthly context for month {month}");
        let obs = FittedCdf::from_sample(
            &month_sample(observed, month),
            SeriesRole::Observed,
            &stage,
        )?;
        let reference_side = FittedCdf::from_sample(
            &month_sample(reference, month),
            SeriesRole::Baseline,
            &stage,
        )?;
        contexts.push(CorrectionContext::new(obs, reference_side));
    }
    Ok(MonthlyContexts { contexts })
}

/// Builds the water-year annual-average context pair.
///
/// # Errors
///
/// Returns [`CorrectError`] naming the series if the annual samples are
/// degenerate or a timestep cannot be detected.
pub fn annual_context(
    observed: &TimeSeries,
    reference: &TimeSeries,
) -> Result<CorrectionContext, CorrectError> {
    let stage = "annual context";

    let obs_avgs: Vec<f64> = water_year_averages(observed)
        .map_err(|e| CorrectError::series(SeriesRole::Observed, e))?
        .into_iter()
        .map(|(_, avg)| avg)
        .collect();
    let ref_avgs: Vec<f64> = water_year_averages(reference)
        .map_err(|e| CorrectError::series(SeriesRole::Baseline, e))?
        .into_iter()
        .map(|(_, avg)| avg)
        .collect();

    let obs = FittedCdf::from_sample(&obs_avgs, SeriesRole::Observed, stage)?;
    let reference_side = FittedCdf::from_sample(&ref_avgs, SeriesRole::Baseline, stage)?;
    Ok(CorrectionContext::new(obs, reference_side))
}
