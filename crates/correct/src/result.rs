//! Result type for a correction run.

use std::collections::BTreeMap;

use deltaq_series::TimeSeries;

/// The output of one bias-correction run.
///
/// Contains the final corrected series together with the intermediate
/// monthly-resolution corrected series and the per-water-year rescale
/// factors, for diagnostics and reporting.
#[derive(Debug, Clone)]
pub struct CorrectionResult {
    corrected: TimeSeries,
    monthly_corrected: TimeSeries,
    annual_factors: BTreeMap<i32, f64>,
}

impl CorrectionResult {
    pub(crate) fn new(
        corrected: TimeSeries,
        monthly_corrected: TimeSeries,
        annual_factors: BTreeMap<i32, f64>,
    ) -> Self {
        Self {
            corrected,
            monthly_corrected,
            annual_factors,
        }
    }

    /// Returns the corrected series at the future input's resolution.
    pub fn corrected(&self) -> &TimeSeries {
        &self.corrected
    }

    /// Consumes `self` and returns the owned corrected series.
    pub fn into_corrected(self) -> TimeSeries {
        self.corrected
    }

    /// Returns the monthly-resolution corrected series (identical to
    /// [`CorrectionResult::corrected`] for monthly input).
    pub fn monthly_corrected(&self) -> &TimeSeries {
        &self.monthly_corrected
    }

    /// Returns the per-water-year annual rescale factors.
    pub fn annual_factors(&self) -> &BTreeMap<i32, f64> {
        &self.annual_factors
    }

    /// Returns the rescale factor for one water year, if present.
    pub fn factor_for(&self, water_year: i32) -> Option<f64> {
        self.annual_factors.get(&water_year).copied()
    }
}
