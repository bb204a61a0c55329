//! Monthly-scale quantile-mapping correction.

use deltaq_series::TimeSeries;

use crate::config::CorrectConfig;
use crate::context::MonthlyContexts;
use crate::error::CorrectError;
use crate::mapper::map_through;

/// Quantile-maps every point of `future` through the context matching
/// its calendar month.
///
/// The output has the same dates and length as the input.
pub(crate) fn correct_monthly(
    future: &TimeSeries,
    contexts: &MonthlyContexts,
    config: &CorrectConfig,
) -> Result<TimeSeries, CorrectError> {
    let values = future
        .points()
        .iter()
        .map(|pt| map_through(pt.value, contexts.for_month(pt.date.month()), config))
        .collect::<Result<Vec<f64>, CorrectError>>()?;
    Ok(future.with_values(values))
}
