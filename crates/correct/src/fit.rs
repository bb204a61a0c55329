//! Log-normal moment fitting.

/// Reason a sample could not be fitted. Mapped to a [`crate::CorrectError`]
/// with series and stage context by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FitIssue {
    /// Fewer than two values; the standard deviation is undefined.
    TooFew { got: usize },
    /// Every value is non-positive; the log-space moments are undefined.
    NonPositive,
}

/// Natural- and log-space moments of a flow sample.
///
/// Used for tail extrapolation (`ln_mean`, `ln_std`), z-anomaly
/// computation, and the extreme-anomaly linear rescale (`mean`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogNormalFit {
    ln_mean: f64,
    ln_std: f64,
    mean: f64,
    std: f64,
}

impl LogNormalFit {
    /// Fits the moments of a sample.
    ///
    /// Faithful port of the legacy accumulation: non-positive values are
    /// excluded from all four running sums, but the divisor stays the
    /// full sample count `n`. A sample containing zeros therefore yields
    /// log-moments biased low relative to a zeros-filtered fit. This is
    /// deliberate; correcting it would change every published result of
    /// the original tool.
    ///
    /// # Errors
    ///
    /// - [`FitIssue::TooFew`] if the sample has fewer than 2 values.
    /// - [`FitIssue::NonPositive`] if no value is strictly positive.
    pub(crate) fn fit(values: &[f64]) -> Result<Self, FitIssue> {
        let n = values.len();
        if n < 2 {
            return Err(FitIssue::TooFew { got: n });
        }

        let mut sum_ln = 0.0;
        let mut sum_ln_sq = 0.0;
        let mut sum = 0.0;
        let mut sum_sq = 0.0;
        let mut n_positive = 0usize;

        for &val in values {
            if val > 0.0 {
                let ln_val = val.ln();
                sum_ln += ln_val;
                sum_ln_sq += ln_val * ln_val;
                sum += val;
                sum_sq += val * val;
                n_positive += 1;
            }
        }

        if n_positive == 0 {
            return Err(FitIssue::NonPositive);
        }

        let nf = n as f64;
        // Rounding can push the variance of a near-constant sample a hair
        // below zero; clamp so the sqrt stays defined.
        let ln_var = ((sum_ln_sq - sum_ln * sum_ln / nf) / (nf - 1.0)).max(0.0);
        let var = ((sum_sq - sum * sum / nf) / (nf - 1.0)).max(0.0);
        Ok(Self {
            ln_mean: sum_ln / nf,
            ln_std: ln_var.sqrt(),
            mean: sum / nf,
            std: var.sqrt(),
        })
    }

    /// Mean of the natural logs of the positive values (over full n).
    pub fn ln_mean(&self) -> f64 {
        self.ln_mean
    }

    /// Sample standard deviation in log space (n-1 divisor).
    pub fn ln_std(&self) -> f64 {
        self.ln_std
    }

    /// Natural-space mean (over full n).
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Natural-space sample standard deviation (n-1 divisor).
    pub fn std(&self) -> f64 {
        self.std
    }

    /// Standardized log-space anomaly of `value` against this fit.
    pub fn z_anomaly(&self, value: f64) -> f64 {
        (value.ln() - self.ln_mean) / self.ln_std
    }
}
