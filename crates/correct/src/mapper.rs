//! Value↔quantile mapping between two fitted distributions.
//!
//! This is the central routine of the correction, invoked once per data
//! point:
//!
//! 1. locate the value's exceedance probability in the reference
//!    distribution (linear interpolation over the empirical CDF),
//! 2. compute the reference log-space z-anomaly,
//! 3. invert the probability through the target distribution, falling
//!    back to log-normal tail extrapolation when either distribution
//!    cannot place it,
//! 4. override everything with a linear rescale for extreme anomalies
//!    (|z| above the configured threshold), which protects against
//!    log-normal tail distortion.
//!
//! A value within the zero-flow threshold short-circuits to exactly 0
//! before any of the above.

use crate::config::CorrectConfig;
use crate::context::CorrectionContext;
use crate::error::CorrectError;

/// Linear interpolation between two points.
///
/// A zero-width bracket returns the midpoint of the two ordinates,
/// avoiding a division by zero for tied sample values.
fn linear(x: f64, x1: f64, x2: f64, y1: f64, y2: f64) -> f64 {
    if x2 - x1 == 0.0 {
        return (y1 + y2) / 2.0;
    }
    y1 + (x - x1) * (y2 - y1) / (x2 - x1)
}

/// Interpolates `x` through the parallel sequences `xs` → `ys`.
///
/// The search direction is auto-detected by comparing the first and
/// last elements of `xs`, so the same routine serves both the
/// descending flow → ascending probability lookup and its inverse.
///
/// Returns `None` when `x` lies outside the span of `xs`; the caller
/// decides between tail extrapolation and an error.
pub(crate) fn interpolate(x: f64, xs: &[f64], ys: &[f64]) -> Option<f64> {
    debug_assert_eq!(xs.len(), ys.len());
    let n = xs.len();
    let ascending = xs[n - 1] > xs[0];
    let (lo, hi) = if ascending {
        (xs[0], xs[n - 1])
    } else {
        (xs[n - 1], xs[0])
    };

    if x < lo || x > hi {
        return None;
    }

    let idx = xs
        .iter()
        .position(|&xi| if ascending { xi >= x } else { xi <= x })?;

    if idx == 0 {
        return Some(ys[0]);
    }

    Some(linear(x, xs[idx - 1], xs[idx], ys[idx - 1], ys[idx]))
}

/// Maps one value through a correction context.
///
/// # Errors
///
/// Returns [`CorrectError::OutOfRangeUnmapped`] if the value is outside
/// both empirical spans while tail extrapolation is disabled and the
/// extreme-anomaly override does not apply.
pub(crate) fn map_through(
    value: f64,
    ctx: &CorrectionContext,
    config: &CorrectConfig,
) -> Result<f64, CorrectError> {
    // Flows this small are physically zero; nothing else applies.
    if value.abs() < config.zero_flow_threshold() {
        return Ok(0.0);
    }

    let reference = ctx.reference();
    let target = ctx.observed();

    let z = reference.fit().z_anomaly(value);

    // Step A: exceedance probability in the reference distribution.
    let quantile = interpolate(
        value,
        reference.cdf().flow(),
        reference.cdf().probability(),
    );

    // Step C: invert through the target, or extrapolate from the fitted
    // log-normal tail when either span cannot place the value.
    let mapped = quantile
        .and_then(|q| interpolate(q, target.cdf().probability(), target.cdf().flow()));
    let mapped = match mapped {
        Some(v) => v,
        None if config.tail_extrapolation() => {
            (target.fit().ln_std() * z + target.fit().ln_mean()).exp()
        }
        None => {
            if z.abs() > config.extreme_z_threshold() {
                return Ok(value / reference.fit().mean() * target.fit().mean());
            }
            return Err(CorrectError::OutOfRangeUnmapped { value });
        }
    };

    // Step D: extreme anomalies discard the mapped result entirely.
    if z.abs() > config.extreme_z_threshold() {
        return Ok(value / reference.fit().mean() * target.fit().mean());
    }

    Ok(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::FittedCdf;
    use crate::error::SeriesRole;
    use approx::assert_relative_eq;

    fn context(observed: &[f64], reference: &[f64]) -> CorrectionContext {
        let obs = FittedCdf::from_sample(observed, SeriesRole::Observed, "test").unwrap();
        let refr = FittedCdf::from_sample(reference, SeriesRole::Baseline, "test").unwrap();
        CorrectionContext::new(obs, refr)
    }

    #[test]
    fn linear_midpoint_on_degenerate_bracket() {
        assert_relative_eq!(linear(5.0, 5.0, 5.0, 0.2, 0.4), 0.3, max_relative = 1e-12);
    }

    #[test]
    fn interpolate_descending_flow() {
        let flow = [10.0, 8.0, 4.0, 2.0];
        let prob = [0.1, 0.3, 0.6, 0.9];
        // Halfway between 8 and 4.
        let q = interpolate(6.0, &flow, &prob).unwrap();
        assert_relative_eq!(q, 0.45, max_relative = 1e-12);
    }

    #[test]
    fn interpolate_ascending_probability() {
        let prob = [0.1, 0.3, 0.6, 0.9];
        let flow = [10.0, 8.0, 4.0, 2.0];
        let v = interpolate(0.45, &prob, &flow).unwrap();
        assert_relative_eq!(v, 6.0, max_relative = 1e-12);
    }

    #[test]
    fn interpolate_endpoints() {
        let flow = [10.0, 8.0, 4.0];
        let prob = [0.1, 0.5, 0.9];
        assert_relative_eq!(
            interpolate(10.0, &flow, &prob).unwrap(),
            0.1,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            interpolate(4.0, &flow, &prob).unwrap(),
            0.9,
            max_relative = 1e-12
        );
    }

    #[test]
    fn interpolate_out_of_range() {
        let flow = [10.0, 8.0, 4.0];
        let prob = [0.1, 0.5, 0.9];
        assert!(interpolate(11.0, &flow, &prob).is_none());
        assert!(interpolate(3.0, &flow, &prob).is_none());
    }

    #[test]
    fn interpolate_single_element() {
        assert_relative_eq!(
            interpolate(4.0, &[4.0], &[0.5]).unwrap(),
            0.5,
            max_relative = 1e-12
        );
        assert!(interpolate(5.0, &[4.0], &[0.5]).is_none());
    }

    #[test]
    fn zero_flow_short_circuits() {
        let ctx = context(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]);
        let config = CorrectConfig::new();
        assert_eq!(map_through(0.0005, &ctx, &config).unwrap(), 0.0);
        assert_eq!(map_through(0.0, &ctx, &config).unwrap(), 0.0);
    }

    #[test]
    fn identity_round_trip() {
        // Same distribution on both sides: in-range values map to
        // themselves.
        let sample = [2.0, 3.0, 5.0, 8.0, 13.0, 21.0];
        let ctx = context(&sample, &sample);
        let config = CorrectConfig::new();
        for &v in &[2.0, 3.3, 5.0, 9.0, 21.0] {
            let out = map_through(v, &ctx, &config).unwrap();
            assert_relative_eq!(out, v, max_relative = 1e-9);
        }
    }

    #[test]
    fn out_of_range_uses_lognormal_tail() {
        let reference = [2.0, 3.0, 5.0, 8.0, 13.0];
        let observed = [4.0, 6.0, 10.0, 16.0, 26.0];
        let ctx = context(&observed, &reference);
        let config = CorrectConfig::new();

        // 14.0 is above the reference span but not an extreme anomaly.
        let refr = ctx.reference().fit();
        let z = refr.z_anomaly(14.0);
        assert!(z.abs() <= 3.5);

        let target = ctx.observed().fit();
        let expect = (target.ln_std() * z + target.ln_mean()).exp();
        let out = map_through(14.0, &ctx, &config).unwrap();
        assert_relative_eq!(out, expect, max_relative = 1e-12);
    }

    #[test]
    fn extreme_anomaly_linear_rescale() {
        // Tight reference distribution makes a large value an extreme
        // anomaly in log space.
        let reference = [10.0, 10.1, 10.2, 9.9, 9.8];
        let observed = [20.0, 20.2, 20.4, 19.8, 19.6];
        let ctx = context(&observed, &reference);
        let config = CorrectConfig::new();

        let value = 50.0;
        let z = ctx.reference().fit().z_anomaly(value);
        assert!(z.abs() > 3.5, "setup should produce |z| > 3.5, got {z}");

        let expect = value / ctx.reference().fit().mean() * ctx.observed().fit().mean();
        let out = map_through(value, &ctx, &config).unwrap();
        assert_relative_eq!(out, expect, max_relative = 1e-12);
    }

    #[test]
    fn extrapolation_disabled_errors() {
        let reference = [2.0, 3.0, 5.0, 8.0, 13.0];
        let observed = [4.0, 6.0, 10.0, 16.0, 26.0];
        let ctx = context(&observed, &reference);
        let config = CorrectConfig::new().with_tail_extrapolation(false);

        let err = map_through(14.0, &ctx, &config).unwrap_err();
        assert!(matches!(err, CorrectError::OutOfRangeUnmapped { .. }));
    }

    #[test]
    fn extrapolation_disabled_extreme_still_rescales() {
        let reference = [10.0, 10.1, 10.2, 9.9, 9.8];
        let observed = [20.0, 20.2, 20.4, 19.8, 19.6];
        let ctx = context(&observed, &reference);
        let config = CorrectConfig::new().with_tail_extrapolation(false);

        let value = 50.0;
        let expect = value / ctx.reference().fit().mean() * ctx.observed().fit().mean();
        let out = map_through(value, &ctx, &config).unwrap();
        assert_relative_eq!(out, expect, max_relative = 1e-12);
    }

    #[test]
    fn shifted_distributions_map_between_quantiles() {
        // Observed is exactly double the reference; every in-range value
        // should map to roughly its double.
        let reference = [1.0, 2.0, 3.0, 4.0, 5.0];
        let observed = [2.0, 4.0, 6.0, 8.0, 10.0];
        let ctx = context(&observed, &reference);
        let config = CorrectConfig::new();

        for &v in &[1.0, 2.5, 3.0, 4.5, 5.0] {
            let out = map_through(v, &ctx, &config).unwrap();
            assert_relative_eq!(out, 2.0 * v, max_relative = 1e-9);
        }
    }
}
