//! Empirical exceedance distribution with Cunnane plotting positions.

/// An empirical CDF built from a fixed sample.
///
/// `flow` holds the sample sorted descending; `probability` holds the
/// parallel exceedance probabilities from the Cunnane unbiased plotting
/// position `(rank - 0.4) / (n + 0.2)`, rank 1 being the largest value.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalCdf {
    flow: Vec<f64>,
    probability: Vec<f64>,
}

impl EmpiricalCdf {
    /// Builds the distribution from a sample.
    ///
    /// Returns `None` for an empty sample. A single-value sample is
    /// valid and gets probability `0.6 / 1.2 = 0.5`. The descending
    /// sort is stable, so ties keep their input order deterministically.
    pub fn from_sample(sample: &[f64]) -> Option<Self> {
        if sample.is_empty() {
            return None;
        }

        let mut flow = sample.to_vec();
        flow.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));

        let n = flow.len() as f64;
        let probability = (1..=flow.len())
            .map(|rank| (rank as f64 - 0.4) / (n + 0.2))
            .collect();

        Some(Self { flow, probability })
    }

    /// Returns the sample sorted descending.
    pub fn flow(&self) -> &[f64] {
        &self.flow
    }

    /// Returns the exceedance probabilities, ascending, parallel to
    /// [`EmpiricalCdf::flow`].
    pub fn probability(&self) -> &[f64] {
        &self.probability
    }

    /// Returns the sample size.
    pub fn len(&self) -> usize {
        self.flow.len()
    }

    /// Returns `true` if the distribution holds no values. Never the
    /// case for a distribution built through `from_sample`.
    pub fn is_empty(&self) -> bool {
        self.flow.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_sample_rejected() {
        assert!(EmpiricalCdf::from_sample(&[]).is_none());
    }

    #[test]
    fn single_value_probability_is_half() {
        let cdf = EmpiricalCdf::from_sample(&[7.0]).unwrap();
        assert_eq!(cdf.flow(), &[7.0]);
        assert_relative_eq!(cdf.probability()[0], 0.5, max_relative = 1e-12);
    }

    #[test]
    fn flow_sorted_descending() {
        let cdf = EmpiricalCdf::from_sample(&[3.0, 9.0, 1.0, 5.0]).unwrap();
        assert_eq!(cdf.flow(), &[9.0, 5.0, 3.0, 1.0]);
    }

    #[test]
    fn cunnane_endpoints() {
        let n = 10;
        let sample: Vec<f64> = (1..=n).map(|i| i as f64).collect();
        let cdf = EmpiricalCdf::from_sample(&sample).unwrap();
        let nf = n as f64;
        assert_relative_eq!(cdf.probability()[0], 0.6 / (nf + 0.2), max_relative = 1e-12);
        assert_relative_eq!(
            cdf.probability()[n - 1],
            (nf - 0.4) / (nf + 0.2),
            max_relative = 1e-12
        );
    }

    #[test]
    fn probability_strictly_increasing() {
        let sample = [2.0, 8.0, 5.0, 5.0, 1.0, 13.0];
        let cdf = EmpiricalCdf::from_sample(&sample).unwrap();
        for pair in cdf.probability().windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for pair in cdf.flow().windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn all_equal_sample_is_valid() {
        let cdf = EmpiricalCdf::from_sample(&[4.0, 4.0, 4.0]).unwrap();
        assert_eq!(cdf.flow(), &[4.0, 4.0, 4.0]);
        assert_eq!(cdf.len(), 3);
        // Probabilities still strictly increase.
        assert!(cdf.probability()[0] < cdf.probability()[2]);
    }

    #[test]
    fn deterministic_for_identical_input() {
        let sample = [5.0, 3.0, 5.0, 2.0];
        let a = EmpiricalCdf::from_sample(&sample).unwrap();
        let b = EmpiricalCdf::from_sample(&sample).unwrap();
        assert_eq!(a, b);
    }
}
