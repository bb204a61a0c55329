//! Flow time-series data model.

use deltaq_calendar::Date;

use crate::error::SeriesError;
use crate::timestep::{detect_timestep, is_next_month, Timestep};

/// A single dated flow observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Calendar date of the observation. Monthly series use the first
    /// day of the month.
    pub date: Date,
    /// Flow value, non-negative.
    pub value: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(date: Date, value: f64) -> Self {
        Self { date, value }
    }
}

/// An ordered, regularly stepped sequence of flow points.
///
/// Construction validates what the correction core assumes: points are
/// chronological, values are non-negative, and the stepping is strictly
/// monthly or strictly daily throughout. A validated series is never
/// mutated; every transformation returns a new series.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    points: Vec<Point>,
    timestep: Option<Timestep>,
}

impl TimeSeries {
    /// Builds a series from points, validating ordering, sign, and stepping.
    ///
    /// # Errors
    ///
    /// - [`SeriesError::Empty`] if `points` is empty.
    /// - [`SeriesError::NonFiniteValue`] if any value is NaN or infinite.
    /// - [`SeriesError::NegativeValue`] if any value is below zero.
    /// - [`SeriesError::NotChronological`] if dates do not strictly increase.
    /// - [`SeriesError::IrregularTimestep`] if consecutive dates are neither
    ///   uniformly one day nor uniformly one month apart.
    pub fn from_points(points: Vec<Point>) -> Result<Self, SeriesError> {
        if points.is_empty() {
            return Err(SeriesError::Empty);
        }

        for (i, pt) in points.iter().enumerate() {
            if !pt.value.is_finite() {
                return Err(SeriesError::NonFiniteValue {
                    index: i,
                    value: pt.value,
                });
            }
            if pt.value < 0.0 {
                return Err(SeriesError::NegativeValue {
                    index: i,
                    value: pt.value,
                });
            }
        }

        if points.len() < 2 {
            return Ok(Self {
                points,
                timestep: None,
            });
        }

        let timestep = detect_timestep(points[0].date, points[1].date)?;
        for (i, pair) in points.windows(2).enumerate() {
            let (d1, d2) = (pair[0].date, pair[1].date);
            if d2 <= d1 {
                return Err(SeriesError::NotChronological { index: i + 1 });
            }
            let regular = match timestep {
                Timestep::Daily => d2 == d1.next_day(),
                Timestep::Monthly => is_next_month(d1, d2),
            };
            if !regular {
                return Err(SeriesError::IrregularTimestep {
                    reason: format!("step from {d1} to {d2} breaks the {timestep:?} pattern"),
                });
            }
        }

        Ok(Self {
            points,
            timestep: Some(timestep),
        })
    }

    /// Returns a new series with the same dates and the given values.
    ///
    /// Used by the correction stages, which always produce one output
    /// value per input point.
    ///
    /// # Panics
    ///
    /// Panics if `values.len()` differs from the series length.
    pub fn with_values(&self, values: Vec<f64>) -> Self {
        assert_eq!(
            values.len(),
            self.points.len(),
            "replacement values must match series length"
        );
        let points = self
            .points
            .iter()
            .zip(values)
            .map(|(pt, v)| Point::new(pt.date, v))
            .collect();
        Self {
            points,
            timestep: self.timestep,
        }
    }

    /// Returns the points as a slice.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no points. Always `false` for a
    /// series built through [`TimeSeries::from_points`].
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the first point.
    pub fn first(&self) -> Point {
        self.points[0]
    }

    /// Returns the last point.
    pub fn last(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    /// Returns the flow values in order.
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|pt| pt.value).collect()
    }

    /// Returns the detected timestep.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::IrregularTimestep`] for a single-point series,
    /// where no step can be detected.
    pub fn timestep(&self) -> Result<Timestep, SeriesError> {
        self.timestep.ok_or_else(|| SeriesError::IrregularTimestep {
            reason: "series has fewer than two points".to_string(),
        })
    }
}
