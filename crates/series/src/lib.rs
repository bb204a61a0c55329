//! # deltaq-series
//!
//! Flow time-series model and water-year aggregation.
//!
//! A [`TimeSeries`] is an ordered, strictly monthly- or daily-stepped
//! sequence of non-negative flow values, validated once at
//! construction. All operations here are pure: truncation and
//! alignment return new series instead of mutating their inputs.
//!
//! ## Quick Start
//!
//! ```
//! use deltaq_calendar::Date;
//! use deltaq_series::{Point, TimeSeries, truncate_to_water_years, water_year_averages};
//!
//! let mut d = Date::new(1999, 10, 1).unwrap();
//! let points: Vec<Point> = (0..12)
//!     .map(|_| {
//!         let pt = Point::new(d, 3.0);
//!         d = d.next_month();
//!         pt
//!     })
//!     .collect();
//! let series = TimeSeries::from_points(points).unwrap();
//!
//! let trimmed = truncate_to_water_years(&series).unwrap();
//! let averages = water_year_averages(&trimmed).unwrap();
//! assert_eq!(averages[0].0, 2000); // WY 2000 = Oct 1999 .. Sep 2000
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `series` | `Point` and validated `TimeSeries` |
//! | `timestep` | Monthly/daily step detection |
//! | `truncate` | Water-year truncation and period alignment |
//! | `aggregate` | Water-year averages, volumes, monthly means |
//! | `error` | Error types |

mod aggregate;
mod error;
mod series;
mod timestep;
mod truncate;

pub use aggregate::{
    mean_summary_hydrograph, monthly_means, water_year_averages, water_year_volumes, water_years,
    WATER_YEAR_MONTHS,
};
pub use error::SeriesError;
pub use series::{Point, TimeSeries};
pub use timestep::{detect_timestep, Timestep};
pub use truncate::{align_periods, truncate_to_water_years};
