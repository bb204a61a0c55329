//! # deltaq-calendar
//!
//! Pure Gregorian date arithmetic for water-year accounting.
//!
//! Streamflow bias correction weights monthly values by real month
//! lengths and divides water-year totals by real year lengths, so this
//! crate is leap-aware throughout.
//!
//! ## Quick Start
//!
//! ```
//! use deltaq_calendar::{Date, days_in_month, water_year};
//!
//! let d = Date::new(2000, 2, 29).unwrap();
//! assert_eq!(d.next_day(), Date::new(2000, 3, 1).unwrap());
//!
//! assert_eq!(days_in_month(2000, 2).unwrap(), 29);
//!
//! // October starts the next water year.
//! assert_eq!(water_year(2000, 10), 2001);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Gregorian date with rollover arithmetic |
//! | `month` | Month/year length tables, leap-year rule |
//! | `water_year` | Water year labeling (Oct–Sep) |
//! | `error` | Error types |

mod date;
mod error;
mod month;
mod water_year;

pub use date::Date;
pub use error::CalendarError;
pub use month::{days_in_month, days_in_year, is_leap_year};
pub use water_year::{water_year, WATER_YEAR_START_MONTH};
