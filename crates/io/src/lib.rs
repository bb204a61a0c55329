//! # deltaq-io
//!
//! Plain-text streamflow readers and writers. Bridges the two text
//! encodings used in practice — whitespace-delimited VIC rows and
//! `date,value` CSV rows — into the validated [`deltaq_series::TimeSeries`]
//! model.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use deltaq_io::{read_series, write_series, TextFormat};
//!
//! let series = read_series(Path::new("observed.txt"), TextFormat::Vic)?;
//! write_series(Path::new("observed.csv"), &series, TextFormat::Csv)?;
//! # Ok::<(), deltaq_io::IoError>(())
//! ```

mod error;
mod format;
mod reader;
mod writer;

pub use error::IoError;
pub use format::TextFormat;
pub use reader::read_series;
pub use writer::write_series;
