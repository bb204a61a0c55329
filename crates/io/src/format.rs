//! Supported text encodings.

use std::fmt;
use std::str::FromStr;

/// Text encoding of a streamflow file.
///
/// Both encodings carry one point per row. Monthly series date their
/// points to the first of the month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// Whitespace-delimited `year month value` (monthly) or
    /// `year month day value` (daily) rows, the routing-model
    /// convention.
    #[default]
    Vic,
    /// Comma-separated `date,value` rows with ISO `YYYY-MM-DD` dates.
    Csv,
}

impl TextFormat {
    /// Returns the conventional file extension for this encoding.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Vic => "txt",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vic => write!(f, "vic"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for TextFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vic" => Ok(Self::Vic),
            "csv" => Ok(Self::Csv),
            other => Err(format!("unknown text format '{other}' (expected vic or csv)")),
        }
    }
}
