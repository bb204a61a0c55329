//! Text readers for streamflow series.

use std::fs;
use std::path::Path;

use deltaq_calendar::Date;
use deltaq_series::{Point, TimeSeries};
use tracing::debug;

use crate::error::IoError;
use crate::format::TextFormat;

fn parse_row_err(path: &Path, row: usize, reason: impl Into<String>) -> IoError {
    IoError::ParseRow {
        path: path.to_path_buf(),
        row,
        reason: reason.into(),
    }
}

fn parse_number<T: std::str::FromStr>(field: &str, what: &str) -> Result<T, String> {
    field
        .parse()
        .map_err(|_| format!("expected {what}, got '{field}'"))
}

/// A literal `NaN` or `inf` parses as a valid f64; catch it here so the
/// error names the row instead of surfacing later as a series failure.
fn parse_flow(field: &str) -> Result<f64, String> {
    let value: f64 = parse_number(field, "a flow value")?;
    if !value.is_finite() {
        return Err(format!("non-finite flow value '{field}'"));
    }
    Ok(value)
}

/// `YYYY-MM-DD`.
fn parse_date(field: &str) -> Result<Date, String> {
    let mut parts = field.trim().splitn(3, '-');
    let (y, m, d) = match (parts.next(), parts.next(), parts.next()) {
        (Some(y), Some(m), Some(d)) => (y, m, d),
        _ => return Err(format!("expected a YYYY-MM-DD date, got '{field}'")),
    };
    let year = parse_number(y, "a year")?;
    let month = parse_number(m, "a month")?;
    let day = parse_number(d, "a day")?;
    Date::new(year, month, day).map_err(|e| e.to_string())
}

fn parse_vic_row(line: &str) -> Result<Point, String> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let (date, value_field) = match fields.as_slice() {
        [y, m, v] => {
            let year = parse_number(y, "a year")?;
            let month = parse_number(m, "a month")?;
            let date = Date::new(year, month, 1).map_err(|e| e.to_string())?;
            (date, *v)
        }
        [y, m, d, v] => {
            let year = parse_number(y, "a year")?;
            let month = parse_number(m, "a month")?;
            let day = parse_number(d, "a day")?;
            let date = Date::new(year, month, day).map_err(|e| e.to_string())?;
            (date, *v)
        }
        other => {
            return Err(format!(
                "expected 3 or 4 whitespace-delimited fields, got {}",
                other.len()
            ))
        }
    };
    let value = parse_flow(value_field)?;
    Ok(Point::new(date, value))
}

fn parse_csv_row(line: &str) -> Result<Point, String> {
    let mut fields = line.splitn(2, ',');
    let (date_field, value_field) = match (fields.next(), fields.next()) {
        (Some(d), Some(v)) => (d, v),
        _ => return Err("expected 'date,value'".to_string()),
    };
    let date = parse_date(date_field)?;
    let value = parse_flow(value_field.trim())?;
    Ok(Point::new(date, value))
}

/// Reads a streamflow series from a text file.
///
/// Blank lines are skipped; every other row must parse, and the
/// resulting points must form a valid series (chronological,
/// non-negative, regular stepping).
///
/// # Errors
///
/// - [`IoError::FileNotFound`] if `path` does not exist.
/// - [`IoError::Io`] for underlying read failures.
/// - [`IoError::ParseRow`] naming the 1-based row that failed to parse.
/// - [`IoError::Series`] if the parsed points fail series validation.
pub fn read_series(path: &Path, format: TextFormat) -> Result<TimeSeries, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = fs::read_to_string(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut points = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let parsed = match format {
            TextFormat::Vic => parse_vic_row(line),
            TextFormat::Csv => parse_csv_row(line),
        };
        points.push(parsed.map_err(|reason| parse_row_err(path, i + 1, reason))?);
    }

    let series = TimeSeries::from_points(points).map_err(|source| IoError::Series {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), points = series.len(), %format, "series read");
    Ok(series)
}
