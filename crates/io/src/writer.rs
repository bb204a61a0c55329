//! Text writers for streamflow series.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use deltaq_series::{TimeSeries, Timestep};
use tracing::debug;

use crate::error::IoError;
use crate::format::TextFormat;

/// Writes a streamflow series to a text file.
///
/// The encodings mirror what [`crate::read_series`] accepts: VIC rows
/// carry the day column only for daily series, CSV rows always carry a
/// full ISO date.
///
/// # Errors
///
/// - [`IoError::Series`] if the series' timestep cannot be detected
///   (fewer than two points).
/// - [`IoError::Io`] for underlying write failures.
pub fn write_series(path: &Path, series: &TimeSeries, format: TextFormat) -> Result<(), IoError> {
    let timestep = series.timestep().map_err(|source| IoError::Series {
        path: path.to_path_buf(),
        source,
    })?;

    let mut out = String::new();
    for pt in series.points() {
        let d = pt.date;
        match (format, timestep) {
            (TextFormat::Vic, Timestep::Monthly) => {
                let _ = writeln!(out, "{} {} {}", d.year(), d.month(), pt.value);
            }
            (TextFormat::Vic, Timestep::Daily) => {
                let _ = writeln!(out, "{} {} {} {}", d.year(), d.month(), d.day(), pt.value);
            }
            (TextFormat::Csv, _) => {
                let _ = writeln!(out, "{d},{}", pt.value);
            }
        }
    }

    fs::write(path, out).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), points = series.len(), %format, "series written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_series;
    use deltaq_calendar::Date;
    use deltaq_series::Point;

    fn monthly_series(values: &[f64]) -> TimeSeries {
        let mut d = Date::new(1999, 10, 1).unwrap();
        let points = values
            .iter()
            .map(|&v| {
                let pt = Point::new(d, v);
                d = d.next_month();
                pt
            })
            .collect();
        TimeSeries::from_points(points).unwrap()
    }

    fn daily_series(values: &[f64]) -> TimeSeries {
        let mut d = Date::new(1999, 10, 1).unwrap();
        let points = values
            .iter()
            .map(|&v| {
                let pt = Point::new(d, v);
                d = d.next_day();
                pt
            })
            .collect();
        TimeSeries::from_points(points).unwrap()
    }

    #[test]
    fn vic_monthly_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.txt");
        write_series(&path, &monthly_series(&[1.5, 2.0]), TextFormat::Vic).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1999 10 1.5\n1999 11 2\n");
    }

    #[test]
    fn vic_daily_rows_carry_day() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.txt");
        write_series(&path, &daily_series(&[1.0, 2.0]), TextFormat::Vic).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1999 10 1 1\n1999 10 2 2\n");
    }

    #[test]
    fn csv_rows_carry_iso_date() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.csv");
        write_series(&path, &monthly_series(&[1.5, 2.0]), TextFormat::Csv).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1999-10-01,1.5\n1999-11-01,2\n");
    }

    #[test]
    fn single_point_series_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.txt");
        let s = TimeSeries::from_points(vec![Point::new(Date::new(1999, 10, 1).unwrap(), 1.0)])
            .unwrap();
        let err = write_series(&path, &s, TextFormat::Vic).unwrap_err();
        assert!(matches!(err, IoError::Series { .. }));
    }

    #[test]
    fn write_then_read_back_vic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.txt");
        let series = daily_series(&[3.25, 4.0, 5.5]);
        write_series(&path, &series, TextFormat::Vic).unwrap();
        let back = read_series(&path, TextFormat::Vic).unwrap();
        assert_eq!(back, series);
    }

    #[test]
    fn write_then_read_back_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flow.csv");
        let series = monthly_series(&[3.25, 4.0, 5.5]);
        write_series(&path, &series, TextFormat::Csv).unwrap();
        let back = read_series(&path, TextFormat::Csv).unwrap();
        assert_eq!(back, series);
    }
}
