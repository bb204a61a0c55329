use std::fs;
use std::path::Path;

use deltaq_calendar::Date;
use deltaq_io::{read_series, write_series, IoError, TextFormat};
use deltaq_series::Timestep;

#[test]
fn vic_daily_file_across_leap_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leap.txt");

    // Feb 27 .. Mar 1 of a leap year.
    let rows = "\
2000 2 27 10.0
2000 2 28 11.0
2000 2 29 12.0
2000 3 1 13.0
";
    fs::write(&path, rows).unwrap();

    let series = read_series(&path, TextFormat::Vic).unwrap();
    assert_eq!(series.timestep().unwrap(), Timestep::Daily);
    assert_eq!(series.len(), 4);
    assert_eq!(series.points()[2].date, Date::new(2000, 2, 29).unwrap());
}

#[test]
fn format_conversion_preserves_points() {
    let dir = tempfile::tempdir().unwrap();
    let vic_path = dir.path().join("flow.txt");
    let csv_path = dir.path().join("flow.csv");

    let mut rows = String::new();
    let mut d = Date::new(1999, 10, 1).unwrap();
    for i in 0..24 {
        rows.push_str(&format!("{} {} {}\n", d.year(), d.month(), 100.0 + i as f64));
        d = d.next_month();
    }
    fs::write(&vic_path, rows).unwrap();

    let series = read_series(&vic_path, TextFormat::Vic).unwrap();
    write_series(&csv_path, &series, TextFormat::Csv).unwrap();
    let back = read_series(&csv_path, TextFormat::Csv).unwrap();

    assert_eq!(back, series);
}

#[test]
fn missing_input_reported_by_path() {
    let err = read_series(Path::new("/no/such/dir/flow.txt"), TextFormat::Csv).unwrap_err();
    match err {
        IoError::FileNotFound { path } => {
            assert!(path.ends_with("flow.txt"));
        }
        other => panic!("expected FileNotFound, got {other:?}"),
    }
}
