//! Month length tables for the Gregorian calendar.

use crate::error::CalendarError;

/// Days per month for a non-leap year, index = month - 1.
const MONTH_DAYS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in a month of a given year.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is outside 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(MONTH_DAYS[(month - 1) as usize])
}

/// Returns the number of days in a calendar year (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_year_rules() {
        assert!(is_leap_year(2000)); // divisible by 400
        assert!(!is_leap_year(1900)); // divisible by 100, not 400
        assert!(is_leap_year(1996)); // divisible by 4
        assert!(!is_leap_year(1999));
    }

    #[test]
    fn february_lengths() {
        assert_eq!(days_in_month(1999, 2).unwrap(), 28);
        assert_eq!(days_in_month(2000, 2).unwrap(), 29);
        assert_eq!(days_in_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn non_february_lengths() {
        assert_eq!(days_in_month(2000, 1).unwrap(), 31);
        assert_eq!(days_in_month(2000, 4).unwrap(), 30);
        assert_eq!(days_in_month(2000, 9).unwrap(), 30);
        assert_eq!(days_in_month(2000, 12).unwrap(), 31);
    }

    #[test]
    fn invalid_month() {
        assert_eq!(
            days_in_month(2000, 0).unwrap_err(),
            CalendarError::InvalidMonth { month: 0 }
        );
        assert_eq!(
            days_in_month(2000, 13).unwrap_err(),
            CalendarError::InvalidMonth { month: 13 }
        );
    }

    #[test]
    fn year_lengths() {
        assert_eq!(days_in_year(2000), 366);
        assert_eq!(days_in_year(2001), 365);
        assert_eq!(days_in_year(1900), 365);
    }

    #[test]
    fn months_sum_to_year() {
        let total: u32 = (1..=12u8)
            .map(|m| days_in_month(1999, m).unwrap() as u32)
            .sum();
        assert_eq!(total, 365);
        let total_leap: u32 = (1..=12u8)
            .map(|m| days_in_month(2000, m).unwrap() as u32)
            .sum();
        assert_eq!(total_leap, 366);
    }
}
