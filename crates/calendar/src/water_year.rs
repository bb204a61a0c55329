//! Water year computation.

/// First month of the water year (October, US hydrological convention).
pub const WATER_YEAR_START_MONTH: u8 = 10;

/// Computes the water year for a given calendar year and month.
///
/// A water year runs October through September and is labeled by the
/// calendar year in which it ends: October 2000 belongs to water year
/// 2001, September 2001 also belongs to water year 2001.
///
/// The caller is expected to pass a validated month (1..=12); months
/// outside that range are treated as pre-October for robustness.
///
/// # Examples
///
/// ```
/// use deltaq_calendar::water_year;
///
/// assert_eq!(water_year(2000, 10), 2001);
/// assert_eq!(water_year(2001, 9), 2001);
/// assert_eq!(water_year(2001, 1), 2001);
/// ```
pub fn water_year(year: i32, month: u8) -> i32 {
    if month >= WATER_YEAR_START_MONTH {
        year + 1
    } else {
        year
    }
}
