//! Proleptic Gregorian calendar helpers used by the age calculator.

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns number of days in a given year/month (handles leap years)
///
/// `month` comes from chrono and is always in `1..=12`; anything else yields 30.
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}
