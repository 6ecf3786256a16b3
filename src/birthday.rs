//! birthday.rs
//!
//! Countdown to the next occurrence of a birth month/day.
//!
//! Dates are compared at day granularity, so a birthday that falls today counts
//! as 0 days away rather than a year away.
//!
//! A birth day that does not exist in the target year (29 February outside a
//! leap year) is moved to the last day of that month, i.e. 28 February.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::error::{ProfileError, Result};

/// Date of the next birthday on or after `today`.
pub fn next_birthday(birth_month: u32, birth_day: u32, today: NaiveDate) -> Result<NaiveDate> {
    let this_year = anniversary(today.year(), birth_month, birth_day)?;
    if this_year >= today {
        return Ok(this_year);
    }
    anniversary(today.year() + 1, birth_month, birth_day)
}

/// Whole days from `today` until the next birthday; 0 when it is today.
pub fn days_until(birth_month: u32, birth_day: u32, today: NaiveDate) -> Result<u32> {
    let next = next_birthday(birth_month, birth_day, today)?;
    let days = (next - today).num_days();
    debug!(%today, %next, days, "birthday countdown");
    // next >= today and at most a year and a day ahead
    Ok(days as u32)
}

fn anniversary(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    let invalid = || ProfileError::InvalidBirthday { year, month, day };
    if !(1..=12).contains(&month) {
        return Err(invalid());
    }
    let day = day.min(days_in_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Last day of `month` (1..=12) in `year`.
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_today_is_zero() {
        assert_eq!(days_until(3, 15, date(2026, 3, 15)).unwrap(), 0);
    }

    #[test]
    fn test_birthday_later_this_year() {
        assert_eq!(days_until(3, 15, date(2026, 3, 1)).unwrap(), 14);
        assert_eq!(days_until(12, 31, date(2026, 1, 1)).unwrap(), 364);
    }

    #[test]
    fn test_birthday_already_passed_rolls_to_next_year() {
        assert_eq!(days_until(3, 15, date(2026, 3, 16)).unwrap(), 364);
        assert_eq!(
            next_birthday(1, 1, date(2026, 12, 31)).unwrap(),
            date(2027, 1, 1)
        );
        assert_eq!(days_until(1, 1, date(2026, 12, 31)).unwrap(), 1);
    }

    #[test]
    fn test_leap_year_span() {
        // 2028 is a leap year, so the wait crosses 29 February.
        assert_eq!(days_until(3, 1, date(2027, 3, 2)).unwrap(), 365);
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        assert_eq!(
            next_birthday(2, 29, date(2026, 1, 10)).unwrap(),
            date(2026, 2, 28)
        );
        assert_eq!(days_until(2, 29, date(2026, 2, 28)).unwrap(), 0);
    }

    #[test]
    fn test_leap_day_birthday_rolls_into_leap_year() {
        assert_eq!(
            next_birthday(2, 29, date(2027, 3, 1)).unwrap(),
            date(2028, 2, 29)
        );
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            days_until(13, 1, date(2026, 1, 1)),
            Err(ProfileError::InvalidBirthday { month: 13, .. })
        ));
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 12), 31);
    }
}
