//! Calendar arithmetic for the day-stepped projection loop.
//!
//! Everything here works on Rata Die day numbers, which makes day stepping
//! O(1) and gives us calendar *normalization* for free: "day 31 of February"
//! is simply the day number of February 1st plus 30, which lands in early
//! March. The monthly schedule relies on that behavior instead of clamping to
//! the end of the month.

use jiff::ToSpan;
use jiff::civil::{Date, Weekday};

/// Largest year count a jiff span can hold; wider than the whole date range
pub const MAX_YEARS: i64 = 19_998;

/// Rata Die of `Date::MIN` (-9999-01-01)
const MIN_RD: i64 = rata_die_parts(-9999, 1, 1);
/// Rata Die of `Date::MAX` (9999-12-31)
const MAX_RD: i64 = rata_die_parts(9999, 12, 31);

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Proleptic Gregorian calendar algorithm from Baum (2017), with floored
/// division so years before 1 work too.
#[inline]
fn rata_die(d: Date) -> i64 {
    rata_die_parts(d.year() as i64, d.month() as i64, d.day() as i64)
}

#[inline]
const fn rata_die_parts(y: i64, m: i64, day: i64) -> i64 {
    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m).div_euclid(12);
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2).div_euclid(5) + 365 * y2 + y2.div_euclid(4) - y2.div_euclid(100)
        + y2.div_euclid(400)
        - 306
}

/// Convert a Rata Die day number back to a date, `None` outside jiff's range.
#[inline]
fn checked_rd_to_date(rd: i64) -> Option<Date> {
    if !(MIN_RD..=MAX_RD).contains(&rd) {
        return None;
    }

    // Shift so day 0 = March 1, year 0
    let z = rd + 306;
    let h = 100 * z - 25;
    let a = h.div_euclid(3_652_425);
    let b = a - a.div_euclid(4);
    let y = (100 * b + h).div_euclid(36_525);
    let c = b + z - 365 * y - y.div_euclid(4);
    let m = (5 * c + 456).div_euclid(153);
    let day = c - (153 * m - 457).div_euclid(5);

    let (year, month) = if m > 12 { (y + 1, m - 12) } else { (y, m) };

    Date::new(year as i16, month as i8, day as i8).ok()
}

/// Convert a Rata Die day number back to a date, saturating at
/// `Date::MIN`/`Date::MAX`.
#[inline]
fn rd_to_date(rd: i64) -> Date {
    if rd < MIN_RD {
        return Date::MIN;
    }
    checked_rd_to_date(rd.min(MAX_RD)).unwrap_or(Date::MAX)
}

/// Number of days between two dates (`d2 - d1`), positive when `d2 > d1`.
#[inline]
pub fn days_between(d1: Date, d2: Date) -> i32 {
    // Both ends lie within jiff's range, so the difference fits in an i32
    (rata_die(d2) - rata_die(d1)) as i32
}

/// Add `n` days (possibly negative) to a date, saturating at the ends of the
/// representable range.
#[inline]
pub fn add_days(d: Date, n: i32) -> Date {
    rd_to_date(rata_die(d) + n as i64)
}

/// Add `n` days, or `None` when the result is not a representable date.
#[inline]
pub fn checked_add_days(d: Date, n: i32) -> Option<Date> {
    checked_rd_to_date(rata_die(d) + n as i64)
}

fn normalized_rd(year: i32, month: i32, day: i32) -> i64 {
    let zero_based = month as i64 - 1;
    let year = year as i64 + zero_based.div_euclid(12);
    let month = zero_based.rem_euclid(12) + 1;
    rata_die_parts(year, month, 1) + day as i64 - 1
}

/// Build a date from possibly out-of-range month and day values, rolling
/// overflow forward the way a wall calendar would. Saturates at the ends of
/// the representable range.
///
/// `month` may be 0 or 13 (previous/next year) and `day` may exceed the length
/// of the month: `normalized_date(2023, 2, 31)` is 2023-03-03.
pub fn normalized_date(year: i32, month: i32, day: i32) -> Date {
    rd_to_date(normalized_rd(year, month, day))
}

/// [`normalized_date`], or `None` when the result is not representable.
pub fn checked_normalized_date(year: i32, month: i32, day: i32) -> Option<Date> {
    checked_rd_to_date(normalized_rd(year, month, day))
}

/// Add calendar months keeping the day of month, normalizing overflow.
///
/// 2024-01-31 plus one month is 2024-03-02, not 2024-02-29.
pub fn add_months_normalized(d: Date, months: i32) -> Date {
    normalized_date(
        d.year() as i32,
        (d.month() as i32).saturating_add(months),
        d.day() as i32,
    )
}

/// [`add_months_normalized`], or `None` when the result is not representable.
pub fn checked_add_months_normalized(d: Date, months: i32) -> Option<Date> {
    checked_normalized_date(
        d.year() as i32,
        (d.month() as i32).saturating_add(months),
        d.day() as i32,
    )
}

/// Add calendar years, saturating at the ends of the representable range.
pub fn add_years(d: Date, years: i64) -> Date {
    d.saturating_add(years.clamp(-MAX_YEARS, MAX_YEARS).years())
}

/// Walk backwards from `d` (inclusive) to the closest `weekday`.
pub fn previous_or_same_weekday(d: Date, weekday: Weekday) -> Date {
    let back = (d.weekday().to_sunday_zero_offset() - weekday.to_sunday_zero_offset())
        .rem_euclid(7);
    add_days(d, -(back as i32))
}

/// Whole calendar years from `from` until `to`, truncated, never negative.
pub fn whole_years_between(from: Date, to: Date) -> i32 {
    if to <= from {
        return 0;
    }
    let mut years = to.year() as i32 - from.year() as i32;
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;

    #[test]
    fn test_days_between_across_year() {
        // 2024 is a leap year → 366 days
        assert_eq!(days_between(date(2024, 1, 1), date(2025, 1, 1)), 366);
        assert_eq!(days_between(date(2025, 1, 1), date(2026, 1, 1)), 365);
        assert_eq!(days_between(date(2025, 1, 2), date(2025, 1, 1)), -1);
    }

    #[test]
    fn test_days_between_matches_jiff() {
        let pairs = [
            (date(2020, 1, 1), date(2030, 6, 15)),
            (date(2024, 2, 29), date(2025, 2, 28)),
            (date(2000, 3, 1), date(2100, 3, 1)),
        ];
        for (d1, d2) in pairs {
            let jiff_days = (d2 - d1).get_days();
            assert_eq!(days_between(d1, d2), jiff_days, "mismatch for {d1} → {d2}");
        }
    }

    #[test]
    fn test_add_days() {
        assert_eq!(add_days(date(2025, 1, 31), 1), date(2025, 2, 1));
        assert_eq!(add_days(date(2025, 12, 31), 1), date(2026, 1, 1));
        assert_eq!(add_days(date(2025, 1, 1), -1), date(2024, 12, 31));
        assert_eq!(add_days(date(2024, 2, 28), 1), date(2024, 2, 29));
    }

    #[test]
    fn test_normalized_date_rolls_forward() {
        assert_eq!(normalized_date(2023, 2, 31), date(2023, 3, 3));
        assert_eq!(normalized_date(2024, 2, 31), date(2024, 3, 2));
        assert_eq!(normalized_date(2024, 4, 31), date(2024, 5, 1));
        assert_eq!(normalized_date(2024, 13, 1), date(2025, 1, 1));
        assert_eq!(normalized_date(2024, 0, 15), date(2023, 12, 15));
    }

    #[test]
    fn test_add_months_normalized() {
        assert_eq!(add_months_normalized(date(2024, 1, 31), 1), date(2024, 3, 2));
        assert_eq!(add_months_normalized(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(add_months_normalized(date(2024, 3, 1), -1), date(2024, 2, 1));
    }

    #[test]
    fn test_weekday_walks() {
        // 2024-01-01 is a Monday
        let monday = date(2024, 1, 1);
        assert_eq!(previous_or_same_weekday(monday, Weekday::Monday), monday);
        assert_eq!(
            previous_or_same_weekday(date(2024, 1, 6), Weekday::Monday),
            monday
        );
        assert_eq!(
            previous_or_same_weekday(monday, Weekday::Sunday),
            date(2023, 12, 31)
        );
    }

    #[test]
    fn test_whole_years_between() {
        assert_eq!(whole_years_between(date(2024, 1, 1), date(2080, 1, 1)), 56);
        assert_eq!(whole_years_between(date(2024, 6, 1), date(2080, 1, 1)), 55);
        assert_eq!(whole_years_between(date(2080, 6, 1), date(2080, 1, 1)), 0);
    }

    #[test]
    fn test_range_limits_saturate() {
        assert_eq!(add_days(Date::MAX, 1), Date::MAX);
        assert_eq!(add_days(date(9999, 12, 25), 30), Date::MAX);
        assert_eq!(add_days(Date::MIN, -1), Date::MIN);
        assert_eq!(add_days(date(9999, 12, 30), 1), Date::MAX);

        assert_eq!(checked_add_days(Date::MAX, 1), None);
        assert_eq!(checked_add_days(date(9999, 12, 30), 1), Some(Date::MAX));
        assert_eq!(checked_add_days(Date::MIN, -1), None);

        assert_eq!(normalized_date(9999, 13, 1), Date::MAX);
        assert_eq!(checked_normalized_date(9999, 13, 1), None);
        assert_eq!(checked_add_months_normalized(date(9999, 12, 15), 1), None);
        assert_eq!(add_months_normalized(date(9999, 12, 15), 1), Date::MAX);
        assert_eq!(normalized_date(i32::MAX, i32::MAX, i32::MAX), Date::MAX);
    }

    #[test]
    fn test_add_years_saturates() {
        assert_eq!(add_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(add_years(date(2024, 1, 1), 8_000), Date::MAX);
        assert_eq!(add_years(date(2024, 1, 1), i64::MAX), Date::MAX);
        assert_eq!(add_years(date(2024, 1, 1), i64::MIN), Date::MIN);
    }

    #[test]
    fn test_days_between_whole_range() {
        let days = days_between(Date::MIN, Date::MAX);
        assert!(days > 0);
        assert_eq!(add_days(Date::MIN, days), Date::MAX);
        assert_eq!(add_days(Date::MAX, -days), Date::MIN);
    }
}
