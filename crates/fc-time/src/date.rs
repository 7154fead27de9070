//! `Date` type.
//!
//! Dates are represented as a serial number of days since an epoch.  The
//! epoch is **January 1, 1583** (serial 1), the first full year after the
//! Gregorian reform; the Easter computation this engine carries is defined
//! for 1583–4099, so the serial range covers exactly those years.
//!
//! # Serial number convention
//! * Serial 0 is used as the "null date" sentinel.
//! * Serial 1 = January 1, 1583 (a Saturday).
//! * The valid date range is 1583-01-01 to 4099-12-31.

use crate::weekday::Weekday;
use fc_core::errors::{Error, Result};
use fc_core::Year;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

/// First year representable as a `Date`.
pub const MIN_YEAR: Year = 1583;

/// Last year representable as a `Date`.
pub const MAX_YEAR: Year = 4099;

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 1583.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 4099.
    pub const MAX: Date = Date(919_316);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (the null sentinel or before the
    /// epoch) or beyond [`Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial <= 0 {
            return Err(Error::Date("serial number must be positive".into()));
        }
        let d = Date(serial);
        if d > Self::MAX {
            return Err(Error::Date(format!("serial {serial} exceeds maximum date")));
        }
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return the year (1583–4099).
    pub fn year(&self) -> Year {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1583-01-01) is a Saturday, ordinal 6.
        let w = ((self.0 + 4).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` calendar days (negative values go backwards).
    /// Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0 + n;
        if serial <= 0 || Date(serial) > Self::MAX {
            return Err(Error::Date(format!(
                "date arithmetic: result {serial} out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        Date(serial_from_ymd(y, m, last))
    }

    /// Return the *n*-th occurrence of `weekday` in the month of
    /// `year`/`month`.
    ///
    /// For example, `nth_weekday(4, Weekday::Thursday, 2011, 11)` returns the
    /// fourth Thursday of November 2011 (2011-11-24).
    ///
    /// # Errors
    /// Returns an error if `n` is zero, if the *n*-th such weekday does not
    /// exist in the month, or if the result is out of the valid date range.
    /// The occurrence is never clamped to an earlier one.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        // Days to advance from the 1st to reach the first occurrence
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7) as u16;
        let day = 1 + skip + 7 * (n as u16 - 1);
        if day > days_in_month(year, month) as u16 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`,
    /// walking backward from the end of the month.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let last = Date::from_ymd(year, month, days_in_month(year, month))?;
        let last_wd = last.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let back = ((last_wd as i32 - target_wd as i32).rem_euclid(7)) as u8;
        Date::from_ymd(year, month, last.day_of_month() - back)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a Gregorian leap year.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
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
        _ => unreachable!(),
    }
}

/// Number of Gregorian leap years strictly before `year`.
fn leap_years_before(year: i32) -> i32 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Convert (year, month, day) to a serial number.  Serial 1 = 1583-01-01.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;

    // Days in full years [1583, year)
    let mut serial = (y - 1583) * 365;
    serial += leap_years_before(y) - leap_years_before(1583);
    // Days in months 1..m for the current year
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (Year, u8, u8) {
    debug_assert!(serial > 0, "null or negative serial {serial}");
    // Estimate year, then adjust until the serial falls within it
    let mut y = (serial / 365 + 1583) as Year;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let doy = serial - serial_from_ymd(y, 1, 1) + 1; // 1-based
    let mut m = 1u8;
    let mut remaining = doy;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = Date::from_ymd(1583, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d, Date::MIN);
    }

    #[test]
    fn test_max() {
        let d = Date::from_ymd(4099, 12, 31).unwrap();
        assert_eq!(d, Date::MAX);
        assert!(Date::from_serial(d.serial() + 1).is_err());
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1583, 1, 1),
            (1583, 12, 31),
            (1600, 2, 29),  // century leap
            (1700, 2, 28),  // century non-leap
            (2000, 2, 29),  // century leap
            (2011, 7, 4),
            (2012, 4, 8),
            (2100, 2, 28),
            (4099, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(date.year(), y, "year mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.month(), m, "month mismatch for {y}-{m:02}-{d:02}");
            assert_eq!(date.day_of_month(), d, "day mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // The epoch is a Saturday
        assert_eq!(Date::MIN.weekday(), Weekday::Saturday);
        // 2000-01-01 is a Saturday
        assert_eq!(
            Date::from_ymd(2000, 1, 1).unwrap().weekday(),
            Weekday::Saturday
        );
        // 2024-01-01 is a Monday
        assert_eq!(
            Date::from_ymd(2024, 1, 1).unwrap().weekday(),
            Weekday::Monday
        );
        // 2012-04-08 (Easter Sunday) is a Sunday
        assert_eq!(
            Date::from_ymd(2012, 4, 8).unwrap().weekday(),
            Weekday::Sunday
        );
    }

    #[test]
    fn test_invalid_ymd() {
        assert!(Date::from_ymd(1582, 12, 31).is_err());
        assert!(Date::from_ymd(4100, 1, 1).is_err());
        assert!(Date::from_ymd(2023, 2, 29).is_err());
        assert!(Date::from_ymd(2023, 13, 1).is_err());
        assert!(Date::from_ymd(2023, 4, 31).is_err());
        assert!(Date::from_ymd(2023, 4, 0).is_err());
    }

    #[test]
    fn test_arithmetic() {
        let d = Date::from_ymd(2012, 4, 8).unwrap();
        let good_friday = d.add_days(-2).unwrap();
        assert_eq!(good_friday, Date::from_ymd(2012, 4, 6).unwrap());
        assert_eq!(d - good_friday, 2);
        assert_eq!(good_friday.days_between(d), 2);
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_end_of_month() {
        let d = Date::from_ymd(2024, 2, 15).unwrap();
        assert_eq!(d.end_of_month().day_of_month(), 29);
        let d2 = Date::from_ymd(2023, 2, 15).unwrap();
        assert_eq!(d2.end_of_month().day_of_month(), 28);
    }

    #[test]
    fn test_nth_weekday() {
        // Thanksgiving 2011: fourth Thursday of November = Nov 24
        let d = Date::nth_weekday(4, Weekday::Thursday, 2011, 11).unwrap();
        assert_eq!(d, Date::from_ymd(2011, 11, 24).unwrap());
        assert_eq!(d.weekday(), Weekday::Thursday);

        // 1st Monday of January 2024 = January 1
        let d2 = Date::nth_weekday(1, Weekday::Monday, 2024, 1).unwrap();
        assert_eq!(d2, Date::from_ymd(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_nth_weekday_out_of_range() {
        // There is no 5th Wednesday in February 2024
        assert!(Date::nth_weekday(5, Weekday::Wednesday, 2024, 2).is_err());
        assert!(Date::nth_weekday(0, Weekday::Monday, 2024, 1).is_err());
    }

    #[test]
    fn test_last_weekday() {
        // Memorial Day 2012: last Monday of May = May 28
        let d = Date::last_weekday(Weekday::Monday, 2012, 5).unwrap();
        assert_eq!(d, Date::from_ymd(2012, 5, 28).unwrap());
        // Last Thursday of November 2011 = Nov 24 (same as the 4th)
        let d2 = Date::last_weekday(Weekday::Thursday, 2011, 11).unwrap();
        assert_eq!(d2, Date::from_ymd(2011, 11, 24).unwrap());
    }

    #[test]
    fn test_display() {
        let d = Date::from_ymd(2012, 4, 6).unwrap();
        assert_eq!(d.to_string(), "2012-04-06");
        assert_eq!(format!("{d:?}"), "Date(2012-04-06)");
    }
}
