//! Easter computations.
//!
//! Both algorithms are pure integer arithmetic — no floating point and no
//! calendar-library shortcuts — so the results are reproducible bit-for-bit
//! across implementations.

use crate::algorithm::HolidayAlgorithm;
use fc_core::errors::{Error, Result};
use fc_core::Year;
use fc_time::{Date, MAX_YEAR, MIN_YEAR};

/// Western (Gregorian) Easter Sunday, Meeus/Jones/Butcher algorithm.
///
/// Valid for every Gregorian year 1583–4099; the result is always a Sunday
/// between March 22 and April 25 inclusive.
#[derive(Debug, Clone, Copy, Default)]
pub struct WesternEaster;

impl HolidayAlgorithm for WesternEaster {
    fn name(&self) -> &str {
        "WesternEaster"
    }

    fn compute(&self, year: Year) -> Result<Date> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "WesternEaster is defined for [{MIN_YEAR}, {MAX_YEAR}], got {year}"
            )));
        }
        let y = year as i32;
        let a = y % 19;
        let b = y / 100;
        let c = y % 100;
        let d = b / 4;
        let e = b % 4;
        let f = (b + 8) / 25;
        let g = (b - f + 1) / 3;
        let h = (19 * a + b - d - g + 15) % 30;
        let i = c / 4;
        let k = c % 4;
        let l = (32 + 2 * e + 2 * i - h - k) % 7;
        let m = (a + 11 * h + 22 * l) / 451;
        let month = ((h + l - 7 * m + 114) / 31) as u8; // 3 = March, 4 = April
        let day = ((h + l - 7 * m + 114) % 31 + 1) as u8;
        Date::from_ymd(year, month, day)
    }
}

/// Orthodox Easter Sunday on the Gregorian calendar.
///
/// Computes the Julian-calendar Easter with Meeus's Julian algorithm, then
/// shifts by the Julian→Gregorian day offset of the year's century.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrthodoxEaster;

impl HolidayAlgorithm for OrthodoxEaster {
    fn name(&self) -> &str {
        "OrthodoxEaster"
    }

    fn compute(&self, year: Year) -> Result<Date> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "OrthodoxEaster is defined for [{MIN_YEAR}, {MAX_YEAR}], got {year}"
            )));
        }
        let y = year as i32;
        let a = y % 4;
        let b = y % 7;
        let c = y % 19;
        let d = (19 * c + 15) % 30;
        let e = (2 * a + 4 * b - d + 34) % 7;
        let month = ((d + e + 114) / 31) as u8;
        let day = ((d + e + 114) % 31 + 1) as u8;
        // Julian-calendar date of the same physical day; the century offset
        // is constant across March–May of any given year.
        let offset = y / 100 - y / 400 - 2;
        Date::from_ymd(year, month, day)?.add_days(offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fc_time::Weekday;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn western_easter_known_years() {
        let expected = [
            (2008, 3, 23),
            (2009, 4, 12),
            (2010, 4, 4),
            (2011, 4, 24),
            (2012, 4, 8),
            (2013, 3, 31),
            (2014, 4, 20),
            (2016, 3, 27),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (1583, 4, 10),
            (1818, 3, 22), // earliest possible date
            (1943, 4, 25), // latest possible date
        ];
        for (y, m, d) in expected {
            assert_eq!(
                WesternEaster.compute(y).unwrap(),
                date(y, m, d),
                "Easter {y}"
            );
        }
    }

    #[test]
    fn western_easter_full_range_invariant() {
        // A Sunday in [March 22, April 25] for every valid year.
        for y in MIN_YEAR..=MAX_YEAR {
            let easter = WesternEaster.compute(y).unwrap();
            assert_eq!(easter.weekday(), Weekday::Sunday, "Easter {y} not a Sunday");
            let (m, d) = (easter.month(), easter.day_of_month());
            let in_window = (m == 3 && d >= 22) || (m == 4 && d <= 25);
            assert!(in_window, "Easter {y} = {easter} outside [Mar 22, Apr 25]");
        }
    }

    #[test]
    fn western_easter_rejects_out_of_range_years() {
        assert!(WesternEaster.compute(1582).is_err());
        assert!(WesternEaster.compute(4100).is_err());
    }

    #[test]
    fn orthodox_easter_known_years() {
        let expected = [
            (2010, 4, 4),
            (2012, 4, 15),
            (2015, 4, 12),
            (2016, 5, 1),
            (2021, 5, 2),
            (2023, 4, 16),
            (2024, 5, 5),
            (2025, 4, 20), // coincides with the Western date
        ];
        for (y, m, d) in expected {
            assert_eq!(
                OrthodoxEaster.compute(y).unwrap(),
                date(y, m, d),
                "Orthodox Easter {y}"
            );
        }
    }

    #[test]
    fn orthodox_easter_falls_on_sunday() {
        for y in 1900..=2199 {
            let easter = OrthodoxEaster.compute(y).unwrap();
            assert_eq!(
                easter.weekday(),
                Weekday::Sunday,
                "Orthodox Easter {y} not a Sunday"
            );
        }
    }
}
