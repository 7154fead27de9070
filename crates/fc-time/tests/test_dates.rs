//! Property tests for the serial-number date representation.

use fc_time::{days_in_month, Date, Weekday, MAX_YEAR, MIN_YEAR};
use proptest::prelude::*;

proptest! {
    /// (year, month, day) -> serial -> (year, month, day) is the identity for
    /// every representable date.
    #[test]
    fn ymd_serial_roundtrip(
        year in MIN_YEAR..=MAX_YEAR,
        month in 1u8..=12,
        day in 1u8..=31,
    ) {
        prop_assume!(day <= days_in_month(year, month));
        let date = Date::from_ymd(year, month, day).unwrap();
        prop_assert_eq!(date.year(), year);
        prop_assert_eq!(date.month(), month);
        prop_assert_eq!(date.day_of_month(), day);
        prop_assert_eq!(Date::from_serial(date.serial()).unwrap(), date);
    }

    /// Adding one day advances the weekday cyclically.
    #[test]
    fn weekday_advances_with_serial(serial in 1i32..Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let next = d.add_days(1).unwrap();
        let expected = d.weekday().ordinal() % 7 + 1;
        prop_assert_eq!(next.weekday().ordinal(), expected);
    }

    /// `nth_weekday` lands on the requested weekday in the requested month,
    /// with the day-of-month in the window implied by the ordinal.
    #[test]
    fn nth_weekday_window(
        n in 1u8..=4,
        wd in 1u8..=7,
        year in MIN_YEAR..=MAX_YEAR,
        month in 1u8..=12,
    ) {
        let weekday = Weekday::from_ordinal(wd).unwrap();
        let d = Date::nth_weekday(n, weekday, year, month).unwrap();
        prop_assert_eq!(d.weekday(), weekday);
        prop_assert_eq!(d.month(), month);
        let lo = 1 + 7 * (n - 1);
        prop_assert!((lo..lo + 7).contains(&d.day_of_month()));
    }
}
