//! # fc-time
//!
//! Date, weekday, and month primitives for the holiday resolution engine.
//! Dates are integer serial numbers over the Gregorian calendar, valid for
//! years 1583–4099.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `Date` type.
pub mod date;

/// `Month` — month of the year.
pub mod month;

/// `Weekday` — day of the week.
pub mod weekday;

pub use date::{days_in_month, is_leap_year, Date, MAX_YEAR, MIN_YEAR};
pub use month::Month;
pub use weekday::Weekday;
