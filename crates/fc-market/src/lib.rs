//! # fc-market
//!
//! Jurisdiction records and the ISO code tables they are validated against.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `CentralBank` jurisdiction records.
pub mod central_bank;

/// ISO-3166 alpha-2 country codes.
pub mod country;

/// ISO-4217 currency codes.
pub mod currency;

pub use central_bank::CentralBank;
pub use country::{country_code, CountryCode};
pub use currency::{currency_code, CurrencyCode};
