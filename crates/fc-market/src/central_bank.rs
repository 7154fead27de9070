//! `CentralBank` — the jurisdiction whose observance policy may alter a raw
//! holiday date.

use crate::country::{country_code, CountryCode};
use crate::currency::{currency_code, CurrencyCode};
use fc_core::ensure;
use fc_core::errors::Result;

/// A central bank (or comparable jurisdiction) record.
///
/// All four fields are validated at construction and the value is immutable
/// afterwards; equality and hashing cover every field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CentralBank {
    code: String,
    name: String,
    country: CountryCode,
    currency: CurrencyCode,
}

impl CentralBank {
    /// Construct a validated jurisdiction record.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `code` or `name` is blank, or if
    /// `country` / `currency` are not valid ISO-3166 / ISO-4217 codes.
    ///
    /// # Example
    /// ```
    /// use fc_market::CentralBank;
    /// let fed = CentralBank::new("FED", "Federal Reserve", "US", "USD").unwrap();
    /// assert_eq!(fed.currency().code(), "USD");
    /// assert!(CentralBank::new("", "Federal Reserve", "US", "USD").is_err());
    /// assert!(CentralBank::new("FED", "Federal Reserve", "US", "DOLLARS").is_err());
    /// ```
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        country: &str,
        currency: &str,
    ) -> Result<Self> {
        let code = code.into();
        let name = name.into();
        ensure!(!code.trim().is_empty(), "central bank code must not be blank");
        ensure!(!name.trim().is_empty(), "central bank name must not be blank");
        Ok(Self {
            code,
            name,
            country: country_code(country)?,
            currency: currency_code(currency)?,
        })
    }

    /// Jurisdiction identifier (e.g. `"FED"`, `"ECB"`).
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name (e.g. `"Federal Reserve"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// ISO-3166 country of the jurisdiction.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// ISO-4217 currency the jurisdiction issues.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }
}

impl std::fmt::Display for CentralBank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.code, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_all_fields() {
        assert!(CentralBank::new("ECB", "European Central Bank", "DE", "EUR").is_ok());
        assert!(CentralBank::new("  ", "European Central Bank", "DE", "EUR").is_err());
        assert!(CentralBank::new("ECB", "", "DE", "EUR").is_err());
        assert!(CentralBank::new("ECB", "European Central Bank", "EU", "EUR").is_err());
        assert!(CentralBank::new("ECB", "European Central Bank", "DE", "ECU").is_err());
    }

    #[test]
    fn value_equality_over_all_fields() {
        let a = CentralBank::new("BOE", "Bank of England", "GB", "GBP").unwrap();
        let b = CentralBank::new("BOE", "Bank of England", "GB", "GBP").unwrap();
        let c = CentralBank::new("BOE", "Bank of England", "GB", "EUR").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display_shows_code_and_name() {
        let fed = CentralBank::new("FED", "Federal Reserve", "US", "USD").unwrap();
        assert_eq!(fed.to_string(), "FED (Federal Reserve)");
    }
}
