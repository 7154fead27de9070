//! # fincal
//!
//! Resolves shorthand holiday notations (`DECEMBER/25`, `3MONDAY/NOVEMBER`,
//! `WesternEaster-2`, `@christmas+1`) into concrete dates for a given year,
//! and applies jurisdiction-specific observance adjustments on top.
//!
//! This crate re-exports the public surface of the workspace members:
//!
//! * [`fc_core`] — errors and shared foundations
//! * [`fc_time`] — serial-number dates, weekdays, months
//! * [`fc_market`] — central-bank jurisdictions and ISO code tables
//! * [`fc_algo`] — named year → date algorithms and their registry
//! * [`fc_expr`] — the expression model, parser, and definition table
//! * [`fc_observance`] — observance decorators and the locator
//! * [`fc_resolve`] — catalog loading, the resolver facade, writers
//!
//! # Example
//! ```
//! use fincal::{CentralBank, Date, Resolver};
//! use fincal::{AlgorithmRegistry, DecoratorLocator, Definition, DefinitionSet};
//!
//! let mut definitions = DefinitionSet::new();
//! definitions
//!     .insert(Definition::new("christmas", "Christmas Day", fincal::parse("DECEMBER/25")?)?)
//!     .unwrap();
//! let resolver = Resolver::new(
//!     "demo",
//!     AlgorithmRegistry::with_builtins()?,
//!     definitions,
//!     DecoratorLocator::with_builtins(),
//! )?;
//!
//! let fed = CentralBank::new("FED", "Federal Reserve", "US", "USD")?;
//! // Christmas 2011 falls on a Sunday; the Fed observes it on Monday.
//! let record = resolver.resolve("christmas", &fed, 2011)?;
//! assert_eq!(record.date, Date::from_ymd(2011, 12, 26)?);
//! # Ok::<(), fincal::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub use fc_algo::{
    builtin_algorithms, AlgorithmFactory, AlgorithmRegistry, HolidayAlgorithm, OrthodoxEaster,
    WesternEaster,
};
pub use fc_core::{Error, Result, Year};
pub use fc_expr::{
    parse, DateRule, Definition, DefinitionLookup, DefinitionSet, EvalContext, HolidayExpression,
    Ordinal,
};
pub use fc_market::{country_code, currency_code, CentralBank, CountryCode, CurrencyCode};
pub use fc_observance::{
    builtin_providers, DecoratorLocator, ObservanceProvider, SundayToMonday, Unadjusted,
    WeekendToMonday,
};
pub use fc_resolve::{Catalog, DelimitedWriter, RecordWriter, ResolvedHoliday, Resolver};
pub use fc_time::{Date, Month, Weekday};
