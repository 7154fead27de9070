//! Observance provider table.
//!
//! Providers replace runtime class scanning with an explicit table built at
//! process startup.  A provider's [`probe`](ObservanceProvider::probe) is
//! the fallible "try to construct, then check support" step: construction
//! failure is an `Err` the locator swallows, an unsupported jurisdiction is
//! `Ok(None)`, and a match is `Ok(Some)`.

use crate::decorators::{SundayToMonday, Unadjusted, WeekendToMonday};
use fc_core::errors::Result;
use fc_expr::HolidayExpression;
use fc_market::CentralBank;
use std::sync::Arc;

/// A source of one observance decorator.
pub trait ObservanceProvider: Send + Sync {
    /// Stable identifier; the provider table is sorted by it so scan order
    /// is deterministic across runs.
    fn id(&self) -> &str;

    /// Try to construct this provider's decorator around `base` and check
    /// whether it applies to `jurisdiction`.
    ///
    /// Returns `Ok(Some(decorated))` on a match, `Ok(None)` when the
    /// decorator was constructed but does not support the jurisdiction, and
    /// `Err` when construction itself failed (e.g. the provider is
    /// incompatible with this expression shape).
    fn probe(
        &self,
        base: Arc<dyn HolidayExpression>,
        jurisdiction: &CentralBank,
    ) -> Result<Option<Arc<dyn HolidayExpression>>>;
}

/// Provider of [`SundayToMonday`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SundayToMondayProvider;

impl ObservanceProvider for SundayToMondayProvider {
    fn id(&self) -> &str {
        "sunday-to-monday"
    }

    fn probe(
        &self,
        base: Arc<dyn HolidayExpression>,
        jurisdiction: &CentralBank,
    ) -> Result<Option<Arc<dyn HolidayExpression>>> {
        let decorator = SundayToMonday::new(base);
        Ok(decorator
            .supports(jurisdiction)
            .then(|| Arc::new(decorator) as Arc<dyn HolidayExpression>))
    }
}

/// Provider of [`WeekendToMonday`].
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendToMondayProvider;

impl ObservanceProvider for WeekendToMondayProvider {
    fn id(&self) -> &str {
        "weekend-to-monday"
    }

    fn probe(
        &self,
        base: Arc<dyn HolidayExpression>,
        jurisdiction: &CentralBank,
    ) -> Result<Option<Arc<dyn HolidayExpression>>> {
        let decorator = WeekendToMonday::new(base);
        Ok(decorator
            .supports(jurisdiction)
            .then(|| Arc::new(decorator) as Arc<dyn HolidayExpression>))
    }
}

/// Provider of [`Unadjusted`].
#[derive(Debug, Clone, Copy, Default)]
pub struct UnadjustedProvider;

impl ObservanceProvider for UnadjustedProvider {
    fn id(&self) -> &str {
        "unadjusted"
    }

    fn probe(
        &self,
        base: Arc<dyn HolidayExpression>,
        jurisdiction: &CentralBank,
    ) -> Result<Option<Arc<dyn HolidayExpression>>> {
        let decorator = Unadjusted::new(base);
        Ok(decorator
            .supports(jurisdiction)
            .then(|| Arc::new(decorator) as Arc<dyn HolidayExpression>))
    }
}

/// The compiled list of built-in providers, sorted by id.
pub fn builtin_providers() -> Vec<Arc<dyn ObservanceProvider>> {
    vec![
        Arc::new(SundayToMondayProvider),
        Arc::new(UnadjustedProvider),
        Arc::new(WeekendToMondayProvider),
    ]
}
