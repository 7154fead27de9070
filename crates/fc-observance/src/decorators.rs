//! Observance decorators.
//!
//! Each decorator is an independent type that owns the expression it wraps
//! and itself satisfies [`HolidayExpression`], so chains compose by
//! construction order: innermost = base expression, outermost =
//! last-applied policy.  A decorator's result is a function of the wrapped
//! expression's date and the decorator's fixed policy alone.

use fc_core::errors::Result;
use fc_core::Year;
use fc_expr::{EvalContext, HolidayExpression};
use fc_market::CentralBank;
use fc_time::{Date, Weekday};
use std::sync::Arc;

/// Sunday-to-Monday forward shift.
///
/// If the wrapped date falls on a Sunday, observe it the following Monday;
/// every other weekday — Saturday included — is left unmodified.  The
/// asymmetry matches the central-bank conventions this policy encodes and
/// must not be "repaired" into a nearest-weekday rule.
#[derive(Debug, Clone)]
pub struct SundayToMonday {
    inner: Arc<dyn HolidayExpression>,
}

impl SundayToMonday {
    /// Jurisdictions observing this convention.
    const JURISDICTIONS: &'static [&'static str] = &["FED"];

    /// Wrap an expression with the Sunday-forward policy.
    pub fn new(inner: Arc<dyn HolidayExpression>) -> Self {
        Self { inner }
    }

    /// `true` if this policy applies to `jurisdiction`.
    pub fn supports(&self, jurisdiction: &CentralBank) -> bool {
        Self::JURISDICTIONS.contains(&jurisdiction.code())
    }
}

impl HolidayExpression for SundayToMonday {
    fn evaluate(&self, year: Year, ctx: &EvalContext<'_>) -> Result<Date> {
        let date = self.inner.evaluate(year, ctx)?;
        if date.weekday() == Weekday::Sunday {
            date.add_days(1)
        } else {
            Ok(date)
        }
    }
}

/// Weekend-to-Monday forward shift.
///
/// Saturday moves two days forward and Sunday one, so either lands on the
/// following Monday.
#[derive(Debug, Clone)]
pub struct WeekendToMonday {
    inner: Arc<dyn HolidayExpression>,
}

impl WeekendToMonday {
    /// Jurisdictions observing this convention.
    const JURISDICTIONS: &'static [&'static str] = &["BOE"];

    /// Wrap an expression with the weekend-forward policy.
    pub fn new(inner: Arc<dyn HolidayExpression>) -> Self {
        Self { inner }
    }

    /// `true` if this policy applies to `jurisdiction`.
    pub fn supports(&self, jurisdiction: &CentralBank) -> bool {
        Self::JURISDICTIONS.contains(&jurisdiction.code())
    }
}

impl HolidayExpression for WeekendToMonday {
    fn evaluate(&self, year: Year, ctx: &EvalContext<'_>) -> Result<Date> {
        let date = self.inner.evaluate(year, ctx)?;
        match date.weekday() {
            Weekday::Saturday => date.add_days(2),
            Weekday::Sunday => date.add_days(1),
            _ => Ok(date),
        }
    }
}

/// Pure pass-through.
///
/// For jurisdictions that observe holidays on the natural date; wrapping
/// with this decorator never changes the result.
#[derive(Debug, Clone)]
pub struct Unadjusted {
    inner: Arc<dyn HolidayExpression>,
}

impl Unadjusted {
    /// Jurisdictions observing this convention.
    const JURISDICTIONS: &'static [&'static str] = &["ECB"];

    /// Wrap an expression without altering its result.
    pub fn new(inner: Arc<dyn HolidayExpression>) -> Self {
        Self { inner }
    }

    /// `true` if this policy applies to `jurisdiction`.
    pub fn supports(&self, jurisdiction: &CentralBank) -> bool {
        Self::JURISDICTIONS.contains(&jurisdiction.code())
    }
}

impl HolidayExpression for Unadjusted {
    fn evaluate(&self, year: Year, ctx: &EvalContext<'_>) -> Result<Date> {
        self.inner.evaluate(year, ctx)
    }
}
