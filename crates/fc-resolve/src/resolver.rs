//! The resolution facade.

use crate::catalog::Catalog;
use crate::record::ResolvedHoliday;
use fc_algo::AlgorithmRegistry;
use fc_core::errors::Result;
use fc_core::Year;
use fc_expr::{DefinitionSet, EvalContext, HolidayExpression};
use fc_market::CentralBank;
use fc_observance::DecoratorLocator;
use std::sync::Arc;

/// Resolves `(definition, jurisdiction, year)` triples to observed dates.
///
/// Owns the algorithm registry, the definition table, and the decorator
/// locator; all three are populated at construction and read-only
/// afterwards, so a `Resolver` can be shared across threads.
pub struct Resolver {
    calendar_id: String,
    algorithms: AlgorithmRegistry,
    definitions: DefinitionSet,
    locator: DecoratorLocator,
    banks: Vec<CentralBank>,
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("calendar_id", &self.calendar_id)
            .field("algorithms", &self.algorithms)
            .field("definitions", &self.definitions)
            .field("banks", &self.banks)
            .finish_non_exhaustive()
    }
}

impl Resolver {
    /// Build a resolver from its parts.
    ///
    /// The definition reference graph is validated here, so cyclic or
    /// dangling `RelativeTo` chains are rejected before any resolution.
    ///
    /// # Errors
    /// `Error::CyclicExpressionReference` / `Error::UnknownDefinition` from
    /// graph validation.
    pub fn new(
        calendar_id: impl Into<String>,
        algorithms: AlgorithmRegistry,
        definitions: DefinitionSet,
        locator: DecoratorLocator,
    ) -> Result<Self> {
        definitions.validate()?;
        Ok(Self {
            calendar_id: calendar_id.into(),
            algorithms,
            definitions,
            locator,
            banks: Vec::new(),
        })
    }

    /// Build a resolver over a loaded catalog, the built-in algorithms, and
    /// the built-in observance providers.  The catalog's jurisdiction
    /// records are kept and reachable through [`Resolver::banks`].
    ///
    /// # Errors
    /// `Error::DuplicateAlgorithm` if the built-in algorithm table is
    /// misconfigured; graph-validation errors as for [`Resolver::new`].
    pub fn from_catalog(catalog: Catalog) -> Result<Self> {
        let (calendar_id, definitions, banks) = catalog.into_parts();
        let mut resolver = Self::new(
            calendar_id,
            AlgorithmRegistry::with_builtins()?,
            definitions,
            DecoratorLocator::with_builtins(),
        )?;
        resolver.banks = banks;
        Ok(resolver)
    }

    /// The financial-calendar id resolved records carry.
    pub fn calendar_id(&self) -> &str {
        &self.calendar_id
    }

    /// The holiday definitions.
    pub fn definitions(&self) -> &DefinitionSet {
        &self.definitions
    }

    /// The jurisdictions loaded with the catalog (empty for resolvers built
    /// from parts).
    pub fn banks(&self) -> &[CentralBank] {
        &self.banks
    }

    /// Find a loaded jurisdiction by bank code.
    pub fn bank(&self, code: &str) -> Option<&CentralBank> {
        self.banks.iter().find(|b| b.code() == code)
    }

    /// Resolve one holiday for one jurisdiction and year.
    ///
    /// Looks up the base expression, wraps it with the jurisdiction's
    /// observance decorator (if any), evaluates, and packages the record.
    /// The decorator chain is rebuilt per call; nothing is cached.
    ///
    /// # Errors
    /// `Error::UnknownDefinition` if `definition_id` is not registered;
    /// evaluation errors (`InvalidExpression`, `NoSuchAlgorithm`, …)
    /// propagate unchanged.
    pub fn resolve(
        &self,
        definition_id: &str,
        jurisdiction: &CentralBank,
        year: Year,
    ) -> Result<ResolvedHoliday> {
        let definition = self.definitions.lookup(definition_id)?;
        let base: Arc<dyn HolidayExpression> = Arc::new(definition.rule().clone());
        let decorated = self.locator.decorate(base, jurisdiction);
        let ctx = EvalContext::new(&self.algorithms, &self.definitions);
        let date = decorated.evaluate(year, &ctx)?;
        Ok(ResolvedHoliday {
            definition_id: definition.id().to_owned(),
            holiday_name: definition.name().to_owned(),
            calendar_id: self.calendar_id.clone(),
            jurisdiction: jurisdiction.code().to_owned(),
            date,
        })
    }

    /// Resolve every definition in the table for one jurisdiction and year,
    /// in definition-id order.
    ///
    /// # Errors
    /// The first evaluation error aborts the sweep; financial-calendar
    /// output must be complete or absent, never partially silently wrong.
    pub fn resolve_all(
        &self,
        jurisdiction: &CentralBank,
        year: Year,
    ) -> Result<Vec<ResolvedHoliday>> {
        self.definitions
            .iter()
            .map(|d| self.resolve(d.id(), jurisdiction, year))
            .collect()
    }
}
