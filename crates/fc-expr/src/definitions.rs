//! The definition table: named holiday expressions and their reference
//! graph.

use crate::expression::{DateRule, DefinitionLookup, HolidayExpression};
use fc_core::ensure;
use fc_core::errors::{Error, Result};
use std::collections::BTreeMap;

/// A named holiday definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    id: String,
    name: String,
    rule: DateRule,
}

impl Definition {
    /// Create a definition.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if `id` or `name` is blank.
    pub fn new(id: impl Into<String>, name: impl Into<String>, rule: DateRule) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        ensure!(!id.trim().is_empty(), "definition id must not be blank");
        ensure!(!name.trim().is_empty(), "definition name must not be blank");
        Ok(Self { id, name, rule })
    }

    /// Stable identifier used by `RelativeTo` references.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name of the holiday (e.g. `"Christmas Day"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The date rule.
    pub fn rule(&self) -> &DateRule {
        &self.rule
    }
}

/// The table of holiday definitions, keyed by id.
///
/// Populated once during definition loading; iteration order is the id
/// order, so diagnostics and writer output are stable across runs.
#[derive(Debug, Default)]
pub struct DefinitionSet {
    definitions: BTreeMap<String, Definition>,
}

impl DefinitionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a definition.
    ///
    /// # Errors
    /// `Error::InvalidArgument` if the id is already taken.
    pub fn insert(&mut self, definition: Definition) -> Result<()> {
        if self.definitions.contains_key(definition.id()) {
            return Err(Error::InvalidArgument(format!(
                "definition id `{}` is already registered",
                definition.id()
            )));
        }
        self.definitions
            .insert(definition.id().to_owned(), definition);
        Ok(())
    }

    /// Return the definition registered under `id`, if any.
    pub fn get(&self, id: &str) -> Option<&Definition> {
        self.definitions.get(id)
    }

    /// Return the definition registered under `id`.
    ///
    /// # Errors
    /// `Error::UnknownDefinition` if absent.
    pub fn lookup(&self, id: &str) -> Result<&Definition> {
        self.get(id)
            .ok_or_else(|| Error::UnknownDefinition(id.to_owned()))
    }

    /// Iterate definitions in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Definition> {
        self.definitions.values()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// `true` if no definition is registered.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Check the `RelativeTo` reference graph.
    ///
    /// Every reference must resolve to a registered definition and the graph
    /// must be acyclic.  Run after loading, before any evaluation; a rejected
    /// set never reaches date arithmetic.
    ///
    /// # Errors
    /// * `Error::UnknownDefinition` for a dangling reference.
    /// * `Error::CyclicExpressionReference` naming the cycle path.
    pub fn validate(&self) -> Result<()> {
        // Each definition has at most one outgoing reference, so every cycle
        // is a simple chain; walk each chain and watch for revisits.
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Active,
            Done,
        }
        let mut marks: BTreeMap<&str, Mark> = BTreeMap::new();
        for start in self.definitions.keys() {
            if marks.contains_key(start.as_str()) {
                continue;
            }
            let mut chain: Vec<&str> = Vec::new();
            let mut current: &str = start;
            loop {
                match marks.get(current) {
                    Some(Mark::Done) => break,
                    Some(Mark::Active) => {
                        let from = chain.iter().position(|&id| id == current).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            chain[from..].iter().map(|&id| id.to_owned()).collect();
                        cycle.push(current.to_owned());
                        return Err(Error::CyclicExpressionReference { cycle });
                    }
                    None => {}
                }
                marks.insert(current, Mark::Active);
                chain.push(current);
                match self.definitions[current].rule().reference() {
                    Some(next) => {
                        let next_def = self
                            .definitions
                            .get(next)
                            .ok_or_else(|| Error::UnknownDefinition(next.to_owned()))?;
                        current = next_def.id();
                    }
                    None => break,
                }
            }
            for id in chain {
                marks.insert(id, Mark::Done);
            }
        }
        Ok(())
    }
}

impl DefinitionLookup for DefinitionSet {
    fn expression(&self, id: &str) -> Option<&dyn HolidayExpression> {
        self.definitions
            .get(id)
            .map(|d| d.rule() as &dyn HolidayExpression)
    }
}
