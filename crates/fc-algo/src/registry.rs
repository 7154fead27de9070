//! `AlgorithmRegistry` — name → algorithm table, populated once at startup.

use crate::algorithm::HolidayAlgorithm;
use crate::easter::{OrthodoxEaster, WesternEaster};
use fc_core::errors::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Factory for one registrable algorithm.
///
/// The discovery mechanism is an explicit table of these factories rather
/// than any runtime scan; [`builtin_algorithms`] is the compiled table, and
/// embedders append their own factories before bootstrapping the registry.
pub type AlgorithmFactory = fn() -> Arc<dyn HolidayAlgorithm>;

/// The compiled list of built-in algorithm factories, sorted by the name
/// each factory produces so registration order is stable across runs.
pub fn builtin_algorithms() -> Vec<AlgorithmFactory> {
    vec![
        || Arc::new(OrthodoxEaster),
        || Arc::new(WesternEaster),
    ]
}

/// Registry of named year → date algorithms.
///
/// Populated during single-threaded startup and read-only afterwards.
#[derive(Debug, Default)]
pub struct AlgorithmRegistry {
    algorithms: HashMap<String, Arc<dyn HolidayAlgorithm>>,
}

impl AlgorithmRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in algorithm.
    ///
    /// # Errors
    /// `Error::DuplicateAlgorithm` if two factories yield the same name —
    /// a configuration bug that must abort initialization.
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for factory in builtin_algorithms() {
            registry.register(factory())?;
        }
        Ok(registry)
    }

    /// Register an algorithm under its own name.
    ///
    /// # Errors
    /// `Error::DuplicateAlgorithm` if the name is already taken.
    pub fn register(&mut self, algorithm: Arc<dyn HolidayAlgorithm>) -> Result<()> {
        let name = algorithm.name().to_owned();
        if self.algorithms.contains_key(&name) {
            return Err(Error::DuplicateAlgorithm(name));
        }
        self.algorithms.insert(name, algorithm);
        Ok(())
    }

    /// Look up an algorithm by its case-sensitive name.
    ///
    /// # Errors
    /// `Error::NoSuchAlgorithm` if no algorithm is registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&dyn HolidayAlgorithm> {
        self.algorithms
            .get(name)
            .map(|a| a.as_ref())
            .ok_or_else(|| Error::NoSuchAlgorithm(name.to_owned()))
    }

    /// Number of registered algorithms.
    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    /// `true` if no algorithm is registered.
    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }
}
