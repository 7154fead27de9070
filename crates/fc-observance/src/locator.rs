//! `DecoratorLocator` — selects the observance decorator for a
//! jurisdiction.

use crate::provider::{builtin_providers, ObservanceProvider};
use fc_expr::HolidayExpression;
use fc_market::CentralBank;
use std::sync::Arc;
use tracing::warn;

/// Walks the provider table and wraps a base expression with the first
/// decorator that matches a jurisdiction.
///
/// The table is kept sorted by provider id, so for a fixed provider set the
/// outcome of [`decorate`](DecoratorLocator::decorate) is deterministic
/// across runs.
#[derive(Default)]
pub struct DecoratorLocator {
    providers: Vec<Arc<dyn ObservanceProvider>>,
}

impl DecoratorLocator {
    /// Create a locator with no providers; it decorates nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locator over the built-in provider table.
    pub fn with_builtins() -> Self {
        Self {
            providers: builtin_providers(),
        }
    }

    /// Add a provider, keeping the table sorted by id.
    pub fn register(&mut self, provider: Arc<dyn ObservanceProvider>) {
        self.providers.push(provider);
        self.providers.sort_by(|a, b| a.id().cmp(b.id()));
    }

    /// Number of registered providers.
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    /// `true` if no provider is registered.
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Wrap `base` with the observance policy of `jurisdiction`.
    ///
    /// Providers are probed in table order; the first match wins and is
    /// applied once.  A provider whose construction fails is logged and
    /// skipped — a broken or irrelevant provider must never prevent
    /// resolution for jurisdictions served by the others.  If no provider
    /// matches, `base` is returned unmodified.
    pub fn decorate(
        &self,
        base: Arc<dyn HolidayExpression>,
        jurisdiction: &CentralBank,
    ) -> Arc<dyn HolidayExpression> {
        for provider in &self.providers {
            match provider.probe(base.clone(), jurisdiction) {
                Ok(Some(decorated)) => return decorated,
                Ok(None) => {}
                Err(err) => {
                    warn!(
                        provider = provider.id(),
                        jurisdiction = jurisdiction.code(),
                        error = %err,
                        "observance provider failed to construct; skipping"
                    );
                }
            }
        }
        base
    }
}
