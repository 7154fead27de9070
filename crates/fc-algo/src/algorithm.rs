//! `HolidayAlgorithm` — a named, pure year → date computation.

use fc_core::errors::Result;
use fc_core::Year;
use fc_time::Date;

/// A named, pure `year → date` computation.
///
/// Implementations are stateless: `compute` must depend on `year` alone, so
/// a registry of algorithms can be shared freely across threads after
/// startup.  Identity is the case-sensitive `name`.
pub trait HolidayAlgorithm: Send + Sync + std::fmt::Debug {
    /// The registry name of this algorithm (case-sensitive).
    fn name(&self) -> &str;

    /// Compute the algorithm's date for `year`.
    fn compute(&self, year: Year) -> Result<Date>;
}
