//! `ResolvedHoliday` — the final output of one resolution request.

use fc_time::Date;

/// One resolved holiday observance.
///
/// Produced by the resolver on demand and never cached; immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResolvedHoliday {
    /// Id of the holiday definition that was resolved.
    pub definition_id: String,
    /// Display name of the holiday (e.g. `"Christmas Day"`).
    pub holiday_name: String,
    /// The financial calendar the record belongs to.
    pub calendar_id: String,
    /// Code of the jurisdiction the observance applies to.
    pub jurisdiction: String,
    /// The observed date.
    pub date: Date,
}

impl std::fmt::Display for ResolvedHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} [{}] ({})",
            self.date, self.holiday_name, self.calendar_id, self.jurisdiction
        )
    }
}
