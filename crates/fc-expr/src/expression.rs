//! The holiday expression model.
//!
//! A holiday expression maps a year to a calendar date.  The concrete rule
//! variants live in [`DateRule`]; observance decorators (in `fc-observance`)
//! wrap any [`HolidayExpression`] with jurisdiction policy, so the trait is
//! the seam between the two.

use fc_algo::AlgorithmRegistry;
use fc_core::errors::{Error, Result};
use fc_core::Year;
use fc_time::{Date, Month, Weekday};

/// A rule that maps a year to a calendar date.
///
/// `evaluate` must be deterministic and side-effect-free: the same `year`
/// and context always produce the same date or the same error.
pub trait HolidayExpression: Send + Sync + std::fmt::Debug {
    /// Resolve the expression for `year`.
    fn evaluate(&self, year: Year, ctx: &EvalContext<'_>) -> Result<Date>;
}

/// Read-only lookup of registered expressions by definition id.
///
/// Implemented by `DefinitionSet`; the indirection keeps `RelativeTo`
/// evaluation independent of how definitions are stored.
pub trait DefinitionLookup {
    /// Return the expression registered under `id`, if any.
    fn expression(&self, id: &str) -> Option<&dyn HolidayExpression>;
}

/// Evaluation context: the algorithm registry and the definition table.
///
/// Both references point at state that is populated during startup and
/// read-only afterwards, so a context can be rebuilt cheaply per call.
pub struct EvalContext<'a> {
    algorithms: &'a AlgorithmRegistry,
    definitions: &'a dyn DefinitionLookup,
}

impl<'a> EvalContext<'a> {
    /// Create a context over a registry and a definition table.
    pub fn new(algorithms: &'a AlgorithmRegistry, definitions: &'a dyn DefinitionLookup) -> Self {
        Self {
            algorithms,
            definitions,
        }
    }

    /// The algorithm registry.
    pub fn algorithms(&self) -> &AlgorithmRegistry {
        self.algorithms
    }

    /// Look up a referenced expression.
    ///
    /// # Errors
    /// `Error::UnknownDefinition` if `id` is not registered.
    pub fn definition(&self, id: &str) -> Result<&dyn HolidayExpression> {
        self.definitions
            .expression(id)
            .ok_or_else(|| Error::UnknownDefinition(id.to_owned()))
    }
}

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// The n-th occurrence, 1–5.  A fifth occurrence that does not exist in
    /// a given month/year is an evaluation error, never clamped down.
    Nth(u8),
    /// The last occurrence, walking backward from the end of the month.
    Last,
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ordinal::Nth(n) => write!(f, "{n}"),
            Ordinal::Last => write!(f, "LAST"),
        }
    }
}

/// A holiday's date rule, one variant per notation form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DateRule {
    /// Same calendar date every year (`DECEMBER/25`).
    Fixed {
        /// Month of the holiday.
        month: Month,
        /// Day of the month, 1–31; validated against the month per year.
        day: u8,
    },
    /// An occurrence of a weekday within a month (`3MONDAY/NOVEMBER`,
    /// `LASTMONDAY/MAY`).
    FloatingWeekday {
        /// Which occurrence.
        ordinal: Ordinal,
        /// The weekday sought.
        weekday: Weekday,
        /// The month searched.
        month: Month,
    },
    /// A named algorithm's result shifted by signed days
    /// (`WesternEaster-2`).
    AlgorithmOffset {
        /// Registry name of the algorithm, case-sensitive.
        algorithm: String,
        /// Signed day offset applied to the algorithm's date.
        offset: i32,
    },
    /// Another definition's resolved date shifted by signed days
    /// (`@christmas+1`).
    RelativeTo {
        /// Definition id of the base expression.
        base: String,
        /// Signed day offset applied to the base date.
        offset: i32,
    },
}

impl DateRule {
    /// The definition id this rule refers to, if it is a `RelativeTo`.
    ///
    /// Used by the reference-graph validation in `DefinitionSet`.
    pub fn reference(&self) -> Option<&str> {
        match self {
            DateRule::RelativeTo { base, .. } => Some(base),
            _ => None,
        }
    }
}

impl HolidayExpression for DateRule {
    fn evaluate(&self, year: Year, ctx: &EvalContext<'_>) -> Result<Date> {
        match self {
            DateRule::Fixed { month, day } => Date::from_ymd(year, month.number(), *day)
                .map_err(|_| {
                    Error::InvalidExpression(format!("no day {day} in {month} {year}"))
                }),
            DateRule::FloatingWeekday {
                ordinal,
                weekday,
                month,
            } => match ordinal {
                Ordinal::Nth(n) => Date::nth_weekday(*n, *weekday, year, month.number())
                    .map_err(|_| {
                        Error::InvalidExpression(format!(
                            "no {n}th {weekday} in {month} {year}"
                        ))
                    }),
                Ordinal::Last => Date::last_weekday(*weekday, year, month.number())
                    .map_err(|_| {
                        Error::InvalidExpression(format!(
                            "no last {weekday} in {month} {year}"
                        ))
                    }),
            },
            DateRule::AlgorithmOffset { algorithm, offset } => {
                let base = ctx.algorithms().lookup(algorithm)?.compute(year)?;
                base.add_days(*offset).map_err(|_| {
                    Error::InvalidExpression(format!(
                        "{algorithm}{offset:+} leaves the valid date range in {year}"
                    ))
                })
            }
            DateRule::RelativeTo { base, offset } => {
                let date = ctx.definition(base)?.evaluate(year, ctx)?;
                date.add_days(*offset).map_err(|_| {
                    Error::InvalidExpression(format!(
                        "@{base}{offset:+} leaves the valid date range in {year}"
                    ))
                })
            }
        }
    }
}

impl std::fmt::Display for DateRule {
    /// Render the rule back in shorthand notation.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DateRule::Fixed { month, day } => {
                write!(f, "{}/{day}", month.long_name().to_uppercase())
            }
            DateRule::FloatingWeekday {
                ordinal,
                weekday,
                month,
            } => write!(
                f,
                "{ordinal}{}/{}",
                weekday.to_string().to_uppercase(),
                month.long_name().to_uppercase()
            ),
            DateRule::AlgorithmOffset { algorithm, offset } => {
                if *offset == 0 {
                    write!(f, "{algorithm}")
                } else {
                    write!(f, "{algorithm}{offset:+}")
                }
            }
            DateRule::RelativeTo { base, offset } => {
                if *offset == 0 {
                    write!(f, "@{base}")
                } else {
                    write!(f, "@{base}{offset:+}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Definition table for tests; the production table lives in
    /// `definitions.rs`.
    #[derive(Default)]
    struct MapLookup(HashMap<String, DateRule>);

    impl DefinitionLookup for MapLookup {
        fn expression(&self, id: &str) -> Option<&dyn HolidayExpression> {
            self.0.get(id).map(|r| r as &dyn HolidayExpression)
        }
    }

    fn registry() -> AlgorithmRegistry {
        AlgorithmRegistry::with_builtins().unwrap()
    }

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn fixed_resolves_every_year() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let christmas = DateRule::Fixed {
            month: Month::December,
            day: 25,
        };
        for year in [1583, 2011, 2012, 2400, 4099] {
            assert_eq!(christmas.evaluate(year, &ctx).unwrap(), date(year, 12, 25));
        }
    }

    #[test]
    fn fixed_rejects_impossible_day() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let leap_day = DateRule::Fixed {
            month: Month::February,
            day: 29,
        };
        assert_eq!(leap_day.evaluate(2012, &ctx).unwrap(), date(2012, 2, 29));
        assert!(matches!(
            leap_day.evaluate(2013, &ctx),
            Err(Error::InvalidExpression(_))
        ));
    }

    #[test]
    fn floating_thanksgiving() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let thanksgiving = DateRule::FloatingWeekday {
            ordinal: Ordinal::Nth(4),
            weekday: Weekday::Thursday,
            month: Month::November,
        };
        for year in 1990..=2030 {
            let d = thanksgiving.evaluate(year, &ctx).unwrap();
            assert_eq!(d.weekday(), Weekday::Thursday);
            assert!((22..=28).contains(&d.day_of_month()), "{d}");
        }
    }

    #[test]
    fn floating_fifth_fails_rather_than_clamps() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let rule = DateRule::FloatingWeekday {
            ordinal: Ordinal::Nth(5),
            weekday: Weekday::Monday,
            month: Month::January,
        };
        // January 2024 has five Mondays, February 2024 has four
        assert_eq!(rule.evaluate(2024, &ctx).unwrap(), date(2024, 1, 29));
        let feb = DateRule::FloatingWeekday {
            ordinal: Ordinal::Nth(5),
            weekday: Weekday::Monday,
            month: Month::February,
        };
        assert!(matches!(
            feb.evaluate(2024, &ctx),
            Err(Error::InvalidExpression(_))
        ));
    }

    #[test]
    fn floating_last_monday_of_may() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let memorial = DateRule::FloatingWeekday {
            ordinal: Ordinal::Last,
            weekday: Weekday::Monday,
            month: Month::May,
        };
        assert_eq!(memorial.evaluate(2012, &ctx).unwrap(), date(2012, 5, 28));
    }

    #[test]
    fn algorithm_offset_good_friday() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let good_friday = DateRule::AlgorithmOffset {
            algorithm: "WesternEaster".into(),
            offset: -2,
        };
        assert_eq!(good_friday.evaluate(2012, &ctx).unwrap(), date(2012, 4, 6));
    }

    #[test]
    fn algorithm_offset_unknown_name_propagates() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let rule = DateRule::AlgorithmOffset {
            algorithm: "LunarNewYear".into(),
            offset: 0,
        };
        assert_eq!(
            rule.evaluate(2012, &ctx).unwrap_err(),
            Error::NoSuchAlgorithm("LunarNewYear".into())
        );
    }

    #[test]
    fn relative_to_resolves_through_lookup() {
        let registry = registry();
        let mut lookup = MapLookup::default();
        lookup.0.insert(
            "christmas".into(),
            DateRule::Fixed {
                month: Month::December,
                day: 25,
            },
        );
        let ctx = EvalContext::new(&registry, &lookup);
        let boxing_day = DateRule::RelativeTo {
            base: "christmas".into(),
            offset: 1,
        };
        assert_eq!(boxing_day.evaluate(2012, &ctx).unwrap(), date(2012, 12, 26));
    }

    #[test]
    fn relative_to_unknown_base() {
        let registry = registry();
        let lookup = MapLookup::default();
        let ctx = EvalContext::new(&registry, &lookup);
        let rule = DateRule::RelativeTo {
            base: "christmas".into(),
            offset: 1,
        };
        assert_eq!(
            rule.evaluate(2012, &ctx).unwrap_err(),
            Error::UnknownDefinition("christmas".into())
        );
    }

    #[test]
    fn display_round_trips_notation() {
        let cases = [
            (
                DateRule::Fixed {
                    month: Month::December,
                    day: 25,
                },
                "DECEMBER/25",
            ),
            (
                DateRule::FloatingWeekday {
                    ordinal: Ordinal::Nth(3),
                    weekday: Weekday::Monday,
                    month: Month::November,
                },
                "3MONDAY/NOVEMBER",
            ),
            (
                DateRule::FloatingWeekday {
                    ordinal: Ordinal::Last,
                    weekday: Weekday::Monday,
                    month: Month::May,
                },
                "LASTMONDAY/MAY",
            ),
            (
                DateRule::AlgorithmOffset {
                    algorithm: "WesternEaster".into(),
                    offset: -2,
                },
                "WesternEaster-2",
            ),
            (
                DateRule::RelativeTo {
                    base: "christmas".into(),
                    offset: 1,
                },
                "@christmas+1",
            ),
        ];
        for (rule, text) in cases {
            assert_eq!(rule.to_string(), text);
        }
    }
}
