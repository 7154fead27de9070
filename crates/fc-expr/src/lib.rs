//! # fc-expr
//!
//! The holiday expression model: typed date rules, the shorthand-notation
//! parser, and the definition table with reference-graph validation.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Definition table and reference-graph validation.
pub mod definitions;

/// `HolidayExpression` trait, `DateRule` variants, evaluation context.
pub mod expression;

/// Shorthand-notation parser.
pub mod parse;

pub use definitions::{Definition, DefinitionSet};
pub use expression::{DateRule, DefinitionLookup, EvalContext, HolidayExpression, Ordinal};
pub use parse::parse;
