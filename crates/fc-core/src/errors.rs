//! Error types for fincal.
//!
//! A single `thiserror`-derived enum covers the whole workspace.  The
//! resolution path never recovers from an error internally: parsing and
//! evaluation failures surface to the caller with their precise kind and the
//! offending identifier or token, so a producer can tell a typo in a
//! definition file from a missing algorithm or a broken reference graph.

use thiserror::Error;

/// The top-level error type used throughout fincal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The shorthand notation could not be parsed.
    #[error("malformed expression syntax: unexpected `{token}` at position {position}")]
    MalformedExpressionSyntax {
        /// The offending token text.
        token: String,
        /// Byte offset of the token within the input.
        position: usize,
    },

    /// An expression's parameters are outside their domain for the requested
    /// year (e.g. February 30, or a fifth Monday that does not exist).
    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    /// A `RelativeTo` chain refers back to itself.
    #[error("cyclic expression reference: {}", cycle.join(" -> "))]
    CyclicExpressionReference {
        /// The definition ids forming the cycle, first id repeated at the end.
        cycle: Vec<String>,
    },

    /// No algorithm is registered under the given name.
    #[error("no algorithm registered under `{0}`")]
    NoSuchAlgorithm(String),

    /// Two providers tried to register the same algorithm name.  Fatal at
    /// startup; ambiguous names are a deployment bug, not a runtime condition.
    #[error("algorithm `{0}` is already registered")]
    DuplicateAlgorithm(String),

    /// No holiday definition is registered under the given id.
    #[error("unknown holiday definition `{0}`")]
    UnknownDefinition(String),

    /// Date construction or arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument (e.g. a jurisdiction with an unknown country code).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Definition catalog could not be deserialized.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// I/O failure while writing resolved records.
    #[error("i/o error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Shorthand `Result` type used throughout fincal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use fc_core::ensure;
/// fn non_blank(s: &str) -> fc_core::errors::Result<&str> {
///     ensure!(!s.trim().is_empty(), "value must not be blank");
///     Ok(s)
/// }
/// assert!(non_blank("USD").is_ok());
/// assert!(non_blank("  ").is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::InvalidExpression(...))` immediately.
///
/// # Example
/// ```
/// use fc_core::fail;
/// fn unsupported() -> fc_core::errors::Result<()> {
///     fail!("ordinal 0 is not a valid occurrence");
/// }
/// assert!(unsupported().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidExpression(format!($($msg)*)))
    };
}
