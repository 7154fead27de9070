//! # fc-core
//!
//! Shared foundations for the fincal workspace: the error hierarchy, the
//! `Result` alias, and the `ensure!` / `fail!` convenience macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Year type used for all year → date computations.
///
/// The engine works on Gregorian years 1583–4099 (see `fc-time`); `u16`
/// covers that range with room to report out-of-range inputs as errors
/// instead of overflow.
pub type Year = u16;

pub use errors::{Error, Result};
