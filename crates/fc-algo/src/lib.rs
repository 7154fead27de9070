//! # fc-algo
//!
//! Named, pure year → date holiday algorithms (the Easter computations) and
//! the registry that resolves them by name.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// `HolidayAlgorithm` trait.
pub mod algorithm;

/// Easter computations (Western and Orthodox).
pub mod easter;

/// Name → algorithm registry and the built-in factory table.
pub mod registry;

pub use algorithm::HolidayAlgorithm;
pub use easter::{OrthodoxEaster, WesternEaster};
pub use registry::{builtin_algorithms, AlgorithmFactory, AlgorithmRegistry};
