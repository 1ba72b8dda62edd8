//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! warranty pricing test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built vehicles and pricing options
//! - `builders`: Builder patterns for test data construction
//! - `assertions`: Custom assertion helpers for money and breakdowns
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;
pub use generators::*;
