//! Core Kernel - Foundational types for the warranty quoting system
//!
//! This crate provides the building blocks shared by the pricing domain and
//! the HTTP surface:
//! - Money types with precise decimal arithmetic
//! - Percentage rates
//! - Strongly-typed identifiers

pub mod money;
pub mod identifiers;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::QuoteId;
pub use error::CoreError;
