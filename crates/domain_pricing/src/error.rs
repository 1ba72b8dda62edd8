//! Pricing domain errors
//!
//! Price calculation itself is total and never returns these. They are
//! raised only when wire values (duration keys, add-on keys, amounts typed
//! as strings) or configured adjustment rates are parsed or validated.

use thiserror::Error;

/// Errors that can occur in the pricing domain
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Duration key could not be parsed
    #[error("Unknown cover duration: {0}")]
    UnknownDuration(String),

    /// Add-on key is not one of the offered protections
    #[error("Unknown add-on: {0}")]
    UnknownAddOn(String),

    /// Amount could not be parsed as whole pounds
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Adjustment rates are outside their permitted range
    #[error("Invalid adjustment rates: {0}")]
    InvalidRates(String),
}

impl PricingError {
    /// Creates an unknown duration error
    pub fn unknown_duration(key: impl Into<String>) -> Self {
        PricingError::UnknownDuration(key.into())
    }

    /// Creates an unknown add-on error
    pub fn unknown_add_on(key: impl Into<String>) -> Self {
        PricingError::UnknownAddOn(key.into())
    }
}
