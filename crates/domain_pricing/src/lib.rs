//! Warranty Quote Pricing Domain
//!
//! This crate prices a vehicle warranty from the options a customer picks on
//! the pricing page. It performs no I/O: every function is a deterministic
//! calculation over a fixed rate table and a vehicle adjustment rule set.
//!
//! # Pricing pipeline
//!
//! ```text
//! VehicleData ──normalize──> classification
//!      │
//!      └──> VehiclePriceAdjuster ──> PriceAdjustment
//!                                        │
//! PricingOption ──lookup_base_price──> base ──apply──> adjusted base
//!      │                                                    │
//!      └──accumulate_add_ons (minus bundled)──> add-on total ┤
//!                                                           v
//!                                      total ──/ 12, rounded──> monthly
//! ```
//!
//! # Example
//!
//! ```rust
//! use domain_pricing::{compute_quote, AddOn, NoAdjustment, PricingOption, VehicleData};
//! use rust_decimal_macros::dec;
//!
//! let option = PricingOption::builder()
//!     .excess(50)
//!     .claim_limit(1250)
//!     .duration_months(12)
//!     .add_on(AddOn::Tyre)
//!     .build();
//!
//! let breakdown = compute_quote(&VehicleData::with_type("car"), &option, &NoAdjustment);
//! assert_eq!(breakdown.total_price.amount(), dec!(552.88));
//! assert_eq!(breakdown.monthly_price.amount(), dec!(46));
//! ```

pub mod vehicle;
pub mod option;
pub mod rate_table;
pub mod adjustment;
pub mod add_ons;
pub mod quote;
pub mod display;
pub mod checkout;
pub mod error;

pub use vehicle::{normalize, plan_category, VehicleClassification, VehicleData};
pub use option::{ClaimLimit, CoverDuration, Excess, PricingOption, PricingOptionBuilder};
pub use rate_table::lookup_base_price;
pub use adjustment::{
    apply_price_adjustment, AdjustmentRates, NoAdjustment, PriceAdjustment,
    StandardVehicleAdjuster, VehiclePriceAdjuster,
};
pub use add_ons::{accumulate_add_ons, auto_included, AddOn, AddOnLine, AddOnSelection};
pub use quote::{compute_quote, savings, PriceBreakdown, QuoteCalculator};
pub use display::{format_gbp, QuoteDisplay};
pub use checkout::CheckoutSnapshot;
pub use error::PricingError;
