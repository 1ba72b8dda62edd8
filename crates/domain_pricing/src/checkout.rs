//! Checkout snapshot
//!
//! When the customer continues to checkout, the current breakdown is frozen
//! into a [`CheckoutSnapshot`] and handed to order creation. The snapshot is
//! the only place a computed price outlives the option that produced it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{Money, QuoteId};

use crate::add_ons::AddOn;
use crate::option::{ClaimLimit, Excess, PricingOption};
use crate::quote::PriceBreakdown;
use crate::vehicle::{VehicleClassification, VehicleData};

/// Price and cover details passed to order creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutSnapshot {
    pub quote_id: QuoteId,
    pub vehicle: VehicleData,
    /// Category used to pick the plan row
    pub plan_category: VehicleClassification,
    pub total_price: Money,
    pub monthly_price: Money,
    pub voluntary_excess: Excess,
    pub claim_limit: ClaimLimit,
    pub cover_months: u32,
    /// Add-ons the customer chose and pays for
    pub selected_add_ons: Vec<AddOn>,
    /// Every protection active on the policy, bundled ones included
    pub protection_add_ons: Vec<AddOn>,
    pub created_at: DateTime<Utc>,
}

impl CheckoutSnapshot {
    /// Captures a breakdown for checkout
    pub fn capture(vehicle: &VehicleData, option: &PricingOption, breakdown: &PriceBreakdown) -> Self {
        Self {
            quote_id: QuoteId::new(),
            vehicle: vehicle.clone(),
            plan_category: vehicle.plan_category(),
            total_price: breakdown.total_price,
            monthly_price: breakdown.monthly_price,
            voluntary_excess: option.excess(),
            claim_limit: option.claim_limit(),
            cover_months: option.duration().months(),
            selected_add_ons: option.chargeable_add_ons(),
            protection_add_ons: option.effective_add_ons(),
            created_at: Utc::now(),
        }
    }
}
