//! Vehicle price adjustments
//!
//! Adjustments are computed from the raw [`VehicleData`], never from the
//! normalized classification: an SUV prices from the car table but still
//! attracts the large-vehicle surcharge, and a motorcycle can only be
//! recognised from its make when the type field is empty.
//!
//! The adjuster is a seam. [`StandardVehicleAdjuster`] carries the rules the
//! website uses; [`NoAdjustment`] prices straight from the table.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use core_kernel::{Money, Rate};

use crate::error::PricingError;
use crate::vehicle::{is_large_vehicle, is_motorbike, VehicleData};

/// Makes that carry the premium marque surcharge, matched on prefix
const PREMIUM_MARQUES: [&str; 12] = [
    "bmw", "mercedes", "audi", "porsche", "land rover", "range rover", "jaguar", "lexus",
    "tesla", "maserati", "bentley", "aston martin",
];

/// Adjustment to apply to a base price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    /// Signed percentage: negative is a discount
    pub percent: Decimal,
    /// Fixed amount added after the percentage
    pub fixed: Money,
    /// Why the adjustment applies, for display
    pub reasons: Vec<String>,
}

impl PriceAdjustment {
    /// An adjustment that leaves the price unchanged
    pub fn none() -> Self {
        Self {
            percent: dec!(0),
            fixed: Money::gbp(dec!(0)),
            reasons: Vec::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.percent.is_zero() && self.fixed.is_zero()
    }
}

impl Default for PriceAdjustment {
    fn default() -> Self {
        Self::none()
    }
}

/// Applies an adjustment to a price
///
/// `price × (1 + percent/100) + fixed`, rounded once to pence and never
/// below zero.
pub fn apply_price_adjustment(price: Money, adjustment: &PriceAdjustment) -> Money {
    if adjustment.is_none() {
        return price;
    }

    let factor = Rate::from_percentage(adjustment.percent).growth_factor();
    let exact = price.amount() * factor + adjustment.fixed.amount();
    let pence = exact.round_dp_with_strategy(
        price.currency().decimal_places(),
        RoundingStrategy::MidpointAwayFromZero,
    );

    Money::new(pence, price.currency()).floor_at_zero()
}

/// Computes the adjustment for a vehicle
pub trait VehiclePriceAdjuster: Send + Sync {
    /// Returns the adjustment for the raw vehicle data over a number of years
    fn calculate(&self, vehicle: &VehicleData, duration_years: u32) -> PriceAdjustment;
}

/// Adjuster that never changes the price
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAdjustment;

impl VehiclePriceAdjuster for NoAdjustment {
    fn calculate(&self, _vehicle: &VehicleData, _duration_years: u32) -> PriceAdjustment {
        PriceAdjustment::none()
    }
}

/// Configurable rates for [`StandardVehicleAdjuster`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentRates {
    /// Discount for motorcycles, as a percentage
    pub motorbike_discount_percent: Decimal,
    /// Fixed surcharge per year of cover for SUVs, vans and pickups
    pub large_vehicle_surcharge_per_year: Decimal,
    /// Surcharge for premium marques, as a percentage
    pub premium_marque_surcharge_percent: Decimal,
}

impl Default for AdjustmentRates {
    fn default() -> Self {
        Self {
            motorbike_discount_percent: dec!(25),
            large_vehicle_surcharge_per_year: dec!(50),
            premium_marque_surcharge_percent: dec!(10),
        }
    }
}

impl AdjustmentRates {
    /// Checks the rates are usable
    ///
    /// # Errors
    ///
    /// Returns `InvalidRates` for negative values or a discount of 100% or more
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.motorbike_discount_percent.is_sign_negative()
            || self.motorbike_discount_percent >= dec!(100)
        {
            return Err(PricingError::InvalidRates(format!(
                "motorbike discount must be in [0, 100), got {}",
                self.motorbike_discount_percent
            )));
        }

        if self.large_vehicle_surcharge_per_year.is_sign_negative() {
            return Err(PricingError::InvalidRates(format!(
                "large vehicle surcharge cannot be negative, got {}",
                self.large_vehicle_surcharge_per_year
            )));
        }

        if self.premium_marque_surcharge_percent.is_sign_negative() {
            return Err(PricingError::InvalidRates(format!(
                "premium marque surcharge cannot be negative, got {}",
                self.premium_marque_surcharge_percent
            )));
        }

        Ok(())
    }
}

/// The website's vehicle pricing rules
///
/// - motorcycles get a percentage discount and nothing else;
/// - SUVs, vans and pickups pay a fixed surcharge per year of cover;
/// - premium marques pay a percentage surcharge.
///
/// The last two stack.
#[derive(Debug, Clone, Default)]
pub struct StandardVehicleAdjuster {
    rates: AdjustmentRates,
}

impl StandardVehicleAdjuster {
    pub fn new(rates: AdjustmentRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &AdjustmentRates {
        &self.rates
    }
}

fn is_premium_marque(vehicle: &VehicleData) -> bool {
    let make = vehicle
        .make
        .as_deref()
        .map(|m| m.trim().to_lowercase())
        .unwrap_or_default();

    !make.is_empty() && PREMIUM_MARQUES.iter().any(|p| make.starts_with(p))
}

impl VehiclePriceAdjuster for StandardVehicleAdjuster {
    fn calculate(&self, vehicle: &VehicleData, duration_years: u32) -> PriceAdjustment {
        let mut adjustment = PriceAdjustment::none();

        if is_motorbike(vehicle) {
            adjustment.percent = -self.rates.motorbike_discount_percent;
            adjustment.reasons.push(format!(
                "Motorbike discount {}",
                Rate::from_percentage(self.rates.motorbike_discount_percent)
            ));
            return adjustment;
        }

        if is_large_vehicle(vehicle) {
            let surcharge = self.rates.large_vehicle_surcharge_per_year * Decimal::from(duration_years);
            adjustment.fixed = Money::gbp(surcharge);
            adjustment.reasons.push(format!(
                "Large vehicle surcharge £{} x {} year(s)",
                self.rates.large_vehicle_surcharge_per_year.normalize(),
                duration_years
            ));
        }

        if is_premium_marque(vehicle) {
            adjustment.percent += self.rates.premium_marque_surcharge_percent;
            adjustment.reasons.push(format!(
                "Premium marque surcharge {}",
                Rate::from_percentage(self.rates.premium_marque_surcharge_percent)
            ));
        }

        adjustment
    }
}
