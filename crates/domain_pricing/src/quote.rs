//! Quote assembly
//!
//! A quote is a pure function of the raw vehicle data and a
//! [`PricingOption`]: look up the base price, adjust it for the vehicle, add
//! the chargeable add-ons, and spread the total over twelve payments.
//!
//! The monthly figure is always `total / 12`, whatever the duration. The
//! product is sold as "12 easy payments" even for 24 and 36 month cover.

use std::sync::Arc;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::Money;

use crate::add_ons::{accumulate_add_ons, add_on_lines, AddOnLine, PAYMENTS_PER_PLAN};
use crate::adjustment::{apply_price_adjustment, PriceAdjustment, VehiclePriceAdjuster};
use crate::option::{CoverDuration, PricingOption};
use crate::rate_table::lookup_base_price;
use crate::vehicle::{VehicleClassification, VehicleData};

/// Computed price for one quote
///
/// Never persisted on its own; it is recomputed on every option change and
/// captured into a checkout snapshot when the customer continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Classification the rate table was read for
    pub classification: VehicleClassification,
    /// Length of cover
    pub duration: CoverDuration,
    /// Table price
    pub base_price: Money,
    /// Vehicle adjustment applied to the table price
    pub adjustment: PriceAdjustment,
    /// Table price after vehicle adjustment
    pub adjusted_base_price: Money,
    /// Active add-ons with what each costs
    pub add_on_lines: Vec<AddOnLine>,
    /// Sum of chargeable add-ons
    pub add_on_total: Money,
    /// `adjusted_base_price + add_on_total`
    pub total_price: Money,
    /// `round(total_price / 12)`
    pub monthly_price: Money,
}

fn monthly_of(total: Money) -> Money {
    (total / Decimal::from(PAYMENTS_PER_PLAN)).round_whole()
}

fn adjusted_base(
    vehicle: &VehicleData,
    option: &PricingOption,
    duration: CoverDuration,
    adjuster: &dyn VehiclePriceAdjuster,
) -> (Money, PriceAdjustment, Money) {
    let base = lookup_base_price(option.excess(), option.claim_limit(), duration);
    let adjustment = adjuster.calculate(vehicle, duration.years());
    let adjusted = apply_price_adjustment(base, &adjustment);
    (base, adjustment, adjusted)
}

/// Computes the price of a warranty
///
/// The adjuster receives the raw `vehicle`, not its classification.
/// Deterministic for a deterministic adjuster; never fails.
pub fn compute_quote(
    vehicle: &VehicleData,
    option: &PricingOption,
    adjuster: &dyn VehiclePriceAdjuster,
) -> PriceBreakdown {
    let classification = vehicle.classification();
    let duration = option.duration();

    let (base_price, adjustment, adjusted_base_price) =
        adjusted_base(vehicle, option, duration, adjuster);
    let add_on_total = accumulate_add_ons(option.add_ons(), duration);
    let total_price = adjusted_base_price + add_on_total;
    let monthly_price = monthly_of(total_price);

    debug!(
        %classification,
        duration = %duration,
        excess = option.excess().pounds(),
        claim_limit = option.claim_limit().pounds(),
        base = %base_price.amount(),
        adjusted = %adjusted_base_price.amount(),
        add_ons = %add_on_total.amount(),
        total = %total_price.amount(),
        monthly = %monthly_price.amount(),
        "Computed warranty quote"
    );

    PriceBreakdown {
        classification,
        duration,
        base_price,
        adjustment,
        adjusted_base_price,
        add_on_lines: add_on_lines(option.add_ons(), duration),
        add_on_total,
        total_price,
        monthly_price,
    }
}

/// Savings against buying 12-month cover repeatedly
///
/// Compares the vehicle-adjusted base price per month of the 12-month tier
/// with that of the chosen tier (same excess and claim limit) and scales
/// the difference to the chosen number of months. Worked on exact decimals
/// and rounded once to whole pounds. Zero for cover of twelve months or
/// less, and never negative.
pub fn savings(
    vehicle: &VehicleData,
    option: &PricingOption,
    adjuster: &dyn VehiclePriceAdjuster,
) -> Money {
    let duration = option.duration();
    if duration.months() <= 12 {
        return Money::gbp(dec!(0));
    }

    let months = Decimal::from(duration.months());
    let (_, _, annual) = adjusted_base(vehicle, option, CoverDuration::TWELVE_MONTHS, adjuster);
    let (_, _, chosen) = adjusted_base(vehicle, option, duration, adjuster);

    let exact = annual.amount() * months / dec!(12) - chosen.amount();
    let whole = exact.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Money::new(whole, chosen.currency()).floor_at_zero()
}

/// Quote calculator bound to a vehicle adjuster
///
/// Cheap to clone and safe to share between request handlers.
#[derive(Clone)]
pub struct QuoteCalculator {
    adjuster: Arc<dyn VehiclePriceAdjuster>,
}

impl QuoteCalculator {
    pub fn new(adjuster: Arc<dyn VehiclePriceAdjuster>) -> Self {
        Self { adjuster }
    }

    /// Prices a quote
    pub fn quote(&self, vehicle: &VehicleData, option: &PricingOption) -> PriceBreakdown {
        compute_quote(vehicle, option, self.adjuster.as_ref())
    }

    /// Savings for a quote's duration
    pub fn savings(&self, vehicle: &VehicleData, option: &PricingOption) -> Money {
        savings(vehicle, option, self.adjuster.as_ref())
    }
}

impl std::fmt::Debug for QuoteCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuoteCalculator").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::add_ons::AddOn;
    use crate::adjustment::{NoAdjustment, StandardVehicleAdjuster};

    #[test]
    fn test_twenty_four_months_with_bundled_add_ons_only() {
        let option = PricingOption::builder()
            .excess(50)
            .claim_limit(1250)
            .duration_months(24)
            .build()
            .with_duration(CoverDuration::TWENTY_FOUR_MONTHS);

        let breakdown = compute_quote(&VehicleData::with_type("car"), &option, &NoAdjustment);

        assert_eq!(breakdown.base_price.amount(), dec!(877));
        assert_eq!(breakdown.adjusted_base_price.amount(), dec!(877));
        assert!(breakdown.add_on_total.is_zero());
        assert_eq!(breakdown.total_price.amount(), dec!(877));
        assert_eq!(breakdown.monthly_price.amount(), dec!(73));
    }

    #[test]
    fn test_twelve_months_with_tyre_cover() {
        let option = PricingOption::builder()
            .excess(50)
            .claim_limit(1250)
            .duration_months(12)
            .add_on(AddOn::Tyre)
            .build();

        let breakdown = compute_quote(
            &VehicleData::with_type("car"),
            &option,
            &StandardVehicleAdjuster::default(),
        );

        assert_eq!(breakdown.base_price.amount(), dec!(457));
        assert_eq!(breakdown.add_on_total.amount(), dec!(95.88));
        assert_eq!(breakdown.total_price.amount(), dec!(552.88));
        assert_eq!(breakdown.monthly_price.amount(), dec!(46));
    }

    #[test]
    fn test_monthly_is_always_over_twelve_payments() {
        assert_eq!(monthly_of(Money::gbp(dec!(1497))).amount(), dec!(125));
    }

    #[test]
    fn test_suv_classified_as_car_but_surcharged() {
        let option = PricingOption::builder().excess(50).duration_months(24).build();
        let breakdown = compute_quote(
            &VehicleData::with_type("SUV"),
            &option,
            &StandardVehicleAdjuster::default(),
        );

        assert_eq!(breakdown.classification, VehicleClassification::Car);
        assert_eq!(breakdown.adjusted_base_price.amount(), dec!(977));
        assert_eq!(breakdown.total_price.amount(), dec!(977));
    }

    #[test]
    fn test_savings() {
        let vehicle = VehicleData::with_type("car");
        let twelve = PricingOption::builder().excess(50).build();
        let twenty_four = twelve.with_duration(CoverDuration::TWENTY_FOUR_MONTHS);

        assert!(savings(&vehicle, &twelve, &NoAdjustment).is_zero());
        // 457/12 = 38.0833, 877/24 = 36.5417, difference x 24 = 37
        assert_eq!(savings(&vehicle, &twenty_four, &NoAdjustment).amount(), dec!(37));
    }

    /// Savings on a discounted price are rounded once, from the exact figure
    #[test]
    fn test_savings_with_fractional_adjusted_prices() {
        let option = PricingOption::builder()
            .excess(100)
            .claim_limit(750)
            .duration_months(36)
            .build();

        // 275.25 x 3 - 755.25 = 70.50
        assert_eq!(
            savings(
                &VehicleData::with_type("Motorcycle"),
                &option,
                &StandardVehicleAdjuster::default()
            )
            .amount(),
            dec!(71)
        );
    }

    #[test]
    fn test_calculator_matches_free_function() {
        let calculator = QuoteCalculator::new(Arc::new(StandardVehicleAdjuster::default()));
        let vehicle = VehicleData::with_type("Moped");
        let option = PricingOption::default();

        assert_eq!(
            calculator.quote(&vehicle, &option),
            compute_quote(&vehicle, &option, &StandardVehicleAdjuster::default())
        );
    }
}
