//! Pricing Scenario Tests
//!
//! Prices the shared fixtures end to end and checks cross-cutting
//! properties over generated vehicles and options.
//!
//! # Test Organization
//!
//! - `vehicle_scenarios` - fixture vehicles priced with the standard adjuster
//! - `duration_scenarios` - duration changes and bundled add-ons
//! - `property_tests` - invariants over generated inputs

use domain_pricing::vehicle::is_motorbike;
use domain_pricing::{
    auto_included, compute_quote, normalize, savings, AddOn, CheckoutSnapshot, CoverDuration,
    StandardVehicleAdjuster, VehicleClassification,
};
use rust_decimal_macros::dec;
use test_utils::*;

fn adjuster() -> StandardVehicleAdjuster {
    StandardVehicleAdjuster::default()
}

// ============================================================================
// VEHICLE SCENARIOS
// ============================================================================

mod vehicle_scenarios {
    use super::*;

    #[test]
    fn test_family_car_with_tyre_cover() {
        let breakdown = compute_quote(
            &VehicleFixtures::ford_focus(),
            &OptionFixtures::one_year_with_tyre(),
            &adjuster(),
        );

        assert_gbp(&breakdown.total_price, dec!(552.88));
        assert_gbp(&breakdown.monthly_price, dec!(46));
        assert_breakdown_consistent(&breakdown);
    }

    /// Large vehicle and premium marque surcharges stack
    #[test]
    fn test_premium_suv_over_two_years() {
        let vehicle = VehicleFixtures::range_rover_sport();
        let option = OptionFixtures::two_year_standard();
        let breakdown = compute_quote(&vehicle, &option, &adjuster());

        // 877 + 10% + £50 x 2
        assert_gbp(&breakdown.adjusted_base_price, dec!(1064.70));
        assert_gbp(&breakdown.monthly_price, dec!(89));
        assert_eq!(breakdown.adjustment.reasons.len(), 2);
        assert_eq!(vehicle.plan_category(), VehicleClassification::Suv);

        // 552.70/12 against 1064.70/24, over 24 months
        assert_gbp(&savings(&vehicle, &option, &adjuster()), dec!(41));
    }

    #[test]
    fn test_motorcycle_discount() {
        let breakdown = compute_quote(
            &VehicleFixtures::honda_cbr(),
            &OptionFixtures::one_year_standard(),
            &adjuster(),
        );

        assert_eq!(breakdown.classification, VehicleClassification::Motorbike);
        assert_gbp(&breakdown.adjusted_base_price, dec!(342.75));
    }

    /// A motorcycle-only make is discounted even though its missing type
    /// reads the car table
    #[test]
    fn test_motorcycle_recognised_by_make() {
        let vehicle = VehicleFixtures::untyped_ducati();
        let breakdown = compute_quote(&vehicle, &OptionFixtures::one_year_standard(), &adjuster());

        assert_eq!(breakdown.classification, VehicleClassification::Car);
        assert_eq!(vehicle.plan_category(), VehicleClassification::Motorbike);
        assert_gbp(&breakdown.adjusted_base_price, dec!(342.75));
    }

    #[test]
    fn test_van_surcharge() {
        let breakdown = compute_quote(
            &VehicleFixtures::transit_van(),
            &OptionFixtures::one_year_standard(),
            &adjuster(),
        );

        assert_gbp(&breakdown.adjusted_base_price, dec!(507));
        assert_gbp(&breakdown.monthly_price, dec!(42));
    }

    /// Hybrids price as cars but keep their own plan category
    #[test]
    fn test_hybrid_checkout() {
        let vehicle = VehicleFixtures::toyota_prius();
        let option = OptionFixtures::three_year_standard();
        let breakdown = compute_quote(&vehicle, &option, &adjuster());
        let snapshot = CheckoutSnapshot::capture(&vehicle, &option, &breakdown);

        assert_gbp(&breakdown.total_price, dec!(1257));
        assert_eq!(snapshot.plan_category, VehicleClassification::Hybrid);
        assert!(snapshot.selected_add_ons.is_empty());
        assert_eq!(snapshot.protection_add_ons.len(), 4);
        assert_gbp(&savings(&vehicle, &option, &adjuster()), dec!(114));
    }

    #[test]
    fn test_unknown_vehicle_prices_as_car() {
        let breakdown = compute_quote(
            &VehicleFixtures::unknown(),
            &OptionFixtures::one_year_standard(),
            &adjuster(),
        );

        assert!(breakdown.adjustment.is_none());
        assert_gbp(&breakdown.total_price, dec!(457));
    }

    #[test]
    fn test_builder_vehicle_matches_fixture_price() {
        let vehicle = VehicleDataBuilder::random_car().build();
        let breakdown = compute_quote(&vehicle, &OptionFixtures::one_year_standard(), &adjuster());

        assert_gbp(&breakdown.total_price, dec!(457));
    }

    #[test]
    fn test_sample_vehicle_types() {
        for (raw, motorbike) in VEHICLE_TYPE_SAMPLES.iter() {
            let expected = if *motorbike {
                VehicleClassification::Motorbike
            } else {
                VehicleClassification::Car
            };
            assert_eq!(normalize(Some(raw)), expected, "vehicle type {:?}", raw);
        }
    }
}

// ============================================================================
// DURATION SCENARIOS
// ============================================================================

mod duration_scenarios {
    use super::*;

    #[test]
    fn test_everything_for_one_year() {
        let breakdown = compute_quote(
            &VehicleFixtures::ford_focus(),
            &OptionFixtures::everything(CoverDuration::TWELVE_MONTHS),
            &adjuster(),
        );

        assert_gbp(&breakdown.add_on_total, dec!(607.15));
        assert_gbp(&breakdown.total_price, dec!(1064.15));
        assert_gbp(&breakdown.monthly_price, dec!(89));
    }

    /// Moving from three years to two drops the protections only three
    /// years bundles
    #[test]
    fn test_shortening_cover_drops_bundled_protections() {
        let option = OptionFixtures::three_year_standard()
            .with_duration(CoverDuration::TWENTY_FOUR_MONTHS);

        assert!(option.add_ons().is_selected(AddOn::Breakdown));
        assert!(option.add_ons().is_selected(AddOn::MotFee));
        assert!(!option.add_ons().is_selected(AddOn::European));
        assert!(!option.add_ons().is_selected(AddOn::Rental));
    }

    #[test]
    fn test_one_year_after_two_charges_nothing_extra() {
        let option = OptionFixtures::two_year_standard().with_duration(CoverDuration::TWELVE_MONTHS);
        let breakdown = compute_quote(&VehicleFixtures::ford_focus(), &option, &adjuster());

        assert!(breakdown.add_on_total.is_zero());
        assert!(breakdown.add_on_lines.is_empty());
    }
}

// ============================================================================
// PROPERTY TESTS
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn breakdowns_are_consistent(
            vehicle in vehicle_data_strategy(),
            option in any_pricing_option_strategy(),
        ) {
            let breakdown = compute_quote(&vehicle, &option, &adjuster());
            assert_breakdown_consistent(&breakdown);
        }

        #[test]
        fn base_price_is_always_a_table_price(option in any_pricing_option_strategy()) {
            let breakdown = compute_quote(&VehicleFixtures::unknown(), &option, &adjuster());
            prop_assert!(breakdown.base_price.amount() >= dec!(337));
            prop_assert!(breakdown.base_price.is_whole());
        }

        #[test]
        fn motorbikes_are_never_surcharged(
            vehicle in vehicle_data_strategy(),
            option in pricing_option_strategy(),
        ) {
            let breakdown = compute_quote(&vehicle, &option, &adjuster());
            if is_motorbike(&vehicle) {
                prop_assert!(breakdown.adjusted_base_price.amount() < breakdown.base_price.amount());
                prop_assert!(breakdown.adjustment.fixed.is_zero());
            }
        }

        #[test]
        fn duration_override_sets_bundled_keys(
            option in pricing_option_strategy(),
            duration in any_duration_strategy(),
        ) {
            let moved = option.with_duration(duration);
            for add_on in AddOn::AUTO_INCLUDABLE {
                prop_assert_eq!(
                    moved.add_ons().is_selected(add_on),
                    auto_included(duration).contains(&add_on)
                );
            }
            prop_assert_eq!(moved.with_duration(duration), moved);
        }

        /// Toggles on bundled keys never change the price
        #[test]
        fn bundled_toggles_do_not_affect_price(
            option in pricing_option_strategy(),
            vehicle in vehicle_data_strategy(),
        ) {
            let bundled = auto_included(option.duration());
            let on = bundled.iter().fold(option.clone(), |o, a| o.with_add_on(*a, true));
            let off = bundled.iter().fold(option, |o, a| o.with_add_on(*a, false));

            prop_assert_eq!(
                compute_quote(&vehicle, &on, &adjuster()).total_price,
                compute_quote(&vehicle, &off, &adjuster()).total_price
            );
        }

        #[test]
        fn savings_are_whole_and_non_negative(
            vehicle in vehicle_data_strategy(),
            option in any_pricing_option_strategy(),
        ) {
            let saved = savings(&vehicle, &option, &adjuster());
            prop_assert!(saved.is_whole());
            prop_assert!(!saved.is_negative());
        }
    }
}
