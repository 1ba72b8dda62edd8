//! Property-Based Test Generators
//!
//! Provides proptest strategies for pricing inputs. Most strategies come
//! in two flavours: offered values only, and any value including the ones
//! the rate table has to fall back for.

use domain_pricing::{
    AddOn, AddOnSelection, ClaimLimit, CoverDuration, Excess, PricingOption, VehicleData,
};
use proptest::prelude::*;

use crate::fixtures::VEHICLE_TYPE_SAMPLES;

/// Strategy for offered excess tiers
pub fn excess_strategy() -> impl Strategy<Value = Excess> {
    prop::sample::select(Excess::TIERS.to_vec())
}

/// Strategy for any excess, offered or not
pub fn any_excess_strategy() -> impl Strategy<Value = Excess> {
    prop_oneof![
        3 => excess_strategy(),
        1 => (0u32..5_000u32).prop_map(Excess::new),
    ]
}

/// Strategy for offered claim limits
pub fn claim_limit_strategy() -> impl Strategy<Value = ClaimLimit> {
    prop::sample::select(ClaimLimit::TIERS.to_vec())
}

/// Strategy for any claim limit, offered or not
pub fn any_claim_limit_strategy() -> impl Strategy<Value = ClaimLimit> {
    prop_oneof![
        3 => claim_limit_strategy(),
        1 => (0u32..10_000u32).prop_map(ClaimLimit::new),
    ]
}

/// Strategy for offered cover durations
pub fn duration_strategy() -> impl Strategy<Value = CoverDuration> {
    prop::sample::select(CoverDuration::TIERS.to_vec())
}

/// Strategy for any positive duration in months
pub fn any_duration_strategy() -> impl Strategy<Value = CoverDuration> {
    prop_oneof![
        3 => duration_strategy(),
        1 => (1u32..120u32).prop_map(CoverDuration::from_months),
    ]
}

/// Strategy for add-on toggles, including explicit `false` entries
pub fn add_on_selection_strategy() -> impl Strategy<Value = AddOnSelection> {
    prop::collection::vec(
        (prop::sample::select(AddOn::ALL.to_vec()), any::<bool>()),
        0..AddOn::ALL.len(),
    )
    .prop_map(|toggles| {
        toggles
            .into_iter()
            .fold(AddOnSelection::new(), |s, (a, on)| s.with(a, on))
    })
}

/// Strategy for options drawn from the offered tiers
pub fn pricing_option_strategy() -> impl Strategy<Value = PricingOption> {
    (
        excess_strategy(),
        claim_limit_strategy(),
        duration_strategy(),
        add_on_selection_strategy(),
    )
        .prop_map(|(excess, limit, duration, add_ons)| {
            PricingOption::builder()
                .excess(excess.pounds())
                .claim_limit(limit.pounds())
                .duration_months(duration.months())
                .add_ons(add_ons)
                .build()
        })
}

/// Strategy for options with any tier values
pub fn any_pricing_option_strategy() -> impl Strategy<Value = PricingOption> {
    (
        any_excess_strategy(),
        any_claim_limit_strategy(),
        any_duration_strategy(),
        add_on_selection_strategy(),
    )
        .prop_map(|(excess, limit, duration, add_ons)| {
            PricingOption::builder()
                .excess(excess.pounds())
                .claim_limit(limit.pounds())
                .duration_months(duration.months())
                .add_ons(add_ons)
                .build()
        })
}

/// Strategy for raw vehicle type text: known samples or arbitrary strings
pub fn vehicle_type_strategy() -> impl Strategy<Value = Option<String>> {
    let samples: Vec<String> = VEHICLE_TYPE_SAMPLES
        .iter()
        .map(|(s, _)| s.to_string())
        .collect();

    prop_oneof![
        2 => prop::sample::select(samples).prop_map(Some),
        1 => ".{0,24}".prop_map(Some),
        1 => Just(None),
    ]
}

/// Strategy for make text, including known motorcycle and premium makes
pub fn make_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        2 => prop::sample::select(vec![
            "Ford", "Vauxhall", "Toyota", "BMW", "Land Rover", "Porsche",
            "Ducati", "Harley-Davidson", "KTM", "Honda",
        ])
        .prop_map(|m| Some(m.to_string())),
        1 => "[A-Za-z -]{0,20}".prop_map(Some),
        1 => Just(None),
    ]
}

/// Strategy for raw vehicle data
pub fn vehicle_data_strategy() -> impl Strategy<Value = VehicleData> {
    (
        vehicle_type_strategy(),
        make_strategy(),
        prop::option::of("[A-Za-z0-9 ]{0,20}"),
        prop::option::of("[A-Za-z ]{0,12}"),
    )
        .prop_map(|(vehicle_type, make, model, fuel_type)| VehicleData {
            vehicle_type,
            make,
            model,
            fuel_type,
            ..VehicleData::default()
        })
}
