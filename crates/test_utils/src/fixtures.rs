//! Pre-built Test Fixtures
//!
//! Provides ready-to-use vehicles and pricing options. These fixtures are
//! consistent and predictable so expected prices can be written down.

use domain_pricing::{AddOn, CoverDuration, PricingOption, VehicleData};

/// Raw vehicle type strings seen from the registration lookup and manual
/// entry, paired with whether each should price as a motorbike
pub const VEHICLE_TYPE_SAMPLES: [(&str, bool); 20] = [
    ("Car", false),
    ("car", false),
    ("  HATCHBACK  ", false),
    ("Saloon", false),
    ("Estate", false),
    ("SUV", false),
    ("Van", false),
    ("Pickup Truck", false),
    ("Minibus", false),
    ("Motorbike", true),
    ("MOTORCYCLE", true),
    ("Moped", true),
    ("Scooter", true),
    ("Dirt bike", true),
    ("Hybrid", false),
    ("PHEV", false),
    ("EV", false),
    ("Electric", false),
    ("", false),
    ("Hovercraft", false),
];

/// Fixture for vehicle test data
pub struct VehicleFixtures;

impl VehicleFixtures {
    /// A family hatchback with no adjustment
    pub fn ford_focus() -> VehicleData {
        VehicleData {
            vehicle_type: Some("Car".to_string()),
            make: Some("Ford".to_string()),
            model: Some("Focus".to_string()),
            year: Some("2019".to_string()),
            mileage: Some("42000".to_string()),
            fuel_type: Some("Petrol".to_string()),
            registration: Some("AB19 CDE".to_string()),
        }
    }

    /// A premium SUV: large vehicle and premium marque surcharges both apply
    pub fn range_rover_sport() -> VehicleData {
        VehicleData {
            vehicle_type: Some("SUV".to_string()),
            make: Some("Land Rover".to_string()),
            model: Some("Range Rover Sport".to_string()),
            year: Some("2021".to_string()),
            mileage: Some("18000".to_string()),
            fuel_type: Some("Diesel".to_string()),
            registration: Some("LR21 SPT".to_string()),
        }
    }

    /// A motorcycle typed as such
    pub fn honda_cbr() -> VehicleData {
        VehicleData {
            vehicle_type: Some("Motorcycle".to_string()),
            make: Some("Honda".to_string()),
            model: Some("CBR650R".to_string()),
            year: Some("2020".to_string()),
            ..VehicleData::default()
        }
    }

    /// A motorcycle recognised only by its make
    pub fn untyped_ducati() -> VehicleData {
        VehicleData {
            make: Some("Ducati".to_string()),
            model: Some("Monster".to_string()),
            ..VehicleData::default()
        }
    }

    /// A plug-in hybrid, priced as a car
    pub fn toyota_prius() -> VehicleData {
        VehicleData {
            vehicle_type: Some("Hybrid".to_string()),
            make: Some("Toyota".to_string()),
            model: Some("Prius".to_string()),
            fuel_type: Some("Hybrid Electric".to_string()),
            ..VehicleData::default()
        }
    }

    /// A commercial van
    pub fn transit_van() -> VehicleData {
        VehicleData {
            vehicle_type: Some("Van".to_string()),
            make: Some("Ford".to_string()),
            model: Some("Transit".to_string()),
            ..VehicleData::default()
        }
    }

    /// Nothing known about the vehicle
    pub fn unknown() -> VehicleData {
        VehicleData::default()
    }
}

/// Fixture for pricing options
pub struct OptionFixtures;

impl OptionFixtures {
    /// £50 excess, £1,250 limit, one year, nothing added
    pub fn one_year_standard() -> PricingOption {
        PricingOption::builder().excess(50).claim_limit(1250).build()
    }

    /// The standard option moved to two years, bundling breakdown and MOT fee
    pub fn two_year_standard() -> PricingOption {
        Self::one_year_standard().with_duration(CoverDuration::TWENTY_FOUR_MONTHS)
    }

    /// The standard option moved to three years
    pub fn three_year_standard() -> PricingOption {
        Self::one_year_standard().with_duration(CoverDuration::THIRTY_SIX_MONTHS)
    }

    /// One year with tyre cover
    pub fn one_year_with_tyre() -> PricingOption {
        Self::one_year_standard().with_add_on(AddOn::Tyre, true)
    }

    /// Every add-on toggled on for the given duration
    pub fn everything(duration: CoverDuration) -> PricingOption {
        AddOn::ALL.into_iter().fold(
            Self::one_year_standard().with_duration(duration),
            |option, add_on| option.with_add_on(add_on, true),
        )
    }
}
