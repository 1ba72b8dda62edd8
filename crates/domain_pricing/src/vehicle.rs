//! Vehicle data and classification
//!
//! Vehicle details arrive as free text from the registration lookup (or from
//! manual entry) and are never validated. This module maps that text onto a
//! [`VehicleClassification`] without ever failing: anything unrecognised is
//! priced as a car.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Keywords that classify a vehicle as a car. Checked before anything else,
/// so "SUV" or "Van" never reach the motorbike check.
const CAR_KEYWORDS: [&str; 10] = [
    "car", "saloon", "hatchback", "estate", "suv", "van", "truck", "lorry", "bus", "coach",
];

const MOTORBIKE_KEYWORDS: [&str; 5] = ["motorbike", "motorcycle", "moped", "scooter", "bike"];

/// Electric and hybrid markers that match the whole (trimmed) input only.
/// "ev" as a substring would match far too much.
const EXACT_ELECTRIC_TYPES: [&str; 3] = ["phev", "ev", "electric"];

const VAN_KEYWORDS: [&str; 4] = ["van", "truck", "lorry", "pickup"];

const SUV_KEYWORDS: [&str; 4] = ["suv", "4x4", "crossover", "off-road"];

/// Makes that only build motorcycles
const MOTORCYCLE_MAKES: [&str; 9] = [
    "ducati", "harley-davidson", "harley davidson", "triumph motorcycles", "ktm",
    "royal enfield", "aprilia", "mv agusta", "husqvarna",
];

/// Vehicle classification used by pricing and plan lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClassification {
    Car,
    Motorbike,
    Van,
    Suv,
    Electric,
    Hybrid,
}

impl fmt::Display for VehicleClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Car => write!(f, "car"),
            Self::Motorbike => write!(f, "motorbike"),
            Self::Van => write!(f, "van"),
            Self::Suv => write!(f, "suv"),
            Self::Electric => write!(f, "electric"),
            Self::Hybrid => write!(f, "hybrid"),
        }
    }
}

impl FromStr for VehicleClassification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Self::Car),
            "motorbike" => Ok(Self::Motorbike),
            "van" => Ok(Self::Van),
            "suv" => Ok(Self::Suv),
            "electric" => Ok(Self::Electric),
            "hybrid" => Ok(Self::Hybrid),
            _ => Err(format!("Unknown vehicle classification: {}", s)),
        }
    }
}

/// Raw vehicle details as captured upstream
///
/// Every field is optional free text. Nothing here is normalized; pricing
/// adjustments read these raw values because normalization collapses
/// distinctions (an SUV is priced from the car table but still carries a
/// large-vehicle surcharge).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleData {
    pub vehicle_type: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub mileage: Option<String>,
    pub fuel_type: Option<String>,
    pub registration: Option<String>,
}

impl VehicleData {
    /// Creates vehicle data carrying only a vehicle type
    pub fn with_type(vehicle_type: impl Into<String>) -> Self {
        Self {
            vehicle_type: Some(vehicle_type.into()),
            ..Self::default()
        }
    }

    /// Classification used by the pricing table
    pub fn classification(&self) -> VehicleClassification {
        normalize(self.vehicle_type.as_deref())
    }

    /// Classification used for plan-row lookup
    pub fn plan_category(&self) -> VehicleClassification {
        plan_category(self)
    }

    /// Short human label, e.g. "Ford Focus"
    pub fn summary(&self) -> String {
        let parts: Vec<&str> = [self.make.as_deref(), self.model.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .collect();

        if parts.is_empty() {
            "Your vehicle".to_string()
        } else {
            parts.join(" ")
        }
    }
}

fn clean(raw: Option<&str>) -> String {
    raw.map(|s| s.trim().to_lowercase()).unwrap_or_default()
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

/// Normalizes a free-text vehicle type into a pricing classification
///
/// Matching is case-insensitive and substring based, in priority order:
/// car keywords, then motorbike keywords, then electric/hybrid markers
/// (which price as cars). Empty or unmatched input is a car.
///
/// # Example
///
/// ```rust
/// use domain_pricing::vehicle::{normalize, VehicleClassification};
///
/// assert_eq!(normalize(Some("Motorcycle")), VehicleClassification::Motorbike);
/// assert_eq!(normalize(Some("PHEV")), VehicleClassification::Car);
/// assert_eq!(normalize(None), VehicleClassification::Car);
/// ```
pub fn normalize(raw: Option<&str>) -> VehicleClassification {
    let value = clean(raw);

    if value.is_empty() {
        return VehicleClassification::Car;
    }

    if contains_any(&value, &CAR_KEYWORDS) {
        return VehicleClassification::Car;
    }

    if contains_any(&value, &MOTORBIKE_KEYWORDS) {
        return VehicleClassification::Motorbike;
    }

    if value.contains("hybrid") || EXACT_ELECTRIC_TYPES.contains(&value.as_str()) {
        return VehicleClassification::Car;
    }

    VehicleClassification::Car
}

/// Classifies a vehicle for plan-row lookup
///
/// Unlike [`normalize`], this keeps electric, hybrid, van and SUV apart,
/// and also reads the fuel type. It never feeds price calculation.
pub fn plan_category(vehicle: &VehicleData) -> VehicleClassification {
    let vehicle_type = clean(vehicle.vehicle_type.as_deref());
    let fuel = clean(vehicle.fuel_type.as_deref());

    let is_hybrid = |s: &str| s.contains("hybrid") || s.contains("phev");
    if is_hybrid(&vehicle_type) || is_hybrid(&fuel) {
        return VehicleClassification::Hybrid;
    }

    let is_electric = |s: &str| s == "ev" || s == "bev" || s.contains("electric");
    if is_electric(&vehicle_type) || is_electric(&fuel) {
        return VehicleClassification::Electric;
    }

    if is_motorbike(vehicle) {
        return VehicleClassification::Motorbike;
    }

    if contains_any(&vehicle_type, &VAN_KEYWORDS) {
        return VehicleClassification::Van;
    }

    if contains_any(&vehicle_type, &SUV_KEYWORDS) {
        return VehicleClassification::Suv;
    }

    VehicleClassification::Car
}

/// Whether the raw data describes a motorcycle
///
/// True when the type normalizes to a motorbike, or when no car keyword is
/// present and the make only builds motorcycles.
pub fn is_motorbike(vehicle: &VehicleData) -> bool {
    if normalize(vehicle.vehicle_type.as_deref()) == VehicleClassification::Motorbike {
        return true;
    }

    let vehicle_type = clean(vehicle.vehicle_type.as_deref());
    if contains_any(&vehicle_type, &CAR_KEYWORDS) {
        return false;
    }

    let make = clean(vehicle.make.as_deref());
    !make.is_empty() && MOTORCYCLE_MAKES.iter().any(|m| make == *m)
}

/// Whether the raw data describes an SUV, van or pickup
pub fn is_large_vehicle(vehicle: &VehicleData) -> bool {
    let vehicle_type = clean(vehicle.vehicle_type.as_deref());
    let model = clean(vehicle.model.as_deref());

    contains_any(&vehicle_type, &VAN_KEYWORDS)
        || contains_any(&vehicle_type, &SUV_KEYWORDS)
        || contains_any(&model, &SUV_KEYWORDS)
}
