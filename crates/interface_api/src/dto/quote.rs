//! Quote DTOs

use std::collections::BTreeMap;

use core_kernel::Money;
use domain_pricing::option::DurationRepr;
use domain_pricing::{
    AddOn, AddOnSelection, ClaimLimit, CoverDuration, PriceBreakdown, PricingError,
    PricingOption, QuoteDisplay, VehicleData,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Vehicle details as sent by the pricing page
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct VehicleRequest {
    #[validate(length(max = 50))]
    pub vehicle_type: Option<String>,
    #[validate(length(max = 50))]
    pub make: Option<String>,
    #[validate(length(max = 100))]
    pub model: Option<String>,
    #[validate(length(max = 4))]
    pub year: Option<String>,
    #[validate(length(max = 20))]
    pub mileage: Option<String>,
    #[validate(length(max = 30))]
    pub fuel_type: Option<String>,
    #[validate(length(max = 10))]
    pub registration: Option<String>,
}

impl From<VehicleRequest> for VehicleData {
    fn from(request: VehicleRequest) -> Self {
        VehicleData {
            vehicle_type: request.vehicle_type,
            make: request.make,
            model: request.model,
            year: request.year,
            mileage: request.mileage,
            fuel_type: request.fuel_type,
            registration: request.registration,
        }
    }
}

fn default_duration() -> DurationRepr {
    DurationRepr::Months(CoverDuration::TWELVE_MONTHS.months())
}

/// Body for quote and checkout requests
///
/// `duration` accepts months (`24`) or a key (`"24months"`). Add-on keys are
/// checked here rather than by serde so an unknown key reports its name.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    #[validate(nested)]
    pub vehicle: VehicleRequest,
    #[serde(default)]
    pub excess: u32,
    #[serde(default = "default_claim_limit")]
    pub claim_limit: u32,
    #[serde(default = "default_duration")]
    pub duration: DurationRepr,
    #[serde(default)]
    pub add_ons: BTreeMap<String, bool>,
}

fn default_claim_limit() -> u32 {
    ClaimLimit::default().pounds()
}

impl QuoteRequest {
    /// Splits the request into vehicle data and a pricing option
    pub fn into_parts(self) -> Result<(VehicleData, PricingOption), PricingError> {
        let duration = CoverDuration::try_from(self.duration)?;

        let mut add_ons = AddOnSelection::new();
        for (key, selected) in &self.add_ons {
            add_ons.set(key.parse::<AddOn>()?, *selected);
        }

        let option = PricingOption::builder()
            .excess(self.excess)
            .claim_limit(self.claim_limit)
            .duration_months(duration.months())
            .add_ons(add_ons)
            .build();

        Ok((self.vehicle.into(), option))
    }
}

/// Response for a priced quote
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub breakdown: PriceBreakdown,
    pub savings: Money,
    pub display: QuoteDisplay,
}
