//! Test Data Builders
//!
//! Provides builder patterns for constructing vehicle data with sensible
//! defaults. Tests specify only the fields they care about.

use domain_pricing::VehicleData;
use fake::faker::lorem::en::Word;
use fake::Fake;

use crate::fixtures::VehicleFixtures;

/// Builder for raw vehicle data
#[derive(Debug, Clone)]
pub struct VehicleDataBuilder {
    data: VehicleData,
}

impl Default for VehicleDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VehicleDataBuilder {
    /// Starts from a plain Ford Focus
    pub fn new() -> Self {
        Self {
            data: VehicleFixtures::ford_focus(),
        }
    }

    /// Starts from a vehicle with no fields set
    pub fn empty() -> Self {
        Self {
            data: VehicleData::default(),
        }
    }

    /// Starts from a car with a made-up model name
    pub fn random_car() -> Self {
        let model: String = Word().fake();
        Self::new().with_model(model).with_registration(None::<String>)
    }

    /// Sets the vehicle type
    pub fn with_type(mut self, vehicle_type: impl Into<String>) -> Self {
        self.data.vehicle_type = Some(vehicle_type.into());
        self
    }

    /// Clears the vehicle type
    pub fn without_type(mut self) -> Self {
        self.data.vehicle_type = None;
        self
    }

    /// Sets the make
    pub fn with_make(mut self, make: impl Into<String>) -> Self {
        self.data.make = Some(make.into());
        self
    }

    /// Sets the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.data.model = Some(model.into());
        self
    }

    /// Sets the fuel type
    pub fn with_fuel_type(mut self, fuel_type: impl Into<String>) -> Self {
        self.data.fuel_type = Some(fuel_type.into());
        self
    }

    /// Sets or clears the registration
    pub fn with_registration(mut self, registration: Option<impl Into<String>>) -> Self {
        self.data.registration = registration.map(Into::into);
        self
    }

    /// Builds the vehicle data
    pub fn build(self) -> VehicleData {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let vehicle = VehicleDataBuilder::new().with_type("SUV").build();
        assert_eq!(vehicle.vehicle_type.as_deref(), Some("SUV"));
        assert_eq!(vehicle.make.as_deref(), Some("Ford"));
    }

    #[test]
    fn test_random_car_keeps_make() {
        let vehicle = VehicleDataBuilder::random_car().build();
        assert_eq!(vehicle.make.as_deref(), Some("Ford"));
        assert!(vehicle.model.is_some());
        assert!(vehicle.registration.is_none());
    }
}
