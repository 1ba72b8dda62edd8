//! API configuration

use core_kernel::CoreError;
use domain_pricing::AdjustmentRates;
use rust_decimal::Decimal;
use serde::Deserialize;

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level, overridden by `RUST_LOG`
    pub log_level: String,
    /// Discount for motorcycles, as a percentage
    pub motorbike_discount_percent: Decimal,
    /// Fixed surcharge per year of cover for SUVs, vans and pickups
    pub large_vehicle_surcharge_per_year: Decimal,
    /// Surcharge for premium marques, as a percentage
    pub premium_marque_surcharge_percent: Decimal,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let rates = AdjustmentRates::default();
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            motorbike_discount_percent: rates.motorbike_discount_percent,
            large_vehicle_surcharge_per_year: rates.large_vehicle_surcharge_per_year,
            premium_marque_surcharge_percent: rates.premium_marque_surcharge_percent,
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `API_*` environment variables
    ///
    /// Variables that are not set keep their default.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("API"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Rates for the vehicle adjuster
    pub fn adjustment_rates(&self) -> AdjustmentRates {
        AdjustmentRates {
            motorbike_discount_percent: self.motorbike_discount_percent,
            large_vehicle_surcharge_per_year: self.large_vehicle_surcharge_per_year,
            premium_marque_surcharge_percent: self.premium_marque_surcharge_percent,
        }
    }

    /// Checks the configured rates before the server starts
    pub fn validate(&self) -> Result<(), CoreError> {
        self.adjustment_rates()
            .validate()
            .map_err(|e| CoreError::configuration(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults_match_standard_rates() {
        let config = ApiConfig::default();
        assert_eq!(config.server_addr(), "0.0.0.0:8080");
        assert_eq!(config.adjustment_rates(), AdjustmentRates::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_full_discount() {
        let config = ApiConfig {
            motorbike_discount_percent: dec!(100),
            ..ApiConfig::default()
        };
        assert!(matches!(config.validate(), Err(CoreError::Configuration(_))));
    }
}
