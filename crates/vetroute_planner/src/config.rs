use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vetroute_providers::config::{ConfigError, env_or};

use crate::{
    problem::{cage::CageTareTable, kilograms::Kilograms, van_capacity::CageLimits},
    weights::zone_weights::ZoneWeightParams,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PlannerConfig {
    pub zone_weights: ZoneWeightParams,

    /// Weight of stops whose zone is absent or unknown
    pub default_zone_weight: f64,

    pub default_pet_weight: Kilograms,

    /// Used when inventory has no matching cage
    pub default_tares: CageTareTable,

    pub cage_limits: CageLimits,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            zone_weights: ZoneWeightParams::default(),
            default_zone_weight: 5.0,
            default_pet_weight: Kilograms::new(5.0),
            default_tares: CageTareTable::default(),
            cage_limits: CageLimits::default(),
        }
    }
}

impl PlannerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            zone_weights: ZoneWeightParams {
                scale: env_or("VETROUTE_WEIGHT_SCALE", defaults.zone_weights.scale)?,
                min_weight: env_or("VETROUTE_WEIGHT_MIN", defaults.zone_weights.min_weight)?,
                max_weight: env_or("VETROUTE_WEIGHT_MAX", defaults.zone_weights.max_weight)?,
            },
            default_zone_weight: env_or(
                "VETROUTE_DEFAULT_ZONE_WEIGHT",
                defaults.default_zone_weight,
            )?,
            default_pet_weight: Kilograms::new(env_or(
                "VETROUTE_DEFAULT_PET_WEIGHT_KG",
                defaults.default_pet_weight.value(),
            )?),
            default_tares: CageTareTable {
                small: env_kilograms_or("VETROUTE_TARE_SMALL_KG", defaults.default_tares.small)?,
                medium: env_kilograms_or("VETROUTE_TARE_MEDIUM_KG", defaults.default_tares.medium)?,
                large: env_kilograms_or("VETROUTE_TARE_LARGE_KG", defaults.default_tares.large)?,
            },
            cage_limits: CageLimits {
                small: env_or("VETROUTE_CAGE_LIMIT_SMALL", defaults.cage_limits.small)?,
                medium: env_or("VETROUTE_CAGE_LIMIT_MEDIUM", defaults.cage_limits.medium)?,
                large: env_or("VETROUTE_CAGE_LIMIT_LARGE", defaults.cage_limits.large)?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ZoneWeightParams {
            scale,
            min_weight,
            max_weight,
        } = self.zone_weights;

        if !scale.is_finite() || scale <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "weight scale must be positive, got {scale}"
            )));
        }

        if !min_weight.is_finite() || !max_weight.is_finite() || min_weight > max_weight {
            return Err(ConfigError::Invalid(format!(
                "weight range [{min_weight}, {max_weight}] is empty"
            )));
        }

        if !self.default_zone_weight.is_finite() {
            return Err(ConfigError::Invalid(
                "default zone weight must be finite".to_string(),
            ));
        }

        let pet_weight = self.default_pet_weight.value();
        if !pet_weight.is_finite() || pet_weight < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "default pet weight must be non negative, got {pet_weight}"
            )));
        }

        for tare in [
            self.default_tares.small,
            self.default_tares.medium,
            self.default_tares.large,
        ] {
            if !tare.value().is_finite() || tare.value() < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "cage tare must be non negative, got {tare}"
                )));
            }
        }

        let CageLimits {
            small,
            medium,
            large,
        } = self.cage_limits;
        if small == 0 || medium == 0 || large == 0 {
            return Err(ConfigError::Invalid(format!(
                "cage limits must be at least 1, got {small}/{medium}/{large}"
            )));
        }

        Ok(())
    }
}

fn env_kilograms_or(name: &str, default: Kilograms) -> Result<Kilograms, ConfigError> {
    env_or(name, default.value()).map(Kilograms::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(PlannerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_inverted_range_is_invalid() {
        let config = PlannerConfig {
            zone_weights: ZoneWeightParams {
                min_weight: 11.0,
                max_weight: 1.0,
                ..ZoneWeightParams::default()
            },
            ..PlannerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_cage_limit_is_invalid() {
        let config = PlannerConfig {
            cage_limits: CageLimits {
                small: 0,
                ..CageLimits::default()
            },
            ..PlannerConfig::default()
        };

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cage_settings_from_env() {
        // Only this test touches these variables.
        unsafe {
            std::env::set_var("VETROUTE_CAGE_LIMIT_LARGE", "20");
            std::env::set_var("VETROUTE_TARE_MEDIUM_KG", "4.5");
        }
        let config = PlannerConfig::from_env();

        unsafe { std::env::set_var("VETROUTE_CAGE_LIMIT_LARGE", "lots") };
        let invalid = PlannerConfig::from_env();

        unsafe {
            std::env::remove_var("VETROUTE_CAGE_LIMIT_LARGE");
            std::env::remove_var("VETROUTE_TARE_MEDIUM_KG");
        }

        let config = config.unwrap();
        assert_eq!(config.cage_limits.large, 20);
        assert_eq!(config.cage_limits.small, 6);
        assert_eq!(config.default_tares.medium, Kilograms::new(4.5));
        assert_eq!(config.default_tares.small, CageTareTable::DEFAULT_SMALL);
        assert!(matches!(invalid, Err(ConfigError::InvalidValue { .. })));
    }

    #[test]
    fn test_negative_pet_weight_is_invalid() {
        let config = PlannerConfig {
            default_pet_weight: Kilograms::new(-1.0),
            ..PlannerConfig::default()
        };

        assert!(config.validate().is_err());
    }
}
