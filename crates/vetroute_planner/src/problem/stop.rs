use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::problem::{kilograms::Kilograms, lat_lng::LatLng};

/// Opaque stop identifier, unique within a planning run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct StopId(String);

impl StopId {
    pub fn new(id: impl Into<String>) -> Self {
        StopId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for StopId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StopId {
    fn from(value: &str) -> Self {
        StopId::new(value)
    }
}

impl From<u64> for StopId {
    fn from(value: u64) -> Self {
        StopId(value.to_string())
    }
}

// Appointment sources hand out both numeric and string ids.
impl<'de> Deserialize<'de> for StopId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => StopId(text),
            RawId::Number(number) => StopId(number.to_string()),
        })
    }
}

/// A pickup the van has to make, derived from an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Stop {
    pub id: StopId,
    pub coordinates: LatLng,
    #[serde(default)]
    pub zone_name: Option<String>,
    #[serde(default)]
    pub pet_name: Option<String>,
    #[serde(default)]
    pub pet_weight_kg: Option<f64>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl Stop {
    pub fn new(id: impl Into<StopId>, coordinates: LatLng) -> Self {
        Self {
            id: id.into(),
            coordinates,
            zone_name: None,
            pet_name: None,
            pet_weight_kg: None,
            scheduled_time: None,
        }
    }

    pub fn with_zone(mut self, zone_name: impl Into<String>) -> Self {
        self.zone_name = Some(zone_name.into());
        self
    }

    pub fn with_pet_weight(mut self, pet_weight_kg: f64) -> Self {
        self.pet_weight_kg = Some(pet_weight_kg);
        self
    }

    pub fn zone_name(&self) -> Option<&str> {
        self.zone_name.as_deref()
    }

    /// Negative or non finite weights are treated as unknown.
    pub fn pet_weight_or(&self, default: Kilograms) -> Kilograms {
        match self.pet_weight_kg {
            Some(weight) if weight.is_finite() && weight >= 0.0 => Kilograms::new(weight),
            _ => default,
        }
    }
}
