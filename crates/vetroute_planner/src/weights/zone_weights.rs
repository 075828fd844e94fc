use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::problem::{
    lat_lng::LatLng,
    zone::{ZoneRecord, ZoneWeights},
};

/// Calibration of the distance to weight mapping. The defaults were tuned for the
/// coordinate spread of a single metro area and carry no geodesic meaning.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ZoneWeightParams {
    pub scale: f64,
    pub min_weight: f64,
    pub max_weight: f64,
}

impl Default for ZoneWeightParams {
    fn default() -> Self {
        Self {
            scale: 100.0,
            min_weight: 1.0,
            max_weight: 10.9,
        }
    }
}

impl ZoneWeightParams {
    /// `weight = clamp(distance * scale, min, max)`, never panics on bad input.
    pub fn weight_for_distance(&self, distance: f64) -> f64 {
        let raw = distance * self.scale;
        if raw.is_nan() {
            return self.min_weight;
        }
        raw.max(self.min_weight).min(self.max_weight)
    }
}

pub fn zone_distance(zone: &ZoneRecord, clinic: &LatLng) -> f64 {
    match zone.coordinates {
        Some(coordinates) if !coordinates.is_missing() => coordinates.euclidean_distance(clinic),
        _ => 0.0,
    }
}

/// Computes the routing weight of every zone from its distance to the clinic.
pub fn compute_zone_weights(
    zones: &[ZoneRecord],
    clinic: &LatLng,
    params: &ZoneWeightParams,
) -> ZoneWeights {
    zones
        .iter()
        .map(|zone| {
            let weight = params.weight_for_distance(zone_distance(zone, clinic));

            match zone.stored_weight {
                Some(stored) if stored != weight => debug!(
                    "Zone {}: stored weight {} replaced by {}",
                    zone.name, stored, weight
                ),
                _ => {}
            }

            (zone.name.clone(), weight)
        })
        .collect()
}
