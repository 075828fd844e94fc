use std::collections::BTreeMap;

use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::lat_lng::LatLng;

/// A delivery neighbourhood ("fraccionamiento") as kept by the zone registry.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ZoneRecord {
    pub name: String,
    #[serde(default)]
    pub coordinates: Option<LatLng>,

    /// Weight computed by an earlier run. Never trusted, always recomputed.
    #[serde(default)]
    pub stored_weight: Option<f64>,
}

impl ZoneRecord {
    pub fn new(name: impl Into<String>, coordinates: LatLng) -> Self {
        Self {
            name: name.into(),
            coordinates: Some(coordinates),
            stored_weight: None,
        }
    }
}

/// Zone name to routing weight, fixed for the duration of a planning run.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct ZoneWeights {
    #[schemars(with = "BTreeMap<String, f64>")]
    weights: FxHashMap<String, f64>,
}

impl ZoneWeights {
    pub fn get(&self, zone_name: &str) -> Option<f64> {
        self.weights.get(zone_name).copied()
    }

    /// Weight for a stop's zone; absent or unknown zones get `default`.
    pub fn weight_or(&self, zone_name: Option<&str>, default: f64) -> f64 {
        zone_name
            .and_then(|zone_name| self.get(zone_name))
            .unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sorted by zone name, as sent over the wire.
    pub fn to_sorted_map(&self) -> BTreeMap<String, f64> {
        self.weights
            .iter()
            .map(|(name, weight)| (name.clone(), *weight))
            .collect()
    }

    /// Entries ordered by ascending weight, ties by name.
    pub fn sorted_by_weight(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .weights
            .iter()
            .map(|(name, weight)| (name.as_str(), *weight))
            .collect();
        entries.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(String, f64)> for ZoneWeights {
    fn from_iter<T: IntoIterator<Item = (String, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
