use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::van_capacity::VanCapacity;

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, Copy, PartialEq)]
pub struct WireLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationAppointment {
    pub id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_name: Option<String>,

    pub pet_weight_kg: f64,

    pub coordinates: WireLatLng,

    /// Display only, the optimizer may ignore it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
}

/// Body posted to the external route optimization endpoint.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRouteRequest {
    pub appointments: Vec<OptimizationAppointment>,
    pub van_capacity: VanCapacity,
    pub fraccionamiento_weights: BTreeMap<String, f64>,
    pub clinic_location: WireLatLng,
}
