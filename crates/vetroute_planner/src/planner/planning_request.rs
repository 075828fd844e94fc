use std::io::Read;

use jiff::civil::Date;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{
    appointment::Appointment, inventory::InventoryItem, lat_lng::LatLng,
    van_capacity::VanCapacity, zone::ZoneRecord,
};

/// Everything needed to plan one day of pickups for one van.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct PlanningRequest {
    pub date: Date,
    pub clinic: LatLng,
    #[serde(default)]
    pub van_capacity: VanCapacity,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
    #[serde(default)]
    pub zones: Vec<ZoneRecord>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl PlanningRequest {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schemars::schema_for!(PlanningRequest))
}
