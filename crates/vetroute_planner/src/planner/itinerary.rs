use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    config::PlannerConfig,
    planner::route::Route,
    problem::{cage::CageClass, kilograms::Kilograms, stop::StopId, zone::ZoneWeights},
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct ItineraryEntry {
    /// 1-based visiting order
    pub position: usize,
    pub stop_id: StopId,
    pub zone_name: Option<String>,
    pub zone_weight: f64,
    pub pet_name: Option<String>,
    pub pet_weight: Kilograms,
    pub cage_class: CageClass,
    pub scheduled_time: Option<String>,
    /// Straight line distance from the previous stop, or from the clinic
    pub leg_distance_meters: f64,
}

pub fn itinerary(
    route: &Route,
    zone_weights: &ZoneWeights,
    config: &PlannerConfig,
) -> Vec<ItineraryEntry> {
    let legs = route.legs();

    route
        .stops
        .iter()
        .zip(legs)
        .enumerate()
        .map(|(index, (stop, leg))| {
            let pet_weight = stop.pet_weight_or(config.default_pet_weight);
            ItineraryEntry {
                position: index + 1,
                stop_id: stop.id.clone(),
                zone_name: stop.zone_name.clone(),
                zone_weight: zone_weights.weight_or(stop.zone_name(), config.default_zone_weight),
                pet_name: stop.pet_name.clone(),
                pet_weight,
                cage_class: CageClass::for_pet_weight(pet_weight),
                scheduled_time: stop.scheduled_time.clone(),
                leg_distance_meters: leg.distance_meters,
            }
        })
        .collect()
}
