use fxhash::FxHashMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use vetroute_providers::{
    error::OptimizerError,
    optimization_request::{OptimizationAppointment, OptimizeRouteRequest},
    route_optimization_provider::RouteOptimizationProvider,
};

use crate::{
    config::PlannerConfig,
    planner::fallback::sort_by_zone_weight,
    problem::{lat_lng::LatLng, stop::Stop, van_capacity::VanCapacity, zone::ZoneWeights},
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OptimizationOutcome {
    /// Order returned by the optimization endpoint
    Optimized,
    /// The endpoint failed, stops are sorted by zone weight
    FallbackSorted { reason: String },
    /// No stops, the endpoint was not called
    NothingToOptimize,
}

impl OptimizationOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, OptimizationOutcome::FallbackSorted { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOptimization {
    pub stops: Vec<Stop>,
    pub outcome: OptimizationOutcome,
}

pub fn build_request(
    stops: &[Stop],
    van_capacity: VanCapacity,
    zone_weights: &ZoneWeights,
    clinic: &LatLng,
    config: &PlannerConfig,
) -> OptimizeRouteRequest {
    OptimizeRouteRequest {
        appointments: stops
            .iter()
            .map(|stop| OptimizationAppointment {
                id: stop.id.to_string(),
                zone_name: stop.zone_name.clone(),
                pet_weight_kg: stop.pet_weight_or(config.default_pet_weight).value(),
                coordinates: stop.coordinates.into(),
                scheduled_time: stop.scheduled_time.clone(),
            })
            .collect(),
        van_capacity,
        fraccionamiento_weights: zone_weights.to_sorted_map(),
        clinic_location: (*clinic).into(),
    }
}

/// Maps the ids returned by the endpoint back onto the stops. Anything other
/// than an exact permutation of the input is rejected.
pub fn match_ordered_ids(stops: &[Stop], ordered_ids: &[String]) -> Result<Vec<Stop>, OptimizerError> {
    if ordered_ids.len() != stops.len() {
        return Err(OptimizerError::Malformed(format!(
            "expected {} stops, got {}",
            stops.len(),
            ordered_ids.len()
        )));
    }

    let index_by_id: FxHashMap<&str, usize> = stops
        .iter()
        .enumerate()
        .map(|(index, stop)| (stop.id.as_str(), index))
        .collect();

    let mut used = vec![false; stops.len()];
    let mut ordered = Vec::with_capacity(stops.len());

    for id in ordered_ids {
        let Some(&index) = index_by_id.get(id.as_str()) else {
            return Err(OptimizerError::Malformed(format!("unknown stop {id}")));
        };

        if std::mem::replace(&mut used[index], true) {
            return Err(OptimizerError::Malformed(format!("stop {id} appears twice")));
        }

        ordered.push(stops[index].clone());
    }

    Ok(ordered)
}

/// Orders the day's stops. Tries the optimization endpoint once (or as many
/// times as the provider retries) and otherwise sorts by zone weight. Always
/// returns a permutation of `stops`.
pub async fn optimize_route<P>(
    provider: &P,
    stops: &[Stop],
    van_capacity: VanCapacity,
    zone_weights: &ZoneWeights,
    clinic: &LatLng,
    config: &PlannerConfig,
) -> RouteOptimization
where
    P: RouteOptimizationProvider,
{
    if stops.is_empty() {
        return RouteOptimization {
            stops: vec![],
            outcome: OptimizationOutcome::NothingToOptimize,
        };
    }

    let request = build_request(stops, van_capacity, zone_weights, clinic, config);

    let result = match provider.optimize_route(&request).await {
        Ok(response) => match_ordered_ids(stops, &response.ordered_ids),
        Err(error) => Err(error),
    };

    match result {
        Ok(ordered) => {
            info!("Route optimized: {} stops", ordered.len());
            RouteOptimization {
                stops: ordered,
                outcome: OptimizationOutcome::Optimized,
            }
        }
        Err(error) => {
            warn!(
                "Route optimization failed, ordering by zone weight instead: {}",
                error
            );
            RouteOptimization {
                stops: sort_by_zone_weight(stops, zone_weights, config.default_zone_weight),
                outcome: OptimizationOutcome::FallbackSorted {
                    reason: error.to_string(),
                },
            }
        }
    }
}
