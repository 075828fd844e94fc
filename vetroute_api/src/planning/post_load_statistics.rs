use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use vetroute_planner::{
    allocation::{
        capacity_check::{CapacityCheck, check_capacity},
        load_statistics::{LoadStatistics, compute_load_statistics},
    },
    problem::{
        cage::CageTareTable, inventory::InventoryItem, inventory::resolve_cage_tares, stop::Stop,
        van_capacity::VanCapacity,
    },
};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct LoadStatisticsRequest {
    stops: Vec<Stop>,
    #[serde(default)]
    inventory: Vec<InventoryItem>,
    #[serde(default)]
    van_capacity: VanCapacity,
}

#[derive(Serialize, JsonSchema)]
pub struct LoadStatisticsResponse {
    statistics: LoadStatistics,
    tares: CageTareTable,
    capacity: CapacityCheck,
}

pub async fn post_load_statistics_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoadStatisticsRequest>,
) -> Result<Json<LoadStatisticsResponse>, ApiError> {
    let config = &state.config;
    let tares = resolve_cage_tares(&body.inventory, &config.default_tares);
    let statistics = compute_load_statistics(&body.stops, &tares, config.default_pet_weight);
    let capacity = check_capacity(&statistics, body.van_capacity, &config.cage_limits);

    Ok(Json(LoadStatisticsResponse {
        statistics,
        tares,
        capacity,
    }))
}

#[cfg(test)]
mod tests {
    use vetroute_planner::{config::PlannerConfig, problem::kilograms::Kilograms};
    use vetroute_providers::route_optimization_client::RouteOptimizationClient;

    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            optimizer: RouteOptimizationClient::Disabled,
            config: PlannerConfig::default(),
        })
    }

    #[tokio::test]
    async fn test_load_statistics() {
        let body: LoadStatisticsRequest = serde_json::from_value(serde_json::json!({
            "van_capacity": "small",
            "stops": [
                { "id": 1, "coordinates": { "lat": 25.669, "lng": -100.309 }, "pet_weight_kg": 5 },
                { "id": 2, "coordinates": { "lat": 25.8, "lng": -100.2 }, "pet_weight_kg": 25 },
                { "id": "3", "coordinates": { "lat": 25.7, "lng": -100.3 } }
            ],
            "inventory": [{ "name": "Jaula grande", "weight_kg": 7.0 }]
        }))
        .unwrap();

        let Json(response) = post_load_statistics_handler(State(state()), Json(body))
            .await
            .unwrap();

        let statistics = response.statistics;
        assert_eq!(statistics.stop_count, 3);
        assert_eq!(statistics.cage_allocation.small, 2);
        assert_eq!(statistics.cage_allocation.large, 1);
        assert_eq!(statistics.total_pet_weight, Kilograms::new(35.0));
        assert_eq!(response.tares.large, Kilograms::new(7.0));
        assert_eq!(statistics.total_tare_weight, Kilograms::new(12.0));
        assert_eq!(statistics.total_weight, Kilograms::new(47.0));
        assert_eq!(response.capacity.capacity, 6);
        assert!(!response.capacity.exceeded);
    }

    #[tokio::test]
    async fn test_no_stops() {
        let body: LoadStatisticsRequest =
            serde_json::from_value(serde_json::json!({ "stops": [] })).unwrap();

        let Json(response) = post_load_statistics_handler(State(state()), Json(body))
            .await
            .unwrap();

        assert_eq!(response.statistics, LoadStatistics::default());
        assert_eq!(response.capacity.capacity, 10);
        assert_eq!(response.tares, CageTareTable::default());
    }
}
