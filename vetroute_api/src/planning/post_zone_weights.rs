use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Deserialize;
use vetroute_planner::{
    planner::planning_session::PlanningError,
    problem::{
        lat_lng::LatLng,
        zone::{ZoneRecord, ZoneWeights},
    },
    weights::zone_weights::compute_zone_weights,
};

use crate::{error::ApiError, state::AppState};

#[derive(Deserialize, JsonSchema)]
pub struct ZoneWeightsRequest {
    clinic: LatLng,
    zones: Vec<ZoneRecord>,
}

pub async fn post_zone_weights_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ZoneWeightsRequest>,
) -> Result<Json<ZoneWeights>, ApiError> {
    if body.clinic.is_missing() {
        return Err(PlanningError::MissingClinic.into());
    }

    Ok(Json(compute_zone_weights(
        &body.zones,
        &body.clinic,
        &state.config.zone_weights,
    )))
}

#[cfg(test)]
mod tests {
    use vetroute_planner::config::PlannerConfig;
    use vetroute_providers::route_optimization_client::RouteOptimizationClient;

    use super::*;

    fn state() -> Arc<AppState> {
        Arc::new(AppState {
            optimizer: RouteOptimizationClient::Disabled,
            config: PlannerConfig::default(),
        })
    }

    fn body(clinic: serde_json::Value) -> ZoneWeightsRequest {
        serde_json::from_value(serde_json::json!({
            "clinic": clinic,
            "zones": [
                { "name": "centro", "coordinates": { "lat": 25.669, "lng": -100.309 } },
                { "name": "lejos", "coordinates": { "lat": 25.8, "lng": -100.2 } },
                { "name": "sin mapa" }
            ]
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_zone_weights() {
        let clinic = serde_json::json!({ "lat": 25.6866, "lng": -100.3161 });

        let Json(weights) = post_zone_weights_handler(State(state()), Json(body(clinic)))
            .await
            .unwrap();

        assert_eq!(weights.len(), 3);
        assert_eq!(weights.get("sin mapa"), Some(1.0));
        assert_eq!(weights.get("lejos"), Some(10.9));
        let centro = weights.get("centro").unwrap();
        assert!(centro > 1.0 && centro < 2.0);
    }

    #[tokio::test]
    async fn test_missing_clinic_is_rejected() {
        let clinic = serde_json::json!({ "lat": 0.0, "lng": 0.0 });

        let result = post_zone_weights_handler(State(state()), Json(body(clinic))).await;

        assert!(matches!(result, Err(ApiError::BadRequest(_))));
    }
}
