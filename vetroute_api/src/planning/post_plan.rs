use std::sync::Arc;

use axum::{Json, extract::State};
use schemars::JsonSchema;
use serde::Serialize;
use vetroute_planner::planner::{
    itinerary::{ItineraryEntry, itinerary},
    planning_request::PlanningRequest,
    planning_session::{DayPlan, PlanningSession},
};

use crate::{error::ApiError, state::AppState};

#[derive(Serialize, JsonSchema)]
pub struct PlanResponse {
    #[serde(flatten)]
    plan: DayPlan,
    itinerary: Vec<ItineraryEntry>,
    total_distance_meters: f64,

    /// Human readable versions of the notices
    messages: Vec<String>,

    #[schemars(with = "serde_json::Value")]
    route_geojson: geojson::Feature,
}

pub async fn post_plan_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<PlanningRequest>,
) -> Result<Json<PlanResponse>, ApiError> {
    let mut session = PlanningSession::new(&state.optimizer, &state.config);

    let plan = session.plan(&body).await?;

    let response = PlanResponse {
        itinerary: itinerary(&plan.route, &plan.zone_weights, &state.config),
        total_distance_meters: plan.route.total_distance_meters(),
        messages: plan.notices.iter().map(|notice| notice.to_string()).collect(),
        route_geojson: plan.route.to_geojson(),
        plan,
    };

    session.mark_rendered()?;

    Ok(Json(response))
}
