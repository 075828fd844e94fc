use std::sync::Arc;

use aide::axum::{ApiRouter, routing::post};

use crate::{
    planning::{
        post_load_statistics::post_load_statistics_handler, post_plan::post_plan_handler,
        post_zone_weights::post_zone_weights_handler,
    },
    state::AppState,
};

pub fn planning_routes(state: Arc<AppState>) -> ApiRouter {
    aide::generate::infer_responses(true);
    let router = ApiRouter::new()
        .api_route("/plan", post(post_plan_handler))
        .api_route("/zone-weights", post(post_zone_weights_handler))
        .api_route("/load-statistics", post(post_load_statistics_handler))
        .with_state(state);

    aide::generate::infer_responses(false);

    router
}
