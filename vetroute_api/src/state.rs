use vetroute_planner::config::PlannerConfig;
use vetroute_providers::route_optimization_client::RouteOptimizationClient;

pub struct AppState {
    pub optimizer: RouteOptimizationClient,
    pub config: PlannerConfig,
}
