use std::future::Future;

use crate::{
    error::OptimizerError, optimization_request::OptimizeRouteRequest,
    optimization_response::OptimizeRouteResponse,
};

/// Anything able to turn a day's pickups into a visiting order.
pub trait RouteOptimizationProvider: Send + Sync {
    fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> impl Future<Output = Result<OptimizeRouteResponse, OptimizerError>> + Send;
}
