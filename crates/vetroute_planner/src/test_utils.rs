use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use vetroute_providers::{
    error::OptimizerError, optimization_request::OptimizeRouteRequest,
    optimization_response::OptimizeRouteResponse,
    route_optimization_provider::RouteOptimizationProvider,
};

use crate::{
    problem::{
        lat_lng::LatLng,
        stop::{Stop, StopId},
        zone::{ZoneRecord, ZoneWeights},
    },
    weights::zone_weights::compute_zone_weights,
};

pub const CLINIC: LatLng = LatLng::new(25.6866, -100.3161);
pub const CENTRO: LatLng = LatLng::new(25.669, -100.309);
pub const LEJOS: LatLng = LatLng::new(25.8, -100.2);

pub fn centro() -> ZoneRecord {
    ZoneRecord::new("centro", CENTRO)
}

pub fn lejos() -> ZoneRecord {
    ZoneRecord::new("lejos", LEJOS)
}

pub fn example_zone_weights() -> ZoneWeights {
    compute_zone_weights(&[centro(), lejos()], &CLINIC, &Default::default())
}

pub fn stop(id: u64, zone: &str, pet_weight_kg: Option<f64>) -> Stop {
    let coordinates = if zone == "lejos" { LEJOS } else { CENTRO };
    let mut stop = Stop::new(StopId::from(id), coordinates).with_zone(zone);
    stop.pet_weight_kg = pet_weight_kg;
    stop
}

pub fn example_stops() -> Vec<Stop> {
    vec![stop(1, "centro", Some(5.0)), stop(2, "lejos", Some(25.0))]
}

pub fn stop_ids(stops: &[Stop]) -> Vec<&str> {
    stops.iter().map(|stop| stop.id.as_str()).collect()
}

enum MockBehavior {
    Reverse,
    Fail,
    Respond(Vec<String>),
}

/// Stands in for the optimization endpoint and records what it was sent.
pub struct MockProvider {
    behavior: MockBehavior,
    calls: AtomicUsize,
    last_request: Mutex<Option<OptimizeRouteRequest>>,
}

impl MockProvider {
    fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn reverse() -> Self {
        Self::new(MockBehavior::Reverse)
    }

    pub fn failing() -> Self {
        Self::new(MockBehavior::Fail)
    }

    pub fn respond(ids: Vec<&str>) -> Self {
        Self::new(MockBehavior::Respond(
            ids.into_iter().map(String::from).collect(),
        ))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<OptimizeRouteRequest> {
        self.last_request.lock().clone()
    }
}

impl RouteOptimizationProvider for MockProvider {
    async fn optimize_route(
        &self,
        request: &OptimizeRouteRequest,
    ) -> Result<OptimizeRouteResponse, OptimizerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock() = Some(request.clone());

        match &self.behavior {
            MockBehavior::Reverse => Ok(OptimizeRouteResponse {
                ordered_ids: request
                    .appointments
                    .iter()
                    .rev()
                    .map(|appointment| appointment.id.clone())
                    .collect(),
            }),
            MockBehavior::Fail => Err(OptimizerError::Api {
                status: 503,
                message: "unavailable".to_string(),
            }),
            MockBehavior::Respond(ids) => Ok(OptimizeRouteResponse {
                ordered_ids: ids.clone(),
            }),
        }
    }
}
