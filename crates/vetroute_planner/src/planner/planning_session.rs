use std::fmt::Display;

use jiff::civil::Date;
use schemars::JsonSchema;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use vetroute_providers::route_optimization_provider::RouteOptimizationProvider;

use crate::{
    allocation::{
        capacity_check::{CapacityCheck, check_capacity},
        load_statistics::{LoadStatistics, compute_load_statistics},
    },
    config::PlannerConfig,
    planner::{
        planning_request::PlanningRequest,
        route::Route,
        route_optimizer::{OptimizationOutcome, optimize_route},
    },
    problem::{
        appointment::eligible_stops, cage::CageTareTable, inventory::resolve_cage_tares,
        stop::StopId, van_capacity::VanCapacity, zone::ZoneWeights,
    },
    weights::zone_weights::compute_zone_weights,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PlanningState {
    Idle,
    Requesting,
    Optimized,
    FallbackSorted,
    NothingToOptimize,
    Rendered,
}

impl PlanningState {
    pub fn is_planned(&self) -> bool {
        matches!(
            self,
            PlanningState::Optimized
                | PlanningState::FallbackSorted
                | PlanningState::NothingToOptimize
        )
    }
}

impl From<&OptimizationOutcome> for PlanningState {
    fn from(outcome: &OptimizationOutcome) -> Self {
        match outcome {
            OptimizationOutcome::Optimized => PlanningState::Optimized,
            OptimizationOutcome::FallbackSorted { .. } => PlanningState::FallbackSorted,
            OptimizationOutcome::NothingToOptimize => PlanningState::NothingToOptimize,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PlanningError {
    #[error("Cannot {action} while planning is {state:?}")]
    InvalidTransition {
        state: PlanningState,
        action: &'static str,
    },

    #[error("Clinic coordinates are required to weight zones and route the van")]
    MissingClinic,
}

/// Non blocking messages for the operator.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlanningNotice {
    NothingToOptimize,
    OptimizationDegraded { reason: String },
    MissingCoordinates { stop_ids: Vec<StopId> },
    DuplicatedStops { stop_ids: Vec<StopId> },
    CapacityExceeded { cages: usize, capacity: usize },
}

impl Display for PlanningNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanningNotice::NothingToOptimize => write!(f, "No pickups to optimize for this day"),
            PlanningNotice::OptimizationDegraded { reason } => write!(
                f,
                "Route optimization unavailable ({reason}), stops ordered by zone weight"
            ),
            PlanningNotice::MissingCoordinates { stop_ids } => write!(
                f,
                "{} pickup(s) skipped without client coordinates",
                stop_ids.len()
            ),
            PlanningNotice::DuplicatedStops { stop_ids } => {
                write!(f, "{} duplicated pickup(s) ignored", stop_ids.len())
            }
            PlanningNotice::CapacityExceeded { cages, capacity } => write!(
                f,
                "{cages} cages needed but the van carries {capacity}"
            ),
        }
    }
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct DayPlan {
    pub run_id: Uuid,
    pub date: Date,
    pub van_capacity: VanCapacity,
    pub route: Route,
    pub zone_weights: ZoneWeights,
    pub tares: CageTareTable,
    pub statistics: LoadStatistics,
    pub capacity: CapacityCheck,
    pub outcome: OptimizationOutcome,
    pub notices: Vec<PlanningNotice>,
}

/// One user triggered planning invocation:
/// `Idle -> Requesting -> Optimized | FallbackSorted -> Rendered`.
/// Planning again requires [`PlanningSession::reset`].
pub struct PlanningSession<'a, P> {
    provider: &'a P,
    config: &'a PlannerConfig,
    state: PlanningState,
}

impl<'a, P> PlanningSession<'a, P>
where
    P: RouteOptimizationProvider,
{
    pub fn new(provider: &'a P, config: &'a PlannerConfig) -> Self {
        Self {
            provider,
            config,
            state: PlanningState::Idle,
        }
    }

    pub fn state(&self) -> PlanningState {
        self.state
    }

    #[instrument(skip_all, fields(date = %request.date, van = %request.van_capacity))]
    pub async fn plan(&mut self, request: &PlanningRequest) -> Result<DayPlan, PlanningError> {
        if self.state != PlanningState::Idle {
            return Err(PlanningError::InvalidTransition {
                state: self.state,
                action: "plan",
            });
        }
        if request.clinic.is_missing() {
            return Err(PlanningError::MissingClinic);
        }

        let config = self.config;
        let mut notices = vec![];

        let eligible = eligible_stops(&request.appointments, request.date);
        if !eligible.missing_coordinates.is_empty() {
            notices.push(PlanningNotice::MissingCoordinates {
                stop_ids: eligible.missing_coordinates,
            });
        }
        if !eligible.duplicates.is_empty() {
            notices.push(PlanningNotice::DuplicatedStops {
                stop_ids: eligible.duplicates,
            });
        }

        let zone_weights =
            compute_zone_weights(&request.zones, &request.clinic, &config.zone_weights);
        let tares = resolve_cage_tares(&request.inventory, &config.default_tares);
        let statistics =
            compute_load_statistics(&eligible.stops, &tares, config.default_pet_weight);
        let capacity = check_capacity(&statistics, request.van_capacity, &config.cage_limits);

        if capacity.exceeded {
            warn!(
                "Van {} over capacity: {} cages for {} slots",
                request.van_capacity, capacity.cages, capacity.capacity
            );
            notices.push(PlanningNotice::CapacityExceeded {
                cages: capacity.cages,
                capacity: capacity.capacity,
            });
        }

        if !eligible.stops.is_empty() {
            self.state = PlanningState::Requesting;
        }

        let optimization = optimize_route(
            self.provider,
            &eligible.stops,
            request.van_capacity,
            &zone_weights,
            &request.clinic,
            config,
        )
        .await;

        match &optimization.outcome {
            OptimizationOutcome::NothingToOptimize => {
                notices.push(PlanningNotice::NothingToOptimize)
            }
            OptimizationOutcome::FallbackSorted { reason } => {
                notices.push(PlanningNotice::OptimizationDegraded {
                    reason: reason.clone(),
                })
            }
            OptimizationOutcome::Optimized => {}
        }

        self.state = PlanningState::from(&optimization.outcome);

        let plan = DayPlan {
            run_id: Uuid::new_v4(),
            date: request.date,
            van_capacity: request.van_capacity,
            route: Route::new(request.clinic, optimization.stops),
            zone_weights,
            tares,
            statistics,
            capacity,
            outcome: optimization.outcome,
            notices,
        };

        info!(
            "Planned {} stops ({:?}), total load {}",
            plan.route.len(),
            self.state,
            plan.statistics.total_weight
        );

        Ok(plan)
    }

    pub fn mark_rendered(&mut self) -> Result<(), PlanningError> {
        if !self.state.is_planned() {
            return Err(PlanningError::InvalidTransition {
                state: self.state,
                action: "render",
            });
        }

        self.state = PlanningState::Rendered;
        Ok(())
    }

    /// Back to `Idle` for a fresh invocation.
    pub fn reset(&mut self) {
        self.state = PlanningState::Idle;
    }
}
