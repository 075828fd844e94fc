use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    allocation::load_statistics::LoadStatistics,
    problem::van_capacity::{CageLimits, VanCapacity},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CapacityCheck {
    pub van_capacity: VanCapacity,
    pub cages: usize,
    pub capacity: usize,
    pub exceeded: bool,
}

/// Compares the cages needed against what the chosen van can carry.
pub fn check_capacity(
    statistics: &LoadStatistics,
    van_capacity: VanCapacity,
    limits: &CageLimits,
) -> CapacityCheck {
    let cages = statistics.cage_allocation.total();
    let capacity = limits.for_van(van_capacity);

    CapacityCheck {
        van_capacity,
        cages,
        capacity,
        exceeded: cages > capacity,
    }
}
