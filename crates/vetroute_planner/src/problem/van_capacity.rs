use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use vetroute_providers::van_capacity::VanCapacity;

/// How many cages fit in each van class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CageLimits {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl CageLimits {
    pub fn for_van(&self, van: VanCapacity) -> usize {
        match van {
            VanCapacity::Small => self.small,
            VanCapacity::Medium => self.medium,
            VanCapacity::Large => self.large,
        }
    }
}

impl Default for CageLimits {
    fn default() -> Self {
        Self {
            small: 6,
            medium: 10,
            large: 16,
        }
    }
}
