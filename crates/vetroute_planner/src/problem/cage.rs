use std::fmt::Display;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::kilograms::Kilograms;

const SMALL_CAGE_MAX_PET_WEIGHT: f64 = 8.0;
const MEDIUM_CAGE_MAX_PET_WEIGHT: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CageClass {
    Small,
    Medium,
    Large,
}

impl CageClass {
    pub const ALL: [CageClass; 3] = [CageClass::Small, CageClass::Medium, CageClass::Large];

    /// Upper bounds are inclusive: 8 kg is still small, 20 kg still medium.
    pub fn for_pet_weight(weight: Kilograms) -> CageClass {
        let weight = weight.value();
        if weight <= SMALL_CAGE_MAX_PET_WEIGHT {
            CageClass::Small
        } else if weight <= MEDIUM_CAGE_MAX_PET_WEIGHT {
            CageClass::Medium
        } else {
            CageClass::Large
        }
    }
}

impl Display for CageClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CageClass::Small => "small",
                CageClass::Medium => "medium",
                CageClass::Large => "large",
            }
        )
    }
}

/// Empty weight of one cage of each class.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct CageTareTable {
    pub small: Kilograms,
    pub medium: Kilograms,
    pub large: Kilograms,
}

impl CageTareTable {
    pub const DEFAULT_SMALL: Kilograms = Kilograms::new(2.5);
    pub const DEFAULT_MEDIUM: Kilograms = Kilograms::new(4.0);
    pub const DEFAULT_LARGE: Kilograms = Kilograms::new(6.5);

    pub fn tare(&self, class: CageClass) -> Kilograms {
        match class {
            CageClass::Small => self.small,
            CageClass::Medium => self.medium,
            CageClass::Large => self.large,
        }
    }

    pub fn set_tare(&mut self, class: CageClass, tare: Kilograms) {
        match class {
            CageClass::Small => self.small = tare,
            CageClass::Medium => self.medium = tare,
            CageClass::Large => self.large = tare,
        }
    }
}

impl Default for CageTareTable {
    fn default() -> Self {
        Self {
            small: Self::DEFAULT_SMALL,
            medium: Self::DEFAULT_MEDIUM,
            large: Self::DEFAULT_LARGE,
        }
    }
}
