use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{
    cage::{CageClass, CageTareTable},
    kilograms::Kilograms,
    stop::Stop,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
pub struct CageAllocation {
    pub small: usize,
    pub medium: usize,
    pub large: usize,
}

impl CageAllocation {
    pub fn count(&self, class: CageClass) -> usize {
        match class {
            CageClass::Small => self.small,
            CageClass::Medium => self.medium,
            CageClass::Large => self.large,
        }
    }

    pub fn total(&self) -> usize {
        self.small + self.medium + self.large
    }

    fn add(&mut self, class: CageClass) {
        match class {
            CageClass::Small => self.small += 1,
            CageClass::Medium => self.medium += 1,
            CageClass::Large => self.large += 1,
        }
    }
}

/// What the van carries for a set of stops. Derived, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct LoadStatistics {
    pub stop_count: usize,
    pub total_pet_weight: Kilograms,
    pub average_pet_weight: Kilograms,
    pub cage_allocation: CageAllocation,
    pub total_tare_weight: Kilograms,
    pub total_weight: Kilograms,
}

impl LoadStatistics {
    pub fn is_empty(&self) -> bool {
        self.stop_count == 0
    }
}

/// Buckets every stop into a cage and sums live and tare weight.
/// Pets without a known weight count as `default_pet_weight`.
pub fn compute_load_statistics(
    stops: &[Stop],
    tares: &CageTareTable,
    default_pet_weight: Kilograms,
) -> LoadStatistics {
    let mut total_pet_weight = Kilograms::ZERO;
    let mut cage_allocation = CageAllocation::default();

    for stop in stops {
        let pet_weight = stop.pet_weight_or(default_pet_weight);
        total_pet_weight += pet_weight;
        cage_allocation.add(CageClass::for_pet_weight(pet_weight));
    }

    let total_tare_weight: Kilograms = CageClass::ALL
        .iter()
        .map(|&class| tares.tare(class) * cage_allocation.count(class))
        .sum();

    LoadStatistics {
        stop_count: stops.len(),
        total_pet_weight,
        average_pet_weight: total_pet_weight / stops.len(),
        cage_allocation,
        total_tare_weight,
        total_weight: total_pet_weight + total_tare_weight,
    }
}

#[cfg(test)]
mod tests {
    use crate::test_utils::{example_stops, stop};

    use super::*;

    const DEFAULT_PET_WEIGHT: Kilograms = Kilograms::new(5.0);

    #[test]
    fn test_example_scenario() {
        let statistics = compute_load_statistics(
            &example_stops(),
            &CageTareTable::default(),
            DEFAULT_PET_WEIGHT,
        );

        assert_eq!(
            statistics.cage_allocation,
            CageAllocation {
                small: 1,
                medium: 0,
                large: 1
            }
        );
        assert_eq!(statistics.total_pet_weight, Kilograms::new(30.0));
        assert_eq!(statistics.average_pet_weight, Kilograms::new(15.0));
        assert_eq!(statistics.total_tare_weight, Kilograms::new(9.0));
        assert_eq!(statistics.total_weight, Kilograms::new(39.0));
    }

    #[test]
    fn test_empty_stops() {
        let statistics =
            compute_load_statistics(&[], &CageTareTable::default(), DEFAULT_PET_WEIGHT);

        assert_eq!(statistics, LoadStatistics::default());
        assert!(statistics.is_empty());
        assert_eq!(statistics.average_pet_weight, Kilograms::ZERO);
    }

    #[test]
    fn test_missing_pet_weight_uses_default() {
        let stops = vec![stop(1, "centro", None), stop(2, "centro", Some(9.0))];

        let statistics =
            compute_load_statistics(&stops, &CageTareTable::default(), DEFAULT_PET_WEIGHT);

        assert_eq!(statistics.total_pet_weight, Kilograms::new(14.0));
        assert_eq!(statistics.cage_allocation.small, 1);
        assert_eq!(statistics.cage_allocation.medium, 1);
    }

    #[test]
    fn test_total_is_pets_plus_tare() {
        let weights = [0.3, 7.9, 8.0, 8.1, 13.37, 19.99, 20.0, 20.01, 33.3, 61.7];
        let stops: Vec<Stop> = weights
            .iter()
            .enumerate()
            .map(|(i, &kg)| stop(i as u64, "centro", Some(kg)))
            .collect();
        let tares = CageTareTable {
            small: Kilograms::new(2.35),
            medium: Kilograms::new(4.15),
            large: Kilograms::new(6.55),
        };

        for end in 0..=stops.len() {
            let statistics = compute_load_statistics(&stops[..end], &tares, DEFAULT_PET_WEIGHT);

            assert_eq!(
                statistics.total_weight,
                statistics.total_pet_weight + statistics.total_tare_weight
            );
            assert_eq!(statistics.cage_allocation.total(), end);
        }
    }
}
