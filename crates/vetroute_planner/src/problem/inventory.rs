use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::problem::{
    cage::{CageClass, CageTareTable},
    kilograms::Kilograms,
};

const SMALL_CAGE_NAMES: [&str; 4] = ["jaula pequeña", "jaula pequena", "cage small", "small cage"];
const MEDIUM_CAGE_NAMES: [&str; 3] = ["jaula mediana", "cage medium", "medium cage"];
const LARGE_CAGE_NAMES: [&str; 3] = ["jaula grande", "cage large", "large cage"];

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct InventoryItem {
    pub name: String,
    pub weight_kg: f64,

    /// Structured records carry their class, legacy ones only a free text name.
    #[serde(default)]
    pub cage_class: Option<CageClass>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, weight_kg: f64) -> Self {
        Self {
            name: name.into(),
            weight_kg,
            cage_class: None,
        }
    }

    pub fn with_cage_class(mut self, cage_class: CageClass) -> Self {
        self.cage_class = Some(cage_class);
        self
    }

    fn tare(&self) -> Option<Kilograms> {
        (self.weight_kg.is_finite() && self.weight_kg >= 0.0).then(|| Kilograms::new(self.weight_kg))
    }
}

/// Guesses the cage class from a free text item name.
pub fn match_cage_class(name: &str) -> Option<CageClass> {
    let name = name.to_lowercase();
    let matches = |patterns: &[&str]| patterns.iter().any(|pattern| name.contains(pattern));

    if matches(&SMALL_CAGE_NAMES) {
        Some(CageClass::Small)
    } else if matches(&MEDIUM_CAGE_NAMES) {
        Some(CageClass::Medium)
    } else if matches(&LARGE_CAGE_NAMES) {
        Some(CageClass::Large)
    } else {
        None
    }
}

/// Builds the tare table from inventory. Explicit classes take precedence over
/// name matching; the first item found for a class wins and misses keep `fallback`.
pub fn resolve_cage_tares(items: &[InventoryItem], fallback: &CageTareTable) -> CageTareTable {
    let mut resolved: [Option<Kilograms>; 3] = [None; 3];

    let explicit = items
        .iter()
        .filter_map(|item| Some((item.cage_class?, item.tare()?)));
    let by_name = items
        .iter()
        .filter(|item| item.cage_class.is_none())
        .filter_map(|item| Some((match_cage_class(&item.name)?, item.tare()?)));

    for (class, tare) in explicit.chain(by_name) {
        let slot = &mut resolved[class_slot(class)];
        if slot.is_none() {
            *slot = Some(tare);
        }
    }

    let mut table = *fallback;
    for class in CageClass::ALL {
        match resolved[class_slot(class)] {
            Some(tare) => table.set_tare(class, tare),
            None => debug!("No inventory item for {} cage, using {}", class, table.tare(class)),
        }
    }

    table
}

fn class_slot(class: CageClass) -> usize {
    match class {
        CageClass::Small => 0,
        CageClass::Medium => 1,
        CageClass::Large => 2,
    }
}
