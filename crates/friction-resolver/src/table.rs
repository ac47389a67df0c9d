//! Static Friction Table

use param_validator::{RoadCondition, RoadType};
use serde::Serialize;

/// Coefficient used for every unsupported combination
pub const DRY_CONCRETE: f64 = 0.50;

/// One supported surface combination
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrictionEntry {
    pub road_type: RoadType,
    pub condition: RoadCondition,
    pub coefficient: f64,
}

const fn entry(road_type: RoadType, condition: RoadCondition, coefficient: f64) -> FrictionEntry {
    FrictionEntry {
        road_type,
        condition,
        coefficient,
    }
}

/// The seven supported combinations. Not a full cross product.
static ENTRIES: [FrictionEntry; 7] = [
    entry(RoadType::Concrete, RoadCondition::Dry, DRY_CONCRETE),
    entry(RoadType::Concrete, RoadCondition::Wet, 0.35),
    entry(RoadType::Ice, RoadCondition::Dry, 0.15),
    entry(RoadType::Ice, RoadCondition::Wet, 0.08),
    entry(RoadType::Water, RoadCondition::Aquaplaning, 0.05),
    entry(RoadType::Gravel, RoadCondition::Dry, 0.35),
    entry(RoadType::Sand, RoadCondition::Dry, 0.30),
];

/// Read-only view over the supported combinations
#[derive(Debug, Clone, Copy)]
pub struct FrictionTable {
    entries: &'static [FrictionEntry],
}

impl FrictionTable {
    /// The built-in table
    pub fn standard() -> Self {
        Self { entries: &ENTRIES }
    }

    /// Exact lookup, `None` for unsupported pairs
    pub fn get(&self, road_type: RoadType, condition: RoadCondition) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.road_type == road_type && e.condition == condition)
            .map(|e| e.coefficient)
    }

    /// All supported entries
    pub fn entries(&self) -> &'static [FrictionEntry] {
        self.entries
    }
}

impl Default for FrictionTable {
    fn default() -> Self {
        Self::standard()
    }
}
