//! Friction Resolution with Dry Concrete Fallback

use crate::table::{FrictionTable, DRY_CONCRETE};
use param_validator::{RoadCondition, RoadType};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

/// Diagnostic for an unsupported pair that was replaced by the dry concrete default
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Combination of Road_Type {road_type} and Condition {condition} is not supported, \
     Road_Type is set to concrete and the dry concrete coefficient is used"
)]
pub struct ResolutionFallback {
    pub road_type: RoadType,
    pub condition: RoadCondition,
}

/// Coefficient plus the road type every later stage must report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrictionResolution {
    pub coefficient: f64,
    /// Forced to concrete when the requested pair is unsupported
    pub road_type: RoadType,
    pub condition: RoadCondition,
    #[serde(skip)]
    pub fallback: Option<ResolutionFallback>,
}

impl FrictionResolution {
    /// Whether the requested pair had to be replaced
    pub fn fell_back(&self) -> bool {
        self.fallback.is_some()
    }
}

/// Resolves friction coefficients against a table
pub struct FrictionResolver {
    table: FrictionTable,
}

impl FrictionResolver {
    /// Create a resolver over the given table
    pub fn new(table: FrictionTable) -> Self {
        Self { table }
    }

    /// Look up the coefficient for a validated pair.
    ///
    /// The condition is reported unchanged even on fallback; only the road
    /// type is overridden.
    pub fn resolve(&self, road_type: RoadType, condition: RoadCondition) -> FrictionResolution {
        match self.table.get(road_type, condition) {
            Some(coefficient) => {
                debug!("Friction for {}/{}: {}", road_type, condition, coefficient);
                FrictionResolution {
                    coefficient,
                    road_type,
                    condition,
                    fallback: None,
                }
            }
            None => {
                let fallback = ResolutionFallback {
                    road_type,
                    condition,
                };
                warn!("{}", fallback);
                FrictionResolution {
                    coefficient: DRY_CONCRETE,
                    road_type: RoadType::Concrete,
                    condition,
                    fallback: Some(fallback),
                }
            }
        }
    }
}

impl Default for FrictionResolver {
    fn default() -> Self {
        Self::new(FrictionTable::standard())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_coefficients() {
        let resolver = FrictionResolver::default();
        let cases = [
            (RoadType::Concrete, RoadCondition::Dry, 0.50),
            (RoadType::Concrete, RoadCondition::Wet, 0.35),
            (RoadType::Ice, RoadCondition::Dry, 0.15),
            (RoadType::Ice, RoadCondition::Wet, 0.08),
            (RoadType::Water, RoadCondition::Aquaplaning, 0.05),
            (RoadType::Gravel, RoadCondition::Dry, 0.35),
            (RoadType::Sand, RoadCondition::Dry, 0.30),
        ];
        for (road, condition, expected) in cases {
            let resolution = resolver.resolve(road, condition);
            assert_eq!(resolution.coefficient, expected);
            assert_eq!(resolution.road_type, road);
            assert_eq!(resolution.condition, condition);
            assert!(!resolution.fell_back());
        }
    }

    #[test]
    fn test_gravel_wet_falls_back() {
        let resolution = FrictionResolver::default().resolve(RoadType::Gravel, RoadCondition::Wet);
        assert_eq!(resolution.coefficient, 0.50);
        assert_eq!(resolution.road_type, RoadType::Concrete);
        assert_eq!(resolution.condition, RoadCondition::Wet);
        assert_eq!(
            resolution.fallback,
            Some(ResolutionFallback {
                road_type: RoadType::Gravel,
                condition: RoadCondition::Wet,
            })
        );
    }

    #[test]
    fn test_water_dry_falls_back() {
        let resolution = FrictionResolver::default().resolve(RoadType::Water, RoadCondition::Dry);
        assert_eq!(resolution.coefficient, 0.50);
        assert_eq!(resolution.road_type, RoadType::Concrete);
        assert!(resolution.fell_back());
    }

    #[test]
    fn test_every_unsupported_pair_falls_back() {
        let resolver = FrictionResolver::default();
        let table = FrictionTable::standard();
        let mut fallbacks = 0;
        for road in RoadType::ALL {
            for condition in RoadCondition::ALL {
                if table.get(road, condition).is_none() {
                    let resolution = resolver.resolve(road, condition);
                    assert_eq!(resolution.coefficient, DRY_CONCRETE);
                    assert_eq!(resolution.road_type, RoadType::Concrete);
                    fallbacks += 1;
                }
            }
        }
        assert_eq!(fallbacks, 15 - 7);
    }

    #[test]
    fn test_fallback_message_names_pair() {
        let message = ResolutionFallback {
            road_type: RoadType::Ice,
            condition: RoadCondition::Aquaplaning,
        }
        .to_string();
        assert!(message.contains("ice"));
        assert!(message.contains("aquaplaning"));
    }
}
