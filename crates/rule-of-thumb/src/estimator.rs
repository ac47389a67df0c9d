//! Rule-of-Thumb Estimator

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

const MS_TO_KMH: f64 = 3.6;

/// Which braking-distance variant of the heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThumbVariant {
    /// Ordinary braking: (km/h / 10)^2
    Normal,
    /// Emergency braking: half of the normal braking distance
    Danger,
}

impl fmt::Display for ThumbVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThumbVariant::Normal => f.write_str("normal"),
            ThumbVariant::Danger => f.write_str("danger"),
        }
    }
}

/// Intermediate distances of the heuristic (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbBreakdown {
    /// Speed converted to km/h
    pub speed_kmh: f64,
    /// (km/h / 10)^2
    pub normal_braking_m: f64,
    /// Half of the normal braking distance
    pub danger_braking_m: f64,
    /// (km/h / 10) * 3
    pub reaction_m: f64,
}

/// Stopping distance and display ramp for one variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbEstimate {
    pub variant: ThumbVariant,
    /// Braking plus reaction distance (m)
    pub stop_distance_m: f64,
    /// Stop distance covered at the initial speed (s)
    pub stop_time_s: f64,
    /// Evenly spaced times over [0, stop_time_s]
    pub times: Vec<f64>,
    /// Linear ramp from 0 to stop_distance_m
    pub distances: Vec<f64>,
}

/// Both variants for one initial speed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThumbEstimates {
    pub breakdown: ThumbBreakdown,
    pub normal: ThumbEstimate,
    pub danger: ThumbEstimate,
}

/// Rule-of-thumb estimator with a fixed ramp length
#[derive(Debug, Clone)]
pub struct RuleOfThumb {
    points: usize,
}

impl RuleOfThumb {
    /// Create an estimator producing `points` ramp samples (at least two)
    pub fn new(points: usize) -> Self {
        Self {
            points: points.max(2),
        }
    }

    /// Heuristic distances for a speed in m/s
    pub fn breakdown(velocity_ms: f64) -> ThumbBreakdown {
        let speed_kmh = velocity_ms * MS_TO_KMH;
        let tenth = speed_kmh / 10.0;
        let normal_braking_m = tenth * tenth;
        ThumbBreakdown {
            speed_kmh,
            normal_braking_m,
            danger_braking_m: normal_braking_m * 0.5,
            reaction_m: tenth * 3.0,
        }
    }

    /// Estimate both variants for a speed in m/s
    pub fn estimate(&self, velocity_ms: f64) -> ThumbEstimates {
        let breakdown = Self::breakdown(velocity_ms);
        let normal = self.variant(
            ThumbVariant::Normal,
            breakdown.normal_braking_m + breakdown.reaction_m,
            breakdown.speed_kmh,
        );
        let danger = self.variant(
            ThumbVariant::Danger,
            breakdown.danger_braking_m + breakdown.reaction_m,
            breakdown.speed_kmh,
        );

        debug!(
            "Rule of thumb at {:.1} km/h: normal {:.2} m / {:.2} s, danger {:.2} m / {:.2} s",
            breakdown.speed_kmh,
            normal.stop_distance_m,
            normal.stop_time_s,
            danger.stop_distance_m,
            danger.stop_time_s
        );

        ThumbEstimates {
            breakdown,
            normal,
            danger,
        }
    }

    fn variant(
        &self,
        variant: ThumbVariant,
        stop_distance_m: f64,
        speed_kmh: f64,
    ) -> ThumbEstimate {
        // Average-speed assumption; a standing vehicle needs no time
        let speed_ms = speed_kmh / MS_TO_KMH;
        let stop_time_s = if speed_ms == 0.0 {
            0.0
        } else {
            stop_distance_m / speed_ms
        };

        ThumbEstimate {
            variant,
            stop_distance_m,
            stop_time_s,
            times: self.ramp(stop_time_s),
            distances: self.ramp(stop_distance_m),
        }
    }

    fn ramp(&self, end: f64) -> Vec<f64> {
        let last = self.points - 1;
        (0..self.points)
            .map(|i| {
                if i == last {
                    end
                } else {
                    end * i as f64 / last as f64
                }
            })
            .collect()
    }
}

impl Default for RuleOfThumb {
    fn default() -> Self {
        Self::new(50)
    }
}
