//! Sampled Braking Curve

use serde::{Deserialize, Serialize};

/// State of the vehicle at one instant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicSample {
    /// Time since braking started (s)
    pub time_s: f64,
    /// Remaining velocity (m/s)
    pub velocity_ms: f64,
    /// Distance covered since braking started (m)
    pub distance_m: f64,
}

/// Braking curve from full speed at t = 0 to standstill at `stop_time_s`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicSeries {
    /// Evenly spaced samples, first at t = 0, last at `stop_time_s`
    pub samples: Vec<KinematicSample>,
    /// Deceleration magnitude (m/s^2)
    pub deceleration: f64,
    /// Initial velocity divided by deceleration (s)
    pub stop_time_s: f64,
    /// Distance covered at `stop_time_s` (m)
    pub stop_distance_m: f64,
}

impl KinematicSeries {
    /// Sample the curve `v(t) = v0 - a*t`, `s(t) = v0*t - a*t^2/2`.
    ///
    /// `deceleration` must be finite and positive, `velocity_ms` non-negative.
    pub(crate) fn sample(initial_velocity: f64, deceleration: f64, count: usize) -> Self {
        let stop_time_s = initial_velocity / deceleration;
        let distance_at = |t: f64| initial_velocity * t - 0.5 * deceleration * t * t;
        let last = count - 1;

        let samples = (0..count)
            .map(|i| {
                if i == last {
                    return KinematicSample {
                        time_s: stop_time_s,
                        velocity_ms: 0.0,
                        distance_m: distance_at(stop_time_s),
                    };
                }
                let time_s = stop_time_s * i as f64 / last as f64;
                KinematicSample {
                    time_s,
                    velocity_ms: (initial_velocity - deceleration * time_s).max(0.0),
                    distance_m: distance_at(time_s),
                }
            })
            .collect();

        Self {
            samples,
            deceleration,
            stop_time_s,
            stop_distance_m: distance_at(stop_time_s),
        }
    }
}
