//! Rule-of-Thumb Stopping Distance
//!
//! Driver-education heuristic computed from speed alone. Mass, road surface,
//! road condition and inclination are deliberately ignored.

mod estimator;

pub use estimator::{RuleOfThumb, ThumbBreakdown, ThumbEstimate, ThumbEstimates, ThumbVariant};
