//! Friction Coefficient Resolution
//!
//! Maps a (road type, road condition) pair to a friction coefficient using a
//! fixed table. Pairs outside the table fall back to dry concrete.

mod resolver;
mod table;

pub use resolver::{FrictionResolution, FrictionResolver, ResolutionFallback};
pub use table::{FrictionEntry, FrictionTable, DRY_CONCRETE};
