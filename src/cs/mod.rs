//! Coordinate system model
//!
//! Axes with their directions and units, and the coordinate-system
//! container variants with fixed axis arities.

pub mod axis;
pub mod system;

pub use axis::{AxisDirection, CoordinateSystemAxis};
pub use system::{CoordinateSystem, TemporalCsKind};
