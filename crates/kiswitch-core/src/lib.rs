//! Point algebra shared by every footprint crate.

mod point;

pub use point::{Vec2, Vec3, round_to};

/// Precision every generated outline coordinate is snapped to (mm).
pub const GRID: f64 = 0.001;
