//! 2D outline geometry: polygon offsetting and simple outline builders.

pub mod offset;
pub mod primitives;

pub use offset::offset_polygon;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
}
