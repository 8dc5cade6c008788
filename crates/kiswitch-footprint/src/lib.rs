//! Footprint model: layers, pads, drawing shapes and the footprint aggregate,
//! plus the pad / mount-hole factories and the `.kicad_mod` writer.

pub mod factory;
pub mod footprint;
pub mod kicad;
pub mod layer;
pub mod pad;
pub mod shape;

pub use factory::{MountHole, PadSpec, SwitchPadKind};
pub use footprint::{Attribute, Footprint};
pub use layer::{Layer, LayerRole};
pub use pad::{Drill, Pad, PadShape, PadType};
pub use shape::{Shape, TextKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FootprintError {
    #[error("\"{0}\" is not a switch pad type (expected regular, masked or small_top)")]
    InvalidPadType(String),
    #[error("unknown layer \"{0}\"")]
    UnknownLayer(String),
}
