//! Switch footprint composition.
//!
//! Every family is a [`Blueprint`] of assembly phases over a typed config
//! parsed from a [`kiswitch_params::Schema`]. [`Request`] turns a family name
//! plus raw `key=value` arguments into finished footprints, optionally one per
//! keycap size, and [`Manifest`] batches requests into library groups.

mod blueprint;
mod common;
mod family;
pub mod families;
mod library;
mod request;

use kiswitch_geometry::GeometryError;
use kiswitch_keycap::KeycapError;
use kiswitch_params::ParamError;

pub use blueprint::{Blueprint, Phase};
pub use common::{Assembled, CommonConfig, Cutout, HoleLayout, PinLayout, PATH3D};
pub use family::SwitchFamily;
pub use library::{GroupOutput, GroupSpec, Job, Manifest, Scalar};
pub use request::Request;

#[derive(Debug, thiserror::Error)]
pub enum SwitchError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("unsupported configuration: {0}")]
    Unsupported(String),
    #[error("unknown switch family \"{0}\"")]
    UnknownFamily(String),
    #[error("unknown keycap size \"{0}\"")]
    UnknownKeycapSize(String),
    #[error(transparent)]
    Keycap(KeycapError),
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    #[error("invalid manifest: {0}")]
    Manifest(#[from] serde_yaml::Error),
}

impl From<KeycapError> for SwitchError {
    fn from(e: KeycapError) -> Self {
        match e {
            KeycapError::UnknownSize(size) => SwitchError::UnknownKeycapSize(size),
            KeycapError::Param(p) => SwitchError::Param(p),
            other => SwitchError::Keycap(other),
        }
    }
}
