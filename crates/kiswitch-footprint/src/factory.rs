//! Factories that expand one logical mounting or soldering feature into pads.

use std::str::FromStr;

use kiswitch_core::Vec2;

use crate::layer::sets;
use crate::{Drill, FootprintError, Pad, PadShape, PadType};

const DEFAULT_MASK_MARGIN: f64 = 0.05;
const DEFAULT_SMALL_TOP_RING: f64 = 0.13;

/// Non-plated mechanical hole. The pad is exactly the drill unless a size is given.
#[derive(Debug, Clone, PartialEq)]
pub struct MountHole {
    pub at: Vec2,
    pub drill: Drill,
    pub shape: PadShape,
    pub size: Option<Vec2>,
}

impl MountHole {
    pub fn new(at: Vec2, drill: impl Into<Drill>) -> Self {
        Self {
            at,
            drill: drill.into(),
            shape: PadShape::Circle,
            size: None,
        }
    }

    #[must_use]
    pub fn shape(mut self, shape: PadShape) -> Self {
        self.shape = shape;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Vec2) -> Self {
        self.size = Some(size);
        self
    }

    pub fn build(&self) -> Pad {
        Pad {
            number: None,
            pad_type: PadType::NonPlated,
            shape: self.shape,
            at: self.at,
            rotation: 0.0,
            size: self.size.unwrap_or_else(|| self.drill.size()),
            drill: Some(self.drill),
            offset: Vec2::ZERO,
            layers: sets::NPTH.to_vec(),
            solder_mask_margin: None,
            solder_paste_margin: None,
        }
    }
}

/// How a switch pin's through-hole pad is realised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwitchPadKind {
    /// A single plated through-hole on every copper and mask layer.
    #[default]
    Regular,
    /// Through-hole kept out of the front mask, plus a front-mask-only opening
    /// of drill + margin.
    Masked,
    /// Through-hole on the back only, plus a front pad of drill + annular ring.
    SmallTop,
}

impl SwitchPadKind {
    pub fn tag(self) -> &'static str {
        match self {
            SwitchPadKind::Regular => "regular",
            SwitchPadKind::Masked => "masked",
            SwitchPadKind::SmallTop => "small_top",
        }
    }
}

impl FromStr for SwitchPadKind {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(SwitchPadKind::Regular),
            "masked" => Ok(SwitchPadKind::Masked),
            "small_top" | "small-top-ring" => Ok(SwitchPadKind::SmallTop),
            other => Err(FootprintError::InvalidPadType(other.to_string())),
        }
    }
}

/// Request for one switch pin pad.
#[derive(Debug, Clone, PartialEq)]
pub struct PadSpec {
    pub kind: SwitchPadKind,
    pub number: Option<String>,
    pub shape: PadShape,
    pub at: Vec2,
    pub size: Vec2,
    pub drill: Drill,
    pub rotation: f64,
    pub offset: Vec2,
    pub solder_mask_margin: Option<f64>,
    pub annular_ring: Option<f64>,
}

impl PadSpec {
    /// Round through-hole pad of diameter `size` around a `drill` hole.
    pub fn circle(at: Vec2, size: f64, drill: f64) -> Self {
        Self {
            kind: SwitchPadKind::Regular,
            number: None,
            shape: PadShape::Circle,
            at,
            size: Vec2::splat(size),
            drill: Drill::Round(drill),
            rotation: 0.0,
            offset: Vec2::ZERO,
            solder_mask_margin: None,
            annular_ring: None,
        }
    }

    #[must_use]
    pub fn number(mut self, number: impl ToString) -> Self {
        self.number = Some(number.to_string());
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: SwitchPadKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn shape(mut self, shape: PadShape, size: Vec2) -> Self {
        self.shape = shape;
        self.size = size;
        self
    }

    #[must_use]
    pub fn drill(mut self, drill: impl Into<Drill>) -> Self {
        self.drill = drill.into();
        self
    }

    #[must_use]
    pub fn rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    #[must_use]
    pub fn offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    #[must_use]
    pub fn solder_mask_margin(mut self, margin: f64) -> Self {
        self.solder_mask_margin = Some(margin);
        self
    }

    #[must_use]
    pub fn annular_ring(mut self, ring: f64) -> Self {
        self.annular_ring = Some(ring);
        self
    }

    fn through_hole(&self, layers: &[crate::Layer]) -> Pad {
        Pad {
            number: self.number.clone(),
            pad_type: PadType::ThroughHole,
            shape: self.shape,
            at: self.at,
            rotation: self.rotation,
            size: self.size,
            drill: Some(self.drill),
            offset: self.offset,
            layers: layers.to_vec(),
            solder_mask_margin: self.solder_mask_margin,
            solder_paste_margin: None,
        }
    }

    /// Expand into the concrete pads for this kind: one for `Regular`, two otherwise.
    pub fn expand(&self) -> Vec<Pad> {
        match self.kind {
            SwitchPadKind::Regular => vec![self.through_hole(sets::THT)],
            SwitchPadKind::Masked => {
                let margin = self.solder_mask_margin.unwrap_or(DEFAULT_MASK_MARGIN);
                let opening = Pad {
                    pad_type: PadType::Smd,
                    size: self.drill.size() + Vec2::splat(margin),
                    drill: None,
                    offset: Vec2::ZERO,
                    ..self.through_hole(sets::FRONT_MASK)
                };
                vec![self.through_hole(sets::MASKED_FRONT), opening]
            }
            SwitchPadKind::SmallTop => {
                let ring = self.annular_ring.unwrap_or(DEFAULT_SMALL_TOP_RING);
                let top = Pad {
                    size: self.drill.size() + Vec2::splat(ring),
                    offset: Vec2::ZERO,
                    ..self.through_hole(sets::FRONT)
                };
                vec![self.through_hole(sets::BACK), top]
            }
        }
    }
}
