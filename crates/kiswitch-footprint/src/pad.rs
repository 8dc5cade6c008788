use kiswitch_core::Vec2;
use serde::Serialize;

use crate::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PadType {
    ThroughHole,
    Smd,
    NonPlated,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PadShape {
    Circle,
    Oval,
    Rect,
    /// Rounded rectangle with an absolute corner radius (mm).
    RoundRect { radius: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Drill {
    Round(f64),
    Oval(Vec2),
}

impl Drill {
    pub fn size(self) -> Vec2 {
        match self {
            Drill::Round(d) => Vec2::splat(d),
            Drill::Oval(v) => v,
        }
    }
}

impl From<f64> for Drill {
    fn from(d: f64) -> Self {
        Drill::Round(d)
    }
}

impl From<[f64; 2]> for Drill {
    fn from(v: [f64; 2]) -> Self {
        Drill::Oval(Vec2::from(v))
    }
}

/// One copper / mask / paste contact or a bare drilled hole.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pad {
    pub number: Option<String>,
    pub pad_type: PadType,
    pub shape: PadShape,
    pub at: Vec2,
    pub rotation: f64,
    pub size: Vec2,
    pub drill: Option<Drill>,
    /// Offset of the copper relative to the drill.
    pub offset: Vec2,
    pub layers: Vec<Layer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solder_mask_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solder_paste_margin: Option<f64>,
}

impl Pad {
    /// Surface pad with no number and no margins.
    pub fn smd(shape: PadShape, at: Vec2, size: Vec2, layers: &[Layer]) -> Self {
        Self {
            number: None,
            pad_type: PadType::Smd,
            shape,
            at,
            rotation: 0.0,
            size,
            drill: None,
            offset: Vec2::ZERO,
            layers: layers.to_vec(),
            solder_mask_margin: None,
            solder_paste_margin: None,
        }
    }

    #[must_use]
    pub fn numbered(mut self, number: impl ToString) -> Self {
        self.number = Some(number.to_string());
        self
    }

    pub fn is_on(&self, layer: Layer) -> bool {
        self.layers.contains(&layer)
    }
}
