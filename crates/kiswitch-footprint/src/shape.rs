use kiswitch_core::{Vec2, Vec3};
use serde::Serialize;

use crate::{Layer, Pad};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
    Reference,
    Value,
    User,
}

/// Every primitive a footprint is assembled from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Shape {
    /// Axis-aligned rectangle outline between two corners.
    Rect {
        start: Vec2,
        end: Vec2,
        layer: Layer,
        width: Option<f64>,
    },
    Line {
        start: Vec2,
        end: Vec2,
        layer: Layer,
        width: Option<f64>,
    },
    /// Arc around `center` beginning at `start`, sweeping `angle` degrees.
    Arc {
        center: Vec2,
        start: Vec2,
        angle: f64,
        layer: Layer,
        width: Option<f64>,
    },
    /// Open chain of segments; closed when the first point repeats last.
    PolyLine {
        points: Vec<Vec2>,
        layer: Layer,
        width: Option<f64>,
    },
    Pad(Pad),
    Text {
        kind: TextKind,
        text: String,
        at: Vec2,
        layer: Layer,
    },
    Model {
        path: String,
        at: Vec3,
        scale: Vec3,
        rotate: Vec3,
    },
}

impl Shape {
    pub fn layer(&self) -> Option<Layer> {
        match self {
            Shape::Rect { layer, .. }
            | Shape::Line { layer, .. }
            | Shape::Arc { layer, .. }
            | Shape::PolyLine { layer, .. }
            | Shape::Text { layer, .. } => Some(*layer),
            Shape::Pad(_) | Shape::Model { .. } => None,
        }
    }

    /// Stroke width, falling back to the layer default.
    pub fn stroke_width(&self) -> Option<f64> {
        match self {
            Shape::Rect { layer, width, .. }
            | Shape::Line { layer, width, .. }
            | Shape::Arc { layer, width, .. }
            | Shape::PolyLine { layer, width, .. } => {
                Some(width.unwrap_or_else(|| layer.default_width()))
            }
            _ => None,
        }
    }

    pub fn as_pad(&self) -> Option<&Pad> {
        match self {
            Shape::Pad(p) => Some(p),
            _ => None,
        }
    }

    pub fn points(&self) -> Option<&[Vec2]> {
        match self {
            Shape::PolyLine { points, .. } => Some(points),
            _ => None,
        }
    }
}

impl From<Pad> for Shape {
    fn from(p: Pad) -> Self {
        Shape::Pad(p)
    }
}
