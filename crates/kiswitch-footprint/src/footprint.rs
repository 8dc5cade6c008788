use kiswitch_core::{Vec2, Vec3};
use kiswitch_geometry::primitives;
use serde::Serialize;

use crate::{Layer, MountHole, Pad, PadSpec, Shape, TextKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    #[default]
    ThroughHole,
    Smd,
    Virtual,
}

impl Attribute {
    /// KiCad `attr` keyword; through-hole is implicit and has none.
    pub fn kicad_keyword(self) -> Option<&'static str> {
        match self {
            Attribute::ThroughHole => None,
            Attribute::Smd => Some("smd"),
            Attribute::Virtual => Some("virtual"),
        }
    }
}

/// The assembled footprint: identity strings plus the ordered shape list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Footprint {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub attribute: Attribute,
    pub shapes: Vec<Shape>,
}

fn normalize_name(s: &str) -> String {
    s.replace(' ', "_")
}

impl Footprint {
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize_name(name),
            description: String::new(),
            tags: String::new(),
            attribute: Attribute::default(),
            shapes: Vec::new(),
        }
    }

    /// `name += "_" + s`. Empty input leaves the name untouched.
    pub fn append_name(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        self.name.push('_');
        self.name.push_str(&normalize_name(s));
    }

    pub fn append_description(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if !self.description.is_empty() {
            self.description.push(' ');
        }
        self.description.push_str(s);
    }

    pub fn append_tags(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if !self.tags.is_empty() {
            self.tags.push(' ');
        }
        self.tags.push_str(s);
    }

    pub fn push(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    pub fn push_pads(&mut self, spec: &PadSpec) {
        self.shapes.extend(spec.expand().into_iter().map(Shape::Pad));
    }

    pub fn push_mount_hole(&mut self, hole: &MountHole) {
        self.push(hole.build());
    }

    /// Rectangle of `w` x `h` centered on the origin, grown by `margin` on every side.
    pub fn center_rect(&mut self, w: f64, h: f64, layer: Layer, width: Option<f64>, margin: f64) {
        let (start, end) = primitives::inflate(
            Vec2::new(-w / 2.0, -h / 2.0),
            Vec2::new(w / 2.0, h / 2.0),
            margin,
        );
        self.push(Shape::Rect {
            start,
            end,
            layer,
            width,
        });
    }

    pub fn polyline(&mut self, points: Vec<Vec2>, layer: Layer, width: Option<f64>) {
        self.push(Shape::PolyLine {
            points,
            layer,
            width,
        });
    }

    pub fn line(&mut self, start: Vec2, end: Vec2, layer: Layer, width: Option<f64>) {
        self.push(Shape::Line {
            start,
            end,
            layer,
            width,
        });
    }

    pub fn arc(&mut self, center: Vec2, start: Vec2, angle: f64, layer: Layer, width: Option<f64>) {
        self.push(Shape::Arc {
            center,
            start,
            angle,
            layer,
            width,
        });
    }

    pub fn text(&mut self, kind: TextKind, text: impl Into<String>, at: Vec2, layer: Layer) {
        self.push(Shape::Text {
            kind,
            text: text.into(),
            at,
            layer,
        });
    }

    pub fn model(&mut self, path: impl Into<String>) {
        self.push(Shape::Model {
            path: path.into(),
            at: Vec3::ZERO,
            scale: Vec3::ONE,
            rotate: Vec3::ZERO,
        });
    }

    pub fn pads(&self) -> impl Iterator<Item = &Pad> {
        self.shapes.iter().filter_map(Shape::as_pad)
    }

    pub fn on_layer(&self, layer: Layer) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().filter(move |s| s.layer() == Some(layer))
    }

    /// Fold another footprint in: its name becomes a suffix, its strings are
    /// appended and its shapes follow ours.
    pub fn merge(&mut self, other: Footprint) {
        self.append_name(&other.name);
        self.append_description(&other.description);
        self.append_tags(&other.tags);
        self.shapes.extend(other.shapes);
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::{PadType, SwitchPadKind};

    #[test]
    fn names_are_normalized() {
        let mut fp = Footprint::new("SW Cherry MX");
        fp.append_name("PCB Mount");
        assert_eq!(fp.name, "SW_Cherry_MX_PCB_Mount");
    }

    #[test]
    fn strings_join_with_spaces() {
        let mut fp = Footprint::new("X");
        fp.append_description("Cherry MX keyswitch");
        fp.append_description("PCB Mount");
        fp.append_tags("Cherry");
        fp.append_tags("");
        fp.append_tags("PCB");
        assert_eq!(fp.description, "Cherry MX keyswitch PCB Mount");
        assert_eq!(fp.tags, "Cherry PCB");
    }

    #[test]
    fn center_rect_with_margin() {
        let mut fp = Footprint::new("X");
        fp.center_rect(14.0, 14.0, Layer::FSilkS, None, 0.1);
        match &fp.shapes[0] {
            Shape::Rect { start, end, .. } => {
                assert_abs_diff_eq!(start.x, -7.1, epsilon = 1e-9);
                assert_abs_diff_eq!(start.y, -7.1, epsilon = 1e-9);
                assert_abs_diff_eq!(end.x, 7.1, epsilon = 1e-9);
                assert_abs_diff_eq!(end.y, 7.1, epsilon = 1e-9);
            }
            other => panic!("expected rect, got {other:?}"),
        }
        assert_eq!(fp.shapes[0].stroke_width(), Some(0.12));
    }

    #[test]
    fn push_pads_keeps_expansion_order() {
        let mut fp = Footprint::new("X");
        fp.push_pads(
            &PadSpec::circle(Vec2::ZERO, 2.5, 1.5)
                .number(1)
                .kind(SwitchPadKind::Masked),
        );
        let pads: Vec<_> = fp.pads().collect();
        assert_eq!(pads.len(), 2);
        assert_eq!(pads[0].pad_type, PadType::ThroughHole);
        assert_eq!(pads[1].pad_type, PadType::Smd);
    }

    #[test]
    fn merge_appends_after_own_shapes() {
        let mut sw = Footprint::new("SW_Cherry_MX");
        sw.append_tags("Cherry");
        sw.center_rect(14.0, 14.0, Layer::FFab, None, 0.0);
        let mut cap = Footprint::new("1.00u");
        cap.append_tags("Keycap 1.00u");
        cap.center_rect(19.05, 19.05, Layer::DwgsUser, Some(0.1), 0.0);
        sw.merge(cap);
        assert_eq!(sw.name, "SW_Cherry_MX_1.00u");
        assert_eq!(sw.tags, "Cherry Keycap 1.00u");
        assert_eq!(sw.shapes.len(), 2);
        assert_eq!(sw.shapes[1].layer(), Some(Layer::DwgsUser));
    }
}
