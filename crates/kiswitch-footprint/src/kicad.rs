//! `.kicad_mod` writer for the KiCad 5 `module` dialect.
//!
//! The timestamp is always `(tedit 0)` so regenerated libraries diff cleanly.

use std::fmt::{self, Display, Formatter};

use kiswitch_core::{Vec2, Vec3};

use crate::{Drill, Footprint, Layer, Pad, PadShape, PadType, Shape, TextKind};

const FONT: &str = "(effects (font (size 1 1) (thickness 0.15)))";

/// Render `fp` as a complete `.kicad_mod` document.
pub fn to_kicad_mod(fp: &Footprint) -> String {
    KicadMod(fp).to_string()
}

/// Display adapter producing the S-expression text of a footprint.
pub struct KicadMod<'a>(pub &'a Footprint);

fn fmt_num(v: f64) -> String {
    let v = if v.abs() < 1e-9 { 0.0 } else { v };
    let s = format!("{v:.6}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn xy(v: Vec2) -> String {
    format!("{} {}", fmt_num(v.x), fmt_num(v.y))
}

fn xyz(v: Vec3) -> String {
    format!("(xyz {} {} {})", fmt_num(v.x), fmt_num(v.y), fmt_num(v.z))
}

/// Bare atom when safe, double-quoted otherwise.
fn atom(s: &str) -> String {
    let bare = !s.is_empty()
        && s
            .chars()
            .all(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '"' | '\\'));
    if bare {
        s.to_string()
    } else {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    }
}

fn segments(f: &mut Formatter<'_>, points: &[Vec2], layer: Layer, width: f64) -> fmt::Result {
    for pair in points.windows(2) {
        fp_line(f, pair[0], pair[1], layer, width)?;
    }
    Ok(())
}

fn fp_line(f: &mut Formatter<'_>, start: Vec2, end: Vec2, layer: Layer, width: f64) -> fmt::Result {
    writeln!(
        f,
        "  (fp_line (start {}) (end {}) (layer {}) (width {}))",
        xy(start),
        xy(end),
        layer,
        fmt_num(width)
    )
}

fn pad(f: &mut Formatter<'_>, p: &Pad) -> fmt::Result {
    let kind = match p.pad_type {
        PadType::ThroughHole => "thru_hole",
        PadType::Smd => "smd",
        PadType::NonPlated => "np_thru_hole",
    };
    let shape = match p.shape {
        PadShape::Circle => "circle",
        PadShape::Oval => "oval",
        PadShape::Rect => "rect",
        PadShape::RoundRect { .. } => "roundrect",
    };
    let number = atom(p.number.as_deref().unwrap_or(""));
    write!(f, "  (pad {number} {kind} {shape} (at {}", xy(p.at))?;
    if p.rotation != 0.0 {
        write!(f, " {}", fmt_num(p.rotation))?;
    }
    write!(f, ") (size {})", xy(p.size))?;
    if let Some(drill) = p.drill {
        match drill {
            Drill::Round(d) => write!(f, " (drill {}", fmt_num(d))?,
            Drill::Oval(d) => write!(f, " (drill oval {}", xy(d))?,
        }
        if p.offset != Vec2::ZERO {
            write!(f, " (offset {})", xy(p.offset))?;
        }
        write!(f, ")")?;
    }
    let layers: Vec<&str> = p.layers.iter().map(|l| l.name()).collect();
    write!(f, " (layers {})", layers.join(" "))?;
    if let PadShape::RoundRect { radius } = p.shape {
        let short = p.size.x.min(p.size.y);
        let ratio = if short > 0.0 { (radius / short).min(0.5) } else { 0.0 };
        write!(f, " (roundrect_rratio {})", fmt_num(ratio))?;
    }
    if let Some(m) = p.solder_mask_margin {
        write!(f, " (solder_mask_margin {})", fmt_num(m))?;
    }
    if let Some(m) = p.solder_paste_margin {
        write!(f, " (solder_paste_margin {})", fmt_num(m))?;
    }
    writeln!(f, ")")
}

impl Display for KicadMod<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let fp = self.0;
        writeln!(f, "(module {} (layer F.Cu) (tedit 0)", atom(&fp.name))?;
        if !fp.description.is_empty() {
            writeln!(f, "  (descr {})", atom(&fp.description))?;
        }
        if !fp.tags.is_empty() {
            writeln!(f, "  (tags {})", atom(&fp.tags))?;
        }
        if let Some(attr) = fp.attribute.kicad_keyword() {
            writeln!(f, "  (attr {attr})")?;
        }
        for shape in &fp.shapes {
            let width = shape.stroke_width().unwrap_or_default();
            match shape {
                Shape::Rect { start, end, layer, .. } => {
                    let corners = [
                        *start,
                        Vec2::new(end.x, start.y),
                        *end,
                        Vec2::new(start.x, end.y),
                        *start,
                    ];
                    segments(f, &corners, *layer, width)?;
                }
                Shape::Line { start, end, layer, .. } => fp_line(f, *start, *end, *layer, width)?,
                Shape::PolyLine { points, layer, .. } => segments(f, points, *layer, width)?,
                Shape::Arc {
                    center,
                    start,
                    angle,
                    layer,
                    ..
                } => writeln!(
                    f,
                    "  (fp_arc (start {}) (end {}) (angle {}) (layer {}) (width {}))",
                    xy(*center),
                    xy(*start),
                    fmt_num(*angle),
                    layer,
                    fmt_num(width)
                )?,
                Shape::Pad(p) => pad(f, p)?,
                Shape::Text { kind, text, at, layer } => {
                    let kind = match kind {
                        TextKind::Reference => "reference",
                        TextKind::Value => "value",
                        TextKind::User => "user",
                    };
                    writeln!(f, "  (fp_text {kind} {} (at {}) (layer {})", atom(text), xy(*at), layer)?;
                    writeln!(f, "    {FONT}")?;
                    writeln!(f, "  )")?;
                }
                Shape::Model {
                    path,
                    at,
                    scale,
                    rotate,
                } => {
                    writeln!(f, "  (model {}", atom(path))?;
                    writeln!(f, "    (at {})", xyz(*at))?;
                    writeln!(f, "    (scale {})", xyz(*scale))?;
                    writeln!(f, "    (rotate {})", xyz(*rotate))?;
                    writeln!(f, "  )")?;
                }
            }
        }
        writeln!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Attribute, MountHole, PadSpec, SwitchPadKind};

    #[test]
    fn numbers_are_trimmed() {
        assert_eq!(fmt_num(1.0), "1");
        assert_eq!(fmt_num(-0.0), "0");
        assert_eq!(fmt_num(-1e-12), "0");
        assert_eq!(fmt_num(9.525), "9.525");
        assert_eq!(fmt_num(-3.81), "-3.81");
        assert_eq!(fmt_num(0.1 + 0.2), "0.3");
    }

    #[test]
    fn atoms_quote_when_needed() {
        assert_eq!(atom("SW_Cherry_MX"), "SW_Cherry_MX");
        assert_eq!(atom("Cherry MX"), "\"Cherry MX\"");
        assert_eq!(atom(""), "\"\"");
        assert_eq!(atom("a\"b"), "\"a\\\"b\"");
    }

    #[test]
    fn header_and_attr() {
        let mut fp = Footprint::new("SW_Test");
        fp.append_description("Test switch");
        fp.append_tags("Test");
        fp.attribute = Attribute::Smd;
        let text = to_kicad_mod(&fp);
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("(module SW_Test (layer F.Cu) (tedit 0)"));
        assert_eq!(lines.next(), Some("  (descr \"Test switch\")"));
        assert_eq!(lines.next(), Some("  (tags Test)"));
        assert_eq!(lines.next(), Some("  (attr smd)"));
        assert_eq!(lines.next(), Some(")"));
    }

    #[test]
    fn rect_is_four_lines() {
        let mut fp = Footprint::new("R");
        fp.center_rect(2.0, 4.0, Layer::FFab, None, 0.0);
        let text = to_kicad_mod(&fp);
        assert_eq!(text.matches("(fp_line").count(), 4);
        assert!(text.contains("(fp_line (start -1 -2) (end 1 -2) (layer F.Fab) (width 0.1))"));
    }

    #[test]
    fn pads_render_drill_offset_and_layers() {
        let mut fp = Footprint::new("P");
        fp.push_pads(
            &PadSpec::circle(Vec2::new(-3.81, -2.54), 2.5, 1.5)
                .number(1)
                .shape(PadShape::Oval, Vec2::new(4.46156, 2.5))
                .rotation(48.0)
                .offset(Vec2::new(0.980778, 0.0)),
        );
        fp.push_mount_hole(&MountHole::new(Vec2::ZERO, 4.0));
        let text = to_kicad_mod(&fp);
        assert!(text.contains(
            "(pad 1 thru_hole oval (at -3.81 -2.54 48) (size 4.46156 2.5) (drill 1.5 (offset 0.980778 0)) (layers *.Cu *.Mask))"
        ));
        assert!(text.contains(
            "(pad \"\" np_thru_hole circle (at 0 0) (size 4 4) (drill 4) (layers *.Cu *.Mask))"
        ));
    }

    #[test]
    fn masked_pad_front_opening() {
        let mut fp = Footprint::new("M");
        fp.push_pads(&PadSpec::circle(Vec2::ZERO, 2.5, 1.5).number(2).kind(SwitchPadKind::Masked));
        let text = to_kicad_mod(&fp);
        assert!(text.contains("(pad 2 thru_hole circle (at 0 0) (size 2.5 2.5) (drill 1.5) (layers *.Cu B.Mask))"));
        assert!(text.contains("(pad 2 smd circle (at 0 0) (size 1.55 1.55) (layers F.Mask))"));
    }

    #[test]
    fn roundrect_ratio_from_radius() {
        let mut fp = Footprint::new("S");
        fp.push(Pad::smd(
            PadShape::RoundRect { radius: 0.25 },
            Vec2::ZERO,
            Vec2::new(2.55, 2.5),
            &[Layer::BCu],
        ));
        let text = to_kicad_mod(&fp);
        assert!(text.contains("(roundrect_rratio 0.1)"));
    }

    #[test]
    fn texts_and_models() {
        let mut fp = Footprint::new("T");
        fp.text(TextKind::Reference, "REF**", Vec2::new(0.0, -8.0), Layer::FSilkS);
        fp.text(TextKind::User, "%R", Vec2::ZERO, Layer::FFab);
        fp.model("${KICAD6_3RD_PARTY}/3dmodels/SW.wrl");
        let text = to_kicad_mod(&fp);
        assert!(text.contains("  (fp_text reference REF** (at 0 -8) (layer F.SilkS)\n    (effects"));
        assert!(text.contains("  (fp_text user %R (at 0 0) (layer F.Fab)"));
        assert!(text.contains("  (model ${KICAD6_3RD_PARTY}/3dmodels/SW.wrl\n    (at (xyz 0 0 0))"));
        assert!(text.contains("    (scale (xyz 1 1 1))"));
    }
}
