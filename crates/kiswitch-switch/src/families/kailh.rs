//! Kailh KH, the NB notebook switch and the Choc Mini.

use kiswitch_core::Vec2;
use kiswitch_footprint::{Footprint, Layer, MountHole, PadShape, Shape};
use kiswitch_geometry::primitives::polyline;
use kiswitch_params::{Params, Property, Schema};
use tracing::debug;

use crate::blueprint::Blueprint;
use crate::common::{base_schema, Assembled, CommonConfig, HoleLayout, PinLayout};
use crate::SwitchError;

const EDGE_CUT_WIDTH: f64 = 0.05;

pub mod kh {
    use super::*;

    pub const PINS: PinLayout = PinLayout {
        pin_1: Vec2::new(-3.8, -2.55),
        pin_2: Vec2::new(3.0, -5.12),
        dia: 1.5,
    };

    pub const HOLES: HoleLayout = HoleLayout {
        center_dia: 4.0,
        mount_dia: 1.5,
        mount_spacing: Vec2::new(4.5, 0.0),
    };

    pub fn schema() -> Schema {
        base_schema()
            .with(Property::text("name").default("SW_Kailh_KH"))
            .with(Property::text("description").default("Kailh KH CPG1280 keyswitch"))
            .with(Property::text("tags").default("Kailh KH CPG1280 Keyboard Keyswitch Switch"))
            .with(Property::text("model3d").list().default(vec!["SW_Kailh_KH.wrl"]))
            .with(Property::boolean("cutout").default(true))
            .with(Property::number("switch_w").default(13.0))
            .with(Property::number("switch_h").default(13.0))
            .with(Property::number("switch_cut_w").default(12.2))
            .with(Property::number("switch_cut_h").default(12.2))
    }

    pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
        let cfg = CommonConfig::from_params(p, PINS, HOLES)?;
        let mut fp = cfg.footprint();
        Blueprint::standard().assemble(&cfg, &mut fp)?;
        debug!(name = %fp.name, "assembled switch");
        Ok(Assembled::new(fp, &cfg, &cfg.models()))
    }
}

/// Notebook switch: the center is milled out instead of drilled.
pub mod nb {
    use super::*;

    pub const PINS: PinLayout = PinLayout {
        pin_1: Vec2::new(-2.0, -3.4),
        pin_2: Vec2::new(2.9, -3.4),
        dia: 1.1,
    };

    pub const HOLES: HoleLayout = HoleLayout {
        center_dia: 0.0,
        mount_dia: 1.3,
        mount_spacing: Vec2::new(-5.5, 5.5),
    };

    pub fn schema() -> Schema {
        base_schema()
            .with(Property::text("name").default("SW_Kailh_NB"))
            .with(
                Property::text("description")
                    .default("Kailh KH CPG1425 low profile notebook keyswitch"),
            )
            .with(
                Property::text("tags")
                    .default("Kailh KH CPG1425 Keyboard Low Profile Notebook Keyswitch Switch"),
            )
            .with(Property::text("model3d").list().default(vec!["SW_Kailh_NB.wrl"]))
            .with(Property::boolean("cutout").default(true))
            .with(Property::number("switch_w").default(14.0))
            .with(Property::number("switch_h").default(14.8))
            .with(Property::number("text_offset").default(8.5))
            .with(Property::number("annular_ring").default(0.3))
    }

    fn center_hole(_: &CommonConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
        fp.push(Shape::Rect {
            start: Vec2::new(1.1, -2.5),
            end: Vec2::new(-2.9, 2.5),
            layer: Layer::EdgeCuts,
            width: Some(EDGE_CUT_WIDTH),
        });
        Ok(())
    }

    pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
        let cfg = CommonConfig::from_params(p, PINS, HOLES)?;
        let mut fp = cfg.footprint();
        Blueprint {
            center_hole,
            ..Blueprint::standard()
        }
        .assemble(&cfg, &mut fp)?;
        debug!(name = %fp.name, "assembled switch");
        Ok(Assembled::new(fp, &cfg, &cfg.models()))
    }
}

/// Choc Mini: milled center cut and oval locating slots.
pub mod choc_mini {
    use super::*;

    pub const PINS: PinLayout = PinLayout {
        pin_1: Vec2::new(2.0, 5.4),
        pin_2: Vec2::new(-4.58, 5.1),
        dia: 1.2,
    };

    const CENTER_CUT: [[f64; 2]; 9] = [
        [5.95, -2.9],
        [-5.9, -2.9],
        [-5.9, 3.0],
        [-2.5, 3.0],
        [-2.5, 4.05],
        [2.05, 4.05],
        [2.05, 3.0],
        [5.95, 3.0],
        [5.95, -2.9],
    ];

    const SLOT_POS: Vec2 = Vec2::new(5.29, -4.75);

    pub fn schema() -> Schema {
        base_schema()
            .with(Property::text("name").default("SW_Kailh_Choc_Mini"))
            .with(
                Property::text("description")
                    .default("Kailh Choc Mini CPG1232 low profile keyswitch"),
            )
            .with(
                Property::text("tags")
                    .default("Kailh Choc Mini CPG1232 Keyboard Low Profile Keyswitch Switch"),
            )
            .with(Property::text("model3d").list().default(vec!["SW_Kailh_Choc_Mini.wrl"]))
            .with(Property::boolean("cutout").default(true))
            .with(Property::number("switch_w").default(14.5))
            .with(Property::number("switch_h").default(13.5))
            .with(Property::number("switch_cut_w").default(13.7))
            .with(Property::number("switch_cut_h").default(12.7))
            .with(Property::number("text_offset").default(8.5))
            .with(Property::number("annular_ring").default(0.3))
    }

    fn center_hole(_: &CommonConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
        fp.polyline(polyline(&CENTER_CUT), Layer::EdgeCuts, Some(EDGE_CUT_WIDTH));
        Ok(())
    }

    fn mount_holes(_: &CommonConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
        for at in [Vec2::new(-SLOT_POS.x, SLOT_POS.y), SLOT_POS] {
            fp.push_mount_hole(
                &MountHole::new(at, [0.8, 1.2])
                    .shape(PadShape::Oval)
                    .size(Vec2::new(1.2, 1.6)),
            );
        }
        Ok(())
    }

    pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
        let cfg = CommonConfig::from_params(p, PINS, HoleLayout::NONE)?;
        let mut fp = cfg.footprint();
        Blueprint {
            center_hole,
            mount_holes,
            ..Blueprint::standard()
        }
        .assemble(&cfg, &mut fp)?;
        debug!(name = %fp.name, "assembled switch");
        Ok(Assembled::new(fp, &cfg, &cfg.models()))
    }
}
