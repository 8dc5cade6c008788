//! Alps SKCL / Matias. Plate mounted only: no center or PCB mount holes.

use kiswitch_core::Vec2;
use kiswitch_params::{Params, Property, Schema};
use tracing::debug;

use crate::blueprint::{skip, Blueprint};
use crate::common::{base_schema, Assembled, CommonConfig, HoleLayout, PinLayout};
use crate::SwitchError;

pub const PINS: PinLayout = PinLayout {
    pin_1: Vec2::new(-2.5, -4.0),
    pin_2: Vec2::new(2.5, -4.5),
    dia: 1.5,
};

pub fn schema() -> Schema {
    base_schema()
        .with(Property::text("name").default("SW_Alps_Matias"))
        .with(Property::text("description").default("Alps/Matias keyswitch"))
        .with(Property::text("tags").default("Alps Matias Keyboard Keyswitch Switch Plate"))
        .with(Property::text("model3d").list().default(vec!["SW_Alps_Matias.wrl"]))
        .with(Property::boolean("cutout").default(true))
        .with(Property::number("switch_w").default(15.5))
        .with(Property::number("switch_h").default(12.8))
        .with(Property::number("switch_cut_w").default(15.5))
        .with(Property::number("switch_cut_h").default(12.8))
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let cfg = CommonConfig::from_params(p, PINS, HoleLayout::NONE)?;
    let blueprint = Blueprint {
        center_hole: skip,
        mount_holes: skip,
        ..Blueprint::standard()
    };
    let mut fp = cfg.footprint();
    blueprint.assemble(&cfg, &mut fp)?;
    debug!(name = %fp.name, "assembled switch");
    Ok(Assembled::new(fp, &cfg, &cfg.models()))
}
