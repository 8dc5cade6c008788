//! Cherry MX and the MX geometry shared with the hybrid and Kailh MX socket families.

use kiswitch_core::Vec2;
use kiswitch_footprint::Footprint;
use kiswitch_params::{Choice, Params, Property, Schema};
use tracing::debug;

use crate::blueprint::{self, Blueprint};
use crate::common::{base_schema, Assembled, CommonConfig, Cutout, HoleLayout, PinLayout};
use crate::SwitchError;

pub const BODY: f64 = 14.0;

pub const PINS: PinLayout = PinLayout {
    pin_1: Vec2::new(-3.81, -2.54),
    pin_2: Vec2::new(2.54, -5.08),
    dia: 1.5,
};

pub const HOLES: HoleLayout = HoleLayout {
    center_dia: 4.0,
    mount_dia: 1.75,
    mount_spacing: Vec2::new(5.08, 0.0),
};

/// 14 x 14 body and plate cut, plus the MX cutout styles.
pub fn mx_schema(cutout_default: &'static str) -> Schema {
    base_schema()
        .with(Property::choice::<Cutout>("cutout").default(cutout_default))
        .with(Property::number("switch_w").default(BODY))
        .with(Property::number("switch_h").default(BODY))
        .with(Property::number("switch_cut_w").default(BODY))
        .with(Property::number("switch_cut_h").default(BODY))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MxMount {
    Pcb,
    Plate,
}

impl Choice for MxMount {
    const CHOICES: &'static [(&'static str, Self)] = &[("PCB", MxMount::Pcb), ("Plate", MxMount::Plate)];
}

#[derive(Debug, Clone, PartialEq)]
pub struct CherryMxConfig {
    pub common: CommonConfig,
    pub mount: MxMount,
}

impl AsRef<CommonConfig> for CherryMxConfig {
    fn as_ref(&self) -> &CommonConfig {
        &self.common
    }
}

pub fn schema() -> Schema {
    mx_schema("simple")
        .with(Property::text("name").default("SW_Cherry_MX"))
        .with(Property::text("description").default("Cherry MX keyswitch"))
        .with(Property::text("tags").default("Cherry MX Keyboard Keyswitch Switch"))
        .with(Property::choice::<MxMount>("switch_type").default("PCB"))
}

/// Plate-mount switches have no plastic pegs, so no PCB mount holes.
fn mount_holes(cfg: &CherryMxConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    match cfg.mount {
        MxMount::Pcb => blueprint::mount_holes(cfg, fp),
        MxMount::Plate => Ok(()),
    }
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let cfg = CherryMxConfig {
        common: CommonConfig::from_params(p, PINS, HOLES)?,
        mount: p.choice("switch_type")?,
    };
    let mount = cfg.mount.name();

    let mut fp = cfg.common.footprint();
    fp.append_name(mount);
    fp.append_description(&format!("{mount} Mount"));
    fp.append_tags(mount);
    let models = cfg.common.models_or_named(&fp.name);

    Blueprint {
        mount_holes,
        ..Blueprint::standard()
    }
    .assemble(&cfg, &mut fp)?;
    debug!(name = %fp.name, "assembled switch");
    Ok(Assembled::new(fp, &cfg.common, &models))
}
