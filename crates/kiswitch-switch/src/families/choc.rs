//! Kailh Choc (CPG1350 V1, CPG1353 V2) with optional hotswap socket.

use kiswitch_core::Vec2;
use kiswitch_footprint::{Attribute, Footprint, Layer, MountHole, PadSpec};
use kiswitch_geometry::offset_polygon;
use kiswitch_geometry::primitives::{closed, polyline};
use kiswitch_params::{Choice, Params, Property, Schema};
use tracing::debug;

use super::hotswap::{socket_pads, SocketLayout};
use crate::blueprint::{self, Blueprint};
use crate::common::{base_schema, Assembled, CommonConfig, HoleLayout, PinLayout};
use crate::SwitchError;

pub const DEFAULT_NAME: &str = "SW_Kailh_Choc";
const HOTSWAP_NAME: &str = "SW_Hotswap_Kailh_Choc";

pub const PINS: PinLayout = PinLayout {
    pin_1: Vec2::new(0.0, -5.9),
    pin_2: Vec2::new(5.0, -3.8),
    dia: 1.2,
};

const MOUNT_DIA: f64 = 1.9;
const MOUNT_SPACING: Vec2 = Vec2::new(5.5, 0.0);
const V1_CENTER_DIA: f64 = 3.45;
const V2_CENTER_DIA: f64 = 5.05;
const V2_MOUNT_POS: Vec2 = Vec2::new(-5.0, 5.15);
const V2_MOUNT_DIA: f64 = 1.6;

pub const CHOC_SOCKET: SocketLayout = SocketLayout {
    pad_size: Vec2::new(2.55, 2.5),
    pad_offset_1: Vec2::new(3.5, 0.1),
    pad_offset_2: Vec2::new(3.5, 0.0),
    bridge_pos_1: Vec2::new(-2.85, -6.0),
    bridge_pos_2: Vec2::new(7.85, -3.8),
    bridge_size: Vec2::new(3.85, 2.5),
    th_offset: Vec2::ZERO,
};

/// Socket body outline, upper-right part.
const SOCKET_A: [[f64; 2]; 14] = [
    [7.275, -2.225],
    [7.575, -2.225],
    [7.575, -1.425],
    [3.567, -1.425],
    [3.276, -1.48],
    [3.025, -1.636],
    [2.848, -1.873],
    [2.769, -2.158],
    [2.612, -2.729],
    [2.258, -3.203],
    [1.756, -3.516],
    [1.175, -3.625],
    [-1.45, -3.625],
    [-2.275, -4.45],
];

/// Socket body outline, upper-left part.
const SOCKET_B: [[f64; 2]; 16] = [
    [-2.275, -7.45],
    [-1.45, -8.275],
    [1.261, -8.275],
    [1.643, -8.199],
    [1.968, -7.982],
    [2.475, -7.475],
    [2.475, -7.275],
    [2.566, -6.816],
    [2.826, -6.426],
    [3.216, -6.166],
    [3.675, -6.075],
    [6.475, -6.075],
    [6.781, -6.014],
    [7.041, -5.841],
    [7.214, -5.581],
    [7.275, -5.275],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChocType {
    V1,
    V2,
    V1V2,
}

impl Choice for ChocType {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("V1", ChocType::V1),
        ("V2", ChocType::V2),
        ("V1V2", ChocType::V1V2),
    ];
}

impl ChocType {
    pub fn v1(self) -> bool {
        matches!(self, ChocType::V1 | ChocType::V1V2)
    }

    pub fn v2(self) -> bool {
        matches!(self, ChocType::V2 | ChocType::V1V2)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChocConfig {
    pub common: CommonConfig,
    pub kind: ChocType,
    pub hotswap: bool,
    pub plated: bool,
}

impl AsRef<CommonConfig> for ChocConfig {
    fn as_ref(&self) -> &CommonConfig {
        &self.common
    }
}

impl ChocConfig {
    pub fn from_params(p: &Params) -> Result<Self, SwitchError> {
        let kind: ChocType = p.choice("switch_type")?;
        let hotswap = p.boolean("hotswap")?;
        let plated = p.boolean("hotswap_plated")?;
        if plated && !hotswap {
            return Err(SwitchError::Unsupported(
                "hotswap_plated requires hotswap".to_string(),
            ));
        }
        let holes = HoleLayout {
            center_dia: if kind.v2() { V2_CENTER_DIA } else { V1_CENTER_DIA },
            mount_dia: MOUNT_DIA,
            mount_spacing: MOUNT_SPACING,
        };
        Ok(Self {
            common: CommonConfig::from_params(p, PINS, holes)?,
            kind,
            hotswap,
            plated,
        })
    }
}

pub fn schema() -> Schema {
    base_schema()
        .with(Property::text("name").default(DEFAULT_NAME))
        .with(Property::text("description").default("Kailh Choc keyswitch"))
        .with(Property::text("tags").default("Kailh Choc Keyswitch Switch"))
        .with(Property::choice::<ChocType>("switch_type").default("V1V2"))
        .with(Property::boolean("hotswap").default(false))
        .with(Property::boolean("hotswap_plated").default(false))
        .with(Property::boolean("cutout").default(true))
        .with(Property::number("switch_w").default(15.0))
        .with(Property::number("switch_h").default(15.0))
        .with(Property::number("switch_cut_w").default(14.5))
        .with(Property::number("switch_cut_h").default(14.5))
        .with(Property::number("text_offset").default(9.0))
}

fn fab_outline(cfg: &ChocConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::fab_outline(cfg, fp)?;
    if cfg.hotswap {
        fp.polyline(polyline(&SOCKET_A), Layer::BFab, None);
        fp.polyline(polyline(&SOCKET_B), Layer::BFab, None);
    }
    Ok(())
}

fn silkscreen(cfg: &ChocConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::silkscreen(cfg, fp)?;
    if cfg.hotswap {
        fp.polyline(offset_polygon(&polyline(&SOCKET_A), 0.1, true)?, Layer::BSilkS, None);
        fp.polyline(offset_polygon(&polyline(&SOCKET_B), 0.1, true)?, Layer::BSilkS, None);
    }
    Ok(())
}

fn courtyard(cfg: &ChocConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::courtyard(cfg, fp)?;
    if cfg.hotswap {
        let mut outline = polyline(&SOCKET_A);
        outline.extend(polyline(&SOCKET_B));
        let outline = closed(outline);
        fp.polyline(offset_polygon(&outline, 0.25, true)?, Layer::BCrtYd, None);
    }
    Ok(())
}

fn pads(cfg: &ChocConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    if cfg.hotswap {
        socket_pads(cfg.common.pins, &CHOC_SOCKET, cfg.plated, fp);
        Ok(())
    } else {
        blueprint::pads(cfg, fp)
    }
}

/// V1 pegs use the standard pair; the V2 peg is a single plated hole unless
/// it would short an unplated socket.
fn mount_holes(cfg: &ChocConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    if cfg.kind.v1() {
        blueprint::mount_holes(cfg, fp)?;
    }
    if cfg.kind.v2() {
        if !cfg.hotswap || cfg.plated {
            fp.push_pads(&PadSpec::circle(
                V2_MOUNT_POS,
                V2_MOUNT_DIA + cfg.common.annular_ring,
                V2_MOUNT_DIA,
            ));
        } else {
            fp.push_mount_hole(&MountHole::new(V2_MOUNT_POS, V2_MOUNT_DIA));
        }
    }
    Ok(())
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let cfg = ChocConfig::from_params(p)?;
    let kind = cfg.kind.name();

    let mut fp = cfg.common.footprint();
    let mut models = cfg.common.model3d.clone();
    if cfg.common.name == DEFAULT_NAME {
        if cfg.hotswap {
            fp.name = HOTSWAP_NAME.to_string();
        }
        if models.is_none() {
            models = Some(vec![format!("{}_V1.wrl", fp.name)]);
        }
    }

    fp.append_name(kind);
    fp.append_description(kind);
    if cfg.kind.v1() {
        fp.append_description("CPG1350 V1");
        fp.append_tags("CPG1350 V1");
    }
    if cfg.kind.v2() {
        fp.append_description("CPG1353 V2");
        fp.append_tags("CPG1353 V2");
    }
    if cfg.hotswap {
        fp.append_description("Hotswap");
        fp.append_tags("Hotswap");
        fp.attribute = Attribute::Smd;
    }
    if cfg.plated {
        fp.append_description("Plated");
        fp.append_tags("Plated");
        fp.append_name("Plated");
    }

    Blueprint {
        fab_outline,
        silkscreen,
        courtyard,
        pads,
        mount_holes,
        ..Blueprint::standard()
    }
    .assemble(&cfg, &mut fp)?;
    debug!(name = %fp.name, hotswap = cfg.hotswap, "assembled choc switch");
    Ok(Assembled::new(fp, &cfg.common, &models.unwrap_or_default()))
}
