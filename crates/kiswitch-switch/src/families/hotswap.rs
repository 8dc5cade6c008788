//! Kailh hotswap sockets: the socket pads shared by the MX and Choc sockets,
//! and the Kailh MX socket family itself.

use kiswitch_core::Vec2;
use kiswitch_footprint::{Attribute, Footprint, Layer, MountHole, Pad, PadShape, PadSpec};
use kiswitch_params::{Params, Property, Schema};
use tracing::debug;

use super::cherry;
use crate::blueprint::{self, Blueprint};
use crate::common::{Assembled, CommonConfig, PinLayout};
use crate::SwitchError;

const HOLE_DIA: f64 = 3.05;
const PLATED_DIA: f64 = 3.6;
const PAD_RADIUS: f64 = 0.25;

/// Where a socket's contacts land relative to the switch pins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SocketLayout {
    pub pad_size: Vec2,
    pub pad_offset_1: Vec2,
    pub pad_offset_2: Vec2,
    /// Copper joining a plated hole to its socket pad.
    pub bridge_pos_1: Vec2,
    pub bridge_pos_2: Vec2,
    pub bridge_size: Vec2,
    pub th_offset: Vec2,
}

pub const MX_SOCKET: SocketLayout = SocketLayout {
    pad_size: Vec2::new(2.55, 2.5),
    pad_offset_1: Vec2::new(3.275, 0.0),
    pad_offset_2: Vec2::new(3.302, 0.0),
    bridge_pos_1: Vec2::new(-6.585, -2.54),
    bridge_pos_2: Vec2::new(5.32, -5.08),
    bridge_size: Vec2::new(3.55, 2.5),
    th_offset: Vec2::ZERO,
};

fn socket_pad(at: Vec2, size: Vec2, layers: &[Layer]) -> Pad {
    Pad::smd(PadShape::RoundRect { radius: PAD_RADIUS }, at, size, layers)
}

/// Socket through-holes and surface pads for `pins`.
///
/// Plated sockets keep the holes as numbered pads, open mask and paste over
/// the socket contacts and bridge the two in copper. Unplated sockets turn
/// the holes into bare mechanical holes and the socket pads carry the net.
pub fn socket_pads(pins: PinLayout, socket: &SocketLayout, plated: bool, fp: &mut Footprint) {
    let hole_1 = pins.pin_1 - socket.th_offset;
    let hole_2 = pins.pin_2 + socket.th_offset;
    if plated {
        fp.push_pads(&PadSpec::circle(hole_1, PLATED_DIA, HOLE_DIA).number(1));
        fp.push_pads(&PadSpec::circle(hole_2, PLATED_DIA, HOLE_DIA).number(2));
    } else {
        fp.push_mount_hole(&MountHole::new(hole_1, HOLE_DIA));
        fp.push_mount_hole(&MountHole::new(hole_2, HOLE_DIA));
    }

    let pad_1 = pins.pin_1 - socket.pad_offset_1;
    let pad_2 = pins.pin_2 + socket.pad_offset_2;
    if plated {
        let opening = [Layer::BMask, Layer::BPaste];
        fp.push(socket_pad(pad_1, socket.pad_size, &opening));
        fp.push(socket_pad(pad_2, socket.pad_size, &opening));
        fp.push(socket_pad(socket.bridge_pos_1, socket.bridge_size, &[Layer::BCu]).numbered(1));
        fp.push(socket_pad(socket.bridge_pos_2, socket.bridge_size, &[Layer::BCu]).numbered(2));
    } else {
        let full = [Layer::BCu, Layer::BMask, Layer::BPaste];
        fp.push(socket_pad(pad_1, socket.pad_size, &full).numbered(1));
        fp.push(socket_pad(pad_2, socket.pad_size, &full).numbered(2));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HotswapKailhConfig {
    pub common: CommonConfig,
    pub plated: bool,
}

impl AsRef<CommonConfig> for HotswapKailhConfig {
    fn as_ref(&self) -> &CommonConfig {
        &self.common
    }
}

pub fn schema() -> Schema {
    cherry::mx_schema("relief")
        .with(Property::text("name").default("SW_Hotswap_Kailh_MX"))
        .with(Property::text("description").default("Kailh keyswitch Hotswap Socket"))
        .with(Property::text("tags").default("Kailh Keyboard Keyswitch Switch Hotswap Socket"))
        .with(
            Property::text("model3d")
                .list()
                .default(vec!["SW_Hotswap_Kailh_MX.wrl"]),
        )
        .with(Property::boolean("hotswap_plated").default(false))
}

type Seg = ([f64; 2], [f64; 2]);
type ArcSpec = ([f64; 2], [f64; 2]);

const SOCKET_LINES: [Seg; 5] = [
    ([-4.0, -6.8], [4.8, -6.8]),
    ([4.8, -6.8], [4.8, -2.8]),
    ([-0.3, -2.8], [4.8, -2.8]),
    ([-6.0, -0.8], [-2.3, -0.8]),
    ([-6.0, -0.8], [-6.0, -4.8]),
];
const SOCKET_ARCS: [ArcSpec; 2] = [([-4.0, -4.8], [-4.0, -6.8]), ([-0.3, -0.8], [-0.3, -2.8])];

const SOCKET_SILK_LINES: [Seg; 2] = [([-4.1, -6.9], [1.0, -6.9]), ([-0.2, -2.7], [4.9, -2.7])];
const SOCKET_SILK_ARCS: [ArcSpec; 2] = [([-4.1, -4.9], [-4.1, -6.9]), ([-0.2, -0.7], [-0.2, -2.7])];

fn draw(fp: &mut Footprint, lines: &[Seg], arcs: &[ArcSpec], layer: Layer, width: f64) {
    for (start, end) in lines {
        fp.line(Vec2::from(*start), Vec2::from(*end), layer, Some(width));
    }
    for (center, start) in arcs {
        fp.arc(Vec2::from(*center), Vec2::from(*start), -90.0, layer, Some(width));
    }
}

fn fab_outline(cfg: &HotswapKailhConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::fab_outline(cfg, fp)?;
    draw(fp, &SOCKET_LINES, &SOCKET_ARCS, Layer::BFab, 0.12);
    Ok(())
}

fn silkscreen(cfg: &HotswapKailhConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::silkscreen(cfg, fp)?;
    draw(fp, &SOCKET_SILK_LINES, &SOCKET_SILK_ARCS, Layer::BSilkS, 0.12);
    Ok(())
}

// TODO: grow the socket courtyard by 0.25 like the front one instead of tracing the fab outline.
fn courtyard(cfg: &HotswapKailhConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    blueprint::courtyard(cfg, fp)?;
    draw(fp, &SOCKET_LINES, &SOCKET_ARCS, Layer::BCrtYd, 0.05);
    Ok(())
}

fn pads(cfg: &HotswapKailhConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    socket_pads(cfg.common.pins, &MX_SOCKET, cfg.plated, fp);
    Ok(())
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let cfg = HotswapKailhConfig {
        common: CommonConfig::from_params(p, cherry::PINS, cherry::HOLES)?,
        plated: p.boolean("hotswap_plated")?,
    };
    let mut fp = cfg.common.footprint();
    if cfg.plated {
        fp.append_name("Plated");
        fp.append_tags("Plated");
        fp.append_description("plated holes");
    }
    fp.attribute = Attribute::Smd;

    Blueprint {
        fab_outline,
        silkscreen,
        courtyard,
        pads,
        ..Blueprint::standard()
    }
    .assemble(&cfg, &mut fp)?;
    debug!(name = %fp.name, plated = cfg.plated, "assembled hotswap switch");
    Ok(Assembled::new(fp, &cfg.common, &cfg.common.models()))
}
