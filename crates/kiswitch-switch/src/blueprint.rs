use kiswitch_core::Vec2;
use kiswitch_footprint::{Footprint, Layer, MountHole, PadSpec};
use kiswitch_geometry::primitives::polyline;

use crate::common::{CommonConfig, Cutout};
use crate::SwitchError;

/// One assembly step. Reads the config, appends shapes.
pub type Phase<C> = fn(&C, &mut Footprint) -> Result<(), SwitchError>;

const SILK_MARGIN: f64 = 0.1;
const COURTYARD_MARGIN: f64 = 0.25;
const CUTOUT_WIDTH: f64 = 0.1;

const MX_RELIEF_CUTOUT: [[f64; 2]; 21] = [
    [7.0, -7.0],
    [7.0, -6.0],
    [7.8, -6.0],
    [7.8, -2.9],
    [7.0, -2.9],
    [7.0, 2.9],
    [7.8, 2.9],
    [7.8, 6.0],
    [7.0, 6.0],
    [7.0, 7.0],
    [-7.0, 7.0],
    [-7.0, 6.0],
    [-7.8, 6.0],
    [-7.8, 2.9],
    [-7.0, 2.9],
    [-7.0, -2.9],
    [-7.8, -2.9],
    [-7.8, -6.0],
    [-7.0, -6.0],
    [-7.0, -7.0],
    [7.0, -7.0],
];

/// The seven assembly phases of a switch, run in declaration order.
///
/// Families start from [`Blueprint::standard`] and replace individual phases
/// with struct update syntax.
pub struct Blueprint<C> {
    pub fab_outline: Phase<C>,
    pub silkscreen: Phase<C>,
    pub courtyard: Phase<C>,
    pub pads: Phase<C>,
    pub center_hole: Phase<C>,
    pub mount_holes: Phase<C>,
    pub cutout: Phase<C>,
}

impl<C: AsRef<CommonConfig>> Blueprint<C> {
    pub fn standard() -> Self {
        Self {
            fab_outline: fab_outline::<C>,
            silkscreen: silkscreen::<C>,
            courtyard: courtyard::<C>,
            pads: pads::<C>,
            center_hole: center_hole::<C>,
            mount_holes: mount_holes::<C>,
            cutout: cutout::<C>,
        }
    }

    pub fn assemble(&self, cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
        for phase in [
            self.fab_outline,
            self.silkscreen,
            self.courtyard,
            self.pads,
            self.center_hole,
            self.mount_holes,
            self.cutout,
        ] {
            phase(cfg, fp)?;
        }
        Ok(())
    }
}

/// Phase that adds nothing.
pub fn skip<C>(_: &C, _: &mut Footprint) -> Result<(), SwitchError> {
    Ok(())
}

pub fn fab_outline<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let c = cfg.as_ref();
    fp.center_rect(c.body.x, c.body.y, Layer::FFab, None, 0.0);
    Ok(())
}

pub fn silkscreen<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let c = cfg.as_ref();
    fp.center_rect(c.body.x, c.body.y, Layer::FSilkS, None, SILK_MARGIN);
    Ok(())
}

pub fn courtyard<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let c = cfg.as_ref();
    fp.center_rect(c.body.x, c.body.y, Layer::FCrtYd, None, COURTYARD_MARGIN);
    Ok(())
}

pub fn pads<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let c = cfg.as_ref();
    let size = c.pins.dia + c.annular_ring;
    fp.push_pads(&PadSpec::circle(c.pins.pin_1, size, c.pins.dia).number(1));
    fp.push_pads(&PadSpec::circle(c.pins.pin_2, size, c.pins.dia).number(2));
    Ok(())
}

pub fn center_hole<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    fp.push_mount_hole(&MountHole::new(Vec2::ZERO, cfg.as_ref().holes.center_dia));
    Ok(())
}

pub fn mount_holes<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let holes = cfg.as_ref().holes;
    fp.push_mount_hole(&MountHole::new(-holes.mount_spacing, holes.mount_dia));
    fp.push_mount_hole(&MountHole::new(holes.mount_spacing, holes.mount_dia));
    Ok(())
}

pub fn cutout<C: AsRef<CommonConfig>>(cfg: &C, fp: &mut Footprint) -> Result<(), SwitchError> {
    let c = cfg.as_ref();
    match c.cutout {
        Cutout::Simple => {
            fp.append_tags("Cutout");
            fp.center_rect(c.cut.x, c.cut.y, Layer::Eco1User, Some(CUTOUT_WIDTH), 0.0);
        }
        Cutout::Relief => {
            fp.append_tags("Relief Cutout");
            fp.polyline(polyline(&MX_RELIEF_CUTOUT), Layer::Eco1User, Some(CUTOUT_WIDTH));
        }
        Cutout::Skip => {}
    }
    Ok(())
}
