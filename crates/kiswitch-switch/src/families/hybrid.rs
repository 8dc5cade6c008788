//! Cherry MX / Alps hybrid: both footprints overlaid on one outline.

use kiswitch_core::Vec2;
use kiswitch_footprint::{Footprint, Layer, PadShape, PadSpec};
use kiswitch_geometry::offset_polygon;
use kiswitch_params::{Params, Property, Schema};
use tracing::debug;

use super::{alps, cherry};
use crate::blueprint::Blueprint;
use crate::common::{base_schema, Assembled, CommonConfig};
use crate::SwitchError;

#[derive(Debug, Clone, PartialEq)]
pub struct HybridConfig {
    pub common: CommonConfig,
    pub cherry: Vec2,
    pub alps: Vec2,
}

impl AsRef<CommonConfig> for HybridConfig {
    fn as_ref(&self) -> &CommonConfig {
        &self.common
    }
}

impl HybridConfig {
    /// Cherry square with the wider Alps body poking out left and right.
    pub fn outline(&self) -> Vec<Vec2> {
        let c = self.cherry / 2.0;
        let a = self.alps / 2.0;
        [
            [-c.x, -c.y],
            [c.x, -c.y],
            [c.x, -a.y],
            [a.x, -a.y],
            [a.x, a.y],
            [c.x, a.y],
            [c.x, c.y],
            [-c.x, c.y],
            [-c.x, a.y],
            [-a.x, a.y],
            [-a.x, -a.y],
            [-c.x, -a.y],
            [-c.x, -c.y],
        ]
        .into_iter()
        .map(Vec2::from)
        .collect()
    }
}

pub fn schema() -> Schema {
    base_schema()
        .with(Property::text("name").default("SW_Hybrid_Cherry_MX_Alps"))
        .with(Property::text("description").default("Cherry MX / Alps keyswitch hybrid"))
        .with(
            Property::text("tags")
                .default("Cherry MX Alps Matias Hybrid Keyboard Keyswitch Switch PCB"),
        )
        .with(
            Property::text("model3d")
                .list()
                .default(vec!["SW_Cherry_MX_PCB.wrl", "SW_Alps_Matias.wrl"]),
        )
        .with(Property::number("cherry_w").default(cherry::BODY))
        .with(Property::number("cherry_h").default(cherry::BODY))
        .with(Property::number("alps_w").default(15.5))
        .with(Property::number("alps_h").default(12.8))
}

fn fab_outline(cfg: &HybridConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    fp.polyline(cfg.outline(), Layer::FFab, None);
    Ok(())
}

fn silkscreen(cfg: &HybridConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    fp.polyline(offset_polygon(&cfg.outline(), 0.1, true)?, Layer::FSilkS, None);
    Ok(())
}

fn courtyard(cfg: &HybridConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    fp.polyline(offset_polygon(&cfg.outline(), 0.25, true)?, Layer::FCrtYd, None);
    Ok(())
}

/// Alps pin 1, then slotted pads that reach both the MX and Alps pin positions.
fn pads(cfg: &HybridConfig, fp: &mut Footprint) -> Result<(), SwitchError> {
    let alps_pin = alps::PINS;
    fp.push_pads(
        &PadSpec::circle(alps_pin.pin_1, alps_pin.dia + cfg.common.annular_ring, alps_pin.dia)
            .number(1),
    );
    fp.push_pads(
        &PadSpec::circle(cherry::PINS.pin_1, 2.5, 1.5)
            .number(1)
            .shape(PadShape::Oval, Vec2::new(4.46156, 2.5))
            .rotation(48.0)
            .offset(Vec2::new(0.980778, 0.0)),
    );
    fp.push_pads(
        &PadSpec::circle(Vec2::new(2.52, -4.79), 2.5, 1.5)
            .number(2)
            .shape(PadShape::Oval, Vec2::new(3.081378, 2.5))
            .drill([2.08137, 1.5])
            .rotation(86.0),
    );
    Ok(())
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let cfg = HybridConfig {
        common: CommonConfig::from_params(p, cherry::PINS, cherry::HOLES)?,
        cherry: Vec2::new(p.number("cherry_w")?, p.number("cherry_h")?),
        alps: Vec2::new(p.number("alps_w")?, p.number("alps_h")?),
    };
    let mut fp = cfg.common.footprint();
    Blueprint {
        fab_outline,
        silkscreen,
        courtyard,
        pads,
        ..Blueprint::standard()
    }
    .assemble(&cfg, &mut fp)?;
    debug!(name = %fp.name, "assembled switch");
    Ok(Assembled::new(fp, &cfg.common, &cfg.common.models()))
}
