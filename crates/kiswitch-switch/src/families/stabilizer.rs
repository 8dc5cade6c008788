//! Cherry MX PCB-mount stabilizers. These skip the switch phases and place
//! the stabilizer holes from a table keyed by nominal size.

use kiswitch_core::Vec2;
use kiswitch_footprint::{Attribute, Layer, MountHole, Shape};
use kiswitch_params::{Params, Property, Schema};
use tracing::debug;

use crate::common::{base_schema, Assembled, CommonConfig, Cutout, HoleLayout, PinLayout};
use crate::SwitchError;

struct StabSize {
    size: f64,
    tags: &'static str,
    offset: f64,
}

const TABLE: [StabSize; 6] = [
    StabSize { size: 2.0, tags: "2.00u 2.25u 2.50u 2.75u", offset: 11.938 },
    StabSize { size: 3.0, tags: "3.00u", offset: 19.05 },
    StabSize { size: 6.0, tags: "6.00u", offset: 47.625 },
    StabSize { size: 6.25, tags: "6.25u", offset: 50.0 },
    StabSize { size: 7.0, tags: "7.00u", offset: 57.15 },
    StabSize { size: 8.0, tags: "8.00u 9.00u 10.00u", offset: 66.675 },
];

/// Nominal sizes a stabilizer can be generated for.
pub const SIZES: [f64; 6] = [2.0, 3.0, 6.0, 6.25, 7.0, 8.0];

const SMALL_HOLE: f64 = 3.048;
const LARGE_HOLE: f64 = 3.9878;
const TOP_Y: f64 = -6.985;
const BOTTOM_Y: f64 = 8.225;

pub fn schema() -> Schema {
    base_schema()
        .with(Property::text("name").default("Stabilizer_Cherry_MX"))
        .with(Property::text("description").default("Cherry MX PCB Stabilizer"))
        .with(Property::text("tags").default("Cherry MX Keyboard Stabilizer"))
        .with(Property::boolean("cutout").default(true))
        .with(Property::number("text_offset").default(2.0))
        .with(
            Property::number("size")
                .allowed(SIZES)
                .doc("nominal key size the stabilizer spans"),
        )
}

/// Horizontal distance of each stabilizer from the switch center.
pub fn offset_for(size: f64) -> Option<f64> {
    TABLE.iter().find(|s| s.size == size).map(|s| s.offset)
}

pub fn assemble(p: &Params) -> Result<Assembled, SwitchError> {
    let size = p.number("size")?;
    let entry = TABLE
        .iter()
        .find(|s| s.size == size)
        .ok_or_else(|| SwitchError::Unsupported(format!("no stabilizer for size {size}")))?;
    let pins = PinLayout {
        pin_1: Vec2::ZERO,
        pin_2: Vec2::ZERO,
        dia: 0.0,
    };
    let common = CommonConfig::from_params(p, pins, HoleLayout::NONE)?;

    let mut fp = common.footprint();
    fp.append_name(&format!("{size:.2}u"));
    fp.append_description(entry.tags);
    fp.append_tags(entry.tags);
    let models = common.models_or_named(&fp.name);
    fp.attribute = Attribute::Virtual;

    let off = entry.offset;
    for (x, y, drill) in [
        (-off, TOP_Y, SMALL_HOLE),
        (off, TOP_Y, SMALL_HOLE),
        (-off, BOTTOM_Y, LARGE_HOLE),
        (off, BOTTOM_Y, LARGE_HOLE),
    ] {
        fp.push_mount_hole(&MountHole::new(Vec2::new(x, y), drill));
    }

    fp.line(Vec2::new(0.0, 2.0), Vec2::new(0.0, -2.0), Layer::DwgsUser, Some(0.1));
    fp.line(Vec2::new(-2.0, 0.0), Vec2::new(2.0, 0.0), Layer::DwgsUser, Some(0.1));

    if common.cutout == Cutout::Simple {
        for x in [off, -off] {
            fp.push(Shape::Rect {
                start: Vec2::new(x - 3.375, -5.53),
                end: Vec2::new(x + 3.375, 6.77),
                layer: Layer::Eco1User,
                width: Some(0.1),
            });
        }
        fp.append_tags("Cutout");
    }

    debug!(name = %fp.name, "assembled stabilizer");
    Ok(Assembled::new(fp, &common, &models))
}
