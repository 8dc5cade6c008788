use kiswitch_core::Vec2;
use kiswitch_footprint::{Footprint, Layer, TextKind};
use kiswitch_keycap::Keycap;
use kiswitch_params::{Choice, ParamError, ParamKind, Params, Property, Schema};

pub const PATH3D: &str =
    "${KICAD6_3RD_PARTY}/3dmodels/com_github_perigoso_keyswitch-kicad-library/3d-library.3dshapes/";

/// Plate cutout drawn on `Eco1.User`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutout {
    Simple,
    /// Cherry MX opening with side notches for switch removal.
    Relief,
    Skip,
}

impl Choice for Cutout {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("simple", Cutout::Simple),
        ("relief", Cutout::Relief),
        ("none", Cutout::Skip),
    ];
}

/// Datasheet pin positions of a family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinLayout {
    pub pin_1: Vec2,
    pub pin_2: Vec2,
    pub dia: f64,
}

/// Datasheet mounting holes of a family. Mount holes sit at `±mount_spacing`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoleLayout {
    pub center_dia: f64,
    pub mount_dia: f64,
    pub mount_spacing: Vec2,
}

impl HoleLayout {
    pub const NONE: HoleLayout = HoleLayout {
        center_dia: 0.0,
        mount_dia: 0.0,
        mount_spacing: Vec2::ZERO,
    };
}

/// Properties every switch family shares.
pub fn base_schema() -> Schema {
    Schema::new([
        Property::text("name"),
        Property::text("description").default(""),
        Property::text("tags"),
        Property::boolean("cutout").default(false),
        Property::number("annular_ring")
            .default(1.0)
            .doc("copper added around pin drills"),
        Property::text("path3d").default(PATH3D),
        Property::text("model3d").list().doc("3D model file names under path3d"),
        Property::number("text_offset").default(8.0),
        Property::number("switch_w").default(18.0),
        Property::number("switch_h").default(18.0),
        Property::number("switch_cut_w").default(16.0),
        Property::number("switch_cut_h").default(16.0),
    ])
}

/// The part of a switch config the default phases read.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonConfig {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub cutout: Cutout,
    pub annular_ring: f64,
    pub path3d: String,
    pub model3d: Option<Vec<String>>,
    pub text_offset: f64,
    pub body: Vec2,
    pub cut: Vec2,
    pub pins: PinLayout,
    pub holes: HoleLayout,
}

impl CommonConfig {
    pub fn from_params(p: &Params, pins: PinLayout, holes: HoleLayout) -> Result<Self, ParamError> {
        let cutout = match p.schema().get("cutout").map(|prop| prop.kind) {
            Some(ParamKind::Bool) => {
                if p.boolean("cutout")? {
                    Cutout::Simple
                } else {
                    Cutout::Skip
                }
            }
            _ => p.choice::<Cutout>("cutout")?,
        };
        Ok(Self {
            name: p.text("name")?.to_string(),
            description: p.text("description")?.to_string(),
            tags: p.text("tags")?.to_string(),
            cutout,
            annular_ring: p.number("annular_ring")?,
            path3d: p.text("path3d")?.to_string(),
            model3d: p.texts("model3d")?,
            text_offset: p.number("text_offset")?,
            body: Vec2::new(p.number("switch_w")?, p.number("switch_h")?),
            cut: Vec2::new(p.number("switch_cut_w")?, p.number("switch_cut_h")?),
            pins,
            holes,
        })
    }

    /// Fresh footprint carrying this config's identity strings.
    pub fn footprint(&self) -> Footprint {
        let mut fp = Footprint::new(&self.name);
        fp.description = self.description.clone();
        fp.tags = self.tags.clone();
        fp
    }

    pub fn models(&self) -> Vec<String> {
        self.model3d.clone().unwrap_or_default()
    }

    /// `model3d`, or `[<name>.wrl]` when none was given.
    pub fn models_or_named(&self, name: &str) -> Vec<String> {
        self.model3d
            .clone()
            .unwrap_or_else(|| vec![format!("{name}.wrl")])
    }
}

impl AsRef<CommonConfig> for CommonConfig {
    fn as_ref(&self) -> &CommonConfig {
        self
    }
}

fn join_model(dir: &str, file: &str) -> String {
    if dir.is_empty() || dir.ends_with('/') {
        format!("{dir}{file}")
    } else {
        format!("{dir}/{file}")
    }
}

/// A switch whose phases have run but whose reference texts and 3D models
/// are not attached yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembled {
    pub footprint: Footprint,
    pub text_offset: f64,
    /// Full 3D model paths.
    pub models: Vec<String>,
}

impl Assembled {
    pub fn new(footprint: Footprint, common: &CommonConfig, models: &[String]) -> Self {
        Self {
            footprint,
            text_offset: common.text_offset,
            models: models.iter().map(|m| join_model(&common.path3d, m)).collect(),
        }
    }

    #[must_use]
    pub fn with_keycap(mut self, keycap: Keycap) -> Self {
        self.footprint.merge(keycap.into_footprint());
        self
    }

    /// Append reference, value and user texts plus model references.
    pub fn finish(self) -> Footprint {
        let Assembled {
            mut footprint,
            text_offset,
            models,
        } = self;
        let name = footprint.name.clone();
        footprint.text(
            TextKind::Reference,
            "REF**",
            Vec2::new(0.0, -text_offset),
            Layer::FSilkS,
        );
        footprint.text(TextKind::Value, name, Vec2::new(0.0, text_offset), Layer::FFab);
        footprint.text(TextKind::User, "%R", Vec2::ZERO, Layer::FFab);
        for model in models {
            footprint.model(model);
        }
        footprint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_paths_join() {
        assert_eq!(join_model("a/", "b.wrl"), "a/b.wrl");
        assert_eq!(join_model("a", "b.wrl"), "a/b.wrl");
        assert_eq!(join_model("", "b.wrl"), "b.wrl");
    }

    #[test]
    fn bool_cutout_maps_to_simple() {
        let schema = base_schema()
            .with(Property::text("name").default("SW"))
            .with(Property::text("tags").default("T"));
        let p = Params::from_pairs(schema, [("cutout", "yes")]).unwrap();
        let pins = PinLayout {
            pin_1: Vec2::ZERO,
            pin_2: Vec2::ZERO,
            dia: 1.0,
        };
        let cfg = CommonConfig::from_params(&p, pins, HoleLayout::NONE).unwrap();
        assert_eq!(cfg.cutout, Cutout::Simple);
        assert_eq!(cfg.model3d, None);
        assert_eq!(cfg.models_or_named("SW_X"), vec!["SW_X.wrl".to_string()]);
    }
}
