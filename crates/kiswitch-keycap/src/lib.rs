//! Keycap reference outlines drawn on `Dwgs.User` next to a switch footprint.

mod sizes;

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use kiswitch_core::Vec2;
use kiswitch_footprint::{Footprint, Layer, Shape};
use kiswitch_params::{Choice, ParamError, Params, Property, Schema, Value};
use tracing::debug;

pub use sizes::{lookup as lookup_size, names as size_names, KeycapSize, SIZES};

const OUTLINE_WIDTH: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeycapError {
    #[error(transparent)]
    Param(#[from] ParamError),
    #[error("unknown keycap family \"{0}\" (expected Keycap or KeycapChoc)")]
    UnknownFamily(String),
    #[error("unknown keycap size \"{0}\"")]
    UnknownSize(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeycapType {
    Regular,
    IsoEnter,
}

impl Choice for KeycapType {
    const CHOICES: &'static [(&'static str, Self)] = &[
        ("regular", KeycapType::Regular),
        ("ISOEnter", KeycapType::IsoEnter),
    ];
}

/// Keycap pitch families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeycapFamily {
    /// 19.05 mm pitch.
    Keycap,
    /// Low-profile 18 x 17 mm pitch.
    KeycapChoc,
}

impl KeycapFamily {
    pub const ALL: [KeycapFamily; 2] = [KeycapFamily::Keycap, KeycapFamily::KeycapChoc];

    pub fn name(self) -> &'static str {
        match self {
            KeycapFamily::Keycap => "Keycap",
            KeycapFamily::KeycapChoc => "KeycapChoc",
        }
    }

    pub fn schema(self) -> Schema {
        let base = Schema::new([
            Property::text("name").default(""),
            Property::text("description").default(""),
            Property::text("tags").default("Keycap"),
            Property::choice::<KeycapType>("type").default("regular"),
            Property::number("spacing_x")
                .default(19.05)
                .doc("horizontal key pitch"),
            Property::number("spacing_y").doc("vertical key pitch, defaults to spacing_x"),
            Property::number("width").doc("width in units, required for regular keycaps"),
            Property::number("rotation").default(0.0),
            Property::number("offset_x").default(0.0),
            Property::number("offset_y").default(0.0),
        ]);
        match self {
            KeycapFamily::Keycap => base,
            KeycapFamily::KeycapChoc => base
                .with(Property::number("spacing_x").default(18.0))
                .with(Property::number("spacing_y").default(17.0)),
        }
    }

    /// Coerce `args`, then let the preset named `size` override the keys it
    /// defines. Anything the preset leaves out keeps the caller's value.
    pub fn params(
        self,
        size: Option<&str>,
        args: &IndexMap<String, String>,
    ) -> Result<Params, KeycapError> {
        let mut params = Params::from_pairs(
            self.schema(),
            args.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        if let Some(name) = size {
            let preset = sizes::lookup(name).ok_or_else(|| KeycapError::UnknownSize(name.to_string()))?;
            params.set("type", Some(Value::from(preset.kind.name())))?;
            let overrides = [
                ("width", preset.width),
                ("rotation", preset.rotation),
                ("offset_x", preset.offset_x),
            ];
            for (key, value) in overrides {
                if let Some(value) = value {
                    params.set(key, Some(Value::from(value)))?;
                }
            }
        }
        Ok(params)
    }

    pub fn build(
        self,
        size: Option<&str>,
        args: &IndexMap<String, String>,
    ) -> Result<Keycap, KeycapError> {
        let config = KeycapConfig::from_params(&self.params(size, args)?)?;
        Ok(Keycap::new(&config))
    }
}

impl fmt::Display for KeycapFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeycapFamily {
    type Err = KeycapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| KeycapError::UnknownFamily(s.to_string()))
    }
}

/// Validated keycap parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct KeycapConfig {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub kind: KeycapType,
    pub spacing: Vec2,
    /// Only meaningful for regular keycaps.
    pub width: Option<f64>,
    pub rotation: f64,
    pub offset: Vec2,
}

impl KeycapConfig {
    pub fn from_params(p: &Params) -> Result<Self, KeycapError> {
        let kind = p.choice::<KeycapType>("type")?;
        let spacing_x = p.number("spacing_x")?;
        let spacing_y = p.get("spacing_y").and_then(Value::as_f64).unwrap_or(spacing_x);
        let width = match kind {
            KeycapType::Regular => Some(p.number("width")?),
            KeycapType::IsoEnter => None,
        };
        Ok(Self {
            name: p.text("name")?.to_string(),
            description: p.text("description")?.to_string(),
            tags: p.text("tags")?.to_string(),
            kind,
            spacing: Vec2::new(spacing_x, spacing_y),
            width,
            rotation: p.number("rotation")?,
            offset: Vec2::new(p.number("offset_x")?, p.number("offset_y")?),
        })
    }
}

/// One keycap outline with its identity strings.
#[derive(Debug, Clone, PartialEq)]
pub struct Keycap {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub outline: Shape,
}

impl Keycap {
    pub fn new(cfg: &KeycapConfig) -> Self {
        let mut name = cfg.name.clone();
        let mut tags = cfg.tags.clone();

        let outline = match (cfg.kind, cfg.width) {
            (KeycapType::Regular, Some(width)) => {
                name.push_str(&format!("{width:.2}u"));
                tags.push_str(&format!(" {width:.2}u"));
                regular_outline(cfg, width)
            }
            _ => {
                name.push_str("ISOEnter");
                tags.push_str(" ISOEnter");
                iso_enter_outline(cfg)
            }
        };
        if cfg.rotation != 0.0 {
            let deg = cfg.rotation.trunc() as i64;
            name.push_str(&format!("_{deg}deg"));
            tags.push_str(&format!(" {deg}deg"));
        }
        if cfg.kind == KeycapType::Regular && cfg.offset != Vec2::ZERO {
            name.push_str("_Offset");
            tags.push_str(" Offset");
        }

        let description = if cfg.description.is_empty() {
            tags.clone()
        } else {
            format!("{} {}", cfg.description, tags)
        };
        debug!(keycap = %name, "keycap outline");
        Self {
            name,
            description,
            tags,
            outline,
        }
    }

    /// Corner points of the outline, closed.
    pub fn vertices(&self) -> Vec<Vec2> {
        match &self.outline {
            Shape::Rect { start, end, .. } => vec![
                *start,
                Vec2::new(end.x, start.y),
                *end,
                Vec2::new(start.x, end.y),
                *start,
            ],
            Shape::PolyLine { points, .. } => points.clone(),
            _ => Vec::new(),
        }
    }

    /// A footprint fragment ready to be merged into a switch.
    pub fn into_footprint(self) -> Footprint {
        let mut fp = Footprint::new(&self.name);
        fp.description = self.description;
        fp.tags = self.tags;
        fp.push(self.outline);
        fp
    }
}

fn regular_outline(cfg: &KeycapConfig, width: f64) -> Shape {
    let half = Vec2::new(cfg.spacing.x * width / 2.0, cfg.spacing.y / 2.0);
    let start = cfg.offset - half;
    let end = cfg.offset + half;
    if cfg.rotation == 0.0 {
        return Shape::Rect {
            start,
            end,
            layer: Layer::DwgsUser,
            width: Some(OUTLINE_WIDTH),
        };
    }
    let corners = [
        start,
        Vec2::new(end.x, start.y),
        end,
        Vec2::new(start.x, end.y),
        start,
    ];
    Shape::PolyLine {
        points: corners.iter().map(|p| p.rotate(cfg.rotation)).collect(),
        layer: Layer::DwgsUser,
        width: Some(OUTLINE_WIDTH),
    }
}

fn iso_enter_outline(cfg: &KeycapConfig) -> Shape {
    let Vec2 { x: sx, y: sy } = cfg.spacing;
    let narrow = sx * 1.25 / 2.0;
    let wide = sx * 1.75 / 2.0;
    let points = [
        [narrow, sy],
        [narrow, -sy],
        [-wide, -sy],
        [-wide, 0.0],
        [-narrow, 0.0],
        [-narrow, sy],
        [narrow, sy],
    ]
    .into_iter()
    .map(|p| (Vec2::from(p) + cfg.offset).rotate(cfg.rotation))
    .collect();
    Shape::PolyLine {
        points,
        layer: Layer::DwgsUser,
        width: Some(OUTLINE_WIDTH),
    }
}
