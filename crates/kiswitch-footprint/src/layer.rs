use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::FootprintError;

/// What a drawing plane is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerRole {
    Copper,
    SolderMask,
    SolderPaste,
    Silkscreen,
    Fabrication,
    Courtyard,
    Mechanical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Layer {
    #[serde(rename = "F.Cu")]
    FCu,
    #[serde(rename = "B.Cu")]
    BCu,
    #[serde(rename = "*.Cu")]
    AllCu,
    #[serde(rename = "F.Mask")]
    FMask,
    #[serde(rename = "B.Mask")]
    BMask,
    #[serde(rename = "*.Mask")]
    AllMask,
    #[serde(rename = "F.Paste")]
    FPaste,
    #[serde(rename = "B.Paste")]
    BPaste,
    #[serde(rename = "F.SilkS")]
    FSilkS,
    #[serde(rename = "B.SilkS")]
    BSilkS,
    #[serde(rename = "F.Fab")]
    FFab,
    #[serde(rename = "B.Fab")]
    BFab,
    #[serde(rename = "F.CrtYd")]
    FCrtYd,
    #[serde(rename = "B.CrtYd")]
    BCrtYd,
    #[serde(rename = "Edge.Cuts")]
    EdgeCuts,
    #[serde(rename = "Dwgs.User")]
    DwgsUser,
    #[serde(rename = "Eco1.User")]
    Eco1User,
}

const ALL: [Layer; 17] = [
    Layer::FCu,
    Layer::BCu,
    Layer::AllCu,
    Layer::FMask,
    Layer::BMask,
    Layer::AllMask,
    Layer::FPaste,
    Layer::BPaste,
    Layer::FSilkS,
    Layer::BSilkS,
    Layer::FFab,
    Layer::BFab,
    Layer::FCrtYd,
    Layer::BCrtYd,
    Layer::EdgeCuts,
    Layer::DwgsUser,
    Layer::Eco1User,
];

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::FCu => "F.Cu",
            Layer::BCu => "B.Cu",
            Layer::AllCu => "*.Cu",
            Layer::FMask => "F.Mask",
            Layer::BMask => "B.Mask",
            Layer::AllMask => "*.Mask",
            Layer::FPaste => "F.Paste",
            Layer::BPaste => "B.Paste",
            Layer::FSilkS => "F.SilkS",
            Layer::BSilkS => "B.SilkS",
            Layer::FFab => "F.Fab",
            Layer::BFab => "B.Fab",
            Layer::FCrtYd => "F.CrtYd",
            Layer::BCrtYd => "B.CrtYd",
            Layer::EdgeCuts => "Edge.Cuts",
            Layer::DwgsUser => "Dwgs.User",
            Layer::Eco1User => "Eco1.User",
        }
    }

    pub fn role(self) -> LayerRole {
        match self {
            Layer::FCu | Layer::BCu | Layer::AllCu => LayerRole::Copper,
            Layer::FMask | Layer::BMask | Layer::AllMask => LayerRole::SolderMask,
            Layer::FPaste | Layer::BPaste => LayerRole::SolderPaste,
            Layer::FSilkS | Layer::BSilkS => LayerRole::Silkscreen,
            Layer::FFab | Layer::BFab => LayerRole::Fabrication,
            Layer::FCrtYd | Layer::BCrtYd => LayerRole::Courtyard,
            Layer::EdgeCuts | Layer::DwgsUser | Layer::Eco1User => LayerRole::Mechanical,
        }
    }

    /// Stroke width used when a drawing does not set one.
    pub fn default_width(self) -> f64 {
        match self.role() {
            LayerRole::Silkscreen => 0.12,
            LayerRole::Fabrication => 0.10,
            LayerRole::Courtyard => 0.05,
            _ => 0.15,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Layer {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL.into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| FootprintError::UnknownLayer(s.to_string()))
    }
}

/// Layer sets shared by pads.
pub mod sets {
    use super::Layer;

    pub const THT: &[Layer] = &[Layer::AllCu, Layer::AllMask];
    pub const NPTH: &[Layer] = &[Layer::AllCu, Layer::AllMask];
    pub const FRONT: &[Layer] = &[Layer::FCu, Layer::FMask];
    pub const BACK: &[Layer] = &[Layer::BCu, Layer::BMask];
    pub const FRONT_MASK: &[Layer] = &[Layer::FMask];
    pub const MASKED_FRONT: &[Layer] = &[Layer::AllCu, Layer::BMask];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_parse_back() {
        for layer in ALL {
            assert_eq!(layer.name().parse::<Layer>().unwrap(), layer);
        }
        assert!("F.Foo".parse::<Layer>().is_err());
    }

    #[test]
    fn default_widths_follow_role() {
        assert_eq!(Layer::FSilkS.default_width(), 0.12);
        assert_eq!(Layer::BFab.default_width(), 0.10);
        assert_eq!(Layer::FCrtYd.default_width(), 0.05);
        assert_eq!(Layer::Eco1User.default_width(), 0.15);
    }
}
