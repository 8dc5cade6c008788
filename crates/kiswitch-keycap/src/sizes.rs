use crate::KeycapType;

/// A named keycap preset. Fields left `None` are not part of the preset and
/// keep whatever the caller passed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeycapSize {
    pub name: &'static str,
    pub kind: KeycapType,
    pub width: Option<f64>,
    pub rotation: Option<f64>,
    pub offset_x: Option<f64>,
}

const fn regular(name: &'static str, width: f64) -> KeycapSize {
    KeycapSize {
        name,
        kind: KeycapType::Regular,
        width: Some(width),
        rotation: None,
        offset_x: None,
    }
}

const fn rotated(name: &'static str, width: f64, rotation: f64) -> KeycapSize {
    KeycapSize {
        rotation: Some(rotation),
        ..regular(name, width)
    }
}

const fn iso(name: &'static str, rotation: Option<f64>) -> KeycapSize {
    KeycapSize {
        name,
        kind: KeycapType::IsoEnter,
        width: None,
        rotation,
        offset_x: None,
    }
}

pub const SIZES: &[KeycapSize] = &[
    regular("1u", 1.0),
    regular("1.25u", 1.25),
    rotated("1.25u90", 1.25, 90.0),
    regular("1.5u", 1.5),
    rotated("1.5u90", 1.5, 90.0),
    regular("1.75u", 1.75),
    rotated("1.75u90", 1.75, 90.0),
    regular("2u", 2.0),
    rotated("2u90", 2.0, 90.0),
    regular("2.25u", 2.25),
    rotated("2.25u90", 2.25, 90.0),
    regular("2.5u", 2.5),
    rotated("2.5u90", 2.5, 90.0),
    regular("2.75u", 2.75),
    rotated("2.75u90", 2.75, 90.0),
    regular("3u", 3.0),
    rotated("3u90", 3.0, 90.0),
    regular("4u", 4.0),
    regular("4.5u", 4.5),
    regular("5.5u", 5.5),
    regular("6u", 6.0),
    KeycapSize {
        offset_x: Some(-9.525),
        ..regular("6uOffset", 6.0)
    },
    regular("6.25u", 6.25),
    regular("6.5u", 6.5),
    regular("7u", 7.0),
    iso("ISOEnter", None),
    iso("ISOEnter90", Some(90.0)),
    iso("ISOEnter180", Some(180.0)),
    iso("ISOEnter270", Some(270.0)),
];

pub fn lookup(name: &str) -> Option<&'static KeycapSize> {
    SIZES.iter().find(|s| s.name == name)
}

pub fn names() -> impl Iterator<Item = &'static str> {
    SIZES.iter().map(|s| s.name)
}
