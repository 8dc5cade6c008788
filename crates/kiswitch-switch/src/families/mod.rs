//! The switch families. Each module exposes `schema()` and `assemble()`.

pub mod alps;
pub mod cherry;
pub mod choc;
pub mod hotswap;
pub mod hybrid;
pub mod kailh;
pub mod stabilizer;

/// Every keycap size, rotated and offset variants included.
pub const FULL_KEYS: &[&str] = &[
    "1u",
    "1.25u",
    "1.25u90",
    "1.5u",
    "1.5u90",
    "1.75u",
    "1.75u90",
    "2u",
    "2u90",
    "2.25u",
    "2.25u90",
    "2.5u",
    "2.5u90",
    "2.75u",
    "2.75u90",
    "3u",
    "3u90",
    "4u",
    "4.5u",
    "5.5u",
    "6u",
    "6uOffset",
    "6.25u",
    "6.5u",
    "7u",
    "ISOEnter",
    "ISOEnter90",
    "ISOEnter180",
    "ISOEnter270",
];

/// Unrotated sizes only, for switches that cannot be turned in a keyboard.
pub const PLAIN_KEYS: &[&str] = &[
    "1u", "1.25u", "1.5u", "1.75u", "2u", "2.25u", "2.5u", "2.75u", "3u", "4u", "4.5u", "5.5u",
    "6u", "6.25u", "6.5u", "7u", "ISOEnter",
];
