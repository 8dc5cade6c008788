//! Typed, validated parameters for switch and keycap families.
//!
//! A [`Schema`] declares every configurable property of a family (type,
//! default, allowed values). [`Params`] holds the values a request supplied
//! and is the single place where raw input is coerced and checked.

mod error;
mod property;
mod value;

pub use error::ParamError;
pub use property::{Choice, Params, Property, Schema};
pub use value::{ParamKind, Value};
