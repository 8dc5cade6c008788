use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use kiswitch_params::{Params, Schema};

use crate::families::{self, alps, cherry, choc, hotswap, hybrid, kailh, stabilizer};
use crate::{Assembled, SwitchError};

/// The switch families that can be generated, by their public names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwitchFamily {
    StabilizerCherryMx,
    AlpsMatias,
    CherryMx,
    HybridCherryMxAlps,
    KailhChoc,
    HotswapKailh,
    KailhKh,
    KailhNb,
    KailhChocMini,
}

impl SwitchFamily {
    pub const ALL: [SwitchFamily; 9] = [
        SwitchFamily::StabilizerCherryMx,
        SwitchFamily::AlpsMatias,
        SwitchFamily::CherryMx,
        SwitchFamily::HybridCherryMxAlps,
        SwitchFamily::KailhChoc,
        SwitchFamily::HotswapKailh,
        SwitchFamily::KailhKh,
        SwitchFamily::KailhNb,
        SwitchFamily::KailhChocMini,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SwitchFamily::StabilizerCherryMx => "StabilizerCherryMX",
            SwitchFamily::AlpsMatias => "SwitchAlpsMatias",
            SwitchFamily::CherryMx => "SwitchCherryMX",
            SwitchFamily::HybridCherryMxAlps => "SwitchHybridCherryMxAlps",
            SwitchFamily::KailhChoc => "SwitchKailhChoc",
            SwitchFamily::HotswapKailh => "SwitchHotswapKailh",
            SwitchFamily::KailhKh => "SwitchKailhKH",
            SwitchFamily::KailhNb => "SwitchKailhNB",
            SwitchFamily::KailhChocMini => "SwitchKailhChocMini",
        }
    }

    pub fn schema(self) -> Schema {
        match self {
            SwitchFamily::StabilizerCherryMx => stabilizer::schema(),
            SwitchFamily::AlpsMatias => alps::schema(),
            SwitchFamily::CherryMx => cherry::schema(),
            SwitchFamily::HybridCherryMxAlps => hybrid::schema(),
            SwitchFamily::KailhChoc => choc::schema(),
            SwitchFamily::HotswapKailh => hotswap::schema(),
            SwitchFamily::KailhKh => kailh::kh::schema(),
            SwitchFamily::KailhNb => kailh::nb::schema(),
            SwitchFamily::KailhChocMini => kailh::choc_mini::schema(),
        }
    }

    /// Keycap sizes generated when a keycap family is given without sizes.
    /// Stabilizers have none.
    pub fn default_keys(self) -> &'static [&'static str] {
        match self {
            SwitchFamily::StabilizerCherryMx => &[],
            SwitchFamily::AlpsMatias | SwitchFamily::KailhNb | SwitchFamily::HybridCherryMxAlps => {
                families::PLAIN_KEYS
            }
            SwitchFamily::CherryMx
            | SwitchFamily::KailhChoc
            | SwitchFamily::HotswapKailh
            | SwitchFamily::KailhKh
            | SwitchFamily::KailhChocMini => families::FULL_KEYS,
        }
    }

    /// Coerce raw `key=value` arguments through this family's schema.
    pub fn params(self, args: &IndexMap<String, String>) -> Result<Params, SwitchError> {
        Ok(Params::from_pairs(
            self.schema(),
            args.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?)
    }

    /// Run the family's phases on validated parameters.
    pub fn assemble(self, params: &Params) -> Result<Assembled, SwitchError> {
        match self {
            SwitchFamily::StabilizerCherryMx => stabilizer::assemble(params),
            SwitchFamily::AlpsMatias => alps::assemble(params),
            SwitchFamily::CherryMx => cherry::assemble(params),
            SwitchFamily::HybridCherryMxAlps => hybrid::assemble(params),
            SwitchFamily::KailhChoc => choc::assemble(params),
            SwitchFamily::HotswapKailh => hotswap::assemble(params),
            SwitchFamily::KailhKh => kailh::kh::assemble(params),
            SwitchFamily::KailhNb => kailh::nb::assemble(params),
            SwitchFamily::KailhChocMini => kailh::choc_mini::assemble(params),
        }
    }
}

impl fmt::Display for SwitchFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SwitchFamily {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| SwitchError::UnknownFamily(s.to_string()))
    }
}
