//! Fixed platform vocabularies: market venues and bar granularities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Market venue an instrument trades on.
///
/// The string value (e.g. `"SSE"`) is the platform-wide identifier and is
/// what appears in the vendor-code fallback `"{symbol}.{exchange}"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exchange {
    // China futures
    CFFEX,
    SHFE,
    CZCE,
    DCE,
    INE,
    // China equities
    SSE,
    SZSE,
    BSE,
    // Spot gold
    SGE,
    // International
    SEHK,
    SMART,
    LOCAL,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::CFFEX => "CFFEX",
            Exchange::SHFE => "SHFE",
            Exchange::CZCE => "CZCE",
            Exchange::DCE => "DCE",
            Exchange::INE => "INE",
            Exchange::SSE => "SSE",
            Exchange::SZSE => "SZSE",
            Exchange::BSE => "BSE",
            Exchange::SGE => "SGE",
            Exchange::SEHK => "SEHK",
            Exchange::SMART => "SMART",
            Exchange::LOCAL => "LOCAL",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bar granularity.
///
/// `Weekly` and `Tick` exist platform-wide but are not served by every
/// vendor; providers report them as unsupported rather than guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    Minute,
    Hour,
    Daily,
    Weekly,
    Tick,
}

impl Interval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Minute => "1m",
            Interval::Hour => "1h",
            Interval::Daily => "d",
            Interval::Weekly => "w",
            Interval::Tick => "tick",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
