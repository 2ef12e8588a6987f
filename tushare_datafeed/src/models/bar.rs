//! Canonical in-memory representation of a time-series bar (OHLCV).
//!
//! This struct is the standard output of every
//! [`BarProvider`](crate::providers::BarProvider) implementation,
//! regardless of asset class (equities, futures, funds, indices).

use chrono::DateTime;
use chrono_tz::Tz;

use crate::models::constant::{Exchange, Interval};

/// A single time-series bar (OHLCV) for a given timestamp.
///
/// `symbol`, `exchange` and `interval` are always copied verbatim from the
/// originating request; only `datetime` and the OHLCV fields come from the
/// vendor payload.
#[derive(Debug, Clone, PartialEq)]
pub struct BarData {
    /// The platform symbol this bar belongs to (e.g., "600000", "TA905").
    pub symbol: String,

    /// The venue the instrument trades on.
    pub exchange: Exchange,

    /// The granularity of this bar.
    pub interval: Interval,

    /// Bar timestamp, localized to the exchange time zone.
    pub datetime: DateTime<Tz>,

    /// Opening price.
    pub open: f64,

    /// Highest price during the bar interval.
    pub high: f64,

    /// Lowest price during the bar interval.
    pub low: f64,

    /// Closing price.
    pub close: f64,

    /// Volume for the bar. What "volume" means is provider-defined; see the
    /// concrete provider's documentation for the source column.
    pub volume: f64,

    /// Identifier of the data source that produced this bar.
    pub gateway_name: String,
}
