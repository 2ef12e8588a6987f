use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::constant::{Exchange, Interval};

/// Universal parameters for requesting historical bar data from a provider.
///
/// This struct is vendor-agnostic: translating the symbol/exchange pair into
/// a vendor-specific instrument code is each provider's job. Timestamps are
/// timezone-naive and interpreted as exchange-local time; providers decide
/// how much of the precision their query protocol actually consumes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryRequest {
    /// The symbol to request (e.g., "600000", "TA905").
    pub symbol: String,

    /// The venue the symbol trades on.
    pub exchange: Exchange,

    /// The granularity of the requested bars.
    pub interval: Interval,

    /// Start of the requested range (inclusive, exchange-local).
    pub start: NaiveDateTime,

    /// End of the requested range (inclusive, exchange-local).
    pub end: NaiveDateTime,
}
