//! Tushare-specific request parameters.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::models::constant::Interval;

/// Bar granularities Tushare serves, with their `freq` tokens.
const INTERVAL_FREQS: &[(Interval, &str)] = &[
    (Interval::Minute, "1min"),
    (Interval::Hour, "60min"),
    (Interval::Daily, "D"),
];

/// Returns the Tushare `freq` token for an interval, or `None` if the
/// vendor cannot serve that granularity.
pub fn interval_freq(interval: Interval) -> Option<&'static str> {
    INTERVAL_FREQS
        .iter()
        .find(|(iv, _)| *iv == interval)
        .map(|(_, freq)| *freq)
}

/// Formats a request-boundary timestamp as a Tushare calendar date.
///
/// Time of day is discarded; Tushare's bar query is parameterized by
/// `YYYYMMDD` dates only.
pub fn format_trade_date(ts: NaiveDateTime) -> String {
    ts.format("%Y%m%d").to_string()
}

/// Top-level Tushare Pro request envelope: every query is a POST of this
/// shape to the single API endpoint.
#[derive(Clone, Debug, Serialize)]
pub struct ApiRequest<'a> {
    pub api_name: &'static str,
    pub token: &'a str,
    pub params: ProBarParams<'a>,
    pub fields: &'a str,
}

/// Parameters of a `pro_bar` historical-bar query.
#[derive(Clone, Debug, Serialize)]
pub struct ProBarParams<'a> {
    pub ts_code: &'a str,
    pub asset: &'a str,
    pub freq: &'static str,
    pub start_date: String,
    pub end_date: String,
}

impl<'a> ApiRequest<'a> {
    /// Builds a `pro_bar` query for the given instrument code and range.
    pub fn pro_bar(
        token: &'a str,
        ts_code: &'a str,
        asset: &'a str,
        freq: &'static str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            api_name: "pro_bar",
            token,
            params: ProBarParams {
                ts_code,
                asset,
                freq,
                start_date: format_trade_date(start),
                end_date: format_trade_date(end),
            },
            fields: "",
        }
    }
}
