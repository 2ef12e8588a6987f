//! Translation of platform instrument identifiers into Tushare codes.
//!
//! Tushare addresses an instrument by a composite code (`"600000.SH"`,
//! `"TA905.ZCE"`) plus a short asset-class tag that routes the query to the
//! right endpoint (`"E"` equity, `"I"` index, `"FD"` fund, `"FT"` futures).
//! The mapping is kept as explicit ordered tables so every branch is
//! reachable and directly testable.

use crate::models::constant::Exchange;

/// Futures venues and their Tushare code suffixes. All map to asset `"FT"`.
const FUTURES_SUFFIXES: &[(Exchange, &str)] = &[
    (Exchange::CZCE, "ZCE"),
    (Exchange::SHFE, "SHF"),
    (Exchange::DCE, "DCE"),
    (Exchange::CFFEX, "CFX"),
    (Exchange::INE, "INE"),
];

/// Asset-class rules for an equity venue.
///
/// `classes` is ordered; the first group with a matching symbol prefix wins.
/// Symbols matching no group get an empty asset class.
struct EquityRules {
    suffix: &'static str,
    classes: &'static [(&'static [&'static str], &'static str)],
}

const SSE_RULES: EquityRules = EquityRules {
    suffix: "SH",
    classes: &[
        (&["000"], "I"),
        (&["500", "550"], "FD"),
        (&["600", "601", "603", "688", "900"], "E"),
    ],
};

const SZSE_RULES: EquityRules = EquityRules {
    suffix: "SZ",
    classes: &[
        (&["00", "200"], "E"),
        (&["17", "18"], "FD"),
        (&["39"], "I"),
    ],
};

/// Maps a platform `(symbol, exchange)` pair to Tushare's
/// `(ts_code, asset_class)` pair.
///
/// Total over all exchanges: venues outside the tables fall back to
/// `"{symbol}.{exchange}"` with an empty asset class. Symbols are taken as
/// given; callers must supply them in canonical form.
pub fn to_ts_code(symbol: &str, exchange: Exchange) -> (String, &'static str) {
    if let Some((_, suffix)) = FUTURES_SUFFIXES.iter().find(|(ex, _)| *ex == exchange) {
        return (format!("{symbol}.{suffix}"), "FT");
    }

    let rules = match exchange {
        Exchange::SSE => Some(&SSE_RULES),
        Exchange::SZSE => Some(&SZSE_RULES),
        _ => None,
    };

    match rules {
        Some(rules) => {
            let asset = rules
                .classes
                .iter()
                .find(|(prefixes, _)| prefixes.iter().any(|p| symbol.starts_with(p)))
                .map(|(_, class)| *class)
                .unwrap_or("");
            (format!("{symbol}.{}", rules.suffix), asset)
        }
        None => (format!("{symbol}.{}", exchange.as_str()), ""),
    }
}
