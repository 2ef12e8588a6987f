//! The Tushare Pro provider: init/token state, the blocking query, and
//! normalization of columnar rows into [`BarData`] records.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;
use reqwest::blocking::Client;
use tracing::debug;

use crate::models::{bar::BarData, request::HistoryRequest};
use crate::providers::errors::{ProviderError, ProviderInitError};
use crate::providers::tushare::code::to_ts_code;
use crate::providers::tushare::params::{ApiRequest, interval_freq};
use crate::providers::tushare::response::{BarColumns, TushareResponse, TushareTable, f64_cell, str_cell};
use crate::providers::BarProvider;
use crate::settings::Settings;

const API_URL: &str = "http://api.tushare.pro";

/// Provenance tag stamped on every bar produced by this provider.
const GATEWAY_NAME: &str = "TS";

/// The single time zone bar timestamps are localized to.
///
/// Tushare's bar queries cover mainland Chinese venues, so one zone serves
/// every exchange for now. A per-exchange correction would replace this
/// constant's use in [`localize_trade_date`].
pub const CHINA_TZ: Tz = chrono_tz::Asia::Shanghai;

/// Client for querying historical bar data from Tushare Pro.
///
/// Construct one from [`Settings`] and call [`init`](Self::init) once before
/// fetching; `init` is idempotent and only fails when no token is available
/// from either the settings or the call argument.
pub struct TushareProvider {
    client: Client,
    token: String,
    inited: bool,
}

impl TushareProvider {
    pub fn new(settings: &Settings) -> Result<Self, ProviderInitError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            token: settings.token.clone(),
            inited: false,
        })
    }

    /// Marks the provider ready, adopting `token` if one is supplied.
    ///
    /// Returns `true` on success. A second call is a no-op returning `true`
    /// and never overwrites the stored token. Returns `false` when neither
    /// the settings nor the argument supplied a token; the caller may fix
    /// its configuration and call again.
    pub fn init(&mut self, token: &str) -> bool {
        if self.inited {
            return true;
        }

        if !token.is_empty() {
            self.token = token.to_string();
        }

        if self.token.is_empty() {
            return false;
        }

        self.inited = true;
        true
    }

    pub fn is_inited(&self) -> bool {
        self.inited
    }

    fn query(&self, body: &ApiRequest<'_>) -> Result<TushareResponse, ProviderError> {
        let response = self.client.post(API_URL).json(body).send()?;

        if !response.status().is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return Err(ProviderError::Api(message));
        }

        Ok(response.json::<TushareResponse>()?)
    }
}

impl BarProvider for TushareProvider {
    fn fetch_bars(&self, req: &HistoryRequest) -> Result<Vec<BarData>, ProviderError> {
        let (ts_code, asset) = to_ts_code(&req.symbol, req.exchange);

        let freq = interval_freq(req.interval)
            .ok_or(ProviderError::UnsupportedInterval(req.interval))?;

        let body = ApiRequest::pro_bar(&self.token, &ts_code, asset, freq, req.start, req.end);
        debug!(
            ts_code = %ts_code,
            asset = %asset,
            freq = %freq,
            "querying tushare history"
        );

        let response = self.query(&body)?;

        if response.code != 0 {
            return Err(ProviderError::Api(
                response.msg.unwrap_or_else(|| format!("tushare error code {}", response.code)),
            ));
        }

        // Absent payload means no bars in range; an empty table, the same.
        match response.data {
            Some(table) => bars_from_table(req, &table),
            None => Ok(Vec::new()),
        }
    }
}

/// Normalizes a columnar vendor table into bar records, preserving the
/// vendor's row order.
///
/// Every bar carries the request's symbol, exchange and interval verbatim.
/// `volume` is populated from the vendor's `amount` (turnover) column, not
/// its traded-quantity column; that is the output contract for this source.
/// A malformed row fails the whole fetch.
pub(crate) fn bars_from_table(
    req: &HistoryRequest,
    table: &TushareTable,
) -> Result<Vec<BarData>, ProviderError> {
    let columns = BarColumns::resolve(table)?;

    let mut bars = Vec::with_capacity(table.items.len());
    for row in &table.items {
        let trade_date = str_cell(row, columns.trade_date, "trade_date")?;
        let datetime = localize_trade_date(trade_date)?;

        bars.push(BarData {
            symbol: req.symbol.clone(),
            exchange: req.exchange,
            interval: req.interval,
            datetime,
            open: f64_cell(row, columns.open, "open")?,
            high: f64_cell(row, columns.high, "high")?,
            low: f64_cell(row, columns.low, "low")?,
            close: f64_cell(row, columns.close, "close")?,
            volume: f64_cell(row, columns.amount, "amount")?,
            gateway_name: GATEWAY_NAME.to_string(),
        });
    }

    Ok(bars)
}

/// Parses a `YYYYMMDD` trade date and localizes its midnight to [`CHINA_TZ`].
fn localize_trade_date(trade_date: &str) -> Result<DateTime<Tz>, ProviderError> {
    let date = NaiveDate::parse_from_str(trade_date, "%Y%m%d")
        .map_err(|e| ProviderError::Api(format!("bad trade_date '{trade_date}': {e}")))?;

    CHINA_TZ
        .from_local_datetime(&date.and_time(NaiveTime::MIN))
        .single()
        .ok_or_else(|| {
            ProviderError::Internal(format!("trade_date '{trade_date}' has no unique local time"))
        })
}
