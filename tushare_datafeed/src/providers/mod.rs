//! Provider abstraction for historical market data sources.
//!
//! [`BarProvider`] is the unified interface for fetching bar data from a
//! vendor. Each concrete implementation (currently Tushare) handles its own
//! instrument-code translation, query protocol and response normalization.
//!
//! The trait is object-safe so callers can pick a provider at runtime
//! (`Box<dyn BarProvider>`).

pub mod errors;
pub mod tushare;

pub use errors::{ProviderError, ProviderInitError};

use crate::models::{bar::BarData, request::HistoryRequest};

pub trait BarProvider {
    /// Fetches all bars matching `req`, in the order the vendor returned them.
    ///
    /// A request range containing no data yields `Ok` with an empty vector;
    /// an interval the vendor cannot serve yields
    /// [`ProviderError::UnsupportedInterval`] without any network call.
    fn fetch_bars(&self, req: &HistoryRequest) -> Result<Vec<BarData>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::constant::{Exchange, Interval};

    struct EmptyProvider;

    impl BarProvider for EmptyProvider {
        fn fetch_bars(&self, _req: &HistoryRequest) -> Result<Vec<BarData>, ProviderError> {
            Ok(vec![])
        }
    }

    #[test]
    fn provider_is_object_safe() {
        let provider: Box<dyn BarProvider> = Box::new(EmptyProvider);

        let req = HistoryRequest {
            symbol: "600000".to_string(),
            exchange: Exchange::SSE,
            interval: Interval::Daily,
            start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            end: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        };

        let bars = provider.fetch_bars(&req).unwrap();
        assert!(bars.is_empty());
    }
}
