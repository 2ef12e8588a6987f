#![cfg(test)]
use chrono::NaiveDate;
use serial_test::serial;
use tushare_datafeed::{
    models::{
        constant::{Exchange, Interval},
        request::HistoryRequest,
    },
    providers::{BarProvider, tushare::TushareProvider},
    settings::Settings,
};

#[test]
#[serial]
#[ignore]
fn test_tushare_provider_fetch_bars() {
    // This test requires TUSHARE_TOKEN to be set in the environment.
    if std::env::var("TUSHARE_TOKEN").is_err() {
        println!("Skipping test_tushare_provider_fetch_bars: token not set.");
        return;
    }

    let settings = Settings::from_env();
    let mut provider = TushareProvider::new(&settings).expect("Failed to create TushareProvider");
    assert!(provider.init(""), "init should succeed with env token");

    let req = HistoryRequest {
        symbol: "600000".to_string(),
        exchange: Exchange::SSE,
        interval: Interval::Daily,
        start: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
        end: NaiveDate::from_ymd_opt(2020, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap(),
    };

    let result = provider.fetch_bars(&req);
    assert!(result.is_ok(), "fetch_bars returned an error: {:?}", result.err());

    let bars = result.unwrap();
    assert!(!bars.is_empty(), "Expected at least one bar for 600000");

    for bar in &bars {
        assert_eq!(bar.symbol, "600000");
        assert_eq!(bar.exchange, Exchange::SSE);
        assert_eq!(bar.interval, Interval::Daily);
        assert_eq!(bar.gateway_name, "TS");
    }
}
