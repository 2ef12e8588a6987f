//! Historical bar datafeed backed by Tushare Pro.
//!
//! This crate turns a platform-level history request (symbol, exchange,
//! interval, date range) into a Tushare Pro query and normalizes the
//! columnar response into ordered, exchange-localized [`BarData`] records.
//!
//! [`BarData`]: crate::models::bar::BarData

pub mod errors;
pub mod models;
pub mod providers;
pub mod settings;
