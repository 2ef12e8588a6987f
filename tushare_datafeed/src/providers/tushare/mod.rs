//! Tushare Pro historical bar provider.

pub mod code;
pub mod params;
pub mod provider;
pub mod response;

pub use provider::TushareProvider;
