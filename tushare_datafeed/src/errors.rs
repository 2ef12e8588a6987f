use thiserror::Error;

use crate::providers::errors::ProviderError;

/// The unified error type for the `tushare_datafeed` crate.
#[derive(Debug, Error)]
pub enum Error {
    /// An error originating from a data provider (e.g., API error, validation).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// An error related to configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A generic I/O error.
    #[error("I/O error")]
    Io(#[from] std::io::Error),
}
