use thiserror::Error;

use crate::models::constant::Interval;

/// Errors that can occur within a [`BarProvider`](super::BarProvider)
/// implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[error("API request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider's API returned a specific error (e.g., invalid token).
    #[error("API error: {0}")]
    Api(String),

    /// The requested bar granularity is not served by this provider.
    ///
    /// Distinct from an empty result: no query is issued at all.
    #[error("Interval {0} is not supported by this provider")]
    UnsupportedInterval(Interval),

    /// The request parameters were invalid for this specific provider.
    #[error("Invalid parameters for provider: {0}")]
    Validation(String),

    /// An internal error occurred while processing data within the provider.
    #[error("Internal provider error: {0}")]
    Internal(String),
}

/// Errors that can occur while constructing a provider.
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}
