//! Error taxonomy shared by the data sources and the recommendation pipeline.
//!
//! Functions return `anyhow::Result`; these variants are wrapped inside the
//! `anyhow::Error` so callers can branch with `downcast_ref::<FundError>()`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FundError {
    /// The quote provider returned no usable time series for a symbol.
    #[error("No market data available for {symbol}: {reason}")]
    DataUnavailable { symbol: String, reason: String },

    #[error("Fund not found: {0}")]
    FundNotFound(String),

    /// No candidate funds could be fetched from any source.
    #[error("Recommendations unavailable: {0}")]
    RecommendationUnavailable(String),
}

impl FundError {
    pub fn data_unavailable(symbol: &str, reason: impl Into<String>) -> Self {
        FundError::DataUnavailable {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }
}

/// Returns the `FundError` carried by an `anyhow::Error`, if any.
pub fn fund_error(err: &anyhow::Error) -> Option<&FundError> {
    err.downcast_ref::<FundError>()
}
