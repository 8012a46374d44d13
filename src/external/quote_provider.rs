use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Quote, SymbolRecord};

#[derive(Debug, Error)]
pub enum QuoteProviderError {
    #[error("network error: {0}")]
    Network(String),

    #[error("bad response: {0}")]
    BadResponse(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("rate limited")]
    RateLimited,

    #[error("request timed out")]
    Timeout,
}

/// Source of symbol listings and latest quotes.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    async fn fetch_symbols(
        &self,
        exchange: &str,
    ) -> Result<Vec<SymbolRecord>, QuoteProviderError>;

    async fn fetch_quote(
        &self,
        symbol: &str,
    ) -> Result<Quote, QuoteProviderError>;
}
