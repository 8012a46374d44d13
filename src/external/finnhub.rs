use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::external::quote_provider::{QuoteProvider, QuoteProviderError};
use crate::models::{Quote, SymbolRecord};

pub const DEFAULT_BASE_URL: &str = "https://finnhub.io/api/v1";

pub struct FinnhubProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FinnhubProvider {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, QuoteProviderError> {
        let url = format!("{}{}", self.base_url, path);

        let resp = self
            .client
            .get(&url)
            .query(query)
            .query(&[("token", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        let status = resp.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(QuoteProviderError::RateLimited);
        }
        if !status.is_success() {
            return Err(QuoteProviderError::BadResponse(format!(
                "{} returned HTTP {}",
                path, status
            )));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| QuoteProviderError::Network(e.to_string()))?;

        parse_body(&body)
    }
}

/// Decode a provider response body.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, QuoteProviderError> {
    serde_json::from_slice(body).map_err(|e| QuoteProviderError::Parse(e.to_string()))
}

#[async_trait]
impl QuoteProvider for FinnhubProvider {
    async fn fetch_symbols(
        &self,
        exchange: &str,
    ) -> Result<Vec<SymbolRecord>, QuoteProviderError> {
        let records: Vec<SymbolRecord> = self
            .get_json("/stock/symbol", &[("exchange", exchange)])
            .await?;
        debug!("Fetched {} symbols for exchange {}", records.len(), exchange);
        Ok(records)
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError> {
        self.get_json("/quote", &[("symbol", symbol)]).await
    }
}
