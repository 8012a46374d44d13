#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use finwise_backend::external::quote_provider::{QuoteProvider, QuoteProviderError};
use finwise_backend::models::{Quote, SymbolRecord};

/// In-memory provider with scripted symbol lists and quotes.
#[derive(Default)]
pub struct FakeQuoteProvider {
    pub symbols: Vec<SymbolRecord>,
    pub symbols_fail: bool,
    pub quotes: HashMap<String, Quote>,
    /// Symbols whose quote request never completes
    pub hanging: HashSet<String>,
    /// Symbols whose quote arrives only after a delay
    pub delays: HashMap<String, Duration>,
    pub quote_calls: AtomicUsize,
}

impl FakeQuoteProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stock(mut self, symbol: &str, current: f64, previous: f64) -> Self {
        self.symbols.push(common_stock(symbol));
        self.quotes.insert(
            symbol.to_string(),
            Quote {
                current_price: current,
                previous_close: previous,
            },
        );
        self
    }

    /// Listed, but every quote request for it fails.
    pub fn with_unquoted_stock(mut self, symbol: &str) -> Self {
        self.symbols.push(common_stock(symbol));
        self
    }

    pub fn with_hanging_stock(mut self, symbol: &str) -> Self {
        self.symbols.push(common_stock(symbol));
        self.hanging.insert(symbol.to_string());
        self
    }

    pub fn with_slow_stock(mut self, symbol: &str, current: f64, previous: f64, delay: Duration) -> Self {
        self.delays.insert(symbol.to_string(), delay);
        self.with_stock(symbol, current, previous)
    }

    pub fn with_record(mut self, record: SymbolRecord) -> Self {
        self.symbols.push(record);
        self
    }

    pub fn failing_symbol_list(mut self) -> Self {
        self.symbols_fail = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn quote_calls(&self) -> usize {
        self.quote_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QuoteProvider for FakeQuoteProvider {
    async fn fetch_symbols(&self, _exchange: &str) -> Result<Vec<SymbolRecord>, QuoteProviderError> {
        if self.symbols_fail {
            return Err(QuoteProviderError::Network("connection refused".into()));
        }
        Ok(self.symbols.clone())
    }

    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteProviderError> {
        self.quote_calls.fetch_add(1, Ordering::SeqCst);

        if self.hanging.contains(symbol) {
            std::future::pending::<()>().await;
        }
        if let Some(delay) = self.delays.get(symbol) {
            tokio::time::sleep(*delay).await;
        }

        self.quotes
            .get(symbol)
            .copied()
            .ok_or_else(|| QuoteProviderError::BadResponse(format!("/quote returned HTTP 500 for {}", symbol)))
    }
}

pub fn common_stock(symbol: &str) -> SymbolRecord {
    SymbolRecord {
        symbol: symbol.to_string(),
        display_symbol: symbol.to_string(),
        description: format!("{} INC", symbol),
        instrument_type: Some("Common Stock".to_string()),
        mic: Some("XNAS".to_string()),
    }
}

pub fn symbols_of(instruments: &[finwise_backend::models::Instrument]) -> Vec<String> {
    instruments.iter().map(|i| i.symbol.clone()).collect()
}
