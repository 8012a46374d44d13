use std::sync::Arc;

use futures::future::join_all;
use thiserror::Error;
use tokio::sync::watch;
use tokio::time::{timeout, Duration, Instant};
use tracing::{error, info, warn};

use crate::external::quote_provider::{QuoteProvider, QuoteProviderError};
use crate::models::{Instrument, OrderingPolicy, SymbolRecord};
use crate::services::rate_limiter::RateLimiter;

/// Instrument types kept from the symbol listing.
pub const ALLOWED_TYPES: [&str; 2] = ["Common Stock", "EQS"];
/// Market identifier codes kept from the symbol listing (Nasdaq, NYSE).
pub const ALLOWED_MICS: [&str; 2] = ["XNAS", "XNYS"];
/// Reference return, in percent, for the balanced ordering.
pub const BALANCED_REFERENCE_RETURN: f64 = 5.0;

#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("failed to load symbol universe: {0}")]
    Upstream(#[from] QuoteProviderError),

    #[error("aggregation cancelled")]
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct AggregatorSettings {
    /// Instruments kept after filtering the symbol listing
    pub universe_limit: usize,
    /// Budget for a single quote request; exceeding it counts as a failure
    pub request_timeout: Duration,
    pub max_concurrent: usize,
    /// 0 disables request spacing
    pub requests_per_minute: u32,
}

impl Default for AggregatorSettings {
    fn default() -> Self {
        Self {
            universe_limit: 50,
            request_timeout: Duration::from_secs(10),
            max_concurrent: 10,
            requests_per_minute: 300,
        }
    }
}

/// Fetches quotes for a symbol universe and ranks the instruments by their
/// latest percent change.
pub struct QuoteAggregator {
    provider: Arc<dyn QuoteProvider>,
    limiter: Arc<RateLimiter>,
    settings: AggregatorSettings,
}

impl QuoteAggregator {
    pub fn new(provider: Arc<dyn QuoteProvider>, settings: AggregatorSettings) -> Self {
        let limiter = Arc::new(RateLimiter::new(
            settings.max_concurrent,
            settings.requests_per_minute,
        ));

        Self {
            provider,
            limiter,
            settings,
        }
    }

    /// Fetch the symbol listing and keep the tradable common stocks.
    ///
    /// Any failure here fails the whole operation; no partial list is returned.
    pub async fn load_universe(&self, exchange: &str) -> Result<Vec<Instrument>, AggregationError> {
        let records = self.provider.fetch_symbols(exchange).await.map_err(|e| {
            error!("Failed to load symbol list for exchange {}: {}", exchange, e);
            AggregationError::Upstream(e)
        })?;

        let total = records.len();
        let universe = select_universe(records, self.settings.universe_limit);
        info!(
            "📋 Selected {} of {} symbols on {} for quoting",
            universe.len(),
            total,
            exchange
        );

        Ok(universe)
    }

    /// Quote every instrument concurrently, wait for all of them, and rank
    /// the ones that resolved.
    ///
    /// Failed, malformed or timed-out quotes leave the instrument unpriced and
    /// it drops out of the ranking. If every quote fails the result is an empty
    /// list, not an error.
    ///
    /// Setting `cancel` to `true` abandons the join and drops the in-flight
    /// requests. Dropping the returned future does the same.
    pub async fn build_ranked_instruments(
        &self,
        universe: Vec<Instrument>,
        policy: OrderingPolicy,
        cancel: Option<watch::Receiver<bool>>,
    ) -> Result<Vec<Instrument>, AggregationError> {
        let requested = universe.len();
        let started = Instant::now();

        let fan_out = join_all(universe.into_iter().map(|instrument| self.fetch_one(instrument)));

        let resolved = tokio::select! {
            resolved = fan_out => resolved,
            _ = wait_for_cancel(cancel) => {
                info!("Quote aggregation for {} symbols cancelled", requested);
                return Err(AggregationError::Cancelled);
            }
        };

        let ranked = rank(resolved, policy);

        if requested > 0 && ranked.is_empty() {
            warn!("No quotes resolved for {} requested symbols", requested);
        }
        info!(
            "📊 Ranked {}/{} instruments by {:?} in {:?}",
            ranked.len(),
            requested,
            policy,
            started.elapsed()
        );

        Ok(ranked)
    }

    /// Load the universe for `exchange` and rank it under `policy`.
    pub async fn recommend(
        &self,
        exchange: &str,
        policy: OrderingPolicy,
        cancel: Option<watch::Receiver<bool>>,
    ) -> Result<Vec<Instrument>, AggregationError> {
        let universe = tokio::select! {
            universe = self.load_universe(exchange) => universe?,
            _ = wait_for_cancel(cancel.clone()) => return Err(AggregationError::Cancelled),
        };

        self.build_ranked_instruments(universe, policy, cancel).await
    }

    async fn fetch_one(&self, instrument: Instrument) -> Instrument {
        let _guard = match self.limiter.acquire().await {
            Ok(guard) => guard,
            Err(e) => {
                warn!("Skipping quote for {}: {}", instrument.symbol, e);
                return instrument;
            }
        };

        let result = match timeout(
            self.settings.request_timeout,
            self.provider.fetch_quote(&instrument.symbol),
        )
        .await
        {
            Ok(result) => result,
            Err(_) => Err(QuoteProviderError::Timeout),
        };

        match result {
            Ok(quote) => instrument.with_quote(quote),
            Err(e) => {
                warn!("Quote for {} unavailable: {}", instrument.symbol, e);
                instrument
            }
        }
    }
}

/// Keep common stocks listed on the allowed venues, in listing order, up to
/// `limit` entries.
pub fn select_universe(records: Vec<SymbolRecord>, limit: usize) -> Vec<Instrument> {
    records
        .into_iter()
        .filter(|r| {
            r.instrument_type
                .as_deref()
                .is_some_and(|t| ALLOWED_TYPES.contains(&t))
                && r.mic.as_deref().is_some_and(|m| ALLOWED_MICS.contains(&m))
        })
        .take(limit)
        .map(Instrument::from)
        .collect()
}

/// Drop instruments without a percent change and order the rest by `policy`.
///
/// The sort is stable, so equal keys keep their input order.
pub fn rank(instruments: Vec<Instrument>, policy: OrderingPolicy) -> Vec<Instrument> {
    let mut keyed: Vec<(f64, Instrument)> = instruments
        .into_iter()
        .filter_map(|i| i.percent_change().map(|change| (change, i)))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| match policy {
        OrderingPolicy::MinimalVolatility => a.abs().total_cmp(&b.abs()),
        OrderingPolicy::ConservativeGrowth => a.total_cmp(b),
        OrderingPolicy::Balanced => (a - BALANCED_REFERENCE_RETURN)
            .abs()
            .total_cmp(&(b - BALANCED_REFERENCE_RETURN).abs()),
        OrderingPolicy::Aggressive
        | OrderingPolicy::MaximalGrowth
        | OrderingPolicy::Default => b.total_cmp(a),
    });

    keyed.into_iter().map(|(_, i)| i).collect()
}

/// Resolves once cancellation is requested. Never resolves without a signal
/// or after the sender is gone.
async fn wait_for_cancel(cancel: Option<watch::Receiver<bool>>) {
    let Some(mut rx) = cancel else {
        return std::future::pending().await;
    };

    loop {
        if *rx.borrow_and_update() {
            return;
        }
        if rx.changed().await.is_err() {
            return std::future::pending().await;
        }
    }
}
