use std::sync::Arc;

use tokio::sync::watch;

use crate::config::AppConfig;
use crate::external::quote_provider::QuoteProvider;
use crate::services::quote_aggregator::QuoteAggregator;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub aggregator: Arc<QuoteAggregator>,
    /// Flips to `true` once the server starts shutting down
    pub shutdown: watch::Receiver<bool>,
}

impl AppState {
    /// State that is never signalled to shut down.
    pub fn new(config: AppConfig, provider: Arc<dyn QuoteProvider>) -> Self {
        let (_, shutdown) = watch::channel(false);
        Self::with_shutdown(config, provider, shutdown)
    }

    pub fn with_shutdown(
        config: AppConfig,
        provider: Arc<dyn QuoteProvider>,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        let aggregator = QuoteAggregator::new(provider, config.aggregator_settings());
        Self {
            config: Arc::new(config),
            aggregator: Arc::new(aggregator),
            shutdown,
        }
    }
}
