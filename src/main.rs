use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::sync::watch;

use finwise_backend::config::AppConfig;
use finwise_backend::external::finnhub::FinnhubProvider;
use finwise_backend::external::quote_provider::QuoteProvider;
use finwise_backend::logging::{init_logging, LoggingConfig};
use finwise_backend::{create_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    init_logging(LoggingConfig::from_env()).map_err(|e| anyhow::anyhow!(e))?;

    let config = AppConfig::from_env().context("invalid configuration")?;

    tracing::info!(
        "📈 Using Finnhub at {} (exchange {}, up to {} symbols, {} concurrent quotes)",
        config.finnhub_base_url,
        config.symbol_exchange,
        config.universe_limit,
        config.quote_max_concurrent
    );
    let provider: Arc<dyn QuoteProvider> = Arc::new(FinnhubProvider::new(
        config.finnhub_api_key.clone(),
        config.finnhub_base_url.clone(),
    ));

    let addr = config.bind_addr;
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let app = create_app(AppState::with_shutdown(config, provider, shutdown_rx));

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("🚀 Finwise backend running at http://{}/", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await?;

    Ok(())
}

/// Waits for Ctrl-C, then tells in-flight aggregations to stop.
async fn shutdown_signal(shutdown: watch::Sender<bool>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C, shutdown signal disabled: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("🛑 Shutting down, cancelling in-flight quote requests");
    let _ = shutdown.send(true);
}
