pub mod finnhub;
pub mod quote_provider;
