pub mod affinity_matcher;
pub mod fund_screener;
pub mod quote_aggregator;
pub mod rate_limiter;
pub mod risk_classifier;
pub mod scoring_service;
