use axum::Router;
use tower_http::cors::CorsLayer;

use crate::routes::{health, recommendations, risk};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/risk", risk::router())
        .nest("/api/recommendations", recommendations::router())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
