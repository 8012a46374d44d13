pub mod app;
pub mod config;
pub mod errors;
pub mod external;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;

mod routes;

pub use app::create_app;
pub use state::AppState;
