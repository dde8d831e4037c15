//! HTTP gateway for the Hashgate token service.
//!
//! The gateway validates requests, hands inputs to a
//! [`TokenCache`](hashgate_cache::TokenCache) and renders the results as JSON.
//! All token semantics live behind that trait.

pub mod app;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod model;
pub mod state;
pub mod telemetry;

pub use app::App;
pub use error::AppError;
pub use state::AppState;
