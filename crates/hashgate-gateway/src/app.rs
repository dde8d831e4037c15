use std::path::PathBuf;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers::{get_only, hash_handler, health_handler, not_found, post_only};
use crate::middleware::cors;
use crate::state::AppState;

pub struct App {
    state: AppState,
    static_dir: Option<PathBuf>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            static_dir: None,
        }
    }

    /// Serves files from `dir` for any path no API route matches.
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(dir.into());
        self
    }

    /// The API is mounted both at the root and under `/api`.
    pub fn router(self) -> Router {
        let router = Router::new()
            .merge(Self::api_routes())
            .nest("/api", Self::api_routes());

        let router = match self.static_dir {
            Some(dir) => router.fallback_service(ServeDir::new(dir)),
            None => router.fallback(not_found),
        };

        router
            .layer(axum::middleware::from_fn(cors))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state)
    }

    fn api_routes() -> Router<AppState> {
        Router::new()
            .route("/hash", post(hash_handler).fallback(post_only))
            .route("/health", get(health_handler).fallback(get_only))
    }
}
