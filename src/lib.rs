use std::sync::{atomic::AtomicU64, Arc};

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;

use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Number of `/process` jobs that ran their full delay, whether or not the caller stayed.
    pub completed_jobs: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            completed_jobs: Arc::new(AtomicU64::new(0)),
        }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::discovery))
        .route("/health", get(http::handlers::health))
        .route(
            "/process",
            post(http::handlers::process).layer(DefaultBodyLimit::disable()),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            logging::request_logging_middleware,
        ))
        .with_state(state)
}
