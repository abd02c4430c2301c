//! Router construction and shared application state.
//!
//! Clients are built once at startup and reused by every request; handlers
//! never construct their own HTTP clients.
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::config::Config;
use crate::ratelimit::client::RateLimiterClient;
use crate::replicate::client::{PollPolicy, ReplicateClient};

pub struct AppState {
    pub replicate: ReplicateClient,
    /// `None` when the Upstash backend is unconfigured; the check is then
    /// skipped entirely (degrade-open).
    pub ratelimiter: Option<RateLimiterClient>,
    pub poll: PollPolicy,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let replicate = ReplicateClient::new(
            config.replicate_api_url.clone(),
            config.replicate_api_key.clone(),
        );
        let ratelimiter = match (&config.upstash_rest_url, &config.upstash_rest_token) {
            (Some(url), Some(token)) => Some(RateLimiterClient::new(
                url.clone(),
                token.clone(),
                config.rate_limit_capacity,
                Duration::from_secs(config.rate_limit_window_minutes * 60),
            )),
            _ => {
                tracing::warn!("Upstash credentials not set; rate limiting disabled");
                None
            }
        };
        let poll = PollPolicy {
            interval: Duration::from_millis(config.poll_interval_ms),
            max_wait: Duration::from_secs(config.poll_max_wait_secs),
        };
        AppState {
            replicate,
            ratelimiter,
            poll,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate", post(handlers::generate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
