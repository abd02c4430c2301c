//! Common error type and result alias.
//!
//! Every variant maps to a distinct HTTP status so callers can tell a
//! throttled request from an upstream failure or a poll deadline.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Replicate error: {0}")]
    Replicate(String),

    #[error("rate limit backend error: {0}")]
    RateLimit(String),

    #[error("rate limit exceeded: {remaining} of {limit} requests remaining")]
    RateLimited { limit: u64, remaining: u64 },

    #[error("image restoration job failed")]
    JobFailed,

    #[error("prediction did not resolve within {max_wait_secs}s")]
    PollTimeout { max_wait_secs: u64 },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::RateLimited { limit, remaining } => (
                StatusCode::TOO_MANY_REQUESTS,
                [
                    ("x-ratelimit-limit", limit.to_string()),
                    ("x-ratelimit-remaining", remaining.to_string()),
                ],
                "Too many uploads in 1 day. Please try again in a 24 hours.",
            )
                .into_response(),
            AppError::JobFailed => {
                (StatusCode::BAD_GATEWAY, "Failed to restore image").into_response()
            }
            AppError::PollTimeout { .. } => {
                (StatusCode::GATEWAY_TIMEOUT, self.to_string()).into_response()
            }
            AppError::HttpClient(_) | AppError::Replicate(_) | AppError::RateLimit(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
            }
        }
    }
}
