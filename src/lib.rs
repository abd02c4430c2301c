//! Room Restyle Proxy library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `replicate`: Thin client for the Replicate predictions API, including
//!   the bounded status poller.
//! - `prompt`: Deterministic interior-design prompt builder.
//! - `ratelimit`: Fixed-window rate limiter backed by the Upstash Redis
//!   REST API.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `ReplicateClient`,
//! `RateLimiterClient`, and `build_prompt`.
pub mod api;
pub mod replicate;
pub mod prompt;
pub mod ratelimit;
pub mod config;
pub mod error;

pub use config::Config;
pub use replicate::client::{PollPolicy, ReplicateClient};
pub use ratelimit::client::{RateLimitDecision, RateLimiterClient};
pub use prompt::builder::build_prompt;
