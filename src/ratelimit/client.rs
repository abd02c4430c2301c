//! Fixed-window rate limiting backed by the Upstash Redis REST API.
//!
//! The counter is externally owned: each check is one pipeline round-trip
//! (`INCR` the window key, `PEXPIRE .. NX` on first touch) so concurrent
//! service instances share the same quota. No local state is kept between
//! requests. When the backend is unconfigured the client is simply not
//! constructed and the handler skips the check.
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{AppError, AppResult};

/// Outcome of one rate-limit check, echoed into `X-RateLimit-*` headers.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitDecision {
    pub allowed: bool,
    pub limit: u64,
    pub remaining: u64,
}

#[derive(Debug, Deserialize)]
struct PipelineResult {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Clone)]
pub struct RateLimiterClient {
    client: Client,
    rest_url: String,
    rest_token: String,
    capacity: u64,
    window: Duration,
}

impl RateLimiterClient {
    pub fn new(rest_url: String, rest_token: String, capacity: u64, window: Duration) -> Self {
        let rest_url = rest_url.trim_end_matches('/').to_string();
        RateLimiterClient {
            client: Client::new(),
            rest_url,
            rest_token,
            capacity,
            window,
        }
    }

    /// Count one request for `identifier` within the current fixed window.
    ///
    /// The window key embeds the window index, so counts reset when the
    /// clock crosses a window boundary rather than sliding.
    pub async fn limit(&self, identifier: &str) -> AppResult<RateLimitDecision> {
        let key = self.window_key(identifier, now_millis());
        let window_ms = self.window.as_millis() as u64;
        let commands = json!([
            ["INCR", key.as_str()],
            ["PEXPIRE", key.as_str(), window_ms.to_string().as_str(), "NX"],
        ]);

        let response = self
            .client
            .post(format!("{}/pipeline", self.rest_url))
            .header("Authorization", format!("Bearer {}", self.rest_token))
            .json(&commands)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            return Err(AppError::RateLimit(format!(
                "pipeline request failed. Status: {}, Body: {}",
                status, body
            )));
        }

        let results: Vec<PipelineResult> = response.json().await.map_err(AppError::HttpClient)?;
        let incr = results
            .first()
            .ok_or_else(|| AppError::RateLimit("empty pipeline response".to_string()))?;
        if let Some(error) = &incr.error {
            return Err(AppError::RateLimit(format!("INCR failed: {}", error)));
        }
        let count = incr
            .result
            .as_ref()
            .and_then(|v| v.as_u64())
            .ok_or_else(|| AppError::RateLimit("non-numeric INCR result".to_string()))?;

        Ok(self.decide(count))
    }

    fn window_key(&self, identifier: &str, now_ms: u64) -> String {
        let window_index = now_ms / self.window.as_millis() as u64;
        format!("ratelimit:{}:{}", identifier, window_index)
    }

    fn decide(&self, count: u64) -> RateLimitDecision {
        RateLimitDecision {
            allowed: count <= self.capacity,
            limit: self.capacity,
            remaining: self.capacity.saturating_sub(count),
        }
    }
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
