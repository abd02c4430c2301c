//! Axum request handlers for the HTTP API.
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::api::types::GenerateRequest;
use crate::error::{AppError, AppResult};
use crate::prompt::builder::{apply_defaults, build_prompt};

pub async fn root() -> &'static str {
    "Room Restyle Proxy"
}

/// Restyle one room image: rate-limit check, prompt build, job submission,
/// then a bounded poll of the prediction until it resolves.
///
/// Success is `200` with the prediction output (a URL string or an array of
/// them). Throttled callers get `429`, upstream failures `502`, and a poll
/// deadline `504` -- all via `AppError`'s response mapping.
pub async fn generate(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<GenerateRequest>,
) -> AppResult<Json<Value>> {
    if let Some(ratelimiter) = &state.ratelimiter {
        let identifier = headers
            .get("x-real-ip")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let decision = ratelimiter.limit(identifier).await?;
        if !decision.allowed {
            tracing::info!("Rate limit exceeded for identifier '{}'", identifier);
            return Err(AppError::RateLimited {
                limit: decision.limit,
                remaining: decision.remaining,
            });
        }
    }

    let (room, theme) = apply_defaults(payload.room.as_deref(), payload.theme.as_deref());
    let prompt = build_prompt(&room, &theme);

    let prediction = state
        .replicate
        .create_prediction(&payload.image_url, &prompt)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create prediction: {:?}", e);
            e
        })?;
    // create_prediction guarantees urls.get is present
    let status_url = prediction
        .status_url()
        .ok_or_else(|| AppError::Replicate("prediction response is missing urls.get".to_string()))?
        .to_string();

    let output = state.replicate.wait_for_output(&status_url, state.poll).await?;
    Ok(Json(output))
}
