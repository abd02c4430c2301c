//! Thin HTTP client for the Replicate predictions API.
//!
//! - `create_prediction` posts one job to `/v1/predictions`.
//! - `get_prediction` fetches the current state from a status URL.
//! - `wait_for_output` polls the status URL at a fixed interval until the
//!   job resolves or the wall-clock deadline expires.
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::time::{sleep, Instant};

use crate::error::{AppError, AppResult};
use crate::replicate::types::{Prediction, PredictionRequest, PredictionStatus};

/// Fixed-interval polling with a wall-clock bound. No backoff or jitter.
#[derive(Debug, Clone, Copy)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_wait: Duration,
}

impl Default for PollPolicy {
    fn default() -> Self {
        PollPolicy {
            interval: Duration::from_millis(1000),
            max_wait: Duration::from_secs(300),
        }
    }
}

#[derive(Clone)]
pub struct ReplicateClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ReplicateClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let base = base_url.trim_end_matches('/').to_string();
        ReplicateClient {
            client: Client::new(),
            base_url: base,
            api_key,
        }
    }

    fn auth_header(&self) -> String {
        format!("Token {}", self.api_key)
    }

    /// Submit one restoration job.
    ///
    /// Returns the prediction descriptor, whose `urls.get` field is the
    /// status-polling URL for the rest of the request.
    pub async fn create_prediction(&self, image_url: &str, prompt: &str) -> AppResult<Prediction> {
        let url = format!("{}/v1/predictions", self.base_url);
        tracing::info!("Submitting prediction to {}", url);
        tracing::debug!("Prompt: {}", prompt);

        let body = PredictionRequest::new(image_url.to_string(), prompt.to_string());
        let response = self
            .client
            .post(&url)
            .header("Authorization", self.auth_header())
            .json(&body)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let prediction: Prediction = response.json().await.map_err(AppError::HttpClient)?;
            if prediction.status_url().is_none() {
                return Err(AppError::Replicate(
                    "prediction response is missing urls.get".to_string(),
                ));
            }
            Ok(prediction)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message =
                format!("Failed to create prediction. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Replicate(error_message))
        }
    }

    /// Fetch the current state of a prediction from its status URL.
    pub async fn get_prediction(&self, status_url: &str) -> AppResult<Prediction> {
        let response = self
            .client
            .get(status_url)
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            response.json().await.map_err(AppError::HttpClient)
        } else {
            Err(AppError::Replicate(format!(
                "Failed to poll prediction: {:?}",
                response.status()
            )))
        }
    }

    /// Poll the status URL until the job resolves, at the policy's fixed
    /// interval. Polls are strictly sequential. Expiry of the wall-clock
    /// deadline is its own error kind so callers can answer 504.
    pub async fn wait_for_output(&self, status_url: &str, policy: PollPolicy) -> AppResult<Value> {
        let deadline = Instant::now() + policy.max_wait;
        loop {
            tracing::info!("polling for result...");
            let prediction = self.get_prediction(status_url).await?;
            match prediction.status {
                PredictionStatus::Succeeded => {
                    return prediction.output.ok_or_else(|| {
                        AppError::Replicate("prediction succeeded without output".to_string())
                    });
                }
                PredictionStatus::Failed | PredictionStatus::Canceled => {
                    if let Some(error) = prediction.error {
                        tracing::error!("Prediction failed: {}", error);
                    }
                    return Err(AppError::JobFailed);
                }
                _ => {
                    if Instant::now() + policy.interval > deadline {
                        return Err(AppError::PollTimeout {
                            max_wait_secs: policy.max_wait.as_secs(),
                        });
                    }
                    sleep(policy.interval).await;
                }
            }
        }
    }
}
