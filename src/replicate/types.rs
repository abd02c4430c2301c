//! Typed schemas for the Replicate predictions API.
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ControlNet interior-design model version pinned for every submission.
pub const MODEL_VERSION: &str =
    "854e8727697a057c525cdb45ab037f64ecca770a1769cc52287c2e56472a247b";

/// Fixed positive auxiliary prompt appended to every job.
pub const A_PROMPT: &str = "best quality, extremely detailed, interior design photo from Pinterest, ultra-detailed, ultra-realistic, award-winning home decor";

/// Fixed negative auxiliary prompt appended to every job.
pub const N_PROMPT: &str = "blurry images, low resolution, bad proportions, missing elements, cluttered spaces, poor lighting";

#[derive(Debug, Serialize)]
pub struct PredictionRequest {
    pub version: &'static str,
    pub input: PredictionInput,
}

#[derive(Debug, Serialize)]
pub struct PredictionInput {
    pub image: String,
    pub prompt: String,
    pub a_prompt: &'static str,
    pub n_prompt: &'static str,
}

impl PredictionRequest {
    pub fn new(image: String, prompt: String) -> Self {
        PredictionRequest {
            version: MODEL_VERSION,
            input: PredictionInput {
                image,
                prompt,
                a_prompt: A_PROMPT,
                n_prompt: N_PROMPT,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
    Canceled,
    /// Forward compatibility: an unrecognized status keeps the poll going.
    #[serde(other)]
    Unknown,
}

impl PredictionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            PredictionStatus::Succeeded | PredictionStatus::Failed | PredictionStatus::Canceled
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct PredictionUrls {
    pub get: String,
}

/// One prediction as reported by Replicate. `output` is a URL string or an
/// array of URL strings depending on the model, so it stays a raw value.
#[derive(Debug, Deserialize)]
pub struct Prediction {
    pub status: PredictionStatus,
    #[serde(default)]
    pub output: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub urls: Option<PredictionUrls>,
}

impl Prediction {
    /// Status-polling URL handed back on submission.
    pub fn status_url(&self) -> Option<&str> {
        self.urls.as_ref().map(|u| u.get.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn create_response_deserializes_with_status_url() {
        let body = json!({
            "id": "abc123",
            "status": "starting",
            "urls": { "get": "https://api.replicate.com/v1/predictions/abc123" }
        });
        let p: Prediction = serde_json::from_value(body).unwrap();
        assert_eq!(p.status, PredictionStatus::Starting);
        assert_eq!(
            p.status_url(),
            Some("https://api.replicate.com/v1/predictions/abc123")
        );
    }

    #[test]
    fn succeeded_response_carries_output() {
        let body = json!({
            "status": "succeeded",
            "output": ["https://replicate.delivery/out.png"]
        });
        let p: Prediction = serde_json::from_value(body).unwrap();
        assert!(p.status.is_terminal());
        assert_eq!(p.output, Some(json!(["https://replicate.delivery/out.png"])));
    }

    #[test]
    fn failed_response_carries_error_message() {
        let body = json!({ "status": "failed", "error": "NSFW content detected" });
        let p: Prediction = serde_json::from_value(body).unwrap();
        assert_eq!(p.status, PredictionStatus::Failed);
        assert_eq!(p.error.as_deref(), Some("NSFW content detected"));
    }

    #[test]
    fn unknown_status_is_nonterminal() {
        let body = json!({ "status": "queued-somewhere-new" });
        let p: Prediction = serde_json::from_value(body).unwrap();
        assert_eq!(p.status, PredictionStatus::Unknown);
        assert!(!p.status.is_terminal());
    }

    #[test]
    fn request_body_matches_wire_shape() {
        let req = PredictionRequest::new("http://x/img.png".into(), "a prompt".into());
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["version"], MODEL_VERSION);
        assert_eq!(v["input"]["image"], "http://x/img.png");
        assert_eq!(v["input"]["prompt"], "a prompt");
        assert_eq!(v["input"]["a_prompt"], A_PROMPT);
        assert_eq!(v["input"]["n_prompt"], N_PROMPT);
    }
}
