//! Typed inbound payloads for the HTTP API.
use serde::Deserialize;

/// Body of `POST /generate`. `theme` and `room` are optional; missing or
/// empty values are replaced with literal defaults before prompt building.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub image_url: String,
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub room: Option<String>,
}
