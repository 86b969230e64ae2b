use serde::Deserialize;

/// The request body for the `/chat` endpoint.
///
/// `username` may be omitted entirely; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub username: Option<String>,
}
