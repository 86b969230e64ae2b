use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

/// A custom error type for the server application.
///
/// The chat flow itself never fails; the only error surfaced over HTTP is a
/// request body that cannot be read as a chat request.
pub enum AppError {
    /// The JSON body was missing, malformed, or had the wrong shape.
    InvalidPayload(JsonRejection),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidPayload(rejection)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::InvalidPayload(rejection) => {
                warn!("Rejected chat payload: {}", rejection.body_text());
                let body = Json(json!({
                    "error": rejection.body_text(),
                }));
                (rejection.status(), body).into_response()
            }
        }
    }
}
