//! # General Route Handlers
//!
//! Liveness and identity probes.

use axum::Json;
use serde_json::{json, Value};

/// The handler for the root (`/`) endpoint.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "Ayni ChatBot API funcionando correctamente 🤖"
    }))
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check() -> &'static str {
    "OK"
}
