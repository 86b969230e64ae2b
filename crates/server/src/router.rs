use super::{handlers, state::AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Creates the Axum router with all the application routes.
///
/// CORS mirrors any origin and allows every method, header and credentials,
/// since the chat widget may be served from anywhere.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health_check))
        .route("/chat", post(handlers::chat_handler))
        .with_state(app_state)
        .layer(CorsLayer::very_permissive())
        .layer(TraceLayer::new_for_http())
}
