//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The database provider and the completion
//! provider are created once here and shared by every request.

use crate::config::AppConfig;
use ayni::{
    providers::{
        ai::openai::{CompletionSettings, OpenAiProvider},
        db::sqlite::SqliteProvider,
    },
    ChatClient, ChatClientBuilder,
};
use std::sync::Arc;
use tracing::{info, warn};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The chat orchestrator holding the store and completion provider.
    pub chat_client: Arc<ChatClient>,
}

impl AppState {
    pub fn new(chat_client: ChatClient) -> Self {
        Self {
            chat_client: Arc::new(chat_client),
        }
    }
}

/// Builds the shared application state from the configuration.
///
/// This function initializes all necessary services:
/// - It opens the farm database, creating the schema if configured to.
/// - It instantiates the OpenAI-compatible completion provider.
pub async fn build_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let store = SqliteProvider::new(&config.database_url).await?;
    info!(db = %config.database_url, "Initialized farm database provider (SQLite).");
    if config.initialize_schema {
        store.initialize_schema().await?;
    }

    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY is not set; completion requests will be sent without credentials.");
    }

    let settings = CompletionSettings {
        model: config.completion.model.clone(),
        temperature: config.completion.temperature,
        max_tokens: config.completion.max_tokens,
    };
    let ai_provider = OpenAiProvider::new(
        config.completion.api_url.clone(),
        config.openai_api_key.clone(),
        settings,
    )?;
    info!(
        api_url = %config.completion.api_url,
        model = %config.completion.model,
        "Initialized completion provider."
    );

    let chat_client = ChatClientBuilder::new()
        .ai_provider(Box::new(ai_provider))
        .store(Box::new(store))
        .build()?;

    Ok(AppState::new(chat_client))
}
