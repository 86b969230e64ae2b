//! # Chat Client
//!
//! Orchestrates one chat request: classify, optionally resolve the user and
//! fetch database context, assemble the prompt, and call the completion
//! provider. Database failures are absorbed so a reply is always attempted;
//! provider failures become a reply-shaped error message.

use crate::{
    context::build_context,
    errors::{BuildError, DataAccessError},
    prompts::assemble,
    providers::{ai::AiProvider, db::storage::FarmStore},
    topic::classify,
    types::{ChatReply, Topic},
};
use tracing::{error, info, warn};

/// Returned when the trimmed message is empty.
pub const EMPTY_MESSAGE_REPLY: &str = "Por favor, escribe algo para que pueda ayudarte 😊";

/// Prefix of the reply sent when the completion provider fails.
pub const UPSTREAM_ERROR_PREFIX: &str = "⚠️ Error al contactar con el proveedor de IA:";

/// The chat orchestrator, holding its two collaborators.
#[derive(Clone, Debug)]
pub struct ChatClient {
    pub ai_provider: Box<dyn AiProvider>,
    pub store: Box<dyn FarmStore>,
}

/// A builder for creating a `ChatClient`.
#[derive(Default)]
pub struct ChatClientBuilder {
    ai_provider: Option<Box<dyn AiProvider>>,
    store: Option<Box<dyn FarmStore>>,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the completion provider.
    pub fn ai_provider(mut self, ai_provider: Box<dyn AiProvider>) -> Self {
        self.ai_provider = Some(ai_provider);
        self
    }

    /// Sets the store holding users, crops, products and sales.
    pub fn store(mut self, store: Box<dyn FarmStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn build(self) -> Result<ChatClient, BuildError> {
        let ai_provider = self.ai_provider.ok_or(BuildError::MissingAiProvider)?;
        let store = self.store.ok_or(BuildError::MissingStore)?;
        Ok(ChatClient { ai_provider, store })
    }
}

impl ChatClient {
    /// Answers one chat message, optionally grounded in `username`'s records.
    ///
    /// This never fails: every collaborator failure is either absorbed or
    /// turned into reply text.
    pub async fn chat(&self, message: &str, username: Option<&str>) -> ChatReply {
        let message = message.trim();
        if message.is_empty() {
            return ChatReply::text_only(EMPTY_MESSAGE_REPLY);
        }

        let topic = classify(message);
        let username = username.map(str::trim).filter(|u| !u.is_empty());
        info!(topic = ?topic, username = ?username, "Handling chat message");

        let db_context = match username {
            Some(username) => match self.resolve_context(username, topic).await {
                Ok(context) => context,
                Err(e) => {
                    warn!(error = %e, username, "Could not load database context; continuing without it");
                    None
                }
            },
            None => None,
        };

        let instructions = assemble(topic, db_context.as_deref());

        match self.ai_provider.complete(&instructions, message).await {
            Ok(reply) => ChatReply {
                reply,
                used_topic: topic,
                used_username: username.map(String::from),
                db_context,
            },
            Err(e) => {
                error!(error = %e, "Completion provider call failed");
                ChatReply::text_only(format!("{UPSTREAM_ERROR_PREFIX} {e}"))
            }
        }
    }

    /// Resolves `username` and, for a recognized topic, renders its context.
    ///
    /// Returns `Ok(None)` when the user does not exist or the topic is not
    /// recognized; no context query is issued in either case.
    pub async fn resolve_context(
        &self,
        username: &str,
        topic: Option<Topic>,
    ) -> Result<Option<String>, DataAccessError> {
        let Some(topic) = topic else {
            return Ok(None);
        };
        let Some(user_id) = self.store.find_user_id(username).await? else {
            info!(username, "Username not found; answering without context");
            return Ok(None);
        };
        let context = build_context(&*self.store, user_id, topic).await?;
        Ok(Some(context))
    }
}
