pub mod openai;

use crate::{errors::UpstreamError, types::Instruction};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for interacting with a completion provider.
///
/// This trait defines a common interface for turning an ordered instruction
/// list plus the user's message into a generated reply.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Sends `instructions` followed by one user entry holding `user_message`.
    ///
    /// The result is the generated text, trimmed.
    async fn complete(
        &self,
        instructions: &[Instruction],
        user_message: &str,
    ) -> Result<String, UpstreamError>;
}

dyn_clone::clone_trait_object!(AiProvider);
