//! # Ayni
//!
//! The chat relay behind the Ayni agricultural assistant. A message is
//! classified by topic, optionally enriched with the user's crops or sales
//! from the database, wrapped in a fixed persona prompt, and sent to a
//! completion provider.

pub mod chat;
pub mod context;
pub mod errors;
pub mod prompts;
pub mod providers;
pub mod topic;
pub mod types;

pub use chat::{ChatClient, ChatClientBuilder};
pub use errors::{BuildError, DataAccessError, UpstreamError};
pub use types::{ChatReply, Instruction, Role, Topic};
