//! # Prompt Modules
//!
//! Static persona text lives in [`core`]; the per-request instruction list is
//! assembled by [`builder`].

pub mod builder;
pub mod core;

pub use builder::{assemble, PromptBuilder};
