//! # Prompt Assembler
//!
//! Builds the ordered instruction list for one request: the base persona,
//! then an optional topic tag, then an optional database context entry.

use super::core::{
    BASE_SYSTEM_PROMPT, COMMERCIAL_TOPIC_TAG, DB_CONTEXT_PREFACE, TECHNICAL_TOPIC_TAG,
};
use crate::types::{Instruction, Topic};

/// A builder for the per-request instruction list.
#[derive(Debug, Default, Clone)]
pub struct PromptBuilder<'a> {
    topic: Option<Topic>,
    context: Option<&'a str>,
}

impl<'a> PromptBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the interpreted topic. `None` adds no tag entry.
    pub fn topic(mut self, topic: Option<Topic>) -> Self {
        self.topic = topic;
        self
    }

    /// Sets the rendered database context. `None` or an empty string adds no entry.
    pub fn context(mut self, context: Option<&'a str>) -> Self {
        self.context = context.filter(|c| !c.is_empty());
        self
    }

    pub fn build(self) -> Vec<Instruction> {
        let mut instructions = vec![Instruction::system(BASE_SYSTEM_PROMPT)];

        if let Some(topic) = self.topic {
            let tag = match topic {
                Topic::Technical => TECHNICAL_TOPIC_TAG,
                Topic::Commercial => COMMERCIAL_TOPIC_TAG,
            };
            instructions.push(Instruction::system(tag));
        }

        if let Some(context) = self.context {
            instructions.push(Instruction::system(format!("{DB_CONTEXT_PREFACE}{context}")));
        }

        instructions
    }
}

/// Shorthand for `PromptBuilder::new().topic(topic).context(context).build()`.
pub fn assemble(topic: Option<Topic>, context: Option<&str>) -> Vec<Instruction> {
    PromptBuilder::new().topic(topic).context(context).build()
}
