//! # Core Data Types
//!
//! Shared data structures passed between the classifier, the context builder,
//! the prompt assembler and the completion providers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The internal numeric identifier of a registered user.
pub type UserId = i64;

/// The interpreted intent of a chat message.
///
/// A message that matches no keyword has no topic, which is modelled as
/// `Option<Topic>::None` rather than a third variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    /// Agronomic questions: irrigation, fertilization, pests.
    Technical,
    /// Sales and pricing questions.
    Commercial,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Technical => "technical",
            Topic::Commercial => "commercial",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The author of an instruction entry sent to the completion provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One entry of the ordered instruction list sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub role: Role,
    pub content: String,
}

impl Instruction {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A crop row joined with its (optional) associated product.
///
/// Values are kept as display text; `None` means the column was NULL or the
/// crop has no product.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CropRecord {
    pub crop_name: Option<String>,
    pub watering_days: Option<String>,
    pub fertilize_crop: Option<String>,
    pub pest_cleanup_days: Option<String>,
    pub pick_up_weed: Option<String>,
    pub oxygenate_crop: Option<String>,
    pub make_crop_line: Option<String>,
    pub make_crop_hole: Option<String>,
    pub product_name: Option<String>,
    pub recommended_cultivation_depth: Option<String>,
    pub recommended_cultivation_distance: Option<String>,
    pub recommended_growing_climate: Option<String>,
    pub recommended_growing_season: Option<String>,
    pub recommended_soil_type: Option<String>,
}

/// A sale row as used by the commercial context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SaleRecord {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<f64>,
    pub description: Option<String>,
}

/// The outcome of one chat request.
///
/// `db_context` is returned alongside the reply so that callers can see which
/// records grounded the answer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_topic: Option<Topic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used_username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_context: Option<String>,
}

impl ChatReply {
    /// A reply carrying only text, with every diagnostic field omitted.
    pub fn text_only(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            ..Default::default()
        }
    }
}
