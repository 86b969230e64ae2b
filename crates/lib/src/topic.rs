//! # Topic Classifier
//!
//! Maps a raw chat message to a [`Topic`] by keyword substring matching.

use crate::types::Topic;

/// Substrings that mark a sales or pricing question.
pub const COMMERCIAL_KEYWORDS: &[&str] = &[
    "precio",
    "precios",
    "vender",
    "venta",
    "comprador",
    "compradores",
    "mercado",
    "negocio",
    "ganancia",
    "margen",
];

/// Substrings that mark an agronomic question.
pub const TECHNICAL_KEYWORDS: &[&str] = &[
    "riego",
    "regar",
    "fertiliz",
    "abono",
    "plaga",
    "plagas",
    "insecto",
    "enfermedad",
    "hongos",
    "control de plagas",
];

/// Classifies a message. Commercial keywords take precedence over technical ones.
pub fn classify(message: &str) -> Option<Topic> {
    let lowered = message.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lowered.contains(k));

    if contains_any(COMMERCIAL_KEYWORDS) {
        Some(Topic::Commercial)
    } else if contains_any(TECHNICAL_KEYWORDS) {
        Some(Topic::Technical)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("PRECIO del café"), Some(Topic::Commercial));
        assert_eq!(classify("Riego por goteo"), Some(Topic::Technical));
    }

    #[test]
    fn test_classify_matches_word_stems() {
        assert_eq!(classify("¿Cómo fertilizo mi maíz?"), Some(Topic::Technical));
    }
}
