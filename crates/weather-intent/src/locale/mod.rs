//! Built-in locale vocabularies.
//!
//! Each locale builds its [`Vocabulary`] once; the tables are case-folded
//! during construction and never mutated afterwards, so a vocabulary can be
//! shared freely across concurrent resolutions.

mod english;
mod german;

pub use english::english;
pub use german::german;

use crate::error::{IntentError, Result};
use crate::vocabulary::Vocabulary;

/// Look up a built-in vocabulary by language tag.
///
/// # Errors
///
/// Returns [`IntentError::UnknownLocale`] for tags without a built-in
/// vocabulary.
pub fn for_language(tag: &str) -> Result<Vocabulary> {
    match tag.to_lowercase().as_str() {
        "en" | "en-us" | "en-gb" => Ok(english()),
        "de" | "de-de" | "de-at" | "de-ch" => Ok(german()),
        other => Err(IntentError::UnknownLocale(other.to_string())),
    }
}
