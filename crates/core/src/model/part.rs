use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::PartId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PartError {
    #[error("word part `{id}` has empty text")]
    EmptyWord { id: PartId },
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// Grammatical role of a word part.
///
/// Drives both the pattern hint vocabulary and the color coding of chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    Subject,
    Verb,
    Object,
    Complement,
    Conjunction,
}

impl PartCategory {
    pub const ALL: [PartCategory; 5] = [
        PartCategory::Subject,
        PartCategory::Verb,
        PartCategory::Object,
        PartCategory::Complement,
        PartCategory::Conjunction,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PartCategory::Subject => "subject",
            PartCategory::Verb => "verb",
            PartCategory::Object => "object",
            PartCategory::Complement => "complement",
            PartCategory::Conjunction => "conjunction",
        }
    }

    /// Human-readable label, pluralised for legends ("Subjects").
    #[must_use]
    pub fn plural_label(self) -> &'static str {
        match self {
            PartCategory::Subject => "Subjects",
            PartCategory::Verb => "Verbs",
            PartCategory::Object => "Objects",
            PartCategory::Complement => "Complements",
            PartCategory::Conjunction => "Conjunctions",
        }
    }
}

//
// ─── WORD PART ─────────────────────────────────────────────────────────────────
//

/// A draggable token offered to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPart {
    id: PartId,
    word: String,
    category: PartCategory,
}

impl WordPart {
    /// # Errors
    ///
    /// Returns `PartError::EmptyWord` if `word` is blank.
    pub fn new(
        id: PartId,
        word: impl Into<String>,
        category: PartCategory,
    ) -> Result<Self, PartError> {
        let word = word.into();
        if word.trim().is_empty() {
            return Err(PartError::EmptyWord { id });
        }
        Ok(Self { id, word, category })
    }

    #[must_use]
    pub fn id(&self) -> &PartId {
        &self.id
    }

    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    #[must_use]
    pub fn category(&self) -> PartCategory {
        self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_word_is_rejected() {
        let err = WordPart::new(PartId::new("x"), "  ", PartCategory::Verb).unwrap_err();
        assert_eq!(err, PartError::EmptyWord { id: PartId::new("x") });
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&PartCategory::Conjunction).unwrap();
        assert_eq!(json, "\"conjunction\"");
        for category in PartCategory::ALL {
            assert_eq!(json_name(category), category.as_str());
        }
    }

    fn json_name(category: PartCategory) -> String {
        serde_json::to_value(category)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }
}
