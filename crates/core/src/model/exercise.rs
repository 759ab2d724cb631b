use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{ExerciseId, PartId};
use crate::model::part::WordPart;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise `{id}` has an empty target sentence")]
    EmptyTarget { id: ExerciseId },

    #[error("exercise `{id}` has no word parts")]
    NoParts { id: ExerciseId },

    #[error("exercise `{id}` lists word part `{part}` more than once")]
    DuplicatePart { id: ExerciseId, part: PartId },
}

//
// ─── EXERCISE ──────────────────────────────────────────────────────────────────
//

/// One sentence-assembly puzzle: a target sentence, a pool of word parts
/// (distractors included) and a pattern hint shown to the learner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    id: ExerciseId,
    target_sentence: String,
    parts: Vec<WordPart>,
    pattern_hint: String,
}

impl Exercise {
    /// Creates an exercise.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyTarget` if the target is blank,
    /// `ExerciseError::NoParts` if `parts` is empty and
    /// `ExerciseError::DuplicatePart` if two parts share an id.
    pub fn new(
        id: ExerciseId,
        target_sentence: impl Into<String>,
        parts: Vec<WordPart>,
        pattern_hint: impl Into<String>,
    ) -> Result<Self, ExerciseError> {
        let target_sentence = target_sentence.into();
        if target_sentence.trim().is_empty() {
            return Err(ExerciseError::EmptyTarget { id });
        }
        if parts.is_empty() {
            return Err(ExerciseError::NoParts { id });
        }

        let mut seen = HashSet::with_capacity(parts.len());
        for part in &parts {
            if !seen.insert(part.id()) {
                return Err(ExerciseError::DuplicatePart {
                    part: part.id().clone(),
                    id,
                });
            }
        }

        Ok(Self {
            id,
            target_sentence,
            parts,
            pattern_hint: pattern_hint.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    #[must_use]
    pub fn target_sentence(&self) -> &str {
        &self.target_sentence
    }

    #[must_use]
    pub fn parts(&self) -> &[WordPart] {
        &self.parts
    }

    #[must_use]
    pub fn pattern_hint(&self) -> &str {
        &self.pattern_hint
    }

    /// Number of words in the target sentence.
    #[must_use]
    pub fn target_word_count(&self) -> usize {
        self.target_sentence.split_whitespace().count()
    }

    /// Looks up a part of this exercise by id.
    #[must_use]
    pub fn part(&self, id: &PartId) -> Option<&WordPart> {
        self.parts.iter().find(|part| part.id() == id)
    }

    /// Returns the exercise with its part pool reordered by `reorder`.
    ///
    /// The closure may only permute the slice, so the id set is unchanged.
    #[must_use]
    pub fn with_reordered_parts(mut self, reorder: impl FnOnce(&mut [WordPart])) -> Self {
        reorder(self.parts.as_mut_slice());
        self
    }
}
