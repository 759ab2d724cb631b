use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::LessonId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LessonError {
    #[error("lesson `{id}` has an empty title")]
    EmptyTitle { id: LessonId },
}

/// How demanding a lesson is; shown as a badge on the lesson card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

/// Catalog entry for a themed group of exercises.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    id: LessonId,
    title: String,
    description: String,
    pattern: String,
    example: String,
    difficulty: Difficulty,
    completed: bool,
}

impl Lesson {
    /// Creates a lesson that is not yet completed.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::EmptyTitle` if `title` is blank.
    pub fn new(
        id: LessonId,
        title: impl Into<String>,
        description: impl Into<String>,
        pattern: impl Into<String>,
        example: impl Into<String>,
        difficulty: Difficulty,
    ) -> Result<Self, LessonError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(LessonError::EmptyTitle { id });
        }
        Ok(Self {
            id,
            title,
            description: description.into(),
            pattern: pattern.into(),
            example: example.into(),
            difficulty,
            completed: false,
        })
    }

    #[must_use]
    pub fn id(&self) -> &LessonId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn example(&self) -> &str {
        &self.example
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
