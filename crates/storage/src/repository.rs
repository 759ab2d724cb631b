use sentencify_core::model::{Exercise, Lesson, LessonId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

use crate::seed::SeedError;

/// Errors surfaced by catalog adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("catalog lock poisoned: {0}")]
    Poisoned(String),

    #[error(transparent)]
    Seed(#[from] SeedError),
}

/// Read access to the lesson list, plus the session-scoped completion flag.
pub trait LessonCatalog: Send + Sync {
    /// All lessons in display order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError>;

    /// Fetch a lesson by ID, `None` when the catalog has no such lesson.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the catalog cannot be read.
    fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError>;

    /// Flag a lesson as completed.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::NotFound` for unknown lessons, or other storage errors.
    fn set_lesson_completed(&self, id: &LessonId) -> Result<(), StorageError>;
}

/// Maps a lesson to its ordered exercises.
pub trait ExerciseResolver: Send + Sync {
    /// Exercises for `lesson_id`; an unknown lesson yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backing data cannot be read.
    fn exercises_for(&self, lesson_id: &LessonId) -> Result<Vec<Exercise>, StorageError>;
}

/// In-memory catalog holding lessons in insertion order.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    lessons: Arc<Mutex<Vec<Lesson>>>,
    exercises: Arc<HashMap<LessonId, Vec<Exercise>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(lessons: Vec<Lesson>, exercises: HashMap<LessonId, Vec<Exercise>>) -> Self {
        Self {
            lessons: Arc::new(Mutex::new(lessons)),
            exercises: Arc::new(exercises),
        }
    }

    /// Repository preloaded with the built-in sentence-structure course.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the built-in data fails validation.
    pub fn with_builtin_course() -> Result<Self, StorageError> {
        let (lessons, exercises) = crate::seed::builtin_course()?;
        Ok(Self::new(lessons, exercises))
    }
}

impl LessonCatalog for InMemoryRepository {
    fn list_lessons(&self) -> Result<Vec<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.clone())
    }

    fn get_lesson(&self, id: &LessonId) -> Result<Option<Lesson>, StorageError> {
        let guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        Ok(guard.iter().find(|lesson| lesson.id() == id).cloned())
    }

    fn set_lesson_completed(&self, id: &LessonId) -> Result<(), StorageError> {
        let mut guard = self
            .lessons
            .lock()
            .map_err(|e| StorageError::Poisoned(e.to_string()))?;
        let lesson = guard
            .iter_mut()
            .find(|lesson| lesson.id() == id)
            .ok_or(StorageError::NotFound)?;
        lesson.mark_completed();
        Ok(())
    }
}

impl ExerciseResolver for InMemoryRepository {
    fn exercises_for(&self, lesson_id: &LessonId) -> Result<Vec<Exercise>, StorageError> {
        Ok(self.exercises.get(lesson_id).cloned().unwrap_or_default())
    }
}

/// Aggregates the catalog and resolver behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub lessons: Arc<dyn LessonCatalog>,
    pub exercises: Arc<dyn ExerciseResolver>,
}

impl Storage {
    /// # Errors
    ///
    /// Returns `StorageError::Seed` if the built-in data fails validation.
    pub fn builtin() -> Result<Self, StorageError> {
        let repo = InMemoryRepository::with_builtin_course()?;
        Ok(Self::from_repository(repo))
    }

    #[must_use]
    pub fn from_repository(repo: InMemoryRepository) -> Self {
        let lessons: Arc<dyn LessonCatalog> = Arc::new(repo.clone());
        let exercises: Arc<dyn ExerciseResolver> = Arc::new(repo);
        Self { lessons, exercises }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentencify_core::model::Difficulty;

    fn lesson(id: &str) -> Lesson {
        Lesson::new(
            LessonId::new(id),
            format!("Lesson {id}"),
            "",
            "Subject + Verb",
            "",
            Difficulty::Beginner,
        )
        .unwrap()
    }

    #[test]
    fn completion_flag_is_shared_between_clones() {
        let repo = InMemoryRepository::new(vec![lesson("a"), lesson("b")], HashMap::new());
        let storage = Storage::from_repository(repo.clone());

        storage.lessons.set_lesson_completed(&LessonId::new("b")).unwrap();

        let lessons = repo.list_lessons().unwrap();
        assert!(!lessons[0].is_completed());
        assert!(lessons[1].is_completed());
    }

    #[test]
    fn completing_unknown_lesson_is_not_found() {
        let repo = InMemoryRepository::new(vec![lesson("a")], HashMap::new());
        let err = repo.set_lesson_completed(&LessonId::new("zzz")).unwrap_err();
        assert!(matches!(err, StorageError::NotFound));
    }

    #[test]
    fn unknown_lesson_resolves_to_no_exercises() {
        let repo = InMemoryRepository::default();
        assert!(repo.exercises_for(&LessonId::new("missing")).unwrap().is_empty());
        assert!(repo.get_lesson(&LessonId::new("missing")).unwrap().is_none());
    }
}
