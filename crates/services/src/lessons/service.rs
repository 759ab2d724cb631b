use std::sync::Arc;

use rand::rng;
use rand::seq::SliceRandom;
use sentencify_core::model::{BuilderSettings, Exercise, Lesson, LessonId};
use sentencify_core::session::ExerciseSession;
use storage::repository::{ExerciseResolver, LessonCatalog, Storage};
use tracing::{debug, info};

use super::progress::CatalogProgress;
use crate::error::LessonServiceError;

//
// ─── OPEN LESSON ───────────────────────────────────────────────────────────────
//

/// A lesson opened in the modal together with its exercise session.
///
/// Dropping it discards all in-progress work; nothing is saved.
#[derive(Debug, Clone)]
pub struct LessonSession {
    lesson: Lesson,
    session: ExerciseSession,
}

impl LessonSession {
    #[must_use]
    pub fn new(lesson: Lesson, session: ExerciseSession) -> Self {
        Self { lesson, session }
    }

    #[must_use]
    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    #[must_use]
    pub fn session(&self) -> &ExerciseSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut ExerciseSession {
        &mut self.session
    }
}

/// What closing a lesson produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonOutcome {
    pub lesson_id: LessonId,
    pub completed_exercises: usize,
    pub total_exercises: usize,
    /// True when this close flipped the lesson's catalog flag.
    pub newly_completed: bool,
}

//
// ─── SERVICE ───────────────────────────────────────────────────────────────────
//

/// Opens and closes lessons against the catalog.
#[derive(Clone)]
pub struct LessonService {
    lessons: Arc<dyn LessonCatalog>,
    exercises: Arc<dyn ExerciseResolver>,
    settings: BuilderSettings,
}

impl LessonService {
    #[must_use]
    pub fn new(lessons: Arc<dyn LessonCatalog>, exercises: Arc<dyn ExerciseResolver>) -> Self {
        Self {
            lessons,
            exercises,
            settings: BuilderSettings::default(),
        }
    }

    #[must_use]
    pub fn from_storage(storage: &Storage) -> Self {
        Self::new(Arc::clone(&storage.lessons), Arc::clone(&storage.exercises))
    }

    #[must_use]
    pub fn with_settings(mut self, settings: BuilderSettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn settings(&self) -> BuilderSettings {
        self.settings
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the catalog cannot be read.
    pub fn list_lessons(&self) -> Result<Vec<Lesson>, LessonServiceError> {
        Ok(self.lessons.list_lessons()?)
    }

    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the catalog cannot be read.
    pub fn catalog_progress(&self) -> Result<CatalogProgress, LessonServiceError> {
        let lessons = self.lessons.list_lessons()?;
        Ok(CatalogProgress {
            total: lessons.len(),
            completed: lessons.iter().filter(|lesson| lesson.is_completed()).count(),
        })
    }

    /// Exercises for a lesson in catalog order; unknown lessons give none.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the resolver fails.
    pub fn exercises_for(&self, lesson_id: &LessonId) -> Result<Vec<Exercise>, LessonServiceError> {
        Ok(self.exercises.exercises_for(lesson_id)?)
    }

    /// Open a lesson and position its session on the first exercise.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::UnknownLesson` if the catalog has no such lesson.
    /// Returns `LessonServiceError::Storage` for catalog failures.
    pub fn open_lesson(&self, lesson_id: &LessonId) -> Result<LessonSession, LessonServiceError> {
        let lesson = self
            .lessons
            .get_lesson(lesson_id)?
            .ok_or_else(|| LessonServiceError::UnknownLesson(lesson_id.clone()))?;

        let mut exercises = self.exercises.exercises_for(lesson_id)?;
        if self.settings.shuffle_parts() {
            let mut rng = rng();
            exercises = exercises
                .into_iter()
                .map(|exercise| exercise.with_reordered_parts(|parts| parts.shuffle(&mut rng)))
                .collect();
        }

        info!(
            lesson = %lesson_id,
            exercises = exercises.len(),
            slots = self.settings.slot_count(),
            shuffled = self.settings.shuffle_parts(),
            "opened lesson"
        );
        let session = ExerciseSession::new(exercises, self.settings.slot_count());
        Ok(LessonSession::new(lesson, session))
    }

    /// Close a lesson, flagging it completed in the catalog when every
    /// exercise was solved.
    ///
    /// # Errors
    ///
    /// Returns `LessonServiceError::Storage` if the flag cannot be stored.
    pub fn close_lesson(&self, lesson: LessonSession) -> Result<LessonOutcome, LessonServiceError> {
        let LessonSession { lesson, session } = lesson;
        let newly_completed = session.is_finished() && !lesson.is_completed();
        if newly_completed {
            self.lessons.set_lesson_completed(lesson.id())?;
        }

        let progress = session.progress();
        info!(
            lesson = %lesson.id(),
            completed = progress.completed,
            total = progress.total,
            newly_completed,
            "closed lesson"
        );
        if progress.total == 0 {
            debug!(lesson = %lesson.id(), "lesson had no exercises");
        }

        Ok(LessonOutcome {
            lesson_id: lesson.id().clone(),
            completed_exercises: progress.completed,
            total_exercises: progress.total,
            newly_completed,
        })
    }
}
