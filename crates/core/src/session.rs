use std::collections::BTreeSet;

use thiserror::Error;

use crate::assembly::{AssemblyError, Evaluation, SlotAssembly};
use crate::model::Exercise;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("lesson has no exercises")]
    Empty,

    #[error("exercise index {index} is out of range (exercise count {count})")]
    OutOfRange { index: usize, count: usize },

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

//
// ─── PROGRESS ──────────────────────────────────────────────────────────────────
//

/// Aggregated view of lesson progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionProgress {
    pub total: usize,
    pub completed: usize,
    /// `completed / total`, or `0.0` for a lesson without exercises.
    pub ratio: f64,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Walks a learner through the exercises of one lesson.
///
/// Navigation and completion are independent: checking a correct answer marks
/// the exercise complete but never moves to another one, and moving never
/// removes a completion. Each exercise switch installs a fresh assembly.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    exercises: Vec<Exercise>,
    slot_count: usize,
    current: usize,
    completed: BTreeSet<usize>,
    assembly: Option<SlotAssembly>,
}

impl ExerciseSession {
    /// Create a session positioned on the first exercise.
    ///
    /// An empty exercise list is accepted; the session then has no assembly
    /// and reports zero progress.
    #[must_use]
    pub fn new(exercises: Vec<Exercise>, slot_count: usize) -> Self {
        let assembly = exercises
            .first()
            .map(|exercise| assembly_for(exercise, slot_count));
        Self {
            exercises,
            slot_count,
            current: 0,
            completed: BTreeSet::new(),
            assembly,
        }
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slot_count
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_exercise(&self) -> Option<&Exercise> {
        self.exercises.get(self.current)
    }

    #[must_use]
    pub fn assembly(&self) -> Option<&SlotAssembly> {
        self.assembly.as_ref()
    }

    pub fn assembly_mut(&mut self) -> Option<&mut SlotAssembly> {
        self.assembly.as_mut()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.current + 1 < self.exercises.len()
    }

    /// Moves to `index`. Selecting the current exercise keeps its assembly.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::OutOfRange` for indices past the last exercise;
    /// the position is unchanged.
    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        let Some(exercise) = self.exercises.get(index) else {
            return Err(SessionError::OutOfRange {
                index,
                count: self.exercises.len(),
            });
        };
        if index != self.current {
            self.assembly = Some(assembly_for(exercise, self.slot_count));
            self.current = index;
        }
        Ok(())
    }

    /// Direct selection of an exercise (the numbered dots).
    ///
    /// # Errors
    ///
    /// Same as [`ExerciseSession::go_to`].
    pub fn jump(&mut self, index: usize) -> Result<(), SessionError> {
        self.go_to(index)
    }

    /// Advances one exercise. Returns `false` at the last exercise.
    pub fn next(&mut self) -> bool {
        self.has_next() && self.go_to(self.current + 1).is_ok()
    }

    /// Steps back one exercise. Returns `false` at the first exercise.
    pub fn prev(&mut self) -> bool {
        self.has_prev() && self.go_to(self.current - 1).is_ok()
    }

    /// Adds `index` to the completed set. Out-of-range indices are ignored.
    pub fn mark_complete(&mut self, index: usize) -> bool {
        if index >= self.exercises.len() {
            return false;
        }
        self.completed.insert(index);
        true
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    /// Completed indices in ascending order.
    pub fn completed_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.completed.iter().copied()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_ratio(&self) -> f64 {
        if self.exercises.is_empty() {
            return 0.0;
        }
        self.completed.len() as f64 / self.exercises.len() as f64
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.exercises.len(),
            completed: self.completed.len(),
            ratio: self.progress_ratio(),
        }
    }

    /// True once every exercise of a non-empty lesson is complete.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !self.exercises.is_empty() && self.completed.len() == self.exercises.len()
    }

    /// Evaluates the current assembly; a correct answer completes the
    /// current exercise.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Empty` without exercises and
    /// `SessionError::Assembly` when nothing is placed.
    pub fn check_current(&mut self) -> Result<Evaluation, SessionError> {
        let assembly = self.assembly.as_mut().ok_or(SessionError::Empty)?;
        let evaluation = assembly.evaluate()?;
        if evaluation.correct {
            self.completed.insert(self.current);
        }
        Ok(evaluation)
    }
}

/// Slots never outnumbered by the words of the target, so every exercise
/// stays solvable whatever the configured row length.
fn assembly_for(exercise: &Exercise, slot_count: usize) -> SlotAssembly {
    let slots = slot_count.max(exercise.target_word_count());
    SlotAssembly::new(exercise.clone(), slots)
}
