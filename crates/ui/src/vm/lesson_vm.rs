use std::fmt;

use sentencify_core::model::{LessonId, PartId};
use sentencify_core::{AssemblyError, SessionError};
use services::LessonSession;
use tracing::debug;

use super::builder_vm::{BuilderVm, map_builder};

/// Everything a learner can do inside the lesson modal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    /// Click on a pool word; clicking the selected word again drops the selection.
    Select(PartId),
    DragStart(PartId),
    Drop { part: PartId, slot: usize },
    /// Drop event without a payload: places the dragged word.
    DropSelected(usize),
    /// Clears an occupied slot, or places the selected word in an empty one.
    SlotClicked(usize),
    Clear(usize),
    CancelDrag,
    Check,
    Reset,
    Previous,
    Next,
    Jump(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Current,
    Completed,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseDotVm {
    pub index: usize,
    pub number: usize,
    pub state: DotState,
}

/// Snapshot of the modal chrome around the builder.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonModalVm {
    pub title: String,
    pub exercise_label: String,
    pub completed_label: String,
    pub progress_percent: u32,
    pub has_prev: bool,
    pub has_next: bool,
    pub dots: Vec<ExerciseDotVm>,
    /// `None` for a lesson without exercises.
    pub builder: Option<BuilderVm>,
}

#[derive(Debug)]
enum Rejected {
    NoExercise,
    NothingSelected,
    AtBoundary,
    Session(SessionError),
}

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejected::NoExercise => write!(f, "lesson has no exercises"),
            Rejected::NothingSelected => write!(f, "no word selected"),
            Rejected::AtBoundary => write!(f, "already at the first or last exercise"),
            Rejected::Session(err) => write!(f, "{err}"),
        }
    }
}

impl From<SessionError> for Rejected {
    fn from(err: SessionError) -> Self {
        Self::Session(err)
    }
}

impl From<AssemblyError> for Rejected {
    fn from(err: AssemblyError) -> Self {
        Self::Session(SessionError::Assembly(err))
    }
}

/// An open lesson plus the intent loop that drives it.
#[derive(Clone, Debug)]
pub struct LessonVm {
    lesson: LessonSession,
}

impl LessonVm {
    #[must_use]
    pub fn new(lesson: LessonSession) -> Self {
        Self { lesson }
    }

    #[must_use]
    pub fn lesson_id(&self) -> &LessonId {
        self.lesson.lesson().id()
    }

    #[must_use]
    pub fn session(&self) -> &LessonSession {
        &self.lesson
    }

    /// Hands the session back so the service can close it.
    #[must_use]
    pub fn into_session(self) -> LessonSession {
        self.lesson
    }

    /// Applies an intent. Rejected intents leave the lesson untouched and
    /// return `false`.
    pub fn apply(&mut self, intent: LessonIntent) -> bool {
        match self.try_apply(&intent) {
            Ok(()) => true,
            Err(reason) => {
                debug!(?intent, %reason, "ignored lesson intent");
                false
            }
        }
    }

    fn try_apply(&mut self, intent: &LessonIntent) -> Result<(), Rejected> {
        let session = self.lesson.session_mut();
        match intent {
            LessonIntent::Previous => {
                if !session.prev() {
                    return Err(Rejected::AtBoundary);
                }
            }
            LessonIntent::Next => {
                if !session.next() {
                    return Err(Rejected::AtBoundary);
                }
            }
            LessonIntent::Jump(index) => session.jump(*index)?,
            LessonIntent::Check => {
                let evaluation = session.check_current()?;
                debug!(
                    exercise = session.current_index(),
                    correct = evaluation.correct,
                    attempt = %evaluation.attempt,
                    "checked answer"
                );
            }
            _ => {
                let assembly = session.assembly_mut().ok_or(Rejected::NoExercise)?;
                match intent {
                    LessonIntent::Select(part) => {
                        if assembly.pending_part() == Some(part) {
                            assembly.cancel_drag();
                        } else {
                            assembly.drag_start(part)?;
                        }
                    }
                    LessonIntent::DragStart(part) => assembly.drag_start(part)?,
                    LessonIntent::Drop { part, slot } => {
                        assembly.drop(part, *slot)?;
                    }
                    LessonIntent::DropSelected(slot) => {
                        assembly.drop_pending(*slot)?;
                    }
                    LessonIntent::SlotClicked(slot) => {
                        if assembly.clear(*slot).is_none() {
                            if assembly.pending_part().is_none() {
                                return Err(Rejected::NothingSelected);
                            }
                            assembly.drop_pending(*slot)?;
                        }
                    }
                    LessonIntent::Clear(slot) => {
                        assembly.clear(*slot);
                    }
                    LessonIntent::CancelDrag => assembly.cancel_drag(),
                    LessonIntent::Reset => assembly.reset(),
                    LessonIntent::Previous
                    | LessonIntent::Next
                    | LessonIntent::Jump(_)
                    | LessonIntent::Check => {}
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn modal(&self) -> LessonModalVm {
        let session = self.lesson.session();
        let progress = session.progress();
        let current = session.current_index();

        let exercise_label = if session.is_empty() {
            "No exercises".to_owned()
        } else {
            format!("Exercise {} of {}", current + 1, progress.total)
        };
        let dots = (0..progress.total)
            .map(|index| ExerciseDotVm {
                index,
                number: index + 1,
                state: if index == current {
                    DotState::Current
                } else if session.is_completed(index) {
                    DotState::Completed
                } else {
                    DotState::Pending
                },
            })
            .collect();

        LessonModalVm {
            title: self.lesson.lesson().title().to_owned(),
            exercise_label,
            completed_label: format!("{}/{} completed", progress.completed, progress.total),
            progress_percent: percent(progress.ratio),
            has_prev: session.has_prev(),
            has_next: session.has_next(),
            dots,
            builder: session.assembly().map(map_builder),
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(ratio: f64) -> u32 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u32
}
