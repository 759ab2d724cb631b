use thiserror::Error;

use crate::assembly::AssemblyError;
use crate::model::{ExerciseError, LessonError, PartError, SettingsError};
use crate::session::SessionError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Part(#[from] PartError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
    #[error(transparent)]
    Session(#[from] SessionError),
}
