//! Shared error types for the services crate.

use thiserror::Error;

use sentencify_core::model::LessonId;
use storage::repository::StorageError;

/// Errors emitted by `LessonService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonServiceError {
    #[error("lesson `{0}` is not in the catalog")]
    UnknownLesson(LessonId),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
