#![forbid(unsafe_code)]

pub mod error;
pub mod lessons;

pub use error::LessonServiceError;
pub use lessons::{CatalogProgress, LessonOutcome, LessonService, LessonSession};
