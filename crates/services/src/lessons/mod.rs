mod progress;
mod service;

// Public API of the lesson subsystem.
pub use progress::CatalogProgress;
pub use service::{LessonOutcome, LessonService, LessonSession};
