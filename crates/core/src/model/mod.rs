mod exercise;
mod ids;
mod lesson;
mod part;
mod settings;

pub use ids::{ExerciseId, LessonId, ParseIdError, PartId};

pub use exercise::{Exercise, ExerciseError};
pub use lesson::{Difficulty, Lesson, LessonError};
pub use part::{PartCategory, PartError, WordPart};
pub use settings::{BuilderSettings, SettingsError};
