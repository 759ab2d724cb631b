#![forbid(unsafe_code)]

pub mod repository;
pub mod seed;

pub use repository::{ExerciseResolver, InMemoryRepository, LessonCatalog, Storage, StorageError};
