#![forbid(unsafe_code)]

pub mod assembly;
pub mod error;
pub mod model;
pub mod session;

pub use assembly::{AssemblyError, Evaluation, Placement, SlotAssembly};
pub use error::Error;
pub use session::{ExerciseSession, SessionError, SessionProgress};
