mod header;
mod home;
mod lesson_modal;
mod sentence_builder;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use header::Header;
pub use home::HomeView;
pub use lesson_modal::LessonModal;
pub use sentence_builder::SentenceBuilder;
pub use state::ViewError;
