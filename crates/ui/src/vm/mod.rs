mod builder_vm;
mod legend_vm;
mod lesson_card_vm;
mod lesson_vm;

pub use builder_vm::{BuilderVm, FeedbackVm, PartChipVm, SlotVm, map_builder};
pub use legend_vm::{LegendEntryVm, legend_entries, part_class};
pub use lesson_card_vm::{LessonCardVm, build_lesson_card, map_lesson_cards};
pub use lesson_vm::{DotState, ExerciseDotVm, LessonIntent, LessonModalVm, LessonVm};
