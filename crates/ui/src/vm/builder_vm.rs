use sentencify_core::SlotAssembly;
use sentencify_core::model::{PartId, WordPart};

use super::legend_vm::part_class;

/// A word chip, either in the pool or sitting in a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartChipVm {
    pub id: PartId,
    pub word: String,
    pub class: &'static str,
    /// Placed in a slot; the pool shows it dimmed and not draggable.
    pub used: bool,
    /// Picked up and waiting for a slot.
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotVm {
    pub index: usize,
    pub part: Option<PartChipVm>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackVm {
    pub correct: bool,
    pub headline: &'static str,
    /// Only set for a wrong answer.
    pub correct_answer: Option<String>,
}

/// Everything the sentence builder renders for the current exercise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuilderVm {
    pub pattern_hint: String,
    pub slots: Vec<SlotVm>,
    pub parts: Vec<PartChipVm>,
    pub can_check: bool,
    pub feedback: Option<FeedbackVm>,
}

#[must_use]
pub fn map_builder(assembly: &SlotAssembly) -> BuilderVm {
    let pending = assembly.pending_part();
    let chip = |part: &WordPart| PartChipVm {
        id: part.id().clone(),
        word: part.word().to_owned(),
        class: part_class(part.category()),
        used: assembly.is_used(part.id()),
        selected: pending == Some(part.id()),
    };

    let slots = assembly
        .slots()
        .enumerate()
        .map(|(index, part)| SlotVm {
            index,
            part: part.map(chip),
        })
        .collect();
    let parts = assembly.exercise().parts().iter().map(chip).collect();

    let feedback = assembly.feedback().map(|evaluation| {
        if evaluation.correct {
            FeedbackVm {
                correct: true,
                headline: "Excellent!",
                correct_answer: None,
            }
        } else {
            FeedbackVm {
                correct: false,
                headline: "Not quite right.",
                correct_answer: Some(evaluation.expected.clone()),
            }
        }
    });

    BuilderVm {
        pattern_hint: assembly.exercise().pattern_hint().to_owned(),
        slots,
        parts,
        can_check: assembly.can_check(),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use sentencify_core::SlotAssembly;
    use sentencify_core::model::{Exercise, ExerciseId, PartCategory, PartId, WordPart};

    use super::map_builder;

    fn assembly() -> SlotAssembly {
        let parts = vec![
            WordPart::new(PartId::new("birds"), "Birds", PartCategory::Subject).unwrap(),
            WordPart::new(PartId::new("sing"), "sing", PartCategory::Verb).unwrap(),
            WordPart::new(PartId::new("fish"), "fish", PartCategory::Subject).unwrap(),
        ];
        let exercise =
            Exercise::new(ExerciseId::new("1"), "Birds sing", parts, "Subject + Verb").unwrap();
        SlotAssembly::new(exercise, 4)
    }

    #[test]
    fn placed_parts_show_in_slots_and_dim_in_pool() {
        let mut assembly = assembly();
        assembly.place(&PartId::new("sing"), 2).unwrap();
        assembly.drag_start(&PartId::new("birds")).unwrap();

        let vm = map_builder(&assembly);

        assert_eq!(vm.slots.len(), 4);
        assert_eq!(vm.slots[2].part.as_ref().unwrap().word, "sing");
        assert!(vm.slots[0].part.is_none());
        assert!(vm.parts[1].used);
        assert!(vm.parts[0].selected);
        assert!(!vm.parts[2].used);
        assert!(vm.can_check);
        assert_eq!(vm.pattern_hint, "Subject + Verb");
    }

    #[test]
    fn wrong_answer_reveals_target() {
        let mut assembly = assembly();
        assembly.place(&PartId::new("fish"), 0).unwrap();
        assembly.place(&PartId::new("sing"), 1).unwrap();
        assembly.evaluate().unwrap();

        let feedback = map_builder(&assembly).feedback.unwrap();
        assert!(!feedback.correct);
        assert_eq!(feedback.headline, "Not quite right.");
        assert_eq!(feedback.correct_answer.as_deref(), Some("Birds sing"));
    }

    #[test]
    fn correct_answer_has_no_reveal() {
        let mut assembly = assembly();
        assembly.place(&PartId::new("birds"), 0).unwrap();
        assembly.place(&PartId::new("sing"), 1).unwrap();
        assembly.evaluate().unwrap();

        let feedback = map_builder(&assembly).feedback.unwrap();
        assert_eq!(feedback.headline, "Excellent!");
        assert!(feedback.correct_answer.is_none());
    }

    #[test]
    fn empty_row_cannot_be_checked() {
        assert!(!map_builder(&assembly()).can_check);
    }
}
