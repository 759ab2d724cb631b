use sentencify_core::model::{Difficulty, Lesson, LessonId};

/// UI-ready summary of a lesson for the home grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub pattern: String,
    pub example: String,
    pub difficulty_label: &'static str,
    pub difficulty_class: &'static str,
    pub completed: bool,
}

/// Map catalog lessons into cards, keeping catalog order.
#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson]) -> Vec<LessonCardVm> {
    lessons.iter().map(build_lesson_card).collect()
}

#[must_use]
pub fn build_lesson_card(lesson: &Lesson) -> LessonCardVm {
    LessonCardVm {
        id: lesson.id().clone(),
        title: lesson.title().to_owned(),
        description: lesson.description().to_owned(),
        pattern: lesson.pattern().to_owned(),
        example: lesson.example().to_owned(),
        difficulty_label: lesson.difficulty().label(),
        difficulty_class: difficulty_class(lesson.difficulty()),
        completed: lesson.is_completed(),
    }
}

fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "difficulty difficulty--beginner",
        Difficulty::Intermediate => "difficulty difficulty--intermediate",
        Difficulty::Advanced => "difficulty difficulty--advanced",
    }
}

#[cfg(test)]
mod tests {
    use sentencify_core::model::{Difficulty, Lesson, LessonId};

    use super::map_lesson_cards;

    #[test]
    fn cards_carry_badge_and_completion() {
        let mut done = Lesson::new(
            LessonId::new("simple"),
            "Simple Sentences",
            "One clause",
            "Subject + Verb",
            "Birds sing.",
            Difficulty::Beginner,
        )
        .unwrap();
        done.mark_completed();
        let open = Lesson::new(
            LessonId::new("compound-complex"),
            "Compound-Complex Sentences",
            "Many clauses",
            "Clauses",
            "While I cooked, he called, and we talked.",
            Difficulty::Advanced,
        )
        .unwrap();

        let cards = map_lesson_cards(&[done, open]);

        assert_eq!(cards.len(), 2);
        assert!(cards[0].completed);
        assert_eq!(cards[0].difficulty_label, "Beginner");
        assert_eq!(cards[1].difficulty_class, "difficulty difficulty--advanced");
        assert!(!cards[1].completed);
    }
}
