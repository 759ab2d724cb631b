use sentencify_core::model::{Difficulty, LessonId, PartId};
use storage::repository::{ExerciseResolver, InMemoryRepository, LessonCatalog, Storage};

#[test]
fn builtin_catalog_lists_four_lessons_in_order() {
    let repo = InMemoryRepository::with_builtin_course().expect("seed");
    let lessons = repo.list_lessons().unwrap();

    let ids: Vec<&str> = lessons.iter().map(|lesson| lesson.id().as_str()).collect();
    assert_eq!(ids, ["simple", "compound", "complex", "compound-complex"]);
    assert_eq!(lessons[0].difficulty(), Difficulty::Beginner);
    assert_eq!(lessons[3].difficulty(), Difficulty::Advanced);
    assert!(lessons.iter().all(|lesson| !lesson.is_completed()));
}

#[test]
fn simple_lesson_resolves_two_exercises_with_distractors() {
    let storage = Storage::builtin().expect("seed");
    let exercises = storage
        .exercises
        .exercises_for(&LessonId::new("simple"))
        .unwrap();

    assert_eq!(exercises.len(), 2);
    let first = &exercises[0];
    assert_eq!(first.target_sentence(), "The dog barks loudly");
    assert_eq!(first.parts().len(), 6);
    assert!(first.part(&PartId::new("cat")).is_some());
    assert_eq!(exercises[1].target_sentence(), "Students study diligently");
}

#[test]
fn lessons_without_content_resolve_to_empty_lists() {
    let repo = InMemoryRepository::with_builtin_course().expect("seed");

    for id in ["complex", "compound-complex", "no-such-lesson"] {
        let exercises = repo.exercises_for(&LessonId::new(id)).unwrap();
        assert!(exercises.is_empty(), "{id} should have no exercises");
    }
}

#[test]
fn compound_exercise_uses_every_part() {
    let repo = InMemoryRepository::with_builtin_course().expect("seed");
    let exercises = repo.exercises_for(&LessonId::new("compound")).unwrap();

    let exercise = &exercises[0];
    let words: Vec<&str> = exercise.parts().iter().map(|part| part.word()).collect();
    assert_eq!(words.join(" "), exercise.target_sentence());
}
