//! Built-in sentence-structure course.
//!
//! Four lessons ordered from simple to compound-complex sentences. Only the
//! first two ship with exercises; the others open as empty lessons.

use std::collections::HashMap;

use sentencify_core::model::{
    Difficulty, Exercise, ExerciseError, ExerciseId, Lesson, LessonError, LessonId, PartCategory,
    PartError, PartId, WordPart,
};
use thiserror::Error;

use PartCategory::{Complement, Conjunction, Object, Subject, Verb};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SeedError {
    #[error(transparent)]
    Lesson(#[from] LessonError),
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Part(#[from] PartError),
}

struct LessonSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    pattern: &'static str,
    example: &'static str,
    difficulty: Difficulty,
}

struct ExerciseSeed {
    id: &'static str,
    target: &'static str,
    pattern: &'static str,
    parts: &'static [(&'static str, &'static str, PartCategory)],
}

const LESSONS: &[LessonSeed] = &[
    LessonSeed {
        id: "simple",
        title: "Simple Sentences",
        description: "Master the foundation with single independent clauses",
        pattern: "Subject + Verb (+ Object)",
        example: "The cat sleeps peacefully.",
        difficulty: Difficulty::Beginner,
    },
    LessonSeed {
        id: "compound",
        title: "Compound Sentences",
        description: "Connect ideas using coordinating conjunctions",
        pattern: "Independent Clause + Conjunction + Independent Clause",
        example: "I love reading, and she enjoys writing.",
        difficulty: Difficulty::Intermediate,
    },
    LessonSeed {
        id: "complex",
        title: "Complex Sentences",
        description: "Add depth with subordinating conjunctions",
        pattern: "Independent Clause + Dependent Clause",
        example: "Although it was raining, we went for a walk.",
        difficulty: Difficulty::Intermediate,
    },
    LessonSeed {
        id: "compound-complex",
        title: "Compound-Complex Sentences",
        description: "Combine multiple ideas with advanced structures",
        pattern: "Multiple Independent + Dependent Clauses",
        example: "While I was cooking dinner, John called, and we made plans.",
        difficulty: Difficulty::Advanced,
    },
];

const SIMPLE_EXERCISES: &[ExerciseSeed] = &[
    ExerciseSeed {
        id: "1",
        target: "The dog barks loudly",
        pattern: "Subject + Verb + Adverb",
        parts: &[
            ("the", "The", Subject),
            ("dog", "dog", Subject),
            ("barks", "barks", Verb),
            ("loudly", "loudly", Complement),
            ("cat", "cat", Subject),
            ("sleeps", "sleeps", Verb),
        ],
    },
    ExerciseSeed {
        id: "2",
        target: "Students study diligently",
        pattern: "Subject + Verb + Adverb",
        parts: &[
            ("students", "Students", Subject),
            ("study", "study", Verb),
            ("diligently", "diligently", Complement),
            ("teachers", "teachers", Subject),
            ("work", "work", Verb),
            ("quickly", "quickly", Complement),
        ],
    },
];

const COMPOUND_EXERCISES: &[ExerciseSeed] = &[ExerciseSeed {
    id: "1",
    target: "I read books and she watches movies",
    pattern: "Subject + Verb + Object + Conjunction + Subject + Verb + Object",
    parts: &[
        ("i", "I", Subject),
        ("read", "read", Verb),
        ("books", "books", Object),
        ("and", "and", Conjunction),
        ("she", "she", Subject),
        ("watches", "watches", Verb),
        ("movies", "movies", Object),
    ],
}];

fn exercises_for_seed(lesson_id: &str) -> &'static [ExerciseSeed] {
    match lesson_id {
        "simple" => SIMPLE_EXERCISES,
        "compound" => COMPOUND_EXERCISES,
        _ => &[],
    }
}

fn build_exercise(seed: &ExerciseSeed) -> Result<Exercise, SeedError> {
    let parts = seed
        .parts
        .iter()
        .map(|(id, word, category)| WordPart::new(PartId::new(*id), *word, *category))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Exercise::new(
        ExerciseId::new(seed.id),
        seed.target,
        parts,
        seed.pattern,
    )?)
}

/// Build the lesson list and its exercise map.
///
/// # Errors
///
/// Returns `SeedError` if any literal fails domain validation.
pub fn builtin_course() -> Result<(Vec<Lesson>, HashMap<LessonId, Vec<Exercise>>), SeedError> {
    let mut lessons = Vec::with_capacity(LESSONS.len());
    let mut exercises = HashMap::new();

    for seed in LESSONS {
        let id = LessonId::new(seed.id);
        lessons.push(Lesson::new(
            id.clone(),
            seed.title,
            seed.description,
            seed.pattern,
            seed.example,
            seed.difficulty,
        )?);

        let built = exercises_for_seed(seed.id)
            .iter()
            .map(build_exercise)
            .collect::<Result<Vec<_>, _>>()?;
        if !built.is_empty() {
            exercises.insert(id, built);
        }
    }

    Ok((lessons, exercises))
}
