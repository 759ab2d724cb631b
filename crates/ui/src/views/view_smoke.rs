use sentencify_core::model::{BuilderSettings, PartId};

use super::test_harness::{setup_view_harness, setup_view_harness_with_settings};
use crate::vm::LessonIntent;

fn drop_word(id: &str, slot: usize) -> LessonIntent {
    LessonIntent::Drop {
        part: PartId::new(id),
        slot,
    }
}

#[test]
fn home_view_smoke_renders_catalog() {
    let mut harness = setup_view_harness(None);
    harness.rebuild();
    let html = harness.render();

    for title in [
        "Simple Sentences",
        "Compound Sentences",
        "Complex Sentences",
        "Compound-Complex Sentences",
    ] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("Progress: 0%"), "missing header progress in {html}");
    assert!(html.contains("Beginner"), "missing difficulty badge in {html}");
    assert!(html.contains("Subjects"), "missing legend in {html}");
    assert!(!html.contains("lesson-modal"), "modal rendered without a lesson in {html}");
}

#[test]
fn launch_lesson_opens_the_modal() {
    let mut harness = setup_view_harness(Some("simple"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Exercise 1 of 2"), "missing position in {html}");
    assert!(html.contains("0/2 completed"), "missing progress in {html}");
    assert!(html.contains("Subject + Verb + Adverb"), "missing pattern in {html}");
    assert!(html.contains("Drop here"), "missing empty slot in {html}");
    assert!(html.contains("Check Answer"), "missing check button in {html}");
    assert_eq!(html.matches("Drop here").count(), 6);
}

#[test]
fn configured_slot_count_is_rendered() {
    let settings = BuilderSettings::new(8, false).unwrap();
    let mut harness = setup_view_harness_with_settings(Some("simple"), settings);
    harness.rebuild();

    assert_eq!(harness.render().matches("Drop here").count(), 8);
}

#[test]
fn correct_answer_shows_excellent_and_progress() {
    let mut harness = setup_view_harness(Some("simple"));
    harness.rebuild();

    for (slot, id) in ["the", "dog", "barks", "loudly"].into_iter().enumerate() {
        harness.dispatch(drop_word(id, slot));
    }
    harness.dispatch(LessonIntent::Check);
    let html = harness.render();

    assert!(html.contains("Excellent!"), "missing success feedback in {html}");
    assert!(html.contains("1/2 completed"), "missing progress in {html}");
    assert_eq!(html.matches("Drop here").count(), 2);
}

#[test]
fn wrong_answer_reveals_target_sentence() {
    let mut harness = setup_view_harness(Some("simple"));
    harness.rebuild();

    harness.dispatch(drop_word("the", 0));
    harness.dispatch(drop_word("cat", 1));
    harness.dispatch(drop_word("sleeps", 2));
    harness.dispatch(LessonIntent::Check);
    let html = harness.render();

    assert!(html.contains("Not quite right."), "missing failure feedback in {html}");
    assert!(html.contains("Correct answer:"), "missing reveal in {html}");
    assert!(html.contains("The dog barks loudly"), "missing target in {html}");
    assert!(html.contains("0/2 completed"), "unexpected progress in {html}");
}

#[test]
fn reset_clears_feedback() {
    let mut harness = setup_view_harness(Some("simple"));
    harness.rebuild();

    harness.dispatch(drop_word("cat", 0));
    harness.dispatch(LessonIntent::Check);
    harness.dispatch(LessonIntent::Reset);
    let html = harness.render();

    assert!(!html.contains("Not quite right."), "stale feedback in {html}");
    assert_eq!(html.matches("Drop here").count(), 6);
}

#[test]
fn empty_lesson_shows_placeholder() {
    let mut harness = setup_view_harness(Some("complex"));
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("No exercises available for this lesson yet."),
        "missing placeholder in {html}"
    );
    assert!(html.contains("0/0 completed"), "missing progress in {html}");
    assert!(!html.contains("Check Answer"), "builder rendered for empty lesson in {html}");
}

#[test]
fn unknown_launch_lesson_leaves_home_usable() {
    let mut harness = setup_view_harness(Some("haiku"));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Simple Sentences"), "missing catalog in {html}");
    assert!(!html.contains("lesson-modal"), "modal rendered for unknown lesson in {html}");
}

#[test]
fn closing_a_finished_lesson_updates_the_header() {
    let mut harness = setup_view_harness(Some("simple"));
    harness.rebuild();

    for (slot, id) in ["the", "dog", "barks", "loudly"].into_iter().enumerate() {
        harness.dispatch(drop_word(id, slot));
    }
    harness.dispatch(LessonIntent::Check);
    harness.dispatch(LessonIntent::Next);
    for (slot, id) in ["students", "study", "diligently"].into_iter().enumerate() {
        harness.dispatch(drop_word(id, slot));
    }
    harness.dispatch(LessonIntent::Check);
    assert!(harness.render().contains("2/2 completed"));

    harness.close_lesson();
    let html = harness.render();

    assert_eq!(harness.lesson_service.catalog_progress().unwrap().percent(), 25);
    assert!(html.contains("Progress: 25%"), "header not refreshed in {html}");
    assert!(html.contains("Completed"), "missing completed badge in {html}");
    assert!(!html.contains("lesson-modal"), "modal still open in {html}");
}
