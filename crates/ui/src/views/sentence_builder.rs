use dioxus::prelude::*;

use crate::vm::{BuilderVm, LessonIntent, PartChipVm, SlotVm};

#[component]
pub fn SentenceBuilder(builder: BuilderVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let BuilderVm {
        pattern_hint,
        slots,
        parts,
        can_check,
        feedback,
    } = builder;
    let feedback_class = match &feedback {
        Some(feedback) if feedback.correct => "feedback feedback--correct",
        _ => "feedback feedback--incorrect",
    };

    rsx! {
        div { class: "builder",
            div { class: "builder__pattern",
                h4 { class: "builder__heading", "Sentence Pattern" }
                p { class: "builder__pattern-text", "{pattern_hint}" }
            }

            div { class: "builder__area",
                h4 { class: "builder__heading", "Build your sentence:" }
                div { class: "builder__slots",
                    for slot in slots {
                        SlotView { key: "{slot.index}", slot, on_intent }
                    }
                }
            }

            div { class: "builder__pool",
                h4 { class: "builder__heading", "Available words:" }
                div { class: "builder__chips",
                    for part in parts {
                        WordChip { key: "{part.id}", part, on_intent }
                    }
                }
            }

            div { class: "builder__controls",
                button {
                    class: "btn btn-primary",
                    id: "builder-check",
                    r#type: "button",
                    disabled: !can_check,
                    onclick: move |_| on_intent.call(LessonIntent::Check),
                    "Check Answer"
                }
                button {
                    class: "btn btn-secondary",
                    id: "builder-reset",
                    r#type: "button",
                    onclick: move |_| on_intent.call(LessonIntent::Reset),
                    "Reset"
                }
            }

            if let Some(feedback) = feedback {
                div { class: "{feedback_class}", role: "status",
                    span { class: "feedback__headline", "{feedback.headline}" }
                    if let Some(answer) = feedback.correct_answer {
                        p { class: "feedback__answer", "Correct answer: \"{answer}\"" }
                    }
                }
            }
        }
    }
}

#[component]
fn SlotView(slot: SlotVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let index = slot.index;
    let class = if slot.part.is_some() {
        "slot slot--filled"
    } else {
        "slot"
    };

    rsx! {
        div {
            class: "{class}",
            ondragover: move |evt| evt.prevent_default(),
            ondrop: move |evt| {
                evt.prevent_default();
                on_intent.call(LessonIntent::DropSelected(index));
            },
            onclick: move |_| on_intent.call(LessonIntent::SlotClicked(index)),
            match slot.part {
                Some(part) => rsx! {
                    span { class: "{part.class}", "{part.word}" }
                },
                None => rsx! {
                    span { class: "slot__placeholder", "Drop here" }
                },
            }
        }
    }
}

#[component]
fn WordChip(part: PartChipVm, on_intent: EventHandler<LessonIntent>) -> Element {
    let mut class = format!("{} word-chip", part.class);
    if part.used {
        class.push_str(" word-chip--used");
    }
    if part.selected {
        class.push_str(" word-chip--selected");
    }
    let drag_id = part.id.clone();
    let click_id = part.id.clone();

    rsx! {
        div {
            class: "{class}",
            draggable: !part.used,
            ondragstart: move |_| on_intent.call(LessonIntent::DragStart(drag_id.clone())),
            ondragend: move |_| on_intent.call(LessonIntent::CancelDrag),
            onclick: move |_| on_intent.call(LessonIntent::Select(click_id.clone())),
            "{part.word}"
        }
    }
}
