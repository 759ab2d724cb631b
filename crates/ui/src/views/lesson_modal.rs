use dioxus::prelude::*;

use crate::views::SentenceBuilder;
use crate::vm::{DotState, LessonIntent, LessonModalVm, LessonVm};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

fn dot_class(state: DotState) -> &'static str {
    match state {
        DotState::Current => "exercise-dot exercise-dot--current",
        DotState::Completed => "exercise-dot exercise-dot--completed",
        DotState::Pending => "exercise-dot",
    }
}

#[component]
pub fn LessonModal(lesson: Signal<Option<LessonVm>>, on_close: EventHandler<()>) -> Element {
    let dispatch_intent = use_callback(move |intent: LessonIntent| {
        let mut lesson = lesson;
        if let Some(vm) = lesson.write().as_mut() {
            vm.apply(intent);
        }
    });

    #[cfg(test)]
    {
        use_hook(|| {
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, on_close);
            }
        });
    }

    let Some(modal) = lesson.read().as_ref().map(LessonVm::modal) else {
        return rsx! {};
    };
    let LessonModalVm {
        title,
        exercise_label,
        completed_label,
        progress_percent,
        has_prev,
        has_next,
        dots,
        builder,
    } = modal;

    rsx! {
        div { class: "modal-overlay",
            div {
                class: "lesson-modal",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "lesson-modal-title",
                header { class: "lesson-modal__header",
                    div {
                        h2 { class: "lesson-modal__title", id: "lesson-modal-title", "{title}" }
                        p { class: "lesson-modal__position", "{exercise_label}" }
                    }
                    button {
                        class: "lesson-modal__close",
                        id: "lesson-close",
                        r#type: "button",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }

                div { class: "lesson-modal__progress",
                    div { class: "lesson-modal__progress-row",
                        span { class: "lesson-modal__progress-label", "Progress" }
                        span { class: "lesson-modal__progress-count", "{completed_label}" }
                    }
                    div { class: "progress-bar",
                        div { class: "progress-bar__fill", style: "width: {progress_percent}%" }
                    }
                }

                div { class: "lesson-modal__body",
                    match builder {
                        Some(builder) => rsx! {
                            SentenceBuilder { builder, on_intent: dispatch_intent }
                        },
                        None => rsx! {
                            p { class: "lesson-modal__empty", "No exercises available for this lesson yet." }
                        },
                    }
                }

                footer { class: "lesson-modal__nav",
                    button {
                        class: "btn btn-secondary",
                        id: "lesson-prev",
                        r#type: "button",
                        disabled: !has_prev,
                        onclick: move |_| dispatch_intent.call(LessonIntent::Previous),
                        "Previous"
                    }
                    div { class: "lesson-modal__dots",
                        for dot in dots {
                            button {
                                key: "{dot.index}",
                                class: dot_class(dot.state),
                                r#type: "button",
                                onclick: move |_| dispatch_intent.call(LessonIntent::Jump(dot.index)),
                                "{dot.number}"
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        id: "lesson-next",
                        r#type: "button",
                        disabled: !has_next,
                        onclick: move |_| dispatch_intent.call(LessonIntent::Next),
                        "Next"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    close: Rc<RefCell<Option<EventHandler<()>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, close: EventHandler<()>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.close.borrow_mut() = Some(close);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn close(&self) -> EventHandler<()> {
        (*self.close.borrow()).expect("lesson close registered")
    }
}
