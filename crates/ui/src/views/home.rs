use std::sync::Arc;

use dioxus::prelude::*;
use sentencify_core::model::LessonId;
use services::{LessonService, LessonServiceError};
use tracing::{info, warn};

use crate::context::AppContext;
use crate::views::{Header, LessonModal, ViewError};
use crate::vm::{LessonCardVm, LessonVm, legend_entries, map_lesson_cards};

#[derive(Clone, Debug, PartialEq)]
struct CatalogVm {
    cards: Vec<LessonCardVm>,
    progress_percent: usize,
}

fn load_catalog(lesson_service: &LessonService) -> Result<CatalogVm, ViewError> {
    let lessons = lesson_service.list_lessons().map_err(|err| {
        warn!(error = %err, "failed to list lessons");
        ViewError::Unknown
    })?;
    let progress = lesson_service.catalog_progress().map_err(|err| {
        warn!(error = %err, "failed to read catalog progress");
        ViewError::Unknown
    })?;
    Ok(CatalogVm {
        cards: map_lesson_cards(&lessons),
        progress_percent: progress.percent(),
    })
}

fn open_lesson_vm(lesson_service: &LessonService, id: &LessonId) -> Result<LessonVm, ViewError> {
    match lesson_service.open_lesson(id) {
        Ok(session) => Ok(LessonVm::new(session)),
        Err(LessonServiceError::UnknownLesson(_)) => {
            warn!(lesson = %id, "requested lesson is not in the catalog");
            Err(ViewError::UnknownLesson)
        }
        Err(err) => {
            warn!(lesson = %id, error = %err, "failed to open lesson");
            Err(ViewError::Unknown)
        }
    }
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_service = ctx.lesson_service();

    let mut error = use_signal(|| None::<ViewError>);
    let mut catalog_version = use_signal(|| 0_u64);
    let mut lesson = use_signal({
        let ctx = ctx.clone();
        let lesson_service = Arc::clone(&lesson_service);
        move || {
            let id = ctx.take_open_lesson_on_launch()?;
            open_lesson_vm(&lesson_service, &id).ok()
        }
    });

    let catalog = use_memo({
        let lesson_service = Arc::clone(&lesson_service);
        move || {
            let _ = catalog_version();
            load_catalog(&lesson_service)
        }
    });

    let on_open = {
        let lesson_service = Arc::clone(&lesson_service);
        use_callback(move |id: LessonId| match open_lesson_vm(&lesson_service, &id) {
            Ok(vm) => {
                error.set(None);
                lesson.set(Some(vm));
            }
            Err(err) => error.set(Some(err)),
        })
    };

    let on_close = {
        let lesson_service = Arc::clone(&lesson_service);
        use_callback(move |()| {
            let Some(vm) = lesson.write().take() else {
                return;
            };
            match lesson_service.close_lesson(vm.into_session()) {
                Ok(outcome) => {
                    if outcome.newly_completed {
                        info!(lesson = %outcome.lesson_id, "lesson completed");
                        *catalog_version.write() += 1;
                    }
                }
                Err(err) => {
                    warn!(error = %err, "failed to close lesson");
                    error.set(Some(ViewError::Unknown));
                }
            }
        })
    };

    let catalog = catalog.read().clone();
    let progress_percent = catalog
        .as_ref()
        .map_or(0, |catalog| catalog.progress_percent);
    let cards = catalog.map(|catalog| catalog.cards);
    let legend = legend_entries();
    let lesson_open = lesson.read().is_some();

    rsx! {
        div { class: "page home-page",
            Header { progress_percent }

            main { class: "home",
                section { class: "hero",
                    h1 { class: "hero__title", "Master English Sentence Structure" }
                    p { class: "hero__subtitle",
                        "Build confidence in English writing through systematic practice of sentence types and patterns."
                    }
                }

                if let Some(err) = *error.read() {
                    p { class: "home__error", role: "alert", "{err.message()}" }
                }

                section { class: "modules",
                    h2 { class: "modules__title", "Sentence Structure Modules" }
                    match cards {
                        Ok(cards) => rsx! {
                            div { class: "lesson-grid",
                                for card in cards {
                                    LessonCard { key: "{card.id}", card, on_open }
                                }
                            }
                        },
                        Err(err) => rsx! {
                            p { class: "modules__error", "{err.message()}" }
                        },
                    }
                }

                section { class: "legend",
                    h3 { class: "legend__title", "Color-Coded Learning" }
                    ul { class: "legend__list",
                        for entry in legend {
                            li { key: "{entry.label}", class: "legend__item",
                                span { class: "legend__swatch {entry.class}" }
                                span { "{entry.label}" }
                            }
                        }
                    }
                }
            }

            if lesson_open {
                LessonModal { lesson, on_close }
            }
        }
    }
}

#[component]
fn LessonCard(card: LessonCardVm, on_open: EventHandler<LessonId>) -> Element {
    let id = card.id.clone();
    let status_class = if card.completed {
        "lesson-card__status lesson-card__status--done"
    } else {
        "lesson-card__status"
    };

    rsx! {
        div {
            class: "lesson-card",
            role: "button",
            tabindex: "0",
            onclick: move |_| on_open.call(id.clone()),
            div { class: "lesson-card__top",
                span { class: "{status_class}" }
                h3 { class: "lesson-card__title", "{card.title}" }
                if card.completed {
                    span { class: "lesson-card__badge", "Completed" }
                }
                span { class: "{card.difficulty_class}", "{card.difficulty_label}" }
            }
            p { class: "lesson-card__description", "{card.description}" }
            p { class: "lesson-card__row",
                span { class: "lesson-card__label", "Pattern: " }
                span { class: "lesson-card__pattern", "{card.pattern}" }
            }
            p { class: "lesson-card__row",
                span { class: "lesson-card__label", "Example: " }
                span { class: "lesson-card__example", "\"{card.example}\"" }
            }
        }
    }
}
