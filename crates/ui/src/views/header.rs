use dioxus::prelude::*;

#[component]
pub fn Header(progress_percent: usize) -> Element {
    rsx! {
        header { class: "app-header",
            div { class: "app-header__brand",
                h1 { class: "app-header__title", "Sentencify" }
                span { class: "app-header__tag", "English Mastery" }
            }
            div { class: "app-header__progress",
                span { "Progress: {progress_percent}%" }
                div { class: "progress-bar progress-bar--compact",
                    div { class: "progress-bar__fill", style: "width: {progress_percent}%" }
                }
            }
        }
    }
}
