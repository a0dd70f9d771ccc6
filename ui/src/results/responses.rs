use dioxus::prelude::*;

use crate::core::catalog::Model;

#[component]
pub fn ResponsesList(models: Vec<Model>) -> Element {
    rsx! {
        ul { class: "results-responses",
            for model in models.into_iter() {
                li { key: "{model}", class: "results-response",
                    strong { class: "results-response__model", "{model}:" }
                    " "
                    span { class: "results-response__text", {model.canned_response()} }
                }
            }
        }
    }
}
