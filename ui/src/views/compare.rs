#[cfg(debug_assertions)]
use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::compare::{MetricChecklist, ModelPicker, PromptBox, Workspace};
use crate::results::ResultsPanel;

#[component]
pub fn Compare() -> Element {
    // Subscribe to global language code (if provided) so this view re-renders
    // immediately when the locale changes from the navbar.
    let _lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = _lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let workspace = use_signal(Workspace::new);
    let results_visible = workspace.read().results_visible();

    #[cfg(debug_assertions)]
    debug!(lang = %_lang_marker, results_visible, "compare view render");

    let page_class = if results_visible {
        "page page-compare page-compare--split"
    } else {
        "page page-compare"
    };

    rsx! {
        div { style: "display:none", "{_lang_marker}" }
        section { class: page_class,
            div { class: "compare-form",
                h1 { {crate::t!("compare-title")} }
                p { class: "compare-form__intro", {crate::t!("compare-intro")} }
                ModelPicker { workspace }
                MetricChecklist { workspace }
                PromptBox { workspace }
            }
            ResultsPanel { workspace }
        }
    }
}
