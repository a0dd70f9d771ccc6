use dioxus::prelude::*;

use crate::compare::Workspace;
use crate::core::scoring::PlaceholderScorer;
use crate::results::{render, ChartCard, ResponsesList};
use crate::t;

/// Slide-in panel showing the last submitted comparison. Renders nothing
/// until something has been submitted.
#[component]
pub fn ResultsPanel(workspace: Signal<Workspace>) -> Element {
    let state = workspace.read();
    let Some(view) = state.result() else {
        return rsx! {};
    };

    let models = view.models().to_vec();
    let prompt = view.prompt().to_string();
    let charts: Vec<(&'static str, _)> = state
        .render_plan()
        .into_iter()
        .map(|metric| {
            (
                metric.label(),
                render(metric.as_key(), &models, &PlaceholderScorer),
            )
        })
        .collect();

    rsx! {
        aside { class: "results results--visible",
            div { class: "results__divider" }
            div { class: "results__body",
                h3 { class: "results__header", {t!("results-title")} }

                section { class: "results-card results-prompt",
                    div { class: "results-card__header",
                        h4 { {t!("results-prompt-label")} }
                        span { class: "results-card__meta",
                            {t!("results-model-count", count = models.len())}
                        }
                    }
                    p { class: "results-prompt__text", "{prompt}" }
                }

                section { class: "results-card",
                    ResponsesList { models: models.clone() }
                }

                section { class: "results-card results-charts",
                    div { class: "results-card__header",
                        h4 { {t!("results-charts-title")} }
                    }
                    if charts.is_empty() {
                        p { class: "results-card__placeholder", {t!("results-charts-empty")} }
                    } else {
                        div { class: "results-charts__grid",
                            for (title, chart) in charts.into_iter() {
                                ChartCard { key: "{title}", title: title.to_string(), chart }
                            }
                        }
                    }
                }
            }
        }
    }
}
