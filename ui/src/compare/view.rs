use dioxus::prelude::*;

use crate::core::catalog::Model;
use crate::core::metrics::catalog_labels;
use crate::t;

use super::selection::PRIMARY_SLOT;
use super::Workspace;

#[derive(Clone, PartialEq)]
struct SlotEntry {
    index: usize,
    current: Option<Model>,
    candidates: Vec<Model>,
    disabled: bool,
}

/// Primary, comparison and additional model pickers plus the "add model" button.
#[component]
pub fn ModelPicker(workspace: Signal<Workspace>) -> Element {
    let mut workspace = workspace;
    let (entries, add_disabled) = {
        let state = workspace.read();
        let selection = &state.selection;
        let entries: Vec<SlotEntry> = selection
            .slots()
            .iter()
            .enumerate()
            .map(|(index, current)| SlotEntry {
                index,
                current: *current,
                candidates: selection.candidates(index),
                disabled: selection.slot_blocker(index).is_some(),
            })
            .collect();
        (entries, selection.add_slot_blocker().is_some())
    };

    rsx! {
        div { class: "compare-models",
            for entry in entries.into_iter() {
                {render_slot(entry, workspace)}
            }
            button {
                r#type: "button",
                class: "button button--ghost compare-models__add",
                disabled: add_disabled,
                onclick: move |_| {
                    workspace.write().selection.add_slot();
                },
                {t!("compare-add-model")}
            }
        }
    }
}

fn render_slot(entry: SlotEntry, mut workspace: Signal<Workspace>) -> Element {
    let SlotEntry {
        index,
        current,
        candidates,
        disabled,
    } = entry;

    let current_value = current.map(Model::name).unwrap_or_default();
    let placeholder = t!("compare-select-model");
    let default_suffix = t!("compare-default-suffix");
    let slot_class = if index == PRIMARY_SLOT {
        "compare-models__select compare-models__select--primary"
    } else {
        "compare-models__select"
    };

    rsx! {
        select {
            key: "{index}",
            class: slot_class,
            disabled,
            value: "{current_value}",
            onchange: move |evt: FormEvent| {
                if let Some(model) = Model::from_name(&evt.value()) {
                    workspace.write().selection.set_slot(index, model);
                }
            },
            option { value: "", disabled: true, selected: current.is_none(), "{placeholder}" }
            for model in candidates.into_iter() {
                option {
                    key: "{model}",
                    value: "{model}",
                    selected: current == Some(model),
                    if index == PRIMARY_SLOT && current == Some(model) {
                        "{model} {default_suffix}"
                    } else {
                        "{model}"
                    }
                }
            }
        }
    }
}

/// Collapsible checklist of evaluation metrics.
#[component]
pub fn MetricChecklist(workspace: Signal<Workspace>) -> Element {
    let mut workspace = workspace;
    let (open, items, count) = {
        let state = workspace.read();
        let items: Vec<(&'static str, bool)> = catalog_labels()
            .map(|metric| (metric, state.metrics.is_checked(metric)))
            .collect();
        (state.metrics.panel_open(), items, state.metrics.len())
    };

    let panel_class = if open {
        "compare-metrics compare-metrics--open"
    } else {
        "compare-metrics"
    };

    rsx! {
        section { class: panel_class,
            button {
                r#type: "button",
                class: "compare-metrics__toggle",
                aria_expanded: "{open}",
                onclick: move |_| {
                    workspace.write().metrics.toggle_panel();
                },
                span { class: "compare-metrics__title", {t!("metrics-title")} }
                span { class: "compare-metrics__count", {t!("metrics-selected-count", count = count)} }
                span { class: "compare-metrics__chevron", aria_hidden: "true",
                    if open { "▴" } else { "▾" }
                }
            }
            div { class: "compare-metrics__body",
                for (metric, checked) in items.into_iter() {
                    label { key: "{metric}", class: "compare-metrics__item",
                        input {
                            r#type: "checkbox",
                            checked,
                            onchange: move |_| {
                                workspace.write().metrics.toggle(metric);
                            },
                        }
                        span { "{metric}" }
                    }
                }
            }
        }
    }
}

/// Prompt entry and the submit button, disabled while the prompt is blank.
#[component]
pub fn PromptBox(workspace: Signal<Workspace>) -> Element {
    let mut workspace = workspace;
    let (prompt, can_submit) = {
        let state = workspace.read();
        (state.prompt().to_string(), state.can_submit())
    };

    rsx! {
        div { class: "compare-prompt",
            textarea {
                class: "compare-prompt__input",
                rows: "5",
                value: "{prompt}",
                placeholder: t!("prompt-placeholder"),
                oninput: move |evt: FormEvent| workspace.write().set_prompt(evt.value()),
            }
            div { class: "compare-prompt__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: !can_submit,
                    onclick: move |_| {
                        workspace.write().submit();
                    },
                    {t!("prompt-submit")}
                }
            }
        }
    }
}
