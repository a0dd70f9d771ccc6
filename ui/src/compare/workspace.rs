//! The single owner of the comparison screen's state.
//!
//! Views receive the workspace as a `Signal<Workspace>` prop and read or
//! mutate it through the methods below; nothing else holds screen state.

use dioxus::logger::tracing::{debug, info};

use crate::core::metrics::MetricKey;
use crate::results::ResultView;

use super::metric_selection::MetricSelection;
use super::outcome::{Change, IgnoreReason};
use super::selection::Selection;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workspace {
    pub selection: Selection,
    pub metrics: MetricSelection,
    prompt: String,
    result: Option<ResultView>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    /// Why submitting is currently disabled, if it is.
    pub fn submit_blocker(&self) -> Option<IgnoreReason> {
        if self.prompt.trim().is_empty() {
            Some(IgnoreReason::EmptyPrompt)
        } else if self.selection.filled().is_empty() {
            Some(IgnoreReason::NothingSelected)
        } else {
            None
        }
    }

    pub fn can_submit(&self) -> bool {
        self.submit_blocker().is_none()
    }

    /// Snapshots the filled slots and the prompt into a result view, shows
    /// it, and collapses the metric panel. Metric choices stay live.
    pub fn submit(&mut self) -> Change {
        if let Some(reason) = self.submit_blocker() {
            debug!(?reason, "submit ignored");
            return Change::Ignored(reason);
        }

        let view = ResultView::new(self.selection.filled(), self.prompt.clone());
        info!(models = view.models().len(), "comparison submitted");
        self.result = Some(view);
        self.metrics.collapse_panel();
        Change::Applied
    }

    /// The last submitted snapshot, if results are showing.
    pub fn result(&self) -> Option<&ResultView> {
        self.result.as_ref().filter(|view| !view.models().is_empty())
    }

    pub fn results_visible(&self) -> bool {
        self.result().is_some()
    }

    /// Charts the results panel renders, from the live metric selection.
    pub fn render_plan(&self) -> Vec<MetricKey> {
        self.metrics.render_plan()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Model;

    fn model(name: &str) -> Model {
        Model::from_name(name).unwrap()
    }

    #[test]
    fn submit_needs_a_prompt() {
        let mut workspace = Workspace::new();
        assert_eq!(workspace.submit_blocker(), Some(IgnoreReason::EmptyPrompt));

        workspace.set_prompt("   \n\t");
        assert_eq!(
            workspace.submit(),
            Change::Ignored(IgnoreReason::EmptyPrompt)
        );
        assert!(!workspace.results_visible());
        assert!(workspace.metrics.panel_open());
    }

    #[test]
    fn submit_snapshots_filled_slots() {
        let mut workspace = Workspace::new();
        workspace.selection.set_comparison(model("Gemini"));
        workspace.selection.add_slot();
        workspace.set_prompt("Summarise the plot of Hamlet");

        assert!(workspace.submit().is_applied());
        let view = workspace.result().expect("results visible");
        assert_eq!(view.model_names(), vec!["OpenAI 4o-mini", "Gemini"]);
        assert_eq!(view.prompt(), "Summarise the plot of Hamlet");
        assert!(!workspace.metrics.panel_open());
    }

    #[test]
    fn later_edits_do_not_touch_the_snapshot() {
        let mut workspace = Workspace::new();
        workspace.selection.set_comparison(model("Gemini"));
        workspace.set_prompt("hello");
        workspace.submit();

        workspace.selection.set_primary(model("Llama"));
        workspace.set_prompt("changed");
        let view = workspace.result().unwrap();
        assert_eq!(view.model_names(), vec!["OpenAI 4o-mini", "Gemini"]);
        assert_eq!(view.prompt(), "hello");
    }

    #[test]
    fn metrics_stay_live_after_submit() {
        let mut workspace = Workspace::new();
        workspace.set_prompt("hello");
        workspace.submit();
        assert!(workspace.render_plan().is_empty());

        workspace.metrics.toggle("Latency");
        assert_eq!(workspace.render_plan(), vec![MetricKey::Latency]);
    }

    #[test]
    fn nothing_selected_blocks_submit() {
        let mut workspace = Workspace {
            selection: Selection::empty(),
            ..Workspace::default()
        };
        workspace.set_prompt("hello");
        assert_eq!(
            workspace.submit(),
            Change::Ignored(IgnoreReason::NothingSelected)
        );
    }
}
