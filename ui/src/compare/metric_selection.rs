//! Checked evaluation metrics and the picker panel's expanded flag.

use dioxus::logger::tracing::debug;

use crate::core::metrics::{catalog_labels, render_plan, MetricKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSelection {
    /// Checked labels in the order they were checked.
    checked: Vec<String>,
    panel_open: bool,
}

impl Default for MetricSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSelection {
    /// Nothing checked, panel expanded.
    pub fn new() -> Self {
        Self {
            checked: Vec::new(),
            panel_open: true,
        }
    }

    /// Checks `label` if unchecked, unchecks it otherwise. Returns whether it
    /// is checked afterwards.
    pub fn toggle(&mut self, label: &str) -> bool {
        let now_checked = match self.checked.iter().position(|item| item == label) {
            Some(idx) => {
                self.checked.remove(idx);
                false
            }
            None => {
                self.checked.push(label.to_string());
                true
            }
        };
        debug!(label, checked = now_checked, "metric toggled");
        now_checked
    }

    pub fn is_checked(&self, label: &str) -> bool {
        self.checked.iter().any(|item| item == label)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }

    /// Checked labels for display: catalog labels in catalog order, then any
    /// other labels in the order they were checked.
    pub fn checked_labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = catalog_labels()
            .filter(|label| self.is_checked(label))
            .collect();
        labels.extend(
            self.checked
                .iter()
                .map(String::as_str)
                .filter(|label| MetricKey::ALL.iter().all(|key| key.label() != *label)),
        );
        labels
    }

    /// Chart keys to render, in catalog order. Unmapped labels are dropped.
    pub fn render_plan(&self) -> Vec<MetricKey> {
        render_plan(self.checked.iter().map(String::as_str))
    }

    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Flips the panel; the checked set is untouched.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        debug!(open = self.panel_open, "metric panel toggled");
        self.panel_open
    }

    pub fn collapse_panel(&mut self) {
        self.panel_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_its_own_inverse() {
        let mut metrics = MetricSelection::new();
        metrics.toggle("Latency");
        metrics.toggle("Toxicity");
        let before = metrics.clone();

        for label in ["Latency", "Accuracy", "Not a metric"] {
            metrics.toggle(label);
            metrics.toggle(label);
            assert_eq!(metrics.checked_labels(), before.checked_labels());
            assert_eq!(metrics.len(), before.len());
        }
    }

    #[test]
    fn display_follows_catalog_order() {
        let mut metrics = MetricSelection::new();
        metrics.toggle("Robustness");
        metrics.toggle("Made Up");
        metrics.toggle("Accuracy");
        metrics.toggle("Fluency");

        assert_eq!(
            metrics.checked_labels(),
            vec!["Accuracy", "Fluency", "Robustness", "Made Up"]
        );
        assert_eq!(
            metrics.render_plan(),
            vec![MetricKey::Accuracy, MetricKey::Fluency, MetricKey::Robustness]
        );
    }

    #[test]
    fn panel_toggle_leaves_selection_alone() {
        let mut metrics = MetricSelection::new();
        assert!(metrics.panel_open());
        metrics.toggle("Bias & Fairness");

        assert!(!metrics.toggle_panel());
        assert!(metrics.is_checked("Bias & Fairness"));
        assert!(metrics.toggle_panel());
        assert_eq!(metrics.len(), 1);

        metrics.collapse_panel();
        assert!(!metrics.panel_open());
    }
}
