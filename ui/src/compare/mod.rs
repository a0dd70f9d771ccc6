//! Comparison form: slot selection, metric checklist, prompt, and the state
//! owner that ties them together.

mod metric_selection;
mod outcome;
mod selection;
mod view;
mod workspace;

pub use metric_selection::MetricSelection;
pub use outcome::{Change, IgnoreReason};
pub use selection::{Selection, COMPARISON_SLOT, PRIMARY_SLOT};
pub use view::{MetricChecklist, ModelPicker, PromptBox};
pub use workspace::Workspace;
