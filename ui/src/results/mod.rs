mod charts;
pub use charts::{layout, render, render_metric, Chart, Datum, Layout, ScatterPoint, Series};

pub mod geometry;

mod chart_view;
pub use chart_view::ChartCard;

mod responses;
pub use responses::ResponsesList;

mod panel;
pub use panel::ResultsPanel;

use crate::core::catalog::Model;

/// What the results panel shows after a submit: the models and prompt as
/// they were at that moment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    models: Vec<Model>,
    prompt: String,
}

impl ResultView {
    pub fn new(models: Vec<Model>, prompt: String) -> Self {
        Self { models, prompt }
    }

    pub fn models(&self) -> &[Model] {
        &self.models
    }

    pub fn model_names(&self) -> Vec<&'static str> {
        self.models.iter().map(|model| model.name()).collect()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }
}
