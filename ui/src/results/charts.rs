//! Chart dispatch: internal metric key + selected models → chart data.
//!
//! The dispatch is a static table ([`layout`]) from metric to chart shape and
//! the fixed categories it plots. [`render`] fills that shape by asking the
//! scorer for one value per (category, model) pair. Keys the table doesn't
//! know produce [`Chart::Unavailable`].

use crate::core::{
    catalog::Model,
    metrics::MetricKey,
    scoring::Scorer,
};

/// One model's value for a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Datum {
    pub model: Model,
    pub value: u32,
}

/// One model's values across a chart's categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    pub model: Model,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScatterPoint {
    pub model: Model,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chart {
    Radar {
        axes: Vec<&'static str>,
        series: Vec<Series>,
    },
    Line {
        x_labels: Vec<&'static str>,
        series: Vec<Series>,
    },
    Bar {
        category: &'static str,
        bars: Vec<Datum>,
    },
    StackedBar {
        segments: Vec<&'static str>,
        stacks: Vec<Series>,
    },
    Pie {
        category: &'static str,
        slices: Vec<Datum>,
    },
    Scatter {
        x_axis: &'static str,
        y_axis: &'static str,
        points: Vec<ScatterPoint>,
    },
    Table {
        column: &'static str,
        rows: Vec<Datum>,
    },
    Unavailable {
        key: String,
    },
}

impl Chart {
    /// Short shape name, used for CSS modifiers.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Radar { .. } => "radar",
            Self::Line { .. } => "line",
            Self::Bar { .. } => "bar",
            Self::StackedBar { .. } => "stacked",
            Self::Pie { .. } => "pie",
            Self::Scatter { .. } => "scatter",
            Self::Table { .. } => "table",
            Self::Unavailable { .. } => "unavailable",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, Self::Unavailable { .. })
    }
}

/// Shape and categories plotted for a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Radar([&'static str; 3]),
    Line([&'static str; 3]),
    Bar(&'static str),
    StackedBar([&'static str; 3]),
    Pie(&'static str),
    Scatter(&'static str, &'static str),
    Table(&'static str),
}

pub fn layout(metric: MetricKey) -> Layout {
    match metric {
        MetricKey::Accuracy => Layout::Radar(["Precision", "Recall", "F1 Score"]),
        MetricKey::Latency => Layout::Line(["Short prompt", "Medium prompt", "Long prompt"]),
        MetricKey::Sentiment => Layout::Pie("Tone alignment"),
        MetricKey::ContextRetention => Layout::Line(["Turn 1", "Turn 5", "Turn 10"]),
        MetricKey::Hallucination => Layout::Bar("Grounded answers"),
        MetricKey::Relevance => Layout::Bar("Topical fit"),
        MetricKey::Coherence => Layout::Radar(["Structure", "Transitions", "Consistency"]),
        MetricKey::Fluency => Layout::Table("Readability"),
        MetricKey::FactualConsistency => {
            Layout::StackedBar(["Supported", "Partially supported", "Unsupported"])
        }
        MetricKey::Toxicity => Layout::Scatter("Safety", "Severity"),
        MetricKey::Bias => Layout::Radar(["Gender", "Ethnicity", "Age"]),
        MetricKey::CostEfficiency => Layout::Table("Tokens per answer"),
        MetricKey::InstructionFollowing => {
            Layout::StackedBar(["Format", "Constraints", "Completeness"])
        }
        MetricKey::Creativity => Layout::Scatter("Novelty", "Usefulness"),
        MetricKey::Robustness => Layout::Bar("Adversarial pass rate"),
    }
}

/// Builds the chart for an internal metric key. Unknown keys yield
/// [`Chart::Unavailable`].
pub fn render<S: Scorer + ?Sized>(key: &str, models: &[Model], scorer: &S) -> Chart {
    match MetricKey::from_key(key) {
        Some(metric) => render_metric(metric, models, scorer),
        None => Chart::Unavailable {
            key: key.to_string(),
        },
    }
}

pub fn render_metric<S: Scorer + ?Sized>(metric: MetricKey, models: &[Model], scorer: &S) -> Chart {
    match layout(metric) {
        Layout::Radar(axes) => Chart::Radar {
            axes: axes.to_vec(),
            series: series(&axes, models, scorer),
        },
        Layout::Line(x_labels) => Chart::Line {
            x_labels: x_labels.to_vec(),
            series: series(&x_labels, models, scorer),
        },
        Layout::Bar(category) => Chart::Bar {
            category,
            bars: data(category, models, scorer),
        },
        Layout::StackedBar(segments) => Chart::StackedBar {
            segments: segments.to_vec(),
            stacks: series(&segments, models, scorer),
        },
        Layout::Pie(category) => Chart::Pie {
            category,
            slices: data(category, models, scorer),
        },
        Layout::Scatter(x_axis, y_axis) => Chart::Scatter {
            x_axis,
            y_axis,
            points: models
                .iter()
                .map(|&model| ScatterPoint {
                    model,
                    x: scorer.score(x_axis, model),
                    y: scorer.score(y_axis, model),
                })
                .collect(),
        },
        Layout::Table(column) => Chart::Table {
            column,
            rows: data(column, models, scorer),
        },
    }
}

fn series<S: Scorer + ?Sized>(categories: &[&str], models: &[Model], scorer: &S) -> Vec<Series> {
    models
        .iter()
        .map(|&model| Series {
            model,
            values: categories
                .iter()
                .map(|category| scorer.score(category, model))
                .collect(),
        })
        .collect()
}

fn data<S: Scorer + ?Sized>(category: &str, models: &[Model], scorer: &S) -> Vec<Datum> {
    models
        .iter()
        .map(|&model| Datum {
            model,
            value: scorer.score(category, model),
        })
        .collect()
}
