//! Evaluation metric catalog and the label → chart key mapping.
//!
//! Labels are what the checklist shows and what the metric selection stores.
//! Chart keys are the stable identifiers the chart renderer dispatches on.
//! Two label vocabularies exist: the canonical short labels offered in the
//! checklist, and the older long parenthetical labels. Both resolve through
//! [`MetricKey::from_label`]; anything else resolves to `None` and is dropped
//! from the results without complaint.

/// Internal metric identifier, one per catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKey {
    Accuracy,
    Latency,
    Sentiment,
    ContextRetention,
    Hallucination,
    Relevance,
    Coherence,
    Fluency,
    FactualConsistency,
    Toxicity,
    Bias,
    CostEfficiency,
    InstructionFollowing,
    Creativity,
    Robustness,
}

impl MetricKey {
    /// Catalog order; the checklist and the results panel both follow it.
    pub const ALL: [Self; 15] = [
        Self::Accuracy,
        Self::Latency,
        Self::Sentiment,
        Self::ContextRetention,
        Self::Hallucination,
        Self::Relevance,
        Self::Coherence,
        Self::Fluency,
        Self::FactualConsistency,
        Self::Toxicity,
        Self::Bias,
        Self::CostEfficiency,
        Self::InstructionFollowing,
        Self::Creativity,
        Self::Robustness,
    ];

    /// Canonical user-facing label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy",
            Self::Latency => "Latency",
            Self::Sentiment => "Sentiment & Tone",
            Self::ContextRetention => "Context Retention",
            Self::Hallucination => "Hallucination",
            Self::Relevance => "Relevance",
            Self::Coherence => "Coherence",
            Self::Fluency => "Fluency",
            Self::FactualConsistency => "Factual Consistency",
            Self::Toxicity => "Toxicity",
            Self::Bias => "Bias & Fairness",
            Self::CostEfficiency => "Cost Efficiency",
            Self::InstructionFollowing => "Instruction Following",
            Self::Creativity => "Creativity",
            Self::Robustness => "Robustness",
        }
    }

    /// Long-form label used by earlier drafts of the checklist.
    pub fn legacy_label(self) -> &'static str {
        match self {
            Self::Accuracy => "Accuracy of Responses",
            Self::Latency => "Response Time (Latency)",
            Self::Sentiment => "Sentiment & Tone Alignment",
            Self::ContextRetention => "Context Retention (Memory)",
            Self::Hallucination => "Hallucination Detection",
            Self::Relevance => "Relevance (Topical Fit)",
            Self::Coherence => "Coherence (Logical Flow)",
            Self::Fluency => "Fluency (Readability)",
            Self::FactualConsistency => "Factual Consistency (Grounding)",
            Self::Toxicity => "Toxicity (Safety)",
            Self::Bias => "Bias & Fairness (Demographics)",
            Self::CostEfficiency => "Cost Efficiency (Tokens)",
            Self::InstructionFollowing => "Instruction Following (Compliance)",
            Self::Creativity => "Creativity (Novelty)",
            Self::Robustness => "Robustness (Adversarial Prompts)",
        }
    }

    /// Chart dispatch key.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Accuracy => "accuracy",
            Self::Latency => "latency",
            Self::Sentiment => "sentiment",
            Self::ContextRetention => "context_retention",
            Self::Hallucination => "hallucination",
            Self::Relevance => "relevance",
            Self::Coherence => "coherence",
            Self::Fluency => "fluency",
            Self::FactualConsistency => "factual_consistency",
            Self::Toxicity => "toxicity",
            Self::Bias => "bias",
            Self::CostEfficiency => "cost_efficiency",
            Self::InstructionFollowing => "instruction_following",
            Self::Creativity => "creativity",
            Self::Robustness => "robustness",
        }
    }

    /// Resolves a checklist label from either vocabulary.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.label() == label || key.legacy_label() == label)
    }

    /// Resolves a chart dispatch key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|metric| metric.as_key() == key)
    }
}

/// Labels offered in the checklist, in catalog order.
pub fn catalog_labels() -> impl Iterator<Item = &'static str> {
    MetricKey::ALL.into_iter().map(MetricKey::label)
}

/// Maps checked labels to chart keys in catalog order, dropping unmapped labels
/// and collapsing labels from both vocabularies that name the same metric.
pub fn render_plan<'a, I>(labels: I) -> Vec<MetricKey>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut keys: Vec<MetricKey> = labels.into_iter().filter_map(MetricKey::from_label).collect();
    keys.sort();
    keys.dedup();
    keys
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn mapping_is_total_over_the_catalog() {
        for key in MetricKey::ALL {
            assert_eq!(MetricKey::from_label(key.label()), Some(key));
            assert_eq!(MetricKey::from_label(key.legacy_label()), Some(key));
            assert_eq!(MetricKey::from_key(key.as_key()), Some(key));
        }
    }

    #[test]
    fn labels_and_keys_are_unique() {
        let labels: HashSet<_> = MetricKey::ALL
            .iter()
            .flat_map(|key| [key.label(), key.legacy_label()])
            .collect();
        assert_eq!(labels.len(), MetricKey::ALL.len() * 2);

        let keys: HashSet<_> = MetricKey::ALL.iter().map(|key| key.as_key()).collect();
        assert_eq!(keys.len(), MetricKey::ALL.len());
    }

    #[test]
    fn unknown_labels_have_no_mapping() {
        assert_eq!(MetricKey::from_label("Vibes"), None);
        assert_eq!(MetricKey::from_label("accuracy"), None);
        assert_eq!(MetricKey::from_key("Accuracy"), None);
    }

    #[test]
    fn render_plan_follows_catalog_order_and_drops_unknowns() {
        let plan = render_plan([
            "Robustness",
            "Vibes",
            "Accuracy of Responses",
            "Latency",
            "Accuracy",
        ]);
        assert_eq!(
            plan,
            vec![MetricKey::Accuracy, MetricKey::Latency, MetricKey::Robustness]
        );
    }
}
