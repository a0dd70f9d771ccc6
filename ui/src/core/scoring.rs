//! Placeholder scoring. Produces stable, varied numbers per (category, model)
//! pair so charts look consistent across renders without an evaluation backend.

use super::catalog::Model;

pub const SCORE_MIN: u32 = 50;
pub const SCORE_MAX: u32 = 99;

/// Source of per-category scores consumed by the chart renderer.
pub trait Scorer {
    fn score(&self, category: &str, model: Model) -> u32;
}

impl<F> Scorer for F
where
    F: Fn(&str, Model) -> u32,
{
    fn score(&self, category: &str, model: Model) -> u32 {
        self(category, model)
    }
}

/// The built-in deterministic scorer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderScorer;

impl Scorer for PlaceholderScorer {
    fn score(&self, category: &str, model: Model) -> u32 {
        placeholder_score(category, model.name())
    }
}

/// `((first char code of model + chars in category) mod 50) + 50`.
///
/// Callers pass catalog model names, which are never empty; an empty name
/// scores as if its first char code were zero.
pub fn placeholder_score(category: &str, model_name: &str) -> u32 {
    let first = model_name.chars().next().map(u32::from).unwrap_or(0);
    let len = category.chars().count() as u32;
    (first.wrapping_add(len) % 50) + SCORE_MIN
}
