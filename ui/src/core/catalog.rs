//! Static model catalog and the canned responses shown in the results panel.

use std::fmt;

/// Models offered for comparison, in display order.
pub const MODEL_NAMES: [&str; 5] = ["OpenAI 4o-mini", "Gemini", "Gemma", "Llama", "DeepSeek"];

/// Model pre-selected in the primary slot when the screen loads.
pub const DEFAULT_PRIMARY: Model = Model(MODEL_NAMES[0]);

/// Shown when a model has no canned response.
pub const NO_RESPONSE: &str = "No response available.";

/// A catalog entry. Only obtainable from the catalog, so the name is never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Model(&'static str);

impl Model {
    /// Looks a model up by its exact catalog name.
    pub fn from_name(name: &str) -> Option<Self> {
        MODEL_NAMES
            .iter()
            .find(|candidate| **candidate == name)
            .map(|candidate| Model(*candidate))
    }

    pub fn name(self) -> &'static str {
        self.0
    }

    /// Placeholder answer for this model; there is no real inference behind it.
    pub fn canned_response(self) -> String {
        canned_response(self.0)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Every catalog model in display order.
pub fn all_models() -> Vec<Model> {
    MODEL_NAMES.iter().map(|name| Model(*name)).collect()
}

pub fn catalog_size() -> usize {
    MODEL_NAMES.len()
}

/// Canned response by raw name; unknown names get [`NO_RESPONSE`].
pub fn canned_response(name: &str) -> String {
    if MODEL_NAMES.iter().any(|known| *known == name) {
        format!("Response from {name}")
    } else {
        NO_RESPONSE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_exact() {
        assert_eq!(Model::from_name("Gemini").map(Model::name), Some("Gemini"));
        assert!(Model::from_name("gemini").is_none());
        assert!(Model::from_name("").is_none());
    }

    #[test]
    fn catalog_preserves_display_order() {
        let names: Vec<_> = all_models().into_iter().map(Model::name).collect();
        assert_eq!(names, MODEL_NAMES.to_vec());
        assert_eq!(DEFAULT_PRIMARY.name(), "OpenAI 4o-mini");
    }

    #[test]
    fn responses_fall_back_for_unknown_models() {
        assert_eq!(canned_response("Llama"), "Response from Llama");
        assert_eq!(canned_response("Mistral"), NO_RESPONSE);
    }
}
