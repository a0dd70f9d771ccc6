use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

/// The shared theme as text, for platforms that inline it instead of linking.
pub const THEME_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/main.css"
));

/// Links the shared theme stylesheet (and inlines it in release native builds).
#[component]
pub fn Theme() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{THEME_CSS_INLINE}" }
        }
    }
}
