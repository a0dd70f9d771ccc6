/*!
Theme selector lint for the desktop build.

Every class the shared components put on the comparison form, the results
panel and the charts must have a rule in `ui/assets/theme/main.css`, which
the desktop binary embeds. A renamed class otherwise degrades styling
silently in packaged builds.

When renaming a class in a component, update REQUIRED_SELECTORS too.
*/

const THEME_CSS: &str = ui::THEME_CSS_INLINE;

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page-compare {",
    ".page-compare--split",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--ghost",
    // Comparison form
    ".compare-form",
    ".compare-models__select",
    ".compare-models__select--primary",
    ".compare-metrics",
    ".compare-metrics--open",
    ".compare-metrics__toggle",
    ".compare-metrics__body",
    ".compare-metrics__item",
    ".compare-prompt__input",
    ".compare-prompt__actions",
    // Results panel
    ".results--visible",
    ".results__divider",
    ".results__body",
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    ".results-response",
    ".results-charts__grid",
    // Charts
    ".results-chart {",
    ".results-chart__title",
    ".results-chart__svg",
    ".results-chart__grid",
    ".results-chart__axis-label",
    ".results-chart__legend-swatch",
    ".results-chart__table",
    ".results-chart__unavailable",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in the shared theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn results_panel_animations_are_defined() {
    for name in ["results-grow", "results-divider", "results-slide"] {
        assert!(
            THEME_CSS.contains(&format!("@keyframes {name}")),
            "keyframes `{name}` missing"
        );
        assert!(
            THEME_CSS.contains(&format!("animation: {name}")),
            "keyframes `{name}` defined but never used"
        );
    }
}
