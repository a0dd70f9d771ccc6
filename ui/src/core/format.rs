//! Formatting helpers for presenting placeholder scores.

pub fn format_score(value: u32) -> String {
    format!("{value}/100")
}

/// `0.25` → `"25%"`. Non-finite ratios render as a dash.
pub fn format_percent(ratio: f64) -> String {
    if ratio.is_finite() {
        format!("{:.0}%", ratio * 100.0)
    } else {
        "—".to_string()
    }
}
