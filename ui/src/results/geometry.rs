//! SVG geometry for the chart components. Everything here is pure so the
//! numbers can be checked without rendering.

use std::f64::consts::{FRAC_PI_2, TAU};

/// Shared viewBox for every chart.
pub const VIEW_WIDTH: f64 = 320.0;
pub const VIEW_HEIGHT: f64 = 220.0;

/// `viewBox` attribute shared by every chart.
pub fn view_box() -> String {
    format!("0 0 {VIEW_WIDTH} {VIEW_HEIGHT}")
}

/// Upper bound of the score axis.
pub const SCORE_CEILING: f64 = 100.0;

const PALETTE: [&str; 6] = [
    "#4f7cff", "#ff8a4c", "#34c38f", "#c86bfa", "#f2c94c", "#ef5b7a",
];

/// Stable colour for the n-th model of a chart.
pub fn series_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Plot rectangle inside the viewBox, leaving room for axis labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            left: 36.0,
            top: 16.0,
            width: VIEW_WIDTH - 52.0,
            height: VIEW_HEIGHT - 56.0,
        }
    }
}

impl PlotArea {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Y coordinate for a score in `0..=SCORE_CEILING`.
    pub fn y_for(&self, value: f64) -> f64 {
        self.bottom() - self.height * (value.clamp(0.0, SCORE_CEILING) / SCORE_CEILING)
    }

    /// X coordinate of the centre of slot `index` out of `count` equal slots.
    pub fn slot_center(&self, index: usize, count: usize) -> f64 {
        let count = count.max(1) as f64;
        self.left + self.width * ((index as f64 + 0.5) / count)
    }

    pub fn slot_width(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }
}

/// Maps `value` from `[from_min, from_max]` onto `[to_min, to_max]`, clamped.
pub fn scale(value: f64, from_min: f64, from_max: f64, to_min: f64, to_max: f64) -> f64 {
    if (from_max - from_min).abs() < f64::EPSILON {
        return to_min;
    }
    let t = ((value - from_min) / (from_max - from_min)).clamp(0.0, 1.0);
    to_min + (to_max - to_min) * t
}

/// Point at `radius` from the centre, with angle 0 pointing straight up and
/// growing clockwise.
pub fn polar(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Angle of axis `index` out of `count` evenly spread axes.
pub fn axis_angle(index: usize, count: usize) -> f64 {
    TAU * index as f64 / count.max(1) as f64
}

/// `points` attribute for a radar polygon, one vertex per value.
pub fn radar_points(values: &[u32], cx: f64, cy: f64, radius: f64) -> String {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let r = radius * (f64::from(*value).min(SCORE_CEILING) / SCORE_CEILING);
            let (x, y) = polar(cx, cy, r, axis_angle(idx, count));
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `points` attribute for a line series spread across the plot area.
pub fn line_points(values: &[u32], area: &PlotArea) -> String {
    let count = values.len();
    values
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let x = area.slot_center(idx, count);
            let y = area.y_for(f64::from(*value));
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// One pie slice, angles in radians measured clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slice {
    pub start: f64,
    pub end: f64,
    pub share: f64,
}

/// Splits the full circle proportionally to `values`. All-zero input yields
/// no slices.
pub fn pie_slices(values: &[u32]) -> Vec<Slice> {
    let total: f64 = values.iter().map(|v| f64::from(*v)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|value| {
            let share = f64::from(*value) / total;
            let end = start + share * TAU;
            let slice = Slice { start, end, share };
            start = end;
            slice
        })
        .collect()
}

/// SVG path for a pie slice. A slice covering the whole circle is drawn as
/// two half arcs since a single arc with equal endpoints renders nothing.
pub fn arc_path(cx: f64, cy: f64, radius: f64, slice: &Slice) -> String {
    if slice.share >= 1.0 - 1e-9 {
        let (tx, ty) = polar(cx, cy, radius, 0.0);
        let (bx, by) = polar(cx, cy, radius, std::f64::consts::PI);
        return format!(
            "M {tx:.1} {ty:.1} A {radius:.1} {radius:.1} 0 1 1 {bx:.1} {by:.1} A {radius:.1} {radius:.1} 0 1 1 {tx:.1} {ty:.1} Z"
        );
    }

    let (sx, sy) = polar(cx, cy, radius, slice.start);
    let (ex, ey) = polar(cx, cy, radius, slice.end);
    let large_arc = if slice.end - slice.start > std::f64::consts::PI {
        1
    } else {
        0
    };
    format!(
        "M {cx:.1} {cy:.1} L {sx:.1} {sy:.1} A {radius:.1} {radius:.1} 0 {large_arc} 1 {ex:.1} {ey:.1} Z"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn scale_clamps_and_handles_degenerate_ranges() {
        assert!(close(scale(75.0, 50.0, 100.0, 0.0, 10.0), 5.0));
        assert!(close(scale(10.0, 50.0, 100.0, 0.0, 10.0), 0.0));
        assert!(close(scale(500.0, 50.0, 100.0, 0.0, 10.0), 10.0));
        assert!(close(scale(3.0, 1.0, 1.0, 4.0, 9.0), 4.0));
    }

    #[test]
    fn polar_starts_at_twelve_o_clock() {
        let (x, y) = polar(100.0, 100.0, 10.0, 0.0);
        assert!(close(x, 100.0) && close(y, 90.0));
        let (x, y) = polar(100.0, 100.0, 10.0, FRAC_PI_2);
        assert!(close(x, 110.0) && close(y, 100.0));
    }

    #[test]
    fn plot_area_maps_scores_to_height() {
        let area = PlotArea::default();
        assert!(close(area.y_for(0.0), area.bottom()));
        assert!(close(area.y_for(100.0), area.top));
        assert!(close(area.y_for(250.0), area.top));
        assert!(close(area.slot_center(0, 2), area.left + area.width / 4.0));
    }

    #[test]
    fn radar_has_one_vertex_per_value() {
        let points = radar_points(&[100, 50, 75], 50.0, 50.0, 40.0);
        let vertices: Vec<_> = points.split(' ').collect();
        assert_eq!(vertices.len(), 3);
        assert_eq!(vertices[0], "50.0,10.0");
    }

    #[test]
    fn pie_slices_cover_the_circle() {
        let slices = pie_slices(&[50, 25, 25]);
        assert_eq!(slices.len(), 3);
        assert!(close(slices[0].share, 0.5));
        assert!(close(slices[2].end, TAU));
        assert!(pie_slices(&[0, 0]).is_empty());
        assert!(pie_slices(&[]).is_empty());
    }

    #[test]
    fn arc_paths_pick_the_large_arc_flag() {
        let slices = pie_slices(&[70, 30]);
        assert!(arc_path(0.0, 0.0, 10.0, &slices[0]).contains(" 0 1 1 "));
        assert!(arc_path(0.0, 0.0, 10.0, &slices[1]).contains(" 0 0 1 "));

        let whole = pie_slices(&[42]);
        let path = arc_path(0.0, 0.0, 10.0, &whole[0]);
        assert_eq!(path.matches(" A ").count(), 2);
    }

    #[test]
    fn view_box_follows_the_view_size() {
        assert_eq!(view_box(), "0 0 320 220");
        let parts: Vec<f64> = view_box()
            .split(' ')
            .map(|part| part.parse().unwrap())
            .collect();
        assert_eq!(parts, vec![0.0, 0.0, VIEW_WIDTH, VIEW_HEIGHT]);
    }

    #[test]
    fn palette_wraps() {
        assert_eq!(series_color(0), series_color(PALETTE.len()));
    }
}
