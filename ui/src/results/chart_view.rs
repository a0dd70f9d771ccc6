use dioxus::prelude::*;

use crate::core::format;
use crate::results::geometry::{
    arc_path, axis_angle, line_points, pie_slices, polar, radar_points, scale, series_color,
    view_box, PlotArea, SCORE_CEILING, VIEW_HEIGHT, VIEW_WIDTH,
};
use crate::results::{Chart, Datum, ScatterPoint, Series};
use crate::t;

/// Scatter plots zoom in on the range placeholder scores actually occupy.
const SCATTER_MIN: f64 = 40.0;

#[component]
pub fn ChartCard(title: String, chart: Chart) -> Element {
    let kind = chart.kind();
    let body = match &chart {
        Chart::Radar { axes, series } => render_radar(axes, series),
        Chart::Line { x_labels, series } => render_line(x_labels, series),
        Chart::Bar { category, bars } => render_bars(category, bars),
        Chart::StackedBar { segments, stacks } => render_stacked(segments, stacks),
        Chart::Pie { category, slices } => render_pie(category, slices),
        Chart::Scatter {
            x_axis,
            y_axis,
            points,
        } => render_scatter(x_axis, y_axis, points),
        Chart::Table { column, rows } => render_table(column, rows),
        Chart::Unavailable { .. } => rsx! {
            p { class: "results-card__placeholder results-chart__unavailable",
                {t!("chart-unavailable", metric = title.clone())}
            }
        },
    };

    rsx! {
        figure { class: "results-chart results-chart--{kind}",
            figcaption { class: "results-chart__title", "{title}" }
            {body}
        }
    }
}

fn legend(entries: Vec<(String, &'static str)>) -> Element {
    rsx! {
        ul { class: "results-chart__legend",
            for (label, color) in entries.into_iter() {
                li { class: "results-chart__legend-item",
                    span {
                        class: "results-chart__legend-swatch",
                        style: "background:{color}",
                    }
                    span { "{label}" }
                }
            }
        }
    }
}

fn model_legend(series: &[Series]) -> Element {
    legend(
        series
            .iter()
            .enumerate()
            .map(|(idx, s)| (s.model.name().to_string(), series_color(idx)))
            .collect(),
    )
}

fn datum_legend(data: &[Datum]) -> Element {
    legend(
        data.iter()
            .enumerate()
            .map(|(idx, d)| (d.model.name().to_string(), series_color(idx)))
            .collect(),
    )
}

fn horizontal_grid(area: &PlotArea) -> Vec<(String, String)> {
    [25.0, 50.0, 75.0, 100.0]
        .into_iter()
        .map(|value| (format!("{:.1}", area.y_for(value)), format!("{value:.0}")))
        .collect()
}

fn render_radar(axes: &[&'static str], series: &[Series]) -> Element {
    let (cx, cy, radius) = (VIEW_WIDTH / 2.0, VIEW_HEIGHT / 2.0, 80.0);
    let count = axes.len();

    let rings: Vec<String> = [25u32, 50, 75, 100]
        .into_iter()
        .map(|level| radar_points(&vec![level; count], cx, cy, radius))
        .collect();

    let spokes: Vec<(String, String, String, String, &'static str)> = axes
        .iter()
        .enumerate()
        .map(|(idx, axis)| {
            let angle = axis_angle(idx, count);
            let (x, y) = polar(cx, cy, radius, angle);
            let (lx, ly) = polar(cx, cy, radius + 14.0, angle);
            (
                format!("{x:.1}"),
                format!("{y:.1}"),
                format!("{lx:.1}"),
                format!("{ly:.1}"),
                *axis,
            )
        })
        .collect();

    let shapes: Vec<(String, &'static str)> = series
        .iter()
        .enumerate()
        .map(|(idx, s)| (radar_points(&s.values, cx, cy, radius), series_color(idx)))
        .collect();

    let center_x = format!("{cx:.1}");
    let center_y = format!("{cy:.1}");

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            for ring in rings.into_iter() {
                polygon { class: "results-chart__grid", points: "{ring}", fill: "none" }
            }
            for (x, y, lx, ly, axis) in spokes.into_iter() {
                line { class: "results-chart__grid", x1: "{center_x}", y1: "{center_y}", x2: "{x}", y2: "{y}" }
                text { class: "results-chart__axis-label", x: "{lx}", y: "{ly}", text_anchor: "middle", "{axis}" }
            }
            for (points, color) in shapes.into_iter() {
                polygon {
                    points: "{points}",
                    fill: "{color}",
                    fill_opacity: "0.2",
                    stroke: "{color}",
                    stroke_width: "2",
                }
            }
        }
        {model_legend(series)}
    }
}

fn render_line(x_labels: &[&'static str], series: &[Series]) -> Element {
    let area = PlotArea::default();
    let grid = horizontal_grid(&area);
    let left = format!("{:.1}", area.left);
    let right = format!("{:.1}", area.right());
    let label_y = format!("{:.1}", area.bottom() + 18.0);

    let ticks: Vec<(String, &'static str)> = x_labels
        .iter()
        .enumerate()
        .map(|(idx, label)| (format!("{:.1}", area.slot_center(idx, x_labels.len())), *label))
        .collect();

    let lines: Vec<(String, &'static str, Vec<(String, String)>)> = series
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let dots = s
                .values
                .iter()
                .enumerate()
                .map(|(i, value)| {
                    (
                        format!("{:.1}", area.slot_center(i, s.values.len())),
                        format!("{:.1}", area.y_for(f64::from(*value))),
                    )
                })
                .collect();
            (line_points(&s.values, &area), series_color(idx), dots)
        })
        .collect();

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            for (y, label) in grid.into_iter() {
                line { class: "results-chart__grid", x1: "{left}", y1: "{y}", x2: "{right}", y2: "{y}" }
                text { class: "results-chart__axis-label", x: "4", y: "{y}", "{label}" }
            }
            for (x, label) in ticks.into_iter() {
                text { class: "results-chart__axis-label", x: "{x}", y: "{label_y}", text_anchor: "middle", "{label}" }
            }
            for (points, color, dots) in lines.into_iter() {
                polyline { points: "{points}", fill: "none", stroke: "{color}", stroke_width: "2" }
                for (x, y) in dots.into_iter() {
                    circle { cx: "{x}", cy: "{y}", r: "3", fill: "{color}" }
                }
            }
        }
        {model_legend(series)}
    }
}

struct BarRect {
    x: String,
    y: String,
    width: String,
    height: String,
    center: String,
    label_y: String,
    value: u32,
    color: &'static str,
}

fn render_bars(category: &str, bars: &[Datum]) -> Element {
    let area = PlotArea::default();
    let grid = horizontal_grid(&area);
    let left = format!("{:.1}", area.left);
    let right = format!("{:.1}", area.right());
    let bar_width = area.slot_width(bars.len()) * 0.6;

    let rects: Vec<BarRect> = bars
        .iter()
        .enumerate()
        .map(|(idx, bar)| {
            let center = area.slot_center(idx, bars.len());
            let top = area.y_for(f64::from(bar.value));
            BarRect {
                x: format!("{:.1}", center - bar_width / 2.0),
                y: format!("{top:.1}"),
                width: format!("{bar_width:.1}"),
                height: format!("{:.1}", area.bottom() - top),
                center: format!("{center:.1}"),
                label_y: format!("{:.1}", top - 4.0),
                value: bar.value,
                color: series_color(idx),
            }
        })
        .collect();

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            for (y, label) in grid.into_iter() {
                line { class: "results-chart__grid", x1: "{left}", y1: "{y}", x2: "{right}", y2: "{y}" }
                text { class: "results-chart__axis-label", x: "4", y: "{y}", "{label}" }
            }
            for bar in rects.into_iter() {
                rect {
                    x: "{bar.x}",
                    y: "{bar.y}",
                    width: "{bar.width}",
                    height: "{bar.height}",
                    rx: "3",
                    fill: "{bar.color}",
                }
                text {
                    class: "results-chart__value",
                    x: "{bar.center}",
                    y: "{bar.label_y}",
                    text_anchor: "middle",
                    "{bar.value}"
                }
            }
        }
        p { class: "results-chart__caption", "{category}" }
        {datum_legend(bars)}
    }
}

fn render_stacked(segments: &[&'static str], stacks: &[Series]) -> Element {
    let area = PlotArea::default();
    let ceiling = SCORE_CEILING * segments.len().max(1) as f64;
    let bar_width = area.slot_width(stacks.len()) * 0.6;
    let label_y = format!("{:.1}", area.bottom() + 18.0);

    let columns: Vec<(String, &'static str, Vec<(String, String, String, String, &'static str)>)> =
        stacks
            .iter()
            .enumerate()
            .map(|(idx, stack)| {
                let center = area.slot_center(idx, stacks.len());
                let x = center - bar_width / 2.0;
                let mut base = 0.0;
                let pieces = stack
                    .values
                    .iter()
                    .enumerate()
                    .map(|(seg, value)| {
                        let bottom = area.bottom() - scale(base, 0.0, ceiling, 0.0, area.height);
                        base += f64::from(*value);
                        let top = area.bottom() - scale(base, 0.0, ceiling, 0.0, area.height);
                        (
                            format!("{x:.1}"),
                            format!("{top:.1}"),
                            format!("{bar_width:.1}"),
                            format!("{:.1}", bottom - top),
                            series_color(seg),
                        )
                    })
                    .collect();
                (format!("{center:.1}"), stack.model.name(), pieces)
            })
            .collect();

    let segment_legend = segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| (segment.to_string(), series_color(idx)))
        .collect();

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            for (center, name, pieces) in columns.into_iter() {
                for (x, y, w, h, color) in pieces.into_iter() {
                    rect { x: "{x}", y: "{y}", width: "{w}", height: "{h}", fill: "{color}" }
                }
                text { class: "results-chart__axis-label", x: "{center}", y: "{label_y}", text_anchor: "middle", "{name}" }
            }
        }
        {legend(segment_legend)}
    }
}

fn render_pie(category: &str, slices: &[Datum]) -> Element {
    let (cx, cy, radius) = (110.0, VIEW_HEIGHT / 2.0, 80.0);
    let values: Vec<u32> = slices.iter().map(|slice| slice.value).collect();

    let wedges: Vec<(String, &'static str)> = pie_slices(&values)
        .iter()
        .enumerate()
        .map(|(idx, slice)| (arc_path(cx, cy, radius, slice), series_color(idx)))
        .collect();

    let shares: Vec<(String, &'static str)> = pie_slices(&values)
        .iter()
        .zip(slices.iter())
        .enumerate()
        .map(|(idx, (slice, datum))| {
            (
                format!("{} · {}", datum.model.name(), format::format_percent(slice.share)),
                series_color(idx),
            )
        })
        .collect();

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            for (d, color) in wedges.into_iter() {
                path { d: "{d}", fill: "{color}", stroke: "#ffffff", stroke_width: "1" }
            }
        }
        p { class: "results-chart__caption", "{category}" }
        {legend(shares)}
    }
}

fn render_scatter(x_axis: &str, y_axis: &str, points: &[ScatterPoint]) -> Element {
    let area = PlotArea::default();
    let left = format!("{:.1}", area.left);
    let right = format!("{:.1}", area.right());
    let top = format!("{:.1}", area.top);
    let bottom = format!("{:.1}", area.bottom());
    let label_y = format!("{:.1}", area.bottom() + 18.0);
    let center_x = format!("{:.1}", area.left + area.width / 2.0);

    let dots: Vec<(String, String, &'static str)> = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let x = scale(
                f64::from(point.x),
                SCATTER_MIN,
                SCORE_CEILING,
                area.left,
                area.right(),
            );
            let y = scale(
                f64::from(point.y),
                SCATTER_MIN,
                SCORE_CEILING,
                area.bottom(),
                area.top,
            );
            (format!("{x:.1}"), format!("{y:.1}"), series_color(idx))
        })
        .collect();

    let entries = points
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            (
                format!("{} ({}, {})", point.model.name(), point.x, point.y),
                series_color(idx),
            )
        })
        .collect();

    rsx! {
        svg { class: "results-chart__svg", view_box: view_box(), role: "img",
            line { class: "results-chart__axis", x1: "{left}", y1: "{bottom}", x2: "{right}", y2: "{bottom}" }
            line { class: "results-chart__axis", x1: "{left}", y1: "{top}", x2: "{left}", y2: "{bottom}" }
            text { class: "results-chart__axis-label", x: "{center_x}", y: "{label_y}", text_anchor: "middle", "{x_axis}" }
            text { class: "results-chart__axis-label", x: "4", y: "{top}", "{y_axis}" }
            for (x, y, color) in dots.into_iter() {
                circle { cx: "{x}", cy: "{y}", r: "6", fill: "{color}", fill_opacity: "0.8" }
            }
        }
        {legend(entries)}
    }
}

fn render_table(column: &str, rows: &[Datum]) -> Element {
    let model_heading = t!("chart-table-model");
    rsx! {
        table { class: "results-chart__table",
            thead {
                tr {
                    th { "{model_heading}" }
                    th { "{column}" }
                }
            }
            tbody {
                for row in rows.iter() {
                    tr {
                        td { "{row.model}" }
                        td { {format::format_score(row.value)} }
                    }
                }
            }
        }
    }
}
