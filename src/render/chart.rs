//! One-dimensional scenes drawn with a ratatui chart.

use super::series::{axis_labels, build_chart_scene};
use crate::config::ChartConfig;
use crate::region::{AxisScale, Region};
use crate::style::{AxisStyle, BaseStyle};
use crate::ui::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::{Axis, Chart, Dataset, Widget};

/// Draw histograms, functions and point sets of `region` into `area`.
pub(crate) fn draw_chart(
    region: &Region,
    area: Rect,
    buf: &mut Buffer,
    colors: &ThemeColors,
    config: &ChartConfig,
) {
    let scene = build_chart_scene(region, colors, config);
    let params = region.parameters();
    let style = region.region_style();

    let datasets: Vec<Dataset<'_>> = scene
        .series
        .iter()
        .map(|s| {
            Dataset::default()
                .marker(s.marker)
                .graph_type(s.graph_type)
                .style(Style::default().fg(s.color))
                .data(&s.points)
        })
        .collect();

    let x_axis = build_axis(
        &style.x_axis,
        scene.x_bounds,
        params.x_scale,
        colors,
        config.axis_labels,
    );
    let y_axis = build_axis(
        &style.y_axis,
        scene.y_bounds,
        params.y_scale,
        colors,
        config.axis_labels,
    );

    Chart::new(datasets)
        .x_axis(x_axis)
        .y_axis(y_axis)
        .legend_position(None)
        .style(Style::default().bg(colors.bg0))
        .render(area, buf);
}

fn build_axis<'a>(
    style: &AxisStyle,
    bounds: (f64, f64),
    scale: AxisScale,
    colors: &ThemeColors,
    label_count: usize,
) -> Axis<'a> {
    let axis = Axis::default().bounds([bounds.0, bounds.1]);
    if !style.is_visible() {
        return axis;
    }

    let line_color = style.line.color.unwrap_or(colors.fg0);
    let mut axis = axis.style(Style::default().fg(line_color));
    if style.tick_labels.is_visible() {
        let tick_style = style.tick_labels.to_style(colors.green);
        axis = axis.labels(
            axis_labels(bounds, scale, label_count)
                .into_iter()
                .map(|label| Span::styled(label, tick_style)),
        );
    }
    match &style.label {
        Some(label) if style.label_text.is_visible() => {
            axis.title(Span::styled(label.clone(), style.label_text.to_style(colors.aqua)))
        },
        _ => axis,
    }
}
