//! Turns the objects of a 1D scene into chart series.
//!
//! Everything here works in axis space: on a log axis values are stored as
//! `log10(v)` and non-positive values are dropped.

use crate::analysis::{DataPointSet, Function, FunctionKind, Histogram1D, PlotObject};
use crate::config::ChartConfig;
use crate::region::{AxisScale, Region, SceneEntry, MAX_FUNCTION_SAMPLES};
use crate::style::{BaseStyle, MarkerShape, PlotterStyle};
use crate::ui::ThemeColors;
use ratatui::style::Color;
use ratatui::symbols::Marker;
use ratatui::widgets::GraphType;

/// One drawable line, bar set or point cloud.
#[derive(Debug, Clone)]
pub(crate) struct Series {
    pub(crate) points: Vec<(f64, f64)>,
    pub(crate) graph_type: GraphType,
    pub(crate) marker: Marker,
    pub(crate) color: Color,
}

/// Series plus the axis-space bounds they are drawn in.
#[derive(Debug, Clone)]
pub(crate) struct ChartScene {
    pub(crate) series: Vec<Series>,
    pub(crate) x_bounds: (f64, f64),
    pub(crate) y_bounds: (f64, f64),
}

/// Map a data value onto an axis.
pub(crate) fn to_axis(value: f64, scale: AxisScale) -> Option<f64> {
    match scale {
        AxisScale::Lin if value.is_finite() => Some(value),
        AxisScale::Log if value.is_finite() && value > 0.0 => Some(value.log10()),
        _ => None,
    }
}

/// Map an axis position back to a data value.
pub(crate) fn from_axis(position: f64, scale: AxisScale) -> f64 {
    match scale {
        AxisScale::Lin => position,
        AxisScale::Log => 10f64.powf(position),
    }
}

/// Colors an entry is drawn with after style layering and theme defaults.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EntryColors {
    pub(crate) line: Color,
    pub(crate) marker: Color,
    pub(crate) fill: Color,
}

impl EntryColors {
    pub(crate) fn resolve(style: &PlotterStyle, fallback: Color) -> Self {
        let line = style.data.line.color.unwrap_or(fallback);
        Self {
            line,
            marker: style.data.marker.color.unwrap_or(line),
            fill: style.data.fill.color.unwrap_or(line),
        }
    }
}

/// Build every series of a 1D scene.
pub(crate) fn build_chart_scene(
    region: &Region,
    colors: &ThemeColors,
    config: &ChartConfig,
) -> ChartScene {
    let params = region.parameters();
    let (x_scale, y_scale) = (params.x_scale, params.y_scale);

    let x_data = region.x_limits().resolve(auto_x_range(region, x_scale, config));
    let mut x_bounds = axis_bounds(x_data, x_scale);
    if x_scale == AxisScale::Log && region.x_limits().is_auto() {
        x_bounds = decade_bounds(x_bounds, config.axis_labels);
    }

    let mut series = Vec::new();
    let mut has_histogram = false;
    for (index, entry) in region.entries().iter().enumerate() {
        let style = region.effective_style(entry);
        if !style.is_visible() || !style.data.is_visible() {
            continue;
        }
        let entry_colors = EntryColors::resolve(&style, colors.series_color(index));
        match &entry.object {
            PlotObject::Histogram1D(h) => {
                has_histogram = true;
                histogram_series(h, &style, entry_colors, x_scale, y_scale, &mut series);
            },
            PlotObject::Function(f) => {
                if style.data.line.is_visible() {
                    series.push(function_series(
                        f,
                        &style,
                        entry_colors,
                        x_bounds,
                        params.function_samples,
                        (x_scale, y_scale),
                    ));
                }
            },
            PlotObject::DataPointSet(d) => {
                point_series(d, &style, entry_colors, x_scale, y_scale, &mut series);
            },
            PlotObject::Histogram2D(_) => {},
        }
    }

    let y_bounds = match region.y_limits().range() {
        Some(range) => axis_bounds(range, y_scale),
        None if y_scale == AxisScale::Log => {
            decade_bounds(auto_y_bounds(&series, false, config), config.axis_labels)
        },
        None => auto_y_bounds(&series, has_histogram, config),
    };

    ChartScene {
        series,
        x_bounds,
        y_bounds,
    }
}

/// Labels for the axis ticks, evenly spaced in axis space.
///
/// Log axes whose bounds are whole exponents get one label every few decades.
pub(crate) fn axis_labels(bounds: (f64, f64), scale: AxisScale, count: usize) -> Vec<String> {
    let count = count.max(2);
    let span = bounds.1 - bounds.0;
    if scale == AxisScale::Log && span > 0.0 && bounds.0.fract() == 0.0 && bounds.1.fract() == 0.0
    {
        let step = decade_step(span, count);
        if (span / step).fract() == 0.0 {
            let labels = (span / step) as usize + 1;
            return (0..labels)
                .map(|i| {
                    let exponent = bounds.0 + i as f64 * step;
                    super::format::format_axis_label(10f64.powf(exponent))
                })
                .collect();
        }
    }
    (0..count)
        .map(|i| {
            let t = i as f64 / (count - 1) as f64;
            let position = bounds.0 + t * (bounds.1 - bounds.0);
            super::format::format_axis_label(from_axis(position, scale))
        })
        .collect()
}

/// Decades between two labels so that at most `count` labels fit.
fn decade_step(span: f64, count: usize) -> f64 {
    (span / (count.max(2) - 1) as f64).ceil().max(1.0)
}

/// Widen log-axis bounds outward to whole exponents, with a span that is a
/// multiple of the label step.
fn decade_bounds(bounds: (f64, f64), count: usize) -> (f64, f64) {
    let lo = bounds.0.floor();
    let span = (bounds.1.ceil() - lo).max(1.0);
    let step = decade_step(span, count);
    (lo, lo + step * (span / step).ceil())
}

fn entry_x_extent(entry: &SceneEntry) -> Option<(f64, f64)> {
    match &entry.object {
        PlotObject::Histogram1D(h) => Some((h.axis().lower_edge(), h.axis().upper_edge())),
        PlotObject::DataPointSet(d) if d.size() > 0 => {
            if d.dimension() == 1 {
                Some((0.0, (d.size() - 1) as f64))
            } else {
                let (lo, hi) = (d.lower_extent(0), d.upper_extent(0));
                (lo.is_finite() && hi.is_finite()).then_some((lo, hi))
            }
        },
        PlotObject::Function(f) if f.kind() == FunctionKind::Gaussian => {
            let (mean, sigma) = (f.parameters()[1], f.parameters()[2].abs());
            (sigma > 0.0).then(|| (mean - 4.0 * sigma, mean + 4.0 * sigma))
        },
        _ => None,
    }
}

fn auto_x_range(region: &Region, scale: AxisScale, config: &ChartConfig) -> (f64, f64) {
    let (mut lo, mut hi) = region
        .entries()
        .iter()
        .filter_map(entry_x_extent)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (a, b)| {
            (lo.min(a), hi.max(b))
        });
    if !lo.is_finite() || !hi.is_finite() {
        (lo, hi) = config.default_x_range;
    }
    if scale == AxisScale::Log {
        if hi <= 0.0 {
            return (1.0, 10.0);
        }
        if lo <= 0.0 {
            lo = hi * 1e-3;
        }
    }
    if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn axis_bounds(range: (f64, f64), scale: AxisScale) -> (f64, f64) {
    match (to_axis(range.0, scale), to_axis(range.1, scale)) {
        (Some(lo), Some(hi)) if lo < hi => (lo, hi),
        (Some(lo), Some(_)) => (lo - 0.5, lo + 0.5),
        _ => (0.0, 1.0),
    }
}

fn auto_y_bounds(series: &[Series], include_zero: bool, config: &ChartConfig) -> (f64, f64) {
    let (mut lo, mut hi) = series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|&(_, y)| y)
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });
    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }
    if include_zero {
        lo = lo.min(0.0);
        hi = hi.max(0.0);
    }
    let mut range = hi - lo;
    if range.abs() < 1e-12 {
        range = lo.abs().max(1.0);
        lo -= range / 2.0;
        hi += range / 2.0;
    }
    let padding = range * config.y_padding_factor;
    // Histograms rest on the axis rather than floating above it.
    let lo = if include_zero && lo == 0.0 { 0.0 } else { lo - padding };
    (lo, hi + padding)
}

fn line_marker(style: &PlotterStyle) -> Marker {
    style.data.line.marker()
}

fn histogram_series(
    h: &Histogram1D,
    style: &PlotterStyle,
    colors: EntryColors,
    x_scale: AxisScale,
    y_scale: AxisScale,
    out: &mut Vec<Series>,
) {
    let axis = h.axis();
    if style.data.fill.is_visible() {
        let points = (0..axis.bins())
            .filter_map(|i| {
                Some((
                    to_axis(axis.bin_center(i), x_scale)?,
                    to_axis(h.bin_height(i), y_scale)?,
                ))
            })
            .collect();
        out.push(Series {
            points,
            graph_type: GraphType::Bar,
            marker: Marker::Block,
            color: colors.fill,
        });
    } else if style.data.line.is_visible() {
        let mut points = Vec::with_capacity(axis.bins() * 2);
        for i in 0..axis.bins() {
            let (Some(lo), Some(hi), Some(y)) = (
                to_axis(axis.bin_lower_edge(i), x_scale),
                to_axis(axis.bin_upper_edge(i), x_scale),
                to_axis(h.bin_height(i), y_scale),
            ) else {
                continue;
            };
            points.push((lo, y));
            points.push((hi, y));
        }
        out.push(Series {
            points,
            graph_type: GraphType::Line,
            marker: line_marker(style),
            color: colors.line,
        });
    }

    // Histogram error bars are opt-in.
    if style.data.show_error_bars == Some(true) && style.data.line.is_visible() {
        for i in 0..axis.bins() {
            let height = h.bin_height(i);
            let error = h.bin_error(i);
            if error > 0.0 {
                push_segment(
                    out,
                    (axis.bin_center(i), height - error),
                    (axis.bin_center(i), height + error),
                    (x_scale, y_scale),
                    (line_marker(style), colors.line),
                );
            }
        }
    }
}

fn function_series(
    f: &Function,
    style: &PlotterStyle,
    colors: EntryColors,
    x_bounds: (f64, f64),
    samples: usize,
    (x_scale, y_scale): (AxisScale, AxisScale),
) -> Series {
    let samples = samples.clamp(2, MAX_FUNCTION_SAMPLES);
    let step = (x_bounds.1 - x_bounds.0) / (samples - 1) as f64;
    let points = (0..samples)
        .filter_map(|i| {
            let position = x_bounds.0 + i as f64 * step;
            let y = f.value(from_axis(position, x_scale));
            Some((position, to_axis(y, y_scale)?))
        })
        .collect();
    Series {
        points,
        graph_type: GraphType::Line,
        marker: line_marker(style),
        color: colors.line,
    }
}

fn point_series(
    d: &DataPointSet,
    style: &PlotterStyle,
    colors: EntryColors,
    x_scale: AxisScale,
    y_scale: AxisScale,
    out: &mut Vec<Series>,
) {
    let one_dimensional = d.dimension() == 1;
    let y_coord = if one_dimensional { 0 } else { 1 };

    if style.data.error_bars_visible() && style.data.line.is_visible() {
        for (i, point) in d.points().iter().enumerate() {
            let Some(y) = point.coordinate(y_coord) else {
                continue;
            };
            let x = if one_dimensional {
                i as f64
            } else {
                match point.coordinate(0) {
                    Some(x) => {
                        if x.has_error() {
                            push_segment(
                                out,
                                (x.lower(), y.value),
                                (x.upper(), y.value),
                                (x_scale, y_scale),
                                (line_marker(style), colors.line),
                            );
                        }
                        x.value
                    },
                    None => continue,
                }
            };
            if y.has_error() {
                push_segment(
                    out,
                    (x, y.lower()),
                    (x, y.upper()),
                    (x_scale, y_scale),
                    (line_marker(style), colors.line),
                );
            }
        }
    }

    if style.data.marker.is_visible() {
        let points = d
            .points()
            .iter()
            .enumerate()
            .filter_map(|(i, point)| {
                let x = if one_dimensional {
                    i as f64
                } else {
                    point.coordinate(0)?.value
                };
                let y = point.coordinate(y_coord)?.value;
                Some((to_axis(x, x_scale)?, to_axis(y, y_scale)?))
            })
            .collect();
        out.push(Series {
            points,
            graph_type: GraphType::Scatter,
            marker: style.data.marker.shape.unwrap_or(MarkerShape::Dot).marker(),
            color: colors.marker,
        });
    }
}

/// Two-point line, with the lower end clipped to the smallest positive value on log axes.
fn push_segment(
    out: &mut Vec<Series>,
    from: (f64, f64),
    to: (f64, f64),
    (x_scale, y_scale): (AxisScale, AxisScale),
    (marker, color): (Marker, Color),
) {
    let clip = |v: f64, scale: AxisScale, other: f64| -> Option<f64> {
        match scale {
            AxisScale::Log if v <= 0.0 && other > 0.0 => to_axis(other * 1e-3, scale),
            _ => to_axis(v, scale),
        }
    };
    let start = (clip(from.0, x_scale, to.0), clip(from.1, y_scale, to.1));
    let end = (to_axis(to.0, x_scale), to_axis(to.1, y_scale));
    if let ((Some(x0), Some(y0)), (Some(x1), Some(y1))) = (start, end) {
        out.push(Series {
            points: vec![(x0, y0), (x1, y1)],
            graph_type: GraphType::Line,
            marker,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DataPointSet, Function, Histogram1D};
    use crate::region::PlotterRegion;
    use crate::ui::Theme;

    fn scene(region: &Region) -> ChartScene {
        build_chart_scene(
            region,
            &ThemeColors::from_theme(&Theme::GruvboxDark),
            &ChartConfig::default(),
        )
    }

    #[test]
    fn histogram_becomes_a_staircase_resting_on_zero() {
        let mut h = Histogram1D::new("h", 4, 0.0, 4.0).unwrap();
        h.fill(0.5, 2.0);
        h.fill(2.5, 4.0);
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        let scene = scene(&region);
        assert_eq!(scene.series.len(), 1);
        assert_eq!(scene.series[0].points.len(), 8);
        assert_eq!(scene.series[0].points[0], (0.0, 2.0));
        assert_eq!(scene.x_bounds, (0.0, 4.0));
        assert_eq!(scene.y_bounds.0, 0.0);
        assert!(scene.y_bounds.1 > 4.0);
    }

    #[test]
    fn filled_histogram_draws_bars() {
        let h = Histogram1D::new("h", 4, 0.0, 4.0).unwrap();
        let mut region = Region::new();
        let mut style = PlotterStyle::default();
        style.data.fill.set_visible(true);
        region.plot_with_style(&h, &style, "").unwrap();
        let scene = scene(&region);
        assert_eq!(scene.series[0].graph_type, GraphType::Bar);
        assert_eq!(scene.series[0].points[0], (0.5, 0.0));
    }

    #[test]
    fn line_thickness_reaches_the_chart() {
        let mut h = Histogram1D::new("h", 2, 0.0, 2.0).unwrap();
        h.fill(0.5, 1.0);
        let mut region = Region::new();
        let mut style = PlotterStyle::default();
        style
            .set_parameter("dataStyle.lineStyle.thickness", "3")
            .unwrap();
        region.plot_with_style(&h, &style, "").unwrap();
        assert_eq!(scene(&region).series[0].marker, Marker::Block);

        style
            .set_parameter("dataStyle.lineStyle.thickness", "0")
            .unwrap();
        region.plot_with_style(&h, &style, "").unwrap();
        assert!(scene(&region).series.is_empty());
    }

    #[test]
    fn function_is_sampled_across_the_x_range() {
        let mut region = Region::new();
        region.set_parameter("functionSamples", "11").unwrap();
        region.set_x_limits(1.0, 11.0).unwrap();
        region.plot(&Function::polynomial("p", &[0.0, 1.0]), "").unwrap();
        let scene = scene(&region);
        let points = &scene.series[0].points;
        assert_eq!(points.len(), 11);
        assert_eq!(points[0], (1.0, 1.0));
        assert_eq!(points[10], (11.0, 11.0));
    }

    #[test]
    fn points_get_error_bars_and_markers() {
        let mut dps = DataPointSet::new("d", 2);
        dps.add_point(&[1.0, 2.0], &[0.5, 0.5]).unwrap();
        dps.add_point(&[2.0, 3.0], &[0.0, 0.0]).unwrap();
        let mut region = Region::new();
        region.plot(&dps, "").unwrap();
        let scene = scene(&region);
        // x bar and y bar for the first point, then the markers.
        assert_eq!(scene.series.len(), 3);
        assert_eq!(scene.series[1].points, vec![(1.0, 1.5), (1.0, 2.5)]);
        assert_eq!(scene.series[2].graph_type, GraphType::Scatter);
        assert_eq!(scene.x_bounds, (0.5, 2.0));
    }

    #[test]
    fn hidden_error_bars_leave_only_markers() {
        let mut dps = DataPointSet::new("d", 1);
        dps.add_point(&[4.0], &[1.0]).unwrap();
        let mut region = Region::new();
        region
            .style()
            .data
            .set_parameter("showErrorBars", "false")
            .unwrap();
        region.plot(&dps, "").unwrap();
        let scene = scene(&region);
        assert_eq!(scene.series.len(), 1);
        assert_eq!(scene.series[0].points, vec![(0.0, 4.0)]);
    }

    #[test]
    fn log_axis_drops_non_positive_values() {
        let mut dps = DataPointSet::new("d", 2);
        dps.add_point(&[1.0, 100.0], &[]).unwrap();
        dps.add_point(&[2.0, -1.0], &[]).unwrap();
        let mut region = Region::new();
        region.set_parameter("yAxisScale", "log").unwrap();
        region.plot(&dps, "").unwrap();
        let scene = scene(&region);
        let markers = scene.series.last().unwrap();
        assert_eq!(markers.points, vec![(1.0, 2.0)]);
    }

    #[test]
    fn labels_show_data_values_on_log_axes() {
        assert_eq!(
            axis_labels((0.0, 2.0), AxisScale::Log, 3),
            vec!["1.0", "10.0", "100"]
        );
        assert_eq!(axis_labels((0.0, 1.0), AxisScale::Lin, 2), vec!["0", "1.0"]);
    }

    #[test]
    fn automatic_log_bounds_span_whole_decades() {
        let mut dps = DataPointSet::new("d", 2);
        dps.add_point(&[1.0, 0.5], &[]).unwrap();
        dps.add_point(&[2.0, 300.0], &[]).unwrap();
        let mut region = Region::new();
        region.set_parameter("yAxisScale", "log").unwrap();
        region.plot(&dps, "").unwrap();
        let scene = scene(&region);
        assert_eq!(scene.y_bounds, (-1.0, 3.0));
        assert_eq!(
            axis_labels(scene.y_bounds, AxisScale::Log, 3),
            vec!["0.10", "10.0", "1000"]
        );
        assert_eq!(axis_labels((0.0, 4.0), AxisScale::Log, 5).len(), 5);
    }

    #[test]
    fn fixed_log_limits_are_kept() {
        let mut region = Region::new();
        region.set_parameter("xAxisScale", "log").unwrap();
        region.set_x_limits(2.0, 50.0).unwrap();
        region.plot(&Function::polynomial("p", &[0.0, 1.0]), "").unwrap();
        let scene = scene(&region);
        assert!((scene.x_bounds.0 - 2f64.log10()).abs() < 1e-12);
        assert!((scene.x_bounds.1 - 50f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn empty_scene_has_unit_bounds() {
        let region = Region::new();
        let scene = scene(&region);
        assert!(scene.series.is_empty());
        assert_eq!(scene.x_bounds, (0.0, 1.0));
        assert_eq!(scene.y_bounds, (0.0, 1.0));
    }
}
