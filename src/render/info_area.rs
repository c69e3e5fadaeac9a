//! Legend, statistics and free text shown beside the plot.

use super::format::{format_count, format_stat_value};
use super::heatmap::legend_color;
use super::series::EntryColors;
use crate::analysis::{BaseHistogram, PlotObject};
use crate::region::{LegendSymbol, Region, SceneEntry};
use crate::style::{BaseStyle, LineStyle, LineType, MarkerShape, MarkerStyle, PlotterStyle};
use crate::ui::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};
use unicode_width::UnicodeWidthChar;

/// Lines of the info area, in display order: legend, statistics, user legends, user texts.
pub(crate) fn info_lines(region: &Region, colors: &ThemeColors) -> Vec<Line<'static>> {
    let params = region.parameters();
    let text_style = region.region_style().info.text.to_style(colors.fg0);
    let mut lines = Vec::new();

    if params.show_legend {
        for (index, entry) in region.entries().iter().enumerate() {
            let style = region.effective_style(entry);
            if !style.is_visible() || !style.data.is_visible() {
                continue;
            }
            let (symbol, color) = entry_symbol(entry, &style, colors, index);
            lines.push(legend_line(symbol, color, entry.legend(), text_style));
        }
    }

    if params.show_statistics {
        for entry in region.entries() {
            statistics_lines(entry, colors, text_style, &mut lines);
        }
    }

    let info = region.region_info();
    for legend in info.legends() {
        let (symbol, color) = match &legend.symbol {
            LegendSymbol::Marker(marker) => marker_symbol(marker, colors.fg0),
            LegendSymbol::Line(line) => line_symbol(line, colors.fg0),
        };
        lines.push(legend_line(symbol, color, &legend.description, text_style));
    }
    lines.extend(
        info.texts()
            .iter()
            .map(|text| Line::from(Span::styled(text.clone(), text_style))),
    );
    lines
}

/// Draw the info area, truncating lines to its width.
pub(crate) fn draw_info(
    lines: Vec<Line<'static>>,
    area: Rect,
    buf: &mut Buffer,
    colors: &ThemeColors,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2));
    let width = block.inner(area).width as usize;
    let lines: Vec<Line<'static>> = lines.into_iter().map(|l| truncate_line(l, width)).collect();
    Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(colors.bg0))
        .render(area, buf);
}

fn legend_line(symbol: &'static str, color: Color, text: &str, text_style: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(symbol, Style::default().fg(color)),
        Span::raw(" "),
        Span::styled(text.to_string(), text_style),
    ])
}

fn entry_symbol(
    entry: &SceneEntry,
    style: &PlotterStyle,
    colors: &ThemeColors,
    index: usize,
) -> (&'static str, Color) {
    let entry_colors = EntryColors::resolve(style, colors.series_color(index));
    match &entry.object {
        PlotObject::Histogram1D(_) if style.data.fill.is_visible() => ("▇", entry_colors.fill),
        PlotObject::Histogram1D(_) | PlotObject::Function(_) => {
            line_symbol(&style.data.line, entry_colors.line)
        },
        PlotObject::DataPointSet(_) => marker_symbol(&style.data.marker, entry_colors.marker),
        PlotObject::Histogram2D(_) => ("▦", legend_color(colors)),
    }
}

fn line_symbol(style: &LineStyle, fallback: Color) -> (&'static str, Color) {
    let symbol = match style.line_type.unwrap_or(LineType::Solid) {
        LineType::Solid => "─",
        LineType::Dotted => "┄",
    };
    (symbol, style.color.unwrap_or(fallback))
}

fn marker_symbol(style: &MarkerStyle, fallback: Color) -> (&'static str, Color) {
    (
        style.shape.unwrap_or(MarkerShape::Dot).symbol(),
        style.color.unwrap_or(fallback),
    )
}

fn statistics_lines(
    entry: &SceneEntry,
    colors: &ThemeColors,
    text_style: Style,
    lines: &mut Vec<Line<'static>>,
) {
    let rows: Vec<(&str, String)> = match &entry.object {
        PlotObject::Histogram1D(h) => vec![
            ("Entries", format_count(h.entries())),
            ("Mean", format_stat_value(h.mean())),
            ("Rms", format_stat_value(h.rms())),
        ],
        PlotObject::Histogram2D(h) => vec![
            ("Entries", format_count(h.entries())),
            ("MeanX", format_stat_value(h.mean_x())),
            ("MeanY", format_stat_value(h.mean_y())),
            ("RmsX", format_stat_value(h.rms_x())),
            ("RmsY", format_stat_value(h.rms_y())),
        ],
        _ => return,
    };
    lines.push(Line::from(Span::styled(
        entry.object.title().to_string(),
        Style::default().fg(colors.yellow),
    )));
    for (name, value) in rows {
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<8}", name), Style::default().fg(colors.aqua)),
            Span::styled(value, text_style),
        ]));
    }
}

/// Cut a line to `width` terminal columns.
fn truncate_line(line: Line<'static>, width: usize) -> Line<'static> {
    let mut remaining = width;
    let mut spans = Vec::with_capacity(line.spans.len());
    for span in line.spans {
        if remaining == 0 {
            break;
        }
        let mut text = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if w > remaining {
                remaining = 0;
                break;
            }
            remaining -= w;
            text.push(ch);
        }
        spans.push(Span::styled(text, span.style));
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{DataPointSet, Function, Histogram1D};
    use crate::region::PlotterRegion;
    use crate::ui::Theme;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    fn colors() -> ThemeColors {
        ThemeColors::from_theme(&Theme::GruvboxDark)
    }

    #[test]
    fn legend_lists_entries_with_symbols() {
        let mut region = Region::new();
        region.plot(&Function::gaussian("g", 1.0, 0.0, 1.0), "").unwrap();
        region.plot(&Histogram1D::new("h", 2, 0.0, 1.0).unwrap(), "legend=counts").unwrap();
        let lines = text_of(&info_lines(&region, &colors()));
        assert_eq!(lines, vec!["─ g", "─ counts"]);
    }

    #[test]
    fn statistics_follow_the_legend() {
        let mut h = Histogram1D::new("h", 2, 0.0, 2.0).unwrap();
        h.fill(0.5, 1.0);
        h.fill(1.5, 1.0);
        let mut region = Region::new();
        region.set_parameter("showLegend", "false").unwrap();
        region.set_parameter("showStatistics", "true").unwrap();
        region.plot(&h, "").unwrap();
        let lines = text_of(&info_lines(&region, &colors()));
        assert_eq!(lines[0], "h");
        assert_eq!(lines[1], " Entries 2");
        assert_eq!(lines[2], " Mean    1.0000");
    }

    #[test]
    fn user_legends_and_texts_come_last() {
        let mut region = Region::new();
        let mut dps = DataPointSet::new("pts", 1);
        dps.add_point(&[1.0], &[]).unwrap();
        region.plot(&dps, "").unwrap();
        region.info().add_legend_marker(&MarkerStyle::default(), "marker");
        region.info().add_text("note");
        let lines = text_of(&info_lines(&region, &colors()));
        assert_eq!(lines, vec!["• pts", "• marker", "note"]);
    }

    #[test]
    fn truncation_counts_terminal_columns() {
        let line = Line::from(vec![Span::raw("▇ "), Span::raw("日本語")]);
        let cut = truncate_line(line, 5);
        let text: String = cut.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "▇ 日");
    }
}
