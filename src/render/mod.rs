//! Terminal rendering of plotter regions.
//!
//! One-dimensional scenes become a ratatui [`Chart`](ratatui::widgets::Chart),
//! two-dimensional scenes a heatmap. The info area with legend, statistics
//! and user text sits beside the plot as placed by the region layout.

mod chart;
mod format;
mod heatmap;
mod info_area;
mod series;

pub use format::{format_axis_label, format_count, format_stat_value};

use crate::config::PlotConfig;
use crate::region::Region;
use crate::style::BaseStyle;
use crate::ui::{Theme, ThemeColors};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Draw one region into `area`.
pub fn draw_region(
    region: &Region,
    area: Rect,
    buf: &mut Buffer,
    colors: &ThemeColors,
    config: &PlotConfig,
) {
    let layout = region.region_layout();
    let style = region.region_style();
    let params = region.parameters();
    let outer = layout.inner_area(area);
    if outer.width < 3 || outer.height < 3 {
        return;
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.bg2))
        .style(Style::default().bg(colors.bg0));
    if params.show_title && style.title.is_visible() && !region.title().is_empty() {
        block = block
            .title(format!(" {} ", region.title()))
            .title_style(style.title.text.to_style(colors.yellow));
    }
    let inner = block.inner(outer);
    block.render(outer, buf);

    let info = if params.show_info && style.info.is_visible() {
        info_area::info_lines(region, colors)
    } else {
        Vec::new()
    };
    let (plot_area, info_area) = layout.split(inner, !info.is_empty());
    if let Some(info_area) = info_area {
        info_area::draw_info(info, info_area, buf, colors);
    }

    if region.is_empty() || !style.is_visible() {
        let message = if region.is_empty() {
            "No objects plotted"
        } else {
            ""
        };
        let top = plot_area.height / 2;
        let message_area = Rect {
            y: plot_area.y + top,
            height: plot_area.height - top,
            ..plot_area
        };
        Paragraph::new(message)
            .style(Style::default().fg(colors.gray))
            .alignment(Alignment::Center)
            .render(message_area, buf);
        return;
    }

    match region.scene_dimension() {
        Some(2) => heatmap::draw_heatmap(region, plot_area, buf, colors, &config.heatmap),
        _ => chart::draw_chart(region, plot_area, buf, colors, &config.chart),
    }
}

/// Render a region off-screen and return the text of the buffer.
pub fn render_to_string(region: &Region, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    let colors = ThemeColors::from_theme(&Theme::default());
    draw_region(region, area, &mut buf, &colors, &PlotConfig::default());
    buffer_to_string(&buf)
}

/// Rows of cell symbols, trailing spaces trimmed.
pub fn buffer_to_string(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut row = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                row.push_str(cell.symbol());
            }
        }
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Function, Histogram1D, Histogram2D};
    use crate::region::PlotterRegion;

    #[test]
    fn empty_region_says_so() {
        let mut region = Region::new();
        region.set_title("Empty");
        let out = render_to_string(&region, 40, 10);
        assert!(out.contains("Empty"));
        assert!(out.contains("No objects plotted"));
    }

    #[test]
    fn title_can_be_hidden() {
        let mut region = Region::new();
        region.set_title("Hidden");
        region.set_parameter("showTitle", "false").unwrap();
        assert!(!render_to_string(&region, 40, 10).contains("Hidden"));
        region.set_parameter("showTitle", "true").unwrap();
        region.style().title.set_visible(false);
        assert!(!render_to_string(&region, 40, 10).contains("Hidden"));
    }

    #[test]
    fn chart_shows_legend_and_axis_labels() {
        let mut h = Histogram1D::new("energy", 10, 0.0, 10.0).unwrap();
        for i in 0..10 {
            h.fill(i as f64 + 0.5, (i + 1) as f64);
        }
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        region.style().x_axis.set_label("GeV");
        let out = render_to_string(&region, 80, 20);
        assert!(out.contains("energy"));
        assert!(out.contains("GeV"));
        assert!(out.contains("10.0"));
    }

    #[test]
    fn info_area_can_be_turned_off() {
        let mut region = Region::new();
        region
            .plot(&Function::gaussian("bell", 1.0, 0.0, 1.0), "")
            .unwrap();
        assert!(render_to_string(&region, 80, 20).contains("bell"));
        region.set_parameter("showInfo", "false").unwrap();
        assert!(!render_to_string(&region, 80, 20).contains("bell"));
    }

    #[test]
    fn heatmap_scene_draws_cells() {
        let mut h = Histogram2D::new("map", 4, 0.0, 4.0, 4, 0.0, 4.0).unwrap();
        h.fill(1.5, 2.5, 3.0);
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        let out = render_to_string(&region, 60, 16);
        assert!(out.contains('█'));
        assert!(out.contains("map"));
    }

    #[test]
    fn tiny_areas_do_not_panic() {
        let mut region = Region::new();
        region
            .plot(&Histogram1D::new("h", 3, 0.0, 1.0).unwrap(), "")
            .unwrap();
        for (w, h) in [(0, 0), (1, 1), (3, 3), (5, 4)] {
            render_to_string(&region, w, h);
        }
    }
}
