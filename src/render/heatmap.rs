//! Two-dimensional histograms drawn as a heatmap with a colorbar.

use super::format::format_axis_label;
use crate::analysis::{Histogram2D, PlotObject};
use crate::config::HeatmapConfig;
use crate::region::Region;
use crate::style::{BaseStyle, PlotterStyle};
use crate::ui::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

/// Draw the 2D histogram of `region` into `area`.
pub(crate) fn draw_heatmap(
    region: &Region,
    area: Rect,
    buf: &mut Buffer,
    colors: &ThemeColors,
    config: &HeatmapConfig,
) {
    let Some((hist, style)) = region.entries().iter().find_map(|entry| match &entry.object {
        PlotObject::Histogram2D(h) => Some((h, region.effective_style(entry))),
        _ => None,
    }) else {
        return;
    };
    if !style.is_visible() || !style.data.is_visible() {
        return;
    }
    if area.width < 4 || area.height < 4 {
        return;
    }

    let (z_min, z_max) = z_range(region, hist);
    let mut range = z_max - z_min;
    if range.abs() < 1e-10 {
        range = 1.0;
    }

    // Colorbar on top, x labels below, y labels on the left.
    let show_colorbar = style.z_axis.is_visible();
    let top = u16::from(show_colorbar);
    let bottom = u16::from(style.x_axis.is_visible());
    let left = if style.y_axis.is_visible() {
        config.label_width.min(area.width / 2)
    } else {
        0
    };

    let map_area = Rect {
        x: area.x + left,
        y: area.y + top,
        width: area.width.saturating_sub(left),
        height: area.height.saturating_sub(top + bottom),
    };

    if show_colorbar {
        draw_colorbar(area, map_area, buf, (z_min, z_max), colors, config, &style);
    }

    let x_bins = hist.x_axis().bins();
    let y_bins = hist.y_axis().bins();
    let pixel_width = config.pixel_width.max(1);
    let max_cols = map_area.width as usize / pixel_width;
    let max_rows = map_area.height as usize;
    if max_cols == 0 || max_rows == 0 {
        return;
    }
    let disp_cols = x_bins.min(max_cols).max(1);
    let disp_rows = y_bins.min(max_rows).max(1);
    let col_step = x_bins as f64 / disp_cols as f64;
    let row_step = y_bins as f64 / disp_rows as f64;

    let offset_x = ((max_cols - disp_cols) * pixel_width / 2) as u16;
    let offset_y = ((max_rows - disp_rows) / 2) as u16;
    let map_x = map_area.x + offset_x;
    let map_y = map_area.y + offset_y;

    // Screen rows run top-down, y bins bottom-up.
    let bin_of_row = |row: usize| {
        let from_bottom = disp_rows - 1 - row;
        ((from_bottom as f64 * row_step).floor() as usize).min(y_bins - 1)
    };
    let bin_of_col = |col: usize| ((col as f64 * col_step).floor() as usize).min(x_bins - 1);

    for row in 0..disp_rows {
        let iy = bin_of_row(row);
        for col in 0..disp_cols {
            let ix = bin_of_col(col);
            let empty = hist.bin_entries(ix, iy) == 0;
            let value = hist.bin_height(ix, iy);
            let (symbol, color) = if empty || !value.is_finite() {
                ('·', colors.gray)
            } else {
                ('█', colors.palette.color((value - z_min) / range))
            };
            for i in 0..pixel_width {
                let x = map_x + (col * pixel_width + i) as u16;
                let y = map_y + row as u16;
                if x >= map_area.right() || y >= map_area.bottom() {
                    break;
                }
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char(symbol).set_fg(color);
                }
            }
        }
    }

    if left > 0 {
        let label_style = style.y_axis.tick_labels.to_style(colors.green);
        for row in [0, disp_rows / 2, disp_rows - 1] {
            let label = format_axis_label(hist.y_axis().bin_center(bin_of_row(row)));
            let label: String = label.chars().take(left as usize - 1).collect();
            let x = map_x.saturating_sub(label.chars().count() as u16 + 1).max(area.x);
            put_text(buf, x, map_y + row as u16, &label, label_style, map_x);
        }
    }

    let label_y = map_y + disp_rows as u16;
    if bottom > 0 && label_y < area.bottom() {
        let label_style = style.x_axis.tick_labels.to_style(colors.green);
        for col in [0, disp_cols / 2, disp_cols - 1] {
            let label = format_axis_label(hist.x_axis().bin_center(bin_of_col(col)));
            let x = map_x + (col * pixel_width) as u16;
            put_text(buf, x, label_y, &label, label_style, area.right());
        }
    }
}

/// Z range from the region limits, or the bin heights of non-empty bins.
pub(crate) fn z_range(region: &Region, hist: &Histogram2D) -> (f64, f64) {
    if let Some(range) = region.z_limits().range() {
        return range;
    }
    let (x_bins, y_bins) = (hist.x_axis().bins(), hist.y_axis().bins());
    let (lo, hi) = (0..x_bins)
        .flat_map(|ix| (0..y_bins).map(move |iy| (ix, iy)))
        .filter(|&(ix, iy)| hist.bin_entries(ix, iy) > 0)
        .map(|(ix, iy)| hist.bin_height(ix, iy))
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    if lo.is_finite() && hi.is_finite() {
        (lo, hi)
    } else {
        (0.0, 1.0)
    }
}

fn draw_colorbar(
    area: Rect,
    map_area: Rect,
    buf: &mut Buffer,
    (z_min, z_max): (f64, f64),
    colors: &ThemeColors,
    config: &HeatmapConfig,
    style: &PlotterStyle,
) {
    let min_label = format_axis_label(z_min);
    let max_label = format_axis_label(z_max);
    let labels_width = min_label.len() + max_label.len() + 2;
    let width = config
        .colorbar_width
        .min((map_area.width as usize).saturating_sub(labels_width));
    if width == 0 {
        return;
    }
    let start = map_area.x + ((map_area.width as usize - width) / 2) as u16;

    for i in 0..width {
        let t = i as f64 / width as f64;
        if let Some(cell) = buf.cell_mut((start + i as u16, area.y)) {
            cell.set_char('█').set_fg(colors.palette.color(t));
        }
    }

    let label_style = style.z_axis.tick_labels.to_style(colors.green);
    let min_x = start.saturating_sub(min_label.len() as u16 + 1);
    put_text(buf, min_x, area.y, &min_label, label_style, start);
    let max_x = start + width as u16 + 1;
    put_text(buf, max_x, area.y, &max_label, label_style, area.right());
}

/// Write `text` at `(x, y)`, stopping before column `limit`.
fn put_text(buf: &mut Buffer, x: u16, y: u16, text: &str, style: Style, limit: u16) {
    for (i, ch) in text.chars().enumerate() {
        let cx = x + i as u16;
        if cx >= limit {
            break;
        }
        if let Some(cell) = buf.cell_mut((cx, y)) {
            cell.set_char(ch).set_style(style);
        }
    }
}

/// Color used for 2D entries in legends.
pub(crate) fn legend_color(colors: &ThemeColors) -> Color {
    colors.palette.color(0.8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Histogram2D;
    use crate::region::PlotterRegion;

    fn hist() -> Histogram2D {
        let mut h = Histogram2D::new("h2", 2, 0.0, 2.0, 2, 0.0, 2.0).unwrap();
        h.fill(0.5, 0.5, 1.0);
        h.fill(1.5, 1.5, 5.0);
        h
    }

    #[test]
    fn z_range_skips_empty_bins() {
        let h = hist();
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        assert_eq!(z_range(&region, &h), (1.0, 5.0));
    }

    #[test]
    fn z_limits_override_the_range() {
        let h = hist();
        let mut region = Region::new();
        region.set_z_limits(0.0, 10.0).unwrap();
        region.plot(&h, "").unwrap();
        assert_eq!(z_range(&region, &h), (0.0, 10.0));
    }

    #[test]
    fn empty_bins_are_dotted() {
        let h = hist();
        let mut region = Region::new();
        region.plot(&h, "").unwrap();
        let area = Rect::new(0, 0, 30, 8);
        let mut buf = Buffer::empty(area);
        let colors = ThemeColors::from_theme(&crate::ui::Theme::GruvboxDark);
        draw_heatmap(&region, area, &mut buf, &colors, &HeatmapConfig::default());
        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains('█'));
        assert!(text.contains('·'));
    }
}
