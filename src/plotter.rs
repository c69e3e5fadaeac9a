//! A titled canvas holding a set of regions.

use crate::config::PlotConfig;
use crate::error::{PlotError, Result};
use crate::region::{PlotterRegion, Region};
use crate::render::draw_region;
use crate::ui::ThemeColors;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Widget};

/// Fractional placement of a region on the canvas, all values in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Placement {
    /// The whole canvas.
    pub const FULL: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 1.0,
        height: 1.0,
    };

    /// Checked placement.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        const SLACK: f64 = 1e-9;
        let finite = [x, y, width, height].iter().all(|v| v.is_finite());
        if !finite
            || x < 0.0
            || y < 0.0
            || width <= 0.0
            || height <= 0.0
            || x + width > 1.0 + SLACK
            || y + height > 1.0 + SLACK
        {
            return Err(PlotError::InvalidPlacement {
                x,
                y,
                w: width,
                h: height,
            });
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    /// Cells covered inside `area`.
    pub fn to_rect(self, area: Rect) -> Rect {
        let edge = |origin: u16, span: u16, t: f64| {
            origin + ((t * span as f64).round() as u16).min(span)
        };
        let left = edge(area.x, area.width, self.x);
        let right = edge(area.x, area.width, self.x + self.width);
        let top = edge(area.y, area.height, self.y);
        let bottom = edge(area.y, area.height, self.y + self.height);
        Rect::new(left, top, right - left, bottom - top)
    }
}

/// A plotter: a title plus regions laid out on one canvas.
#[derive(Debug, Clone)]
pub struct Plotter {
    title: String,
    regions: Vec<(Placement, Region)>,
    current: usize,
    config: PlotConfig,
}

impl Plotter {
    /// A plotter with a single region covering the canvas.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            regions: vec![(Placement::FULL, Region::new())],
            current: 0,
            config: PlotConfig::default(),
        }
    }

    /// Plotter title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the plotter title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Rendering configuration.
    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    /// Replace all regions with a `columns` x `rows` grid, filled row by row.
    pub fn create_regions(&mut self, columns: usize, rows: usize) -> Result<()> {
        if columns == 0 || rows == 0 {
            tracing::warn!("Rejected region grid {}x{}", columns, rows);
            return Err(PlotError::InvalidGrid { columns, rows });
        }
        let (w, h) = (1.0 / columns as f64, 1.0 / rows as f64);
        self.regions = (0..rows)
            .flat_map(|row| (0..columns).map(move |col| (col, row)))
            .map(|(col, row)| {
                let placement = Placement {
                    x: col as f64 * w,
                    y: row as f64 * h,
                    width: w,
                    height: h,
                };
                (placement, Region::new())
            })
            .collect();
        self.current = 0;
        tracing::debug!("Created {}x{} regions", columns, rows);
        Ok(())
    }

    /// Add a region at a fractional placement and return its index.
    pub fn create_region(&mut self, x: f64, y: f64, width: f64, height: f64) -> Result<usize> {
        let placement = Placement::new(x, y, width, height)?;
        self.regions.push((placement, Region::new()));
        Ok(self.regions.len() - 1)
    }

    /// Region at `index`.
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index).map(|(_, r)| r)
    }

    /// Mutable region at `index`.
    pub fn region_mut(&mut self, index: usize) -> Option<&mut Region> {
        self.regions.get_mut(index).map(|(_, r)| r)
    }

    /// Placement of the region at `index`.
    pub fn placement(&self, index: usize) -> Option<Placement> {
        self.regions.get(index).map(|(p, _)| *p)
    }

    /// Index of the current region.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The region plotting goes to.
    pub fn current_region(&self) -> &Region {
        &self.regions[self.current].1
    }

    /// Mutable current region.
    pub fn current_region_mut(&mut self) -> &mut Region {
        &mut self.regions[self.current].1
    }

    /// Make region `index` current.
    pub fn set_current_region(&mut self, index: usize) -> Result<()> {
        if index >= self.regions.len() {
            return Err(PlotError::RegionOutOfRange {
                index,
                count: self.regions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Advance the current region, wrapping to the first.
    pub fn next_region(&mut self) -> usize {
        self.current = (self.current + 1) % self.regions.len();
        self.current
    }

    /// Number of regions.
    pub fn number_of_regions(&self) -> usize {
        self.regions.len()
    }

    /// Remove the content of every region.
    pub fn clear_regions(&mut self) {
        for (_, region) in &mut self.regions {
            region.clear();
        }
    }

    /// Draw the title and every region.
    pub fn draw(&self, area: Rect, buf: &mut Buffer, colors: &ThemeColors) {
        let mut canvas = area;
        if !self.title.is_empty() && area.height > 1 {
            let title_area = Rect { height: 1, ..area };
            Paragraph::new(self.title.as_str())
                .style(
                    Style::default()
                        .fg(colors.yellow)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .render(title_area, buf);
            canvas = Rect {
                y: area.y + 1,
                height: area.height - 1,
                ..area
            };
        }
        for (placement, region) in &self.regions {
            draw_region(region, placement.to_rect(canvas), buf, colors, &self.config);
        }
    }
}

impl Default for Plotter {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Histogram1D;
    use crate::render::buffer_to_string;
    use crate::ui::Theme;

    #[test]
    fn starts_with_one_full_region() {
        let plotter = Plotter::new("p");
        assert_eq!(plotter.number_of_regions(), 1);
        assert_eq!(plotter.placement(0), Some(Placement::FULL));
    }

    #[test]
    fn grid_is_filled_row_by_row() {
        let mut plotter = Plotter::new("p");
        plotter.create_regions(2, 3).unwrap();
        assert_eq!(plotter.number_of_regions(), 6);
        let third = plotter.placement(2).unwrap();
        assert_eq!((third.x, third.width), (0.0, 0.5));
        assert!((third.y - 1.0 / 3.0).abs() < 1e-12);
        assert!(matches!(
            plotter.create_regions(0, 2),
            Err(PlotError::InvalidGrid { columns: 0, rows: 2 })
        ));
        assert_eq!(plotter.number_of_regions(), 6);
    }

    #[test]
    fn placements_are_checked() {
        let mut plotter = Plotter::new("p");
        assert_eq!(plotter.create_region(0.5, 0.5, 0.5, 0.5).unwrap(), 1);
        assert!(plotter.create_region(0.6, 0.0, 0.5, 1.0).is_err());
        assert!(plotter.create_region(0.0, 0.0, 0.0, 1.0).is_err());
        assert!(plotter.create_region(f64::NAN, 0.0, 0.5, 0.5).is_err());
        assert_eq!(plotter.number_of_regions(), 2);
    }

    #[test]
    fn placement_maps_to_cells() {
        let rect = Placement::new(0.5, 0.0, 0.5, 0.5)
            .unwrap()
            .to_rect(Rect::new(0, 1, 80, 20));
        assert_eq!(rect, Rect::new(40, 1, 40, 10));
    }

    #[test]
    fn current_region_moves_and_wraps() {
        let mut plotter = Plotter::new("p");
        plotter.create_regions(3, 1).unwrap();
        assert_eq!(plotter.next_region(), 1);
        plotter.set_current_region(2).unwrap();
        assert_eq!(plotter.next_region(), 0);
        assert!(matches!(
            plotter.set_current_region(3),
            Err(PlotError::RegionOutOfRange { index: 3, count: 3 })
        ));
        assert_eq!(plotter.current_index(), 0);
    }

    #[test]
    fn clear_regions_keeps_the_grid() {
        let mut plotter = Plotter::new("p");
        plotter.create_regions(2, 1).unwrap();
        let h = Histogram1D::new("h", 2, 0.0, 1.0).unwrap();
        plotter.current_region_mut().plot(&h, "").unwrap();
        plotter.clear_regions();
        assert_eq!(plotter.number_of_regions(), 2);
        assert!(plotter.current_region().is_empty());
    }

    #[test]
    fn draw_puts_title_on_first_row() {
        let plotter = Plotter::new("Canvas");
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        plotter.draw(area, &mut buf, &ThemeColors::from_theme(&Theme::default()));
        let text = buffer_to_string(&buf);
        assert!(text.lines().next().unwrap().contains("Canvas"));
    }
}
