//! Application state and logic.

use crate::clipboard::{copy_to_clipboard, region_to_tsv};
use crate::plotter::Plotter;
use crate::region::PlotterRegion;
use crate::ui::{ColorPalette, Theme, ThemeColors};

/// Application state.
#[derive(Debug)]
pub struct App {
    /// Plotter being shown.
    pub plotter: Plotter,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Heatmap colormap.
    pub palette: ColorPalette,
}

impl App {
    /// Create a new application instance.
    pub fn new(plotter: Plotter, theme: Theme) -> Self {
        let regions = plotter.number_of_regions();
        Self {
            plotter,
            status: format!("{} region{}", regions, if regions == 1 { "" } else { "s" }),
            theme,
            palette: ColorPalette::default(),
        }
    }

    /// Colors for the current theme and palette.
    pub fn colors(&self) -> ThemeColors {
        ThemeColors::from_theme(&self.theme).with_palette(self.palette)
    }

    /// Move to the next region.
    pub fn next_region(&mut self) {
        let index = self.plotter.next_region();
        self.status = format!(
            "Region {}/{}",
            index + 1,
            self.plotter.number_of_regions()
        );
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Cycle the heatmap colormap.
    pub fn cycle_palette(&mut self) {
        self.palette = self.palette.next();
        self.status = format!("Palette: {}", self.palette.name());
    }

    /// Flip a boolean parameter of the current region.
    pub fn toggle_parameter(&mut self, parameter: &str) {
        let region = self.plotter.current_region_mut();
        let on = region.parameter_value(parameter).as_deref() == Some("true");
        let value = if on { "false" } else { "true" };
        self.status = match region.set_parameter(parameter, value) {
            Ok(()) => format!("{}: {}", parameter, if on { "OFF" } else { "ON" }),
            Err(e) => e.to_string(),
        };
    }

    /// Copy the current region's data to the clipboard.
    pub fn copy_region(&mut self) {
        let tsv = region_to_tsv(self.plotter.current_region());
        if tsv.is_empty() {
            self.status = "Nothing to copy".to_string();
            return;
        }
        self.status = match copy_to_clipboard(&tsv) {
            Ok(()) => "Region data copied!".to_string(),
            Err(e) => format!("Copy failed: {}", e),
        };
    }

    /// Remove everything from the current region.
    pub fn clear_region(&mut self) {
        self.plotter.current_region_mut().clear();
        self.status = format!("Region {} cleared", self.plotter.current_index() + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Histogram1D;

    fn app() -> App {
        let mut plotter = Plotter::new("t");
        plotter.create_regions(2, 1).unwrap();
        App::new(plotter, Theme::default())
    }

    #[test]
    fn toggles_region_parameters() {
        let mut app = app();
        app.toggle_parameter("showStatistics");
        assert!(app.plotter.current_region().parameters().show_statistics);
        assert_eq!(app.status, "showStatistics: ON");
        app.toggle_parameter("showStatistics");
        assert!(!app.plotter.current_region().parameters().show_statistics);
    }

    #[test]
    fn unknown_parameter_lands_in_status() {
        let mut app = app();
        app.toggle_parameter("bogus");
        assert!(app.status.contains("bogus"));
    }

    #[test]
    fn clears_only_the_current_region() {
        let mut app = app();
        let h = Histogram1D::new("h", 2, 0.0, 1.0).unwrap();
        app.plotter.region_mut(0).unwrap().plot(&h, "").unwrap();
        app.plotter.region_mut(1).unwrap().plot(&h, "").unwrap();
        app.next_region();
        app.clear_region();
        assert!(!app.plotter.region(0).unwrap().is_empty());
        assert!(app.plotter.region(1).unwrap().is_empty());
        assert_eq!(app.status, "Region 2 cleared");
    }

    #[test]
    fn cycles_theme_and_palette() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme, Theme::GruvboxLight);
        app.cycle_palette();
        assert_eq!(app.colors().palette, ColorPalette::Plasma);
    }
}
