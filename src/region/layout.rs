//! Positional customization of a region.

use crate::error::{PlotError, Result};
use ratatui::layout::Rect;

/// Default width of the info area in cells.
pub const DEFAULT_INFO_WIDTH: u16 = 26;

/// Side of the plot the info area is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoPosition {
    /// Right of the plot.
    #[default]
    Right,
    /// Left of the plot.
    Left,
}

impl InfoPosition {
    /// Parameter text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

/// Margins and info area placement, in terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotterLayout {
    /// Blank cells left of the region contents.
    pub margin_left: u16,
    /// Blank cells right of the region contents.
    pub margin_right: u16,
    /// Blank rows above the region contents.
    pub margin_top: u16,
    /// Blank rows below the region contents.
    pub margin_bottom: u16,
    /// Width of the info area.
    pub info_width: u16,
    /// Side of the info area.
    pub info_position: InfoPosition,
}

impl Default for PlotterLayout {
    fn default() -> Self {
        Self {
            margin_left: 0,
            margin_right: 0,
            margin_top: 0,
            margin_bottom: 0,
            info_width: DEFAULT_INFO_WIDTH,
            info_position: InfoPosition::Right,
        }
    }
}

const PARAMETERS: [&str; 6] = [
    "marginLeft",
    "marginRight",
    "marginTop",
    "marginBottom",
    "infoWidth",
    "infoPosition",
];

impl PlotterLayout {
    /// Restore every parameter to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set one parameter. An empty value restores its default.
    pub fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let defaults = Self::default();
        let cells = |default: u16| -> Result<u16> {
            if value.is_empty() {
                return Ok(default);
            }
            value
                .parse::<u16>()
                .map_err(|_| PlotError::invalid_value(parameter, value, "a number of cells"))
        };
        match parameter {
            "marginLeft" => self.margin_left = cells(defaults.margin_left)?,
            "marginRight" => self.margin_right = cells(defaults.margin_right)?,
            "marginTop" => self.margin_top = cells(defaults.margin_top)?,
            "marginBottom" => self.margin_bottom = cells(defaults.margin_bottom)?,
            "infoWidth" => self.info_width = cells(defaults.info_width)?,
            "infoPosition" => {
                self.info_position = match value.to_ascii_lowercase().as_str() {
                    "" => defaults.info_position,
                    "right" => InfoPosition::Right,
                    "left" => InfoPosition::Left,
                    _ => return Err(PlotError::invalid_value(parameter, value, "right or left")),
                }
            },
            _ => return Err(PlotError::unknown_parameter(parameter)),
        }
        Ok(())
    }

    /// Current value of a parameter, `None` for unknown names.
    pub fn parameter_value(&self, parameter: &str) -> Option<String> {
        let value = match parameter {
            "marginLeft" => self.margin_left.to_string(),
            "marginRight" => self.margin_right.to_string(),
            "marginTop" => self.margin_top.to_string(),
            "marginBottom" => self.margin_bottom.to_string(),
            "infoWidth" => self.info_width.to_string(),
            "infoPosition" => self.info_position.name().to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Every parameter name.
    pub fn available_parameters(&self) -> Vec<String> {
        PARAMETERS.iter().map(|p| p.to_string()).collect()
    }

    /// Accepted values of a parameter. Empty for numeric or unknown ones.
    pub fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match parameter {
            "infoPosition" => vec!["right".to_string(), "left".to_string()],
            _ => Vec::new(),
        }
    }

    /// Shrink `area` by the margins.
    pub fn inner_area(&self, area: Rect) -> Rect {
        let width = area
            .width
            .saturating_sub(self.margin_left.saturating_add(self.margin_right));
        let height = area
            .height
            .saturating_sub(self.margin_top.saturating_add(self.margin_bottom));
        Rect {
            x: area.x.saturating_add(self.margin_left.min(area.width)),
            y: area.y.saturating_add(self.margin_top.min(area.height)),
            width,
            height,
        }
    }

    /// Split `area` into the plot area and, when requested, the info area.
    ///
    /// The info area is dropped when it would leave the plot narrower than
    /// the info area itself.
    pub fn split(&self, area: Rect, with_info: bool) -> (Rect, Option<Rect>) {
        let info_width = self.info_width.min(area.width / 2);
        if !with_info || info_width == 0 {
            return (area, None);
        }
        let plot_width = area.width - info_width;
        match self.info_position {
            InfoPosition::Right => (
                Rect { width: plot_width, ..area },
                Some(Rect {
                    x: area.x + plot_width,
                    width: info_width,
                    ..area
                }),
            ),
            InfoPosition::Left => (
                Rect {
                    x: area.x + info_width,
                    width: plot_width,
                    ..area
                },
                Some(Rect { width: info_width, ..area }),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameters_round_trip_and_reset() {
        let mut layout = PlotterLayout::default();
        layout.set_parameter("marginLeft", "3").unwrap();
        layout.set_parameter("infoPosition", "left").unwrap();
        assert_eq!(layout.parameter_value("marginLeft").as_deref(), Some("3"));
        assert_eq!(layout.parameter_value("infoPosition").as_deref(), Some("left"));
        layout.set_parameter("marginLeft", "").unwrap();
        assert_eq!(layout.margin_left, 0);
        layout.reset();
        assert_eq!(layout, PlotterLayout::default());
    }

    #[test]
    fn rejects_negative_cells() {
        let mut layout = PlotterLayout::default();
        assert!(layout.set_parameter("infoWidth", "-4").is_err());
        assert!(layout.set_parameter("infoPosition", "top").is_err());
        assert!(layout.set_parameter("padding", "1").is_err());
        assert_eq!(layout, PlotterLayout::default());
    }

    #[test]
    fn margins_shrink_the_area() {
        let layout = PlotterLayout {
            margin_left: 2,
            margin_top: 1,
            margin_bottom: 1,
            ..Default::default()
        };
        let inner = layout.inner_area(Rect::new(0, 0, 40, 10));
        assert_eq!(inner, Rect::new(2, 1, 38, 8));
    }

    #[test]
    fn split_places_info_on_requested_side() {
        let mut layout = PlotterLayout::default();
        let area = Rect::new(0, 0, 80, 20);
        let (plot, info) = layout.split(area, true);
        assert_eq!(plot.width, 80 - DEFAULT_INFO_WIDTH);
        assert_eq!(info.unwrap().x, plot.width);

        layout.info_position = InfoPosition::Left;
        let (plot, info) = layout.split(area, true);
        assert_eq!(info.unwrap().x, 0);
        assert_eq!(plot.x, DEFAULT_INFO_WIDTH);

        let (plot, info) = layout.split(area, false);
        assert_eq!(plot, area);
        assert!(info.is_none());
    }
}
