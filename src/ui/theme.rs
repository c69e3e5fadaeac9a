//! Color themes for the UI.

use super::ColorPalette;
use ratatui::style::Color;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Gruvbox dark theme.
    #[default]
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Theme color palette.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    /// Background color.
    pub bg0: Color,
    /// Status bar background.
    pub bg1: Color,
    /// Border color.
    pub bg2: Color,
    /// Primary text color.
    pub fg0: Color,
    /// Titles and highlights.
    pub yellow: Color,
    /// Axis labels.
    pub green: Color,
    /// Secondary labels.
    pub aqua: Color,
    /// Missing data.
    pub gray: Color,
    /// Default colors for plotted objects, cycled in plot order.
    pub series: [Color; 6],
    /// Colormap for 2D plots.
    pub palette: ColorPalette,
}

impl ThemeColors {
    /// Create color palette from theme.
    pub fn from_theme(theme: &Theme) -> Self {
        match theme {
            Theme::GruvboxDark => Self {
                bg0: Color::Rgb(40, 40, 40),
                bg1: Color::Rgb(60, 56, 54),
                bg2: Color::Rgb(102, 92, 84),
                fg0: Color::Rgb(235, 219, 178),
                yellow: Color::Rgb(250, 189, 47),
                green: Color::Rgb(184, 187, 38),
                aqua: Color::Rgb(142, 192, 124),
                gray: Color::Rgb(146, 131, 116),
                series: [
                    Color::Rgb(131, 165, 152),
                    Color::Rgb(251, 73, 52),
                    Color::Rgb(184, 187, 38),
                    Color::Rgb(211, 134, 155),
                    Color::Rgb(254, 128, 25),
                    Color::Rgb(142, 192, 124),
                ],
                palette: ColorPalette::default(),
            },
            Theme::GruvboxLight => Self {
                bg0: Color::Rgb(251, 245, 234),
                bg1: Color::Rgb(235, 219, 178),
                bg2: Color::Rgb(213, 196, 161),
                fg0: Color::Rgb(60, 56, 54),
                yellow: Color::Rgb(181, 118, 20),
                green: Color::Rgb(121, 116, 14),
                aqua: Color::Rgb(66, 123, 88),
                gray: Color::Rgb(124, 111, 100),
                series: [
                    Color::Rgb(7, 102, 120),
                    Color::Rgb(157, 0, 6),
                    Color::Rgb(121, 116, 14),
                    Color::Rgb(143, 63, 113),
                    Color::Rgb(175, 58, 3),
                    Color::Rgb(66, 123, 88),
                ],
                palette: ColorPalette::default(),
            },
        }
    }

    /// Use another colormap.
    pub fn with_palette(mut self, palette: ColorPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Default color of the `index`-th plotted object.
    pub fn series_color(&self, index: usize) -> Color {
        self.series[index % self.series.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle() {
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(colors.series_color(0), colors.series_color(6));
        assert_ne!(colors.series_color(0), colors.series_color(1));
    }

    #[test]
    fn themes_cycle() {
        assert_eq!(Theme::GruvboxDark.next().next(), Theme::GruvboxDark);
    }
}
