//! Bin-content colormaps for 2D histogram heatmaps.

use ratatui::style::Color;

/// Colormap used for heatmaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorPalette {
    /// Dark purple through teal to yellow.
    #[default]
    Viridis,
    /// Deep blue through magenta to orange.
    Plasma,
    /// Hue sweep from blue to red.
    Rainbow,
    /// Diverging: blue, white at the midpoint, red.
    BlueRed,
}

impl ColorPalette {
    /// Palette selected by the next `p` press.
    pub fn next(self) -> Self {
        match self {
            Self::Viridis => Self::Plasma,
            Self::Plasma => Self::Rainbow,
            Self::Rainbow => Self::BlueRed,
            Self::BlueRed => Self::Viridis,
        }
    }

    /// Name shown in the status line.
    pub fn name(self) -> &'static str {
        match self {
            Self::Viridis => "Viridis",
            Self::Plasma => "Plasma",
            Self::Rainbow => "Rainbow",
            Self::BlueRed => "Blue-Red",
        }
    }

    /// Color of a bin whose content sits at fraction `t` of the z range.
    pub fn color(self, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Viridis => two_segment(t, (68.0, 1.0, 84.0), (33.0, 104.0, 109.0), (253.0, 231.0, 37.0)),
            Self::Plasma => two_segment(t, (13.0, 8.0, 135.0), (180.0, 54.0, 121.0), (240.0, 175.0, 12.0)),
            Self::Rainbow => rainbow_color(t),
            Self::BlueRed => bluered_color(t),
        }
    }
}

/// Piecewise linear interpolation through three anchor colors.
fn two_segment(t: f64, start: (f64, f64, f64), mid: (f64, f64, f64), end: (f64, f64, f64)) -> Color {
    let (from, to, s) = if t < 0.5 {
        (start, mid, t * 2.0)
    } else {
        (mid, end, (t - 0.5) * 2.0)
    };
    let lerp = |a: f64, b: f64| (a + s * (b - a)) as u8;
    Color::Rgb(lerp(from.0, to.0), lerp(from.1, to.1), lerp(from.2, to.2))
}

/// Hue 240 (blue) down to hue 0 (red) at full saturation.
fn rainbow_color(t: f64) -> Color {
    let h = (1.0 - t) * 240.0;
    let c = 1.0;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else {
        (0.0, x, c)
    };

    Color::Rgb((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
}

/// Two linear ramps meeting at white.
fn bluered_color(t: f64) -> Color {
    if t < 0.5 {
        let v = (t * 2.0 * 255.0) as u8;
        Color::Rgb(v, v, 255)
    } else {
        let v = ((1.0 - (t - 0.5) * 2.0) * 255.0) as u8;
        Color::Rgb(255, v, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_match_anchor_colors() {
        assert_eq!(ColorPalette::Viridis.color(0.0), Color::Rgb(68, 1, 84));
        assert_eq!(ColorPalette::Viridis.color(1.0), Color::Rgb(253, 231, 37));
        assert_eq!(ColorPalette::BlueRed.color(0.0), Color::Rgb(0, 0, 255));
        assert_eq!(ColorPalette::BlueRed.color(1.0), Color::Rgb(255, 0, 0));
    }

    #[test]
    fn clamps_out_of_range_values() {
        assert_eq!(ColorPalette::Plasma.color(-3.0), ColorPalette::Plasma.color(0.0));
        assert_eq!(ColorPalette::Rainbow.color(7.0), ColorPalette::Rainbow.color(1.0));
    }

    #[test]
    fn palettes_cycle() {
        let mut p = ColorPalette::default();
        for _ in 0..4 {
            p = p.next();
        }
        assert_eq!(p, ColorPalette::Viridis);
    }
}
