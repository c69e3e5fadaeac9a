//! Rendering configuration constants.

/// Configuration for 1D chart layout.
#[derive(Debug, Clone)]
pub struct ChartConfig {
    /// Padding factor for automatic y ranges (0.1 = 10% margin).
    pub y_padding_factor: f64,
    /// X range used when nothing in the scene has an extent.
    pub default_x_range: (f64, f64),
    /// Number of tick labels per axis.
    pub axis_labels: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            y_padding_factor: 0.1,
            default_x_range: (0.0, 1.0),
            axis_labels: 3,
        }
    }
}

/// Configuration for heatmap layout.
#[derive(Debug, Clone)]
pub struct HeatmapConfig {
    /// Terminal characters per bin horizontally (for aspect ratio correction).
    pub pixel_width: usize,
    /// Width of colorbar in characters.
    pub colorbar_width: usize,
    /// Width reserved for y labels.
    pub label_width: u16,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            pixel_width: 2, // 2:1 aspect ratio correction
            colorbar_width: 40,
            label_width: 8,
        }
    }
}

/// Combined rendering configuration.
#[derive(Debug, Clone, Default)]
pub struct PlotConfig {
    /// 1D charts.
    pub chart: ChartConfig,
    /// 2D heatmaps.
    pub heatmap: HeatmapConfig,
}
