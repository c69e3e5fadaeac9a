//! Region-level plotting parameters.

use crate::error::{PlotError, Result};
use crate::style::{parse_bool, BOOL_OPTIONS};

/// Default number of samples taken when drawing a function.
pub const DEFAULT_FUNCTION_SAMPLES: usize = 200;
/// Largest accepted `functionSamples` value.
pub const MAX_FUNCTION_SAMPLES: usize = 10_000;

/// Mapping of data values onto an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisScale {
    /// Linear.
    #[default]
    Lin,
    /// Base-10 logarithmic.
    Log,
}

impl AxisScale {
    const OPTIONS: [&'static str; 2] = ["lin", "log"];

    /// Parameter text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Lin => "lin",
            Self::Log => "log",
        }
    }

    fn parse(name: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "lin" | "linear" => Ok(Self::Lin),
            "log" => Ok(Self::Log),
            _ => Err(PlotError::invalid_value(name, value, "lin or log")),
        }
    }
}

/// Every parameter a region accepts, in display order.
pub const PARAMETER_NAMES: [&str; 7] = [
    "showTitle",
    "showLegend",
    "showStatistics",
    "showInfo",
    "xAxisScale",
    "yAxisScale",
    "functionSamples",
];

/// Typed view of the region parameter table.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionParameters {
    /// Draw the title in the region border.
    pub show_title: bool,
    /// List plotted objects in the info area.
    pub show_legend: bool,
    /// Show histogram statistics in the info area.
    pub show_statistics: bool,
    /// Reserve space for the info area.
    pub show_info: bool,
    /// Horizontal axis scale.
    pub x_scale: AxisScale,
    /// Vertical axis scale.
    pub y_scale: AxisScale,
    /// Points sampled per function.
    pub function_samples: usize,
}

impl Default for RegionParameters {
    fn default() -> Self {
        Self {
            show_title: true,
            show_legend: true,
            show_statistics: false,
            show_info: true,
            x_scale: AxisScale::Lin,
            y_scale: AxisScale::Lin,
            function_samples: DEFAULT_FUNCTION_SAMPLES,
        }
    }
}

impl RegionParameters {
    /// Set one parameter. An empty value restores its default.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        let value = value.trim();
        let defaults = Self::default();
        match name {
            "showTitle" => {
                self.show_title = or_default(value, defaults.show_title, |v| parse_bool(name, v))?
            },
            "showLegend" => {
                self.show_legend = or_default(value, defaults.show_legend, |v| parse_bool(name, v))?
            },
            "showStatistics" => {
                self.show_statistics =
                    or_default(value, defaults.show_statistics, |v| parse_bool(name, v))?
            },
            "showInfo" => {
                self.show_info = or_default(value, defaults.show_info, |v| parse_bool(name, v))?
            },
            "xAxisScale" => {
                self.x_scale = or_default(value, defaults.x_scale, |v| AxisScale::parse(name, v))?
            },
            "yAxisScale" => {
                self.y_scale = or_default(value, defaults.y_scale, |v| AxisScale::parse(name, v))?
            },
            "functionSamples" => {
                self.function_samples =
                    or_default(value, defaults.function_samples, |v| parse_samples(name, v))?
            },
            _ => return Err(PlotError::unknown_parameter(name)),
        }
        Ok(())
    }

    /// Current value of a parameter, `None` for unknown names.
    pub fn value(&self, name: &str) -> Option<String> {
        let value = match name {
            "showTitle" => self.show_title.to_string(),
            "showLegend" => self.show_legend.to_string(),
            "showStatistics" => self.show_statistics.to_string(),
            "showInfo" => self.show_info.to_string(),
            "xAxisScale" => self.x_scale.name().to_string(),
            "yAxisScale" => self.y_scale.name().to_string(),
            "functionSamples" => self.function_samples.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Accepted values of a parameter. Empty for free-form or unknown ones.
    pub fn options(name: &str) -> Vec<String> {
        let options: &[&str] = match name {
            "showTitle" | "showLegend" | "showStatistics" | "showInfo" => &BOOL_OPTIONS,
            "xAxisScale" | "yAxisScale" => &AxisScale::OPTIONS,
            _ => &[],
        };
        options.iter().map(|o| o.to_string()).collect()
    }
}

fn or_default<T>(value: &str, default: T, parse: impl FnOnce(&str) -> Result<T>) -> Result<T> {
    if value.is_empty() {
        Ok(default)
    } else {
        parse(value)
    }
}

fn parse_samples(name: &str, value: &str) -> Result<usize> {
    match value.parse::<usize>() {
        Ok(n) if (2..=MAX_FUNCTION_SAMPLES).contains(&n) => Ok(n),
        _ => Err(PlotError::invalid_value(
            name,
            value,
            format!("an integer from 2 to {}", MAX_FUNCTION_SAMPLES),
        )),
    }
}
