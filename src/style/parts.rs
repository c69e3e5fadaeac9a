//! Styles for the coarse scene parts: data, axes, title and info area.

use super::base::{assign, nested, options, parse_bool, split_path, BOOL_OPTIONS};
use super::{BaseStyle, FillStyle, LineStyle, MarkerStyle, TextStyle};
use crate::error::{PlotError, Result};

/// How plotted objects are drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataStyle {
    /// Lines for histogram outlines, functions and error bars.
    pub line: LineStyle,
    /// Point markers for data point sets.
    pub marker: MarkerStyle,
    /// Histogram bar fill. A visible fill draws bars instead of a staircase.
    pub fill: FillStyle,
    /// Draw error bars for points.
    pub show_error_bars: Option<bool>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl DataStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            line: self.line.layered_over(&base.line),
            marker: self.marker.layered_over(&base.marker),
            fill: self.fill.layered_over(&base.fill),
            show_error_bars: self.show_error_bars.or(base.show_error_bars),
            visible: self.visible.or(base.visible),
        }
    }

    /// Whether error bars are drawn. On unless disabled.
    pub fn error_bars_visible(&self) -> bool {
        self.show_error_bars.unwrap_or(true)
    }
}

impl BaseStyle for DataStyle {
    fn name(&self) -> &'static str {
        "dataStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.set_parameter(rest, value),
            Some(("markerStyle", rest)) => self.marker.set_parameter(rest, value),
            Some(("fillStyle", rest)) => self.fill.set_parameter(rest, value),
            Some(_) => Err(PlotError::unknown_parameter(parameter)),
            None => match parameter {
                "showErrorBars" => {
                    assign(&mut self.show_error_bars, value, |v| parse_bool(parameter, v))
                },
                "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
                _ => Err(PlotError::unknown_parameter(parameter)),
            },
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.parameter_value(rest),
            Some(("markerStyle", rest)) => self.marker.parameter_value(rest),
            Some(("fillStyle", rest)) => self.fill.parameter_value(rest),
            Some(_) => None,
            None => match parameter {
                "showErrorBars" => self.show_error_bars.map(|v| v.to_string()),
                "visible" => self.visible.map(|v| v.to_string()),
                _ => None,
            },
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        let mut names = options(&["showErrorBars", "visible"]);
        names.extend(nested("lineStyle", self.line.available_parameters()));
        names.extend(nested("markerStyle", self.marker.available_parameters()));
        names.extend(nested("fillStyle", self.fill.available_parameters()));
        names
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.available_parameter_options(rest),
            Some(("markerStyle", rest)) => self.marker.available_parameter_options(rest),
            Some(("fillStyle", rest)) => self.fill.available_parameter_options(rest),
            Some(_) => Vec::new(),
            None => match parameter {
                "showErrorBars" | "visible" => options(&BOOL_OPTIONS),
                _ => Vec::new(),
            },
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// How one axis is drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisStyle {
    /// Axis line.
    pub line: LineStyle,
    /// Tick label text.
    pub tick_labels: TextStyle,
    /// Axis label text.
    pub label_text: TextStyle,
    /// Axis label.
    pub label: Option<String>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl AxisStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            line: self.line.layered_over(&base.line),
            tick_labels: self.tick_labels.layered_over(&base.tick_labels),
            label_text: self.label_text.layered_over(&base.label_text),
            label: self.label.clone().or_else(|| base.label.clone()),
            visible: self.visible.or(base.visible),
        }
    }

    /// Set the axis label.
    pub fn set_label(&mut self, label: &str) {
        self.label = Some(label.to_string());
    }
}

impl BaseStyle for AxisStyle {
    fn name(&self) -> &'static str {
        "axisStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.set_parameter(rest, value),
            Some(("tickLabelStyle", rest)) => self.tick_labels.set_parameter(rest, value),
            Some(("labelStyle", rest)) => self.label_text.set_parameter(rest, value),
            Some(_) => Err(PlotError::unknown_parameter(parameter)),
            None => match parameter {
                "label" => assign(&mut self.label, value, |v| Ok(v.to_string())),
                "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
                _ => Err(PlotError::unknown_parameter(parameter)),
            },
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.parameter_value(rest),
            Some(("tickLabelStyle", rest)) => self.tick_labels.parameter_value(rest),
            Some(("labelStyle", rest)) => self.label_text.parameter_value(rest),
            Some(_) => None,
            None => match parameter {
                "label" => self.label.clone(),
                "visible" => self.visible.map(|v| v.to_string()),
                _ => None,
            },
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        let mut names = options(&["label", "visible"]);
        names.extend(nested("lineStyle", self.line.available_parameters()));
        names.extend(nested("tickLabelStyle", self.tick_labels.available_parameters()));
        names.extend(nested("labelStyle", self.label_text.available_parameters()));
        names
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match split_path(parameter) {
            Some(("lineStyle", rest)) => self.line.available_parameter_options(rest),
            Some(("tickLabelStyle", rest)) => self.tick_labels.available_parameter_options(rest),
            Some(("labelStyle", rest)) => self.label_text.available_parameter_options(rest),
            Some(_) => Vec::new(),
            None if parameter == "visible" => options(&BOOL_OPTIONS),
            None => Vec::new(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true)
    }
}

/// A scene part that is just styled text: the title or the info area.
macro_rules! text_part_style {
    ($(#[$doc:meta])* $name:ident, $part:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            /// Text appearance.
            pub text: TextStyle,
            /// Visibility.
            pub visible: Option<bool>,
        }

        impl $name {
            /// Fill unset fields from `base`.
            pub fn layered_over(&self, base: &Self) -> Self {
                Self {
                    text: self.text.layered_over(&base.text),
                    visible: self.visible.or(base.visible),
                }
            }
        }

        impl BaseStyle for $name {
            fn name(&self) -> &'static str {
                $part
            }

            fn reset(&mut self) {
                *self = Self::default();
            }

            fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
                match split_path(parameter) {
                    Some(("textStyle", rest)) => self.text.set_parameter(rest, value),
                    Some(_) => Err(PlotError::unknown_parameter(parameter)),
                    None if parameter == "visible" => {
                        assign(&mut self.visible, value, |v| parse_bool(parameter, v))
                    },
                    None => Err(PlotError::unknown_parameter(parameter)),
                }
            }

            fn parameter_value(&self, parameter: &str) -> Option<String> {
                match split_path(parameter) {
                    Some(("textStyle", rest)) => self.text.parameter_value(rest),
                    Some(_) => None,
                    None if parameter == "visible" => self.visible.map(|v| v.to_string()),
                    None => None,
                }
            }

            fn available_parameters(&self) -> Vec<String> {
                let mut names = options(&["visible"]);
                names.extend(nested("textStyle", self.text.available_parameters()));
                names
            }

            fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
                match split_path(parameter) {
                    Some(("textStyle", rest)) => self.text.available_parameter_options(rest),
                    Some(_) => Vec::new(),
                    None if parameter == "visible" => options(&BOOL_OPTIONS),
                    None => Vec::new(),
                }
            }

            fn set_visible(&mut self, visible: bool) {
                self.visible = Some(visible);
            }

            fn is_visible(&self) -> bool {
                self.visible.unwrap_or(true)
            }
        }
    };
}

text_part_style!(
    /// How the region title is drawn.
    TitleStyle,
    "titleStyle"
);

text_part_style!(
    /// How the info area (legend, statistics, text) is drawn.
    InfoStyle,
    "infoStyle"
);

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn data_style_routes_nested_parameters() {
        let mut data = DataStyle::default();
        data.set_parameter("lineStyle.color", "red").unwrap();
        data.set_parameter("fillStyle.visible", "true").unwrap();
        assert_eq!(data.line.color, Some(Color::Red));
        assert!(data.fill.is_visible());
        assert_eq!(
            data.parameter_value("lineStyle.color").as_deref(),
            Some("red")
        );
        assert!(data
            .available_parameters()
            .contains(&"markerStyle.shape".to_string()));
        assert!(data.set_parameter("gridStyle.color", "red").is_err());
    }

    #[test]
    fn axis_label_is_free_text() {
        let mut axis = AxisStyle::default();
        axis.set_parameter("label", "Energy [GeV]").unwrap();
        assert_eq!(axis.parameter_value("label").as_deref(), Some("Energy [GeV]"));
        assert!(axis.available_parameter_options("label").is_empty());
        axis.set_parameter("label", "").unwrap();
        assert_eq!(axis.label, None);
    }

    #[test]
    fn text_parts_share_the_same_surface() {
        let mut title = TitleStyle::default();
        title.set_parameter("textStyle.bold", "true").unwrap();
        assert_eq!(title.text.bold, Some(true));
        assert_eq!(title.name(), "titleStyle");
        let info = InfoStyle::default();
        assert_eq!(info.available_parameters().len(), 5);
    }
}
