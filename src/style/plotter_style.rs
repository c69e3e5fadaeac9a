//! The global style block of a region.

use super::base::{assign, nested, options, parse_bool, split_path, BOOL_OPTIONS};
use super::{AxisStyle, BaseStyle, DataStyle, InfoStyle, TitleStyle};
use crate::error::{PlotError, Result};

/// Customization block with one style per scene part.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotterStyle {
    /// Plotted objects.
    pub data: DataStyle,
    /// Horizontal axis.
    pub x_axis: AxisStyle,
    /// Vertical axis.
    pub y_axis: AxisStyle,
    /// Color axis of 2D plots.
    pub z_axis: AxisStyle,
    /// Region title.
    pub title: TitleStyle,
    /// Info area.
    pub info: InfoStyle,
    /// Visibility of the whole scene.
    pub visible: Option<bool>,
}

const PARTS: [&str; 6] = [
    "dataStyle",
    "xAxisStyle",
    "yAxisStyle",
    "zAxisStyle",
    "titleStyle",
    "infoStyle",
];

impl PlotterStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            data: self.data.layered_over(&base.data),
            x_axis: self.x_axis.layered_over(&base.x_axis),
            y_axis: self.y_axis.layered_over(&base.y_axis),
            z_axis: self.z_axis.layered_over(&base.z_axis),
            title: self.title.layered_over(&base.title),
            info: self.info.layered_over(&base.info),
            visible: self.visible.or(base.visible),
        }
    }

    fn part(&self, name: &str) -> Option<&dyn BaseStyle> {
        match name {
            "dataStyle" => Some(&self.data),
            "xAxisStyle" => Some(&self.x_axis),
            "yAxisStyle" => Some(&self.y_axis),
            "zAxisStyle" => Some(&self.z_axis),
            "titleStyle" => Some(&self.title),
            "infoStyle" => Some(&self.info),
            _ => None,
        }
    }

    fn part_mut(&mut self, name: &str) -> Option<&mut dyn BaseStyle> {
        match name {
            "dataStyle" => Some(&mut self.data),
            "xAxisStyle" => Some(&mut self.x_axis),
            "yAxisStyle" => Some(&mut self.y_axis),
            "zAxisStyle" => Some(&mut self.z_axis),
            "titleStyle" => Some(&mut self.title),
            "infoStyle" => Some(&mut self.info),
            _ => None,
        }
    }
}

impl BaseStyle for PlotterStyle {
    fn name(&self) -> &'static str {
        "plotterStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match split_path(parameter) {
            Some((part, rest)) => self
                .part_mut(part)
                .ok_or_else(|| PlotError::unknown_parameter(parameter))?
                .set_parameter(rest, value),
            None if parameter == "visible" => {
                assign(&mut self.visible, value, |v| parse_bool(parameter, v))
            },
            None => Err(PlotError::unknown_parameter(parameter)),
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match split_path(parameter) {
            Some((part, rest)) => self.part(part)?.parameter_value(rest),
            None if parameter == "visible" => self.visible.map(|v| v.to_string()),
            None => None,
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        let mut names = options(&["visible"]);
        for part in PARTS {
            if let Some(style) = self.part(part) {
                names.extend(nested(part, style.available_parameters()));
            }
        }
        names
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match split_path(parameter) {
            Some((part, rest)) => self
                .part(part)
                .map(|style| style.available_parameter_options(rest))
                .unwrap_or_default(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn routes_to_every_part() {
        let mut style = PlotterStyle::default();
        style
            .set_parameter("dataStyle.markerStyle.color", "#ff8800")
            .unwrap();
        style.set_parameter("xAxisStyle.label", "x").unwrap();
        style
            .set_parameter("titleStyle.textStyle.color", "yellow")
            .unwrap();
        assert_eq!(style.data.marker.color, Some(Color::Rgb(255, 136, 0)));
        assert_eq!(style.x_axis.label.as_deref(), Some("x"));
        assert_eq!(
            style.parameter_value("titleStyle.textStyle.color").as_deref(),
            Some("yellow")
        );
    }

    #[test]
    fn unknown_part_is_rejected() {
        let mut style = PlotterStyle::default();
        assert!(matches!(
            style.set_parameter("gridStyle.visible", "true"),
            Err(PlotError::UnknownParameter { .. })
        ));
        assert_eq!(style.parameter_value("gridStyle.visible"), None);
    }

    #[test]
    fn every_listed_parameter_is_settable() {
        let mut style = PlotterStyle::default();
        for name in style.available_parameters() {
            // Empty value unsets, which every parameter accepts.
            style.set_parameter(&name, "").unwrap();
        }
    }

    #[test]
    fn layering_merges_parts() {
        let mut own = PlotterStyle::default();
        own.data.line.color = Some(Color::Red);
        let mut base = PlotterStyle::default();
        base.data.line.color = Some(Color::Blue);
        base.y_axis.label = Some("counts".into());
        let merged = own.layered_over(&base);
        assert_eq!(merged.data.line.color, Some(Color::Red));
        assert_eq!(merged.y_axis.label.as_deref(), Some("counts"));
    }
}
