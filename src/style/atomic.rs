//! Atomic styles: lines, markers, fills and text.

use super::base::{assign, options, parse_bool, parse_color, parse_u16, BOOL_OPTIONS};
use super::{color_name, BaseStyle};
use crate::error::{PlotError, Result};
use ratatui::style::Color;
use ratatui::symbols::Marker;

/// How a line is stroked on the terminal grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Continuous braille strokes.
    Solid,
    /// Sparse dots.
    Dotted,
}

impl LineType {
    const OPTIONS: [&'static str; 2] = ["solid", "dotted"];

    fn parse(name: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(Self::Solid),
            "dotted" | "dot" | "dashed" => Ok(Self::Dotted),
            _ => Err(PlotError::invalid_value(name, value, "solid or dotted")),
        }
    }

    /// Parameter text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
        }
    }

    /// Terminal marker used to draw the line.
    pub fn marker(self) -> Marker {
        match self {
            Self::Solid => Marker::Braille,
            Self::Dotted => Marker::Dot,
        }
    }
}

/// Symbol used for point markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    /// `•`
    Dot,
    /// Full block.
    Box,
    /// Vertical bar.
    Bar,
    /// Braille dots.
    Braille,
    /// Half block.
    HalfBlock,
}

impl MarkerShape {
    const OPTIONS: [&'static str; 5] = ["dot", "box", "bar", "braille", "halfblock"];

    fn parse(name: &str, value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "box" | "square" => Ok(Self::Box),
            "bar" => Ok(Self::Bar),
            "braille" => Ok(Self::Braille),
            "halfblock" => Ok(Self::HalfBlock),
            _ => Err(PlotError::invalid_value(
                name,
                value,
                MarkerShape::OPTIONS.join(", "),
            )),
        }
    }

    /// Parameter text.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dot => "dot",
            Self::Box => "box",
            Self::Bar => "bar",
            Self::Braille => "braille",
            Self::HalfBlock => "halfblock",
        }
    }

    /// Terminal marker.
    pub fn marker(self) -> Marker {
        match self {
            Self::Dot => Marker::Dot,
            Self::Box => Marker::Block,
            Self::Bar => Marker::Bar,
            Self::Braille => Marker::Braille,
            Self::HalfBlock => Marker::HalfBlock,
        }
    }

    /// Single character used for this shape in legends.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Dot => "•",
            Self::Box => "█",
            Self::Bar => "▄",
            Self::Braille => "⣿",
            Self::HalfBlock => "▀",
        }
    }
}

/// Line customization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineStyle {
    /// Stroke color.
    pub color: Option<Color>,
    /// Stroke type.
    pub line_type: Option<LineType>,
    /// Stroke width. 0 hides the line, 2 or more draws solid lines with full cells.
    pub thickness: Option<u16>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl LineStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            line_type: self.line_type.or(base.line_type),
            thickness: self.thickness.or(base.thickness),
            visible: self.visible.or(base.visible),
        }
    }

    /// Terminal marker for this stroke type and width.
    pub fn marker(&self) -> Marker {
        match (self.line_type.unwrap_or(LineType::Solid), self.thickness) {
            (LineType::Solid, Some(t)) if t >= 2 => Marker::Block,
            (line_type, _) => line_type.marker(),
        }
    }
}

impl BaseStyle for LineStyle {
    fn name(&self) -> &'static str {
        "lineStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match parameter {
            "color" => assign(&mut self.color, value, |v| parse_color(parameter, v)),
            "type" => assign(&mut self.line_type, value, |v| LineType::parse(parameter, v)),
            "thickness" => assign(&mut self.thickness, value, |v| parse_u16(parameter, v)),
            "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
            _ => Err(PlotError::unknown_parameter(parameter)),
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match parameter {
            "color" => self.color.map(color_name),
            "type" => self.line_type.map(|t| t.name().to_string()),
            "thickness" => self.thickness.map(|t| t.to_string()),
            "visible" => self.visible.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        options(&["color", "type", "thickness", "visible"])
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match parameter {
            "type" => options(&LineType::OPTIONS),
            "visible" => options(&BOOL_OPTIONS),
            _ => Vec::new(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true) && self.thickness != Some(0)
    }
}

/// Point marker customization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerStyle {
    /// Marker color.
    pub color: Option<Color>,
    /// Marker shape.
    pub shape: Option<MarkerShape>,
    /// Size hint. Terminal cells cannot scale, so only 0 (hidden) is meaningful.
    pub size: Option<u16>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl MarkerStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            shape: self.shape.or(base.shape),
            size: self.size.or(base.size),
            visible: self.visible.or(base.visible),
        }
    }
}

impl BaseStyle for MarkerStyle {
    fn name(&self) -> &'static str {
        "markerStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match parameter {
            "color" => assign(&mut self.color, value, |v| parse_color(parameter, v)),
            "shape" => assign(&mut self.shape, value, |v| MarkerShape::parse(parameter, v)),
            "size" => assign(&mut self.size, value, |v| parse_u16(parameter, v)),
            "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
            _ => Err(PlotError::unknown_parameter(parameter)),
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match parameter {
            "color" => self.color.map(color_name),
            "shape" => self.shape.map(|s| s.name().to_string()),
            "size" => self.size.map(|s| s.to_string()),
            "visible" => self.visible.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        options(&["color", "shape", "size", "visible"])
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match parameter {
            "shape" => options(&MarkerShape::OPTIONS),
            "visible" => options(&BOOL_OPTIONS),
            _ => Vec::new(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.unwrap_or(true) && self.size != Some(0)
    }
}

/// Area fill customization. Fills are off unless made visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillStyle {
    /// Fill color.
    pub color: Option<Color>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl FillStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            visible: self.visible.or(base.visible),
        }
    }
}

impl BaseStyle for FillStyle {
    fn name(&self) -> &'static str {
        "fillStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match parameter {
            "color" => assign(&mut self.color, value, |v| parse_color(parameter, v)),
            "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
            _ => Err(PlotError::unknown_parameter(parameter)),
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match parameter {
            "color" => self.color.map(color_name),
            "visible" => self.visible.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        options(&["color", "visible"])
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match parameter {
            "visible" => options(&BOOL_OPTIONS),
            _ => Vec::new(),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = Some(visible);
    }

    fn is_visible(&self) -> bool {
        self.visible.unwrap_or(false)
    }
}

/// Text customization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextStyle {
    /// Text color.
    pub color: Option<Color>,
    /// Bold weight.
    pub bold: Option<bool>,
    /// Italic slant.
    pub italic: Option<bool>,
    /// Visibility.
    pub visible: Option<bool>,
}

impl TextStyle {
    /// Fill unset fields from `base`.
    pub fn layered_over(&self, base: &Self) -> Self {
        Self {
            color: self.color.or(base.color),
            bold: self.bold.or(base.bold),
            italic: self.italic.or(base.italic),
            visible: self.visible.or(base.visible),
        }
    }

    /// Terminal style with `fallback` as the color when unset.
    pub fn to_style(&self, fallback: Color) -> ratatui::style::Style {
        use ratatui::style::{Modifier, Style};
        let mut style = Style::default().fg(self.color.unwrap_or(fallback));
        if self.bold.unwrap_or(false) {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.italic.unwrap_or(false) {
            style = style.add_modifier(Modifier::ITALIC);
        }
        style
    }
}

impl BaseStyle for TextStyle {
    fn name(&self) -> &'static str {
        "textStyle"
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()> {
        match parameter {
            "color" => assign(&mut self.color, value, |v| parse_color(parameter, v)),
            "bold" => assign(&mut self.bold, value, |v| parse_bool(parameter, v)),
            "italic" => assign(&mut self.italic, value, |v| parse_bool(parameter, v)),
            "visible" => assign(&mut self.visible, value, |v| parse_bool(parameter, v)),
            _ => Err(PlotError::unknown_parameter(parameter)),
        }
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        match parameter {
            "color" => self.color.map(color_name),
            "bold" => self.bold.map(|v| v.to_string()),
            "italic" => self.italic.map(|v| v.to_string()),
            "visible" => self.visible.map(|v| v.to_string()),
            _ => None,
        }
    }

    fn available_parameters(&self) -> Vec<String> {
        options(&["color", "bold", "italic", "visible"])
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        match parameter {
            "bold" | "italic" | "visible" => options(&BOOL_OPTIONS),
            _ => Vec::new(),
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

    #[test]
    fn line_style_parameters() {
        let mut line = LineStyle::default();
        line.set_parameter("color", "blue").unwrap();
        line.set_parameter("type", "dotted").unwrap();
        assert_eq!(line.parameter_value("color").as_deref(), Some("blue"));
        assert_eq!(line.parameter_value("type").as_deref(), Some("dotted"));
        assert_eq!(line.parameter_value("thickness"), None);
        assert!(matches!(
            line.set_parameter("width", "2"),
            Err(PlotError::UnknownParameter { .. })
        ));
        assert!(matches!(
            line.set_parameter("type", "wavy"),
            Err(PlotError::InvalidParameterValue { .. })
        ));
    }

    #[test]
    fn thickness_picks_the_stroke() {
        let mut line = LineStyle::default();
        assert_eq!(line.marker(), Marker::Braille);
        line.set_parameter("thickness", "2").unwrap();
        assert_eq!(line.marker(), Marker::Block);
        line.set_parameter("type", "dotted").unwrap();
        assert_eq!(line.marker(), Marker::Dot);
        line.set_parameter("thickness", "0").unwrap();
        assert!(!line.is_visible());
    }

    #[test]
    fn layering_prefers_own_fields() {
        let own = MarkerStyle {
            color: Some(Color::Red),
            ..Default::default()
        };
        let base = MarkerStyle {
            color: Some(Color::Blue),
            shape: Some(MarkerShape::Box),
            ..Default::default()
        };
        let merged = own.layered_over(&base);
        assert_eq!(merged.color, Some(Color::Red));
        assert_eq!(merged.shape, Some(MarkerShape::Box));
    }

    #[test]
    fn fill_is_hidden_by_default() {
        let mut fill = FillStyle::default();
        assert!(!fill.is_visible());
        fill.set_visible(true);
        assert!(fill.is_visible());
        fill.reset();
        assert!(!fill.is_visible());
    }

    #[test]
    fn zero_size_hides_markers() {
        let mut marker = MarkerStyle::default();
        assert!(marker.is_visible());
        marker.set_parameter("size", "0").unwrap();
        assert!(!marker.is_visible());
    }

    #[test]
    fn options_are_listed_for_enumerated_parameters() {
        let marker = MarkerStyle::default();
        assert!(marker
            .available_parameter_options("shape")
            .contains(&"halfblock".to_string()));
        assert!(marker.available_parameter_options("color").is_empty());
    }
}
