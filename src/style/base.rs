//! Parameter surface shared by all styles.

use crate::error::{PlotError, Result};
use ratatui::style::Color;
use std::str::FromStr;

/// Options accepted by boolean parameters.
pub const BOOL_OPTIONS: [&str; 2] = ["true", "false"];

/// String-keyed configuration common to every style block.
pub trait BaseStyle {
    /// Name of the scene part this style customizes.
    fn name(&self) -> &'static str;

    /// Unset every parameter.
    fn reset(&mut self);

    /// Set a parameter. An empty value unsets it.
    fn set_parameter(&mut self, parameter: &str, value: &str) -> Result<()>;

    /// Current value of a parameter, `None` when unset or unknown.
    fn parameter_value(&self, parameter: &str) -> Option<String>;

    /// Every parameter name this style accepts, including nested paths.
    fn available_parameters(&self) -> Vec<String>;

    /// Accepted values for a parameter. Empty for free-form or unknown ones.
    fn available_parameter_options(&self, parameter: &str) -> Vec<String>;

    /// Show or hide the part.
    fn set_visible(&mut self, visible: bool);

    /// Whether the part is shown.
    fn is_visible(&self) -> bool;
}

/// Parse `true`/`false` (also `yes`/`no`, `1`/`0`).
pub fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(PlotError::invalid_value(name, value, "true or false")),
    }
}

/// Parse a color name (`red`, `lightblue`, ...) or `#rrggbb`.
pub fn parse_color(name: &str, value: &str) -> Result<Color> {
    Color::from_str(value.trim())
        .map_err(|_| PlotError::invalid_value(name, value, "a color name or #rrggbb"))
}

/// Canonical text for a color, accepted back by [`parse_color`].
pub fn color_name(color: Color) -> String {
    match color {
        Color::Reset => "reset".to_string(),
        Color::Black => "black".to_string(),
        Color::Red => "red".to_string(),
        Color::Green => "green".to_string(),
        Color::Yellow => "yellow".to_string(),
        Color::Blue => "blue".to_string(),
        Color::Magenta => "magenta".to_string(),
        Color::Cyan => "cyan".to_string(),
        Color::Gray => "gray".to_string(),
        Color::DarkGray => "darkgray".to_string(),
        Color::LightRed => "lightred".to_string(),
        Color::LightGreen => "lightgreen".to_string(),
        Color::LightYellow => "lightyellow".to_string(),
        Color::LightBlue => "lightblue".to_string(),
        Color::LightMagenta => "lightmagenta".to_string(),
        Color::LightCyan => "lightcyan".to_string(),
        Color::White => "white".to_string(),
        Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
        Color::Indexed(i) => i.to_string(),
    }
}

pub(crate) fn parse_u16(name: &str, value: &str) -> Result<u16> {
    value
        .trim()
        .parse::<u16>()
        .map_err(|_| PlotError::invalid_value(name, value, "a non-negative integer"))
}

/// Assign a parsed value, or unset the slot for an empty value.
pub(crate) fn assign<T>(
    slot: &mut Option<T>,
    value: &str,
    parse: impl FnOnce(&str) -> Result<T>,
) -> Result<()> {
    if value.trim().is_empty() {
        *slot = None;
    } else {
        *slot = Some(parse(value)?);
    }
    Ok(())
}

/// Split `part.rest` into `("part", "rest")`.
pub(crate) fn split_path(parameter: &str) -> Option<(&str, &str)> {
    parameter.split_once('.')
}

/// Prefix every nested parameter name with `part.`.
pub(crate) fn nested(part: &str, names: Vec<String>) -> impl Iterator<Item = String> + '_ {
    names.into_iter().map(move |n| format!("{}.{}", part, n))
}

pub(crate) fn options(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_round_trip_through_names() {
        for text in ["red", "lightblue", "darkgray", "#102030"] {
            let color = parse_color("color", text).unwrap();
            assert_eq!(color_name(color), text);
        }
        assert!(parse_color("color", "not-a-color").is_err());
    }

    #[test]
    fn bools_accept_common_spellings() {
        assert!(parse_bool("p", "TRUE").unwrap());
        assert!(!parse_bool("p", "off").unwrap());
        assert!(parse_bool("p", "maybe").is_err());
    }

    #[test]
    fn empty_value_unsets() {
        let mut slot = Some(3u16);
        assign(&mut slot, "", |v| parse_u16("size", v)).unwrap();
        assert_eq!(slot, None);
        assign(&mut slot, "7", |v| parse_u16("size", v)).unwrap();
        assert_eq!(slot, Some(7));
        assert!(assign(&mut slot, "-1", |v| parse_u16("size", v)).is_err());
        assert_eq!(slot, Some(7));
    }
}
