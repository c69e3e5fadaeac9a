//! Parsing of the per-plot options string.
//!
//! Options are `key=value` pairs separated by `,` or `;`, for example
//! `mode=replace, legend=Signal`. Keys are case-insensitive.

use crate::error::{PlotError, Result};

/// How a new object joins the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlotMode {
    /// Add to what is already plotted.
    #[default]
    Overlay,
    /// Clear the scene first.
    Replace,
}

/// Parsed plot options.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotOptions {
    /// Scene mode.
    pub mode: PlotMode,
    /// Legend text overriding the object title.
    pub legend: Option<String>,
}

impl PlotOptions {
    /// Parse an options string. The empty string yields the defaults.
    pub fn parse(text: &str) -> Result<Self> {
        let mut options = Self::default();
        for item in text.split([',', ';']) {
            let item = item.trim();
            if item.is_empty() {
                continue;
            }
            let (key, value) = item
                .split_once('=')
                .map(|(k, v)| (k.trim(), v.trim()))
                .ok_or_else(|| PlotError::InvalidOption(format!("expected key=value, got '{}'", item)))?;
            match key.to_ascii_lowercase().as_str() {
                "mode" => {
                    options.mode = match value.to_ascii_lowercase().as_str() {
                        "overlay" | "add" => PlotMode::Overlay,
                        "replace" => PlotMode::Replace,
                        _ => {
                            return Err(PlotError::InvalidOption(format!(
                                "mode must be overlay or replace, got '{}'",
                                value
                            )))
                        },
                    }
                },
                "legend" => options.legend = Some(value.to_string()),
                _ => return Err(PlotError::InvalidOption(format!("unknown option '{}'", key))),
            }
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default_overlay() {
        let opts = PlotOptions::parse("").unwrap();
        assert_eq!(opts.mode, PlotMode::Overlay);
        assert_eq!(opts.legend, None);
    }

    #[test]
    fn parses_pairs_with_either_separator() {
        let opts = PlotOptions::parse("Mode=Replace; legend = Signal region").unwrap();
        assert_eq!(opts.mode, PlotMode::Replace);
        assert_eq!(opts.legend.as_deref(), Some("Signal region"));
    }

    #[test]
    fn rejects_malformed_options() {
        assert!(PlotOptions::parse("mode").is_err());
        assert!(PlotOptions::parse("mode=stack").is_err());
        assert!(PlotOptions::parse("colour=red").is_err());
    }
}
