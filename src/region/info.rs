//! User content of the info area.

use crate::style::{LineStyle, MarkerStyle};

/// Symbol drawn in front of a legend description.
#[derive(Debug, Clone, PartialEq)]
pub enum LegendSymbol {
    /// A point marker.
    Marker(MarkerStyle),
    /// A line sample.
    Line(LineStyle),
}

/// One user-supplied legend line.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    /// Symbol and its style.
    pub symbol: LegendSymbol,
    /// Text next to the symbol.
    pub description: String,
}

/// Free text and legends added to the info area by the user.
///
/// Automatic legends and statistics are generated at render time from the
/// scene and are not stored here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Info {
    texts: Vec<String>,
    legends: Vec<LegendEntry>,
}

impl Info {
    /// Remove all user content.
    pub fn clear(&mut self) {
        self.texts.clear();
        self.legends.clear();
    }

    /// Add a line of text.
    pub fn add_text(&mut self, text: &str) {
        self.texts.push(text.to_string());
    }

    /// Add a legend entry with a marker symbol.
    pub fn add_legend_marker(&mut self, style: &MarkerStyle, description: &str) {
        self.legends.push(LegendEntry {
            symbol: LegendSymbol::Marker(style.clone()),
            description: description.to_string(),
        });
    }

    /// Add a legend entry with a line symbol.
    pub fn add_legend_line(&mut self, style: &LineStyle, description: &str) {
        self.legends.push(LegendEntry {
            symbol: LegendSymbol::Line(style.clone()),
            description: description.to_string(),
        });
    }

    /// Text lines, in insertion order.
    pub fn texts(&self) -> &[String] {
        &self.texts
    }

    /// Legend entries, in insertion order.
    pub fn legends(&self) -> &[LegendEntry] {
        &self.legends
    }

    /// Whether nothing was added.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty() && self.legends.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_insertion_order_and_clears() {
        let mut info = Info::default();
        info.add_text("run 42");
        info.add_legend_line(&LineStyle::default(), "fit");
        info.add_legend_marker(&MarkerStyle::default(), "data");
        assert_eq!(info.texts(), ["run 42"]);
        assert_eq!(info.legends()[1].description, "data");
        assert!(matches!(info.legends()[0].symbol, LegendSymbol::Line(_)));
        info.clear();
        assert!(info.is_empty());
    }
}
