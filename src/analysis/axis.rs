//! Fixed-width binning.

use crate::error::{PlotError, Result};

/// Where a coordinate falls on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinIndex {
    /// Below the lower edge.
    Underflow,
    /// Inside the range, at the given bin.
    Bin(usize),
    /// At or above the upper edge.
    Overflow,
}

/// Axis with equally wide bins over `[lower, upper)`.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedAxis {
    bins: usize,
    lower: f64,
    upper: f64,
}

impl FixedAxis {
    /// Create an axis. Fails on zero bins or an empty/non-finite range.
    pub fn new(bins: usize, lower: f64, upper: f64) -> Result<Self> {
        if bins == 0 || !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(PlotError::InvalidAxis { bins, lower, upper });
        }
        Ok(Self { bins, lower, upper })
    }

    /// Number of in-range bins.
    pub fn bins(&self) -> usize {
        self.bins
    }

    /// Lower edge of the axis.
    pub fn lower_edge(&self) -> f64 {
        self.lower
    }

    /// Upper edge of the axis.
    pub fn upper_edge(&self) -> f64 {
        self.upper
    }

    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        (self.upper - self.lower) / self.bins as f64
    }

    /// Lower edge of bin `index`.
    pub fn bin_lower_edge(&self, index: usize) -> f64 {
        self.lower + index as f64 * self.bin_width()
    }

    /// Upper edge of bin `index`.
    pub fn bin_upper_edge(&self, index: usize) -> f64 {
        if index + 1 >= self.bins {
            self.upper
        } else {
            self.bin_lower_edge(index + 1)
        }
    }

    /// Center of bin `index`.
    pub fn bin_center(&self, index: usize) -> f64 {
        (self.bin_lower_edge(index) + self.bin_upper_edge(index)) / 2.0
    }

    /// Locate a coordinate. NaN counts as overflow.
    pub fn coord_to_index(&self, coord: f64) -> BinIndex {
        if coord < self.lower {
            BinIndex::Underflow
        } else if coord >= self.upper || coord.is_nan() {
            BinIndex::Overflow
        } else {
            let idx = ((coord - self.lower) / self.bin_width()).floor() as usize;
            // Rounding can push values just below `upper` into the last+1 bin.
            BinIndex::Bin(idx.min(self.bins - 1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_degenerate_axes() {
        assert!(FixedAxis::new(0, 0.0, 1.0).is_err());
        assert!(FixedAxis::new(5, 1.0, 1.0).is_err());
        assert!(FixedAxis::new(5, 2.0, 1.0).is_err());
        assert!(FixedAxis::new(5, f64::NEG_INFINITY, 1.0).is_err());
    }

    #[test]
    fn edges_and_centers() {
        let axis = FixedAxis::new(4, 0.0, 2.0).unwrap();
        assert_eq!(axis.bin_width(), 0.5);
        assert_eq!(axis.bin_lower_edge(1), 0.5);
        assert_eq!(axis.bin_upper_edge(3), 2.0);
        assert_eq!(axis.bin_center(0), 0.25);
    }

    #[test]
    fn upper_edge_is_exclusive() {
        let axis = FixedAxis::new(4, 0.0, 2.0).unwrap();
        assert_eq!(axis.coord_to_index(-0.1), BinIndex::Underflow);
        assert_eq!(axis.coord_to_index(0.0), BinIndex::Bin(0));
        assert_eq!(axis.coord_to_index(0.5), BinIndex::Bin(1));
        assert_eq!(axis.coord_to_index(1.999), BinIndex::Bin(3));
        assert_eq!(axis.coord_to_index(2.0), BinIndex::Overflow);
    }
}
