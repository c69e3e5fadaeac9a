//! One-dimensional histogram.

use super::{BaseHistogram, BinIndex, FixedAxis, ObjectId};
use crate::error::Result;

/// Weighted 1D histogram with fixed binning.
#[derive(Debug, Clone)]
pub struct Histogram1D {
    id: ObjectId,
    title: String,
    axis: FixedAxis,
    heights: Vec<f64>,
    /// Sum of squared weights per bin.
    errors2: Vec<f64>,
    bin_entries: Vec<u64>,
    underflow: u64,
    overflow: u64,
    sum_w: f64,
    sum_wx: f64,
    sum_wx2: f64,
}

impl Histogram1D {
    /// Create an empty histogram with `bins` bins over `[lower, upper)`.
    pub fn new(title: impl Into<String>, bins: usize, lower: f64, upper: f64) -> Result<Self> {
        let axis = FixedAxis::new(bins, lower, upper)?;
        Ok(Self::with_axis(title, axis))
    }

    /// Create an empty histogram over an existing axis.
    pub fn with_axis(title: impl Into<String>, axis: FixedAxis) -> Self {
        let bins = axis.bins();
        Self {
            id: ObjectId::next(),
            title: title.into(),
            axis,
            heights: vec![0.0; bins],
            errors2: vec![0.0; bins],
            bin_entries: vec![0; bins],
            underflow: 0,
            overflow: 0,
            sum_w: 0.0,
            sum_wx: 0.0,
            sum_wx2: 0.0,
        }
    }

    /// Identity of this histogram.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// The binning.
    pub fn axis(&self) -> &FixedAxis {
        &self.axis
    }

    /// Add `weight` at `x`. NaN coordinates and weights are ignored.
    pub fn fill(&mut self, x: f64, weight: f64) {
        if x.is_nan() || weight.is_nan() {
            return;
        }
        match self.axis.coord_to_index(x) {
            BinIndex::Underflow => self.underflow += 1,
            BinIndex::Overflow => self.overflow += 1,
            BinIndex::Bin(i) => {
                self.heights[i] += weight;
                self.errors2[i] += weight * weight;
                self.bin_entries[i] += 1;
                self.sum_w += weight;
                self.sum_wx += weight * x;
                self.sum_wx2 += weight * x * x;
            },
        }
    }

    /// Sum of weights in bin `index`.
    pub fn bin_height(&self, index: usize) -> f64 {
        self.heights.get(index).copied().unwrap_or(0.0)
    }

    /// Statistical error of bin `index`.
    pub fn bin_error(&self, index: usize) -> f64 {
        self.errors2.get(index).map(|e| e.sqrt()).unwrap_or(0.0)
    }

    /// Number of fills in bin `index`.
    pub fn bin_entries(&self, index: usize) -> u64 {
        self.bin_entries.get(index).copied().unwrap_or(0)
    }

    /// Sum of all in-range bin heights.
    pub fn sum_bin_heights(&self) -> f64 {
        self.heights.iter().sum()
    }

    /// Weighted mean of in-range fills.
    pub fn mean(&self) -> f64 {
        if self.sum_w == 0.0 {
            0.0
        } else {
            self.sum_wx / self.sum_w
        }
    }

    /// Weighted root mean square spread around the mean.
    pub fn rms(&self) -> f64 {
        if self.sum_w == 0.0 {
            return 0.0;
        }
        let mean = self.mean();
        (self.sum_wx2 / self.sum_w - mean * mean).max(0.0).sqrt()
    }

    /// Largest bin height, 0 when empty.
    pub fn max_bin_height(&self) -> f64 {
        self.heights.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest bin height.
    pub fn min_bin_height(&self) -> f64 {
        self.heights.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Multiply every bin by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for h in &mut self.heights {
            *h *= factor;
        }
        for e in &mut self.errors2 {
            *e *= factor * factor;
        }
        self.sum_w *= factor;
        self.sum_wx *= factor;
        self.sum_wx2 *= factor;
    }
}

impl BaseHistogram for Histogram1D {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn dimension(&self) -> usize {
        1
    }

    fn entries(&self) -> u64 {
        self.bin_entries.iter().sum()
    }

    fn extra_entries(&self) -> u64 {
        self.underflow + self.overflow
    }

    fn reset(&mut self) {
        self.heights.iter_mut().for_each(|h| *h = 0.0);
        self.errors2.iter_mut().for_each(|e| *e = 0.0);
        self.bin_entries.iter_mut().for_each(|n| *n = 0);
        self.underflow = 0;
        self.overflow = 0;
        self.sum_w = 0.0;
        self.sum_wx = 0.0;
        self.sum_wx2 = 0.0;
    }
}
