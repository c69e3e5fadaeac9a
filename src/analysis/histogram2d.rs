//! Two-dimensional histogram.

use super::{BaseHistogram, BinIndex, FixedAxis, ObjectId};
use crate::error::Result;
use ndarray::Array2;

/// Weighted 2D histogram. Bins are indexed `[ix, iy]`.
#[derive(Debug, Clone)]
pub struct Histogram2D {
    id: ObjectId,
    title: String,
    x_axis: FixedAxis,
    y_axis: FixedAxis,
    heights: Array2<f64>,
    errors2: Array2<f64>,
    bin_entries: Array2<u64>,
    extra: u64,
    sum_w: f64,
    sum_wx: f64,
    sum_wx2: f64,
    sum_wy: f64,
    sum_wy2: f64,
}

impl Histogram2D {
    /// Create an empty histogram.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: impl Into<String>,
        x_bins: usize,
        x_lower: f64,
        x_upper: f64,
        y_bins: usize,
        y_lower: f64,
        y_upper: f64,
    ) -> Result<Self> {
        let x_axis = FixedAxis::new(x_bins, x_lower, x_upper)?;
        let y_axis = FixedAxis::new(y_bins, y_lower, y_upper)?;
        let shape = (x_bins, y_bins);
        Ok(Self {
            id: ObjectId::next(),
            title: title.into(),
            x_axis,
            y_axis,
            heights: Array2::zeros(shape),
            errors2: Array2::zeros(shape),
            bin_entries: Array2::zeros(shape),
            extra: 0,
            sum_w: 0.0,
            sum_wx: 0.0,
            sum_wx2: 0.0,
            sum_wy: 0.0,
            sum_wy2: 0.0,
        })
    }

    /// Identity of this histogram.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// X binning.
    pub fn x_axis(&self) -> &FixedAxis {
        &self.x_axis
    }

    /// Y binning.
    pub fn y_axis(&self) -> &FixedAxis {
        &self.y_axis
    }

    /// Add `weight` at `(x, y)`. Fills outside either axis count as extra entries.
    pub fn fill(&mut self, x: f64, y: f64, weight: f64) {
        if x.is_nan() || y.is_nan() || weight.is_nan() {
            return;
        }
        match (self.x_axis.coord_to_index(x), self.y_axis.coord_to_index(y)) {
            (BinIndex::Bin(ix), BinIndex::Bin(iy)) => {
                self.heights[[ix, iy]] += weight;
                self.errors2[[ix, iy]] += weight * weight;
                self.bin_entries[[ix, iy]] += 1;
                self.sum_w += weight;
                self.sum_wx += weight * x;
                self.sum_wx2 += weight * x * x;
                self.sum_wy += weight * y;
                self.sum_wy2 += weight * y * y;
            },
            _ => self.extra += 1,
        }
    }

    /// Sum of weights in bin `(ix, iy)`.
    pub fn bin_height(&self, ix: usize, iy: usize) -> f64 {
        self.heights.get([ix, iy]).copied().unwrap_or(0.0)
    }

    /// Statistical error of bin `(ix, iy)`.
    pub fn bin_error(&self, ix: usize, iy: usize) -> f64 {
        self.errors2.get([ix, iy]).map(|e| e.sqrt()).unwrap_or(0.0)
    }

    /// Number of fills in bin `(ix, iy)`.
    pub fn bin_entries(&self, ix: usize, iy: usize) -> u64 {
        self.bin_entries.get([ix, iy]).copied().unwrap_or(0)
    }

    /// Borrow the bin heights.
    pub fn heights(&self) -> &Array2<f64> {
        &self.heights
    }

    /// Weighted mean along x.
    pub fn mean_x(&self) -> f64 {
        weighted_mean(self.sum_wx, self.sum_w)
    }

    /// Weighted mean along y.
    pub fn mean_y(&self) -> f64 {
        weighted_mean(self.sum_wy, self.sum_w)
    }

    /// Weighted rms along x.
    pub fn rms_x(&self) -> f64 {
        weighted_rms(self.sum_wx, self.sum_wx2, self.sum_w)
    }

    /// Weighted rms along y.
    pub fn rms_y(&self) -> f64 {
        weighted_rms(self.sum_wy, self.sum_wy2, self.sum_w)
    }

    /// Largest bin height, 0 when empty.
    pub fn max_bin_height(&self) -> f64 {
        self.heights.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest bin height.
    pub fn min_bin_height(&self) -> f64 {
        self.heights.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

fn weighted_mean(sum_wx: f64, sum_w: f64) -> f64 {
    if sum_w == 0.0 {
        0.0
    } else {
        sum_wx / sum_w
    }
}

fn weighted_rms(sum_wx: f64, sum_wx2: f64, sum_w: f64) -> f64 {
    if sum_w == 0.0 {
        return 0.0;
    }
    let mean = sum_wx / sum_w;
    (sum_wx2 / sum_w - mean * mean).max(0.0).sqrt()
}

impl BaseHistogram for Histogram2D {
    fn title(&self) -> &str {
        &self.title
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn dimension(&self) -> usize {
        2
    }

    fn entries(&self) -> u64 {
        self.bin_entries.sum()
    }

    fn extra_entries(&self) -> u64 {
        self.extra
    }

    fn reset(&mut self) {
        self.heights.fill(0.0);
        self.errors2.fill(0.0);
        self.bin_entries.fill(0);
        self.extra = 0;
        self.sum_w = 0.0;
        self.sum_wx = 0.0;
        self.sum_wx2 = 0.0;
        self.sum_wy = 0.0;
        self.sum_wy2 = 0.0;
    }
}
