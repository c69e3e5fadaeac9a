//! Axis range configuration.

use super::AxisScale;
use crate::error::{PlotError, Result};

/// Range of one axis. `None` lets the region derive it from the scene.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisLimits {
    range: Option<(f64, f64)>,
}

impl AxisLimits {
    /// Automatic range.
    pub fn auto() -> Self {
        Self { range: None }
    }

    /// Validate a user range for `axis` on the given scale.
    ///
    /// `(0, 0)` means automatic. Otherwise both ends must be finite,
    /// `min < max`, and `min > 0` on a log scale.
    pub fn new(axis: char, min: f64, max: f64, scale: AxisScale) -> Result<Self> {
        if min == 0.0 && max == 0.0 {
            return Ok(Self::auto());
        }
        let invalid = !min.is_finite()
            || !max.is_finite()
            || min >= max
            || (scale == AxisScale::Log && min <= 0.0);
        if invalid {
            return Err(PlotError::InvalidLimits { axis, min, max });
        }
        Ok(Self {
            range: Some((min, max)),
        })
    }

    /// Whether the range is derived from the scene.
    pub fn is_auto(&self) -> bool {
        self.range.is_none()
    }

    /// Fixed range, if any.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Fixed range, or `auto` when automatic.
    pub fn resolve(&self, auto: (f64, f64)) -> (f64, f64) {
        self.range.unwrap_or(auto)
    }

    /// Whether this range can be shown on `scale`.
    pub fn fits_scale(&self, scale: AxisScale) -> bool {
        match (self.range, scale) {
            (Some((min, _)), AxisScale::Log) => min > 0.0,
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_zero_means_auto() {
        assert!(AxisLimits::new('x', 0.0, 0.0, AxisScale::Lin).unwrap().is_auto());
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        for (min, max) in [(2.0, 1.0), (1.0, 1.0), (f64::NAN, 1.0), (0.0, f64::INFINITY)] {
            assert!(matches!(
                AxisLimits::new('y', min, max, AxisScale::Lin),
                Err(PlotError::InvalidLimits { axis: 'y', .. })
            ));
        }
    }

    #[test]
    fn log_scale_needs_positive_minimum() {
        assert!(AxisLimits::new('x', 0.0, 10.0, AxisScale::Log).is_err());
        let limits = AxisLimits::new('x', 0.1, 10.0, AxisScale::Log).unwrap();
        assert_eq!(limits.range(), Some((0.1, 10.0)));
        assert_eq!(limits.resolve((5.0, 6.0)), (0.1, 10.0));
        assert!(AxisLimits::new('x', -1.0, 10.0, AxisScale::Lin)
            .unwrap()
            .fits_scale(AxisScale::Lin));
        assert!(!AxisLimits::new('x', -1.0, 10.0, AxisScale::Lin)
            .unwrap()
            .fits_scale(AxisScale::Log));
    }
}
