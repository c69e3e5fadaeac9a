//! Sets of measured points with asymmetric errors.

use super::ObjectId;
use crate::error::{PlotError, Result};

/// One coordinate of a data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Central value.
    pub value: f64,
    /// Error towards larger values.
    pub error_plus: f64,
    /// Error towards smaller values.
    pub error_minus: f64,
}

impl Measurement {
    /// Measurement with symmetric error.
    pub fn new(value: f64, error: f64) -> Self {
        Self {
            value,
            error_plus: error,
            error_minus: error,
        }
    }

    /// Measurement with asymmetric errors.
    pub fn asymmetric(value: f64, error_plus: f64, error_minus: f64) -> Self {
        Self {
            value,
            error_plus,
            error_minus,
        }
    }

    /// `value - error_minus`.
    pub fn lower(&self) -> f64 {
        self.value - self.error_minus
    }

    /// `value + error_plus`.
    pub fn upper(&self) -> f64 {
        self.value + self.error_plus
    }

    /// Whether the measurement carries any error.
    pub fn has_error(&self) -> bool {
        self.error_plus > 0.0 || self.error_minus > 0.0
    }
}

/// A point made of one measurement per coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    coordinates: Vec<Measurement>,
}

impl DataPoint {
    /// Measurement for coordinate `coord`.
    pub fn coordinate(&self, coord: usize) -> Option<&Measurement> {
        self.coordinates.get(coord)
    }

    /// Number of coordinates.
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }
}

/// Ordered set of points that all share the same dimension.
#[derive(Debug, Clone)]
pub struct DataPointSet {
    id: ObjectId,
    title: String,
    dimension: usize,
    points: Vec<DataPoint>,
}

impl DataPointSet {
    /// Create an empty set of `dimension`-coordinate points.
    pub fn new(title: impl Into<String>, dimension: usize) -> Self {
        Self {
            id: ObjectId::next(),
            title: title.into(),
            dimension,
            points: Vec::new(),
        }
    }

    /// Identity of this set.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Set title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Change the title.
    pub fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    /// Coordinates per point.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Append a point built from values and symmetric errors.
    ///
    /// `errors` may be empty for error-free points.
    pub fn add_point(&mut self, values: &[f64], errors: &[f64]) -> Result<()> {
        if values.len() != self.dimension {
            return Err(PlotError::DimensionMismatch {
                expected: self.dimension,
                actual: values.len(),
            });
        }
        if !errors.is_empty() && errors.len() != self.dimension {
            return Err(PlotError::DimensionMismatch {
                expected: self.dimension,
                actual: errors.len(),
            });
        }
        let coordinates = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Measurement::new(v, errors.get(i).copied().unwrap_or(0.0)))
            .collect();
        self.points.push(DataPoint { coordinates });
        Ok(())
    }

    /// Append a point from full measurements.
    pub fn add_measurements(&mut self, coordinates: Vec<Measurement>) -> Result<()> {
        if coordinates.len() != self.dimension {
            return Err(PlotError::DimensionMismatch {
                expected: self.dimension,
                actual: coordinates.len(),
            });
        }
        self.points.push(DataPoint { coordinates });
        Ok(())
    }

    /// Point at `index`.
    pub fn point(&self, index: usize) -> Option<&DataPoint> {
        self.points.get(index)
    }

    /// All points.
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    /// Number of points.
    pub fn size(&self) -> usize {
        self.points.len()
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Smallest `value - error_minus` over coordinate `coord`, NaN when empty.
    pub fn lower_extent(&self, coord: usize) -> f64 {
        self.points
            .iter()
            .filter_map(|p| p.coordinate(coord))
            .map(Measurement::lower)
            .filter(|v| v.is_finite())
            .fold(f64::NAN, f64::min)
    }

    /// Largest `value + error_plus` over coordinate `coord`, NaN when empty.
    pub fn upper_extent(&self, coord: usize) -> f64 {
        self.points
            .iter()
            .filter_map(|p| p.coordinate(coord))
            .map(Measurement::upper)
            .filter(|v| v.is_finite())
            .fold(f64::NAN, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_point_checks_dimension() {
        let mut dps = DataPointSet::new("d", 2);
        assert!(dps.add_point(&[1.0, 2.0], &[]).is_ok());
        assert!(dps.add_point(&[1.0, 2.0], &[0.1, 0.2]).is_ok());
        assert!(matches!(
            dps.add_point(&[1.0], &[]),
            Err(PlotError::DimensionMismatch { expected: 2, actual: 1 })
        ));
        assert!(dps.add_point(&[1.0, 2.0], &[0.1]).is_err());
        assert_eq!(dps.size(), 2);
    }

    #[test]
    fn extents_include_errors() {
        let mut dps = DataPointSet::new("d", 2);
        dps.add_point(&[1.0, 5.0], &[0.5, 1.0]).unwrap();
        dps.add_measurements(vec![
            Measurement::new(3.0, 0.0),
            Measurement::asymmetric(2.0, 0.5, 1.5),
        ])
        .unwrap();
        assert_eq!(dps.lower_extent(0), 0.5);
        assert_eq!(dps.upper_extent(0), 3.0);
        assert_eq!(dps.lower_extent(1), 0.5);
        assert_eq!(dps.upper_extent(1), 6.0);
    }

    #[test]
    fn empty_extent_is_nan() {
        let dps = DataPointSet::new("d", 1);
        assert!(dps.lower_extent(0).is_nan());
    }
}
