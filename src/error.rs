//! Error types for plotregion.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for plotregion operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while building, plotting or rendering a scene.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Parameter name is not known to the region, style or layout.
    #[error("Unknown parameter: {name}")]
    UnknownParameter { name: String },

    /// Parameter value is not one of the accepted options.
    #[error("Invalid value '{value}' for parameter {name} (expected {expected})")]
    InvalidParameterValue {
        name: String,
        value: String,
        expected: String,
    },

    /// Axis limits are not a usable range.
    #[error("Invalid {axis} limits: [{min}, {max}]")]
    InvalidLimits { axis: char, min: f64, max: f64 },

    /// Malformed plot option string.
    #[error("Invalid plot option: {0}")]
    InvalidOption(String),

    /// Object is not part of the region's scene.
    #[error("Object is not plotted in this region: {title}")]
    NotPlotted { title: String },

    /// Object cannot share the scene with what is already plotted.
    #[error("Cannot plot {dimension}D object in a region showing {scene}D content")]
    IncompatibleDimension { dimension: usize, scene: usize },

    /// A region shows at most one 2D histogram.
    #[error("Region already shows a 2D histogram: {title}")]
    HeatmapOverlay { title: String },

    /// Object dimension has no rendering.
    #[error("Unsupported dimension {dimension} for {kind}")]
    UnsupportedDimension { kind: &'static str, dimension: usize },

    /// Number of coordinates does not match the object dimension.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Binning definition is not usable.
    #[error("Invalid axis: {bins} bins over [{lower}, {upper}]")]
    InvalidAxis { bins: usize, lower: f64, upper: f64 },

    /// Function codelet is not recognised.
    #[error("Invalid function codelet: {0}")]
    InvalidCodelet(String),

    /// Wrong number of function parameters.
    #[error("Function expects {expected} parameters, got {actual}")]
    ParameterCount { expected: usize, actual: usize },

    /// Plotter grid has no cells.
    #[error("Invalid region grid: {columns}x{rows}")]
    InvalidGrid { columns: usize, rows: usize },

    /// Fractional region placement is outside the unit square.
    #[error("Invalid region placement: x={x}, y={y}, w={w}, h={h}")]
    InvalidPlacement { x: f64, y: f64, w: f64, h: f64 },

    /// Region index is out of range.
    #[error("Region {index} out of range ({count} regions)")]
    RegionOutOfRange { index: usize, count: usize },

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// Failed to read an input file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input.
    #[error("{path}:{line}: {message}")]
    Csv {
        path: PathBuf,
        line: usize,
        message: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create an UnknownParameter error.
    pub fn unknown_parameter(name: impl Into<String>) -> Self {
        Self::UnknownParameter { name: name.into() }
    }

    /// Create an InvalidParameterValue error.
    pub fn invalid_value(
        name: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidParameterValue {
            name: name.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }
}
