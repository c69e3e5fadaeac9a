//! Analysis objects that can be plotted in a region.
//!
//! This module holds the histograms, functions and data point sets a
//! region renders, along with the identity scheme the region uses to
//! recognise an object when it is plotted again or removed.

mod axis;
mod data_point_set;
mod function;
mod histogram;
mod histogram2d;
mod object;

pub use axis::{BinIndex, FixedAxis};
pub use data_point_set::{DataPoint, DataPointSet, Measurement};
pub use function::{Function, FunctionKind};
pub use histogram::Histogram1D;
pub use histogram2d::Histogram2D;
pub use object::{BaseHistogram, ObjectId, PlotObject, Plottable};
