//! Object identity and the plottable abstraction.

use super::{DataPointSet, Function, Histogram1D, Histogram2D};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OBJECT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of an analysis object.
///
/// Assigned at construction and shared by clones, so a snapshot taken by a
/// region still refers to the object it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Allocate a fresh identity.
    pub fn next() -> Self {
        Self(NEXT_OBJECT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Common contract of binned histograms.
pub trait BaseHistogram {
    /// Histogram title.
    fn title(&self) -> &str;

    /// Change the histogram title.
    fn set_title(&mut self, title: &str);

    /// Number of binned coordinates.
    fn dimension(&self) -> usize;

    /// Entries that landed inside the axis ranges.
    fn entries(&self) -> u64;

    /// Entries that landed in underflow or overflow.
    fn extra_entries(&self) -> u64;

    /// Total number of fills.
    fn all_entries(&self) -> u64 {
        self.entries() + self.extra_entries()
    }

    /// Drop all contents, keeping the binning.
    fn reset(&mut self);
}

/// Owned snapshot of something a region can draw.
#[derive(Debug, Clone)]
pub enum PlotObject {
    /// One-dimensional histogram.
    Histogram1D(Histogram1D),
    /// Two-dimensional histogram.
    Histogram2D(Histogram2D),
    /// Parametric function of one variable.
    Function(Function),
    /// Set of measured points.
    DataPointSet(DataPointSet),
}

impl PlotObject {
    /// Identity of the underlying object.
    pub fn id(&self) -> ObjectId {
        match self {
            Self::Histogram1D(h) => h.id(),
            Self::Histogram2D(h) => h.id(),
            Self::Function(f) => f.id(),
            Self::DataPointSet(d) => d.id(),
        }
    }

    /// Title of the underlying object.
    pub fn title(&self) -> &str {
        match self {
            Self::Histogram1D(h) => h.title(),
            Self::Histogram2D(h) => h.title(),
            Self::Function(f) => f.title(),
            Self::DataPointSet(d) => d.title(),
        }
    }

    /// Dimension of the scene this object needs: 2 for heatmaps, 1 otherwise.
    pub fn scene_dimension(&self) -> usize {
        match self {
            Self::Histogram2D(_) => 2,
            _ => 1,
        }
    }

    /// Short kind name used in messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Histogram1D(_) => "histogram",
            Self::Histogram2D(_) => "2D histogram",
            Self::Function(_) => "function",
            Self::DataPointSet(_) => "data point set",
        }
    }
}

/// Anything that can be handed to a plotter region.
pub trait Plottable {
    /// Identity used to find the object in a scene.
    fn object_id(&self) -> ObjectId;

    /// Take a snapshot for the scene.
    fn to_plot_object(&self) -> PlotObject;
}

impl Plottable for Histogram1D {
    fn object_id(&self) -> ObjectId {
        self.id()
    }

    fn to_plot_object(&self) -> PlotObject {
        PlotObject::Histogram1D(self.clone())
    }
}

impl Plottable for Histogram2D {
    fn object_id(&self) -> ObjectId {
        self.id()
    }

    fn to_plot_object(&self) -> PlotObject {
        PlotObject::Histogram2D(self.clone())
    }
}

impl Plottable for Function {
    fn object_id(&self) -> ObjectId {
        self.id()
    }

    fn to_plot_object(&self) -> PlotObject {
        PlotObject::Function(self.clone())
    }
}

impl Plottable for DataPointSet {
    fn object_id(&self) -> ObjectId {
        self.id()
    }

    fn to_plot_object(&self) -> PlotObject {
        PlotObject::DataPointSet(self.clone())
    }
}

impl Plottable for PlotObject {
    fn object_id(&self) -> ObjectId {
        self.id()
    }

    fn to_plot_object(&self) -> PlotObject {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_shared_by_clones() {
        let a = Histogram1D::new("a", 10, 0.0, 1.0).unwrap();
        let b = Histogram1D::new("b", 10, 0.0, 1.0).unwrap();
        assert_ne!(a.object_id(), b.object_id());
        assert_eq!(a.clone().object_id(), a.object_id());
        assert_eq!(a.to_plot_object().id(), a.object_id());
    }

    #[test]
    fn scene_dimension_only_two_for_heatmaps() {
        let h2 = Histogram2D::new("h2", 4, 0.0, 1.0, 4, 0.0, 1.0).unwrap();
        let f = Function::from_codelet("g", "G").unwrap();
        assert_eq!(h2.to_plot_object().scene_dimension(), 2);
        assert_eq!(f.to_plot_object().scene_dimension(), 1);
    }
}
