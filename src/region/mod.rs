//! Plotter regions.
//!
//! A region is a scene manager for one sub-area of a plotter. It keeps the
//! list of plotted objects together with everything that controls how they
//! look: a title, a style block, axis limits, a layout and an info area.
//!
//! [`PlotterRegion`] is the contract. [`Region`] implements it for the
//! terminal renderer in [`crate::render`].

mod info;
mod layout;
mod limits;
mod options;
mod parameters;
mod scene;

pub use info::{Info, LegendEntry, LegendSymbol};
pub use layout::{InfoPosition, PlotterLayout, DEFAULT_INFO_WIDTH};
pub use limits::AxisLimits;
pub use options::{PlotMode, PlotOptions};
pub use parameters::{
    AxisScale, RegionParameters, DEFAULT_FUNCTION_SAMPLES, MAX_FUNCTION_SAMPLES,
    PARAMETER_NAMES,
};
pub use scene::{Region, SceneEntry};

use crate::analysis::Plottable;
use crate::error::Result;
use crate::style::PlotterStyle;

/// User-level interface to a plotter region.
///
/// Mutating operations either succeed or return an error and leave the
/// region untouched.
pub trait PlotterRegion {
    /// Add an object to the scene.
    ///
    /// `options` is a `key=value` list, see [`PlotOptions`]. Plotting an
    /// object that is already in the scene refreshes its snapshot in place.
    fn plot(&mut self, object: &dyn Plottable, options: &str) -> Result<()>;

    /// Add an object drawn with its own style, layered over the region style.
    fn plot_with_style(
        &mut self,
        object: &dyn Plottable,
        style: &PlotterStyle,
        options: &str,
    ) -> Result<()>;

    /// Remove a previously plotted object.
    fn remove(&mut self, object: &dyn Plottable) -> Result<()>;

    /// Remove every object from the scene.
    fn clear(&mut self);

    /// Set a region parameter. An empty value restores its default.
    fn set_parameter(&mut self, parameter: &str, options: &str) -> Result<()>;

    /// Current value of a parameter.
    fn parameter_value(&self, parameter: &str) -> Option<String>;

    /// Accepted values of a parameter.
    fn available_parameter_options(&self, parameter: &str) -> Vec<String>;

    /// Every parameter name.
    fn available_parameters(&self) -> Vec<String>;

    /// The region style.
    fn style(&mut self) -> &mut PlotterStyle;

    /// Replace the region style. Per-object styles are kept.
    fn set_style(&mut self, style: &PlotterStyle) -> Result<()>;

    /// Replace the region style and drop per-object styles.
    fn apply_style(&mut self, style: &PlotterStyle) -> Result<()>;

    /// Set the region title.
    fn set_title(&mut self, title: &str);

    /// Set the x range. `(0, 0)` restores automatic limits.
    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Set the y range. `(0, 0)` restores automatic limits.
    fn set_y_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// Set the color range of 2D plots. `(0, 0)` restores automatic limits.
    fn set_z_limits(&mut self, min: f64, max: f64) -> Result<()>;

    /// The region layout.
    fn layout(&mut self) -> &mut PlotterLayout;

    /// Replace the region layout.
    fn set_layout(&mut self, layout: &PlotterLayout) -> Result<()>;

    /// The info area.
    fn info(&mut self) -> &mut Info;
}
