//! plotregion - terminal plotter regions.
//!
//! A plotter region is a sub-area of a plotting canvas that manages one
//! scene: the histograms, functions and data point sets plotted in it, the
//! style they are drawn with, axis limits, a layout and an info area with
//! legends and statistics. Regions render to a terminal with `ratatui`.
//!
//! # Features
//!
//! - 1D and 2D histograms, parametric functions and data point sets
//! - Overlay or replace plotting, removal and clearing
//! - String-keyed parameters, styles and layout
//! - Linear and logarithmic axes with automatic or fixed limits
//! - Legend, statistics and free text in the info area
//! - Gruvbox color themes and heatmap colormaps
//!
//! # Example
//!
//! ```
//! use plotregion::analysis::Histogram1D;
//! use plotregion::region::{PlotterRegion, Region};
//! use plotregion::render::render_to_string;
//!
//! let mut hist = Histogram1D::new("energy", 20, 0.0, 10.0)?;
//! hist.fill(4.2, 1.0);
//!
//! let mut region = Region::new();
//! region.set_title("Run 1");
//! region.plot(&hist, "")?;
//!
//! let text = render_to_string(&region, 80, 20);
//! assert!(text.contains("Run 1"));
//! # Ok::<(), plotregion::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod plotter;
pub mod reader;
pub mod region;
pub mod render;
pub mod style;
pub mod ui;

pub use error::{PlotError, Result};
