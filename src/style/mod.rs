//! Style blocks for the parts of a plotting scene.
//!
//! A scene is split into coarse parts (data, axes, title, info area). Each
//! part has a style made of atomic styles for lines, markers, fills and
//! text. [`PlotterStyle`] bundles all of them into one customization block.
//!
//! Every style exposes the same string-keyed parameter surface through
//! [`BaseStyle`]. Composite styles route dotted paths such as
//! `dataStyle.lineStyle.color` to the part that owns the parameter.
//!
//! Fields are optional. Unset fields fall through to the style the block is
//! layered over, and in the end to theme defaults at render time.

mod atomic;
mod base;
mod parts;
mod plotter_style;

pub use atomic::{FillStyle, LineStyle, LineType, MarkerShape, MarkerStyle, TextStyle};
pub use base::{color_name, parse_bool, parse_color, BaseStyle, BOOL_OPTIONS};
pub use parts::{AxisStyle, DataStyle, InfoStyle, TitleStyle};
pub use plotter_style::PlotterStyle;
