//! The terminal scene manager.

use super::{
    AxisLimits, AxisScale, Info, PlotMode, PlotOptions, PlotterLayout, PlotterRegion,
    RegionParameters, PARAMETER_NAMES,
};
use crate::analysis::{ObjectId, PlotObject, Plottable};
use crate::error::{PlotError, Result};
use crate::style::PlotterStyle;

/// One plotted object.
#[derive(Debug, Clone)]
pub struct SceneEntry {
    /// Snapshot of the object at plot time.
    pub object: PlotObject,
    /// Style given with the object, layered over the region style.
    pub style: Option<PlotterStyle>,
    /// Options given with the object.
    pub options: PlotOptions,
}

impl SceneEntry {
    /// Text used for this entry in legends.
    pub fn legend(&self) -> &str {
        self.options
            .legend
            .as_deref()
            .unwrap_or_else(|| self.object.title())
    }
}

/// A plotter region rendered on the terminal.
#[derive(Debug, Clone, Default)]
pub struct Region {
    title: String,
    style: PlotterStyle,
    layout: PlotterLayout,
    info: Info,
    parameters: RegionParameters,
    x_limits: AxisLimits,
    y_limits: AxisLimits,
    z_limits: AxisLimits,
    entries: Vec<SceneEntry>,
}

impl Region {
    /// Create an empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Region title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Plotted objects, in plot order.
    pub fn entries(&self) -> &[SceneEntry] {
        &self.entries
    }

    /// Whether nothing is plotted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `object` is in the scene.
    pub fn contains(&self, object: &dyn Plottable) -> bool {
        self.position(object.object_id()).is_some()
    }

    /// Typed parameters.
    pub fn parameters(&self) -> &RegionParameters {
        &self.parameters
    }

    /// Region style, read-only.
    pub fn region_style(&self) -> &PlotterStyle {
        &self.style
    }

    /// Region layout, read-only.
    pub fn region_layout(&self) -> &PlotterLayout {
        &self.layout
    }

    /// Info area, read-only.
    pub fn region_info(&self) -> &Info {
        &self.info
    }

    /// X limits.
    pub fn x_limits(&self) -> AxisLimits {
        self.x_limits
    }

    /// Y limits.
    pub fn y_limits(&self) -> AxisLimits {
        self.y_limits
    }

    /// Z limits.
    pub fn z_limits(&self) -> AxisLimits {
        self.z_limits
    }

    /// Dimension of the current scene, `None` when empty.
    pub fn scene_dimension(&self) -> Option<usize> {
        self.entries.first().map(|e| e.object.scene_dimension())
    }

    /// Style an entry is drawn with.
    pub fn effective_style(&self, entry: &SceneEntry) -> PlotterStyle {
        match &entry.style {
            Some(own) => own.layered_over(&self.style),
            None => self.style.clone(),
        }
    }

    fn position(&self, id: ObjectId) -> Option<usize> {
        self.entries.iter().position(|e| e.object.id() == id)
    }

    fn insert(
        &mut self,
        object: &dyn Plottable,
        style: Option<&PlotterStyle>,
        options: &str,
    ) -> Result<()> {
        let options = PlotOptions::parse(options)?;
        let snapshot = object.to_plot_object();
        let id = snapshot.id();

        if let PlotObject::DataPointSet(dps) = &snapshot {
            if !(1..=2).contains(&dps.dimension()) {
                return Err(PlotError::UnsupportedDimension {
                    kind: snapshot.kind(),
                    dimension: dps.dimension(),
                });
            }
        }

        if options.mode == PlotMode::Overlay {
            let dimension = snapshot.scene_dimension();
            let mut others = self.entries.iter().filter(|e| e.object.id() != id);
            if let Some(other) = others.next() {
                let scene = other.object.scene_dimension();
                if scene != dimension {
                    tracing::warn!(
                        "Rejected {} '{}': region shows {}D content",
                        snapshot.kind(),
                        snapshot.title(),
                        scene
                    );
                    return Err(PlotError::IncompatibleDimension { dimension, scene });
                }
                if dimension == 2 {
                    return Err(PlotError::HeatmapOverlay {
                        title: other.object.title().to_string(),
                    });
                }
            }
        }

        tracing::debug!(
            "Plot {} '{}' ({}) in region '{}' with {:?}",
            snapshot.kind(),
            snapshot.title(),
            id,
            self.title,
            options.mode
        );

        let mut entry = SceneEntry {
            object: snapshot,
            style: style.cloned(),
            options,
        };
        // A refresh keeps the style and legend it was first plotted with.
        if let Some(previous) = self.position(id).map(|idx| &self.entries[idx]) {
            if entry.style.is_none() {
                entry.style = previous.style.clone();
            }
            if entry.options.legend.is_none() {
                entry.options.legend = previous.options.legend.clone();
            }
        }
        if entry.options.mode == PlotMode::Replace {
            self.entries.clear();
        }
        match self.position(id) {
            Some(idx) => self.entries[idx] = entry,
            None => self.entries.push(entry),
        }
        Ok(())
    }

    fn scale_of(&self, axis: char) -> AxisScale {
        match axis {
            'x' => self.parameters.x_scale,
            'y' => self.parameters.y_scale,
            _ => AxisScale::Lin,
        }
    }
}

impl PlotterRegion for Region {
    fn plot(&mut self, object: &dyn Plottable, options: &str) -> Result<()> {
        self.insert(object, None, options)
    }

    fn plot_with_style(
        &mut self,
        object: &dyn Plottable,
        style: &PlotterStyle,
        options: &str,
    ) -> Result<()> {
        self.insert(object, Some(style), options)
    }

    fn remove(&mut self, object: &dyn Plottable) -> Result<()> {
        let id = object.object_id();
        match self.position(id) {
            Some(idx) => {
                let entry = self.entries.remove(idx);
                tracing::debug!("Removed '{}' ({}) from region", entry.object.title(), id);
                Ok(())
            },
            None => Err(PlotError::NotPlotted {
                title: object.to_plot_object().title().to_string(),
            }),
        }
    }

    fn clear(&mut self) {
        tracing::debug!("Cleared {} objects from region '{}'", self.entries.len(), self.title);
        self.entries.clear();
    }

    fn set_parameter(&mut self, parameter: &str, options: &str) -> Result<()> {
        let mut updated = self.parameters.clone();
        updated.set(parameter, options)?;

        // Switching to log must not strand a range that log cannot show.
        for (axis, limits) in [('x', self.x_limits), ('y', self.y_limits)] {
            let scale = if axis == 'x' { updated.x_scale } else { updated.y_scale };
            if !limits.fits_scale(scale) {
                return Err(PlotError::invalid_value(
                    parameter,
                    options,
                    format!("{} limits above zero first", axis),
                ));
            }
        }

        tracing::debug!("Region parameter {}={}", parameter, options);
        self.parameters = updated;
        Ok(())
    }

    fn parameter_value(&self, parameter: &str) -> Option<String> {
        self.parameters.value(parameter)
    }

    fn available_parameter_options(&self, parameter: &str) -> Vec<String> {
        RegionParameters::options(parameter)
    }

    fn available_parameters(&self) -> Vec<String> {
        PARAMETER_NAMES.iter().map(|p| p.to_string()).collect()
    }

    fn style(&mut self) -> &mut PlotterStyle {
        &mut self.style
    }

    fn set_style(&mut self, style: &PlotterStyle) -> Result<()> {
        self.style = style.clone();
        Ok(())
    }

    fn apply_style(&mut self, style: &PlotterStyle) -> Result<()> {
        self.style = style.clone();
        for entry in &mut self.entries {
            entry.style = None;
        }
        tracing::debug!("Applied style to {} objects", self.entries.len());
        Ok(())
    }

    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_x_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.x_limits = AxisLimits::new('x', min, max, self.scale_of('x'))?;
        Ok(())
    }

    fn set_y_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.y_limits = AxisLimits::new('y', min, max, self.scale_of('y'))?;
        Ok(())
    }

    fn set_z_limits(&mut self, min: f64, max: f64) -> Result<()> {
        self.z_limits = AxisLimits::new('z', min, max, self.scale_of('z'))?;
        Ok(())
    }

    fn layout(&mut self) -> &mut PlotterLayout {
        &mut self.layout
    }

    fn set_layout(&mut self, layout: &PlotterLayout) -> Result<()> {
        self.layout = layout.clone();
        Ok(())
    }

    fn info(&mut self) -> &mut Info {
        &mut self.info
    }
}
