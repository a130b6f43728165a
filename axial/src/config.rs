// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis configuration surface.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::error::AxisConfigError;
use crate::layout::AxisLayout;
use crate::padding::{PaddingSpec, Side, resolve_padding};
use crate::scale::{AxisScale, ScaleLinear};
use crate::scene::AxisScene;
use crate::style::AxisStyleSpec;
use crate::ticks::{TickFormat, TickValues};
use crate::Orientation;

/// A declarative axis description.
///
/// Built with [`AxisConfig::new`] and the `with_*` methods. A config is never mutated by
/// layout; each call to [`AxisConfig::layout`] computes everything afresh.
#[derive(Clone)]
pub struct AxisConfig {
    /// Which edge the axis sits on. `None` picks from [`AxisConfig::dependent_axis`].
    pub orientation: Option<Orientation>,
    /// Hint that this is the dependent (value) axis; it then defaults to the left edge.
    pub dependent_axis: bool,
    /// Explicit `(start, end)` domain, used as given.
    pub domain: Option<(f64, f64)>,
    /// Explicit tick values.
    pub tick_values: Option<TickValues>,
    /// Approximate number of generated ticks. Ignored when tick values are given.
    pub tick_count: usize,
    /// Explicit tick label format.
    pub tick_format: Option<TickFormat>,
    /// The scale prototype. Layout works on a copy.
    pub scale: Arc<dyn AxisScale>,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Canvas padding.
    pub padding: PaddingSpec,
    /// Explicit x offset of the axis line from its edge.
    pub offset_x: Option<f64>,
    /// Explicit y offset of the axis line from its edge.
    pub offset_y: Option<f64>,
    /// Axis title. `\n` starts a new line.
    pub label: Option<String>,
    /// Explicit spacing between the axis and its title.
    pub label_padding: Option<f64>,
    /// Whether this axis crosses another one inside the plot.
    pub cross_axis: bool,
    /// Style overrides.
    pub style: AxisStyleSpec,
    /// Whether the scene is wrapped in its own canvas.
    pub standalone: bool,
}

impl Default for AxisConfig {
    fn default() -> Self {
        Self {
            orientation: None,
            dependent_axis: false,
            domain: None,
            tick_values: None,
            tick_count: 5,
            tick_format: None,
            scale: Arc::new(ScaleLinear::default()),
            width: 450.0,
            height: 300.0,
            padding: PaddingSpec::default(),
            offset_x: None,
            offset_y: None,
            label: None,
            label_padding: None,
            cross_axis: false,
            style: AxisStyleSpec::default(),
            standalone: true,
        }
    }
}

impl fmt::Debug for AxisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AxisConfig")
            .field("orientation", &self.orientation)
            .field("dependent_axis", &self.dependent_axis)
            .field("domain", &self.domain)
            .field("tick_values", &self.tick_values)
            .field("tick_count", &self.tick_count)
            .field("tick_format", &self.tick_format)
            .field("scale", &self.scale)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("label", &self.label)
            .field("label_padding", &self.label_padding)
            .field("cross_axis", &self.cross_axis)
            .field("style", &self.style)
            .field("standalone", &self.standalone)
            .finish()
    }
}

impl AxisConfig {
    /// Creates a config with the defaults: a bottom axis on a 450 × 300 canvas with 50 padding,
    /// five ticks, and a unit linear scale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the orientation.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Marks this as the dependent axis.
    pub fn with_dependent_axis(mut self, dependent_axis: bool) -> Self {
        self.dependent_axis = dependent_axis;
        self
    }

    /// Sets an explicit domain.
    pub fn with_domain(mut self, domain: (f64, f64)) -> Self {
        self.domain = Some(domain);
        self
    }

    /// Sets explicit tick values.
    pub fn with_tick_values(mut self, values: impl Into<TickValues>) -> Self {
        self.tick_values = Some(values.into());
        self
    }

    /// Sets the approximate number of generated ticks.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Sets the tick label format.
    pub fn with_tick_format(mut self, format: TickFormat) -> Self {
        self.tick_format = Some(format);
        self
    }

    /// Sets the scale prototype.
    pub fn with_scale(mut self, scale: impl AxisScale + 'static) -> Self {
        self.scale = Arc::new(scale);
        self
    }

    /// Sets a shared scale prototype.
    pub fn with_shared_scale(mut self, scale: Arc<dyn AxisScale>) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the canvas width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    /// Sets the canvas height.
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    /// Sets the canvas padding.
    pub fn with_padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Sets the x offset of the axis line.
    pub fn with_offset_x(mut self, offset_x: f64) -> Self {
        self.offset_x = Some(offset_x);
        self
    }

    /// Sets the y offset of the axis line.
    pub fn with_offset_y(mut self, offset_y: f64) -> Self {
        self.offset_y = Some(offset_y);
        self
    }

    /// Sets the axis title.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the spacing between the axis and its title.
    pub fn with_label_padding(mut self, label_padding: f64) -> Self {
        self.label_padding = Some(label_padding);
        self
    }

    /// Marks this axis as crossing another one.
    pub fn with_cross_axis(mut self, cross_axis: bool) -> Self {
        self.cross_axis = cross_axis;
        self
    }

    /// Sets the style overrides.
    pub fn with_style(mut self, style: AxisStyleSpec) -> Self {
        self.style = style;
        self
    }

    /// Sets whether the scene gets its own canvas.
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Checks the config for input that layout would only warn about.
    ///
    /// Layout never requires this; it is for callers that prefer to reject bad input.
    /// Reversed explicit domains are valid.
    pub fn validate(&self) -> Result<(), AxisConfigError> {
        if !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(AxisConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        let padding = resolve_padding(self);
        for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
            let value = padding.side(side);
            if !value.is_finite() || value < 0.0 {
                return Err(AxisConfigError::InvalidPadding { side, value });
            }
        }

        if let Some((min, max)) = self.domain
            && (!min.is_finite() || !max.is_finite() || min == max)
        {
            return Err(AxisConfigError::DegenerateDomain { min, max });
        }

        if self.tick_count == 0 {
            return Err(AxisConfigError::ZeroTickCount);
        }

        if let Some(values) = &self.tick_values {
            if values.is_empty() {
                return Err(AxisConfigError::EmptyTickValues);
            }
            if let Some(TickFormat::Labels(labels)) = &self.tick_format
                && labels.len() < values.len()
            {
                return Err(AxisConfigError::TickFormatTooShort {
                    labels: labels.len(),
                    ticks: values.len(),
                });
            }
        }
        Ok(())
    }

    /// Computes the axis layout.
    pub fn layout(&self) -> AxisLayout {
        AxisLayout::compute(self)
    }

    /// Computes the layout and emits its scene.
    pub fn scene(&self) -> AxisScene {
        self.layout().scene()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::Padding;
    use alloc::vec;

    #[test]
    fn defaults_validate() {
        assert_eq!(AxisConfig::new().validate(), Ok(()));
    }

    #[test]
    fn reversed_domains_are_valid() {
        let config = AxisConfig::new().with_domain((10.0, 0.0));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn validate_reports_bad_input() {
        assert_eq!(
            AxisConfig::new().with_width(0.0).validate(),
            Err(AxisConfigError::InvalidDimensions {
                width: 0.0,
                height: 300.0
            })
        );
        assert_eq!(
            AxisConfig::new()
                .with_padding(Padding::new(0.0, -1.0, 0.0, 0.0))
                .validate(),
            Err(AxisConfigError::InvalidPadding {
                side: Side::Bottom,
                value: -1.0
            })
        );
        assert_eq!(
            AxisConfig::new().with_domain((3.0, 3.0)).validate(),
            Err(AxisConfigError::DegenerateDomain { min: 3.0, max: 3.0 })
        );
        assert_eq!(
            AxisConfig::new().with_tick_count(0).validate(),
            Err(AxisConfigError::ZeroTickCount)
        );
        assert_eq!(
            AxisConfig::new()
                .with_tick_values(TickValues::Numeric(vec![]))
                .validate(),
            Err(AxisConfigError::EmptyTickValues)
        );
        assert_eq!(
            AxisConfig::new()
                .with_tick_values(vec![1.0, 2.0, 3.0])
                .with_tick_format(TickFormat::labels(["a"]))
                .validate(),
            Err(AxisConfigError::TickFormatTooShort {
                labels: 1,
                ticks: 3
            })
        );
    }

    #[test]
    fn errors_render_readable_messages() {
        let err = AxisConfigError::InvalidPadding {
            side: Side::Left,
            value: -2.0,
        };
        assert_eq!(
            alloc::format!("{err}"),
            "padding on the left side must be finite and non-negative, got -2"
        );
    }
}
