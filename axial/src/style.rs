// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis styling: caller layers, built-in defaults, and their merge.
//!
//! An axis is styled through six layers (`parent`, `axis`, `axis_label`, `grid`, `ticks`,
//! `tick_labels`). Each caller layer is merged over the matching layer of a
//! [`DefaultStyleBundle`]; properties the caller sets win, the rest fall back.
//!
//! Paint properties may vary per tick through [`StyleValue::PerTick`]. Such values are only
//! evaluated when the scene is emitted. Properties that drive geometry (`font_size`, `size`,
//! `padding`) are plain numbers.

extern crate alloc;

use alloc::sync::Arc;
use core::fmt;

use kurbo::Cap;
use peniko::{Brush, Color};

use crate::AxisConfig;

/// A style property that is either fixed or computed from the tick value.
#[derive(Clone)]
pub enum StyleValue<T> {
    /// The same value for every tick.
    Static(T),
    /// A value computed from each tick's domain value.
    PerTick(Arc<dyn Fn(f64) -> T>),
}

impl<T: Clone> StyleValue<T> {
    /// Wraps a per-tick function.
    pub fn per_tick(f: impl Fn(f64) -> T + 'static) -> Self {
        Self::PerTick(Arc::new(f))
    }

    /// Evaluates the value for `tick`.
    pub fn resolve(&self, tick: f64) -> T {
        match self {
            Self::Static(v) => v.clone(),
            Self::PerTick(f) => f(tick),
        }
    }

    /// Returns the value if it does not depend on the tick.
    pub fn resolve_static(&self) -> Option<T> {
        match self {
            Self::Static(v) => Some(v.clone()),
            Self::PerTick(_) => None,
        }
    }
}

impl<T> From<T> for StyleValue<T> {
    fn from(value: T) -> Self {
        Self::Static(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for StyleValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(v) => f.debug_tuple("Static").field(v).finish(),
            Self::PerTick(_) => f.write_str("PerTick(..)"),
        }
    }
}

/// One layer of style properties. Every property is optional.
#[derive(Clone, Debug, Default)]
pub struct StyleLayer {
    /// Stroke paint.
    pub stroke: Option<StyleValue<Brush>>,
    /// Fill paint.
    pub fill: Option<StyleValue<Brush>>,
    /// Stroke width.
    pub stroke_width: Option<StyleValue<f64>>,
    /// Opacity in `0..=1`.
    pub opacity: Option<StyleValue<f64>>,
    /// Text rotation in degrees.
    pub angle: Option<StyleValue<f64>>,
    /// Line cap.
    pub stroke_linecap: Option<Cap>,
    /// Font size.
    pub font_size: Option<f64>,
    /// Font family.
    pub font_family: Option<Arc<str>>,
    /// Spacing: tick to tick label, or axis to axis label.
    pub padding: Option<f64>,
    /// Tick length.
    pub size: Option<f64>,
}

impl StyleLayer {
    /// An empty layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a static stroke paint.
    pub fn with_stroke(mut self, brush: impl Into<Brush>) -> Self {
        self.stroke = Some(StyleValue::Static(brush.into()));
        self
    }

    /// Sets a per-tick stroke paint.
    pub fn with_stroke_fn(mut self, f: impl Fn(f64) -> Brush + 'static) -> Self {
        self.stroke = Some(StyleValue::per_tick(f));
        self
    }

    /// Sets a static fill paint.
    pub fn with_fill(mut self, brush: impl Into<Brush>) -> Self {
        self.fill = Some(StyleValue::Static(brush.into()));
        self
    }

    /// Sets a per-tick fill paint.
    pub fn with_fill_fn(mut self, f: impl Fn(f64) -> Brush + 'static) -> Self {
        self.fill = Some(StyleValue::per_tick(f));
        self
    }

    /// Sets a static stroke width.
    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(StyleValue::Static(width));
        self
    }

    /// Sets a per-tick stroke width.
    pub fn with_stroke_width_fn(mut self, f: impl Fn(f64) -> f64 + 'static) -> Self {
        self.stroke_width = Some(StyleValue::per_tick(f));
        self
    }

    /// Sets a static opacity.
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(StyleValue::Static(opacity));
        self
    }

    /// Sets a per-tick opacity.
    pub fn with_opacity_fn(mut self, f: impl Fn(f64) -> f64 + 'static) -> Self {
        self.opacity = Some(StyleValue::per_tick(f));
        self
    }

    /// Sets a static text rotation in degrees.
    pub fn with_angle(mut self, degrees: f64) -> Self {
        self.angle = Some(StyleValue::Static(degrees));
        self
    }

    /// Sets the line cap.
    pub fn with_stroke_linecap(mut self, cap: Cap) -> Self {
        self.stroke_linecap = Some(cap);
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = Some(font_size);
        self
    }

    /// Sets the font family.
    pub fn with_font_family(mut self, family: impl Into<Arc<str>>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// Sets the padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = Some(padding);
        self
    }

    /// Sets the tick length.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Returns this layer with unset properties taken from `base`.
    pub fn merged_over(&self, base: &Self) -> Self {
        Self {
            stroke: self.stroke.clone().or_else(|| base.stroke.clone()),
            fill: self.fill.clone().or_else(|| base.fill.clone()),
            stroke_width: self
                .stroke_width
                .clone()
                .or_else(|| base.stroke_width.clone()),
            opacity: self.opacity.clone().or_else(|| base.opacity.clone()),
            angle: self.angle.clone().or_else(|| base.angle.clone()),
            stroke_linecap: self.stroke_linecap.or(base.stroke_linecap),
            font_size: self.font_size.or(base.font_size),
            font_family: self
                .font_family
                .clone()
                .or_else(|| base.font_family.clone()),
            padding: self.padding.or(base.padding),
            size: self.size.or(base.size),
        }
    }

    /// Evaluates the stroke paint of one tick.
    ///
    /// Returns `None` when the layer has no stroke or no stroke width.
    pub fn stroke_at(&self, tick: f64) -> Option<StrokeStyle> {
        let brush = self.stroke.as_ref()?.resolve(tick);
        let stroke_width = self.stroke_width.as_ref()?.resolve(tick);
        Some(StrokeStyle {
            brush: apply_opacity(brush, self.opacity.as_ref().map(|o| o.resolve(tick))),
            stroke_width,
            cap: self.stroke_linecap.unwrap_or(Cap::Butt),
        })
    }

    /// Evaluates the text paint of one tick.
    ///
    /// A layer without a fill paints text black.
    pub fn text_at(&self, tick: f64) -> TextStyle {
        let fill = self
            .fill
            .as_ref()
            .map_or(Brush::Solid(Color::BLACK), |f| f.resolve(tick));
        TextStyle {
            fill: apply_opacity(fill, self.opacity.as_ref().map(|o| o.resolve(tick))),
            font_size: self.font_size.unwrap_or(0.0),
            font_family: self.font_family.clone(),
        }
    }

    /// Evaluates a layer that does not belong to a tick.
    ///
    /// Per-tick values have no tick to evaluate against here and are treated as unset.
    pub(crate) fn without_per_tick(&self, role: &str) -> Self {
        fn keep<T: Clone>(
            v: &Option<StyleValue<T>>,
            role: &str,
            name: &str,
        ) -> Option<StyleValue<T>> {
            match v {
                Some(StyleValue::PerTick(_)) => {
                    tracing::warn!(role, property = name, "per-tick style outside a tick, ignored");
                    None
                }
                other => other.clone(),
            }
        }
        Self {
            stroke: keep(&self.stroke, role, "stroke"),
            fill: keep(&self.fill, role, "fill"),
            stroke_width: keep(&self.stroke_width, role, "stroke_width"),
            opacity: keep(&self.opacity, role, "opacity"),
            angle: keep(&self.angle, role, "angle"),
            ..self.clone()
        }
    }
}

fn apply_opacity(brush: Brush, opacity: Option<f64>) -> Brush {
    match opacity {
        #[allow(clippy::cast_possible_truncation, reason = "opacity is clamped to 0..=1")]
        Some(o) if o < 1.0 => brush.multiply_alpha(o.clamp(0.0, 1.0) as f32),
        _ => brush,
    }
}

/// An evaluated stroke paint.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Line cap.
    pub cap: Cap,
}

impl StrokeStyle {
    /// Convenience for a solid stroke with butt caps.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            cap: Cap::Butt,
        }
    }
}

/// An evaluated text paint.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Fill paint.
    pub fill: Brush,
    /// Font size.
    pub font_size: f64,
    /// Font family, if any.
    pub font_family: Option<Arc<str>>,
}

/// Caller style overrides for every axis layer.
#[derive(Clone, Debug, Default)]
pub struct AxisStyleSpec {
    /// The outer canvas.
    pub parent: StyleLayer,
    /// The axis line.
    pub axis: StyleLayer,
    /// The axis title.
    pub axis_label: StyleLayer,
    /// Gridlines.
    pub grid: StyleLayer,
    /// Tick lines.
    pub ticks: StyleLayer,
    /// Tick labels.
    pub tick_labels: StyleLayer,
}

impl AxisStyleSpec {
    /// Empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas layer.
    pub fn with_parent(mut self, layer: StyleLayer) -> Self {
        self.parent = layer;
        self
    }

    /// Sets the axis-line layer.
    pub fn with_axis(mut self, layer: StyleLayer) -> Self {
        self.axis = layer;
        self
    }

    /// Sets the axis-title layer.
    pub fn with_axis_label(mut self, layer: StyleLayer) -> Self {
        self.axis_label = layer;
        self
    }

    /// Sets the gridline layer.
    pub fn with_grid(mut self, layer: StyleLayer) -> Self {
        self.grid = layer;
        self
    }

    /// Sets the tick-line layer.
    pub fn with_ticks(mut self, layer: StyleLayer) -> Self {
        self.ticks = layer;
        self
    }

    /// Sets the tick-label layer.
    pub fn with_tick_labels(mut self, layer: StyleLayer) -> Self {
        self.tick_labels = layer;
        self
    }
}

/// The built-in style defaults, one layer per role.
#[derive(Clone, Debug)]
pub struct DefaultStyleBundle {
    /// Layers in the same shape as caller overrides.
    pub layers: AxisStyleSpec,
}

impl Default for DefaultStyleBundle {
    fn default() -> Self {
        let ink = Color::from_rgb8(0x75, 0x6f, 0x6a);
        let grid = Color::from_rgb8(0xc9, 0xc5, 0xbb);
        let font: Arc<str> = Arc::from("Helvetica");
        Self {
            layers: AxisStyleSpec {
                parent: StyleLayer::new(),
                axis: StyleLayer::new()
                    .with_stroke(ink)
                    .with_stroke_width(2.0)
                    .with_stroke_linecap(Cap::Round),
                axis_label: StyleLayer::new()
                    .with_fill(ink)
                    .with_font_size(16.0)
                    .with_font_family(font.clone()),
                grid: StyleLayer::new()
                    .with_stroke(grid)
                    .with_stroke_width(0.0)
                    .with_stroke_linecap(Cap::Round),
                ticks: StyleLayer::new()
                    .with_stroke(ink)
                    .with_stroke_width(2.0)
                    .with_stroke_linecap(Cap::Round)
                    .with_size(4.0)
                    .with_padding(5.0),
                tick_labels: StyleLayer::new()
                    .with_fill(ink)
                    .with_font_size(10.0)
                    .with_font_family(font)
                    .with_padding(5.0),
            },
        }
    }
}

/// The canvas layer plus the canvas size.
#[derive(Clone, Debug)]
pub struct ParentStyle {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Canvas paint.
    pub layer: StyleLayer,
}

/// Fully merged styles for one axis.
#[derive(Clone, Debug)]
pub struct AxisStyles {
    /// The canvas.
    pub parent: ParentStyle,
    /// The axis line.
    pub axis: StyleLayer,
    /// The axis title.
    pub axis_label: StyleLayer,
    /// Gridlines.
    pub grid: StyleLayer,
    /// Tick lines.
    pub ticks: StyleLayer,
    /// Tick labels.
    pub tick_labels: StyleLayer,
}

impl AxisStyles {
    /// Tick length.
    pub fn tick_size(&self) -> f64 {
        self.ticks.size.unwrap_or(0.0)
    }

    /// Gap between a tick's end and its label.
    pub fn tick_padding(&self) -> f64 {
        self.tick_labels
            .padding
            .or(self.ticks.padding)
            .unwrap_or(0.0)
    }

    /// Font size of the axis title.
    pub fn label_font_size(&self) -> f64 {
        self.axis_label.font_size.unwrap_or(0.0)
    }
}

/// Merges the configured style overrides over `defaults`.
pub fn resolve_styles(config: &AxisConfig, defaults: &DefaultStyleBundle) -> AxisStyles {
    let overrides = &config.style;
    let base = &defaults.layers;
    AxisStyles {
        parent: ParentStyle {
            width: config.width,
            height: config.height,
            layer: overrides.parent.merged_over(&base.parent),
        },
        axis: overrides.axis.merged_over(&base.axis),
        axis_label: overrides.axis_label.merged_over(&base.axis_label),
        grid: overrides.grid.merged_over(&base.grid),
        ticks: overrides.ticks.merged_over(&base.ticks),
        tick_labels: overrides.tick_labels.merged_over(&base.tick_labels),
    }
}
