// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The axis layout pipeline.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Line, Vec2};

use crate::domain::{build_domain, build_range, build_scale};
use crate::geometry::{
    self, GridGeometry, LabelGeometry, TickGeometry, compute_axis_line, compute_grid_geometry,
    compute_label_geometry, compute_offset, compute_tick_geometry, compute_transform,
};
use crate::orient::{Orientation, resolve_orientation};
use crate::padding::{Padding, resolve_padding};
use crate::scale::AxisScale;
use crate::scene::AxisScene;
use crate::style::{AxisStyles, DefaultStyleBundle, resolve_styles};
use crate::ticks::{TickSet, resolve_tick_format, resolve_ticks};
use crate::AxisConfig;

/// Every geometric value of one axis.
///
/// Computed in a single pass from an [`AxisConfig`]; nothing is cached between computations.
#[derive(Debug)]
pub struct AxisLayout {
    /// Effective orientation.
    pub orientation: Orientation,
    /// Resolved canvas padding.
    pub padding: Padding,
    /// Logical domain.
    pub domain: (f64, f64),
    /// Pixel range.
    pub range: (f64, f64),
    /// Resolved ticks.
    pub ticks: TickSet,
    /// Label text per tick.
    pub tick_labels: Vec<String>,
    /// Spacing between the axis and its title.
    pub label_padding: f64,
    /// Offset of the axis line from its edge.
    pub offset: Vec2,
    /// Translation of the axis group on the canvas.
    pub translation: Vec2,
    /// The axis line.
    pub axis_line: Line,
    /// Tick placement, parallel to `ticks`.
    pub tick_geometry: Vec<TickGeometry>,
    /// Gridline placement, parallel to `ticks`.
    pub grid: Vec<GridGeometry>,
    /// Title placement, when the axis has a title.
    pub label: Option<LabelGeometry>,
    label_text: Option<String>,
    standalone: bool,
    styles: AxisStyles,
    scale: Box<dyn AxisScale>,
}

impl AxisLayout {
    /// Lays out an axis with the built-in style defaults.
    pub fn compute(config: &AxisConfig) -> Self {
        Self::compute_with_defaults(config, &DefaultStyleBundle::default())
    }

    /// Lays out an axis, merging its styles over `defaults`.
    pub fn compute_with_defaults(config: &AxisConfig, defaults: &DefaultStyleBundle) -> Self {
        let orientation = resolve_orientation(config);
        let is_vertical = orientation.is_vertical();
        let styles = resolve_styles(config, defaults);
        let padding = resolve_padding(config);

        let domain = build_domain(config, is_vertical);
        let range = build_range(config, &padding, is_vertical);
        let scale = build_scale(config, domain, range);

        let ticks = resolve_ticks(config, scale.as_ref());
        let tick_labels = resolve_tick_format(config, scale.as_ref(), &ticks).format_all(&ticks);

        let label_padding = geometry::label_padding(config, &styles, is_vertical);
        let offset = compute_offset(config, &styles, &padding, orientation, label_padding);
        let translation = compute_transform(offset, orientation, config.width, config.height);
        let axis_line = compute_axis_line(&padding, orientation, config.width, config.height);

        let tick_size = styles.tick_size();
        let tick_padding = styles.tick_padding();
        let tick_geometry = ticks
            .keys()
            .iter()
            .map(|&t| {
                compute_tick_geometry(t, scale.as_ref(), orientation, tick_size, tick_padding)
            })
            .collect();
        let grid = ticks
            .keys()
            .iter()
            .map(|&t| {
                compute_grid_geometry(
                    t,
                    scale.as_ref(),
                    orientation,
                    &padding,
                    config.cross_axis,
                    offset,
                    config.width,
                    config.height,
                )
            })
            .collect();
        let label = config.label.as_ref().map(|_| {
            compute_label_geometry(
                &padding,
                orientation,
                config.width,
                config.height,
                label_padding,
            )
        });

        tracing::debug!(
            ?orientation,
            ?domain,
            ?range,
            ticks = ticks.len(),
            ?translation,
            "axis layout"
        );

        Self {
            orientation,
            padding,
            domain,
            range,
            ticks,
            tick_labels,
            label_padding,
            offset,
            translation,
            axis_line,
            tick_geometry,
            grid,
            label,
            label_text: config.label.clone(),
            standalone: config.standalone,
            styles,
            scale,
        }
    }

    /// Returns `true` for left and right axes.
    pub fn is_vertical(&self) -> bool {
        self.orientation.is_vertical()
    }

    /// The group transform.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.translation)
    }

    /// The configured scale with this layout's domain and range applied.
    pub fn scale(&self) -> &dyn AxisScale {
        self.scale.as_ref()
    }

    /// Label text of the tick at `index`.
    pub fn tick_label(&self, index: usize) -> Option<&str> {
        self.tick_labels.get(index).map(String::as_str)
    }

    /// The title text.
    pub fn label_text(&self) -> Option<&str> {
        self.label_text.as_deref()
    }

    /// Whether the scene is wrapped in a canvas.
    pub fn standalone(&self) -> bool {
        self.standalone
    }

    /// Merged styles.
    pub fn styles(&self) -> &AxisStyles {
        &self.styles
    }

    /// Emits the renderable scene.
    pub fn scene(&self) -> AxisScene {
        AxisScene::from_layout(self)
    }
}
