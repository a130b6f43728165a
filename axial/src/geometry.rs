// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis geometry.
//!
//! Everything here is expressed in the axis group's own coordinate space: the axis line runs
//! along `y = 0` (horizontal axes) or `x = 0` (vertical axes), and the group is positioned on
//! the canvas by [`compute_transform`]. Perpendicular quantities are multiplied by
//! [`Orientation::sign`] so they point away from the plot.

use kurbo::{Line, Point, Vec2};

use crate::scale::AxisScale;
use crate::style::AxisStyles;
use crate::{AxisConfig, Orientation, Padding};

/// Horizontal text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

/// Vertical text alignment relative to the anchor point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VerticalAnchor {
    /// The top of the text is at the anchor.
    Start,
    /// The text is vertically centered on the anchor.
    Middle,
    /// The bottom of the text is at the anchor.
    End,
}

/// Placement of one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TickGeometry {
    /// Position along the axis.
    pub position: f64,
    /// Tick line from its origin on the axis.
    pub line_vector: Vec2,
    /// Label anchor from the tick origin.
    pub label_offset: Vec2,
    /// Horizontal label alignment.
    pub anchor: TextAnchor,
    /// Vertical label alignment.
    pub vertical_anchor: VerticalAnchor,
    vertical: bool,
}

impl TickGeometry {
    /// The point on the axis line where the tick starts.
    pub fn origin(&self) -> Point {
        along(self.position, 0.0, self.vertical)
    }

    /// The tick line.
    pub fn line(&self) -> Line {
        let origin = self.origin();
        Line::new(origin, origin + self.line_vector)
    }

    /// The label anchor point.
    pub fn label_point(&self) -> Point {
        self.origin() + self.label_offset
    }
}

/// Placement of one gridline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridGeometry {
    /// Position along the axis.
    pub position: f64,
    /// Perpendicular distance from the axis line to the start of the gridline.
    pub start: f64,
    /// Signed perpendicular length; negative values point into the plot for bottom and right
    /// axes.
    pub length: f64,
    vertical: bool,
}

impl GridGeometry {
    /// The gridline.
    pub fn line(&self) -> Line {
        Line::new(
            along(self.position, self.start, self.vertical),
            along(self.position, self.start + self.length, self.vertical),
        )
    }
}

/// Placement of the axis title.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelGeometry {
    /// Anchor point.
    pub position: Point,
    /// Rotation in degrees.
    pub angle: f64,
    /// Horizontal alignment.
    pub anchor: TextAnchor,
    /// Vertical alignment.
    pub vertical_anchor: VerticalAnchor,
}

fn along(position: f64, perpendicular: f64, vertical: bool) -> Point {
    if vertical {
        Point::new(perpendicular, position)
    } else {
        Point::new(position, perpendicular)
    }
}

fn perpendicular(amount: f64, vertical: bool) -> Vec2 {
    if vertical {
        Vec2::new(amount, 0.0)
    } else {
        Vec2::new(0.0, amount)
    }
}

/// Spacing between the axis and its title.
///
/// An explicit label padding wins, then the title style's `padding`. Without either, a titled
/// axis reserves 2.3 (vertical) or 1.6 (horizontal) title font sizes; an untitled one none.
pub fn label_padding(config: &AxisConfig, styles: &AxisStyles, is_vertical: bool) -> f64 {
    if let Some(padding) = config.label_padding.or(styles.axis_label.padding) {
        return padding;
    }
    if config.label.is_none() {
        return 0.0;
    }
    let factor = if is_vertical { 2.3 } else { 1.6 };
    styles.label_font_size() * factor
}

/// Offset of the axis line from its canvas edge.
///
/// The component across the axis makes room for the title font, ticks on both sides and the
/// label padding; the component along it is 1.2 title font sizes. Each component is replaced
/// by the governing edge padding when that padding is non-zero, and an explicit
/// `offset_x`/`offset_y` replaces everything.
pub fn compute_offset(
    config: &AxisConfig,
    styles: &AxisStyles,
    padding: &Padding,
    orientation: Orientation,
    label_padding: f64,
) -> Vec2 {
    let font_size = styles.label_font_size();
    let total = font_size + 2.0 * styles.tick_size() + label_padding;
    let minimum = 1.2 * font_size;
    let (computed_x, computed_y) = if orientation.is_vertical() {
        (total, minimum)
    } else {
        (minimum, total)
    };

    let pick = |explicit: Option<f64>, edge: f64, computed: f64| {
        explicit.unwrap_or(if edge != 0.0 { edge } else { computed })
    };
    Vec2::new(
        pick(config.offset_x, padding.x_edge(orientation), computed_x),
        pick(config.offset_y, padding.y_edge(orientation), computed_y),
    )
}

/// Translation of the axis group on the canvas.
pub fn compute_transform(offset: Vec2, orientation: Orientation, width: f64, height: f64) -> Vec2 {
    match orientation {
        Orientation::Top => Vec2::new(0.0, offset.y),
        Orientation::Bottom => Vec2::new(0.0, height - offset.y),
        Orientation::Left => Vec2::new(offset.x, 0.0),
        Orientation::Right => Vec2::new(width - offset.x, 0.0),
    }
}

/// The axis line, spanning the padded extent of the canvas.
pub fn compute_axis_line(
    padding: &Padding,
    orientation: Orientation,
    width: f64,
    height: f64,
) -> Line {
    if orientation.is_vertical() {
        Line::new((0.0, padding.top), (0.0, height - padding.bottom))
    } else {
        Line::new((padding.left, 0.0), (width - padding.right, 0.0))
    }
}

fn tick_position(tick: f64, scale: &dyn AxisScale) -> f64 {
    let position = scale.map(tick);
    match scale.range_band() {
        Some(band) => position + band / 2.0,
        None => position,
    }
}

/// Places one tick and its label.
pub fn compute_tick_geometry(
    tick: f64,
    scale: &dyn AxisScale,
    orientation: Orientation,
    tick_size: f64,
    tick_padding: f64,
) -> TickGeometry {
    let sign = orientation.sign();
    let vertical = orientation.is_vertical();
    let (anchor, vertical_anchor) = if vertical {
        let anchor = if sign < 0.0 {
            TextAnchor::End
        } else {
            TextAnchor::Start
        };
        (anchor, VerticalAnchor::Middle)
    } else {
        let vertical_anchor = if sign < 0.0 {
            VerticalAnchor::End
        } else {
            VerticalAnchor::Start
        };
        (TextAnchor::Middle, vertical_anchor)
    };
    TickGeometry {
        position: tick_position(tick, scale),
        line_vector: perpendicular(sign * tick_size, vertical),
        label_offset: perpendicular(sign * (tick_size + tick_padding), vertical),
        anchor,
        vertical_anchor,
        vertical,
    }
}

/// Places one gridline.
///
/// The gridline spans the padded canvas extent across the axis, pointing into the plot. On a
/// crossing axis it starts at the plot edge rather than at the axis line.
pub fn compute_grid_geometry(
    tick: f64,
    scale: &dyn AxisScale,
    orientation: Orientation,
    padding: &Padding,
    cross_axis: bool,
    offset: Vec2,
    width: f64,
    height: f64,
) -> GridGeometry {
    let sign = orientation.sign();
    let vertical = orientation.is_vertical();
    let (edge, across_offset, extent) = if vertical {
        (padding.x_edge(orientation), offset.x, width - padding.horizontal())
    } else {
        (padding.y_edge(orientation), offset.y, height - padding.vertical())
    };
    let start = if cross_axis {
        sign * (across_offset - edge)
    } else {
        0.0
    };
    GridGeometry {
        position: tick_position(tick, scale),
        start,
        length: -sign * extent,
        vertical,
    }
}

/// Places the axis title at the middle of the axis, `label_padding` away from it.
pub fn compute_label_geometry(
    padding: &Padding,
    orientation: Orientation,
    width: f64,
    height: f64,
    label_padding: f64,
) -> LabelGeometry {
    let sign = orientation.sign();
    let vertical = orientation.is_vertical();
    let middle = if vertical {
        padding.top + (height - padding.vertical()) / 2.0
    } else {
        padding.left + (width - padding.horizontal()) / 2.0
    };
    LabelGeometry {
        position: along(middle, sign * label_padding, vertical),
        angle: if vertical { -90.0 } else { 0.0 },
        anchor: TextAnchor::Middle,
        vertical_anchor: if sign < 0.0 {
            VerticalAnchor::End
        } else {
            VerticalAnchor::Start
        },
    }
}
