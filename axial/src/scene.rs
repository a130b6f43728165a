// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderable axis scenes.
//!
//! An [`AxisScene`] is the hand-off to a renderer: fully evaluated marks with resolved paint,
//! grouped by role. Geometry is in axis-group space; apply [`AxisScene::transform`] to place
//! it on the canvas.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Affine, Line, Point};
use peniko::Brush;

use crate::geometry::{TextAnchor, VerticalAnchor};
use crate::layout::AxisLayout;
use crate::style::{StrokeStyle, TextStyle};

/// The canvas wrapping a standalone axis.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    /// Background paint, if any.
    pub fill: Option<Brush>,
}

/// A stroked line segment.
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    /// Geometry in axis-group space.
    pub line: Line,
    /// Stroke paint. `None` means the rule is not painted.
    pub stroke: Option<StrokeStyle>,
}

/// A piece of (possibly multi-line) text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Anchor position in axis-group space.
    pub pos: Point,
    /// Text content. `\n` separates lines.
    pub text: String,
    /// Horizontal alignment relative to `pos`.
    pub anchor: TextAnchor,
    /// Vertical alignment relative to `pos`.
    pub vertical_anchor: VerticalAnchor,
    /// Rotation in degrees, positive clockwise.
    pub angle: f64,
    /// Text paint.
    pub style: TextStyle,
}

impl TextMark {
    /// The lines of the text.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }
}

/// A tick line with its label.
#[derive(Clone, Debug, PartialEq)]
pub struct TickMark {
    /// The tick's domain value (the key, for categorical ticks).
    pub value: f64,
    /// The tick line.
    pub rule: RuleMark,
    /// The tick label.
    pub label: TextMark,
}

/// Every mark of one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisScene {
    /// Present for standalone axes.
    pub canvas: Option<Canvas>,
    /// Places axis-group space on the canvas.
    pub transform: Affine,
    /// Gridlines, one per tick.
    pub grid: Vec<RuleMark>,
    /// The axis line.
    pub axis_line: RuleMark,
    /// Ticks and their labels.
    pub ticks: Vec<TickMark>,
    /// The axis title.
    pub label: Option<TextMark>,
}

impl AxisScene {
    /// Builds the scene of a computed layout.
    ///
    /// Per-tick styles are evaluated here, once per tick key. Non-tick layers have no tick to
    /// evaluate against, so per-tick values on them are ignored.
    pub fn from_layout(layout: &AxisLayout) -> Self {
        let styles = layout.styles();

        let canvas = layout.standalone().then(|| Canvas {
            width: styles.parent.width,
            height: styles.parent.height,
            fill: styles
                .parent
                .layer
                .without_per_tick("parent")
                .fill
                .and_then(|f| f.resolve_static()),
        });

        let axis_style = styles.axis.without_per_tick("axis");
        let axis_line = RuleMark {
            line: layout.axis_line,
            stroke: axis_style.stroke_at(0.0),
        };

        let keys = layout.ticks.keys();
        let grid = keys
            .iter()
            .zip(&layout.grid)
            .map(|(&key, g)| RuleMark {
                line: g.line(),
                stroke: styles.grid.stroke_at(key),
            })
            .collect();

        let ticks = keys
            .iter()
            .zip(&layout.tick_geometry)
            .zip(&layout.tick_labels)
            .map(|((&key, t), text)| TickMark {
                value: key,
                rule: RuleMark {
                    line: t.line(),
                    stroke: styles.ticks.stroke_at(key),
                },
                label: TextMark {
                    pos: t.label_point(),
                    text: text.clone(),
                    anchor: t.anchor,
                    vertical_anchor: t.vertical_anchor,
                    angle: styles
                        .tick_labels
                        .angle
                        .as_ref()
                        .map_or(0.0, |a| a.resolve(key)),
                    style: styles.tick_labels.text_at(key),
                },
            })
            .collect();

        let label = match (&layout.label, layout.label_text()) {
            (Some(geometry), Some(text)) => {
                let label_style = styles.axis_label.without_per_tick("axis_label");
                Some(TextMark {
                    pos: geometry.position,
                    text: String::from(text),
                    anchor: geometry.anchor,
                    vertical_anchor: geometry.vertical_anchor,
                    angle: label_style
                        .angle
                        .as_ref()
                        .and_then(|a| a.resolve_static())
                        .unwrap_or(geometry.angle),
                    style: label_style.text_at(0.0),
                })
            }
            _ => None,
        };

        Self {
            canvas,
            transform: Affine::translate(layout.translation),
            grid,
            axis_line,
            ticks,
            label,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{AxisConfig, AxisStyleSpec, Orientation, StyleLayer, TickValues};
    use kurbo::Vec2;
    use peniko::color::palette::css;

    #[test]
    fn standalone_controls_the_canvas() {
        let scene = AxisConfig::new().scene();
        let canvas = scene.canvas.unwrap();
        assert_eq!((canvas.width, canvas.height), (450.0, 300.0));

        let scene = AxisConfig::new().with_standalone(false).scene();
        assert!(scene.canvas.is_none());
    }

    #[test]
    fn scene_has_one_grid_and_tick_per_tick_value() {
        let scene = AxisConfig::new()
            .with_domain((0.0, 100.0))
            .with_orientation(Orientation::Bottom)
            .scene();
        assert_eq!(scene.ticks.len(), 6);
        assert_eq!(scene.grid.len(), 6);
        assert_eq!(scene.transform.translation(), Vec2::new(0.0, 250.0));
        assert_eq!(scene.ticks[1].label.text, "20");
        assert!(scene.label.is_none());
    }

    #[test]
    fn per_tick_styles_are_evaluated_per_tick() {
        let style = AxisStyleSpec::new().with_ticks(
            StyleLayer::new().with_stroke_fn(|t| {
                if t > 50.0 {
                    Brush::Solid(css::RED)
                } else {
                    Brush::Solid(css::BLUE)
                }
            }),
        );
        let scene = AxisConfig::new()
            .with_domain((0.0, 100.0))
            .with_style(style)
            .scene();
        let first = scene.ticks[0].rule.stroke.as_ref().unwrap();
        let last = scene.ticks[5].rule.stroke.as_ref().unwrap();
        assert_eq!(first.brush, Brush::Solid(css::BLUE));
        assert_eq!(last.brush, Brush::Solid(css::RED));
        assert_eq!(first.stroke_width, 2.0, "width falls back to the default");
    }

    #[test]
    fn titles_split_into_lines_and_rotate_on_vertical_axes() {
        let scene = AxisConfig::new()
            .with_orientation(Orientation::Left)
            .with_label("animation\nwow!")
            .scene();
        let label = scene.label.unwrap();
        assert_eq!(label.lines().collect::<Vec<_>>(), ["animation", "wow!"]);
        assert_eq!(label.angle, -90.0);
        assert_eq!(label.style.font_size, 16.0);
    }

    #[test]
    fn categorical_tick_labels_carry_their_text() {
        let scene = AxisConfig::new()
            .with_tick_values(TickValues::categorical(["Mets\nNY", "Giants\nSF"]))
            .scene();
        let texts: Vec<_> = scene.ticks.iter().map(|t| t.label.text.as_str()).collect();
        assert_eq!(texts, ["Mets\nNY", "Giants\nSF"]);
        assert_eq!(scene.ticks[0].value, 1.0);
    }
}
