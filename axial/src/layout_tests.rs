// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Line, Vec2};

use crate::{
    AxisConfig, AxisScale, Orientation, Padding, PaddingSpec, ScaleBand, ScaleLinear, ScaleLog,
    ScaleTime, Side, TickFormat, TickSet, TickValues,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn bottom_axis_with_domain_lays_out_end_to_end() {
    let layout = AxisConfig::new()
        .with_orientation(Orientation::Bottom)
        .with_domain((0.0, 100.0))
        .with_width(450.0)
        .with_height(300.0)
        .with_padding(50.0)
        .with_tick_count(5)
        .layout();

    assert_eq!(layout.range, (50.0, 400.0));
    assert_eq!(
        layout.ticks,
        TickSet::Numeric(vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0])
    );
    assert_eq!(layout.axis_line, Line::new((50.0, 0.0), (400.0, 0.0)));
    assert_eq!(layout.translation, Vec2::new(0.0, 250.0));
    assert_eq!(layout.transform().translation(), Vec2::new(0.0, 250.0));

    let positions: Vec<f64> = layout.tick_geometry.iter().map(|t| t.position).collect();
    for (p, expected) in positions.iter().zip([50.0, 120.0, 190.0, 260.0, 330.0, 400.0]) {
        assert_close(*p, expected);
    }
    assert_eq!(layout.tick_label(5), Some("100"));
}

#[test]
fn left_axis_with_categorical_ticks_reverses_the_domain() {
    let layout = AxisConfig::new()
        .with_orientation(Orientation::Left)
        .with_tick_values(TickValues::categorical(["Mets", "Giants", "Yankees"]))
        .with_width(500.0)
        .with_height(200.0)
        .with_padding(40.0)
        .layout();

    assert_eq!(layout.domain, (3.0, 1.0));
    assert_eq!(layout.range, (160.0, 40.0));
    assert_eq!(layout.ticks.keys(), &[1.0, 2.0, 3.0]);
    assert_eq!(layout.tick_labels, ["Mets", "Giants", "Yankees"]);
    // The first category lands at the top of the plot.
    assert_close(layout.tick_geometry[0].position, 40.0);
    assert_close(layout.tick_geometry[2].position, 160.0);
}

#[test]
fn numeric_tick_values_reverse_only_on_vertical_axes() {
    let base = AxisConfig::new().with_tick_values(vec![10.0, 20.0, 30.0]);
    let vertical = base.clone().with_orientation(Orientation::Left).layout();
    let horizontal = base.with_orientation(Orientation::Bottom).layout();
    assert_eq!(vertical.domain, (30.0, 10.0));
    assert_eq!(horizontal.domain, (10.0, 30.0));
}

#[test]
fn categorical_labels_follow_keys_for_any_scale() {
    let values = TickValues::categorical(["a", "b", "c"]);
    let scales: [Arc<dyn AxisScale>; 3] = [
        Arc::new(ScaleLinear::default()),
        Arc::new(ScaleLog::default()),
        Arc::new(ScaleBand::new((0.0, 0.0), (0.0, 0.0))),
    ];
    for scale in scales {
        let layout = AxisConfig::new()
            .with_tick_values(values.clone())
            .with_shared_scale(scale)
            .layout();
        assert_eq!(layout.ticks.keys(), &[1.0, 2.0, 3.0]);
        assert_eq!(layout.tick_labels, ["a", "b", "c"]);
    }
}

#[test]
fn orientation_duality_swaps_offset_roles() {
    let base = AxisConfig::new()
        .with_padding(PaddingSpec::sides())
        .with_label("Title")
        .with_label_padding(10.0);
    let left = base.clone().with_orientation(Orientation::Left).layout();
    let bottom = base.with_orientation(Orientation::Bottom).layout();

    assert_close(left.offset.x, bottom.offset.y);
    assert_close(left.offset.y, bottom.offset.x);
    assert!(left.offset.x > left.offset.y, "vertical axes reserve room across x");

    // Tick lines are perpendicular to the axis and point away from the plot.
    let l = left.tick_geometry[0].line_vector;
    let b = bottom.tick_geometry[0].line_vector;
    assert_eq!((l.x, l.y), (-b.y, b.x));

    let label = left.label.unwrap();
    assert_eq!(label.angle, -90.0);
    assert_eq!(bottom.label.unwrap().angle, 0.0);
    assert!(label.position.x < 0.0);
}

#[test]
fn padding_forms_are_equivalent() {
    let uniform = AxisConfig::new().with_padding(5.0).layout();
    let sides = AxisConfig::new()
        .with_padding(Padding::uniform(5.0))
        .layout();
    assert_eq!(uniform.padding, sides.padding);
    assert_eq!(uniform.range, sides.range);

    let top_only = AxisConfig::new()
        .with_padding(PaddingSpec::sides().with_side(Side::Top, 5.0))
        .layout();
    assert_eq!(top_only.padding, Padding::new(5.0, 0.0, 0.0, 0.0));
}

#[test]
fn cross_axis_suppresses_the_zero_tick() {
    let base = AxisConfig::new().with_domain((-10.0, 10.0));
    let plain = base.clone().layout();
    let crossing = base.with_cross_axis(true).layout();
    assert!(plain.ticks.keys().contains(&0.0));
    assert!(!crossing.ticks.keys().contains(&0.0));
    assert_eq!(crossing.grid.len(), crossing.ticks.len());
    assert_eq!(crossing.tick_geometry.len(), crossing.ticks.len());
}

#[test]
fn crossing_axis_stays_empty_when_zero_was_the_only_tick() {
    // Sub-second time domain: the only generated tick is 0.
    let time = AxisConfig::new()
        .with_scale(ScaleTime::default())
        .with_domain((0.0, 0.5))
        .with_cross_axis(true)
        .layout();
    assert!(!time.ticks.keys().contains(&0.0));
    assert!(time.ticks.is_empty());
    assert!(time.tick_geometry.is_empty());
    assert!(time.grid.is_empty());

    let point = AxisConfig::new()
        .with_domain((0.0, 0.0))
        .with_cross_axis(true)
        .layout();
    assert!(!point.ticks.keys().contains(&0.0));
    assert!(point.ticks.is_empty());
    assert!(point.tick_labels.is_empty());
    assert!(point.scene().ticks.is_empty());
}

#[test]
fn crossing_dependent_axis_puts_high_values_on_top() {
    let layout = AxisConfig::new()
        .with_dependent_axis(true)
        .with_domain((-5.0, 5.0))
        .with_cross_axis(true)
        .with_offset_x(250.0)
        .with_offset_y(50.0)
        .with_standalone(false)
        .layout();
    let top = layout.scale().map(5.0);
    let bottom = layout.scale().map(-5.0);
    assert!(top < bottom, "{top} should be above {bottom}");
    assert!(!layout.ticks.keys().contains(&0.0));
}

#[test]
fn layout_never_mutates_the_configured_scale() {
    let prototype: Arc<dyn AxisScale> = Arc::new(ScaleLinear::new((0.0, 7.0), (0.0, 1.0)));
    let config = AxisConfig::new().with_shared_scale(prototype.clone());

    let first = config.clone().with_domain((0.0, 100.0)).layout();
    let second = config.with_orientation(Orientation::Left).layout();

    assert_eq!(prototype.domain(), (0.0, 7.0));
    assert_eq!(prototype.range(), (0.0, 1.0));
    assert_eq!(first.scale().domain(), (0.0, 100.0));
    assert_eq!(second.scale().domain(), (7.0, 0.0));
}

#[test]
fn crossing_axes_place_the_group_by_explicit_offsets() {
    let x_axis = AxisConfig::new()
        .with_cross_axis(true)
        .with_offset_y(150.0)
        .with_domain((-10.0, 10.0))
        .layout();
    assert_eq!(x_axis.translation, Vec2::new(0.0, 150.0));
    // The gridline starts at the bottom plot edge, 100 below the axis.
    assert_close(x_axis.grid[0].start, 100.0);

    let y_axis = AxisConfig::new()
        .with_dependent_axis(true)
        .with_cross_axis(true)
        .with_offset_x(250.0)
        .with_domain((10.0, -10.0))
        .layout();
    assert_eq!(y_axis.orientation, Orientation::Left);
    assert_eq!(y_axis.translation, Vec2::new(250.0, 0.0));
    assert_eq!(y_axis.domain, (10.0, -10.0), "explicit domains are not reversed");
    assert_close(y_axis.grid[0].start, -200.0);
}

#[test]
fn banded_scales_center_categorical_ticks() {
    let layout = AxisConfig::new()
        .with_orientation(Orientation::Bottom)
        .with_tick_values(TickValues::categorical(["x", "y"]))
        .with_scale(ScaleBand::new((0.0, 0.0), (0.0, 0.0)).with_padding(0.0, 0.0))
        .with_width(300.0)
        .with_padding(50.0)
        .layout();
    // Two bands of 100 between x = 50 and x = 250.
    assert_close(layout.tick_geometry[0].position, 100.0);
    assert_close(layout.tick_geometry[1].position, 200.0);
}

#[test]
fn log_axis_ticks_span_the_domain() {
    let layout = AxisConfig::new()
        .with_orientation(Orientation::Left)
        .with_domain((1.0, 5.0))
        .with_scale(ScaleLog::default())
        .layout();
    assert_eq!(layout.ticks.keys(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(layout.tick_labels, ["1", "2", "3", "4", "5"]);
}

#[test]
fn label_array_formats_by_index() {
    let layout = AxisConfig::new()
        .with_tick_values(vec![5.0, 10.0, 25.0])
        .with_tick_format(TickFormat::labels(["first", "second"]))
        .layout();
    assert_eq!(layout.tick_labels, ["first", "second", ""]);
}

#[test]
fn degenerate_input_degrades_without_panicking() {
    let layout = AxisConfig::new()
        .with_domain((3.0, 3.0))
        .with_width(0.0)
        .with_height(f64::NAN)
        .with_tick_values(TickValues::Numeric(vec![]))
        .layout();
    assert_eq!(layout.ticks.keys(), &[3.0]);
    let _ = layout.scene();
}
