// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart axis layout.
//!
//! `axial` turns a declarative [`AxisConfig`] (domain, orientation, padding, tick count or
//! values, scale) into concrete geometry for a single chart axis:
//! - **Ticks**: which values get a tick, where they land, and what text they show.
//! - **Geometry**: axis line endpoints, tick marks, gridlines, the axis title and the
//!   translation applied to the whole axis group.
//! - **Scene**: styled marks ([`AxisScene`]) that a renderer (SVG, canvas, GPU) can draw
//!   without doing any layout of its own.
//!
//! The pipeline is a pure function of the config. It is re-run from scratch on every change;
//! nothing is cached between calls.
//!
//! Scale math is consumed through the [`AxisScale`] capability trait. A few concrete scales
//! ([`ScaleLinear`], [`ScaleLog`], [`ScaleTime`], [`ScaleBand`]) are provided so the crate is
//! usable on its own, but the layout code never depends on a concrete scale type.
//!
//! ```
//! use axial::{AxisConfig, Orientation, ScaleLinear};
//!
//! let layout = AxisConfig::new()
//!     .with_orientation(Orientation::Bottom)
//!     .with_domain((0.0, 100.0))
//!     .with_scale(ScaleLinear::default())
//!     .layout();
//! assert_eq!(layout.range, (50.0, 400.0));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod domain;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod geometry;
mod layout;
#[cfg(test)]
mod layout_tests;
mod orient;
mod padding;
mod scale;
mod scene;
mod style;
mod ticks;
mod time;

pub use config::AxisConfig;
pub use domain::{build_domain, build_range, build_scale};
pub use error::AxisConfigError;
pub use format::format_tick_with_step;
pub use geometry::{
    GridGeometry, LabelGeometry, TextAnchor, TickGeometry, VerticalAnchor, compute_axis_line,
    compute_grid_geometry, compute_label_geometry, compute_offset, compute_tick_geometry,
    compute_transform, label_padding,
};
pub use layout::AxisLayout;
pub use orient::{Orientation, resolve_orientation};
pub use padding::{Padding, PaddingSpec, Side, resolve_padding};
pub use scale::{AxisScale, ScaleBand, ScaleKind, ScaleLinear, ScaleLog, ScaleTime, TickLabeler};
pub use scene::{AxisScene, Canvas, RuleMark, TextMark, TickMark};
pub use style::{
    AxisStyleSpec, AxisStyles, DefaultStyleBundle, ParentStyle, StrokeStyle, StyleLayer,
    StyleValue, TextStyle, resolve_styles,
};
pub use ticks::{TickFormat, TickFormatter, TickSet, TickValues, resolve_tick_format, resolve_ticks};
pub use time::{format_time_seconds, nice_time_ticks_seconds};
