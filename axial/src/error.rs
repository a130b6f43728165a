// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported by [`AxisConfig::validate`](crate::AxisConfig::validate).
//!
//! Layout itself never fails; these errors are an opt-in strict check for callers that want
//! to reject suspicious input up front.

use thiserror::Error;

use crate::Side;

/// A problem with an [`AxisConfig`](crate::AxisConfig).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AxisConfigError {
    /// A padding side is negative or not finite.
    #[error("padding on the {side} side must be finite and non-negative, got {value}")]
    InvalidPadding {
        /// The offending side.
        side: Side,
        /// Its value.
        value: f64,
    },

    /// The canvas size is not positive and finite.
    #[error("canvas size must be positive and finite, got {width} x {height}")]
    InvalidDimensions {
        /// Canvas width.
        width: f64,
        /// Canvas height.
        height: f64,
    },

    /// The explicit domain has zero width or a non-finite bound.
    #[error("domain ({min}, {max}) must have two distinct finite bounds")]
    DegenerateDomain {
        /// First bound.
        min: f64,
        /// Second bound.
        max: f64,
    },

    /// Tick values were supplied but are empty.
    #[error("tick values are empty")]
    EmptyTickValues,

    /// The tick count is zero.
    #[error("tick count must be at least 1")]
    ZeroTickCount,

    /// A label-array tick format has fewer labels than there are tick values.
    #[error("tick format has {labels} labels for {ticks} tick values")]
    TickFormatTooShort {
        /// Number of labels.
        labels: usize,
        /// Number of tick values.
        ticks: usize,
    },
}
