// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas padding.

use core::fmt;

use crate::{AxisConfig, Orientation};

/// Padding as authored: one value for every side, or per-side values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PaddingSpec {
    /// The same padding on all four sides.
    Uniform(f64),
    /// Independent per-side padding. Missing sides are `0`.
    Sides {
        /// Top padding.
        top: Option<f64>,
        /// Bottom padding.
        bottom: Option<f64>,
        /// Left padding.
        left: Option<f64>,
        /// Right padding.
        right: Option<f64>,
    },
}

impl PaddingSpec {
    /// Per-side padding with every side unset.
    pub fn sides() -> Self {
        Self::Sides {
            top: None,
            bottom: None,
            left: None,
            right: None,
        }
    }

    /// Sets one side, converting uniform padding into per-side padding.
    ///
    /// Converting keeps the uniform value on the other sides.
    pub fn with_side(self, side: Side, value: f64) -> Self {
        let (mut top, mut bottom, mut left, mut right) = match self {
            Self::Uniform(v) => (Some(v), Some(v), Some(v), Some(v)),
            Self::Sides {
                top,
                bottom,
                left,
                right,
            } => (top, bottom, left, right),
        };
        match side {
            Side::Top => top = Some(value),
            Side::Bottom => bottom = Some(value),
            Side::Left => left = Some(value),
            Side::Right => right = Some(value),
        }
        Self::Sides {
            top,
            bottom,
            left,
            right,
        }
    }
}

impl Default for PaddingSpec {
    fn default() -> Self {
        Self::Uniform(50.0)
    }
}

impl From<f64> for PaddingSpec {
    fn from(value: f64) -> Self {
        Self::Uniform(value)
    }
}

impl From<Padding> for PaddingSpec {
    fn from(value: Padding) -> Self {
        Self::Sides {
            top: Some(value.top),
            bottom: Some(value.bottom),
            left: Some(value.left),
            right: Some(value.right),
        }
    }
}

/// One edge of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

/// Resolved four-sided padding.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
    /// Right padding.
    pub right: f64,
}

impl Padding {
    /// Creates a padding record from explicit sides.
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// The same padding on all sides.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Returns the padding of one side.
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// `left + right`.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// Padding of the vertical edge that governs an axis' x offset.
    ///
    /// Right axes measure from the right edge; every other orientation from the left.
    pub fn x_edge(&self, orientation: Orientation) -> f64 {
        if orientation == Orientation::Right {
            self.right
        } else {
            self.left
        }
    }

    /// Padding of the horizontal edge that governs an axis' y offset.
    ///
    /// Top axes measure from the top edge; every other orientation from the bottom.
    pub fn y_edge(&self, orientation: Orientation) -> f64 {
        if orientation == Orientation::Top {
            self.top
        } else {
            self.bottom
        }
    }
}

/// Normalizes the configured padding into four sides.
///
/// A uniform value is replicated. In the per-side form each missing side is `0`; the uniform
/// default is not used as a fallback.
pub fn resolve_padding(config: &AxisConfig) -> Padding {
    match config.padding {
        PaddingSpec::Uniform(v) => Padding::uniform(v),
        PaddingSpec::Sides {
            top,
            bottom,
            left,
            right,
        } => Padding {
            top: top.unwrap_or(0.0),
            bottom: bottom.unwrap_or(0.0),
            left: left.unwrap_or(0.0),
            right: right.unwrap_or(0.0),
        },
    }
}
