// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis orientation.

use crate::AxisConfig;

/// Axis orientation: which edge of the chart the axis is attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// A horizontal axis along the top edge.
    Top,
    /// A horizontal axis along the bottom edge.
    Bottom,
    /// A vertical axis along the left edge.
    Left,
    /// A vertical axis along the right edge.
    Right,
}

impl Orientation {
    /// Returns `true` for `Left` and `Right`.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    /// Direction that ticks, labels and the title point away from the plot.
    ///
    /// `-1` for `Top`/`Left`, `+1` for `Bottom`/`Right`.
    pub fn sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Bottom | Self::Right => 1.0,
        }
    }

    /// The orientation on the opposite edge.
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Resolves the effective orientation of an axis.
///
/// An explicit orientation always wins. Otherwise a dependent axis sits on the left and an
/// independent axis on the bottom.
pub fn resolve_orientation(config: &AxisConfig) -> Orientation {
    match config.orientation {
        Some(orientation) => orientation,
        None if config.dependent_axis => Orientation::Left,
        None => Orientation::Bottom,
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn orientation_defaults_follow_dependent_axis_hint() {
        assert_eq!(resolve_orientation(&AxisConfig::new()), Orientation::Bottom);
        assert_eq!(
            resolve_orientation(&AxisConfig::new().with_dependent_axis(true)),
            Orientation::Left
        );
    }

    #[test]
    fn explicit_orientation_overrides_dependent_axis() {
        let config = AxisConfig::new()
            .with_dependent_axis(true)
            .with_orientation(Orientation::Top);
        assert_eq!(resolve_orientation(&config), Orientation::Top);
    }

    #[test]
    fn sign_points_away_from_the_plot() {
        assert_eq!(Orientation::Top.sign(), -1.0);
        assert_eq!(Orientation::Left.sign(), -1.0);
        assert_eq!(Orientation::Bottom.sign(), 1.0);
        assert_eq!(Orientation::Right.sign(), 1.0);
        for o in [
            Orientation::Top,
            Orientation::Bottom,
            Orientation::Left,
            Orientation::Right,
        ] {
            assert_eq!(o.sign(), -o.opposite().sign());
            assert_eq!(o.is_vertical(), o.opposite().is_vertical());
        }
    }
}
