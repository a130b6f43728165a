// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain, range, and scale construction.

extern crate alloc;

use alloc::boxed::Box;

use crate::scale::{AxisScale, ScaleKind};
use crate::ticks::TickValues;
use crate::{AxisConfig, Padding};

/// Determines the logical domain of an axis.
///
/// An explicit domain is used as given. Otherwise the domain is inferred from the tick values
/// (`(1, len)` for categorical ticks, `(min, max)` for numeric ones) or, failing that, taken
/// from the scale. Inferred domains are reversed on vertical axes.
///
/// Suspicious input is reported through `tracing` but never rejected.
pub fn build_domain(config: &AxisConfig, is_vertical: bool) -> (f64, f64) {
    if let Some(domain) = config.domain {
        return domain;
    }

    let tick_values = match &config.tick_values {
        Some(values) if values.is_empty() => {
            tracing::warn!("tick values are empty; ignoring them");
            None
        }
        other => other.as_ref(),
    };

    let inferred = match tick_values {
        Some(TickValues::Categorical(labels)) => (1.0, labels.len() as f64),
        Some(TickValues::Numeric(values)) => {
            let (lo, hi) = values
                .iter()
                .filter(|v| v.is_finite())
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            if lo.is_finite() {
                (lo, hi)
            } else {
                tracing::warn!("no finite tick values; using the scale domain");
                scale_domain(config)
            }
        }
        None => scale_domain(config),
    };

    if is_vertical {
        (inferred.1, inferred.0)
    } else {
        inferred
    }
}

fn scale_domain(config: &AxisConfig) -> (f64, f64) {
    let scale = &config.scale;
    let domain = scale.domain();
    if domain == scale.range() {
        tracing::warn!(
            ?domain,
            "scale domain equals its range; the scale was probably never configured"
        );
    }
    let (d0, d1) = domain;
    if !d0.is_finite() || !d1.is_finite() || d0 == d1 {
        tracing::warn!(?domain, "scale domain is empty or degenerate");
    }
    if scale.kind() == ScaleKind::Time {
        tracing::warn!("time axis without a domain or tick values; ticks may be meaningless");
    }
    domain
}

/// Determines the pixel range of an axis.
///
/// Horizontal axes run from the left padding to `width - right`; vertical axes from
/// `height - bottom` up to the top padding.
pub fn build_range(config: &AxisConfig, padding: &Padding, is_vertical: bool) -> (f64, f64) {
    if is_vertical {
        (config.height - padding.bottom, padding.top)
    } else {
        (padding.left, config.width - padding.right)
    }
}

/// Copies the configured scale and applies `domain` and `range` to the copy.
///
/// The scale held by `config` is left untouched.
pub fn build_scale(
    config: &AxisConfig,
    domain: (f64, f64),
    range: (f64, f64),
) -> Box<dyn AxisScale> {
    let mut scale = config.scale.copy();
    scale.set_domain(domain);
    scale.set_range(range);
    scale
}
