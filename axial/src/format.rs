// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats a numeric tick using just enough decimals to distinguish ticks `step` apart.
///
/// A `step` of `0` (or a non-finite step) means "unknown"; the value is then printed with at
/// most six decimals and trailing zeros removed. Negative zero prints as `0`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let v = if v == 0.0 { 0.0 } else { v };
    let step = step.abs();
    if step.is_finite() && step > 0.0 {
        let decimals = decimals_for_step(step);
        let out = alloc::format!("{v:.decimals$}");
        return normalize_negative_zero(out);
    }
    let out = alloc::format!("{v:.6}");
    let out = out.trim_end_matches('0').trim_end_matches('.');
    normalize_negative_zero(String::from(out))
}

fn decimals_for_step(step: f64) -> usize {
    let e = step.log10().floor();
    if e >= 0.0 {
        return 0;
    }
    // A step like 0.25 needs one more digit than its magnitude suggests.
    let scaled = step / 10_f64.powf(e);
    let extra = if (scaled - scaled.round()).abs() > 1e-9 {
        1.0
    } else {
        0.0
    };
    let d = (-e + extra).min(12.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to a small range")]
    {
        d as usize
    }
}

fn normalize_negative_zero(s: String) -> String {
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        String::from(&s[1..])
    } else {
        s
    }
}
