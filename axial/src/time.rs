// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time tick generation and formatting helpers.
//!
//! Time is modeled as a numeric value in **seconds**. This module provides:
//! - "nice" tick steps for seconds/minutes/hours
//! - formatting for tick labels (e.g. `1:05`, `2:03:00`)

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Returns "nice" tick values inside a time domain expressed in seconds.
///
/// Ticks are multiples of a second/minute/hour step and never fall outside `[min, max]`.
/// A descending domain yields descending ticks.
pub fn nice_time_ticks_seconds(min: f64, max: f64, count: usize) -> Vec<f64> {
    if count == 0 || !min.is_finite() || !max.is_finite() {
        return Vec::new();
    }
    if min == max {
        return alloc::vec![min];
    }
    let reverse = min > max;
    let (lo, hi) = if reverse { (max, min) } else { (min, max) };

    let step = nice_time_step_seconds((hi - lo) / count as f64);
    if step == 0.0 {
        return alloc::vec![min, max];
    }

    let first = (lo / step).ceil();
    let last = (hi / step).floor();
    let n_f = last - first;
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f.min(10_000.0) as u64;

    let mut ticks: Vec<f64> = (0..=n).map(|i| (first + i as f64) * step).collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

fn nice_time_step_seconds(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }

    // Candidate steps in seconds, spanning seconds/minutes/hours.
    const STEPS: &[f64] = &[
        1.0,
        2.0,
        5.0,
        10.0,
        15.0,
        30.0,
        60.0,
        2.0 * 60.0,
        5.0 * 60.0,
        10.0 * 60.0,
        15.0 * 60.0,
        30.0 * 60.0,
        60.0 * 60.0,
        2.0 * 60.0 * 60.0,
        3.0 * 60.0 * 60.0,
        6.0 * 60.0 * 60.0,
        12.0 * 60.0 * 60.0,
    ];

    for &s in STEPS {
        if s >= step {
            return s;
        }
    }
    // Beyond half a day, round up to whole hours.
    let hours = (step / 3600.0).ceil();
    hours.max(1.0) * 3600.0
}

/// Formats a tick value (seconds) given the tick step (seconds).
///
/// This is the default formatter of [`crate::ScaleTime`].
pub fn format_time_seconds(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }

    let sign = if v < 0.0 { "-" } else { "" };
    let secs = {
        let secs_f = v.abs().round().clamp(i64::MIN as f64, i64::MAX as f64);
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
        {
            secs_f as i64
        }
    };
    let step = step.abs();

    let h = secs / 3600;
    let m = (secs / 60) % 60;
    let s = secs % 60;

    if step >= 3600.0 || h > 0 {
        alloc::format!("{sign}{h}:{m:02}:{s:02}")
    } else if step >= 60.0 || m > 0 {
        alloc::format!("{sign}{m}:{s:02}")
    } else {
        alloc::format!("{sign}{s}")
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn time_ticks_choose_minute_steps_for_minute_spans() {
        let ticks = nice_time_ticks_seconds(0.0, 300.0, 5);
        assert_eq!(ticks, alloc::vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn time_ticks_stay_inside_the_domain() {
        let ticks = nice_time_ticks_seconds(7.0, 3500.0, 4);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|t| (7.0..=3500.0).contains(t)), "{ticks:?}");
    }

    #[test]
    fn descending_domain_yields_descending_ticks() {
        let ticks = nice_time_ticks_seconds(300.0, 0.0, 5);
        assert_eq!(ticks.first().copied(), Some(300.0));
        assert_eq!(ticks.last().copied(), Some(0.0));
    }

    #[test]
    fn time_format_seconds_minutes_hours() {
        assert_eq!(format_time_seconds(5.0, 1.0), "5");
        assert_eq!(format_time_seconds(65.0, 1.0), "1:05");
        assert_eq!(format_time_seconds(3723.0, 60.0), "1:02:03");
        assert_eq!(format_time_seconds(-90.0, 30.0), "-1:30");
    }
}
