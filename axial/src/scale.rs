// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scale capability consumed by axis layout, plus a few concrete scales.
//!
//! Axis layout only talks to scales through [`AxisScale`]. The required members cover mapping
//! and domain/range access; tick generation, tick formatting and band width are optional
//! capabilities that a scale opts into by returning `Some`.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_tick_with_step;
use crate::time;

/// Formats a single tick value into display text.
pub type TickLabeler = Arc<dyn Fn(f64) -> String>;

/// Broad family of a scale.
///
/// Layout uses this only for diagnostics (for example, a time scale with no explicit domain).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScaleKind {
    /// Continuous linear mapping.
    Linear,
    /// Continuous logarithmic mapping.
    Log,
    /// Continuous mapping over timestamps.
    Time,
    /// Discrete mapping over integer keys.
    Ordinal,
}

/// A scale as seen by axis layout.
///
/// Layout never mutates a caller's scale: it calls [`AxisScale::copy`] and configures the copy.
pub trait AxisScale: fmt::Debug {
    /// The family of this scale.
    fn kind(&self) -> ScaleKind;

    /// The current `(start, end)` domain.
    fn domain(&self) -> (f64, f64);

    /// Replaces the domain.
    fn set_domain(&mut self, domain: (f64, f64));

    /// The current `(start, end)` output range.
    fn range(&self) -> (f64, f64);

    /// Replaces the output range.
    fn set_range(&mut self, range: (f64, f64));

    /// Maps a domain value into range space.
    fn map(&self, value: f64) -> f64;

    /// Returns an independent copy of this scale.
    fn copy(&self) -> Box<dyn AxisScale>;

    /// Every value of the domain a tick could be drawn at when no tick generator exists.
    ///
    /// Continuous scales return the two endpoints; discrete scales return every key.
    fn domain_values(&self) -> Vec<f64> {
        let (d0, d1) = self.domain();
        alloc::vec![d0, d1]
    }

    /// Tick generation capability.
    fn ticks(&self, _count: usize) -> Option<Vec<f64>> {
        None
    }

    /// Tick formatting capability, tuned for roughly `count` ticks.
    fn tick_format(&self, _count: usize) -> Option<TickLabeler> {
        None
    }

    /// Band width capability of banded ordinal scales.
    fn range_band(&self) -> Option<f64> {
        None
    }
}

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }
}

impl Default for ScaleLinear {
    /// The unit scale: domain and range are both `(0, 1)`.
    fn default() -> Self {
        Self::new((0.0, 1.0), (0.0, 1.0))
    }
}

impl AxisScale for ScaleLinear {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Linear
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let t = (x - d0) / denom;
        r0 + t * (r1 - r0)
    }

    fn copy(&self) -> Box<dyn AxisScale> {
        Box::new(*self)
    }

    fn ticks(&self, count: usize) -> Option<Vec<f64>> {
        Some(linear_ticks(self.domain.0, self.domain.1, count))
    }

    fn tick_format(&self, count: usize) -> Option<TickLabeler> {
        let (d0, d1) = self.domain;
        let step = nice_step((d1 - d0).abs() / count.max(1) as f64);
        Some(Arc::new(move |v| format_tick_with_step(v, step)))
    }
}

/// Returns "nice" (1/2/5 × 10ⁿ) tick values inside `[d0, d1]`.
///
/// A descending domain yields descending ticks.
fn linear_ticks(d0: f64, d1: f64, count: usize) -> Vec<f64> {
    if count == 0 || !d0.is_finite() || !d1.is_finite() {
        return Vec::new();
    }
    if d0 == d1 {
        return alloc::vec![d0];
    }
    let reverse = d0 > d1;
    let (lo, hi) = if reverse { (d1, d0) } else { (d0, d1) };
    let step = nice_step((hi - lo) / count as f64);
    if step == 0.0 {
        return alloc::vec![d0, d1];
    }

    // Fractional steps divide by their (integral) inverse so 0.1-style ticks come out exact.
    let inverse = step < 1.0;
    let factor = if inverse { (1.0 / step).round() } else { step };
    let (first, last) = if inverse {
        ((lo * factor).ceil(), (hi * factor).floor())
    } else {
        ((lo / factor).ceil(), (hi / factor).floor())
    };

    let n_f = last - first;
    if !n_f.is_finite() || n_f < 0.0 {
        return Vec::new();
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "guarded by finite/non-negative checks and capped at 10k"
    )]
    let n = n_f.min(10_000.0) as u64;

    let mut ticks: Vec<f64> = (0..=n)
        .map(|i| {
            let k = first + i as f64;
            if inverse { k / factor } else { k * factor }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

/// A log-scale mapping from a positive domain to a range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLog {
    domain: (f64, f64),
    range: (f64, f64),
    base: f64,
}

impl ScaleLog {
    /// Creates a new base-10 log scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            base: 10.0,
        }
    }

    /// Sets the log base. Invalid bases fall back to `10`.
    pub fn with_base(mut self, base: f64) -> Self {
        self.base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        self
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    fn log_base(&self, x: f64) -> f64 {
        let denom = self.base.ln();
        if denom == 0.0 { x.ln() } else { x.ln() / denom }
    }

    fn exponent(&self, x: f64, up: bool) -> i32 {
        let e = self.log_base(x);
        let e = if up { e.ceil() } else { e.floor() };
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
        {
            e.clamp(i32::MIN as f64, i32::MAX as f64) as i32
        }
    }
}

impl Default for ScaleLog {
    fn default() -> Self {
        Self::new((1.0, 10.0), (0.0, 1.0))
    }
}

impl AxisScale for ScaleLog {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Log
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if x <= 0.0 || d0 <= 0.0 || d1 <= 0.0 {
            return r0;
        }
        let ld0 = self.log_base(d0);
        let ld1 = self.log_base(d1);
        let denom = ld1 - ld0;
        if denom == 0.0 {
            return r0;
        }
        let t = (self.log_base(x) - ld0) / denom;
        r0 + t * (r1 - r0)
    }

    fn copy(&self) -> Box<dyn AxisScale> {
        Box::new(*self)
    }

    /// Powers of the base inside the domain.
    ///
    /// When the domain spans fewer decades than `count`, each decade is subdivided at integer
    /// multiples of its power (`1, 2, … base-1`) as long as the base is an integer.
    fn ticks(&self, count: usize) -> Option<Vec<f64>> {
        let (d0, d1) = self.domain;
        let reverse = d0 > d1;
        let (lo, hi) = if reverse { (d1, d0) } else { (d0, d1) };
        if lo <= 0.0 || !lo.is_finite() || !hi.is_finite() {
            return Some(Vec::new());
        }
        let min_e = self.exponent(lo, false);
        let max_e = self.exponent(hi, true);
        let decades = i64::from(max_e) - i64::from(min_e);
        let subdivide = self.base == self.base.round() && decades < count as i64;

        let eps = 1e-12 * hi;
        let mut out = Vec::new();
        for e in min_e..=max_e {
            let p = self.base.powi(e);
            if subdivide {
                let mut k = 1.0;
                while k < self.base {
                    let v = k * p;
                    if v >= lo - eps && v <= hi + eps {
                        out.push(v);
                    }
                    k += 1.0;
                }
            } else if p >= lo - eps && p <= hi + eps {
                out.push(p);
            }
            if out.len() > 10_000 {
                break;
            }
        }
        if reverse {
            out.reverse();
        }
        Some(out)
    }

    fn tick_format(&self, _count: usize) -> Option<TickLabeler> {
        Some(Arc::new(|v| format_tick_with_step(v, 0.0)))
    }
}

/// A time scale: a linear scale over timestamps in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleTime {
    inner: ScaleLinear,
}

impl ScaleTime {
    /// Creates a new time scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            inner: ScaleLinear::new(domain, range),
        }
    }
}

impl Default for ScaleTime {
    fn default() -> Self {
        Self {
            inner: ScaleLinear::default(),
        }
    }
}

impl AxisScale for ScaleTime {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Time
    }

    fn domain(&self) -> (f64, f64) {
        self.inner.domain
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.inner.domain = domain;
    }

    fn range(&self) -> (f64, f64) {
        self.inner.range
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.inner.range = range;
    }

    fn map(&self, t: f64) -> f64 {
        self.inner.map(t)
    }

    fn copy(&self) -> Box<dyn AxisScale> {
        Box::new(*self)
    }

    fn ticks(&self, count: usize) -> Option<Vec<f64>> {
        let (d0, d1) = self.inner.domain;
        Some(time::nice_time_ticks_seconds(d0, d1, count))
    }

    fn tick_format(&self, count: usize) -> Option<TickLabeler> {
        let ticks = self.ticks(count).unwrap_or_default();
        let step = tick_step(&ticks);
        Some(Arc::new(move |v| time::format_time_seconds(v, step)))
    }
}

/// A discrete band scale over consecutive integer keys.
///
/// The domain `(first, last)` names the first and last key; every integer in between is a
/// band, in that order. [`AxisScale::map`] returns the band's lower pixel edge and
/// [`AxisScale::range_band`] its width, so a band's center is `map(k) + band / 2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    domain: (f64, f64),
    range: (f64, f64),
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale with `0.1` inner and outer padding.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        let (d0, d1) = self.domain;
        let span = (d1 - d0).abs().round();
        if !span.is_finite() {
            return 0;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "finite, non-negative, capped at 10k"
        )]
        {
            span.min(10_000.0) as usize + 1
        }
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count() as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    fn index(&self, key: f64) -> f64 {
        (key - self.domain.0).abs()
    }
}

impl AxisScale for ScaleBand {
    fn kind(&self) -> ScaleKind {
        ScaleKind::Ordinal
    }

    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn set_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) {
        self.range = range;
    }

    fn map(&self, key: f64) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let along = bw * self.padding_outer + step * self.index(key);
        if r1 >= r0 {
            r0 + along
        } else {
            r0 - along - bw
        }
    }

    fn copy(&self) -> Box<dyn AxisScale> {
        Box::new(*self)
    }

    fn domain_values(&self) -> Vec<f64> {
        let (d0, d1) = self.domain;
        let dir = if d1 >= d0 { 1.0 } else { -1.0 };
        (0..self.count()).map(|i| d0 + dir * i as f64).collect()
    }

    fn range_band(&self) -> Option<f64> {
        Some(self.band_width())
    }
}

/// Smallest gap between consecutive ticks, or `0` when unknown.
pub(crate) fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_ticks_are_nice_and_inside_the_domain() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 1.0));
        assert_eq!(
            s.ticks(5),
            Some(alloc::vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0])
        );

        let s = ScaleLinear::new((-5.0, 5.0), (0.0, 1.0));
        assert_eq!(s.ticks(5), Some(alloc::vec![-4.0, -2.0, 0.0, 2.0, 4.0]));
    }

    #[test]
    fn linear_fractional_ticks_are_exact() {
        let s = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));
        let ticks = s.ticks(5).unwrap();
        assert_eq!(ticks, alloc::vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn linear_descending_domain_yields_descending_ticks() {
        let s = ScaleLinear::new((30.0, 10.0), (0.0, 1.0));
        let ticks = s.ticks(2).unwrap();
        assert_eq!(ticks.first().copied(), Some(30.0));
        assert_eq!(ticks.last().copied(), Some(10.0));
    }

    #[test]
    fn linear_scale_maps_descending_ranges() {
        let s = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        assert!((s.map(0.0) - 100.0).abs() < 1e-9);
        assert!((s.map(2.5) - 75.0).abs() < 1e-9);
    }

    #[test]
    fn linear_tick_format_uses_step_precision() {
        let s = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));
        let f = s.tick_format(5).unwrap();
        assert_eq!(f(0.4), "0.4");
        assert_eq!(f(1.0), "1.0");
    }

    #[test]
    fn log_scale_maps_endpoints_to_range() {
        let s = ScaleLog::new((1.0, 100.0), (0.0, 10.0));
        assert!((s.map(1.0) - 0.0).abs() < 1e-9);
        assert!((s.map(100.0) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn log_ticks_subdivide_short_domains() {
        let s = ScaleLog::new((1.0, 5.0), (0.0, 1.0));
        assert_eq!(s.ticks(5), Some(alloc::vec![1.0, 2.0, 3.0, 4.0, 5.0]));
    }

    #[test]
    fn log_ticks_use_powers_for_wide_domains() {
        let s = ScaleLog::new((1.0, 1.0e6), (0.0, 1.0));
        let ticks = s.ticks(3).unwrap();
        assert_eq!(ticks.len(), 7);
        assert!((ticks[6] - 1.0e6).abs() < 1e-6);
    }

    #[test]
    fn time_scale_formats_with_clock_notation() {
        let s = ScaleTime::new((0.0, 300.0), (0.0, 1.0));
        let f = s.tick_format(5).unwrap();
        assert_eq!(f(120.0), "2:00");
    }

    #[test]
    fn band_scale_positions_are_monotonic_and_banded() {
        let s = ScaleBand::new((1.0, 3.0), (0.0, 100.0));
        assert_eq!(s.count(), 3);
        let a = s.map(1.0);
        let b = s.map(2.0);
        let c = s.map(3.0);
        assert!(a < b && b < c);
        let bw = s.range_band().unwrap();
        assert!(c + bw <= 100.0 + 1e-9);
        assert_eq!(s.domain_values(), alloc::vec![1.0, 2.0, 3.0]);
        assert!(s.ticks(5).is_none());
    }

    #[test]
    fn band_scale_honors_descending_ranges() {
        let s = ScaleBand::new((1.0, 3.0), (100.0, 0.0));
        let a = s.map(1.0);
        let c = s.map(3.0);
        assert!(a > c, "first key should sit at the high end: {a} vs {c}");
        assert!(c >= -1e-9);
    }

    #[test]
    fn copies_are_independent() {
        let original = ScaleLinear::default();
        let mut copy = original.copy();
        copy.set_domain((5.0, 6.0));
        assert_eq!(original.domain(), (0.0, 1.0));
        assert_eq!(copy.domain(), (5.0, 6.0));
    }
}
