// Copyright 2025 the Axial Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick value and tick label resolution.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use crate::AxisConfig;
use crate::scale::{AxisScale, TickLabeler};

/// Explicit tick values, either all numeric or all categorical.
#[derive(Clone, Debug, PartialEq)]
pub enum TickValues {
    /// Numeric ticks, drawn at their own value.
    Numeric(Vec<f64>),
    /// Categorical ticks, drawn at keys `1..=len` and labeled with their text.
    Categorical(Vec<String>),
}

impl TickValues {
    /// Numeric tick values.
    pub fn numeric(values: impl IntoIterator<Item = f64>) -> Self {
        Self::Numeric(values.into_iter().collect())
    }

    /// Categorical tick values.
    pub fn categorical<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::Categorical(values.into_iter().map(Into::into).collect())
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Numeric(v) => v.len(),
            Self::Categorical(v) => v.len(),
        }
    }

    /// Returns `true` if there are no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for TickValues {
    fn from(values: Vec<f64>) -> Self {
        Self::Numeric(values)
    }
}

impl From<Vec<String>> for TickValues {
    fn from(values: Vec<String>) -> Self {
        Self::Categorical(values)
    }
}

/// A caller-supplied tick label format.
#[derive(Clone)]
pub enum TickFormat {
    /// Computes the label from the tick value and its index.
    Fn(Arc<dyn Fn(f64, usize) -> String>),
    /// Labels by tick index.
    ///
    /// An index past the end formats as the empty string.
    Labels(Vec<String>),
}

impl TickFormat {
    /// Wraps a formatting function.
    pub fn func(f: impl Fn(f64, usize) -> String + 'static) -> Self {
        Self::Fn(Arc::new(f))
    }

    /// Labels by tick index.
    pub fn labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::Labels(labels.into_iter().map(Into::into).collect())
    }
}

impl fmt::Debug for TickFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fn(_) => f.write_str("Fn(..)"),
            Self::Labels(labels) => f.debug_tuple("Labels").field(labels).finish(),
        }
    }
}

/// Resolved ticks.
#[derive(Clone, Debug, PartialEq)]
pub enum TickSet {
    /// Numeric ticks in domain units.
    Numeric(Vec<f64>),
    /// Categorical ticks: `keys[i]` is `i + 1` and labels `labels[i]`.
    Categorical {
        /// Display text per tick.
        labels: Vec<String>,
        /// Integer keys seen by the scale.
        keys: Vec<f64>,
    },
}

impl TickSet {
    /// Tick positions in domain units.
    pub fn keys(&self) -> &[f64] {
        match self {
            Self::Numeric(v) => v,
            Self::Categorical { keys, .. } => keys,
        }
    }

    /// Number of ticks.
    pub fn len(&self) -> usize {
        self.keys().len()
    }

    /// Returns `true` if there are no ticks.
    pub fn is_empty(&self) -> bool {
        self.keys().is_empty()
    }

    /// Returns `true` for categorical ticks.
    pub fn is_categorical(&self) -> bool {
        matches!(self, Self::Categorical { .. })
    }
}

#[derive(Clone)]
enum FormatterKind {
    Custom(Arc<dyn Fn(f64, usize) -> String>),
    Labels(Arc<[String]>),
    Scale(TickLabeler),
    Identity,
}

/// Turns `(tick, index)` into label text.
#[derive(Clone)]
pub struct TickFormatter {
    kind: FormatterKind,
}

impl TickFormatter {
    /// Formats the tick at `index`.
    pub fn format(&self, tick: f64, index: usize) -> String {
        match &self.kind {
            FormatterKind::Custom(f) => f(tick, index),
            FormatterKind::Labels(labels) => labels.get(index).cloned().unwrap_or_default(),
            FormatterKind::Scale(f) => f(tick),
            FormatterKind::Identity => alloc::format!("{tick}"),
        }
    }

    /// Formats every tick of `ticks`.
    pub fn format_all(&self, ticks: &TickSet) -> Vec<String> {
        ticks
            .keys()
            .iter()
            .enumerate()
            .map(|(i, &t)| self.format(t, i))
            .collect()
    }
}

impl fmt::Debug for TickFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match &self.kind {
            FormatterKind::Custom(_) => "Custom",
            FormatterKind::Labels(_) => "Labels",
            FormatterKind::Scale(_) => "Scale",
            FormatterKind::Identity => "Identity",
        };
        f.debug_struct("TickFormatter").field("kind", &name).finish()
    }
}

/// Resolves the ticks of an axis.
///
/// In order of preference: categorical tick values become keys `1..=len`; numeric tick values
/// are used verbatim; the scale's tick generator with the configured tick count (dropping `0`
/// on a crossing axis, even if that leaves no ticks); and, for scales without a tick
/// generator, the scale's domain values.
pub fn resolve_ticks(config: &AxisConfig, scale: &dyn AxisScale) -> TickSet {
    match config.tick_values.as_ref().filter(|v| !v.is_empty()) {
        Some(TickValues::Categorical(labels)) => {
            let keys = (1..=labels.len()).map(|k| k as f64).collect();
            return TickSet::Categorical {
                labels: labels.clone(),
                keys,
            };
        }
        Some(TickValues::Numeric(values)) => return TickSet::Numeric(values.clone()),
        None => {}
    }

    if let Some(mut ticks) = scale.ticks(config.tick_count) {
        if config.cross_axis {
            ticks.retain(|&t| t != 0.0);
        }
        tracing::debug!(count = ticks.len(), "ticks from scale");
        return TickSet::Numeric(ticks);
    }
    tracing::debug!("ticks from scale domain");
    TickSet::Numeric(scale.domain_values())
}

/// Resolves the tick label formatter.
///
/// In order of preference: an explicit format function; an explicit label array; the labels
/// of categorical ticks; the scale's formatter for `ticks.len()` ticks; and finally the
/// plain numeric value.
pub fn resolve_tick_format(
    config: &AxisConfig,
    scale: &dyn AxisScale,
    ticks: &TickSet,
) -> TickFormatter {
    let kind = match (&config.tick_format, ticks) {
        (Some(TickFormat::Fn(f)), _) => FormatterKind::Custom(f.clone()),
        (Some(TickFormat::Labels(labels)), _) => FormatterKind::Labels(labels.as_slice().into()),
        (None, TickSet::Categorical { labels, .. }) => {
            FormatterKind::Labels(labels.as_slice().into())
        }
        (None, TickSet::Numeric(_)) => match scale.tick_format(ticks.len()) {
            Some(f) => FormatterKind::Scale(f),
            None => FormatterKind::Identity,
        },
    };
    TickFormatter { kind }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::{ScaleBand, ScaleLinear};
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn categorical_ticks_become_one_based_keys() {
        let config = AxisConfig::new().with_tick_values(TickValues::categorical(["a", "b", "c"]));
        let ticks = resolve_ticks(&config, &ScaleLinear::default());
        assert_eq!(ticks.keys(), &[1.0, 2.0, 3.0]);
        assert!(ticks.is_categorical());
    }

    #[test]
    fn categorical_labels_format_by_index_for_any_scale() {
        let config = AxisConfig::new().with_tick_values(TickValues::categorical(["a", "b", "c"]));
        let band = ScaleBand::new((1.0, 3.0), (0.0, 100.0));
        for scale in [&ScaleLinear::default() as &dyn AxisScale, &band] {
            let ticks = resolve_ticks(&config, scale);
            let format = resolve_tick_format(&config, scale, &ticks);
            assert_eq!(format.format_all(&ticks), vec!["a", "b", "c"]);
        }
    }

    #[test]
    fn numeric_tick_values_are_verbatim() {
        let config = AxisConfig::new().with_tick_values(vec![5.0, 10.0, 0.0]);
        let ticks = resolve_ticks(&config, &ScaleLinear::default());
        assert_eq!(ticks, TickSet::Numeric(vec![5.0, 10.0, 0.0]));
    }

    #[test]
    fn cross_axis_drops_zero_from_generated_ticks() {
        let scale = ScaleLinear::new((-10.0, 10.0), (0.0, 1.0));
        let plain = resolve_ticks(&AxisConfig::new(), &scale);
        assert!(plain.keys().contains(&0.0));
        let crossing = resolve_ticks(&AxisConfig::new().with_cross_axis(true), &scale);
        assert!(!crossing.keys().contains(&0.0));
        assert_eq!(crossing.len(), plain.len() - 1);
    }

    #[test]
    fn cross_axis_keeps_explicit_zero() {
        let config = AxisConfig::new()
            .with_cross_axis(true)
            .with_tick_values(vec![0.0, 1.0]);
        let ticks = resolve_ticks(&config, &ScaleLinear::default());
        assert_eq!(ticks.keys(), &[0.0, 1.0]);
    }

    #[test]
    fn scales_without_tick_generators_fall_back_to_domain_values() {
        let band = ScaleBand::new((1.0, 4.0), (0.0, 100.0));
        let ticks = resolve_ticks(&AxisConfig::new(), &band);
        assert_eq!(ticks.keys(), &[1.0, 2.0, 3.0, 4.0]);
        let format = resolve_tick_format(&AxisConfig::new(), &band, &ticks);
        assert_eq!(format.format(2.0, 1), "2");
    }

    #[test]
    fn format_precedence_prefers_function_over_labels() {
        let ticks = TickSet::Numeric(vec![1.0, 2.0]);
        let scale = ScaleLinear::default();

        let config = AxisConfig::new().with_tick_format(TickFormat::func(|t, i| {
            alloc::format!("{i}:{t}")
        }));
        let f = resolve_tick_format(&config, &scale, &ticks);
        assert_eq!(f.format(2.0, 1), "1:2");

        let config = AxisConfig::new().with_tick_format(TickFormat::labels(["one"]));
        let f = resolve_tick_format(&config, &scale, &ticks);
        assert_eq!(f.format(1.0, 0), "one");
        assert_eq!(f.format(2.0, 1), "", "labels past the end are empty");
    }

    #[test]
    fn scale_formatter_is_used_without_explicit_format() {
        let scale = ScaleLinear::new((0.0, 1.0), (0.0, 1.0));
        let config = AxisConfig::new();
        let ticks = resolve_ticks(&config, &scale);
        let f = resolve_tick_format(&config, &scale, &ticks);
        assert_eq!(f.format(0.6000000000000001, 3), "0.6".to_string());
    }
}
