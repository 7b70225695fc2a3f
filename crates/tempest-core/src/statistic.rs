use crate::path::Path;
use serde::{Deserialize, Serialize};

/// Reduction of one path to a scalar sample.
pub trait Statistic: Send + Sync {
    /// Display name used in report lines and plot captions.
    fn name(&self) -> &'static str;

    fn reduce(&self, path: &Path) -> f64;
}

/// Fraction of a path's samples that are non-negative.
///
/// The initial X(0) = 0 counts as non-negative, so the output lies in
/// (0, 1] for generated paths and in [0, 1] for arbitrary value sequences.
#[derive(Copy, Clone, Debug, Default)]
pub struct PositiveProportion;

impl Statistic for PositiveProportion {
    fn name(&self) -> &'static str {
        "Proportion Positive"
    }

    fn reduce(&self, path: &Path) -> f64 {
        if path.is_empty() {
            return 0.0;
        }
        let non_negative = path.values.iter().filter(|v| **v >= 0.0).count();
        non_negative as f64 / path.len() as f64
    }
}

/// Time `argmax_i values[i] * dt` at which the path peaks.
///
/// Ties go to the lowest index, so a path that never rises above its
/// starting value reports time 0.0.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimeOfMax;

impl Statistic for TimeOfMax {
    fn name(&self) -> &'static str {
        "Time Of Maximum"
    }

    fn reduce(&self, path: &Path) -> f64 {
        let mut max_index = 0;
        let mut max_value = f64::NEG_INFINITY;
        for (i, &v) in path.values.iter().enumerate() {
            if v > max_value {
                max_value = v;
                max_index = i;
            }
        }
        max_index as f64 * path.dt
    }
}

/// Selectable statistic, the configuration-facing face of the reducers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatisticKind {
    ProportionPositive,
    TimeOfMax,
}

impl StatisticKind {
    pub fn statistic(&self) -> &'static dyn Statistic {
        match self {
            StatisticKind::ProportionPositive => &PositiveProportion,
            StatisticKind::TimeOfMax => &TimeOfMax,
        }
    }

    pub fn name(&self) -> &'static str {
        self.statistic().name()
    }
}
