use crate::ParamError;
use serde::{Deserialize, Serialize};

pub type Time = f64;

/// Discretization of the unit time horizon.
///
/// A spec fixes the step size `dt` and the step count `n_steps = floor(1/dt)`,
/// so the final sampled time `n_steps * dt` sits at (or just below) 1.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PathSpec {
    dt: f64,
    n_steps: usize,
}

impl PathSpec {
    /// Validate `dt` and derive the step count. Fails fast on any step size
    /// that cannot discretize [0, 1] into at least one full step.
    pub fn from_dt(dt: f64) -> Result<Self, ParamError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(ParamError::NonPositiveStep(dt));
        }
        let recip = 1.0 / dt;
        if !recip.is_finite() || recip > usize::MAX as f64 {
            return Err(ParamError::StepCountOverflow(dt));
        }
        // Nudge before flooring: 1/1e-5 lands just below 1e5 in f64.
        let n_steps = (recip * (1.0 + 1e-12)).floor() as usize;
        if n_steps == 0 {
            return Err(ParamError::StepTooCoarse(dt));
        }
        Ok(Self { dt, n_steps })
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Time of the final sample, `n_steps * dt`.
    pub fn horizon(&self) -> Time {
        self.n_steps as f64 * self.dt
    }
}

/// One simulated trajectory over the unit horizon.
///
/// `values[i]` is the cumulative value at time `i * dt`; `values[0]` is the
/// initial condition X(0) = 0, and the final entry sits at the horizon. A
/// path is immutable once generated and is normally dropped right after it
/// has been reduced to a scalar statistic.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub dt: f64,
    pub values: Vec<f64>,
}

impl Path {
    pub fn new(dt: f64, values: Vec<f64>) -> Self {
        Self { dt, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sample times, aligned with `values`.
    pub fn times(&self) -> impl Iterator<Item = Time> {
        let dt = self.dt;
        (0..self.values.len()).map(move |i| i as f64 * dt)
    }

    /// Time of the last sample, 0.0 for an empty path.
    pub fn horizon(&self) -> Time {
        self.values.len().saturating_sub(1) as f64 * self.dt
    }

    pub fn final_value(&self) -> Option<f64> {
        self.values.last().copied()
    }
}
