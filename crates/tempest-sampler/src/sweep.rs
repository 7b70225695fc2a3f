use crate::batch::{Batch, BatchRunner};
use serde::{Deserialize, Serialize};
use tempest_core::{mix_seed, ParamError, PathSpec, Statistic};

/// Per-dt batches of one statistic, in the order the dt values were given.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub points: Vec<Batch>,
}

impl Sweep {
    /// (dt, mean statistic) rows for the summary curve.
    pub fn means(&self) -> Vec<(f64, f64)> {
        self.points.iter().map(|b| (b.dt, b.mean())).collect()
    }
}

/// Runs one batch per dt value. Pure orchestration over [`BatchRunner`];
/// batches share nothing but the statistic and the sample count.
pub struct SweepRunner<'a> {
    statistic: &'a dyn Statistic,
    num_samples: usize,
    seed: u64,
}

impl<'a> SweepRunner<'a> {
    pub fn new(statistic: &'a dyn Statistic, num_samples: usize, seed: u64) -> Self {
        Self {
            statistic,
            num_samples,
            seed,
        }
    }

    pub fn run(&self, delta_ts: &[f64]) -> Result<Sweep, ParamError> {
        if self.num_samples == 0 {
            return Err(ParamError::ZeroSamples);
        }

        let mut points = Vec::with_capacity(delta_ts.len());
        for (index, &dt) in delta_ts.iter().enumerate() {
            let spec = PathSpec::from_dt(dt)?;
            let runner = BatchRunner::new(spec, self.statistic);
            // Batch ids live in the upper half of the stream-id space so
            // their path streams never collide across batches.
            let batch_seed = mix_seed(self.seed, (index as u64) << 32);
            points.push(runner.run(self.num_samples, batch_seed)?);
        }

        Ok(Sweep { points })
    }
}
