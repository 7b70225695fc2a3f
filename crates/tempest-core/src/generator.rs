use crate::noise::NoiseSource;
use crate::path::{Path, PathSpec};

/// Generates one trajectory per call by prefix-summing normal increments.
///
/// Each increment is drawn N(0, dt), so the resulting walk approximates
/// standard Brownian motion on the unit horizon with X(0) = 0.
#[derive(Clone, Debug)]
pub struct PathGenerator {
    spec: PathSpec,
    sqrt_dt: f64,
}

impl PathGenerator {
    pub fn new(spec: PathSpec) -> Self {
        let sqrt_dt = spec.dt().sqrt();
        Self { spec, sqrt_dt }
    }

    pub fn spec(&self) -> &PathSpec {
        &self.spec
    }

    /// Generate one path, consuming `n_steps` draws from `noise`.
    pub fn sample(&self, noise: &mut NoiseSource) -> Path {
        let mut values = Vec::with_capacity(self.spec.n_steps() + 1);
        let mut current = 0.0;
        values.push(current);
        for _ in 0..self.spec.n_steps() {
            current += noise.increment(self.sqrt_dt);
            values.push(current);
        }
        Path::new(self.spec.dt(), values)
    }

    /// Generate the path for a given id on its own deterministic stream.
    pub fn sample_for_path(&self, global_seed: u64, path_id: u64) -> Path {
        let mut noise = NoiseSource::for_path(global_seed, path_id);
        self.sample(&mut noise)
    }
}
