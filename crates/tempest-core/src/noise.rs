use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use rand_distr::{Distribution, StandardNormal};

/// Derive a stream seed from a global seed and a stream id.
///
/// Distinct ids map to well-separated seeds, so every path (and every batch
/// of a sweep) gets its own independent generator regardless of scheduling.
pub fn mix_seed(seed: u64, stream: u64) -> u64 {
    seed.wrapping_add(stream.wrapping_mul(0x9e3779b97f4a7c15))
}

/// Source of Brownian increments for a single path.
pub struct NoiseSource {
    rng: ChaCha20Rng,
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// One independent stream per path id.
    pub fn for_path(global_seed: u64, path_id: u64) -> Self {
        Self::new(mix_seed(global_seed, path_id))
    }

    /// Draw one increment dX ~ N(0, dt), passed as sqrt(dt).
    pub fn increment(&mut self, sqrt_dt: f64) -> f64 {
        let z: f64 = StandardNormal.sample(&mut self.rng);
        z * sqrt_dt
    }
}
