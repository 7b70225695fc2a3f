use serde::{Deserialize, Serialize};

/// Fixed-bin density histogram over a closed range.
///
/// Densities are normalized so the bars integrate to 1 when every sample
/// falls inside [min, max]; non-finite and out-of-range samples are dropped.
/// A sample equal to `max` lands in the last bin.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub min: f64,
    pub max: f64,
    pub densities: Vec<f64>,
    pub n_samples: usize,
}

impl Histogram {
    pub fn from_samples(samples: &[f64], min: f64, max: f64, bins: usize) -> Self {
        let bins = bins.max(1);
        let width = (max - min) / bins as f64;

        let mut counts = vec![0usize; bins];
        for &s in samples {
            if !s.is_finite() || s < min || s > max {
                continue;
            }
            let index = (((s - min) / width) as usize).min(bins - 1);
            counts[index] += 1;
        }

        let n = samples.len();
        let densities = counts
            .into_iter()
            .map(|c| {
                if n == 0 {
                    0.0
                } else {
                    c as f64 / (n as f64 * width)
                }
            })
            .collect();

        Self {
            min,
            max,
            densities,
            n_samples: n,
        }
    }

    pub fn bins(&self) -> usize {
        self.densities.len()
    }

    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.bins() as f64
    }

    pub fn bin_center(&self, index: usize) -> f64 {
        self.min + (index as f64 + 0.5) * self.bin_width()
    }

    pub fn max_density(&self) -> f64 {
        self.densities.iter().copied().fold(0.0, f64::max)
    }
}
