use serde::{Deserialize, Serialize};
use tempest_core::StatisticKind;
use uuid::Uuid;

/// Record of one sweep run, written next to the rendered plots so any
/// output can be regenerated from the manifest alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub timestamp: String,
    pub seed: u64,
    pub statistic: StatisticKind,
    pub delta_ts: Vec<f64>,
    pub num_samples: usize,
    pub bins: usize,
    pub version: String,
}

impl RunManifest {
    pub fn new(
        seed: u64,
        statistic: StatisticKind,
        delta_ts: &[f64],
        num_samples: usize,
        bins: usize,
    ) -> Self {
        Self {
            run_id: Uuid::new_v4().to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            seed,
            statistic,
            delta_ts: delta_ts.to_vec(),
            num_samples,
            bins,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let manifest = serde_json::from_str(&json)?;
        Ok(manifest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_round_trips_through_json() {
        let manifest = RunManifest::new(
            42,
            StatisticKind::TimeOfMax,
            &[0.01, 0.001],
            10_000,
            30,
        );
        let json = serde_json::to_string(&manifest).unwrap();
        let back: RunManifest = serde_json::from_str(&json).unwrap();
        assert_eq!(manifest, back);
    }

    #[test]
    fn statistic_kind_serializes_snake_case() {
        let manifest = RunManifest::new(1, StatisticKind::ProportionPositive, &[0.01], 10, 30);
        let json = serde_json::to_string(&manifest).unwrap();
        assert!(json.contains("\"proportion_positive\""));
    }
}
