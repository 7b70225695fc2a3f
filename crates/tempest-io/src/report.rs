use tempest_sampler::{Batch, Sweep};

/// One summary line per batch, `Delta_t: <dt>, <name>: <mean>`.
pub fn sweep_lines(sweep: &Sweep, statistic_name: &str) -> Vec<String> {
    sweep
        .points
        .iter()
        .map(|batch| batch_line(batch, statistic_name))
        .collect()
}

pub fn batch_line(batch: &Batch, statistic_name: &str) -> String {
    format!(
        "Delta_t: {}, {}: {:.6}",
        batch.dt,
        statistic_name,
        batch.mean()
    )
}

/// Dispersion line printed under each summary line.
pub fn dispersion_line(batch: &Batch) -> String {
    format!(
        "  n: {}, variance: {:.6}, std error: {:.6}",
        batch.len(),
        batch.variance(),
        batch.std_error()
    )
}
