use tempest_core::{PathGenerator, PathSpec, PositiveProportion, Statistic, TimeOfMax};
use tempest_sampler::BatchRunner;

fn main() -> anyhow::Result<()> {
    // Simulation parameters
    let dt = 0.01;
    let n_paths = 20_000;
    let seed = 42;

    let spec = PathSpec::from_dt(dt)?;

    println!("Brownian temperature walk, dt = {}, {} steps", dt, spec.n_steps());
    println!();

    // A few individual paths first
    let generator = PathGenerator::new(spec);
    for path_id in 0..5 {
        let path = generator.sample_for_path(seed, path_id);
        println!(
            "Path {}: proportion positive = {:.3}, time of max = {:.2}, final value = {:.3}",
            path_id,
            PositiveProportion.reduce(&path),
            TimeOfMax.reduce(&path),
            path.final_value().unwrap_or(0.0)
        );
    }

    // Batch estimates against the arcsine-law expectation of 1/2
    println!();
    println!("Batch estimates over {} paths:", n_paths);

    let statistics: [&dyn Statistic; 2] = [&PositiveProportion, &TimeOfMax];
    for statistic in statistics {
        let runner = BatchRunner::new(spec, statistic);
        let batch = runner.run(n_paths, seed)?;
        println!(
            "{}: mean = {:.4} +/- {:.4} (arcsine law: 0.5)",
            statistic.name(),
            batch.mean(),
            1.96 * batch.std_error()
        );
    }

    Ok(())
}
