use serde_json::json;
use std::fs::File;
use std::io::Write;
use tempest_core::{PathSpec, PositiveProportion, Statistic, TimeOfMax};
use tempest_sampler::BatchRunner;

#[test]
fn both_statistics_center_on_one_half() {
    // By the arcsine laws both the occupation fraction and the argmax time
    // of a Brownian path on [0, 1] are symmetric around 1/2. The arcsine
    // variance is 1/8, so with 4000 samples the mean carries a standard
    // error of ~0.0056; 0.03 is a wide tolerance.
    let n_samples = 4000;
    let spec = PathSpec::from_dt(0.001).unwrap();

    let statistics: [&dyn Statistic; 2] = [&PositiveProportion, &TimeOfMax];
    let mut report = Vec::new();

    for statistic in statistics {
        let runner = BatchRunner::new(spec, statistic);
        let batch = runner.run(n_samples, 42).unwrap();
        let mean = batch.mean();
        let variance = batch.variance();

        report.push(json!({
            "statistic": statistic.name(),
            "dt": batch.dt,
            "n_samples": n_samples,
            "mean": mean,
            "variance": variance,
            "expected_mean": 0.5,
            "expected_variance": 0.125,
        }));

        println!(
            "{}: mean {:.4} (expected 0.5), variance {:.4} (arcsine 0.125)",
            statistic.name(),
            mean,
            variance
        );

        assert!(
            (mean - 0.5).abs() < 0.03,
            "{} mean {} strays from 0.5",
            statistic.name(),
            mean
        );
    }

    std::fs::create_dir_all("runs").ok();
    let mut file = File::create("runs/arcsine_moments.json").unwrap();
    write!(file, "{}", serde_json::to_string(&report).unwrap()).unwrap();
}
