use approx::assert_abs_diff_eq;
use tempest_core::{PathGenerator, PathSpec, PositiveProportion, Statistic, TimeOfMax};

#[test]
fn statistics_stay_in_range() {
    let generator = PathGenerator::new(PathSpec::from_dt(0.01).unwrap());

    for path_id in 0..200 {
        let path = generator.sample_for_path(42, path_id);
        let proportion = PositiveProportion.reduce(&path);
        assert!(
            (0.0..=1.0).contains(&proportion),
            "proportion {} out of range for path {}",
            proportion,
            path_id
        );

        let t_max = TimeOfMax.reduce(&path);
        assert!(
            (0.0..=path.horizon()).contains(&t_max),
            "time of max {} out of range for path {}",
            t_max,
            path_id
        );
    }
}

#[test]
fn time_of_max_points_at_the_maximum() {
    let generator = PathGenerator::new(PathSpec::from_dt(0.001).unwrap());

    for path_id in 0..50 {
        let path = generator.sample_for_path(7, path_id);
        let t_max = TimeOfMax.reduce(&path);
        let index = (t_max / path.dt).round() as usize;
        let max = path
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(path.values[index], max, "path {}", path_id);
    }
}

#[test]
fn generation_is_deterministic_per_stream() {
    let generator = PathGenerator::new(PathSpec::from_dt(0.01).unwrap());

    let first = generator.sample_for_path(42, 3);
    let second = generator.sample_for_path(42, 3);
    assert_eq!(first.values, second.values);

    let other_stream = generator.sample_for_path(42, 4);
    assert_ne!(first.values, other_stream.values);

    let other_seed = generator.sample_for_path(43, 3);
    assert_ne!(first.values, other_seed.values);
}

#[test]
fn quadratic_variation_approximates_the_horizon() {
    // Sum of squared increments of a Brownian path over [0, 1] concentrates
    // around 1 as dt shrinks.
    let generator = PathGenerator::new(PathSpec::from_dt(0.001).unwrap());
    let path = generator.sample_for_path(42, 0);

    let qv: f64 = path
        .values
        .windows(2)
        .map(|w| {
            let step = w[1] - w[0];
            step * step
        })
        .sum();

    assert_abs_diff_eq!(qv, 1.0, epsilon = 0.2);
}

#[test]
fn increments_have_the_prescribed_scale() {
    let dt = 0.0001;
    let generator = PathGenerator::new(PathSpec::from_dt(dt).unwrap());
    let path = generator.sample_for_path(42, 0);

    let n = path.len() - 1;
    let mean: f64 = path.values.windows(2).map(|w| w[1] - w[0]).sum::<f64>() / n as f64;
    let var: f64 = path
        .values
        .windows(2)
        .map(|w| {
            let step = w[1] - w[0];
            (step - mean) * (step - mean)
        })
        .sum::<f64>()
        / (n - 1) as f64;

    // Increment variance is dt; with 10_000 draws the sample variance sits
    // within a few percent.
    assert_abs_diff_eq!(var, dt, epsilon = dt * 0.1);
    assert!(mean.abs() < 4.0 * (dt / n as f64).sqrt());
}
