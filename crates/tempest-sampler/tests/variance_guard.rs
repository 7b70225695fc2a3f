use tempest_core::{PositiveProportion, Statistic, TimeOfMax};
use tempest_sampler::SweepRunner;

// Regression guard: refining the grid must not blow up the spread of the
// sample distribution. Both statistics live on [0, 1], and their limiting
// arcsine variance is 1/8, so a ceiling of 0.18 leaves ample Monte Carlo
// slack while still catching a degenerate reducer or generator.
#[test]
fn sample_variance_stays_bounded_as_dt_shrinks() {
    let delta_ts = [0.01, 0.005, 0.002];
    let statistics: [&dyn Statistic; 2] = [&PositiveProportion, &TimeOfMax];

    for statistic in statistics {
        let runner = SweepRunner::new(statistic, 2000, 42);
        let sweep = runner.run(&delta_ts).unwrap();

        for batch in &sweep.points {
            let variance = batch.variance();
            assert!(
                variance < 0.18,
                "{} variance {} at dt {} exceeds the arcsine ceiling",
                statistic.name(),
                variance,
                batch.dt
            );
        }
    }
}
