use crate::{manifest::RunManifest, plot, report};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tempest_core::{PathGenerator, PathSpec, StatisticKind};
use tempest_sampler::{Histogram, SweepRunner};

#[derive(Parser)]
#[command(name = "tempest")]
#[command(about = "Monte Carlo statistics of a discretized Brownian temperature walk")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate a path statistic across several time-step sizes
    Sweep {
        /// Statistic to reduce each path to
        #[arg(long, value_enum, default_value = "proportion-positive")]
        statistic: StatisticArg,

        /// Time-step sizes, comma separated
        #[arg(
            long = "dt",
            value_delimiter = ',',
            default_values_t = [0.01, 0.001, 0.0001, 0.00001]
        )]
        delta_ts: Vec<f64>,

        /// Paths per time-step size
        #[arg(long, default_value_t = 10_000)]
        samples: usize,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Histogram bin count
        #[arg(long, default_value_t = 30)]
        bins: usize,

        /// Output directory for plots and the run manifest
        #[arg(long, default_value = "runs")]
        out_dir: PathBuf,

        /// Skip PNG rendering, print the report only
        #[arg(long)]
        no_plots: bool,
    },

    /// Generate a single path and render its trajectory
    Trajectory {
        /// Time-step size
        #[arg(long, default_value_t = 0.01)]
        dt: f64,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Output directory for the trajectory plot
        #[arg(long, default_value = "runs")]
        out_dir: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum StatisticArg {
    #[value(name = "proportion-positive")]
    ProportionPositive,
    #[value(name = "time-of-max")]
    TimeOfMax,
}

impl From<StatisticArg> for StatisticKind {
    fn from(arg: StatisticArg) -> Self {
        match arg {
            StatisticArg::ProportionPositive => StatisticKind::ProportionPositive,
            StatisticArg::TimeOfMax => StatisticKind::TimeOfMax,
        }
    }
}

pub fn run_sweep_command(
    statistic: StatisticArg,
    delta_ts: &[f64],
    samples: usize,
    seed: u64,
    bins: usize,
    out_dir: &std::path::Path,
    no_plots: bool,
) -> anyhow::Result<()> {
    let kind: StatisticKind = statistic.into();
    let reducer = kind.statistic();

    println!("tempest sweep");
    println!("=============");
    println!("Statistic: {}", reducer.name());
    println!("Delta_t values: {:?}", delta_ts);
    println!("Samples per batch: {}", samples);
    println!("Seed: {}", seed);
    println!();

    let runner = SweepRunner::new(reducer, samples, seed);
    let sweep = runner.run(delta_ts)?;

    for (batch, line) in sweep
        .points
        .iter()
        .zip(report::sweep_lines(&sweep, reducer.name()))
    {
        println!("{}", line);
        println!("{}", report::dispersion_line(batch));
    }

    if no_plots {
        return Ok(());
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    for batch in &sweep.points {
        let hist = Histogram::from_samples(&batch.samples, 0.0, 1.0, bins);
        let caption = format!("{} distribution, Delta_t = {}", reducer.name(), batch.dt);
        let out = out_dir.join(format!("hist_dt_{}.png", batch.dt));
        plot::histogram(&hist, &caption, reducer.name(), &out).map_err(render_err)?;
    }

    let curve_out = out_dir.join("mean_vs_dt.png");
    plot::mean_curve(&sweep.means(), reducer.name(), &curve_out).map_err(render_err)?;

    let manifest = RunManifest::new(seed, kind, delta_ts, samples, bins);
    let manifest_out = out_dir.join("manifest.json");
    manifest.save_to_file(&manifest_out)?;

    println!();
    println!("Wrote plots and manifest to {}", out_dir.display());
    Ok(())
}

pub fn run_trajectory_command(
    dt: f64,
    seed: u64,
    out_dir: &std::path::Path,
) -> anyhow::Result<()> {
    let spec = PathSpec::from_dt(dt)?;
    let generator = PathGenerator::new(spec);
    let path = generator.sample_for_path(seed, 0);

    println!("tempest trajectory");
    println!("==================");
    println!("Delta_t: {}, steps: {}, seed: {}", dt, spec.n_steps(), seed);
    for kind in [StatisticKind::ProportionPositive, StatisticKind::TimeOfMax] {
        let reducer = kind.statistic();
        println!("{}: {:.6}", reducer.name(), reducer.reduce(&path));
    }

    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;
    let out = out_dir.join("trajectory.png");
    plot::trajectory(&path, &out).map_err(render_err)?;

    println!("Wrote trajectory plot to {}", out.display());
    Ok(())
}

fn render_err(e: Box<dyn std::error::Error>) -> anyhow::Error {
    anyhow::anyhow!("rendering failed: {}", e)
}
