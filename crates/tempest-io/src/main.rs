use clap::Parser;
use tempest_io::cli::{run_sweep_command, run_trajectory_command, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Sweep {
            statistic,
            delta_ts,
            samples,
            seed,
            bins,
            out_dir,
            no_plots,
        } => run_sweep_command(statistic, &delta_ts, samples, seed, bins, &out_dir, no_plots),
        Commands::Trajectory { dt, seed, out_dir } => run_trajectory_command(dt, seed, &out_dir),
    }
}
