//! Command-line front end.
//!
//! ```sh
//! rs_pairforce run positions.txt masses.txt out/forces.txt --workers 4
//! rs_pairforce generate positions.txt masses.txt --count 1000 --seed 7
//! ```

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::{error, info};

use rs_pairforce::apis::{default_workers, run_job, JobConfig};
use rs_pairforce::io::{generate_point_set, write_point_set, Delimiter, GenerateConfig};
use rs_pairforce::utils::ForceConstants;

#[derive(Parser)]
#[command(name = "rs_pairforce")]
#[command(about = "All-pairs inverse-square force sums over parallel workers")]
#[command(version)]
struct Cli {
    /// Enable debug output.
    #[arg(long, global = true)]
    debug: bool,
    /// Also write logs to this directory.
    #[arg(long, global = true)]
    logs: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the net force on every point.
    Run {
        /// Position table, three fields per row.
        positions: PathBuf,
        /// Mass table, mass in the first field of each row.
        masses: PathBuf,
        /// Output force table.
        output: PathBuf,
        /// Number of workers (default: available CPUs).
        #[arg(short, long)]
        workers: Option<usize>,
        /// Interaction coefficient (default: 10.0).
        #[arg(short, long)]
        coefficient: Option<f64>,
        /// Input field delimiter: space, comma, tab or a single character.
        #[arg(short, long, default_value = "space")]
        delimiter: Delimiter,
        /// Output field delimiter.
        #[arg(long, default_value = "tab")]
        output_delimiter: Delimiter,
        /// Also parallelise rows inside each worker.
        #[arg(long)]
        parallel_rows: bool,
    },
    /// Write a random position table and mass table.
    Generate {
        positions: PathBuf,
        masses: PathBuf,
        /// Number of points.
        #[arg(short = 'n', long)]
        count: usize,
        /// Random seed (default: random).
        #[arg(long)]
        seed: Option<u64>,
        /// Coordinates fall in [-extent, extent).
        #[arg(long, default_value_t = 100.0)]
        extent: f64,
        #[arg(long, default_value_t = 1.0)]
        min_mass: f64,
        #[arg(long, default_value_t = 10.0)]
        max_mass: f64,
        #[arg(short, long, default_value = "space")]
        delimiter: Delimiter,
    },
}

fn execute(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Run {
            positions,
            masses,
            output,
            workers,
            coefficient,
            delimiter,
            output_delimiter,
            parallel_rows,
        } => {
            let config = JobConfig {
                positions_path: positions,
                masses_path: masses,
                output_path: output,
                constants: ForceConstants::new(coefficient),
                workers: workers.unwrap_or_else(default_workers),
                input_delimiter: delimiter,
                output_delimiter,
                parallel_rows,
            };
            run_job(&config).context("force computation failed")?;
            Ok(())
        }
        Commands::Generate {
            positions,
            masses,
            count,
            seed,
            extent,
            min_mass,
            max_mass,
            delimiter,
        } => {
            let config = GenerateConfig {
                count,
                seed: seed.unwrap_or_else(rand::random),
                extent,
                min_mass,
                max_mass,
            };
            info!("generating {} points with seed {}", config.count, config.seed);
            let points = generate_point_set(&config)?;
            write_point_set(&points, &positions, &masses, delimiter)?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.debug, cli.logs.as_deref()) {
        eprintln!("{:#}", err);
        return ExitCode::FAILURE;
    }

    match execute(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
