use std::{io, process};

use clap::Parser;

use common::{SolveError, config::SolverConfig};
use solver::{Cli, RunError};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let config = match SolverConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = solver::run_solver(&cli, config, &mut out) {
        eprintln!("Error: {}.", e);
        if let RunError::Solve(SolveError::StepLimitExceeded { .. }) = e {
            eprintln!("Does the maze have loops? Pass `--max-steps none` to walk without a limit.");
        }
        process::exit(1);
    }
}
