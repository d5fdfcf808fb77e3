use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};

use common::config::{SolverConfig, parse_max_steps, parse_radius};
use common::maze::Algorithm;

#[derive(Parser, Debug)]
#[command(author, version, about = "Solve a maze by keeping a right hand on the wall", long_about = None)]
pub struct Cli {
    /// Text maze to solve (`#` wall, `.` open, `S` start, `F` finish); a maze is generated otherwise
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Generator for the maze [env: MAZE_ALGORITHM]
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Rooms from the centre to the edge of a generated maze [env: MAZE_RADIUS]
    #[arg(short, long, value_parser = parse_radius)]
    pub radius: Option<usize>,

    /// Seed for the generator; random when omitted [env: MAZE_SEED]
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Give up after this many steps; `none` or `0` walks without a limit [env: MAZE_MAX_STEPS]
    #[arg(long)]
    pub max_steps: Option<StepLimit>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Print the maze without terminal colours
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepLimit(pub Option<usize>);

impl FromStr for StepLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_max_steps(s).map(StepLimit)
    }
}

impl Cli {
    /// Flags given on the command line win over the environment.
    pub fn apply(&self, mut config: SolverConfig) -> SolverConfig {
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(radius) = self.radius {
            config.radius = radius;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(StepLimit(max_steps)) = self.max_steps {
            config.max_steps = max_steps;
        }
        config
    }
}
