use std::{
    fmt, fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use common::config::SolverConfig;
use common::{
    Algorithm, Markers, Maze, MazeError, Position, Solution, SolveError, SolveStats, WallFollower,
};

use crate::cli::{Cli, Format};
use crate::render;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse { path: PathBuf, source: MazeError },

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Where the maze came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Generated {
        algorithm: Algorithm,
        radius: usize,
        seed: u64,
    },
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Generated {
                algorithm,
                radius,
                seed,
            } => write!(f, "{algorithm}, radius {radius}, seed {seed}"),
        }
    }
}

pub struct Outcome {
    pub source: Source,
    pub maze: Maze,
    pub markers: Markers,
    pub solution: Solution,
}

#[derive(Serialize)]
struct Report<'a> {
    source: String,
    width: usize,
    height: usize,
    start: Position,
    finish: Position,
    path: &'a [Position],
    stats: SolveStats,
}

pub fn load_maze_file(path: &Path) -> Result<Maze, RunError> {
    let text = fs::read_to_string(path).map_err(|source| RunError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    text.parse().map_err(|source| RunError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn build_maze(file: Option<&Path>, config: &SolverConfig) -> Result<(Maze, Source), RunError> {
    if let Some(path) = file {
        let maze = load_maze_file(path)?;
        return Ok((maze, Source::File(path.to_path_buf())));
    }

    let seed = config.seed.unwrap_or_else(rand::random);
    let maze = Maze::new(config.algorithm, config.radius, seed);
    let source = Source::Generated {
        algorithm: config.algorithm,
        radius: config.radius,
        seed,
    };
    Ok((maze, source))
}

pub fn solve(file: Option<&Path>, config: &SolverConfig) -> Result<Outcome, RunError> {
    let (maze, source) = build_maze(file, config)?;
    info!("solving {} ({} x {})", source, maze.width(), maze.height());

    if !maze.is_perfect() {
        warn!(
            "{} has loops or unreachable cells; the wall follower may never find the finish",
            source
        );
    }

    let follower = WallFollower::new().with_max_steps(config.max_steps);
    let mut markers = Markers::for_maze(&maze);
    let solution = follower.solve_with_stats(&maze, &mut markers)?;

    Ok(Outcome {
        source,
        maze,
        markers,
        solution,
    })
}

pub fn run_solver(cli: &Cli, config: SolverConfig, out: &mut impl Write) -> Result<(), RunError> {
    let config = cli.apply(config);
    let outcome = solve(cli.file.as_deref(), &config)?;

    match cli.format {
        Format::Text => write_text_report(out, &outcome, !cli.no_color)?,
        Format::Json => write_json_report(out, &outcome)?,
    }

    Ok(())
}

pub fn write_text_report(out: &mut impl Write, outcome: &Outcome, color: bool) -> io::Result<()> {
    let Outcome {
        source,
        maze,
        markers,
        solution,
    } = outcome;

    writeln!(out, "  Maze:        {}", source)?;
    writeln!(out, "  Size:        {} x {}", maze.width(), maze.height())?;
    writeln!(out, "  Start:       {}", maze.start)?;
    writeln!(out, "  Finish:      {}", maze.finish)?;
    writeln!(out)?;

    if color {
        render::write_colored(out, maze, markers)?;
    } else {
        render::write_plain(out, maze, markers)?;
    }

    writeln!(out)?;
    writeln!(out, "  Path length: {}", solution.path.len())?;
    writeln!(
        out,
        "  Steps:       {} ({} retraced)",
        solution.stats.steps, solution.stats.retraces
    )
}

pub fn write_json_report(out: &mut impl Write, outcome: &Outcome) -> Result<(), RunError> {
    let report = Report {
        source: outcome.source.to_string(),
        width: outcome.maze.width(),
        height: outcome.maze.height(),
        start: outcome.maze.start,
        finish: outcome.maze.finish,
        path: &outcome.solution.path,
        stats: outcome.solution.stats,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}
