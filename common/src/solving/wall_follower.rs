//! Right-hand wall follower.
//!
//! The walker keeps its right hand on the wall: at every cell it tries to turn
//! right, then to go straight, then to turn left, and only when all three are
//! blocked does it turn around. Visited cells stay traversable, so turning
//! around at a dead end retraces the corridor without any explicit stack.
//!
//! The walk is guaranteed to reach the finish of a perfect maze. On a maze with
//! loops, or when the finish is unreachable, it can circle forever; the
//! optional step ceiling turns that into [`SolveError::StepLimitExceeded`].

use log::{debug, trace, warn};
use serde::Serialize;
use strum::IntoEnumIterator;

use super::{AnnotationLog, Annotator, MazeModel, Marker, SolveError};
use crate::constants::DEFAULT_MAX_STEPS;
use crate::orientation::Orientation;
use crate::position::Position;

pub const INITIAL_ORIENTATION: Orientation = Orientation::Down;

/// The cell reached by moving one unit from `position` in `orientation`.
pub fn neighbor(position: Position, orientation: Orientation) -> Position {
    orientation.step_from(position)
}

/// Whether the neighbor in `orientation` is open. Blind to visitation history.
pub fn can_move<M: MazeModel + ?Sized>(
    maze: &M,
    position: Position,
    orientation: Orientation,
) -> bool {
    let target = neighbor(position, orientation);
    maze.can_move_to(target.column, target.row)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Turn {
    Right,
    Forward,
    Left,
    Reverse,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub turn: Turn,
    pub orientation: Orientation,
    pub target: Position,
}

impl Step {
    /// Dead-end reversals walk back over the previous cell and are not recorded in the path.
    pub fn is_retrace(&self) -> bool {
        self.turn == Turn::Reverse
    }
}

/// Applies the right-hand rule at `position`.
///
/// The reversed target is returned without a legality check: in a perfect
/// maze the cell behind is the one just vacated.
pub fn decide<M: MazeModel + ?Sized>(
    maze: &M,
    position: Position,
    orientation: Orientation,
) -> Step {
    let candidates = [
        (Turn::Right, orientation.rotate_right()),
        (Turn::Forward, orientation.forward()),
        (Turn::Left, orientation.rotate_left()),
    ];

    for (turn, next) in candidates {
        if can_move(maze, position, next) {
            return Step {
                turn,
                orientation: next,
                target: neighbor(position, next),
            };
        }
    }

    let back = orientation.reverse();
    Step {
        turn: Turn::Reverse,
        orientation: back,
        target: neighbor(position, back),
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SolveStats {
    /// Every move, including retraces.
    pub steps: usize,
    pub retraces: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    /// Cells in the order they were entered, start excluded, finish included.
    pub path: Vec<Position>,
    pub stats: SolveStats,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WallFollower {
    initial_orientation: Orientation,
    max_steps: Option<usize>,
}

impl Default for WallFollower {
    fn default() -> Self {
        Self {
            initial_orientation: INITIAL_ORIENTATION,
            max_steps: Some(DEFAULT_MAX_STEPS),
        }
    }
}

impl WallFollower {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` walks until the finish is found, which never happens on some cyclic mazes.
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_initial_orientation(mut self, orientation: Orientation) -> Self {
        self.initial_orientation = orientation;
        self
    }

    pub fn initial_orientation(&self) -> Orientation {
        self.initial_orientation
    }

    pub fn solve<M, A>(&self, maze: &M, annotator: &mut A) -> Result<Vec<Position>, SolveError>
    where
        M: MazeModel + ?Sized,
        A: Annotator + ?Sized,
    {
        self.solve_with_stats(maze, annotator)
            .map(|solution| solution.path)
    }

    /// Solves a model that is also its own annotation channel.
    ///
    /// Writes are buffered during the walk and replayed in order once it
    /// returns, so the end state matches writing them directly.
    pub fn solve_in_place<M>(&self, maze: &mut M) -> Result<Vec<Position>, SolveError>
    where
        M: MazeModel + Annotator,
    {
        let mut log = AnnotationLog::new();
        let result = self.solve(&*maze, &mut log);
        log.replay(maze);
        result
    }

    pub fn solve_with_stats<M, A>(
        &self,
        maze: &M,
        annotator: &mut A,
    ) -> Result<Solution, SolveError>
    where
        M: MazeModel + ?Sized,
        A: Annotator + ?Sized,
    {
        let start = maze.start();

        if !maze.reached_finish(start) && !Orientation::iter().any(|o| can_move(maze, start, o)) {
            return Err(SolveError::StartEnclosed(start));
        }

        debug!(
            "wall follower starting at {} facing {}",
            start, self.initial_orientation
        );

        let mut path = Vec::new();
        let mut stats = SolveStats::default();
        let mut position = start;
        let mut orientation = self.initial_orientation;

        loop {
            if maze.reached_finish(position) {
                annotator.set_square_value(position.column, position.row, Marker::Finish);
                break;
            }

            if position != start {
                annotator.set_square_value(position.column, position.row, Marker::Visited);
            }

            if let Some(limit) = self.max_steps {
                if stats.steps >= limit {
                    warn!(
                        "no finish after {} steps, stopping at {}; is the maze cyclic?",
                        limit, position
                    );
                    return Err(SolveError::StepLimitExceeded { limit, position });
                }
            }

            let step = decide(maze, position, orientation);
            stats.steps += 1;

            if step.is_retrace() {
                stats.retraces += 1;
                debug!("dead end at {}, turning {}", position, step.orientation);
            } else {
                trace!("{} -> {} ({:?})", position, step.target, step.turn);
                path.push(step.target);
            }

            position = step.target;
            orientation = step.orientation;
        }

        annotator.set_square_value(start.column, start.row, Marker::Start);

        debug!(
            "reached finish at {} in {} steps ({} retraced), path length {}",
            position,
            stats.steps,
            stats.retraces,
            path.len()
        );

        Ok(Solution { path, stats })
    }
}
