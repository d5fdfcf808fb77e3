pub mod wall_follower;

use thiserror::Error;

use crate::position::Position;

pub use wall_follower::{Solution, SolveStats, Step, Turn, WallFollower};

/// Read-only view of a maze. Implementors own the grid; solvers only ask questions.
pub trait MazeModel {
    fn start(&self) -> Position;
    fn reached_finish(&self, position: Position) -> bool;
    /// True iff the cell is inside the maze and not a wall.
    fn can_move_to(&self, column: i32, row: i32) -> bool;
}

impl<M: MazeModel + ?Sized> MazeModel for &M {
    fn start(&self) -> Position {
        (**self).start()
    }

    fn reached_finish(&self, position: Position) -> bool {
        (**self).reached_finish(position)
    }

    fn can_move_to(&self, column: i32, row: i32) -> bool {
        (**self).can_move_to(column, row)
    }
}

/// Write-only presentation channel. Solvers never read markers back.
pub trait Annotator {
    fn set_square_value(&mut self, column: i32, row: i32, marker: Marker);
}

impl<A: Annotator + ?Sized> Annotator for &mut A {
    fn set_square_value(&mut self, column: i32, row: i32, marker: Marker) {
        (**self).set_square_value(column, row, marker);
    }
}

/// Cell annotation values. The numbers are what renderers expect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    #[default]
    Unmarked,
    Start,
    Visited,
    Finish,
}

impl From<Marker> for u8 {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Unmarked => 0,
            Marker::Start => 1,
            Marker::Visited => 2,
            Marker::Finish => 3,
        }
    }
}

impl TryFrom<u8> for Marker {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Marker::Unmarked),
            1 => Ok(Marker::Start),
            2 => Ok(Marker::Visited),
            3 => Ok(Marker::Finish),
            other => Err(other),
        }
    }
}

/// Discards every write.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoAnnotation;

impl Annotator for NoAnnotation {
    fn set_square_value(&mut self, _column: i32, _row: i32, _marker: Marker) {}
}

/// Annotation writes in the order they were made.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnnotationLog {
    pub writes: Vec<(Position, Marker)>,
}

impl AnnotationLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replay(&self, annotator: &mut impl Annotator) {
        for (position, marker) in &self.writes {
            annotator.set_square_value(position.column, position.row, *marker);
        }
    }

    /// The last marker written to `position`, if any.
    pub fn marker_at(&self, position: Position) -> Option<Marker> {
        self.writes
            .iter()
            .rev()
            .find(|(p, _)| *p == position)
            .map(|(_, marker)| *marker)
    }
}

impl Annotator for AnnotationLog {
    fn set_square_value(&mut self, column: i32, row: i32, marker: Marker) {
        self.writes.push((Position::new(column, row), marker));
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("gave up after {limit} steps without reaching the finish (last at {position})")]
    StepLimitExceeded { limit: usize, position: Position },

    #[error("start {0} has no open neighbor")]
    StartEnclosed(Position),
}

impl SolveError {
    pub fn is_step_limit(&self) -> bool {
        matches!(self, SolveError::StepLimitExceeded { .. })
    }
}
