use std::fmt;

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid coordinate. `column` grows to the right, `row` grows downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub column: i32,
    pub row: i32,
}

impl Position {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns the grid indices `(row, column)` if both coordinates are non-negative.
    pub fn indices(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok()?;
        let column = usize::try_from(self.column).ok()?;
        Some((row, column))
    }

    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        let delta = IVec2::from(*other) - IVec2::from(*self);
        delta.abs().element_sum() == 1
    }
}

impl From<Position> for IVec2 {
    fn from(position: Position) -> Self {
        IVec2::new(position.column, position.row)
    }
}

impl From<IVec2> for Position {
    fn from(v: IVec2) -> Self {
        Position::new(v.x, v.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
