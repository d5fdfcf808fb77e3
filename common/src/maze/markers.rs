use crate::position::Position;
use crate::solving::{Annotator, Marker};

use super::Maze;

/// Presentation layer kept beside a [`Maze`]: one [`Marker`] per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Markers {
    cells: Vec<Vec<u8>>,
}

impl Markers {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![vec![u8::from(Marker::Unmarked); width]; height],
        }
    }

    pub fn for_maze(maze: &Maze) -> Self {
        Self::new(maze.width(), maze.height())
    }

    /// `None` outside the grid or for a raw value that is not a marker.
    pub fn get(&self, position: Position) -> Option<Marker> {
        let (row, column) = position.indices()?;
        let raw = *self.cells.get(row)?.get(column)?;
        Marker::try_from(raw).ok()
    }

    /// Writes outside the grid are dropped.
    pub fn set(&mut self, position: Position, marker: Marker) {
        let Some((row, column)) = position.indices() else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = u8::from(marker);
        }
    }

    pub fn count(&self, marker: Marker) -> usize {
        let raw = u8::from(marker);
        self.cells.iter().flatten().filter(|&&cell| cell == raw).count()
    }

}

impl Annotator for Markers {
    fn set_square_value(&mut self, column: i32, row: i32, marker: Marker) {
        self.set(Position::new(column, row), marker);
    }
}
