use std::cell::RefCell;
use std::collections::HashSet;

use common::{Annotator, Marker, MazeModel, Position};

/// A maze model double that records how a solver uses it.
pub struct MockMaze {
    /// **Open Cells:** the only cells `can_move_to` accepts. Everything else,
    /// including anything off the edge of the text, is wall.
    open: HashSet<Position>,

    start: Position,
    finish: Position,

    /// **Annotation Log:** every `set_square_value` call, in call order.
    /// Tests read this to check which markers a solve wrote, and when.
    pub writes: Vec<(Position, Marker)>,

    /// **Query Log:** every cell passed to `can_move_to`. Behind a `RefCell`
    /// because queries come through `&self`.
    queries: RefCell<Vec<Position>>,
}

impl MockMaze {
    /// `#` is wall; anything else is open. `S` and `F` must each appear once.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut open = HashSet::new();
        let mut start = None;
        let mut finish = None;

        for (row, line) in rows.iter().enumerate() {
            for (column, c) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                match c {
                    '#' => continue,
                    'S' => start = Some(position),
                    'F' => finish = Some(position),
                    _ => {}
                }
                open.insert(position);
            }
        }

        Self {
            open,
            start: start.expect("mock maze needs an S"),
            finish: finish.expect("mock maze needs an F"),
            writes: Vec::new(),
            queries: RefCell::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<Position> {
        self.queries.borrow().clone()
    }

    pub fn marker_at(&self, position: Position) -> Option<Marker> {
        self.writes
            .iter()
            .rev()
            .find(|(p, _)| *p == position)
            .map(|(_, m)| *m)
    }

    pub fn is_open(&self, position: Position) -> bool {
        self.open.contains(&position)
    }
}

impl MazeModel for MockMaze {
    fn start(&self) -> Position {
        self.start
    }

    fn reached_finish(&self, position: Position) -> bool {
        position == self.finish
    }

    fn can_move_to(&self, column: i32, row: i32) -> bool {
        let position = Position::new(column, row);
        self.queries.borrow_mut().push(position);
        self.open.contains(&position)
    }
}

impl Annotator for MockMaze {
    fn set_square_value(&mut self, column: i32, row: i32, marker: Marker) {
        self.writes.push((Position::new(column, row), marker));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_places_start_and_finish() {
        let maze = MockMaze::from_rows(&["#S#", "..F"]);

        assert_eq!(maze.start(), Position::new(1, 0));
        assert!(maze.reached_finish(Position::new(2, 1)));
        assert!(maze.is_open(Position::new(0, 1)));
        assert!(!maze.is_open(Position::new(0, 0)));
        assert!(maze.writes.is_empty());
        assert!(maze.queries().is_empty());
    }
}
