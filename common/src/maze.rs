pub mod maker;
pub mod markers;

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::{SeedableRng, rngs::StdRng};
use strum::IntoEnumIterator;
use thiserror::Error;

pub use maker::Algorithm;
use maker::MazeMaker;
pub use markers::Markers;

use crate::orientation::Orientation;
use crate::position::Position;
use crate::solving::{Marker, MazeModel};

pub const WALL: u8 = 1;
pub const SPACE: u8 = 0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {found:?} at column {column}, row {row}")]
    UnknownCell {
        column: usize,
        row: usize,
        found: char,
    },
    #[error("maze has no start (S)")]
    MissingStart,
    #[error("maze has no finish (F)")]
    MissingFinish,
    #[error("second start at {0}")]
    DuplicateStart(Position),
    #[error("second finish at {0}")]
    DuplicateFinish(Position),
}

#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    pub grid: Vec<Vec<u8>>, // Indexed `[row][column]`.
    pub spaces: Vec<(usize, usize)>,
    pub start: Position,
    pub finish: Position,
}

impl Maze {
    /// A perfect maze of `(2 * radius + 1)` cells square, from the top-left room to the bottom-right one.
    pub fn new(generator: Algorithm, radius: usize, seed: u64) -> Self {
        debug_assert!(radius > 0, "a maze needs at least one room");
        let maker = MazeMaker::new(radius, radius, generator, StdRng::seed_from_u64(seed));
        let grid = maker.grid;
        let spaces = collect_spaces(&grid);
        let last = (2 * radius).saturating_sub(1) as i32;

        Self {
            grid,
            spaces,
            start: Position::new(1, 1),
            finish: Position::new(last, last),
        }
    }

    pub fn width(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.grid.len()
    }

    pub fn is_open(&self, position: Position) -> bool {
        position
            .indices()
            .and_then(|(row, column)| self.grid.get(row)?.get(column))
            .is_some_and(|&cell| cell == SPACE)
    }

    pub fn open_neighbors(&self, position: Position) -> Vec<Position> {
        Orientation::iter()
            .map(|o| o.step_from(position))
            .filter(|&p| self.is_open(p))
            .collect()
    }

    /// Open cells reachable from the start, the start included.
    pub fn reachable_from_start(&self) -> usize {
        if !self.is_open(self.start) {
            return 0;
        }

        let mut visited = vec![vec![false; self.width()]; self.height()];
        let mut queue = VecDeque::new();
        let mut count = 0;

        if let Some((row, column)) = self.start.indices() {
            visited[row][column] = true;
        }
        queue.push_back(self.start);

        while let Some(position) = queue.pop_front() {
            count += 1;
            for next in self.open_neighbors(position) {
                if let Some((row, column)) = next.indices() {
                    if !visited[row][column] {
                        visited[row][column] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        count
    }

    /// Whether the open cells form a tree: all connected, no loops.
    pub fn is_perfect(&self) -> bool {
        let edges: usize = self
            .spaces
            .iter()
            .map(|&(row, column)| {
                let here = Position::new(column as i32, row as i32);
                [Orientation::Right, Orientation::Down]
                    .into_iter()
                    .filter(|o| self.is_open(o.step_from(here)))
                    .count()
            })
            .sum();

        !self.spaces.is_empty()
            && self.reachable_from_start() == self.spaces.len()
            && edges + 1 == self.spaces.len()
    }

    /// Walls as `██`, start and finish as `S`/`F`, visited cells as `··`.
    pub fn render(&self, markers: &Markers) -> String {
        self.grid
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &cell)| {
                        let position = Position::new(column as i32, row as i32);
                        self.glyph(cell, markers.get(position).unwrap_or_default(), position)
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }

    pub fn glyph(&self, cell: u8, marker: Marker, position: Position) -> &'static str {
        if cell != SPACE {
            return "██";
        }
        match marker {
            Marker::Start => "S ",
            Marker::Finish => "F ",
            Marker::Visited => "··",
            Marker::Unmarked if position == self.start => "S ",
            Marker::Unmarked if position == self.finish => "F ",
            Marker::Unmarked => "  ",
        }
    }

    /// The text form read by [`Maze::from_str`].
    pub fn to_text(&self) -> String {
        self.grid
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(column, &cell)| {
                        let position = Position::new(column as i32, row as i32);
                        if position == self.start {
                            'S'
                        } else if position == self.finish {
                            'F'
                        } else if cell == SPACE {
                            '.'
                        } else {
                            '#'
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

fn collect_spaces(grid: &[Vec<u8>]) -> Vec<(usize, usize)> {
    let mut spaces = Vec::new();
    for (i, row) in grid.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            if cell == SPACE {
                spaces.push((i, j));
            }
        }
    }
    spaces
}

impl MazeModel for Maze {
    fn start(&self) -> Position {
        self.start
    }

    fn reached_finish(&self, position: Position) -> bool {
        position == self.finish
    }

    fn can_move_to(&self, column: i32, row: i32) -> bool {
        self.is_open(Position::new(column, row))
    }
}

/// `#` is a wall; `.` and space are open; `S` and `F` mark the (open) start and finish.
impl FromStr for Maze {
    type Err = MazeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut grid: Vec<Vec<u8>> = Vec::new();
        let mut start = None;
        let mut finish = None;

        for (row, line) in text.lines().enumerate() {
            let mut cells = Vec::new();
            for (column, found) in line.chars().enumerate() {
                let position = Position::new(column as i32, row as i32);
                let cell = match found {
                    '#' => WALL,
                    '.' | ' ' => SPACE,
                    'S' => {
                        if start.replace(position).is_some() {
                            return Err(MazeError::DuplicateStart(position));
                        }
                        SPACE
                    }
                    'F' => {
                        if finish.replace(position).is_some() {
                            return Err(MazeError::DuplicateFinish(position));
                        }
                        SPACE
                    }
                    _ => return Err(MazeError::UnknownCell { column, row, found }),
                };
                cells.push(cell);
            }

            if let Some(first) = grid.first() {
                let expected = first.len();
                if cells.len() != expected {
                    return Err(MazeError::RaggedRow {
                        row,
                        expected,
                        found: cells.len(),
                    });
                }
            }
            grid.push(cells);
        }

        if grid.is_empty() || grid[0].is_empty() {
            return Err(MazeError::Empty);
        }

        let start = start.ok_or(MazeError::MissingStart)?;
        let finish = finish.ok_or(MazeError::MissingFinish)?;
        let spaces = collect_spaces(&grid);

        Ok(Self {
            grid,
            spaces,
            start,
            finish,
        })
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&Markers::for_maze(self)))
    }
}
