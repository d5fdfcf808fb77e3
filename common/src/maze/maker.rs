pub mod algorithms;

use std::collections::HashMap;

use rand::prelude::{IndexedRandom, Rng, StdRng};
use strum::{Display, EnumIter, EnumString};

use algorithms::{
    backtrack::Backtrack, binary_tree::BinaryTree, division::RecursiveDivision, kruskal::Kruskal,
    prim::Prim, wilson::Wilson,
};

/// Generators. Every one of them carves a perfect maze: one route between any two rooms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Algorithm {
    #[default]
    Backtrack, // Long winding corridors, few dead ends.
    BinaryTree,        // Four quadrants draining towards the centre.
    Kruskal,           // Lots of short dead ends.
    Prim,              // Lots of short dead ends, radial texture.
    RecursiveDivision, // Long straight walls.
    Wilson,            // Unbiased.
}

/// A room, always at odd grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub fn new(grid: &[Vec<u8>], x: usize, y: usize) -> Cell {
        debug_assert!(
            y < grid.len() && x < grid[0].len(),
            "cell coordinates are out of bounds"
        );

        Cell { x, y }
    }
}

/// Which way a wall segment runs. A horizontal wall separates vertically adjacent rooms.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Wall {
    pub x: usize,
    pub y: usize,
    pub axis: Axis,
}

impl Wall {
    fn between(grid: &[Vec<u8>], cell_1: Cell, cell_2: Cell) -> Wall {
        let x = (cell_1.x + cell_2.x) / 2;
        let y = (cell_1.y + cell_2.y) / 2;

        debug_assert!(
            y < grid.len() && x < grid[0].len(),
            "wall coordinates are out of bounds"
        );

        let axis = if cell_1.x == cell_2.x {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };

        Wall { x, y, axis }
    }
}

pub struct MazeMaker {
    pub grid: Vec<Vec<u8>>,
    pub rng: StdRng,
    width: usize,
    height: usize,
}

impl MazeMaker {
    pub fn new(
        horizontal_radius: usize,
        vertical_radius: usize,
        generator: Algorithm,
        rng: StdRng,
    ) -> Self {
        let width = 2 * horizontal_radius + 1;
        let height = 2 * vertical_radius + 1;

        let grid = vec![vec![1; width]; height];
        let mut maze = MazeMaker {
            grid,
            width,
            height,
            rng,
        };
        match generator {
            Algorithm::Backtrack => maze.backtrack(),
            Algorithm::BinaryTree => maze.binary_tree(),
            Algorithm::Kruskal => maze.kruskal(),
            Algorithm::Prim => maze.prim(),
            Algorithm::RecursiveDivision => maze.recursive_division(),
            Algorithm::Wilson => maze.wilson(),
        }
        maze
    }

    /// Rooms two steps away in each cardinal direction, staying off the border.
    fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        let directions = [(0, 2), (2, 0), (0, -2), (-2, 0)];
        let mut neighbors = Vec::new();

        for (dx, dy) in directions {
            let nx = cell.x as isize + dx;
            let ny = cell.y as isize + dy;

            let in_bounds =
                nx > 0 && nx < self.width as isize - 1 && ny > 0 && ny < self.height as isize - 1;
            if in_bounds {
                neighbors.push(Cell::new(&self.grid, nx as usize, ny as usize));
            }
        }

        neighbors
    }

    fn pick_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let neighbors = self.neighbors(cell);
        neighbors.choose(&mut self.rng).copied()
    }

    fn pick_unvisited_neighbor(&mut self, cell: Cell) -> Option<Cell> {
        let neighbors: Vec<Cell> = self
            .neighbors(cell)
            .into_iter()
            .filter(|&neighbor| !self.is_visited(neighbor))
            .collect();
        neighbors.choose(&mut self.rng).copied()
    }

    fn visit_cell(&mut self, cell: Cell) {
        let Cell { x, y } = cell;
        self.grid[y][x] = 0;
    }

    fn is_visited(&self, cell: Cell) -> bool {
        self.grid[cell.y][cell.x] == 0
    }

    fn pick_cell(&mut self) -> Cell {
        let cells = self.get_cells();
        let i = self.rng.random_range(0..cells.len());
        cells[i]
    }

    fn pick_out_cell(&mut self, cells: &mut Vec<Cell>) -> Option<Cell> {
        if cells.is_empty() {
            return None;
        }

        let i = self.rng.random_range(0..cells.len());
        Some(cells.swap_remove(i))
    }

    fn get_rooms_and_walls(&self) -> (Vec<Cell>, Vec<Wall>, HashMap<Cell, usize>) {
        let mut rooms = Vec::new();
        let mut walls = Vec::new();
        let mut room_to_index = HashMap::new();

        for y in 1..self.height - 1 {
            for x in 1..self.width - 1 {
                match (x % 2, y % 2) {
                    (1, 1) => {
                        let room = Cell::new(&self.grid, x, y);
                        room_to_index.insert(room, rooms.len());
                        rooms.push(room);
                    }
                    (0, 0) => {} // Pillar.
                    (_, 0) => walls.push(Wall {
                        x,
                        y,
                        axis: Axis::Horizontal,
                    }),
                    _ => walls.push(Wall {
                        x,
                        y,
                        axis: Axis::Vertical,
                    }),
                }
            }
        }

        (rooms, walls, room_to_index)
    }

    fn get_cells(&self) -> Vec<Cell> {
        let mut cells = Vec::new();

        for y in (1..self.height).step_by(2) {
            for x in (1..self.width).step_by(2) {
                cells.push(Cell::new(&self.grid, x, y));
            }
        }

        cells
    }

    fn remove_wall_between(&mut self, cell_1: Cell, cell_2: Cell) {
        let wall = Wall::between(&self.grid, cell_1, cell_2);
        self.grid[wall.y][wall.x] = 0;
    }

    fn get_flanking_cells(&self, wall: Wall) -> (Cell, Cell) {
        match wall.axis {
            Axis::Horizontal => (
                Cell::new(&self.grid, wall.x, wall.y - 1),
                Cell::new(&self.grid, wall.x, wall.y + 1),
            ),
            Axis::Vertical => (
                Cell::new(&self.grid, wall.x - 1, wall.y),
                Cell::new(&self.grid, wall.x + 1, wall.y),
            ),
        }
    }
}
