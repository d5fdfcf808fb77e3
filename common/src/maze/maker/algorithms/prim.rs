use rand::Rng;

use super::super::{Cell, MazeMaker, Wall};

pub trait Prim {
    fn prim(&mut self);
}

impl Prim for MazeMaker {
    fn prim(&mut self) {
        let initial_cell = self.pick_cell();
        self.visit_cell(initial_cell);

        // A `Vec` rather than a set so that picks depend only on the seed.
        let mut frontier = Vec::new();
        add_walls(self, initial_cell, &mut frontier);

        while let Some(wall) = pick_out_wall(self, &mut frontier) {
            let (cell_1, cell_2) = self.get_flanking_cells(wall);

            let is_visited_1 = self.is_visited(cell_1);
            let is_visited_2 = self.is_visited(cell_2);

            if is_visited_1 != is_visited_2 {
                self.remove_wall_between(cell_1, cell_2);
                let new_cell = if is_visited_1 { cell_2 } else { cell_1 };
                self.visit_cell(new_cell);
                add_walls(self, new_cell, &mut frontier);
            }
        }
    }
}

fn add_walls(maze: &MazeMaker, cell: Cell, frontier: &mut Vec<Wall>) {
    for neighbor in maze.neighbors(cell) {
        let wall = Wall::between(&maze.grid, cell, neighbor);
        let is_standing = maze.grid[wall.y][wall.x] != 0;
        if is_standing && !frontier.contains(&wall) {
            frontier.push(wall);
        }
    }
}

fn pick_out_wall(maze: &mut MazeMaker, frontier: &mut Vec<Wall>) -> Option<Wall> {
    if frontier.is_empty() {
        return None;
    }

    let i = maze.rng.random_range(0..frontier.len());
    Some(frontier.swap_remove(i))
}
