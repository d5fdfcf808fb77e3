use std::collections::HashMap;

use super::super::{Cell, MazeMaker};

pub trait Wilson {
    fn wilson(&mut self);
}

impl Wilson for MazeMaker {
    fn wilson(&mut self) {
        let mut unvisited = self.get_cells();

        let Some(root) = self.pick_out_cell(&mut unvisited) else {
            return;
        };
        self.visit_cell(root);

        while let Some(origin) = self.pick_out_cell(&mut unvisited) {
            if self.is_visited(origin) {
                continue;
            }
            let exits = random_walk(self, origin);
            carve_loop_erased(self, origin, &exits);
        }
    }
}

// Wanders from `origin` until it touches the tree, remembering only the most
// recent exit from each cell. Following those exits gives the loop-erased walk.
fn random_walk(maze: &mut MazeMaker, origin: Cell) -> HashMap<Cell, Cell> {
    let mut exits = HashMap::new();
    let mut curr = origin;

    while !maze.is_visited(curr) {
        let Some(next) = maze.pick_neighbor(curr) else {
            break;
        };
        exits.insert(curr, next);
        curr = next;
    }

    exits
}

fn carve_loop_erased(maze: &mut MazeMaker, origin: Cell, exits: &HashMap<Cell, Cell>) {
    let mut curr = origin;

    while !maze.is_visited(curr) {
        let Some(&next) = exits.get(&curr) else {
            return;
        };
        maze.visit_cell(curr);
        maze.remove_wall_between(curr, next);
        curr = next;
    }
}
