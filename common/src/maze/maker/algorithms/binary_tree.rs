use rand::Rng;

use super::super::MazeMaker;

pub trait BinaryTree {
    fn binary_tree(&mut self);
}

impl BinaryTree for MazeMaker {
    fn binary_tree(&mut self) {
        // Spine coordinates, forced odd so that they land on rooms rather than pillars.
        let mid_x = (self.width / 2) | 1;
        let mid_y = (self.height / 2) | 1;

        for y in (1..self.height - 1).rev() {
            for x in 1..self.width - 1 {
                if x % 2 == 0 || y % 2 == 0 {
                    continue;
                }

                self.grid[y][x] = 0;

                // Each room opens exactly one wall towards the centre room,
                // so the passages form a tree rooted there.
                let mut directions = Vec::new();

                if x < mid_x {
                    directions.push((0, 1)); // East
                } else if x > mid_x {
                    directions.push((0, -1)); // West
                }

                if y < mid_y {
                    directions.push((1, 0)); // South
                } else if y > mid_y {
                    directions.push((-1, 0)); // North
                }

                if !directions.is_empty() {
                    let r = self.rng.random_range(0..directions.len());
                    let (dy, dx) = directions[r];
                    let wall_y = (y as isize + dy) as usize;
                    let wall_x = (x as isize + dx) as usize;
                    self.grid[wall_y][wall_x] = 0;
                }
            }
        }
    }
}
