use rand::Rng;

use super::super::MazeMaker;

pub trait RecursiveDivision {
    fn recursive_division(&mut self);
}

impl RecursiveDivision for MazeMaker {
    fn recursive_division(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let is_border = y == 0 || y == self.height - 1 || x == 0 || x == self.width - 1;
                self.grid[y][x] = u8::from(is_border);
            }
        }

        if self.width > 2 && self.height > 2 {
            self.recursive_divide(1, 1, self.width - 2, self.height - 2);
        }
    }
}

impl MazeMaker {
    // Regions start on odd coordinates and have odd sizes, so walls land on
    // even lines and gaps on odd ones. One gap per wall keeps the maze perfect.
    fn recursive_divide(&mut self, x: usize, y: usize, width: usize, height: usize) {
        if width < 3 || height < 3 {
            return;
        }

        let rng = &mut self.rng;

        let horizontal = if width < height {
            true
        } else if height < width {
            false
        } else {
            rng.random_bool(0.5)
        };

        if horizontal {
            let wall_y = y + 1 + rng.random_range(0..(height - 1) / 2) * 2;
            let gap_x = (x + rng.random_range(0..(width + 1) / 2) * 2).min(x + width - 1);

            for i in 0..width {
                self.grid[wall_y][x + i] = 1;
            }
            self.grid[wall_y][gap_x] = 0;

            self.recursive_divide(x, y, width, wall_y - y);
            self.recursive_divide(x, wall_y + 1, width, y + height - wall_y - 1);
        } else {
            let wall_x = x + 1 + rng.random_range(0..(width - 1) / 2) * 2;
            let gap_y = (y + rng.random_range(0..(height + 1) / 2) * 2).min(y + height - 1);

            for i in 0..height {
                self.grid[y + i][wall_x] = 1;
            }
            self.grid[gap_y][wall_x] = 0;

            self.recursive_divide(x, y, wall_x - x, height);
            self.recursive_divide(wall_x + 1, y, x + width - wall_x - 1, height);
        }
    }
}
