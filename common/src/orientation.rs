use std::ops::Neg;

use glam::IVec2;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::position::Position;

/// The cardinal direction the walker is facing, which is also the direction it last moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    pub const fn rotate_right(self) -> Self {
        match self {
            Orientation::Up => Orientation::Right,
            Orientation::Right => Orientation::Down,
            Orientation::Down => Orientation::Left,
            Orientation::Left => Orientation::Up,
        }
    }

    pub const fn rotate_left(self) -> Self {
        match self {
            Orientation::Up => Orientation::Left,
            Orientation::Left => Orientation::Down,
            Orientation::Down => Orientation::Right,
            Orientation::Right => Orientation::Up,
        }
    }

    /// Same turn as [`Orientation::rotate_left`], named for dead-end handling call sites.
    pub const fn rotate_counter_clockwise(self) -> Self {
        self.rotate_left()
    }

    pub const fn reverse(self) -> Self {
        match self {
            Orientation::Up => Orientation::Down,
            Orientation::Down => Orientation::Up,
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
        }
    }

    pub const fn forward(self) -> Self {
        self
    }

    /// Unit step in grid space. Rows grow downwards, so `Up` decrements the row.
    pub const fn delta(self) -> IVec2 {
        match self {
            Orientation::Up => IVec2::new(0, -1),
            Orientation::Down => IVec2::new(0, 1),
            Orientation::Left => IVec2::new(-1, 0),
            Orientation::Right => IVec2::new(1, 0),
        }
    }

    /// The cell one unit away from `position` in this orientation. No maze access.
    pub fn step_from(self, position: Position) -> Position {
        Position::from(IVec2::from(position) + self.delta())
    }
}

impl Neg for Orientation {
    type Output = Orientation;

    fn neg(self) -> Self::Output {
        self.reverse()
    }
}
