use disjoint::DisjointSetVec;
use rand::seq::SliceRandom;

use super::super::MazeMaker;

pub trait Kruskal {
    fn kruskal(&mut self);
}

impl Kruskal for MazeMaker {
    fn kruskal(&mut self) {
        let (rooms, mut walls, room_to_index) = self.get_rooms_and_walls();

        for room in &rooms {
            self.visit_cell(*room);
        }

        let mut rooms = DisjointSetVec::from(rooms);

        walls.shuffle(&mut self.rng);
        for wall in walls {
            let (room_1, room_2) = self.get_flanking_cells(wall);
            let (Some(&i), Some(&j)) = (room_to_index.get(&room_1), room_to_index.get(&room_2))
            else {
                debug_assert!(false, "wall {:?} is not flanked by two rooms", wall);
                continue;
            };
            if rooms.root_of(i) != rooms.root_of(j) {
                rooms.join(i, j);
                self.grid[wall.y][wall.x] = 0;
            }
        }
    }
}
