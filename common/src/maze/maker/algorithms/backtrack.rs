use super::super::MazeMaker;

pub trait Backtrack {
    fn backtrack(&mut self);
}

impl Backtrack for MazeMaker {
    /// Depth-first carving: extend the trail into an unvisited room while one
    /// exists, and back up along the trail when the head is boxed in.
    fn backtrack(&mut self) {
        let root = self.pick_cell();
        self.visit_cell(root);
        let mut trail = vec![root];

        while let Some(&head) = trail.last() {
            match self.pick_unvisited_neighbor(head) {
                Some(next) => {
                    self.remove_wall_between(head, next);
                    self.visit_cell(next);
                    trail.push(next);
                }
                None => {
                    trail.pop();
                }
            }
        }
    }
}
