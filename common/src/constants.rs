// Maze:
pub const DEFAULT_RADIUS: usize = 16; // Double and add one to get the width of the maze in grid cells, including edge walls.
pub const MAX_RADIUS: usize = 512;

// Solver:
pub const DEFAULT_MAX_STEPS: usize = 10_000_000; // Every cell of a perfect maze is entered at most four times, so this covers radius 512 with room to spare.
