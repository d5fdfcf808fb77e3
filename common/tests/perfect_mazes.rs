use common::solving::wall_follower::{Turn, decide};
use common::{Algorithm, Markers, Marker, Maze, MazeModel, Orientation, Position, WallFollower};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::iter().collect::<Vec<_>>())
}

// Walks the maze again one move at a time. Every recorded entry must be the
// open neighbor the walker actually stepped into, in order, and nothing else.
fn assert_walk_is_legal(maze: &Maze, path: &[Position]) {
    let mut entries = path.iter();
    let mut position = maze.start;
    let mut orientation = Orientation::Down;

    while !maze.reached_finish(position) {
        let step = decide(maze, position, orientation);
        assert!(
            position.is_adjacent_to(&step.target),
            "{} is not next to {position}",
            step.target
        );
        if !step.is_retrace() {
            let entry = entries.next().expect("path ended before the finish");
            assert_eq!(*entry, step.target, "walker at {position} entered the wrong cell");
            assert!(maze.is_open(*entry), "{entry} is a wall");
        }
        position = step.target;
        orientation = step.orientation;
    }

    assert_eq!(entries.next(), None, "path continues past the finish");
}

// Without a dead end every entry follows on from the one before it.
fn assert_path_is_contiguous(maze: &Maze, path: &[Position]) {
    let mut previous = maze.start;
    for next in path {
        assert!(previous.is_adjacent_to(next), "{previous} -> {next} is a jump");
        previous = *next;
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn test_wall_follower_finishes_every_perfect_maze(
        algorithm in any_algorithm(),
        radius in 1usize..12,
        seed in any::<u64>()
    ) {
        let maze = Maze::new(algorithm, radius, seed);
        prop_assume!(maze.is_perfect());

        let mut markers = Markers::for_maze(&maze);
        let solution = WallFollower::new()
            .solve_with_stats(&maze, &mut markers)
            .expect("perfect mazes are always solved");

        if maze.start == maze.finish {
            prop_assert!(solution.path.is_empty());
        } else {
            let last = *solution.path.last().expect("path should not be empty");
            prop_assert!(maze.reached_finish(last));
            assert_walk_is_legal(&maze, &solution.path);
            if solution.stats.retraces == 0 {
                assert_path_is_contiguous(&maze, &solution.path);
            }
        }

        // Each passage is walked at most once in each direction.
        prop_assert!(solution.stats.steps <= 2 * maze.spaces.len());
        prop_assert_eq!(solution.path.len() + solution.stats.retraces, solution.stats.steps);

        prop_assert_eq!(markers.get(maze.start), Some(Marker::Start));
        prop_assert_eq!(markers.count(Marker::Start), 1);
        prop_assert!(markers.count(Marker::Finish) <= 1);
    }

    #[test]
    fn test_every_move_follows_the_right_hand_rule(
        algorithm in any_algorithm(),
        seed in any::<u64>()
    ) {
        let maze = Maze::new(algorithm, 5, seed);

        let mut position = maze.start;
        let mut orientation = Orientation::Down;
        while !maze.reached_finish(position) {
            let step = decide(&maze, position, orientation);
            let preferred = [
                orientation.rotate_right(),
                orientation.forward(),
                orientation.rotate_left(),
            ]
            .into_iter()
            .find(|o| maze.is_open(o.step_from(position)));

            match preferred {
                Some(o) => {
                    prop_assert_eq!(step.orientation, o);
                    prop_assert_ne!(step.turn, Turn::Reverse);
                }
                None => {
                    prop_assert_eq!(step.turn, Turn::Reverse);
                    prop_assert_eq!(step.target, orientation.reverse().step_from(position));
                }
            }

            position = step.target;
            orientation = step.orientation;
        }
    }
}

#[test]
fn test_every_algorithm_solves_a_large_maze() {
    for algorithm in Algorithm::iter() {
        let maze = Maze::new(algorithm, 40, 2024);
        let path = WallFollower::new()
            .solve(&maze, &mut Markers::for_maze(&maze))
            .expect("large perfect maze should be solved");
        assert_eq!(path.last(), Some(&maze.finish), "{algorithm}");
    }
}

#[test]
fn test_path_without_dead_ends_is_contiguous() {
    let maze: Maze = "#S###\n#.#F#\n#...#\n#####".parse().unwrap();
    let solution = WallFollower::new()
        .solve_with_stats(&maze, &mut Markers::for_maze(&maze))
        .expect("winding corridor should be solved");

    assert_eq!(solution.stats.retraces, 0);
    assert_path_is_contiguous(&maze, &solution.path);
    assert_walk_is_legal(&maze, &solution.path);
}

#[test]
#[should_panic(expected = "entered the wrong cell")]
fn test_walk_check_rejects_a_cell_the_walker_never_entered() {
    let maze: Maze = "#S###\n#.#F#\n#...#\n#####".parse().unwrap();
    // (1, 0) is open and next to (1, 1), but the walker carries on to (1, 2).
    let path = [Position::new(1, 1), Position::new(1, 0)];
    assert_walk_is_legal(&maze, &path);
}
