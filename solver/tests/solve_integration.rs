use std::fs;

use clap::Parser;

use common::config::SolverConfig;
use common::solving::wall_follower::{Turn, decide};
use common::{Marker, Orientation, Position, SolveError, WallFollower};
use solver::test_helpers::MockMaze;
use solver::{Cli, RunError, run_solver};

fn p(column: i32, row: i32) -> Position {
    Position::new(column, row)
}

#[test]
fn test_corridor_path_excludes_start_and_includes_finish() {
    let mut maze = MockMaze::from_rows(&["S", ".", ".", "F"]);

    let path = WallFollower::new()
        .solve_in_place(&mut maze)
        .expect("corridor should be solved");

    assert_eq!(path, vec![p(0, 1), p(0, 2), p(0, 3)]);
    assert_eq!(
        maze.writes,
        vec![
            (p(0, 1), Marker::Visited),
            (p(0, 2), Marker::Visited),
            (p(0, 3), Marker::Finish),
            (p(0, 0), Marker::Start),
        ]
    );
}

#[test]
fn test_junction_with_right_and_forward_blocked_turns_left() {
    let maze = MockMaze::from_rows(&["#S.F", "####"]);

    let step = decide(&maze, p(1, 0), Orientation::Down);

    assert_eq!(step.turn, Turn::Left);
    assert_eq!(step.target, p(2, 0));
    // Right, forward, then left; the reverse direction is never asked about.
    assert_eq!(maze.queries(), vec![p(0, 0), p(1, 1), p(2, 0)]);
}

#[test]
fn test_dead_end_pocket_retraces_without_recording() {
    let mut maze = MockMaze::from_rows(&[
        "######", //
        "##S#F#", //
        "##.#.#", //
        "#....#", //
        "######",
    ]);

    let step = decide(&maze, p(1, 3), Orientation::Left);
    assert_eq!(step.turn, Turn::Reverse);
    assert_eq!(step.target, p(2, 3));

    let path = WallFollower::new()
        .solve_in_place(&mut maze)
        .expect("maze should be solved");

    assert_eq!(
        path,
        vec![p(2, 2), p(2, 3), p(1, 3), p(3, 3), p(4, 3), p(4, 2), p(4, 1)]
    );
    assert_eq!(path.iter().filter(|&&q| q == p(2, 3)).count(), 1);
    assert_eq!(maze.marker_at(p(1, 3)), Some(Marker::Visited));
}

#[test]
fn test_markers_from_an_earlier_solve_do_not_change_the_route() {
    let mut maze = MockMaze::from_rows(&[
        "#######", //
        "#S..#.#", //
        "#.#.#.#", //
        "#.#...#", //
        "#.###F#", //
        "#######",
    ]);
    let follower = WallFollower::new();

    let first = follower.solve_in_place(&mut maze).unwrap();
    let first_queries = maze.queries();
    let second = follower.solve_in_place(&mut maze).unwrap();

    assert_eq!(first, second);
    assert_eq!(maze.queries().len(), 2 * first_queries.len());
}

#[test]
fn test_every_path_entry_is_open() {
    let mut maze = MockMaze::from_rows(&[
        "#########", //
        "#S....#.#", //
        "#.###.#.#", //
        "#...#...#", //
        "###.###.#", //
        "#.....#F#", //
        "#########",
    ]);

    let path = WallFollower::new().solve_in_place(&mut maze).unwrap();

    assert_eq!(path.last(), Some(&p(7, 5)));
    for q in &path {
        assert!(maze.is_open(*q), "{q} should be open");
    }
}

#[test]
fn test_unreachable_finish_hits_the_step_limit() {
    let mut maze = MockMaze::from_rows(&["S..#F"]);

    let result = WallFollower::new()
        .with_max_steps(Some(50))
        .solve_in_place(&mut maze);

    assert!(matches!(
        result,
        Err(SolveError::StepLimitExceeded { limit: 50, .. })
    ));
    // Nothing marks the start when the walk gives up.
    assert_eq!(maze.marker_at(p(0, 0)), None);
}

#[test]
fn test_run_solver_reads_a_maze_file_and_prints_json() {
    let path = std::env::temp_dir().join(format!("maze-solver-{}.maze", std::process::id()));
    fs::write(&path, "#####\n#S..#\n###.#\n#F..#\n#####\n").unwrap();

    let cli = Cli::parse_from([
        "maze-solver",
        "--file",
        path.to_str().unwrap(),
        "--format",
        "json",
    ]);
    let mut out = Vec::new();
    let result = run_solver(&cli, SolverConfig::default(), &mut out);
    fs::remove_file(&path).ok();
    result.unwrap();

    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let path_len = report["path"].as_array().unwrap().len();
    assert_eq!(path_len, 6);
    assert_eq!(report["finish"]["column"].as_i64(), Some(1));
    assert_eq!(report["finish"]["row"].as_i64(), Some(3));
    assert_eq!(report["stats"]["retraces"].as_u64(), Some(0));
}

#[test]
fn test_run_solver_prints_generated_maze_as_text() {
    let cli = Cli::parse_from([
        "maze-solver",
        "--algorithm",
        "kruskal",
        "--radius",
        "3",
        "--seed",
        "12",
        "--no-color",
    ]);
    let mut out = Vec::new();
    run_solver(&cli, SolverConfig::default(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.contains("kruskal, radius 3, seed 12"));
    assert!(text.contains("  Size:        7 x 7"));
    assert!(text.contains("Path length:"));
}

#[test]
fn test_run_solver_reports_bad_files() {
    let path = std::env::temp_dir().join(format!("maze-solver-bad-{}.maze", std::process::id()));
    fs::write(&path, "S..\n..\n").unwrap();

    let cli = Cli::parse_from(["maze-solver", "--file", path.to_str().unwrap()]);
    let result = run_solver(&cli, SolverConfig::default(), &mut Vec::new());
    fs::remove_file(&path).ok();

    match result {
        Err(RunError::Parse { .. }) => {}
        other => panic!("expected parse error, got {:?}", other),
    }
}
