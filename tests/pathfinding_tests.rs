mod common;

use common::generate_seeded;

#[test]
fn escape_path_connects_the_two_entrances() {
    for seed in [1, 2, 3, 4, 5] {
        let mut maze = generate_seeded(9, 9, seed);
        let [start, goal] = maze.entrances();
        let path = maze.find_escape().unwrap().to_vec();
        assert_eq!(path.first(), Some(&start), "seed {seed}");
        assert_eq!(path.last(), Some(&goal), "seed {seed}");
    }
}

#[test]
fn escape_path_is_deterministic_for_a_fixed_tree() {
    let mut maze = generate_seeded(11, 11, 6);
    let first = maze.find_escape().unwrap().to_vec();
    let second = maze.find_escape().unwrap().to_vec();
    assert_eq!(first, second);
}

#[test]
fn escape_path_steps_one_cell_at_a_time() {
    // Midpoint interpolation fills every 2-unit gap, so consecutive path
    // cells are orthogonally adjacent.
    let mut maze = generate_seeded(9, 13, 7);
    let path = maze.find_escape().unwrap().to_vec();
    let grid = maze.grid();
    for pair in path.windows(2) {
        let (ar, ac) = grid.get_coords(pair[0]);
        let (br, bc) = grid.get_coords(pair[1]);
        assert_eq!(
            (ar - br).abs() + (ac - bc).abs(),
            1,
            "cells {} and {} are not adjacent",
            pair[0],
            pair[1]
        );
    }
}

#[test]
fn escape_path_runs_through_passages_only() {
    let mut maze = generate_seeded(7, 9, 8);
    let path = maze.find_escape().unwrap().to_vec();
    let grid = maze.grid();
    for &id in &path {
        assert!(!grid.is_wall(id), "path crosses wall cell {id}");
    }
}

#[test]
fn escape_path_never_repeats_a_cell() {
    let mut maze = generate_seeded(11, 11, 9);
    let path = maze.find_escape().unwrap().to_vec();
    let mut seen = std::collections::HashSet::new();
    for &id in &path {
        assert!(seen.insert(id), "cell {id} appears twice");
    }
}

#[test]
fn solved_path_survives_until_the_next_solve() {
    let mut maze = generate_seeded(7, 7, 10);
    assert!(maze.solved_path().is_none());
    maze.find_escape().unwrap();
    assert!(maze.solved_path().is_some());
}
