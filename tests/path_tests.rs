//! Connectivity tests on dealt boards.

use rust_labyrinth::board::topology::playable_cells;
use rust_labyrinth::board::{BoardBuilder, BoardState};
use rust_labyrinth::core::{Coord, GameRng};
use rust_labyrinth::path::Route;

fn dealt(seed: u64) -> BoardState {
    BoardBuilder::new().build(&mut GameRng::new(seed)).unwrap()
}

/// Every step of a route is one cell and crosses an open passage.
fn assert_walkable(board: &BoardState, route: &Route) {
    for pair in route.cells().windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let dir = rust_labyrinth::core::Direction::ALL
            .into_iter()
            .find(|&d| a.step(d) == b)
            .unwrap_or_else(|| panic!("{a} and {b} are not adjacent"));
        assert!(board.tile_at(a).unwrap().has_exit(dir));
        assert!(board.tile_at(b).unwrap().can_enter_from(dir));
    }
}

#[test]
fn test_routes_are_walkable() {
    for seed in 0..5 {
        let board = dealt(seed);
        let start = Coord::new(3, 3);
        for goal in playable_cells() {
            if let Some(route) = board.find_path(start, goal) {
                assert_eq!(route.first(), start);
                assert_eq!(route.last(), goal);
                assert_walkable(&board, &route);
            }
        }
    }
}

#[test]
fn test_connectivity_is_symmetric() {
    for seed in 0..5 {
        let board = dealt(seed);
        for a in playable_cells() {
            for b in playable_cells() {
                assert_eq!(
                    board.find_path(a, b).is_some(),
                    board.find_path(b, a).is_some(),
                    "seed {seed}: {a} <-> {b}"
                );
            }
        }
    }
}

#[test]
fn test_connectivity_is_transitive() {
    let board = dealt(11);
    let cells: Vec<Coord> = playable_cells().collect();
    for &a in &cells {
        for &b in &cells {
            if board.find_path(a, b).is_none() {
                continue;
            }
            for &c in &cells {
                if board.find_path(b, c).is_some() {
                    assert!(board.find_path(a, c).is_some(), "{a} -> {b} -> {c}");
                }
            }
        }
    }
}

#[test]
fn test_route_never_revisits_a_cell() {
    let board = dealt(8);
    for goal in playable_cells() {
        if let Some(route) = board.find_path(Coord::new(1, 1), goal) {
            let mut cells = route.cells().to_vec();
            cells.sort();
            cells.dedup();
            assert_eq!(cells.len(), route.len());
            assert!(route.len() <= 25);
        }
    }
}
