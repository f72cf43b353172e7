//! Shift engine tests against dealt boards.
//!
//! Every insertion point is exercised on several seeds: the pushed line must
//! lose exactly one tile, the grid must stay fully covered, and the pushed-out
//! tile must become the floating tile on the opposite border.

use rust_labyrinth::board::topology::{insertion_index, insertion_points, is_playable};
use rust_labyrinth::board::{BoardBuilder, BoardState};
use rust_labyrinth::core::{Coord, Direction, GameRng, Insertion};
use rust_labyrinth::error::{GameError, PlacementError};
use rust_labyrinth::shift::{Axis, ShiftDescriptor};

fn dealt(seed: u64) -> BoardState {
    BoardBuilder::new()
        .player_count(4)
        .goal_count(12)
        .build(&mut GameRng::new(seed))
        .unwrap()
}

/// Border cell across the grid from an insertion point.
fn opposite(at: Coord) -> Coord {
    match (at.x, at.y) {
        (0, y) => Coord::new(6, y),
        (6, y) => Coord::new(0, y),
        (x, 0) => Coord::new(x, 6),
        (x, _) => Coord::new(x, 0),
    }
}

/// Last playable cell of the line an insertion point pushes.
fn far_end(at: Coord) -> Coord {
    match (at.x, at.y) {
        (0, y) => Coord::new(5, y),
        (6, y) => Coord::new(1, y),
        (x, 0) => Coord::new(x, 5),
        (x, _) => Coord::new(x, 1),
    }
}

#[test]
fn test_every_insertion_evicts_far_end() {
    for seed in 0..10 {
        let board = dealt(seed);
        for at in insertion_points() {
            let mut after = board.clone();
            let far = after.tile_at(far_end(at)).unwrap().id;

            let report = after.insert(&Insertion::new(at, Direction::South)).unwrap();

            assert_eq!(report.evicted, far, "seed {seed}, insert at {at}");
            assert_eq!(after.floating().id, far);
            assert_eq!(after.floating().pos, opposite(at));
            assert!(after.check_coverage().is_ok());
            assert_eq!(
                after.tiles().iter().filter(|t| !is_playable(t.pos.x, t.pos.y)).count(),
                1
            );
        }
    }
}

#[test]
fn test_inserted_tile_keeps_requested_orientation() {
    let mut board = dealt(4);
    let floating = board.floating().id;
    board
        .insert(&Insertion::new(Coord::new(2, 6), Direction::West))
        .unwrap();

    let inserted = board.tile(floating).unwrap();
    assert_eq!(inserted.pos, Coord::new(2, 5));
    assert_eq!(inserted.orientation, Direction::West);
}

#[test]
fn test_forbidden_origin_follows_the_floating_tile() {
    let mut board = dealt(1);
    assert_eq!(board.forbidden_origin(), None);

    for at in insertion_points() {
        if board.forbidden_origin() == Some(insertion_index(at)) {
            continue;
        }
        board.insert(&Insertion::new(at, Direction::North)).unwrap();
        let origin = opposite(at);
        assert_eq!(board.forbidden_origin(), Some(insertion_index(origin)));
        assert!(ShiftDescriptor::try_build(&board, origin).is_none());

        let err = board
            .clone()
            .insert(&Insertion::new(origin, Direction::North))
            .unwrap_err();
        assert_eq!(err, GameError::Placement(PlacementError::ForbiddenOrigin(origin)));
    }
}

#[test]
fn test_tokens_on_line_wrap_around() {
    let mut board = dealt(2);
    let before: Vec<Coord> = board.tokens().iter().map(|t| t.pos).collect();

    let descriptor = ShiftDescriptor::build(board.forbidden_origin(), Coord::new(6, 4)).unwrap();
    assert_eq!(descriptor.axis, Axis::Horizontal);
    board
        .insert(&Insertion::new(Coord::new(6, 4), Direction::East))
        .unwrap();

    for (token, old) in board.tokens().iter().zip(before) {
        let expected = if old.y == 4 {
            Coord::new(if old.x == 1 { 5 } else { old.x - 1 }, 4)
        } else {
            old
        };
        assert_eq!(token.pos, expected, "{}", token.owner);
        assert!(is_playable(token.pos.x, token.pos.y));
    }
}

#[test]
fn test_goals_shift_and_stay_on_grid() {
    let board = dealt(6);
    let goal = board.goals()[0].clone();
    let at = Coord::new(goal.pos.x, 0);

    let mut tracked = board.clone();
    if ShiftDescriptor::try_build(&tracked, at).is_some() {
        tracked.insert(&Insertion::new(at, Direction::North)).unwrap();
        let moved = tracked.goal(goal.id).unwrap().pos;
        let expected_y = if goal.pos.y == 5 { 1 } else { goal.pos.y + 1 };
        assert_eq!(moved, Coord::new(goal.pos.x, expected_y));
    }

    // Tokens and goals never leave the grid however often a line moves.
    let mut board = board;
    for _ in 0..12 {
        let at = Coord::new(0, 2);
        let at = if board.forbidden_origin() == Some(insertion_index(at)) {
            Coord::new(6, 2)
        } else {
            at
        };
        board.insert(&Insertion::new(at, Direction::East)).unwrap();
        assert!(board.tokens().iter().all(|t| is_playable(t.pos.x, t.pos.y)));
        assert!(board.active_goals().all(|g| is_playable(g.pos.x, g.pos.y)));
    }
}
