//! Single-ply insertion search.
//!
//! Every insertion point is tried with each of the four orientations of the
//! floating tile. A candidate counts as "reaching" when, after the simulated
//! shift, the acting token has a route to the active goal. The choice is
//! uniform within the best non-empty class; there is no further ranking.

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::board::{BoardState, Shape};
use crate::board::topology::insertion_points;
use crate::core::{Coord, EntityId, GameRng, Insertion, PlayerId};
use crate::error::InvariantViolation;
use crate::shift::ShiftDescriptor;

/// Token passes applied per simulated shift.
///
/// Simulation shifts tokens twice and goals once; the live commit shifts
/// both once. The classification therefore reflects a token one extra cell
/// along the line.
pub const SIMULATED_TOKEN_PASSES: usize = 2;

/// One insertion the search tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    pub insertion: Insertion,
    /// Shape of the floating tile at evaluation time.
    pub shape: Shape,
}

/// Candidates split by outcome, each list in enumeration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub reaches_goal: Vec<Candidate>,
    pub no_path: Vec<Candidate>,
}

impl Evaluation {
    #[must_use]
    pub fn len(&self) -> usize {
        self.reaches_goal.len() + self.no_path.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pick uniformly from `reaches_goal`, or from `no_path` when nothing
    /// reaches. Returns the pick and whether it reaches.
    pub fn choose(&self, rng: &mut GameRng) -> Option<(Candidate, bool)> {
        if let Some(&c) = rng.choose(&self.reaches_goal) {
            return Some((c, true));
        }
        rng.choose(&self.no_path).map(|&c| (c, false))
    }
}

/// The decision for one automated turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatedTurn {
    pub candidate: Candidate,
    /// Whether the candidate was classified as reaching the goal.
    pub reaches_goal: bool,
    /// Where the token ends up once the insertion is committed.
    pub destination: Coord,
}

impl AutomatedTurn {
    #[must_use]
    pub fn insertion(&self) -> Insertion {
        self.candidate.insertion
    }
}

/// Try every insertion on a scratch copy of `board`.
pub fn evaluate(
    board: &BoardState,
    player: PlayerId,
    goal: EntityId,
) -> Result<Evaluation, InvariantViolation> {
    let mut sim = board.clone();
    let mut evaluation = Evaluation::default();

    let token_id = EntityId::token(player);
    let shape = sim.floating().shape;

    for at in insertion_points() {
        for _ in 0..4 {
            sim.rotate_floating();
            let snapshot = sim.snapshot();

            let Some(descriptor) = ShiftDescriptor::try_build(&sim, at) else {
                continue;
            };
            let insertion = Insertion::new(at, sim.floating().orientation);
            sim.stage_floating(&insertion);
            sim.shift(&descriptor, SIMULATED_TOKEN_PASSES)?;

            let from = sim
                .token(player)
                .map(|t| t.pos)
                .ok_or(InvariantViolation::UnknownEntity(token_id))?;
            let to = sim
                .goal(goal)
                .map(|g| g.pos)
                .ok_or(InvariantViolation::UnknownEntity(goal))?;
            let reaches = sim.find_path(from, to).is_some();

            sim.restore(&snapshot);

            let candidate = Candidate { insertion, shape };
            if reaches {
                evaluation.reaches_goal.push(candidate);
            } else {
                evaluation.no_path.push(candidate);
            }
        }
    }

    debug!(
        "{player}: {} candidates reach goal {goal}, {} do not",
        evaluation.reaches_goal.len(),
        evaluation.no_path.len()
    );
    Ok(evaluation)
}

/// Where `player` should step: the goal's cell if a route exists, else stay.
pub fn resolve_destination(
    board: &BoardState,
    player: PlayerId,
    goal: EntityId,
) -> Result<Coord, InvariantViolation> {
    let from = board
        .token(player)
        .map(|t| t.pos)
        .ok_or(InvariantViolation::UnknownEntity(EntityId::token(player)))?;
    let to = board
        .goal(goal)
        .filter(|g| !g.is_collected())
        .map(|g| g.pos)
        .ok_or(InvariantViolation::NoActiveGoal)?;
    Ok(if board.find_path(from, to).is_some() {
        to
    } else {
        from
    })
}

/// Decide a whole automated turn against a copy of `board`.
///
/// The chosen insertion is committed to the copy so the destination reflects
/// the board the token will actually move on.
pub fn compute_automated_turn(
    board: &BoardState,
    player: PlayerId,
    active_goal: Option<EntityId>,
    rng: &mut GameRng,
) -> Result<AutomatedTurn, InvariantViolation> {
    let goal = active_goal
        .filter(|&g| board.goal(g).is_some_and(|g| !g.is_collected()))
        .ok_or(InvariantViolation::NoActiveGoal)?;

    let evaluation = evaluate(board, player, goal)?;
    let (candidate, reaches_goal) = evaluation.choose(rng).ok_or_else(|| {
        error!("{player}: no insertion candidate on this board");
        InvariantViolation::NoCandidates
    })?;

    let mut after = board.clone();
    let descriptor = ShiftDescriptor::try_build(&after, candidate.insertion.at)
        .ok_or(InvariantViolation::NoCandidates)?;
    after
        .commit(&candidate.insertion, &descriptor)
        .inspect_err(|e| error!("{player}: chosen insertion {} failed: {e}", candidate.insertion))?;
    let destination = resolve_destination(&after, player, goal)?;

    debug!(
        "{player}: chose {} (reaches goal: {reaches_goal}), heading to {destination}",
        candidate.insertion
    );
    Ok(AutomatedTurn {
        candidate,
        reaches_goal,
        destination,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Goal, Tile, Token};
    use crate::board::topology::playable_cells;
    use crate::core::Direction;

    /// Vertical corridors everywhere; floating straight staged at (0,2).
    fn corridor_board(token: Coord, goal: Coord) -> BoardState {
        let mut tiles: Vec<Tile> = playable_cells()
            .enumerate()
            .map(|(i, pos)| Tile::new(EntityId(i as u32 + 10), pos, Shape::Straight, Direction::North))
            .collect();
        tiles.push(Tile::new(EntityId(99), Coord::new(0, 2), Shape::Straight, Direction::North));
        BoardState::new(
            tiles,
            EntityId(99),
            vec![Token::new(PlayerId::new(0), token)],
            vec![Goal::new(EntityId(50), goal)],
        )
        .unwrap()
    }

    #[test]
    fn test_enumerates_every_insertion_and_orientation() {
        let board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let evaluation = evaluate(&board, PlayerId::new(0), EntityId(50)).unwrap();
        assert_eq!(evaluation.len(), 32);
        assert_eq!(evaluation.reaches_goal.len() + evaluation.no_path.len(), 32);
    }

    #[test]
    fn test_forbidden_origin_is_skipped() {
        let mut board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        board
            .insert(&Insertion::new(Coord::new(0, 2), Direction::North))
            .unwrap();
        let evaluation = evaluate(&board, PlayerId::new(0), EntityId(50)).unwrap();
        assert_eq!(evaluation.len(), 28);
        assert!(evaluation
            .reaches_goal
            .iter()
            .chain(&evaluation.no_path)
            .all(|c| c.insertion.at != Coord::new(6, 2)));
    }

    #[test]
    fn test_evaluation_leaves_board_untouched() {
        let board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let before = board.clone();
        evaluate(&board, PlayerId::new(0), EntityId(50)).unwrap();
        assert_eq!(board, before);
    }

    #[test]
    fn test_each_point_sees_four_orientations() {
        let board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let evaluation = evaluate(&board, PlayerId::new(0), EntityId(50)).unwrap();
        let at = Coord::new(2, 0);
        let mut seen: Vec<Direction> = evaluation
            .reaches_goal
            .iter()
            .chain(&evaluation.no_path)
            .filter(|c| c.insertion.at == at)
            .map(|c| c.insertion.orientation)
            .collect();
        seen.sort_by_key(|d| d.steps());
        assert_eq!(seen, Direction::ALL.to_vec());
    }

    #[test]
    fn test_crosswise_insert_cuts_fixed_column() {
        // Pushing a row East puts the floating tile on column 1; turned
        // East-West it cuts the corridor between (1,1) and (1,5).
        let board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let evaluation = evaluate(&board, PlayerId::new(0), EntityId(50)).unwrap();
        assert_eq!(evaluation.reaches_goal.len(), 28);
        for c in &evaluation.no_path {
            assert!(matches!(c.insertion.at, Coord { x: 0, y: 2 | 4 }));
            assert!(matches!(c.insertion.orientation, Direction::East | Direction::West));
        }

        let turn = compute_automated_turn(
            &board,
            PlayerId::new(0),
            Some(EntityId(50)),
            &mut GameRng::new(1),
        )
        .unwrap();
        assert!(turn.reaches_goal);
        assert_eq!(turn.destination, Coord::new(1, 5));
    }

    #[test]
    fn test_unreachable_goal_stays_put() {
        // Column 1 and column 3 are never joined by vertical corridors.
        let board = corridor_board(Coord::new(1, 1), Coord::new(3, 3));
        let turn = compute_automated_turn(
            &board,
            PlayerId::new(0),
            Some(EntityId(50)),
            &mut GameRng::new(1),
        )
        .unwrap();
        assert!(!turn.reaches_goal);
        assert_eq!(turn.destination, Coord::new(1, 1));
    }

    #[test]
    fn test_missing_goal_is_invariant_violation() {
        let board = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let mut rng = GameRng::new(1);
        assert_eq!(
            compute_automated_turn(&board, PlayerId::new(0), None, &mut rng),
            Err(InvariantViolation::NoActiveGoal)
        );
        assert_eq!(
            compute_automated_turn(&board, PlayerId::new(0), Some(EntityId(77)), &mut rng),
            Err(InvariantViolation::NoActiveGoal)
        );
    }

    #[test]
    fn test_commit_failure_reports_its_cause() {
        let full = corridor_board(Coord::new(1, 1), Coord::new(1, 5));
        let mut tiles = full.tiles().to_vec();
        tiles.retain(|t| t.pos != Coord::new(3, 3));
        let floating = tiles.iter().position(|t| t.id == EntityId(99)).unwrap();
        let board = BoardState::unchecked(
            tiles,
            floating,
            full.tokens().to_vec(),
            full.goals().to_vec(),
        );

        assert_eq!(
            compute_automated_turn(&board, PlayerId::new(0), Some(EntityId(50)), &mut GameRng::new(1)),
            Err(InvariantViolation::MissingTile(Coord::new(3, 3)))
        );
    }

    #[test]
    fn test_choice_is_deterministic_per_seed() {
        let board = corridor_board(Coord::new(2, 1), Coord::new(2, 4));
        let a = compute_automated_turn(&board, PlayerId::new(0), Some(EntityId(50)), &mut GameRng::new(8));
        let b = compute_automated_turn(&board, PlayerId::new(0), Some(EntityId(50)), &mut GameRng::new(8));
        assert_eq!(a, b);
    }
}
