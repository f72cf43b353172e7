//! Initial board layout.
//!
//! Nine tiles are bolted to the odd/odd cells. Seventeen movable tiles are
//! shuffled over the remaining sixteen cells; the one left over becomes the
//! floating tile. Goals and tokens then land on distinct random cells.

use log::debug;

use super::pieces::{Goal, Token};
use super::state::BoardState;
use super::tile::{Shape, Tile};
use super::topology::{is_fixed_cell, playable_cells};
use crate::core::{Coord, Direction, EntityAllocator, GameConfig, GameRng, PlayerId};
use crate::error::{GameError, InvariantViolation};

/// Where the floating tile waits before the first insertion.
pub const INITIAL_FLOATING_POS: Coord = Coord { x: 0, y: 2 };

/// Movable tile counts by shape.
pub const MOVABLE_TILES: [(Shape, usize); 3] =
    [(Shape::Straight, 5), (Shape::Elbow, 6), (Shape::Tee, 6)];

/// The fixed tiles other than the centre, which is a randomly turned corridor.
pub const FIXED_TILES: [(i32, i32, Shape, Direction); 8] = [
    (1, 1, Shape::Elbow, Direction::East),
    (3, 1, Shape::Tee, Direction::South),
    (5, 1, Shape::Elbow, Direction::South),
    (1, 3, Shape::Tee, Direction::East),
    (5, 3, Shape::Tee, Direction::West),
    (1, 5, Shape::Elbow, Direction::North),
    (3, 5, Shape::Tee, Direction::North),
    (5, 5, Shape::Elbow, Direction::West),
];

/// Builder for a freshly dealt board.
///
/// ```
/// use rust_labyrinth::board::BoardBuilder;
/// use rust_labyrinth::core::GameRng;
///
/// let mut rng = GameRng::new(7);
/// let board = BoardBuilder::new().player_count(3).goal_count(10).build(&mut rng).unwrap();
/// assert_eq!(board.tokens().len(), 3);
/// assert_eq!(board.goals().len(), 10);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    player_count: usize,
    goal_count: usize,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            player_count: config.player_count,
            goal_count: config.goal_count,
        }
    }
}

impl BoardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take counts from a game configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            player_count: config.player_count,
            goal_count: config.goal_count,
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.player_count = count;
        self
    }

    pub fn goal_count(mut self, count: usize) -> Self {
        self.goal_count = count;
        self
    }

    /// Deal the board.
    pub fn build(self, rng: &mut GameRng) -> Result<BoardState, GameError> {
        GameConfig::default()
            .with_player_count(self.player_count)
            .with_goal_count(self.goal_count)
            .validate()?;

        let mut ids = EntityAllocator::new(self.player_count);
        let mut tiles = Vec::with_capacity(26);

        for (x, y, shape, orientation) in FIXED_TILES {
            tiles.push(Tile::new(ids.alloc(), Coord::new(x, y), shape, orientation));
        }
        let centre = if rng.gen_bool(0.5) {
            Direction::North
        } else {
            Direction::East
        };
        tiles.push(Tile::new(ids.alloc(), Coord::new(3, 3), Shape::Straight, centre));

        let mut movable: Vec<Tile> = MOVABLE_TILES
            .iter()
            .flat_map(|&(shape, count)| std::iter::repeat(shape).take(count))
            .map(|shape| {
                let orientation = rng.orientation();
                Tile::new(ids.alloc(), INITIAL_FLOATING_POS, shape, orientation)
            })
            .collect();
        rng.shuffle(&mut movable);

        let mut open = playable_cells().filter(|c| !is_fixed_cell(c.x, c.y));
        let mut floating = None;
        for mut tile in movable {
            match open.next() {
                Some(cell) => tile.pos = cell,
                None => floating = Some(tile.id),
            }
            tiles.push(tile);
        }
        let floating = floating.ok_or(InvariantViolation::NoFloatingTile)?;

        let mut cells: Vec<Coord> = playable_cells().collect();
        rng.shuffle(&mut cells);
        let mut cells = cells.into_iter();

        let goals: Vec<Goal> = cells
            .by_ref()
            .take(self.goal_count)
            .map(|cell| Goal::new(ids.alloc(), cell))
            .collect();
        let tokens: Vec<Token> = PlayerId::all(self.player_count)
            .zip(cells)
            .map(|(player, cell)| Token::new(player, cell))
            .collect();

        debug!(
            "dealt board: {} tiles, {} goals, {} tokens",
            tiles.len(),
            goals.len(),
            tokens.len()
        );
        Ok(BoardState::new(tiles, floating, tokens, goals)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_fixed_tiles_in_place() {
        let mut rng = GameRng::new(42);
        let board = BoardBuilder::new().build(&mut rng).unwrap();

        for (x, y, shape, orientation) in FIXED_TILES {
            let tile = board.tile_at(Coord::new(x, y)).unwrap();
            assert_eq!(tile.shape, shape);
            assert_eq!(tile.orientation, orientation);
        }
        let centre = board.tile_at(Coord::new(3, 3)).unwrap();
        assert_eq!(centre.shape, Shape::Straight);
        assert!(matches!(centre.orientation, Direction::North | Direction::East));
    }

    #[test]
    fn test_tile_counts_and_floating() {
        let mut rng = GameRng::new(9);
        let board = BoardBuilder::new().build(&mut rng).unwrap();

        assert_eq!(board.tiles().len(), 26);
        assert_eq!(board.floating().pos, INITIAL_FLOATING_POS);
        assert_eq!(board.forbidden_origin(), None);
        assert!(board.check_coverage().is_ok());

        let count = |shape| board.tiles().iter().filter(|t| t.shape == shape).count();
        assert_eq!(count(Shape::Straight), 6);
        assert_eq!(count(Shape::Elbow), 10);
        assert_eq!(count(Shape::Tee), 10);
    }

    #[test]
    fn test_pieces_on_distinct_cells() {
        let mut rng = GameRng::new(3);
        let board = BoardBuilder::new()
            .player_count(4)
            .goal_count(21)
            .build(&mut rng)
            .unwrap();

        let cells: FxHashSet<Coord> = board
            .goals()
            .iter()
            .map(|g| g.pos)
            .chain(board.tokens().iter().map(|t| t.pos))
            .collect();
        assert_eq!(cells.len(), 25);
    }

    #[test]
    fn test_rejects_overfull_board() {
        let mut rng = GameRng::new(3);
        let err = BoardBuilder::new()
            .player_count(4)
            .goal_count(22)
            .build(&mut rng)
            .unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_same_seed_same_board() {
        let a = BoardBuilder::new().build(&mut GameRng::new(5)).unwrap();
        let b = BoardBuilder::new().build(&mut GameRng::new(5)).unwrap();
        assert_eq!(a, b);
    }
}
