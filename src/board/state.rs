//! Board state: the arena of every piece in play.
//!
//! ## Layout
//!
//! All tiles, including the floating one, live in a single `Vec<Tile>`
//! whose slots never change. The floating tile is just the slot that
//! currently sits on the border; inserting it means staging it on an
//! insertion point and shifting its line, which pushes a different tile out.
//!
//! ## Simulation
//!
//! The AI tries every insertion by mutating the board and putting it back.
//! Inverse shifts cannot undo an eviction, so [`BoardState::snapshot`]
//! records absolute positions and tile orientations by identity and
//! [`BoardState::restore`] writes them back verbatim.
//!
//! ## Serialization
//!
//! A board is written with its floating tile named by id and read back
//! through [`BoardState::new`], so a deserialized board passes the same
//! checks as a freshly assembled one.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::pieces::{Goal, Token};
use super::tile::Tile;
use super::topology::{insertion_index, is_border, is_playable, playable_cells, FRAME_SIZE};
use crate::core::{Coord, Direction, EntityId, Insertion, PlayerId};
use crate::error::{GameError, InvariantViolation};
use crate::path::{find_path, Route};
use crate::shift::{Displacements, EdgeRule, ShiftDescriptor};

/// Everything a single shift changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShiftReport {
    pub descriptor: ShiftDescriptor,
    /// Tile pushed out; now the floating tile.
    pub evicted: EntityId,
    pub tiles: Displacements,
    pub tokens: Displacements,
    pub goals: Displacements,
}

/// Identity-keyed positions plus the floating-tile bookkeeping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardSnapshot {
    tiles: FxHashMap<EntityId, (Coord, Direction)>,
    pieces: FxHashMap<EntityId, Coord>,
    floating: usize,
    forbidden_origin: Option<i32>,
}

/// Wire form of a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBoard {
    tiles: Vec<Tile>,
    tokens: Vec<Token>,
    goals: Vec<Goal>,
    floating: EntityId,
    forbidden_origin: Option<i32>,
}

/// The maze and every piece on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct BoardState {
    tiles: Vec<Tile>,
    tokens: Vec<Token>,
    goals: Vec<Goal>,
    /// Slot in `tiles` of the floating tile.
    floating: usize,
    /// Insertion index the floating tile was last pushed out to.
    forbidden_origin: Option<i32>,
}

impl BoardState {
    /// Assemble a board from its pieces.
    ///
    /// `floating` names the tile held off the grid. Fails if ids collide,
    /// the floating tile is unknown, or the 25 playable cells are not each
    /// covered by exactly one tile.
    pub fn new(
        tiles: Vec<Tile>,
        floating: EntityId,
        tokens: Vec<Token>,
        goals: Vec<Goal>,
    ) -> Result<Self, InvariantViolation> {
        let mut seen = FxHashSet::default();
        let ids = tiles
            .iter()
            .map(|t| t.id)
            .chain(tokens.iter().map(|t| t.id))
            .chain(goals.iter().map(|g| g.id));
        for id in ids {
            if !seen.insert(id) {
                return Err(InvariantViolation::DuplicateEntity(id));
            }
        }

        let floating_slot = tiles
            .iter()
            .position(|t| t.id == floating)
            .ok_or(InvariantViolation::UnknownEntity(floating))?;

        let board = Self {
            tiles,
            tokens,
            goals,
            floating: floating_slot,
            forbidden_origin: None,
        };
        board.check_coverage()?;
        Ok(board)
    }

    /// Board with every field taken as given, for exercising corrupted states.
    #[cfg(test)]
    pub(crate) fn unchecked(
        tiles: Vec<Tile>,
        floating: usize,
        tokens: Vec<Token>,
        goals: Vec<Goal>,
    ) -> Self {
        Self {
            tiles,
            tokens,
            goals,
            floating,
            forbidden_origin: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    #[must_use]
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// The tile waiting to be inserted.
    #[must_use]
    pub fn floating(&self) -> &Tile {
        &self.tiles[self.floating]
    }

    #[must_use]
    pub fn forbidden_origin(&self) -> Option<i32> {
        self.forbidden_origin
    }

    /// Tile covering a playable cell.
    #[must_use]
    pub fn tile_at(&self, pos: Coord) -> Option<&Tile> {
        if !is_playable(pos.x, pos.y) {
            return None;
        }
        self.tiles.iter().find(|t| t.pos == pos)
    }

    #[must_use]
    pub fn tile(&self, id: EntityId) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn token(&self, player: PlayerId) -> Option<&Token> {
        self.tokens.iter().find(|t| t.owner == player)
    }

    #[must_use]
    pub fn goal(&self, id: EntityId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id == id)
    }

    /// Goals still on the board.
    pub fn active_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| !g.is_collected())
    }

    // === Queries ===

    /// Route between two cells under the current layout.
    #[must_use]
    pub fn find_path(&self, from: Coord, to: Coord) -> Option<Route> {
        find_path(&self.tiles, from, to)
    }

    /// Every playable cell holds exactly one tile.
    pub fn check_coverage(&self) -> Result<(), InvariantViolation> {
        let mut counts = [[0u8; FRAME_SIZE as usize]; FRAME_SIZE as usize];
        for tile in &self.tiles {
            if is_playable(tile.pos.x, tile.pos.y) {
                counts[tile.pos.y as usize][tile.pos.x as usize] += 1;
            }
        }
        for cell in playable_cells() {
            match counts[cell.y as usize][cell.x as usize] {
                0 => return Err(InvariantViolation::MissingTile(cell)),
                1 => {}
                _ => return Err(InvariantViolation::StackedTiles(cell)),
            }
        }
        Ok(())
    }

    // === Mutation ===

    /// Put the floating tile on `insertion.at`, turned to `insertion.orientation`.
    pub fn stage_floating(&mut self, insertion: &Insertion) {
        let tile = &mut self.tiles[self.floating];
        tile.pos = insertion.at;
        tile.orientation = insertion.orientation;
    }

    /// Turn the floating tile one quarter clockwise.
    pub fn rotate_floating(&mut self) {
        self.tiles[self.floating].rotate();
    }

    /// Push the floating tile in. All-or-nothing.
    ///
    /// The floating tile is staged on `insertion.at`, its line slides one
    /// cell, the tile pushed off the far end becomes the new floating tile,
    /// and tokens and goals on the line wrap around.
    pub fn insert(&mut self, insertion: &Insertion) -> Result<ShiftReport, GameError> {
        let descriptor = ShiftDescriptor::build(self.forbidden_origin, insertion.at)?;
        Ok(self.commit(insertion, &descriptor)?)
    }

    /// Stage, shift and verify coverage, rolling back on any violation.
    pub(crate) fn commit(
        &mut self,
        insertion: &Insertion,
        descriptor: &ShiftDescriptor,
    ) -> Result<ShiftReport, InvariantViolation> {
        let snapshot = self.snapshot();
        self.stage_floating(insertion);
        let shifted = self
            .shift(descriptor, 1)
            .and_then(|report| self.check_coverage().map(|()| report));
        if shifted.is_err() {
            self.restore(&snapshot);
        }
        shifted
    }

    /// Slide the line of `descriptor`, the floating tile already staged on it.
    ///
    /// Tokens get `token_passes` applications of the shift; goals get one.
    /// Nothing is mutated unless exactly one tile would be evicted.
    pub(crate) fn shift(
        &mut self,
        descriptor: &ShiftDescriptor,
        token_passes: usize,
    ) -> Result<ShiftReport, InvariantViolation> {
        let leaving: SmallVec<[usize; 2]> = descriptor
            .select(&self.tiles)
            .into_iter()
            .filter(|&i| {
                let next = self.tiles[i].pos.step(descriptor.direction);
                is_border(next.x, next.y)
            })
            .collect();
        if leaving.len() != 1 {
            return Err(InvariantViolation::EvictionCount(leaving.len()));
        }
        let evicted = leaving[0];

        let tiles = descriptor.apply(&mut self.tiles, EdgeRule::Evict);
        self.floating = evicted;
        self.forbidden_origin = Some(insertion_index(self.tiles[evicted].pos));

        let mut tokens = Displacements::new();
        for _ in 0..token_passes {
            tokens.extend(descriptor.apply(&mut self.tokens, EdgeRule::Wrap));
        }
        let goals = descriptor.apply(&mut self.goals, EdgeRule::Wrap);

        Ok(ShiftReport {
            descriptor: *descriptor,
            evicted: self.tiles[evicted].id,
            tiles,
            tokens,
            goals,
        })
    }

    /// Place a player's token. Returns its previous cell.
    pub(crate) fn move_token(&mut self, player: PlayerId, to: Coord) -> Option<Coord> {
        let token = self.tokens.iter_mut().find(|t| t.owner == player)?;
        let from = token.pos;
        token.pos = to;
        Some(from)
    }

    /// Give a goal to `player`.
    pub(crate) fn collect_goal(&mut self, goal: EntityId, player: PlayerId) -> bool {
        match self.goals.iter_mut().find(|g| g.id == goal) {
            Some(g) if !g.is_collected() => {
                g.collect(player);
                true
            }
            _ => false,
        }
    }

    // === Snapshot ===

    /// Record every position, and every tile orientation, by identity.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut tiles = FxHashMap::default();
        tiles.extend(self.tiles.iter().map(|t| (t.id, (t.pos, t.orientation))));
        let mut pieces = FxHashMap::default();
        pieces.extend(self.tokens.iter().map(|t| (t.id, t.pos)));
        pieces.extend(self.goals.iter().map(|g| (g.id, g.pos)));
        BoardSnapshot {
            tiles,
            pieces,
            floating: self.floating,
            forbidden_origin: self.forbidden_origin,
        }
    }

    /// Write a snapshot back verbatim.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) {
        for tile in &mut self.tiles {
            if let Some(&(pos, orientation)) = snapshot.tiles.get(&tile.id) {
                tile.pos = pos;
                tile.orientation = orientation;
            }
        }
        for token in &mut self.tokens {
            if let Some(&pos) = snapshot.pieces.get(&token.id) {
                token.pos = pos;
            }
        }
        for goal in &mut self.goals {
            if let Some(&pos) = snapshot.pieces.get(&goal.id) {
                goal.pos = pos;
            }
        }
        self.floating = snapshot.floating;
        self.forbidden_origin = snapshot.forbidden_origin;
    }
}

impl TryFrom<RawBoard> for BoardState {
    type Error = InvariantViolation;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let mut board = Self::new(raw.tiles, raw.floating, raw.tokens, raw.goals)?;
        if let Some(origin) = raw.forbidden_origin {
            if origin != insertion_index(board.floating().pos) {
                return Err(InvariantViolation::ForbiddenOriginMismatch(origin));
            }
        }
        board.forbidden_origin = raw.forbidden_origin;
        Ok(board)
    }
}

impl From<BoardState> for RawBoard {
    fn from(board: BoardState) -> Self {
        let floating = board.floating().id;
        Self {
            tiles: board.tiles,
            tokens: board.tokens,
            goals: board.goals,
            floating,
            forbidden_origin: board.forbidden_origin,
        }
    }
}
