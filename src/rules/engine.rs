//! Turn and session rules around the board.
//!
//! A turn is two commits by the active player: one insertion, then one token
//! move. The move ends the turn. Both commits are all-or-nothing: a rejected
//! request leaves the board, the turn and the history exactly as they were.

use im::Vector;
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use super::events::BoardEvent;
use crate::board::{BoardBuilder, BoardState, ShiftReport};
use crate::core::{
    Action, ActionRecord, Coord, EntityId, GameConfig, GameRng, Insertion, PlayerId, PlayerMap,
    MAX_PLAYERS,
};
use crate::error::{ConfigError, GameError, InvariantViolation, MoveError, PlacementError};
use crate::path::Route;
use crate::shift::{Displacement, ShiftDescriptor};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Several players tied on the highest score.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
        }
    }
}

/// What a committed insertion changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertionOutcome {
    /// Tile pushed out; it is the floating tile now.
    pub evicted: EntityId,
    /// Border cell the evicted tile sits on. Inserting here is forbidden next.
    pub floating_at: Coord,
    pub report: ShiftReport,
}

/// What a committed move changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub route: Route,
    /// Goal picked up on arrival, if any.
    pub collected: Option<EntityId>,
    pub game_over: bool,
}

/// Builder for a [`Game`].
///
/// ```
/// use rust_labyrinth::rules::GameBuilder;
///
/// let game = GameBuilder::new().player_count(3).goal_count(6).seed(11).build().unwrap();
/// assert_eq!(game.board().tokens().len(), 3);
/// assert!(game.active_goal().is_some());
/// ```
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
    board: Option<BoardState>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: GameConfig) -> Self {
        Self {
            config,
            board: None,
        }
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn goal_count(mut self, count: usize) -> Self {
        self.config.goal_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Play on a prepared board instead of dealing one.
    pub fn board(mut self, board: BoardState) -> Self {
        self.board = Some(board);
        self
    }

    /// Build the game. The first active goal is drawn from the seed.
    pub fn build(self) -> Result<Game, GameError> {
        let mut rng = GameRng::new(self.config.seed);
        let board = match self.board {
            Some(board) => {
                let count = self.config.player_count;
                if count == 0 || count > MAX_PLAYERS {
                    return Err(ConfigError::PlayerCount(count).into());
                }
                if board.tokens().len() != count {
                    return Err(ConfigError::PlayerCount(board.tokens().len()).into());
                }
                if board.goals().is_empty() {
                    return Err(ConfigError::NoGoals.into());
                }
                board
            }
            None => BoardBuilder::from_config(&self.config).build(&mut rng)?,
        };
        for player in PlayerId::all(self.config.player_count) {
            if board.token(player).is_none() {
                return Err(InvariantViolation::UnknownEntity(EntityId::token(player)).into());
            }
        }
        board.check_coverage()?;

        let mut game = Game {
            config: self.config,
            board,
            active_player: PlayerId::new(0),
            insertion_done: false,
            turn: 1,
            active_goal: None,
            finished: false,
            rng,
            history: Vector::new(),
            events: Vec::new(),
        };
        game.start_turn();
        Ok(game)
    }
}

/// A game in progress.
#[derive(Clone, Debug)]
pub struct Game {
    config: GameConfig,
    board: BoardState,
    active_player: PlayerId,
    insertion_done: bool,
    turn: u32,
    active_goal: Option<EntityId>,
    finished: bool,
    rng: GameRng,
    history: Vector<ActionRecord>,
    events: Vec<BoardEvent>,
}

impl Game {
    /// Deal a new game from `config`.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        GameBuilder::from_config(config).build()
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    #[must_use]
    pub fn active_goal(&self) -> Option<EntityId> {
        self.active_goal
    }

    /// Whether the active player has shifted the maze this turn.
    #[must_use]
    pub fn insertion_done(&self) -> bool {
        self.insertion_done
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    // === Queries ===

    /// Route between two cells on the current board. Read-only.
    #[must_use]
    pub fn preview_path(&self, from: Coord, to: Coord) -> Option<Route> {
        self.board.find_path(from, to)
    }

    /// Collected goals per player.
    #[must_use]
    pub fn scores(&self) -> PlayerMap<usize> {
        let goals = self.board.goals();
        PlayerMap::new(self.config.player_count, |player| {
            goals.iter().filter(|g| g.owner == Some(player)).count()
        })
    }

    /// Winners once every goal is collected.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.finished {
            return None;
        }
        let scores = self.scores();
        let best = scores.values().copied().max()?;
        let mut winners: Vec<PlayerId> = scores
            .iter()
            .filter(|(_, score)| **score == best)
            .map(|(player, _)| player)
            .collect();
        Some(if winners.len() == 1 {
            GameResult::Winner(winners.remove(0))
        } else {
            GameResult::Winners(winners)
        })
    }

    /// Take every event produced since the last drain.
    pub fn drain_events(&mut self) -> Vec<BoardEvent> {
        std::mem::take(&mut self.events)
    }

    // === Commits ===

    /// Shift the maze by pushing the floating tile in at `insertion.at`.
    pub fn place_insertion(
        &mut self,
        player: PlayerId,
        insertion: Insertion,
    ) -> Result<InsertionOutcome, PlacementError> {
        let checked = if self.finished {
            Err(PlacementError::GameOver)
        } else if player != self.active_player {
            Err(PlacementError::NotYourTurn(player))
        } else if self.insertion_done {
            Err(PlacementError::AlreadyInserted(player))
        } else {
            ShiftDescriptor::build(self.board.forbidden_origin(), insertion.at)
        };
        let descriptor = checked.inspect_err(|e| warn!("{player}: rejected {insertion}: {e}"))?;

        let report = self
            .board
            .commit(&insertion, &descriptor)
            .inspect_err(|e| error!("{player}: {insertion} broke the board: {e}"))?;

        let floating_at = self.board.floating().pos;
        self.events.extend(BoardEvent::from_insertion(
            player,
            insertion,
            &report,
            floating_at,
        ));
        self.history
            .push_back(ActionRecord::new(player, Action::Insert(insertion), self.turn));
        self.insertion_done = true;
        debug!("{player}: {insertion}, evicted {}", report.evicted);

        Ok(InsertionOutcome {
            evicted: report.evicted,
            floating_at,
            report,
        })
    }

    /// Walk the active player's token to `destination`, then end the turn.
    ///
    /// Any connected cell is a legal destination, including the current one.
    pub fn place_token(
        &mut self,
        player: PlayerId,
        destination: Coord,
    ) -> Result<MoveOutcome, MoveError> {
        let checked = if self.finished {
            Err(MoveError::GameOver)
        } else if player != self.active_player {
            Err(MoveError::NotYourTurn(player))
        } else if !self.insertion_done {
            Err(MoveError::InsertionPending(player))
        } else {
            self.board
                .token(player)
                .map(|t| t.pos)
                .ok_or_else(|| {
                    MoveError::from(InvariantViolation::UnknownEntity(EntityId::token(player)))
                })
        };
        let from = checked.inspect_err(|e| warn!("{player}: rejected move: {e}"))?;

        let route = self.board.find_path(from, destination).ok_or_else(|| {
            let e = MoveError::Unreachable {
                from,
                to: destination,
            };
            warn!("{player}: rejected move: {e}");
            e
        })?;

        self.board.move_token(player, destination);
        self.events.push(BoardEvent::TokenMoved(Displacement {
            id: EntityId::token(player),
            from,
            to: destination,
        }));
        self.history.push_back(ActionRecord::new(
            player,
            Action::Move {
                from,
                to: destination,
            },
            self.turn,
        ));
        debug!("{player}: moved {from} -> {destination} via {route}");

        let collected = self.collect_at(player, destination);
        self.end_turn();

        Ok(MoveOutcome {
            route,
            collected,
            game_over: self.finished,
        })
    }

    // === Turn bookkeeping ===

    fn collect_at(&mut self, player: PlayerId, cell: Coord) -> Option<EntityId> {
        let goal = self.active_goal?;
        if self.board.goal(goal)?.pos != cell {
            return None;
        }
        if !self.board.collect_goal(goal, player) {
            return None;
        }
        self.active_goal = None;
        self.events.push(BoardEvent::GoalCollected { goal, player });
        info!("{player} collected {goal}");
        Some(goal)
    }

    fn end_turn(&mut self) {
        if self.board.active_goals().next().is_none() {
            self.finished = true;
            self.events.push(BoardEvent::GameEnded);
            info!("game over after {} turns: {:?}", self.turn, self.result());
            return;
        }
        self.active_player = self.active_player.next(self.config.player_count);
        self.turn += 1;
        self.insertion_done = false;
        self.start_turn();
    }

    fn start_turn(&mut self) {
        if self.active_goal.is_none() {
            let open: Vec<EntityId> = self.board.active_goals().map(|g| g.id).collect();
            if let Some(&goal) = self.rng.choose(&open) {
                self.active_goal = Some(goal);
                self.events.push(BoardEvent::ActiveGoalChanged(goal));
                debug!("active goal is now {goal}");
            }
        }
        self.events.push(BoardEvent::TurnStarted {
            player: self.active_player,
            turn: self.turn,
        });
    }
}
