//! Change notifications emitted by the commit path.
//!
//! Rendering and broadcast layers drain these after each commit instead of
//! diffing the board.

use serde::{Deserialize, Serialize};

use crate::core::{Coord, EntityId, Insertion, PlayerId};
use crate::board::ShiftReport;
use crate::shift::Displacement;

/// Something observable that happened on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// A player pushed the floating tile in.
    Inserted { player: PlayerId, insertion: Insertion },
    /// A tile slid one cell (the inserted tile included).
    TileShifted(Displacement),
    /// A tile was pushed out and is now floating.
    TileEvicted { id: EntityId, to: Coord },
    /// A token moved, by shifting or by walking.
    TokenMoved(Displacement),
    GoalShifted(Displacement),
    GoalCollected { goal: EntityId, player: PlayerId },
    /// A new goal became the target.
    ActiveGoalChanged(EntityId),
    TurnStarted { player: PlayerId, turn: u32 },
    GameEnded,
}

impl BoardEvent {
    /// Events for one committed insertion, in the order they happened.
    pub(crate) fn from_insertion(
        player: PlayerId,
        insertion: Insertion,
        report: &ShiftReport,
        floating_pos: Coord,
    ) -> Vec<BoardEvent> {
        let mut events = Vec::with_capacity(report.tiles.len() + 4);
        events.push(BoardEvent::Inserted { player, insertion });
        events.extend(report.tiles.iter().copied().map(BoardEvent::TileShifted));
        events.push(BoardEvent::TileEvicted {
            id: report.evicted,
            to: floating_pos,
        });
        events.extend(report.tokens.iter().copied().map(BoardEvent::TokenMoved));
        events.extend(report.goals.iter().copied().map(BoardEvent::GoalShifted));
        events
    }
}
