use serde::{Deserialize, Serialize};

use crate::*;

/// Notifications drained by the presentation layer after each trigger.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    PlacementApplied { cell: CellIx, player: Player },
    MarkHidden { cell: CellIx },
    TurnChanged { active: Player },
    GameEnded { phase: Phase },
    GameReset,
}
