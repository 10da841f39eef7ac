use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// Per-cell display state, independent of logical occupancy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    NotPlaced,
    Visible,
    Hidden,
}

/// Canonical per-cell state stored by the board. A mark keeps its occupant
/// when it fades, so a `Hidden` cell still blocks placement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Visible(Player),
    Hidden(Player),
}

impl Cell {
    pub const fn occupant(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Visible(player) | Self::Hidden(player) => Some(player),
        }
    }

    pub const fn visibility(self) -> Visibility {
        match self {
            Self::Empty => Visibility::NotPlaced,
            Self::Visible(_) => Visibility::Visible,
            Self::Hidden(_) => Visibility::Hidden,
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The cell as it is drawn once the game is over: faded marks come back.
    pub const fn revealed(self) -> Self {
        match self {
            Self::Hidden(player) => Self::Visible(player),
            other => other,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Empty
    }
}
