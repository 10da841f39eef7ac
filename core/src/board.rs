use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    InProgress,
    Won(Player),
    Draw,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Draw)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    pub player: Player,
    pub cell: CellIx,
    pub phase: Phase,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardState {
    cells: [Cell; CELL_COUNT],
    active: Player,
    phase: Phase,
}

impl BoardState {
    pub fn new(first: Player) -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
            active: first,
            phase: Phase::InProgress,
        }
    }

    pub fn current_player(&self) -> Player {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pure read. Out-of-range indices are a caller contract violation and panic.
    pub fn cell_at(&self, ix: CellIx) -> Cell {
        self.cells[usize::from(ix)]
    }

    pub fn place_mark(&mut self, ix: CellIx) -> Result<PlacementOutcome> {
        let ix = self.validate_ix(ix)?;
        if self.phase.is_finished() {
            return Err(GameError::GameOver);
        }
        if !self.cell_at(ix).is_empty() {
            return Err(GameError::AlreadyOccupied);
        }

        let player = self.active;
        self.cells[usize::from(ix)] = Cell::Visible(player);

        if self.line_won_by(player) {
            self.phase = Phase::Won(player);
        } else if self.is_full() {
            self.phase = Phase::Draw;
        } else {
            self.active = player.other();
        }

        Ok(PlacementOutcome {
            player,
            cell: ix,
            phase: self.phase,
        })
    }

    /// Fades a visible mark, keeping its occupant. Refuses once the game is
    /// over, so a mark on the board at game end can never disappear.
    pub(crate) fn hide_mark(&mut self, ix: CellIx) -> bool {
        if self.phase.is_finished() {
            return false;
        }
        match self.cell_at(ix) {
            Cell::Visible(player) => {
                self.cells[usize::from(ix)] = Cell::Hidden(player);
                true
            }
            _ => false,
        }
    }

    fn line_won_by(&self, player: Player) -> bool {
        TRIPLES.iter().any(|triple| {
            triple
                .iter()
                .all(|&ix| self.cell_at(ix).occupant() == Some(player))
        })
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    fn validate_ix(&self, ix: CellIx) -> Result<CellIx> {
        if usize::from(ix) < CELL_COUNT {
            Ok(ix)
        } else {
            Err(GameError::InvalidIndex)
        }
    }
}
