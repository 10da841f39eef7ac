use core::time::Duration;
use web_time::Instant;

use crate::timer::FadeQueue;
use crate::*;

/// How long a placed mark stays visible before it fades.
pub const HIDE_DELAY: Duration = Duration::from_millis(650);

/// One running game: the board plus the timed mark lifecycle around it.
///
/// The session never blocks and owns no threads. The host event loop feeds
/// it placement requests and clock readings via `poll`, using
/// `next_deadline` to know when to come back. Rendering state is drained
/// through `take_events`.
#[derive(Clone, Debug)]
pub struct GameSession<D> {
    board: BoardState,
    opening: D,
    fades: FadeQueue,
    locked_cell: Option<CellIx>,
    hide_delay: Duration,
    move_count: u32,
    events: Vec<GameEvent>,
}

impl<D: OpeningDraw> GameSession<D> {
    pub fn new(opening: D) -> Self {
        Self::with_hide_delay(opening, HIDE_DELAY)
    }

    pub fn with_hide_delay(mut opening: D, hide_delay: Duration) -> Self {
        let first = opening.draw();
        log::debug!("new session, player {:?} opens", first);
        Self {
            board: BoardState::new(first),
            opening,
            fades: FadeQueue::default(),
            locked_cell: None,
            hide_delay,
            move_count: 0,
            events: Vec::new(),
        }
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn hide_delay(&self) -> Duration {
        self.hide_delay
    }

    /// True between a successful placement and the firing of its fade.
    pub fn input_locked(&self) -> bool {
        self.locked_cell.is_some()
    }

    pub fn moves_played(&self) -> u32 {
        self.move_count
    }

    /// Earliest pending fade, so the host can schedule its next wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.fades.next_deadline()
    }

    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn request_placement(&mut self, ix: CellIx, now: Instant) -> Result<()> {
        if self.input_locked() {
            return Err(GameError::InputLocked);
        }

        let outcome = self.board.place_mark(ix)?;
        self.move_count += 1;
        log::debug!("player {:?} marked cell {}", outcome.player, outcome.cell);
        self.events.push(GameEvent::PlacementApplied {
            cell: outcome.cell,
            player: outcome.player,
        });

        match outcome.phase {
            Phase::InProgress => {
                self.fades.schedule(outcome.cell, now + self.hide_delay);
                self.locked_cell = Some(outcome.cell);
                log::trace!("fade scheduled for cell {}", outcome.cell);
                self.events.push(GameEvent::TurnChanged {
                    active: self.board.current_player(),
                });
            }
            phase => {
                // every placed mark stays visible once the game is over
                self.fades.cancel_all();
                self.locked_cell = None;
                log::debug!("game over: {:?}", phase);
                self.events.push(GameEvent::GameEnded { phase });
            }
        }

        Ok(())
    }

    /// Fires every fade due at `now`. A fade that comes due after the game
    /// has ended is discarded, never applied.
    pub fn poll(&mut self, now: Instant) -> usize {
        let mut hidden = 0;
        while let Some(cell) = self.fades.pop_due(now) {
            if self.board.phase().is_finished() {
                log::debug!("fade for cell {} discarded, game already over", cell);
                continue;
            }
            if self.locked_cell == Some(cell) {
                self.locked_cell = None;
            }
            if self.board.hide_mark(cell) {
                log::trace!("cell {} faded", cell);
                self.events.push(GameEvent::MarkHidden { cell });
                hidden += 1;
            }
        }
        hidden
    }

    pub fn reset(&mut self) {
        // destroy pending fades before the new board exists
        self.fades.clear();
        let first = self.opening.draw();
        self.board = BoardState::new(first);
        self.locked_cell = None;
        self.move_count = 0;
        log::debug!("session reset, player {:?} opens", first);
        self.events.push(GameEvent::GameReset);
    }

    /// The cell as the presentation layer should draw it right now: the
    /// true board state while the game runs, all marks revealed once over.
    pub fn display_cell(&self, ix: CellIx) -> Cell {
        let cell = self.board.cell_at(ix);
        if self.board.phase().is_finished() {
            cell.revealed()
        } else {
            cell
        }
    }

    /// Whether a hover preview may be shown on the cell. Deliberately not
    /// gated on the input lock, only on occupancy and the game being live.
    pub fn can_preview_at(&self, ix: CellIx) -> bool {
        !self.board.phase().is_finished() && self.board.cell_at(ix).is_empty()
    }
}
