use smallvec::SmallVec;
use web_time::Instant;

use crate::*;

/// A scheduled visible → hidden transition for one cell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct PendingFade {
    cell: CellIx,
    deadline: Instant,
    cancelled: bool,
}

/// Deadline records polled by the host event loop. Cancelled records stay
/// queued until swept by `pop_due`, so cancellation is valid at any point
/// of a record's lifetime.
#[derive(Clone, Debug, Default)]
pub(crate) struct FadeQueue {
    entries: SmallVec<[PendingFade; CELL_COUNT]>,
}

impl FadeQueue {
    /// One outstanding fade per cell at most, a new schedule replaces it.
    pub(crate) fn schedule(&mut self, cell: CellIx, deadline: Instant) {
        self.entries.retain(|fade| fade.cell != cell);
        self.entries.push(PendingFade {
            cell,
            deadline,
            cancelled: false,
        });
    }

    pub(crate) fn cancel_all(&mut self) {
        for fade in &mut self.entries {
            fade.cancelled = true;
        }
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn next_deadline(&self) -> Option<Instant> {
        self.entries
            .iter()
            .filter(|fade| !fade.cancelled)
            .map(|fade| fade.deadline)
            .min()
    }

    /// Removes and returns the next due live record; due records that were
    /// cancelled are destroyed without firing.
    pub(crate) fn pop_due(&mut self, now: Instant) -> Option<CellIx> {
        while let Some(pos) = self.entries.iter().position(|fade| fade.deadline <= now) {
            let fade = self.entries.remove(pos);
            if !fade.cancelled {
                return Some(fade.cell);
            }
        }
        None
    }
}
