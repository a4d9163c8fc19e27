use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use super::YearGrid;

/// Stamp handed out when a grid build starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridTicket(u64);

/// Holds the most recently requested grid.
///
/// Builds can finish out of order; a build that was superseded by a later
/// `begin()` is dropped on `publish()` instead of overwriting newer data.
#[derive(Debug, Default)]
pub struct LatestGrid {
    generation: AtomicU64,
    slot: Mutex<Option<(u64, Arc<YearGrid>)>>,
}

impl LatestGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> GridTicket {
        GridTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Store `grid` if `ticket` is still the newest. Returns whether it was stored.
    pub fn publish(&self, ticket: GridTicket, grid: YearGrid) -> bool {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        let newest = self.generation.load(Ordering::SeqCst);
        let older_than_stored = slot.as_ref().is_some_and(|(stored, _)| *stored > ticket.0);
        if ticket.0 != newest || older_than_stored {
            tracing::debug!(ticket = ticket.0, newest, "dropping superseded grid");
            return false;
        }

        *slot = Some((ticket.0, Arc::new(grid)));
        true
    }

    pub fn current(&self) -> Option<Arc<YearGrid>> {
        let slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        slot.as_ref().map(|(_, grid)| Arc::clone(grid))
    }
}
