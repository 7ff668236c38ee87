//! "Last requested load wins" bookkeeping.
//!
//! A dashboard reload can be triggered again (new range, new account) while
//! an earlier load is still fetching. Each load takes a [`LoadTicket`] from
//! a shared [`LoadTracker`]; when its result arrives it is only applied if
//! no newer ticket has been issued since.

use std::sync::atomic::{AtomicU64, Ordering};

/// Generation number of one load request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LoadTicket {
    generation: u64,
}

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Issues monotonically increasing [`LoadTicket`]s.
#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: AtomicU64,
}

impl LoadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new load, superseding every earlier ticket.
    pub fn begin(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        LoadTicket { generation }
    }

    /// Supersede every outstanding ticket without starting a load,
    /// e.g. when the user switches account or signs out.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Whether `ticket` is still the most recent one.
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.generation
    }

    /// Pass `value` through only if `ticket` is still current.
    pub fn accept<T>(&self, ticket: LoadTicket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            None
        }
    }
}
