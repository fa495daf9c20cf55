//! Monotonic request tickets for discarding stale responses.
//!
//! Every user action issues a new [`Ticket`]. When a response arrives it is
//! applied only if its ticket is still the most recent one, so a slow
//! response for an old selection can never overwrite a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn seq(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket newer than every ticket issued before it.
    pub fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether no newer ticket has been issued since `ticket`.
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::Acquire) == ticket.0
    }

    /// The most recently issued ticket, if any.
    pub fn latest(&self) -> Option<Ticket> {
        match self.issued.load(Ordering::Acquire) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }
}
