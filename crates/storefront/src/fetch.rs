//! Last-request-wins guard for view fetches.
//!
//! Route or parameter changes can retrigger a fetch before the previous one
//! resolves. Each fetch takes a ticket from a shared sequence; a result is
//! applied only while its ticket is still the most recent one issued, so a
//! stale response never overwrites a newer request's state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// A shared, monotonically increasing request sequence.
#[derive(Clone, Debug, Default)]
pub struct RequestSequence {
    latest: Arc<AtomicU64>,
}

impl RequestSequence {
    /// Create a fresh sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a request, superseding all earlier tickets.
    #[must_use]
    pub fn begin(&self) -> RequestTicket {
        let seq = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        RequestTicket {
            seq,
            latest: Arc::clone(&self.latest),
        }
    }
}

/// A ticket for one in-flight request.
#[derive(Debug)]
pub struct RequestTicket {
    seq: u64,
    latest: Arc<AtomicU64>,
}

impl RequestTicket {
    /// Whether this ticket is still the most recent one issued.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.latest.load(Ordering::SeqCst) == self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_ticket_is_current() {
        let seq = RequestSequence::new();
        let ticket = seq.begin();
        assert!(ticket.is_current());
    }

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let second = seq.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }

    #[test]
    fn test_clones_share_the_sequence() {
        let seq = RequestSequence::new();
        let first = seq.begin();
        let other_handle = seq.clone();
        let second = other_handle.begin();

        assert!(!first.is_current());
        assert!(second.is_current());
    }
}
