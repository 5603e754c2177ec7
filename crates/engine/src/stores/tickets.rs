//! Request tickets for discarding superseded results.
//!
//! Every request is tagged with a ticket from a monotonically increasing
//! counter. A result may only be applied while its ticket is still the
//! latest one issued.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A result arrived for a request that has since been superseded.
///
/// Internal signal only; callers drop the result and carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Discarded stale result {ticket}; latest request is {latest}")]
pub struct StaleResultDiscard {
    pub ticket: Ticket,
    pub latest: Ticket,
}

/// Issues tickets and checks whether a ticket is still current.
#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: AtomicU64,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a ticket that supersedes every earlier one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn latest(&self) -> Ticket {
        Ticket(self.latest.load(Ordering::SeqCst))
    }

    pub fn check(&self, ticket: Ticket) -> Result<(), StaleResultDiscard> {
        let latest = self.latest();
        if ticket == latest {
            Ok(())
        } else {
            Err(StaleResultDiscard { ticket, latest })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        let second = tracker.issue();
        assert!(second > first);
        assert_eq!(tracker.latest(), second);
    }

    #[test]
    fn test_only_latest_ticket_passes_check() {
        let tracker = RequestTracker::new();
        let first = tracker.issue();
        assert_eq!(tracker.check(first), Ok(()));

        let second = tracker.issue();
        assert_eq!(
            tracker.check(first),
            Err(StaleResultDiscard {
                ticket: first,
                latest: second
            })
        );
        assert_eq!(tracker.check(second), Ok(()));
    }
}
