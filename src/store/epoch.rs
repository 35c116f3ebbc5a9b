//! Stale-response guard for in-flight fetches.
//!
//! Gateway calls have no cancellation; a view that navigates away before
//! its fetch settles must not apply the late result. A view samples the
//! epoch into a ticket before fetching and checks the ticket when the
//! result arrives; `invalidate` (called on route change) makes every
//! outstanding ticket stale.

/// Generation counter for the currently active view.
#[derive(Debug, Default)]
pub struct ViewEpoch {
    generation: u64,
}

/// A sample of the epoch taken when a fetch was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewTicket {
    generation: u64,
}

impl ViewEpoch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a ticket tied to the current view.
    pub fn issue(&self) -> ViewTicket {
        ViewTicket {
            generation: self.generation,
        }
    }

    /// Mark every outstanding ticket stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether a result fetched under `ticket` may still be applied.
    pub fn is_current(&self, ticket: &ViewTicket) -> bool {
        ticket.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_ticket_is_current() {
        let epoch = ViewEpoch::new();
        let ticket = epoch.issue();
        assert!(epoch.is_current(&ticket));
    }

    #[test]
    fn test_invalidate_stales_outstanding_tickets() {
        let mut epoch = ViewEpoch::new();
        let ticket = epoch.issue();

        epoch.invalidate();
        assert!(!epoch.is_current(&ticket));

        // tickets issued after the invalidation are current again
        let fresh = epoch.issue();
        assert!(epoch.is_current(&fresh));
    }

    #[test]
    fn test_multiple_tickets_same_view() {
        let epoch = ViewEpoch::new();
        let a = epoch.issue();
        let b = epoch.issue();
        assert!(epoch.is_current(&a));
        assert!(epoch.is_current(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_old_ticket_never_becomes_current_again() {
        let mut epoch = ViewEpoch::new();
        let ticket = epoch.issue();
        epoch.invalidate();
        epoch.invalidate();
        assert!(!epoch.is_current(&ticket));
    }
}
