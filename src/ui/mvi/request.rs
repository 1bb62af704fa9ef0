//! Single-outstanding-request bookkeeping.

/// Identifies one issued request. Results carry the ticket back so a
/// reducer can tell a current answer from a stale one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// The request a screen is waiting on, if any.
///
/// Issuing a new request supersedes the previous one; its result will no
/// longer `settle`. Tickets increase monotonically for the lifetime of the
/// slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSlot<R> {
    issued: u64,
    pending: Option<(Ticket, R)>,
}

impl<R> Default for RequestSlot<R> {
    fn default() -> Self {
        Self {
            issued: 0,
            pending: None,
        }
    }
}

impl<R> RequestSlot<R> {
    pub fn issue(&mut self, request: R) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.pending = Some((ticket, request));
        ticket
    }

    /// Accept the result for `ticket`.
    ///
    /// Returns the request it answers, or `None` if the ticket is stale
    /// (superseded or cancelled). A matching ticket clears the slot.
    pub fn settle(&mut self, ticket: Ticket) -> Option<R> {
        match self.pending.take() {
            Some((pending, request)) if pending == ticket => Some(request),
            other => {
                self.pending = other;
                None
            }
        }
    }

    /// Drop the pending request; its result will be ignored.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn pending(&self) -> Option<&(Ticket, R)> {
        self.pending.as_ref()
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settle_matches_latest_ticket_only() {
        let mut slot = RequestSlot::default();
        let first = slot.issue("load");
        let second = slot.issue("reload");
        assert!(first.value() < second.value());

        assert_eq!(slot.settle(first), None);
        assert!(slot.is_busy());
        assert_eq!(slot.settle(second), Some("reload"));
        assert!(!slot.is_busy());
    }

    #[test]
    fn cancel_makes_result_stale() {
        let mut slot = RequestSlot::default();
        let ticket = slot.issue(1);
        slot.cancel();
        assert_eq!(slot.settle(ticket), None);
    }

    #[test]
    fn tickets_keep_increasing_after_cancel() {
        let mut slot = RequestSlot::default();
        let a = slot.issue(());
        slot.cancel();
        let b = slot.issue(());
        assert_ne!(a, b);
        assert_eq!(slot.settle(a), None);
        assert_eq!(slot.settle(b), Some(()));
    }
}
