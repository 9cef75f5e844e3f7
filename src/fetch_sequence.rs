//! Ordering for list requests that may resolve out of order.

/// Identifies one issued fetch of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// Hands out increasing tickets so that only the newest fetch is applied.
///
/// Two overlapping fetches of the same collection can resolve in either
/// order. Applying whichever resolves last could overwrite fresh data with
/// stale data, so a response is only applied if its ticket is the last one
/// issued.
#[derive(Debug, Clone, Default)]
pub struct FetchSequence {
    latest: u64,
}

impl FetchSequence {
    /// Record that a new fetch is being issued.
    pub fn issue(&mut self) -> FetchTicket {
        self.latest += 1;
        FetchTicket(self.latest)
    }

    /// Returns `true` if no fetch has been issued since `ticket`.
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.latest
    }
}
