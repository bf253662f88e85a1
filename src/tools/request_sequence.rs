use std::cell::Cell;

/// Numbers the requests issued by a controller so that only the response to the most
/// recently issued one gets displayed.
#[derive(Debug, Default)]
pub struct RequestSequence {
    last_issued: Cell<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTicket(u64);

impl RequestSequence {
    pub fn issue(&self) -> RequestTicket {
        let next = self.last_issued.get().wrapping_add(1);
        self.last_issued.set(next);
        RequestTicket(next)
    }

    pub fn is_latest(&self, ticket: RequestTicket) -> bool {
        self.last_issued.get() == ticket.0
    }
}
