// Debounced auto-save bookkeeping. The timer itself lives in the component;
// this only decides whether a firing timer is still the current one.

/// Identifies one arming of the debounce timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Default)]
pub struct Debounce {
    issued: u64,
    armed: Option<Ticket>,
}

impl Debounce {
    /// Arm (or re-arm) the timer. Any previously issued ticket becomes stale.
    pub fn arm(&mut self) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.armed = Some(ticket);
        ticket
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Consume the timer if `ticket` is the one currently armed.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if self.armed == Some(ticket) {
            self.armed = None;
            true
        } else {
            false
        }
    }
}
