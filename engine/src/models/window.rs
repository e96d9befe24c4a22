use shared::models::Step;

// The half-open range [start, end) still to be paginated, with the page
// shape sent on every request. Only `start` moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWindow {
    pub start: i64,
    pub end: i64,
    pub step: Step,
    pub limit: u32,
}

impl QueryWindow {
    pub fn new(start: i64, end: i64, step: Step, limit: u32) -> Self {
        QueryWindow { start, end, step, limit }
    }

    pub fn is_exhausted(&self) -> bool {
        self.start >= self.end
    }

    // Moves the window start to the timestamp of the last record received.
    // Returns false (and leaves the window alone) if that would not move it forward.
    pub fn advance_to(&mut self, last_timestamp: i64) -> bool {
        if last_timestamp <= self.start {
            return false;
        }
        self.start = last_timestamp;
        true
    }
}
