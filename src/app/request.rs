//! Per-phase request tagging.
//!
//! Every fetch gets the next id from its phase's tracker; a response is only
//! applied when its id is still the latest one issued for that phase.

use crate::app::event::RequestId;

#[derive(Debug, Default)]
pub struct RequestTracker {
    latest: RequestId,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a new id, superseding every id issued before it.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, id: RequestId) -> bool {
        self.latest() == Some(id)
    }

    pub fn latest(&self) -> Option<RequestId> {
        (self.latest != 0).then_some(self.latest)
    }
}
