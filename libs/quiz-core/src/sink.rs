//! Boundary the session engine pushes snapshots through.

use crate::types::SessionSnapshot;

/// Receives a snapshot after every state-changing engine operation.
///
/// Called synchronously; the engine ignores whatever the sink does with it.
pub trait ChangeSink: Send {
    fn notify(&mut self, snapshot: SessionSnapshot);
}

impl<F> ChangeSink for F
where
    F: FnMut(SessionSnapshot) + Send,
{
    fn notify(&mut self, snapshot: SessionSnapshot) {
        self(snapshot)
    }
}
