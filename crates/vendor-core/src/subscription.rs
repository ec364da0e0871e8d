//! Snapshot fan-out to observer views.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::CatalogSnapshot;

/// Receiving end handed to an observer. Dropping it unsubscribes.
pub type SnapshotReceiver = Receiver<Arc<CatalogSnapshot>>;

#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<Arc<CatalogSnapshot>>>,
}

impl Subscribers {
    /// Register an observer and prime it with `current`.
    pub(crate) fn subscribe(&mut self, current: &Arc<CatalogSnapshot>) -> SnapshotReceiver {
        let (sender, receiver) = unbounded();
        // Cannot fail: the receiver is alive.
        let _ = sender.send(Arc::clone(current));
        self.senders.push(sender);
        receiver
    }

    /// Deliver `snapshot` to every live observer, forgetting the ones that
    /// went away.
    pub(crate) fn publish(&mut self, snapshot: &Arc<CatalogSnapshot>) {
        let before = self.senders.len();
        self.senders
            .retain(|sender| sender.send(Arc::clone(snapshot)).is_ok());
        let pruned = before - self.senders.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = self.senders.len(), "dropped closed subscribers");
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
