//! Owned handle for an open live-tick subscription.

use tokio::sync::mpsc;

/// Handle returned by [`crate::stream::TickSource::subscribe`].
///
/// Closing is idempotent: the first `unsubscribe` signals the transport
/// task to shut down, later calls are no-ops. Dropping the handle also
/// closes it, so a subscription cannot outlive its owner. The handle is
/// the only reference to the connection — there is no ambient socket
/// state anywhere in the crate.
#[derive(Debug)]
pub struct TickSubscription {
    shutdown: Option<mpsc::Sender<()>>,
}

impl TickSubscription {
    /// Wrap a shutdown channel to the transport task.
    pub fn new(shutdown: mpsc::Sender<()>) -> Self {
        Self {
            shutdown: Some(shutdown),
        }
    }

    /// Close the underlying connection if it is still open.
    pub fn unsubscribe(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            // The task may already have exited after a transport error; a
            // dead receiver is fine.
            let _ = tx.try_send(());
        }
    }

    /// Whether this handle has been closed.
    pub fn is_open(&self) -> bool {
        self.shutdown.is_some()
    }
}

impl Drop for TickSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unsubscribe_signals_task() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut sub = TickSubscription::new(tx);

        assert!(sub.is_open());
        sub.unsubscribe();
        assert!(!sub.is_open());
        assert_eq!(rx.recv().await, Some(()));
        // Sender is gone, so the channel drains to None afterwards.
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut sub = TickSubscription::new(tx);

        sub.unsubscribe();
        sub.unsubscribe();
        sub.unsubscribe();

        assert_eq!(rx.recv().await, Some(()));
        assert_eq!(rx.try_recv().ok(), None);
    }

    #[tokio::test]
    async fn test_drop_closes() {
        let (tx, mut rx) = mpsc::channel(1);
        drop(TickSubscription::new(tx));

        assert_eq!(rx.recv().await, Some(()));
    }
}
