//! Change notification for query caches
//!
//! Caches call `notify` whenever an entry changes state; each subscriber gets
//! one unit message per change and re-reads whatever it renders.

use std::sync::{Arc, Mutex, PoisonError};

use futures_channel::mpsc;

#[derive(Clone, Default)]
pub struct ChangeNotifier {
    listeners: Arc<Mutex<Vec<mpsc::UnboundedSender<()>>>>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> mpsc::UnboundedReceiver<()> {
        let (tx, rx) = mpsc::unbounded();
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    /// Wake every live subscriber; dropped receivers are pruned.
    pub fn notify(&self) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|tx| tx.unbounded_send(()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subscriber_is_notified() {
        let notifier = ChangeNotifier::new();
        let mut a = notifier.subscribe();
        let mut b = notifier.subscribe();

        notifier.notify();

        assert!(matches!(a.try_next(), Ok(Some(()))));
        assert!(matches!(b.try_next(), Ok(Some(()))));
    }

    #[test]
    fn dropped_subscribers_are_pruned() {
        let notifier = ChangeNotifier::new();
        let kept = notifier.subscribe();
        drop(notifier.subscribe());

        notifier.notify();
        assert_eq!(notifier.subscriber_count(), 1);
        drop(kept);
    }
}
