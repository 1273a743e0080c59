//! Latest-value state slots with any number of readers

use std::sync::Arc;

use tokio::sync::watch;

/// Holds the current value of one piece of game state.
///
/// Single writer (the engine), many readers. Readers either take a snapshot
/// with [`Observable::get`] or keep a [`watch::Receiver`] and are told when a
/// newer value has been published. Values are shared behind an `Arc`, so a
/// snapshot stays valid after later publishes.
#[derive(Debug)]
pub struct Observable<T> {
    tx: watch::Sender<Arc<T>>,
}

impl<T> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (tx, _rx) = watch::channel(Arc::new(initial));
        Self { tx }
    }

    /// Replace the current value and notify every receiver
    pub fn publish(&self, value: T) {
        self.tx.send_replace(Arc::new(value));
    }

    /// Latest published value
    pub fn get(&self) -> Arc<T> {
        Arc::clone(&self.tx.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<T>> {
        self.tx.subscribe()
    }
}
