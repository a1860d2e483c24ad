//! Shared authentication flag.
//!
//! DESIGN
//! ======
//! One boolean cell per tab, `false` until UI code learns otherwise. Backed
//! by a `tokio::sync::watch` channel so any number of observers can follow
//! it. Clones of `AuthStore` share the same cell. Setting the current value
//! again does not wake subscribers.
//!
//! The flag is never derived from cookies here; the server gate computes its
//! own signal per request and the two are not kept in sync.

use std::sync::Arc;

use tokio::sync::watch;

#[derive(Clone, Debug)]
pub struct AuthStore {
    tx: Arc<watch::Sender<bool>>,
}

impl AuthStore {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    #[must_use]
    pub fn get(&self) -> bool {
        *self.tx.borrow()
    }

    /// Update the flag, notifying subscribers only if it changed.
    pub fn set(&self, value: bool) {
        self.tx.send_if_modified(|current| {
            if *current == value {
                return false;
            }
            *current = value;
            true
        });
    }

    #[must_use]
    pub fn subscribe(&self) -> AuthSubscription {
        AuthSubscription { rx: self.tx.subscribe() }
    }
}

impl Default for AuthStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Observer handle returned by [`AuthStore::subscribe`].
#[derive(Debug)]
pub struct AuthSubscription {
    rx: watch::Receiver<bool>,
}

impl AuthSubscription {
    #[must_use]
    pub fn current(&self) -> bool {
        *self.rx.borrow()
    }

    /// Whether the flag changed since this subscription last looked.
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for the next change and return the new value.
    ///
    /// Returns `None` once every `AuthStore` handle has been dropped.
    pub async fn changed(&mut self) -> Option<bool> {
        self.rx.changed().await.ok()?;
        Some(*self.rx.borrow_and_update())
    }
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;
