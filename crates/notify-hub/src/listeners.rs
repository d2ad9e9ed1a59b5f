//! Listener registry and synchronous dispatch.

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use crate::types::NotificationRecord;

/// Observer callback invoked with every sent notification.
pub type Listener = Arc<dyn Fn(&NotificationRecord) + Send + Sync>;

/// Registration-ordered listener set keyed by callback identity.
#[derive(Default)]
pub struct ListenerRegistry {
    listeners: Vec<Listener>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a listener. Registering the same callback twice means it
    /// runs twice per dispatch.
    pub fn add(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    /// Remove the first registration of this exact callback; no-op when
    /// it was never registered.
    pub fn remove(&mut self, listener: &Listener) {
        if let Some(pos) = self
            .listeners
            .iter()
            .position(|registered| Arc::ptr_eq(registered, listener))
        {
            self.listeners.remove(pos);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Copy of the current registrations, for dispatch outside any lock.
    pub fn snapshot(&self) -> Vec<Listener> {
        self.listeners.clone()
    }
}

/// Invoke each listener with the record, in registration order. A
/// panicking listener is contained so the remaining listeners still run.
pub fn dispatch(listeners: &[Listener], record: &NotificationRecord) {
    for listener in listeners {
        if catch_unwind(AssertUnwindSafe(|| listener(record))).is_err() {
            tracing::warn!("Notification listener panicked (id={})", record.id);
        }
    }
}
