//! Notification subscription and delivery manager.
//!
//! Tracks one active subscription per process, selects between native and
//! in-process fallback delivery, keeps a bounded most-recent-first history
//! of sent notifications, and fans every delivery out to registered
//! listeners. Native platform failures never escape: a missing capability
//! or refused permission routes to the fallback channel, and a failed
//! native display degrades to listener-only delivery.

pub mod backend;
pub mod config;
pub mod history;
pub mod listeners;
pub mod manager;
pub mod probe;
pub mod types;

pub use backend::{BackendError, NativeBackend, UnsupportedBackend};
pub use config::ManagerConfig;
pub use listeners::Listener;
pub use manager::NotificationManager;
pub use probe::CapabilityProbe;
pub use types::{
    Channel, NotificationPayload, NotificationRecord, PermissionState, Subscription,
};

#[cfg(test)]
mod tests;
