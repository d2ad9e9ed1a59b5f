//! Subscription state, channel selection, and the send pipeline.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use nanoid::nanoid;

use crate::backend::{NativeBackend, UnsupportedBackend};
use crate::config::ManagerConfig;
use crate::history::HistoryLedger;
use crate::listeners::{Listener, ListenerRegistry, dispatch};
use crate::probe::CapabilityProbe;
use crate::types::{
    Channel, NotificationPayload, NotificationRecord, PermissionState, Subscription,
};

/// Process-wide notification manager.
///
/// Owns the active subscription, the delivery history, and the listener
/// set; all mutation goes through its methods. Clones share state, so one
/// instance can be handed to every component that needs it.
#[derive(Clone)]
pub struct NotificationManager {
    inner: Arc<ManagerInner>,
}

struct ManagerInner {
    backend: Arc<dyn NativeBackend>,
    probe: CapabilityProbe,
    config: ManagerConfig,
    subscription: Mutex<Option<Subscription>>,
    history: Mutex<HistoryLedger>,
    listeners: Mutex<ListenerRegistry>,
}

impl NotificationManager {
    /// Manager with no native capability; every subscription uses the
    /// fallback channel.
    pub fn new() -> Self {
        Self::with_backend(Arc::new(UnsupportedBackend))
    }

    pub fn with_backend(backend: Arc<dyn NativeBackend>) -> Self {
        Self::with_config(backend, ManagerConfig::default())
    }

    pub fn with_config(backend: Arc<dyn NativeBackend>, config: ManagerConfig) -> Self {
        Self {
            inner: Arc::new(ManagerInner {
                probe: CapabilityProbe::new(backend.clone()),
                backend,
                subscription: Mutex::new(None),
                history: Mutex::new(HistoryLedger::new(config.history_capacity)),
                listeners: Mutex::new(ListenerRegistry::new()),
                config,
            }),
        }
    }

    /// True iff the runtime exposes a native notification capability.
    pub fn is_supported(&self) -> bool {
        self.inner.probe.is_supported()
    }

    /// Current permission; `Unsupported` when the capability is absent.
    pub fn permission(&self) -> PermissionState {
        self.inner.probe.permission()
    }

    /// Run the platform permission prompt. Never fails; a failing prompt
    /// resolves to `Denied`.
    pub async fn request_permission(&self) -> PermissionState {
        self.inner.probe.request_permission().await
    }

    /// Subscribe to notifications, choosing the delivery channel.
    ///
    /// Native delivery needs the platform capability and a granted
    /// permission; every other outcome (unsupported, denied, dismissed
    /// prompt, `force_fallback`) degrades to the fallback channel instead
    /// of failing. Replaces any previously active subscription.
    pub async fn subscribe(&self, force_fallback: bool) -> Subscription {
        let channel = if force_fallback || !self.inner.probe.is_supported() {
            Channel::Fallback
        } else {
            match self.inner.probe.request_permission().await {
                PermissionState::Granted => Channel::Native,
                _ => Channel::Fallback,
            }
        };

        let subscription = Subscription {
            id: nanoid!(),
            created_at: Utc::now().timestamp_millis(),
            channel,
        };

        if let Ok(mut slot) = self.inner.subscription.lock() {
            *slot = Some(subscription.clone());
        }
        tracing::info!(
            "Subscribed to notifications (id={}, channel={:?})",
            subscription.id,
            subscription.channel
        );

        subscription
    }

    /// Clear the active subscription. Safe to call with none active.
    pub fn unsubscribe(&self) {
        if let Ok(mut slot) = self.inner.subscription.lock() {
            if slot.take().is_some() {
                tracing::info!("Unsubscribed from notifications");
            }
        }
    }

    /// Copy of the active subscription, if any.
    pub fn current_subscription(&self) -> Option<Subscription> {
        let Ok(slot) = self.inner.subscription.lock() else {
            return None;
        };
        slot.clone()
    }

    /// Deliver one notification.
    ///
    /// Returns `false` with no side effects when no subscription is
    /// active. Otherwise records the notification, drives native display
    /// when the channel and live permission allow it, and always fans out
    /// to every registered listener. Native display failure degrades to
    /// listener-only delivery and still returns `true`.
    pub async fn send(&self, payload: NotificationPayload) -> bool {
        let Some(subscription) = self.current_subscription() else {
            tracing::debug!("Dropping notification: no active subscription");
            return false;
        };

        let record = finalize(payload);

        if let Ok(mut history) = self.inner.history.lock() {
            history.push(record.clone());
        }

        // Permission can change between subscribe and send; consult the
        // live value, not the one observed during the handshake.
        if subscription.channel == Channel::Native
            && self.inner.backend.permission() == PermissionState::Granted
        {
            let icon = record
                .icon
                .as_deref()
                .or(self.inner.config.default_icon.as_deref());
            if let Err(err) = self.inner.backend.show(&record, icon).await {
                tracing::warn!("Native display failed, listeners still notified: {err}");
            }
        }

        let listeners = {
            let Ok(registry) = self.inner.listeners.lock() else {
                return true;
            };
            registry.snapshot()
        };
        dispatch(&listeners, &record);

        tracing::debug!(
            "Notification sent (id={}, channel={:?})",
            record.id,
            subscription.channel
        );
        true
    }

    /// Delivery history, newest first. Defensive copy.
    pub fn history(&self) -> Vec<NotificationRecord> {
        let Ok(history) = self.inner.history.lock() else {
            return Vec::new();
        };
        history.snapshot()
    }

    /// Register an observer for every sent notification.
    pub fn add_listener(&self, listener: Listener) {
        if let Ok(mut registry) = self.inner.listeners.lock() {
            registry.add(listener);
        }
    }

    /// Drop the first registration of this exact callback.
    pub fn remove_listener(&self, listener: &Listener) {
        if let Ok(mut registry) = self.inner.listeners.lock() {
            registry.remove(listener);
        }
    }
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Stamp a payload into an immutable record, generating whatever the
/// caller left out.
fn finalize(payload: NotificationPayload) -> NotificationRecord {
    NotificationRecord {
        id: payload.id.unwrap_or_else(|| nanoid!()),
        title: payload.title,
        body: payload.body,
        icon: payload.icon,
        url: payload.url,
        created_at: payload
            .created_at
            .unwrap_or_else(|| Utc::now().timestamp_millis()),
    }
}
