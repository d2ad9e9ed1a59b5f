//! Capability probe: what the platform can do and what it will allow.

use std::sync::Arc;

use crate::backend::NativeBackend;
use crate::types::PermissionState;

/// Read-side view of the native capability plus the permission handshake.
#[derive(Clone)]
pub struct CapabilityProbe {
    backend: Arc<dyn NativeBackend>,
}

impl CapabilityProbe {
    pub fn new(backend: Arc<dyn NativeBackend>) -> Self {
        Self { backend }
    }

    /// True iff native notifications exist in this environment. Pure
    /// query, no side effects.
    pub fn is_supported(&self) -> bool {
        self.backend.is_supported()
    }

    /// Current permission; `Unsupported` when the capability is absent.
    pub fn permission(&self) -> PermissionState {
        if !self.backend.is_supported() {
            return PermissionState::Unsupported;
        }
        self.backend.permission()
    }

    /// Run the platform permission prompt.
    ///
    /// Resolves immediately to `Unsupported` when the capability is
    /// absent. A failing prompt resolves to `Denied`; this never surfaces
    /// an error to the caller.
    pub async fn request_permission(&self) -> PermissionState {
        if !self.backend.is_supported() {
            return PermissionState::Unsupported;
        }

        match self.backend.request_permission().await {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!("Permission request failed: {err}");
                PermissionState::Denied
            }
        }
    }
}
