//! Native capability port.
//!
//! Platform glue for native OS notifications lives behind `NativeBackend`:
//! a desktop shell, a webview bridge, whatever the host process exposes.
//! The manager only ever talks to this port, so environments without any
//! native capability plug in [`UnsupportedBackend`] and run fallback-only.

use async_trait::async_trait;

use crate::types::{NotificationRecord, PermissionState};

/// Errors raised by a native backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Native notifications are not supported in this environment")]
    Unsupported,
    #[error("Permission request failed: {0}")]
    PermissionRequest(String),
    #[error("Display failed: {0}")]
    Display(String),
}

/// Native notification capability of the host environment.
#[async_trait]
pub trait NativeBackend: Send + Sync {
    /// True iff the runtime exposes a native notification capability.
    fn is_supported(&self) -> bool;

    /// Live platform permission value.
    fn permission(&self) -> PermissionState;

    /// Run the platform permission prompt. May suspend until the user
    /// reacts; a dismissed prompt resolves to denied/default rather than
    /// hanging.
    async fn request_permission(&self) -> Result<PermissionState, BackendError>;

    /// Display one notification natively. `icon` is the resolved icon URI,
    /// already defaulted by the caller. When the user activates the
    /// notification, implementations open `record.url` (if set) and then
    /// dismiss the native element.
    async fn show(
        &self,
        record: &NotificationRecord,
        icon: Option<&str>,
    ) -> Result<(), BackendError>;
}

/// Null backend for environments without native notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedBackend;

#[async_trait]
impl NativeBackend for UnsupportedBackend {
    fn is_supported(&self) -> bool {
        false
    }

    fn permission(&self) -> PermissionState {
        PermissionState::Unsupported
    }

    async fn request_permission(&self) -> Result<PermissionState, BackendError> {
        Ok(PermissionState::Unsupported)
    }

    async fn show(
        &self,
        _record: &NotificationRecord,
        _icon: Option<&str>,
    ) -> Result<(), BackendError> {
        Err(BackendError::Unsupported)
    }
}
