use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::backend::{BackendError, NativeBackend};
use crate::types::{NotificationPayload, NotificationRecord, PermissionState};


/// Scripted native backend: each test fixes the platform's behavior and
/// inspects what the manager asked of it.
pub(crate) struct ScriptedBackend {
    supported: bool,
    permission: Mutex<PermissionState>,
    /// Outcome of the permission prompt; `None` makes the prompt fail.
    prompt_outcome: Option<PermissionState>,
    fail_show: bool,
    prompts: Mutex<usize>,
    shown: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedBackend {
    fn new(supported: bool, permission: PermissionState) -> Self {
        Self {
            supported,
            permission: Mutex::new(permission),
            prompt_outcome: Some(permission),
            fail_show: false,
            prompts: Mutex::new(0),
            shown: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn granted() -> Arc<Self> {
        Arc::new(Self::new(true, PermissionState::Granted))
    }

    pub(crate) fn denied() -> Arc<Self> {
        Arc::new(Self::new(true, PermissionState::Denied))
    }

    pub(crate) fn undecided() -> Arc<Self> {
        Arc::new(Self::new(true, PermissionState::Default))
    }

    pub(crate) fn unsupported() -> Arc<Self> {
        Arc::new(Self::new(false, PermissionState::Unsupported))
    }

    pub(crate) fn broken_prompt() -> Arc<Self> {
        let mut backend = Self::new(true, PermissionState::Default);
        backend.prompt_outcome = None;
        Arc::new(backend)
    }

    pub(crate) fn failing_display() -> Arc<Self> {
        let mut backend = Self::new(true, PermissionState::Granted);
        backend.fail_show = true;
        Arc::new(backend)
    }

    pub(crate) fn set_permission(&self, state: PermissionState) {
        *self.permission.lock().unwrap() = state;
    }

    /// Number of permission prompts the manager issued.
    pub(crate) fn prompts(&self) -> usize {
        *self.prompts.lock().unwrap()
    }

    /// Native display attempts as (record id, resolved icon).
    pub(crate) fn shown(&self) -> Vec<(String, Option<String>)> {
        self.shown.lock().unwrap().clone()
    }
}

#[async_trait]
impl NativeBackend for ScriptedBackend {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn permission(&self) -> PermissionState {
        *self.permission.lock().unwrap()
    }

    async fn request_permission(&self) -> Result<PermissionState, BackendError> {
        *self.prompts.lock().unwrap() += 1;
        match self.prompt_outcome {
            Some(state) => Ok(state),
            None => Err(BackendError::PermissionRequest("prompt crashed".into())),
        }
    }

    async fn show(
        &self,
        record: &NotificationRecord,
        icon: Option<&str>,
    ) -> Result<(), BackendError> {
        self.shown
            .lock()
            .unwrap()
            .push((record.id.clone(), icon.map(str::to_string)));
        if self.fail_show {
            return Err(BackendError::Display("display surface gone".into()));
        }
        Ok(())
    }
}

pub(crate) fn payload(title: &str, body: &str) -> NotificationPayload {
    NotificationPayload {
        title: title.into(),
        body: body.into(),
        ..NotificationPayload::default()
    }
}
