//! Manager configuration.

use crate::history;

/// Tunables for the notification manager.
#[derive(Debug, Clone)]
pub struct ManagerConfig {
    /// Maximum number of retained history entries.
    pub history_capacity: usize,
    /// Icon substituted at native display time when a payload carries
    /// none. The stored record keeps the caller's value.
    pub default_icon: Option<String>,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            history_capacity: history::DEFAULT_CAPACITY,
            default_icon: Some("/icon.png".into()),
        }
    }
}
