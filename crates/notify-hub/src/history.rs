//! Bounded, most-recent-first log of delivered notifications.

use std::collections::VecDeque;

use crate::types::NotificationRecord;

pub const DEFAULT_CAPACITY: usize = 50;

/// Delivery history with head insertion and tail eviction.
#[derive(Debug)]
pub struct HistoryLedger {
    entries: VecDeque<NotificationRecord>,
    capacity: usize,
}

impl HistoryLedger {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Insert at the head, then trim the tail past capacity.
    pub fn push(&mut self, record: NotificationRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    /// Defensive copy, newest first.
    pub fn snapshot(&self) -> Vec<NotificationRecord> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for HistoryLedger {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
