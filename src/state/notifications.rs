//! Transient user-facing notifications (toasts).
//!
//! SYSTEM CONTEXT
//! ==============
//! Views report outcomes through [`NotificationSink`] and never wait on it.
//! The app root owns one [`NotificationState`] queue; the tray component
//! renders and expires its entries.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

/// Fire-and-forget notification target.
pub trait NotificationSink {
    /// Queue a notification and return its id.
    fn add_notification(&mut self, kind: NotificationKind, message: String) -> u64;
}

/// Ordered queue of visible notifications, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Remove a notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }
}

impl NotificationSink for NotificationState {
    fn add_notification(&mut self, kind: NotificationKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind, message });
        id
    }
}

/// Ids with a running auto-dismiss timer. An id is held only while its
/// timer is pending.
#[derive(Clone, Debug, Default)]
pub struct ExpirySchedule {
    pending: HashSet<u64>,
}

impl ExpirySchedule {
    /// Ids in `items` that have no timer yet. They are marked pending.
    pub fn schedule_new(&mut self, items: &[Notification]) -> Vec<u64> {
        items
            .iter()
            .map(|n| n.id)
            .filter(|id| self.pending.insert(*id))
            .collect()
    }

    /// Timer for `id` fired. Returns whether it was pending.
    pub fn fired(&mut self, id: u64) -> bool {
        self.pending.remove(&id)
    }
}
