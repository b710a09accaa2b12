//! Notification feed behind the header bell.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    /// Human-readable relative time ("2 min ago").
    pub time: String,
    #[serde(default)]
    pub read: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NotificationFeed {
    items: Vec<Notification>,
}

impl NotificationFeed {
    #[must_use]
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    #[must_use]
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Badge count in the header.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Returns `false` when `id` is unknown.
    pub fn mark_read(&mut self, id: u32) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(item) => {
                item.read = true;
                true
            }
            None => false,
        }
    }
}
