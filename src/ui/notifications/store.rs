// SPDX-License-Identifier: MPL-2.0
//! Ordered collection of active notifications.
//!
//! The `Store` is the single owner of notification records. It is only ever
//! mutated through `add`, `remove` and `remove_all`; every mutation that
//! changes the list is reported synchronously to registered observers.

use super::notification::{Notification, NotificationId};
use std::fmt;

/// Handle returned by [`Store::subscribe`], used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

type Observer = Box<dyn FnMut(&[Notification])>;

/// Holds the active notifications in insertion order.
#[derive(Default)]
pub struct Store {
    notifications: Vec<Notification>,
    observers: Vec<(ObserverId, Observer)>,
    next_observer: u64,
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("notifications", &self.notifications)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record and returns its id.
    pub fn add(&mut self, notification: Notification) -> NotificationId {
        let id = notification.id();
        self.notifications.push(notification);
        self.notify_observers();
        id
    }

    /// Removes the record with the given id.
    ///
    /// Removing an id that is not present is a no-op. Returns `true` if a
    /// record was removed.
    pub fn remove(&mut self, id: NotificationId) -> bool {
        let Some(pos) = self.notifications.iter().position(|n| n.id() == id) else {
            return false;
        };
        self.notifications.remove(pos);
        self.notify_observers();
        true
    }

    /// Removes every record.
    pub fn remove_all(&mut self) {
        if self.notifications.is_empty() {
            return;
        }
        self.notifications.clear();
        self.notify_observers();
    }

    /// Returns the current records, oldest first.
    #[must_use]
    pub fn list(&self) -> &[Notification] {
        &self.notifications
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Registers a read-only observer of the list.
    ///
    /// The observer is called after each change with the full current list.
    pub fn subscribe(&mut self, observer: impl FnMut(&[Notification]) + 'static) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Removes an observer. Returns `true` if it was registered.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() < before
    }

    fn notify_observers(&mut self) {
        let notifications = &self.notifications;
        for (_, observer) in &mut self.observers {
            observer(notifications);
        }
    }
}
