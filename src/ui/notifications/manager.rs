// SPDX-License-Identifier: MPL-2.0
//! Toast queue.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; the rest wait in arrival
//! order. A toast's lifetime starts when it becomes visible, not when it is
//! pushed, so queued toasts are never dropped unseen.

use super::notification::{Notification, NotificationId, Source};
use std::collections::VecDeque;
use std::time::Instant;

pub const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Entry {
    id: NotificationId,
    notification: Notification,
    shown_at: Instant,
}

#[derive(Debug)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Entry>,
    queue: VecDeque<(NotificationId, Notification)>,
    next_id: u64,
    /// Latest time handed to [`push`](Self::push) or [`tick`](Self::tick).
    /// Toasts promoted by a dismissal count from here.
    clock: Instant,
}

impl Default for Manager {
    fn default() -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            next_id: 0,
            clock: Instant::now(),
        }
    }
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` as of `now`, or queues it when the screen is full.
    ///
    /// A toast identical to one already held is not stacked twice; a visible
    /// duplicate has its lifetime restarted instead.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        log_pushed(&notification);
        self.advance(now);

        if let Some(entry) = self
            .visible
            .iter_mut()
            .find(|entry| entry.notification == notification)
        {
            entry.shown_at = self.clock;
            return entry.id;
        }
        if let Some((id, _)) = self.queue.iter().find(|(_, queued)| *queued == notification) {
            return *id;
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(Entry {
                id,
                notification,
                shown_at: self.clock,
            });
        } else {
            self.queue.push_back((id, notification));
        }
        id
    }

    /// Removes a toast wherever it is. Returns `false` for unknown ids.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|entry| entry.id == id) {
            self.visible.remove(pos);
            self.promote();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|(queued, _)| *queued == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Removes every toast raised by `source`.
    pub fn dismiss_source(&mut self, source: Source) {
        self.visible
            .retain(|entry| entry.notification.source() != source);
        self.queue
            .retain(|(_, notification)| notification.source() != source);
        self.promote();
    }

    /// Drops visible toasts whose lifetime has run out at `now`.
    pub fn tick(&mut self, now: Instant) {
        self.advance(now);
        let before = self.visible.len();
        self.visible.retain(|entry| !is_expired(entry, now));
        if self.visible.len() < before {
            self.promote();
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter().map(|entry| &entry.notification)
    }

    pub(super) fn visible_with_ids(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.visible
            .iter()
            .map(|entry| (entry.id, &entry.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn advance(&mut self, now: Instant) {
        self.clock = self.clock.max(now);
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            let Some((id, notification)) = self.queue.pop_front() else {
                break;
            };
            self.visible.push_back(Entry {
                id,
                notification,
                shown_at: self.clock,
            });
        }
    }
}

fn is_expired(entry: &Entry, now: Instant) -> bool {
    entry
        .notification
        .severity()
        .lifetime()
        .is_some_and(|lifetime| now.saturating_duration_since(entry.shown_at) >= lifetime)
}

fn log_pushed(notification: &Notification) {
    use super::notification::Severity;

    let key = notification.message_key();
    match notification.severity() {
        Severity::Error => tracing::error!(key, source = ?notification.source(), "error toast"),
        Severity::Warning => tracing::warn!(key, source = ?notification.source(), "warning toast"),
        Severity::Info => tracing::debug!(key, "info toast"),
    }
}
