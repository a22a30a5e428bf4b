// SPDX-License-Identifier: MPL-2.0
//! Time-based subscriptions for the application.
//!
//! The modal viewer owns its keyboard subscription; see
//! [`crate::ui::modal::ModalViewer::subscription`].

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Interval between ticks; fast enough for a smooth spinner.
const TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Creates a periodic tick subscription for the loading spinner and
/// notification auto-dismiss. Idle otherwise.
pub fn create_tick_subscription(is_loading: bool, has_notifications: bool) -> Subscription<Message> {
    if is_tick_needed(is_loading, has_notifications) {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

fn is_tick_needed(is_loading: bool, has_notifications: bool) -> bool {
    is_loading || has_notifications
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_when_something_animates_or_expires() {
        assert!(!is_tick_needed(false, false));
        assert!(is_tick_needed(true, false));
        assert!(is_tick_needed(false, true));
    }
}
