// SPDX-License-Identifier: MPL-2.0
//! Toast notifications for search failures, input mistakes and startup
//! warnings.
//!
//! ```ignore
//! let mut manager = Manager::new();
//! manager.push(Notification::search_failed(&error), Instant::now());
//! let layer = notifications::overlay(&manager, &i18n).map(Message::Notification);
//! ```

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity, Source};
pub use toast::{message_text, overlay};
