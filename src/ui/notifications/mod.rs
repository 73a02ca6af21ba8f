// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! Notifications are transient, positionable messages raised by the
//! application and removed either when their duration elapses or when the
//! user dismisses them.
//!
//! # Components
//!
//! - [`notification`] - The immutable `Notification` record and its enums
//! - [`store`] - `Store`, the ordered collection of active records
//! - [`facade`] - `ToastRequest` and the `notify`/`success`/... entry points
//! - [`lifecycle`] - Expiration timers and countdown cadence
//! - [`toast`] - Position grouping, exit transitions and the toast widget
//! - [`manager`] - `Manager`, the Iced component tying it all together
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, NotificationMessage, ToastRequest};
//!
//! let mut manager = Manager::new();
//! let id = manager.success("Image saved");
//!
//! // In update: manager.update(message)
//! // In subscription: manager.subscription().map(Message::Notification)
//! // In view: stack![content, manager.view(&i18n).map(Message::Notification)]
//! ```

pub mod facade;
pub mod lifecycle;
pub mod manager;
pub mod notification;
pub mod store;
pub mod toast;

pub use facade::ToastRequest;
pub use manager::{Defaults, Manager, Message as NotificationMessage};
pub use notification::{Action, Notification, NotificationId, Position, Severity};
pub use store::{ObserverId, Store};
pub use toast::{group_by_position, PositionBuckets, Toast};
