// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification component for the Iced GUI framework.
//!
//! Toasts are short, positionable messages that dismiss themselves after a
//! configurable duration. The crate ships the notification store and its
//! timers, the toast widget, and a small demo application showing them off
//! with Fluent localization and persisted preferences.
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, ToastRequest, Position};
//!
//! let mut toasts = Manager::new();
//! toasts.success(ToastRequest::new("Saved").position(Position::TopRight));
//! ```

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
