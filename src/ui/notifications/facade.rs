// SPDX-License-Identifier: MPL-2.0
//! Convenience entry points for raising notifications.
//!
//! A [`ToastRequest`] describes what to show; anything left unset falls back
//! to the manager's [`Defaults`](super::manager::Defaults). The shorthand
//! methods bind the severity:
//!
//! ```ignore
//! let id = manager.success("Image saved");
//! manager.error(ToastRequest::new("Upload failed").title("Network").duration(ToastDuration::PERSISTENT));
//! ```
//!
//! Typed arguments cannot be out of range. Text coming from users or the
//! command line goes through [`ToastRequest::parse`], which rejects unknown
//! severities, unknown positions and negative durations with
//! [`Error::InvalidArgument`](crate::error::Error::InvalidArgument).

use super::manager::Manager;
use super::notification::{Action, Notification, NotificationId, Position, Severity};
use crate::domain::toast::ToastDuration;
use crate::error::Result;

/// Description of a notification to raise.
#[derive(Debug, Clone, Default)]
pub struct ToastRequest {
    message: String,
    title: Option<String>,
    severity: Severity,
    duration: Option<ToastDuration>,
    position: Option<Position>,
    action: Option<Action>,
}

impl ToastRequest {
    /// Creates an info request with default duration and position.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Builds a request from loosely typed inputs.
    ///
    /// # Errors
    ///
    /// Fails with `InvalidArgument` when `severity` or `position` is not a
    /// known name or when `duration_ms` is negative.
    pub fn parse(
        message: impl Into<String>,
        severity: &str,
        duration_ms: i64,
        position: &str,
    ) -> Result<Self> {
        Ok(Self::new(message)
            .severity(severity.parse()?)
            .duration(ToastDuration::from_millis_signed(duration_ms)?)
            .position(position.parse()?))
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: ToastDuration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }
}

impl From<&str> for ToastRequest {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

impl From<String> for ToastRequest {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl Manager {
    /// Raises a notification and returns its id.
    pub fn notify(&mut self, request: impl Into<ToastRequest>) -> NotificationId {
        let request = request.into();
        let defaults = self.defaults();

        let mut notification = Notification::new(
            request.message,
            request.severity,
            request.duration.unwrap_or(defaults.duration),
            request.position.unwrap_or(defaults.position),
        );
        if let Some(title) = request.title {
            notification = notification.with_title(title);
        }
        if let Some(action) = request.action {
            notification = notification.with_action(action);
        }

        self.add(notification)
    }

    /// Raises a success notification.
    pub fn success(&mut self, request: impl Into<ToastRequest>) -> NotificationId {
        self.notify(request.into().severity(Severity::Success))
    }

    /// Raises an error notification.
    pub fn error(&mut self, request: impl Into<ToastRequest>) -> NotificationId {
        self.notify(request.into().severity(Severity::Error))
    }

    /// Raises a warning notification.
    pub fn warning(&mut self, request: impl Into<ToastRequest>) -> NotificationId {
        self.notify(request.into().severity(Severity::Warning))
    }

    /// Raises an info notification.
    pub fn info(&mut self, request: impl Into<ToastRequest>) -> NotificationId {
        self.notify(request.into().severity(Severity::Info))
    }
}
