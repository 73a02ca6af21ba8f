// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record along with the `Severity`
//! and `Position` enumerations and the optional `Action` descriptor.

use crate::domain::toast::ToastDuration;
use crate::error::InvalidArgument;
use crate::ui::design_tokens::palette;
use iced::{alignment, Color};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::Instant;

/// Unique, opaque identifier for a notification.
///
/// Ids combine a per-process salt with a monotonically increasing counter,
/// so two ids minted in the same session never collide and ids from
/// different sessions are very unlikely to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId {
    salt: u32,
    seq: u64,
}

impl NotificationId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self {
            salt: session_salt(),
            seq: COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}-{:x}", self.salt, self.seq)
    }
}

fn session_salt() -> u32 {
    use std::collections::hash_map::RandomState;
    use std::hash::BuildHasher;

    static SALT: OnceLock<u32> = OnceLock::new();
    *SALT.get_or_init(|| {
        // RandomState is seeded from the OS; truncation keeps the id short.
        (RandomState::new().hash_one(std::process::id()) & u64::from(u32::MAX)) as u32
    })
}

/// Severity level determines the accent color and glyph of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    /// All severities, in the order the demo presents them.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown at the start of the toast.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Warning => "⚠",
            Severity::Info => "ℹ",
        }
    }

    /// Returns the kebab-case name used in config files and on the CLI.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the i18n key for the severity's display name.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Severity::Success => "severity-success",
            Severity::Error => "severity-error",
            Severity::Warning => "severity-warning",
            Severity::Info => "severity-info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = InvalidArgument;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Severity::ALL
            .into_iter()
            .find(|severity| severity.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidArgument::Severity(raw.to_string()))
    }
}

/// Screen anchor a toast is grouped under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    BottomCenter,
    #[default]
    BottomRight,
}

impl Position {
    /// The six position buckets, in display order.
    pub const ALL: [Position; 6] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Index of this position in [`Position::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Position::TopLeft => 0,
            Position::TopCenter => 1,
            Position::TopRight => 2,
            Position::BottomLeft => 3,
            Position::BottomCenter => 4,
            Position::BottomRight => 5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Position::TopLeft => "top-left",
            Position::TopCenter => "top-center",
            Position::TopRight => "top-right",
            Position::BottomLeft => "bottom-left",
            Position::BottomCenter => "bottom-center",
            Position::BottomRight => "bottom-right",
        }
    }

    /// Returns the i18n key for the position's display name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Position::TopLeft => "position-top-left",
            Position::TopCenter => "position-top-center",
            Position::TopRight => "position-top-right",
            Position::BottomLeft => "position-bottom-left",
            Position::BottomCenter => "position-bottom-center",
            Position::BottomRight => "position-bottom-right",
        }
    }

    #[must_use]
    pub fn horizontal(self) -> alignment::Horizontal {
        match self {
            Position::TopLeft | Position::BottomLeft => alignment::Horizontal::Left,
            Position::TopCenter | Position::BottomCenter => alignment::Horizontal::Center,
            Position::TopRight | Position::BottomRight => alignment::Horizontal::Right,
        }
    }

    #[must_use]
    pub fn vertical(self) -> alignment::Vertical {
        match self {
            Position::TopLeft | Position::TopCenter | Position::TopRight => {
                alignment::Vertical::Top
            }
            Position::BottomLeft | Position::BottomCenter | Position::BottomRight => {
                alignment::Vertical::Bottom
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = InvalidArgument;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim();
        Position::ALL
            .into_iter()
            .find(|position| position.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| InvalidArgument::Position(raw.to_string()))
    }
}

/// Clickable affordance rendered inside a toast.
///
/// The callback runs in the UI update loop when the button is pressed,
/// never from inside the store.
#[derive(Clone)]
pub struct Action {
    label: String,
    on_trigger: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    pub fn new(label: impl Into<String>, on_trigger: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            on_trigger: Arc::new(on_trigger),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Invokes the callback.
    pub fn trigger(&self) {
        (self.on_trigger)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// A notification to be displayed to the user.
///
/// Records are immutable and not `Clone`: every record comes out of
/// [`Notification::new`] with a fresh id, so a store never holds two
/// records sharing one.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    message: String,
    title: Option<String>,
    severity: Severity,
    duration: ToastDuration,
    position: Position,
    created_at: Instant,
    action: Option<Action>,
}

impl Notification {
    /// Creates a new record stamped with the current time.
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        duration: ToastDuration,
        position: Position,
    ) -> Self {
        Self::created_at(message, severity, duration, position, Instant::now())
    }

    /// Creates a new record with an explicit creation instant.
    pub fn created_at(
        message: impl Into<String>,
        severity: Severity,
        duration: ToastDuration,
        position: Position,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            message: message.into(),
            title: None,
            severity,
            duration,
            position,
            created_at,
            action: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn duration(&self) -> ToastDuration {
        self.duration
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn created_at_instant(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }

    /// Returns when the notification removes itself, or `None` if it is
    /// persistent.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        if self.duration.is_persistent() {
            None
        } else {
            Some(self.created_at + self.duration.as_duration())
        }
    }

    /// Returns the share of the display time still left at `now`, in `[0, 1]`.
    ///
    /// Derived from elapsed time rather than counted ticks, so a delayed
    /// redraw never makes the countdown lag behind the removal timer.
    /// Returns `None` for persistent notifications.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        if self.duration.is_persistent() {
            return None;
        }
        let total = self.duration.as_duration().as_secs_f32();
        let elapsed = now.saturating_duration_since(self.created_at).as_secs_f32();
        Some((1.0 - elapsed / total).clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::time::Duration;

    fn info(message: &str, millis: u64) -> Notification {
        Notification::new(
            message,
            Severity::Info,
            ToastDuration::from_millis(millis),
            Position::default(),
        )
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = info("test", 1000);
        let n2 = info("test", 1000);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn notification_id_display_is_opaque_token() {
        let id = info("test", 1000).id();
        let token = id.to_string();
        assert!(token.contains('-'));
        assert_eq!(token.split('-').next().map(str::len), Some(8));
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn severity_defaults_to_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn severity_parses_case_insensitively() {
        assert_eq!("Success".parse::<Severity>(), Ok(Severity::Success));
        assert_eq!(" warning ".parse::<Severity>(), Ok(Severity::Warning));
    }

    #[test]
    fn unknown_severity_is_invalid_argument() {
        assert_eq!(
            "fatal".parse::<Severity>(),
            Err(InvalidArgument::Severity("fatal".to_string()))
        );
    }

    #[test]
    fn position_defaults_to_bottom_right() {
        assert_eq!(Position::default(), Position::BottomRight);
    }

    #[test]
    fn position_index_matches_all_order() {
        for (index, position) in Position::ALL.into_iter().enumerate() {
            assert_eq!(position.index(), index);
        }
    }

    #[test]
    fn position_parses_kebab_case() {
        assert_eq!("top-center".parse::<Position>(), Ok(Position::TopCenter));
        assert_eq!(
            "middle".parse::<Position>(),
            Err(InvalidArgument::Position("middle".to_string()))
        );
    }

    #[test]
    fn position_alignment_matches_anchor() {
        assert_eq!(
            Position::TopCenter.horizontal(),
            alignment::Horizontal::Center
        );
        assert_eq!(Position::TopCenter.vertical(), alignment::Vertical::Top);
        assert_eq!(
            Position::BottomLeft.horizontal(),
            alignment::Horizontal::Left
        );
        assert_eq!(Position::BottomLeft.vertical(), alignment::Vertical::Bottom);
    }

    #[test]
    fn persistent_notification_never_expires() {
        let notification = info("sticky", 0);
        assert!(notification.expires_at().is_none());
        assert!(notification
            .remaining_fraction(Instant::now() + Duration::from_secs(3600))
            .is_none());
    }

    #[test]
    fn remaining_fraction_is_derived_from_elapsed_time() {
        let start = Instant::now();
        let notification = Notification::created_at(
            "countdown",
            Severity::Info,
            ToastDuration::from_millis(1000),
            Position::TopLeft,
            start,
        );

        assert_eq!(notification.remaining_fraction(start), Some(1.0));
        let half = notification
            .remaining_fraction(start + Duration::from_millis(500))
            .unwrap();
        assert!((half - 0.5).abs() < 1e-3);
        assert_eq!(
            notification.remaining_fraction(start + Duration::from_secs(5)),
            Some(0.0)
        );
    }

    #[test]
    fn expires_at_adds_duration_to_creation() {
        let start = Instant::now();
        let notification = Notification::created_at(
            "timed",
            Severity::Success,
            ToastDuration::from_millis(3000),
            Position::TopRight,
            start,
        );
        assert_eq!(
            notification.expires_at(),
            Some(start + Duration::from_millis(3000))
        );
    }

    #[test]
    fn builder_sets_title_and_action() {
        let notification = info("body", 1000)
            .with_title("Heads up")
            .with_action(Action::new("Undo", || {}));

        assert_eq!(notification.title(), Some("Heads up"));
        assert_eq!(notification.action().map(Action::label), Some("Undo"));
    }

    #[test]
    fn action_trigger_invokes_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let action = Action::new("Retry", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        action.trigger();
        action.trigger();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn action_debug_omits_callback() {
        let action = Action::new("Open", || {});
        assert!(format!("{action:?}").contains("Open"));
    }
}
