// SPDX-License-Identifier: MPL-2.0
//! Toast newtypes.
//!
//! This module provides type-safe wrappers for toast values,
//! ensuring they are always valid once constructed.

use crate::error::InvalidArgument;
use std::time::Duration;

// =============================================================================
// Duration Bounds
// =============================================================================

/// Auto-dismiss duration constants (in milliseconds).
pub mod duration_bounds {
    /// Default auto-dismiss duration.
    pub const DEFAULT_MILLIS: u64 = 5_000;
    /// Duration meaning "never auto-dismiss".
    pub const PERSISTENT_MILLIS: u64 = 0;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// How long a toast stays on screen before it removes itself.
///
/// A zero duration means the toast is persistent and only leaves through
/// a manual dismissal or a bulk clear. Negative values cannot be
/// represented; loosely typed inputs go through [`ToastDuration::from_millis_signed`]
/// or [`ToastDuration::parse_millis`], which reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastDuration(Duration);

impl ToastDuration {
    /// A duration that never auto-dismisses.
    pub const PERSISTENT: Self = Self(Duration::ZERO);

    /// Creates a duration from an unsigned millisecond count.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Creates a duration from a signed millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::NegativeDuration`] when `millis < 0`.
    pub fn from_millis_signed(millis: i64) -> Result<Self, InvalidArgument> {
        u64::try_from(millis)
            .map(Self::from_millis)
            .map_err(|_| InvalidArgument::NegativeDuration(millis))
    }

    /// Parses a millisecond count typed by a user.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::Duration`] for non-numeric text and
    /// [`InvalidArgument::NegativeDuration`] for negative numbers.
    pub fn parse_millis(raw: &str) -> Result<Self, InvalidArgument> {
        let millis: i64 = raw
            .trim()
            .parse()
            .map_err(|_| InvalidArgument::Duration(raw.to_string()))?;
        Self::from_millis_signed(millis)
    }

    /// Returns the wrapped duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }

    /// Returns the duration in whole milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        u64::try_from(self.0.as_millis()).unwrap_or(u64::MAX)
    }

    /// Returns whether this toast stays until dismissed manually.
    #[must_use]
    pub fn is_persistent(self) -> bool {
        self.0.is_zero()
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self::from_millis(duration_bounds::DEFAULT_MILLIS)
    }
}

impl From<Duration> for ToastDuration {
    fn from(duration: Duration) -> Self {
        Self(duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_five_seconds() {
        assert_eq!(
            ToastDuration::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn zero_is_persistent() {
        assert!(ToastDuration::PERSISTENT.is_persistent());
        assert!(ToastDuration::from_millis(0).is_persistent());
        assert!(!ToastDuration::from_millis(1).is_persistent());
    }

    #[test]
    fn negative_millis_are_rejected() {
        assert_eq!(
            ToastDuration::from_millis_signed(-1),
            Err(InvalidArgument::NegativeDuration(-1))
        );
    }

    #[test]
    fn signed_millis_accepts_zero_and_positive() {
        assert_eq!(
            ToastDuration::from_millis_signed(0),
            Ok(ToastDuration::PERSISTENT)
        );
        assert_eq!(
            ToastDuration::from_millis_signed(3000).map(ToastDuration::as_millis),
            Ok(3000)
        );
    }

    #[test]
    fn parse_millis_trims_whitespace() {
        assert_eq!(
            ToastDuration::parse_millis(" 250 ").map(ToastDuration::as_millis),
            Ok(250)
        );
    }

    #[test]
    fn parse_millis_rejects_text() {
        assert_eq!(
            ToastDuration::parse_millis("soon"),
            Err(InvalidArgument::Duration("soon".to_string()))
        );
    }

    #[test]
    fn parse_millis_rejects_negative() {
        assert_eq!(
            ToastDuration::parse_millis("-300"),
            Err(InvalidArgument::NegativeDuration(-300))
        );
    }
}
