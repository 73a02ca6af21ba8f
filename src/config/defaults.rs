// SPDX-License-Identifier: MPL-2.0
//! Default values for toast settings.
//!
//! These constants back both the configuration defaults and the built-in
//! [`Defaults`](crate::ui::notifications::Defaults) of the notification
//! manager, so a missing `settings.toml` and an empty `[toasts]` section
//! behave the same.

use crate::domain::toast::duration_bounds;

/// How long a toast stays up when the request leaves the duration unset.
pub const DEFAULT_TOAST_DURATION_MS: u64 = duration_bounds::DEFAULT_MILLIS;

/// Length of the fade-out played after a dismissal.
pub const DEFAULT_EXIT_ANIMATION_MS: u64 = 300;

/// Longest accepted fade-out; larger configured values are capped.
pub const MAX_EXIT_ANIMATION_MS: u64 = 2000;

const _: () = {
    assert!(DEFAULT_EXIT_ANIMATION_MS <= MAX_EXIT_ANIMATION_MS);
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
};
