// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Translations use the Fluent localization system. `.ftl` files under
//! `assets/i18n/` are embedded into the binary.
//!
//! # Features
//!
//! - Locale detection from CLI, config, or system settings
//! - Runtime language switching
//! - Fallback to `en-US`, then to a visible `MISSING: key` marker

pub mod fluent;
