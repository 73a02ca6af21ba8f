// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with no framework dependencies.
//!
//! This module contains pure domain types and their validation rules.
//! Nothing here depends on Iced so the types can be unit tested without
//! a renderer.
//!
//! # Modules
//!
//! - [`toast`]: Toast value objects ([`ToastDuration`](toast::ToastDuration))

pub mod toast;
