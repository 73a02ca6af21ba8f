// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`notifications`] - Toast notification system
//! - [`demo`] - Form for raising toasts by hand
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod demo;
pub mod design_tokens;
pub mod notifications;
pub mod theming;
