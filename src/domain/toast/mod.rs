// SPDX-License-Identifier: MPL-2.0
//! Toast domain types.
//!
//! This module contains toast-related value objects that are independent
//! of any presentation framework.

pub mod newtypes;

// Re-export commonly used types
pub use newtypes::{duration_bounds, ToastDuration};
