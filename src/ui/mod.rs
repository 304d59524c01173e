// SPDX-License-Identifier: MPL-2.0
//! User interface: the PIN gate, the navigation bar, the six pages and the
//! shared look they are drawn with.

pub mod celebration;
pub mod components;
pub mod design_tokens;
pub mod gate;
pub mod navbar;
pub mod pages;
pub mod styles;
pub mod theming;
