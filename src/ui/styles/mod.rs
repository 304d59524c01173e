// SPDX-License-Identifier: MPL-2.0
//! Shared styles for the portal widgets.

pub mod button;
pub mod container;
