// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across pages.
//!
//! - [`card`] - titled cards, the hero banner and page headings
//! - [`notice`] - tinted banners for placeholders and feedback

pub mod card;
pub mod notice;

pub use card::{card, heading, hero, text_card};
pub use notice::{notice, Tone};
