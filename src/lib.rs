// SPDX-License-Identifier: MPL-2.0
//! `valentine_portal` is a PIN-gated, six-page Valentine portal built with the
//! Iced GUI framework.
//!
//! Behind the gate the visitor moves through a home note, a photo wall, a
//! timeline, open-when letters, a love quiz and a final question that issues
//! a certificate. Content comes from JSON files and a folder of photos.

pub mod app;
pub mod content;
pub mod directory_scanner;
pub mod error;
pub mod gallery;
pub mod media;
pub mod portal;
pub mod ui;
