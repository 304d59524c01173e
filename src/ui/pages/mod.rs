// SPDX-License-Identifier: MPL-2.0
//! One module per portal page. Pages with interactions expose `Message`,
//! `update` and `view`; the rest only render.

pub mod home;
pub mod letters;
pub mod photos;
pub mod quiz;
pub mod timeline;
pub mod valentine;
