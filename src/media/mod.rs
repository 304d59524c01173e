// SPDX-License-Identifier: MPL-2.0
//! Photo handling for the photo wall.
//!
//! Recognizes image files by extension and decodes them into handles the
//! gallery can display.

pub mod image;

use std::path::Path;

pub use image::{load_photo, Photo};

/// Supported media extensions
pub mod extensions {
    /// Image file extensions shown on the photo wall (compared lowercase).
    pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
}

/// Returns true if the file name ends in one of the recognized image
/// extensions, ignoring case. Dotfiles such as `.JPG` count too.
pub fn is_supported_image<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .file_name()
        .and_then(|s| s.to_str())
        .map(str::to_lowercase)
        .is_some_and(|name| {
            extensions::IMAGE_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{ext}")))
        })
}
