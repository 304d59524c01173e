// SPDX-License-Identifier: MPL-2.0
//! Directory scanner for the photo wall.
//!
//! Lists the image files directly inside a directory (no recursion), sorted
//! by file name. A missing or unreadable directory is an empty wall.

use crate::error::Result;
use crate::media;
use std::path::{Path, PathBuf};

/// Returns every recognized image file in `directory`, sorted by file name.
///
/// Never fails: a directory that does not exist or cannot be read yields an
/// empty list.
pub fn list_images(directory: &Path) -> Vec<PathBuf> {
    if !directory.is_dir() {
        tracing::debug!(dir = %directory.display(), "photo directory absent");
        return Vec::new();
    }

    match scan_images(directory) {
        Ok(images) => images,
        Err(err) => {
            tracing::warn!(dir = %directory.display(), error = %err, "photo directory unreadable");
            Vec::new()
        }
    }
}

fn scan_images(directory: &Path) -> Result<Vec<PathBuf>> {
    let mut images = Vec::new();

    for entry in std::fs::read_dir(directory)? {
        let path = entry?.path();
        if path.is_file() && media::is_supported_image(&path) {
            images.push(path);
        }
    }

    sort_by_file_name(&mut images);
    Ok(images)
}

fn sort_by_file_name(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
}
