// SPDX-License-Identifier: MPL-2.0
//! Builds the photo wall from the photos directory.
//!
//! Every listed photo becomes a [`GalleryItem`]. Decoding failures do not
//! abort the wall: the item falls back to a handle on the raw file, which the
//! renderer loads on its own.

use crate::directory_scanner;
use crate::media::{self, Photo};
use iced::widget::image;
use std::path::{Path, PathBuf};

/// Captions shown under the first photos, in order. Later photos get a heart.
pub const CAPTIONS: &[&str] = &[
    "us >>>",
    "my favorite view",
    "cutest human",
    "pretty boy alert",
    "this one’s illegal",
    "we ate",
    "we smiled",
    "we slayed",
    "my heart",
    "forever vibe",
];

const FALLBACK_CAPTION: &str = "💗";

/// One tile on the photo wall.
#[derive(Debug, Clone)]
pub enum GalleryItem {
    /// Decoded and upright.
    Decoded { photo: Photo, caption: String },
    /// Could not be decoded here; shown straight from the file, uncaptioned.
    Fallback { path: PathBuf },
}

impl GalleryItem {
    /// Image handle to render for this tile.
    #[must_use]
    pub fn handle(&self) -> image::Handle {
        match self {
            GalleryItem::Decoded { photo, .. } => photo.handle.clone(),
            GalleryItem::Fallback { path } => image::Handle::from_path(path),
        }
    }

    #[must_use]
    pub fn caption(&self) -> Option<&str> {
        match self {
            GalleryItem::Decoded { caption, .. } => Some(caption),
            GalleryItem::Fallback { .. } => None,
        }
    }
}

/// Caption for the photo at `index` on the wall.
#[must_use]
pub fn caption_for(index: usize) -> &'static str {
    CAPTIONS.get(index).copied().unwrap_or(FALLBACK_CAPTION)
}

/// Lists and decodes up to `max_photos` photos from `directory`.
pub fn load_gallery(directory: &Path, max_photos: usize) -> Vec<GalleryItem> {
    directory_scanner::list_images(directory)
        .into_iter()
        .take(max_photos)
        .enumerate()
        .map(|(index, path)| match media::load_photo(&path) {
            Ok(photo) => GalleryItem::Decoded {
                photo,
                caption: caption_for(index).to_string(),
            },
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "photo shown undecoded");
                GalleryItem::Fallback { path }
            }
        })
        .collect()
}
