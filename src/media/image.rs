// SPDX-License-Identifier: MPL-2.0
//! Photo decoding with EXIF orientation applied, so phone pictures show upright.

use crate::error::Result;
use iced::widget::image;
use image_rs::metadata::Orientation;
use image_rs::{DynamicImage, GenericImageView};
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// A decoded photo ready for display.
#[derive(Debug, Clone)]
pub struct Photo {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl Photo {
    /// Creates a new `Photo` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Decodes the photo at `path`, rotating or mirroring it per its EXIF
/// orientation tag. Files without EXIF data are used as stored.
pub fn load_photo<P: AsRef<Path>>(path: P) -> Result<Photo> {
    let bytes = fs::read(path.as_ref())?;
    let decoded = image_rs::load_from_memory(&bytes)?;
    let oriented = upright(decoded, read_orientation(&bytes));

    let (width, height) = oriented.dimensions();
    Ok(Photo::from_rgba(width, height, oriented.to_rgba8().into_vec()))
}

/// Reads the raw EXIF orientation tag from encoded image bytes.
fn read_orientation(bytes: &[u8]) -> Option<u32> {
    let mut cursor = Cursor::new(bytes);
    let exif = exif::Reader::new().read_from_container(&mut cursor).ok()?;
    exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
        .and_then(|field| field.value.get_uint(0))
}

/// Applies a raw EXIF orientation value. Missing or out-of-range values leave
/// the image as stored.
fn upright(mut img: DynamicImage, exif_orientation: Option<u32>) -> DynamicImage {
    if let Some(orientation) = exif_orientation
        .and_then(|value| u8::try_from(value).ok())
        .and_then(Orientation::from_exif)
    {
        img.apply_orientation(orientation);
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    /// 2x1 image: red on the left, blue on the right.
    fn two_pixel_image() -> DynamicImage {
        let mut img = RgbaImage::new(2, 1);
        img.put_pixel(0, 0, RED);
        img.put_pixel(1, 0, BLUE);
        DynamicImage::ImageRgba8(img)
    }

    #[test]
    fn orientation_one_is_identity() {
        let out = upright(two_pixel_image(), Some(1));
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(0, 0), RED);
    }

    #[test]
    fn orientation_two_mirrors() {
        let out = upright(two_pixel_image(), Some(2));
        assert_eq!(out.get_pixel(0, 0), BLUE);
        assert_eq!(out.get_pixel(1, 0), RED);
    }

    #[test]
    fn orientation_six_rotates_clockwise() {
        let out = upright(two_pixel_image(), Some(6));
        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0), RED);
        assert_eq!(out.get_pixel(0, 1), BLUE);
    }

    #[test]
    fn orientation_eight_rotates_counter_clockwise() {
        let out = upright(two_pixel_image(), Some(8));
        assert_eq!(out.dimensions(), (1, 2));
        assert_eq!(out.get_pixel(0, 0), BLUE);
        assert_eq!(out.get_pixel(0, 1), RED);
    }

    #[test]
    fn unknown_orientation_is_ignored() {
        let out = upright(two_pixel_image(), Some(42));
        assert_eq!(out.get_pixel(0, 0), RED);
    }

    #[test]
    fn missing_orientation_is_identity() {
        let out = upright(two_pixel_image(), None);
        assert_eq!(out.dimensions(), (2, 1));
        assert_eq!(out.get_pixel(1, 0), BLUE);
    }

    #[test]
    fn load_photo_decodes_png_without_exif() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("01.png");
        two_pixel_image().save(&path).expect("write png");

        let photo = load_photo(&path).expect("decode png");
        assert_eq!((photo.width, photo.height), (2, 1));
    }

    #[test]
    fn load_photo_rejects_garbage() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("broken.jpg");
        fs::write(&path, b"definitely not a jpeg").expect("write file");

        assert!(load_photo(&path).is_err());
    }
}
