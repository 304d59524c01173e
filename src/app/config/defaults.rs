// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Content**: Where the JSON content and the photo wall live
//! - **Gallery**: How many photos the wall shows
//! - **Portal**: Names printed on the pages and the certificate
//! - **Secrets**: The unlock PIN fallback
//! - **Celebration**: Balloon overlay lifetime

// ==========================================================================
// Content Defaults
// ==========================================================================

/// Directory holding `timeline.json`, `letters.json` and `quiz.json`.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Directory scanned for the photo wall.
pub const DEFAULT_PHOTOS_DIR: &str = "assets/photos";

// ==========================================================================
// Gallery Defaults
// ==========================================================================

/// Number of photos shown on the wall.
pub const DEFAULT_MAX_PHOTOS: usize = 10;

/// Minimum photos on the wall.
pub const MIN_MAX_PHOTOS: usize = 1;

/// Maximum photos on the wall.
pub const MAX_MAX_PHOTOS: usize = 60;

/// Columns in the photo grid.
pub const GALLERY_COLUMNS: usize = 3;

// ==========================================================================
// Portal Defaults
// ==========================================================================

/// Who the portal is for.
pub const DEFAULT_RECIPIENT: &str = "Ren";

/// Who signs the certificate.
pub const DEFAULT_SENDER: &str = "Aanya";

// ==========================================================================
// Secrets Defaults
// ==========================================================================

/// PIN used when neither the environment nor `secrets.toml` provides one.
/// Local development only.
pub const FALLBACK_PIN: &str = "2808";

// ==========================================================================
// Celebration Defaults
// ==========================================================================

/// How long the balloon overlay stays on screen (milliseconds).
pub const CELEBRATION_DURATION_MS: u64 = 2500;

/// Tick interval driving the balloon animation (milliseconds).
pub const CELEBRATION_TICK_MS: u64 = 50;

const _: () = {
    assert!(MIN_MAX_PHOTOS <= DEFAULT_MAX_PHOTOS);
    assert!(DEFAULT_MAX_PHOTOS <= MAX_MAX_PHOTOS);
    assert!(GALLERY_COLUMNS > 0);
    assert!(CELEBRATION_TICK_MS < CELEBRATION_DURATION_MS);
};
