// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::GalleryItem;
use crate::ui::gate;
use crate::ui::navbar;
use crate::ui::pages::{letters, quiz, valentine};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gate(gate::Message),
    Navbar(navbar::Message),
    Letters(letters::Message),
    Quiz(quiz::Message),
    Valentine(valentine::Message),
    /// Photos decoded in the background for the photo wall.
    GalleryLoaded(Vec<GalleryItem>),
    Tick(Instant), // Drives the balloon animation
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Directory holding `settings.toml` and `secrets.toml`.
    pub config_dir: Option<PathBuf>,
    /// Overrides `[content] data_dir`.
    pub data_dir: Option<PathBuf>,
    /// Overrides `[content] photos_dir`.
    pub photos_dir: Option<PathBuf>,
}
