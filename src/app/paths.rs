// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for the portal's directories.
//!
//! # Path Resolution Order
//!
//! The config directory (holding `settings.toml` and `secrets.toml`) is
//! resolved in the following priority order:
//! 1. **Explicit override** - the `--config-dir` CLI flag, or a test directory
//! 2. **Environment variable** (`VALENTINE_PORTAL_CONFIG_DIR`)
//! 3. **Platform default** - via `dirs` crate
//!
//! Content and photo directories are plain relative paths by default
//! (`data/` and `assets/photos/`), resolved against the working directory.

use std::path::PathBuf;

/// Application name used for directory naming.
const APP_NAME: &str = "ValentinePortal";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "VALENTINE_PORTAL_CONFIG_DIR";

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/ValentinePortal/`
/// - macOS: `~/Library/Application Support/ValentinePortal/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ValentinePortal\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// The override wins over the environment variable, which wins over the
/// platform default.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
