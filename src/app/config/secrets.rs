// SPDX-License-Identifier: MPL-2.0
//! Unlock PIN resolution.
//!
//! The PIN is looked up, in order, in the `VALENTINE_PORTAL_PIN` environment
//! variable, then in `secrets.toml` in the config directory, and finally falls
//! back to [`FALLBACK_PIN`] for local development.
//!
//! `secrets.toml` accepts either key spelling and either a string or a number:
//!
//! ```toml
//! PIN = 2808
//! ```

use super::defaults::FALLBACK_PIN;
use crate::app::paths;
use crate::error::Result;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the PIN.
pub const ENV_PIN: &str = "VALENTINE_PORTAL_PIN";

const SECRETS_FILE: &str = "secrets.toml";

/// The shared unlock PIN. Its `Debug` output never shows the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Pin(String);

impl Pin {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Compares a typed candidate against the PIN. Surrounding whitespace in
    /// the candidate is ignored; everything else must match exactly.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.trim() == self.0
    }
}

impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pin(***)")
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self::new(FALLBACK_PIN)
    }
}

/// Where the active PIN came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinSource {
    Environment,
    SecretsFile,
    Fallback,
}

#[derive(Debug, Deserialize)]
struct SecretsFile {
    #[serde(default, alias = "PIN")]
    pin: Option<PinValue>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PinValue {
    Text(String),
    Number(i64),
}

impl From<PinValue> for Pin {
    fn from(value: PinValue) -> Self {
        match value {
            PinValue::Text(text) => Pin::new(text),
            PinValue::Number(number) => Pin::new(number.to_string()),
        }
    }
}

/// Resolves the PIN using the process environment and the config directory.
pub fn resolve(config_dir: Option<PathBuf>) -> (Pin, PinSource) {
    let secrets_path = paths::get_app_config_dir_with_override(config_dir).map(|mut path| {
        path.push(SECRETS_FILE);
        path
    });
    resolve_from(std::env::var(ENV_PIN).ok(), secrets_path.as_deref())
}

/// Resolves the PIN from an explicit environment value and secrets file path.
pub fn resolve_from(env_value: Option<String>, secrets_path: Option<&Path>) -> (Pin, PinSource) {
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return (Pin::new(value), PinSource::Environment);
    }

    if let Some(path) = secrets_path.filter(|p| p.exists()) {
        match read_secrets_file(path) {
            Ok(Some(pin)) => return (pin, PinSource::SecretsFile),
            Ok(None) => {
                tracing::warn!(path = %path.display(), "secrets file has no PIN entry");
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "secrets file unreadable");
            }
        }
    }

    (Pin::default(), PinSource::Fallback)
}

fn read_secrets_file(path: &Path) -> Result<Option<Pin>> {
    let content = fs::read_to_string(path)?;
    let secrets: SecretsFile = toml::from_str(&content)?;
    Ok(secrets.pin.map(Pin::from))
}
