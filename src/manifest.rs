//! The gallery manifest: one JSON entry per converted image.
//!
//! ```json
//! [
//!   {
//!     "src": "/memories/a.webp",
//!     "orientation": "landscape",
//!     "caption": "Simply us 💕",
//!     "date": "2024-2025",
//!     "is_hero": false
//!   }
//! ]
//! ```
//!
//! The manifest is derived state. Every run writes it from scratch; nothing is
//! read back or merged.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Extension of every converted image.
pub const OUTPUT_EXTENSION: &str = "webp";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Landscape,
    Portrait,
}

impl Orientation {
    /// Landscape only when strictly wider than tall; squares are portrait.
    pub fn from_dimensions(width: u32, height: u32) -> Self {
        if width > height {
            Self::Landscape
        } else {
            Self::Portrait
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landscape => "landscape",
            Self::Portrait => "portrait",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One converted image as the gallery site sees it. Field order is the
/// serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub src: String,
    pub orientation: Orientation,
    pub caption: String,
    pub date: String,
    pub is_hero: bool,
}

/// Replace the extension of `name` with [`OUTPUT_EXTENSION`].
///
/// Only the last extension goes: `trip.2024.jpg` → `trip.2024.webp`. Names
/// without an extension, including dotfiles, just gain one.
pub fn output_file_name(name: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| name.to_string());
    format!("{stem}.{OUTPUT_EXTENSION}")
}

/// Public URL of a converted file under `prefix`.
pub fn public_src(prefix: &str, file_name: &str) -> String {
    format!("{}/{}", prefix.trim_end_matches('/'), file_name)
}

/// Serialize `entries` as a pretty-printed JSON array, replacing `path`.
///
/// The parent directory is created if missing.
pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(entries)?;
    fs::write(path, json)
}
