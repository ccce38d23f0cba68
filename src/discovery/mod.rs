//! Asset discovery and loading for odyc projects.
//!
//! Finds the sprite PNGs in an assets directory, opens and decodes them, and
//! reads the optional `odyc.yaml` manifest.

mod loader;
mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use loader::{decode_image, open_image, Image16};
pub use manifest::Manifest;
pub use scanner::{is_png, scan_assets, ScanResult};

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "odyc.yaml";

/// Find and load a manifest.
///
/// An explicit path must exist. Without one, `odyc.yaml` in the current
/// directory is used when present, and an empty manifest otherwise.
pub fn find_manifest(explicit: Option<&Path>) -> Result<Manifest> {
    if let Some(path) = explicit {
        return Manifest::load(path);
    }

    let default_path = PathBuf::from(MANIFEST_FILENAME);
    if default_path.is_file() {
        Manifest::load(&default_path)
    } else {
        Ok(Manifest::default())
    }
}
