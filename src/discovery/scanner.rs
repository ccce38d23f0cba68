//! Assets directory scanner.
//!
//! Lists the direct children of the assets directory and sorts them into
//! PNG inputs, sub-directories and everything else. Entries come back in
//! lexicographic file name order, which fixes the order colours are first
//! seen in and therefore every palette index.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{OdycError, Result};

/// Result of scanning an assets directory.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// PNG files, sorted by file name.
    pub images: Vec<PathBuf>,
    /// Sub-directories, which are not descended into.
    pub directories: Vec<PathBuf>,
    /// Other files that were ignored.
    pub skipped: Vec<PathBuf>,
}

impl ScanResult {
    /// Create a new empty scan result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no PNG files were found.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Scan an assets directory for PNG files.
pub fn scan_assets(root: &Path) -> Result<ScanResult> {
    let mut result = ScanResult::new();

    if !root.is_dir() {
        return Err(OdycError::Io {
            path: root.to_path_buf(),
            message: "Assets directory does not exist".to_string(),
        });
    }

    for entry in WalkDir::new(root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(entry) => entry,
            // A broken entry is still listed by name; opening it fails later
            // and only that file is skipped.
            Err(e) if e.depth() > 0 => {
                if let Some(path) = e.path() {
                    classify_by_name(&mut result, path.to_path_buf());
                }
                continue;
            }
            Err(e) => {
                return Err(OdycError::Io {
                    path: root.to_path_buf(),
                    message: format!("Error reading assets directory: {}", e),
                })
            }
        };
        let path = entry.path().to_path_buf();

        if entry.file_type().is_dir() {
            result.directories.push(path);
        } else {
            classify_by_name(&mut result, path);
        }
    }

    Ok(result)
}

fn classify_by_name(result: &mut ScanResult, path: PathBuf) {
    if is_png(&path) {
        result.images.push(path);
    } else {
        result.skipped.push(path);
    }
}

/// Check for a `.png` file name suffix (case-sensitive).
pub fn is_png(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(".png"))
}
