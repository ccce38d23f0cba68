//! Sprite dimension tracking.
//!
//! Sprites are expected to share one cell size. The tracker keeps the largest
//! width and height seen so far and warns once per dimension when an image
//! grows past an already established maximum.

use super::warning::{Diagnostic, Diagnostics};

pub const WIDTH_MISMATCH: &str = "odyc::dimensions::width";
pub const HEIGHT_MISMATCH: &str = "odyc::dimensions::height";

/// Running maximum of image dimensions.
#[derive(Debug, Clone, Default)]
pub struct DimensionTracker {
    max_width: u32,
    max_height: u32,
    warned_width: bool,
    warned_height: bool,
}

impl DimensionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one image's size.
    ///
    /// Returns the warnings this observation triggered; each dimension warns
    /// at most once per tracker.
    pub fn observe(&mut self, width: u32, height: u32) -> Diagnostics {
        let mut result = Diagnostics::new();

        if width > self.max_width {
            if self.max_width != 0 && !self.warned_width {
                result.push(
                    Diagnostic::warning(
                        WIDTH_MISMATCH,
                        "Images have different widths, which usually indicates a sprite sheet problem",
                    )
                    .with_help(format!(
                        "Found a {}px wide image after {}px wide ones",
                        width, self.max_width
                    )),
                );
                self.warned_width = true;
            }
            self.max_width = width;
        }

        if height > self.max_height {
            if self.max_height != 0 && !self.warned_height {
                result.push(
                    Diagnostic::warning(
                        HEIGHT_MISMATCH,
                        "Images have different heights, which usually indicates a sprite sheet problem",
                    )
                    .with_help(format!(
                        "Found a {}px tall image after {}px tall ones",
                        height, self.max_height
                    )),
                );
                self.warned_height = true;
            }
            self.max_height = height;
        }

        result
    }

    /// Largest width seen.
    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    /// Largest height seen.
    pub fn max_height(&self) -> u32 {
        self.max_height
    }
}
