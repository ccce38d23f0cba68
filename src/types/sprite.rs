//! Encoded sprite type.

/// A sprite encoded as rows of palette tokens.
///
/// Each row holds one token per pixel column, so every row is as long as the
/// source image is wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    /// Sprite name (file name without its `.png` extension).
    pub name: String,
    /// Token rows, top to bottom.
    pub rows: Vec<String>,
}

impl Sprite {
    /// Create a sprite from its name and token rows.
    pub fn new(name: impl Into<String>, rows: Vec<String>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }

    /// Height in pixels.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

/// Derive a sprite name from a file name by stripping the `.png` suffix.
pub fn sprite_name(file_name: &str) -> &str {
    file_name.strip_suffix(".png").unwrap_or(file_name)
}
