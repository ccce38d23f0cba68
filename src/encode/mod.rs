//! Sprite encoding.
//!
//! Images are fed to an [`Encoder`] one at a time, in file name order. The
//! encoder grows the shared palette, converts every pixel to a token and
//! tracks sprite dimensions. [`Encoder::finish`] checks the accumulated
//! result and hands it over for emission.

mod source;
mod token;

pub use source::PixelSource;
pub use token::{index_for_token, token_for_index, MAX_COLOURS, TRANSPARENT_TOKEN};

use crate::error::{OdycError, Result};
use crate::types::{sprite_name, Colour, Palette, Sprite};
use crate::validation::{DimensionTracker, Diagnostics};

/// Accumulates palette and sprites across a run.
#[derive(Debug, Default)]
pub struct Encoder {
    palette: Palette,
    sprites: Vec<Sprite>,
    dimensions: DimensionTracker,
    images: usize,
}

/// The finished palette and sprites, ready to be emitted.
#[derive(Debug, Clone)]
pub struct Encoded {
    /// Palette in index order.
    pub palette: Palette,
    /// Sprites in the order their files were processed.
    pub sprites: Vec<Sprite>,
    /// Declared cell width (largest image width).
    pub cell_width: u32,
    /// Declared cell height (largest image height).
    pub cell_height: u32,
}

impl Encoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode one image and add it as a sprite.
    ///
    /// `file_name` is the image's file name; the sprite is named after it
    /// without the `.png` suffix. Returns any dimension warnings raised by
    /// this image. Fails when the image pushes the palette past
    /// [`MAX_COLOURS`].
    pub fn add_image(&mut self, file_name: &str, image: &impl PixelSource) -> Result<Diagnostics> {
        let (width, height) = (image.width(), image.height());
        let warnings = self.dimensions.observe(width, height);

        let mut rows = Vec::with_capacity(height as usize);
        for y in 0..height {
            let mut row = String::with_capacity(width as usize);
            for x in 0..width {
                row.push(self.encode_pixel(file_name, image.sample(x, y))?);
            }
            rows.push(row);
        }

        self.images += 1;
        let name = sprite_name(file_name);
        let sprite = Sprite::new(name, rows);
        match self.sprites.iter_mut().find(|s| s.name == name) {
            Some(existing) => *existing = sprite,
            None => self.sprites.push(sprite),
        }

        Ok(warnings)
    }

    fn encode_pixel(&mut self, file_name: &str, sample: [u16; 4]) -> Result<char> {
        let colour = Colour::from_rgba16(sample);
        if colour.is_transparent() {
            return Ok(TRANSPARENT_TOKEN);
        }

        let index = self.palette.index_of(colour, file_name);
        token_for_index(index).ok_or_else(|| OdycError::CapacityExceeded {
            file: file_name.to_string(),
            colours: index + 1,
            max: MAX_COLOURS,
        })
    }

    /// Finish the run.
    ///
    /// Fails when no colours or no sprites were collected, since there would
    /// be nothing useful to emit.
    pub fn finish(self) -> Result<Encoded> {
        if self.palette.is_empty() {
            return Err(OdycError::NoColours {
                images: self.images,
            });
        }
        if self.sprites.is_empty() {
            return Err(OdycError::NoSprites);
        }

        Ok(Encoded {
            cell_width: self.dimensions.max_width(),
            cell_height: self.dimensions.max_height(),
            palette: self.palette,
            sprites: self.sprites,
        })
    }
}
