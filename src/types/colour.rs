//! Colour type and normalization.

use std::fmt;

/// An RGBA colour value with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour, `#00000000`.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Normalize a straight-alpha 16-bit RGBA sample to 8 bits per channel.
    ///
    /// Colour channels are premultiplied by alpha (`c * a / 0xffff`), then
    /// every channel keeps its high byte. A sample whose alpha is 0 therefore
    /// always collapses to [`Colour::TRANSPARENT`], so invisible pixels never
    /// show up as distinct colours.
    pub const fn from_rgba16(sample: [u16; 4]) -> Self {
        let a = sample[3];
        Self::new(
            premultiply(sample[0], a),
            premultiply(sample[1], a),
            premultiply(sample[2], a),
            (a >> 8) as u8,
        )
    }

    /// Check if the colour is fully transparent.
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }
}

const fn premultiply(channel: u16, alpha: u16) -> u8 {
    ((channel as u32 * alpha as u32 / 0xffff) >> 8) as u8
}

impl fmt::Display for Colour {
    /// Always the 8-digit lowercase form, e.g. `#ff0000ff`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
