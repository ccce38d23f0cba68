//! Core domain types for odyc.
//!
//! - `Colour` - normalized RGBA colour values
//! - `Palette` - insertion-ordered colour table with usage statistics
//! - `Sprite` - a named grid of palette tokens

mod colour;
mod palette;
mod sprite;

pub use colour::Colour;
pub use palette::{Palette, PaletteEntry};
pub use sprite::{sprite_name, Sprite};
