//! odyc - Odyc.js sprite code generator
//!
//! A library for turning a directory of PNG sprites into a shared colour
//! palette and compact token grids, emitted as an Odyc.js game config.

pub mod cli;
pub mod discovery;
pub mod encode;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{decode_image, open_image, scan_assets, Image16, Manifest, ScanResult};
pub use encode::{index_for_token, token_for_index, Encoded, Encoder, PixelSource, MAX_COLOURS, TRANSPARENT_TOKEN};
pub use error::{OdycError, Result};
pub use render::{render_game_config, write_game_config};
pub use types::{Colour, Palette, PaletteEntry, Sprite};
pub use validation::{DimensionTracker, Diagnostic, Diagnostics};
