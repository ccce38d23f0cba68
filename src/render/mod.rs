//! Rendering module for odyc.
//!
//! Turns encoded sprites into source text for the game engine.

mod js;

pub use js::{render_game_config, write_game_config, CONFIG_VARIABLE};
