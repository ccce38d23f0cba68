//! Odyc.js game config output.
//!
//! Serializes an [`Encoded`] palette and sprite set into a `gameConfig`
//! JavaScript object. Colours are written in index order, sprites in the
//! order they were encoded.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::encode::Encoded;
use crate::error::{OdycError, Result};

/// Name of the emitted JavaScript variable.
pub const CONFIG_VARIABLE: &str = "gameConfig";

/// Render the game config source text.
///
/// Indentation uses tabs. Sprite rows sit inside template literals so the
/// grid stays readable in the generated file. There is no trailing newline.
pub fn render_game_config(encoded: &Encoded) -> String {
    let mut out = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(out, "var {} = {{", CONFIG_VARIABLE);
    let _ = writeln!(out, "\tcellWidth: {},", encoded.cell_width);
    let _ = writeln!(out, "\tcellHeight: {},", encoded.cell_height);

    out.push_str("\tcolors: [\n");
    for entry in encoded.palette.iter() {
        let _ = writeln!(out, "\t\t\"{}\",", entry.colour);
    }
    out.push_str("\t],\n");

    out.push_str("\tsprites: {\n");
    for sprite in &encoded.sprites {
        let _ = writeln!(out, "\t\t\"{}\": `", sprite.name);
        for row in &sprite.rows {
            let _ = writeln!(out, "\t\t\t{}", row);
        }
        out.push_str("\t\t`,\n");
    }
    out.push_str("\t}\n");
    out.push_str("};");

    out
}

/// Write rendered config text to `path`, replacing any existing file.
pub fn write_game_config(source: &str, path: &Path) -> Result<()> {
    fs::write(path, source).map_err(|e| OdycError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write code to output file: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, Palette, Sprite};
    use pretty_assertions::assert_eq;

    fn two_sprites() -> Encoded {
        let mut palette = Palette::new();
        palette.index_of(Colour::rgb(255, 0, 0), "first.png");
        palette.index_of(Colour::rgb(0, 0, 255), "second.png");

        Encoded {
            palette,
            sprites: vec![
                Sprite::new("first", vec!["00".into(), "00".into()]),
                Sprite::new("second", vec!["11".into(), "11".into()]),
            ],
            cell_width: 2,
            cell_height: 2,
        }
    }

    #[test]
    fn test_render_two_sprites() {
        let expected = "var gameConfig = {
\tcellWidth: 2,
\tcellHeight: 2,
\tcolors: [
\t\t\"#ff0000ff\",
\t\t\"#0000ffff\",
\t],
\tsprites: {
\t\t\"first\": `
\t\t\t00
\t\t\t00
\t\t`,
\t\t\"second\": `
\t\t\t11
\t\t\t11
\t\t`,
\t}
};";
        assert_eq!(render_game_config(&two_sprites()), expected);
    }

    #[test]
    fn test_render_is_deterministic() {
        let encoded = two_sprites();
        assert_eq!(render_game_config(&encoded), render_game_config(&encoded));
    }

    #[test]
    fn test_sprite_order_is_preserved() {
        let mut encoded = two_sprites();
        encoded.sprites.reverse();

        let source = render_game_config(&encoded);
        let second = source.find("\"second\"").unwrap();
        let first = source.find("\"first\"").unwrap();
        assert!(second < first);
    }

    #[test]
    fn test_write_game_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprites.js");

        write_game_config("var gameConfig = {};", &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "var gameConfig = {};");
    }

    #[test]
    fn test_write_game_config_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sprites.js");

        let err = write_game_config("", &path).unwrap_err();
        assert!(matches!(err, OdycError::Io { .. }));
    }
}
