//! PNG loading.
//!
//! Opening and decoding are separate steps because they fail differently: a
//! file that cannot be opened is skipped, while a file that cannot be
//! decoded aborts the run.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgba};

use crate::error::{OdycError, Result};

/// A decoded image with 16 bits per channel.
pub type Image16 = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Open an image file for reading.
pub fn open_image(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| OdycError::Io {
        path: path.to_path_buf(),
        message: format!("Error opening file: {}", e),
    })?;
    Ok(BufReader::new(file))
}

/// Decode PNG data into 16-bit RGBA samples.
///
/// The reader is consumed, so the underlying file is closed on return.
pub fn decode_image<R: BufRead + Seek>(reader: R, file_name: &str) -> Result<Image16> {
    let image = image::load(reader, ImageFormat::Png).map_err(|e| OdycError::Decode {
        file: file_name.to_string(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgba16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png_bytes(img: &image::RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_png() {
        let img = image::RgbaImage::from_pixel(3, 2, Rgba([255, 0, 0, 255]));
        let decoded = decode_image(Cursor::new(png_bytes(&img)), "red.png").unwrap();

        assert_eq!(decoded.dimensions(), (3, 2));
        assert_eq!(decoded.get_pixel(2, 1).0, [0xffff, 0, 0, 0xffff]);
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_image(Cursor::new(b"not a png".to_vec()), "bad.png").unwrap_err();
        match err {
            OdycError::Decode { file, .. } => assert_eq!(file, "bad.png"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_image(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, OdycError::Io { .. }));
    }
}
