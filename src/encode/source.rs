//! Pixel access for decoded images.

use std::ops::Deref;

use image::{ImageBuffer, Rgba};

/// A decoded image the encoder can sample.
///
/// Samples are 16 bits per channel, row-major, with `0 <= x < width()` and
/// `0 <= y < height()`.
pub trait PixelSource {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn sample(&self, x: u32, y: u32) -> [u16; 4];
}

impl<C> PixelSource for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn sample(&self, x: u32, y: u32) -> [u16; 4] {
        self.get_pixel(x, y).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::DynamicImage;

    #[test]
    fn test_sample_widened_rgba8() {
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(1, 0, Rgba([0x12, 0x34, 0x56, 0xff]));

        let wide = DynamicImage::ImageRgba8(img).to_rgba16();
        assert_eq!(PixelSource::width(&wide), 2);
        assert_eq!(PixelSource::height(&wide), 1);
        assert_eq!(wide.sample(0, 0), [0, 0, 0, 0]);
        assert_eq!(wide.sample(1, 0), [0x1212, 0x3434, 0x5656, 0xffff]);
    }
}
