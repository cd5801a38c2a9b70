//! Shared image builders for unit tests.

use image::{GrayImage, ImageBuffer, Luma};

/// Horizontal gradient spanning the full 8-bit range, repeated on every row.
pub fn gradient_gray(width: u32, height: u32) -> GrayImage {
    ImageBuffer::from_fn(width, height, |x, _| {
        let level = if width > 1 {
            (u64::from(x) * 255 / u64::from(width - 1)) as u8
        } else {
            0
        };
        Luma([level])
    })
}

/// Uniform image filled with `value`.
pub fn constant_gray(width: u32, height: u32, value: u8) -> GrayImage {
    ImageBuffer::from_pixel(width, height, Luma([value]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_gray_spans_full_range() {
        let image = gradient_gray(256, 1);
        assert_eq!(image.get_pixel(0, 0).0[0], 0);
        assert_eq!(image.get_pixel(255, 0).0[0], 255);
    }

    #[test]
    fn constant_gray_fills_every_pixel() {
        let image = constant_gray(3, 2, 77);
        assert!(image.iter().all(|&v| v == 77));
    }
}
