use image::Luma;
use imageproc::definitions::Image;

use crate::utils::sample_extrema;
use crate::NormalizeError;

/// Trait for min-max normalization of floating-point grayscale buffers.
///
/// Rescales every sample linearly so the observed minimum maps to 0.0 and the
/// observed maximum maps to 1.0. A buffer that already spans exactly [0, 1]
/// passes through unchanged up to floating rounding.
pub trait MinMaxNormalizeExt {
    /// Rescales the buffer to span exactly [0.0, 1.0].
    ///
    /// This consumes the original image.
    ///
    /// # Errors
    /// * `NormalizeError::EmptyImage` - If either dimension is zero
    /// * `NormalizeError::DegenerateRange` - If every sample holds the same
    ///   value; the rescale would divide by zero, so callers must pick their
    ///   own fallback for constant buffers
    fn min_max_normalize(self) -> Result<Self, NormalizeError>
    where
        Self: Sized;
}

macro_rules! impl_min_max_normalize {
    ($sample:ty) => {
        impl MinMaxNormalizeExt for Image<Luma<$sample>> {
            fn min_max_normalize(mut self) -> Result<Self, NormalizeError> {
                let (width, height) = self.dimensions();
                if width == 0 || height == 0 {
                    return Err(NormalizeError::EmptyImage { width, height });
                }

                let (min, max) = sample_extrema(self.as_raw())
                    .ok_or(NormalizeError::EmptyImage { width, height })?;
                if min == max {
                    return Err(NormalizeError::DegenerateRange {
                        value: f64::from(min),
                    });
                }

                let range = max - min;
                for sample in self.iter_mut() {
                    *sample = (*sample - min) / range;
                }
                Ok(self)
            }
        }
    };
}

impl_min_max_normalize!(f32);
impl_min_max_normalize!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    use imageproc::gray_image;

    #[test]
    fn min_max_normalize_with_spread_values_rescales_to_unit_range() {
        let image = gray_image!(type: f64,
            10.0, 20.0;
            30.0, 40.0);

        let normalized = image.min_max_normalize().unwrap();

        assert_eq!(normalized.get_pixel(0, 0).0[0], 0.0);
        assert!((normalized.get_pixel(1, 0).0[0] - 1.0 / 3.0).abs() < 1e-12);
        assert!((normalized.get_pixel(0, 1).0[0] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(normalized.get_pixel(1, 1).0[0], 1.0);
    }

    #[test]
    fn min_max_normalize_with_unit_range_buffer_is_idempotent() {
        let image = gray_image!(type: f64,
            0.0, 0.25;
            0.75, 1.0);

        let once = image.clone().min_max_normalize().unwrap();
        let twice = once.clone().min_max_normalize().unwrap();

        for (a, b) in once.iter().zip(twice.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
        for (a, b) in image.iter().zip(once.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn min_max_normalize_with_f32_buffer_rescales_to_unit_range() {
        let image = gray_image!(type: f32, -1.0, 0.0, 1.0);

        let normalized = image.min_max_normalize().unwrap();

        assert_eq!(normalized.get_pixel(0, 0).0[0], 0.0);
        assert!((normalized.get_pixel(1, 0).0[0] - 0.5).abs() < 1e-6);
        assert_eq!(normalized.get_pixel(2, 0).0[0], 1.0);
    }

    #[test]
    fn min_max_normalize_with_constant_buffer_returns_degenerate_range() {
        let image = gray_image!(type: f64,
            0.4, 0.4;
            0.4, 0.4);

        let result = image.min_max_normalize();

        assert!(matches!(
            result,
            Err(NormalizeError::DegenerateRange { value }) if value == 0.4
        ));
    }

    #[test]
    fn min_max_normalize_with_empty_image_returns_error() {
        let image: Image<Luma<f64>> = Image::new(0, 0);

        let result = image.min_max_normalize();

        assert!(matches!(
            result,
            Err(NormalizeError::EmptyImage {
                width: 0,
                height: 0
            })
        ));
    }
}
