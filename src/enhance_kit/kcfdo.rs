use image::{ImageBuffer, Luma, Primitive};
use imageproc::definitions::Image;

use crate::enhance_kit::normalize::MinMaxNormalizeExt;
use crate::error::{EnhanceError, NormalizeError};
use crate::utils::sample_extrema;

/// K-CFDO fractional-order enhancement.
///
/// Applies the point transform
///
/// ```text
/// enhanced = r * r^((1 - rho) / k) / Γ(2 - rho / k)
/// ```
///
/// to every sample `r` of a grayscale image, min-max normalizes the result
/// and quantizes it back to 8 bits. `Γ` is the real Gamma function; `rho`
/// regularizes the fractional order and `k` scales the kernel strength.
///
/// # Algorithm
///
/// 1. Widen the input to an `f64` working buffer.
/// 2. If the observed maximum is strictly greater than 1.0, divide every
///    sample by 255.0. Buffers already inside [0, 1] (typically float
///    sources) are left untouched; integer sources with samples above 255
///    may exceed 1.0 after the division, which the final normalization
///    absorbs.
/// 3. Apply the point transform above.
/// 4. Min-max normalize the enhanced buffer to [0, 1].
/// 5. Scale by 255, round and narrow to `u8`.
///
/// A constant input buffer has no range to normalize; the operation returns
/// an all-zero output of the same dimensions instead of dividing by zero.
/// In particular an all-zero input yields an all-zero output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KCfdoEnhancement {
    rho: f64,
    k: f64,
}

impl KCfdoEnhancement {
    /// Default regularization parameter.
    pub const DEFAULT_RHO: f64 = 0.5;
    /// Default kernel scaling factor.
    pub const DEFAULT_K: f64 = 1.5;

    /// Create a new K-CFDO enhancement with validated parameters.
    ///
    /// # Errors
    /// * `EnhanceError::ZeroKernelFactor` - If `k` is zero
    /// * `EnhanceError::GammaArgumentNotPositive` - If `2 - rho/k` is not
    ///   strictly positive; the Gamma denominator would hit a pole or go
    ///   negative, so such parameter pairs are rejected up front instead of
    ///   letting Inf/NaN leak into the output
    pub fn new(rho: f64, k: f64) -> Result<Self, EnhanceError> {
        if k == 0.0 {
            return Err(EnhanceError::ZeroKernelFactor);
        }
        let argument = 2.0 - rho / k;
        if argument.is_nan() || argument <= 0.0 {
            return Err(EnhanceError::GammaArgumentNotPositive { rho, k, argument });
        }
        Ok(Self { rho, k })
    }

    /// Regularization parameter.
    #[must_use]
    pub const fn rho(&self) -> f64 {
        self.rho
    }

    /// Kernel scaling factor.
    #[must_use]
    pub const fn k(&self) -> f64 {
        self.k
    }

    /// Exponent applied on top of the identity factor, `(1 - rho) / k`.
    ///
    /// Zero-valued samples are outside the transform's domain when this is
    /// negative.
    #[must_use]
    pub fn exponent(&self) -> f64 {
        (1.0 - self.rho) / self.k
    }

    /// Gamma-function denominator shared by every sample, `Γ(2 - rho / k)`.
    #[must_use]
    pub fn gamma_denominator(&self) -> f64 {
        libm::tgamma(2.0 - self.rho / self.k)
    }

    /// Apply the enhancement to a grayscale image.
    ///
    /// Accepts any subpixel type that widens losslessly to `f64` and returns
    /// an 8-bit buffer of identical dimensions.
    ///
    /// # Errors
    /// * `EnhanceError::EmptyImage` - If either dimension is zero
    /// * `EnhanceError::SampleOutOfDomain` - If a sample is negative,
    ///   non-finite, or zero while `exponent()` is negative
    pub fn enhance<S>(&self, image: &Image<Luma<S>>) -> Result<Image<Luma<u8>>, EnhanceError>
    where
        S: Primitive,
        f64: From<S>,
    {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(EnhanceError::EmptyImage { width, height });
        }

        let unit = to_unit_range_impl(image);
        let exponent = self.exponent();
        validate_domain_impl(&unit, exponent)?;

        let denominator = self.gamma_denominator();
        let enhanced: Image<Luma<f64>> = ImageBuffer::from_fn(width, height, |x, y| {
            let r = unit.get_pixel(x, y).0[0];
            Luma([r * r.powf(exponent) / denominator])
        });

        let normalized = match enhanced.min_max_normalize() {
            Ok(buffer) => buffer,
            Err(NormalizeError::DegenerateRange { .. }) => {
                return Ok(ImageBuffer::from_pixel(width, height, Luma([0u8])));
            }
            Err(NormalizeError::EmptyImage { width, height }) => {
                return Err(EnhanceError::EmptyImage { width, height });
            }
        };

        Ok(quantize_impl(&normalized))
    }
}

impl Default for KCfdoEnhancement {
    fn default() -> Self {
        Self {
            rho: Self::DEFAULT_RHO,
            k: Self::DEFAULT_K,
        }
    }
}

/// Widens to `f64` and rescales into unit range when the source looks 8-bit.
///
/// The rescale triggers only when the observed maximum is strictly greater
/// than 1.0; already-normalized float buffers pass through unchanged.
fn to_unit_range_impl<S>(image: &Image<Luma<S>>) -> Image<Luma<f64>>
where
    S: Primitive,
    f64: From<S>,
{
    let max = sample_extrema(image.as_raw()).map_or(0.0, |(_, max)| f64::from(max));
    let needs_rescale = max > 1.0;

    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let sample = f64::from(image.get_pixel(x, y).0[0]);
        Luma([if needs_rescale { sample / 255.0 } else { sample }])
    })
}

/// Rejects samples the point transform is undefined for.
fn validate_domain_impl(
    unit: &Image<Luma<f64>>,
    exponent: f64,
) -> Result<(), EnhanceError> {
    for (x, y, pixel) in unit.enumerate_pixels() {
        let r = pixel.0[0];
        if !r.is_finite() || r < 0.0 || (r == 0.0 && exponent < 0.0) {
            return Err(EnhanceError::SampleOutOfDomain { x, y, value: r });
        }
    }
    Ok(())
}

/// Scales a unit-range buffer by 255 and narrows to `u8`.
fn quantize_impl(image: &Image<Luma<f64>>) -> Image<Luma<u8>> {
    ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        let value = image.get_pixel(x, y).0[0];
        Luma([(value * 255.0).round().clamp(0.0, 255.0) as u8])
    })
}

/// Extension trait for `ImageBuffer` to provide fluent K-CFDO enhancement.
pub trait KCfdoEnhanceExt {
    /// Apply the K-CFDO enhancement with the given parameters.
    ///
    /// This consumes the original image.
    ///
    /// # Arguments
    ///
    /// * `rho` - Regularization parameter
    /// * `k` - Kernel scaling factor (must be nonzero)
    ///
    /// # Errors
    ///
    /// See [`KCfdoEnhancement::new`] and [`KCfdoEnhancement::enhance`].
    ///
    /// # Examples
    /// ```
    /// use enhance_kit::KCfdoEnhanceExt;
    /// use image::{GrayImage, Luma};
    ///
    /// let mut image = GrayImage::new(2, 2);
    /// image.put_pixel(1, 1, Luma([255]));
    /// let enhanced = image.kcfdo_enhance(0.5, 1.5).unwrap();
    /// assert_eq!(enhanced.dimensions(), (2, 2));
    /// ```
    fn kcfdo_enhance(self, rho: f64, k: f64) -> Result<Image<Luma<u8>>, EnhanceError>;
}

impl<S> KCfdoEnhanceExt for Image<Luma<S>>
where
    S: Primitive,
    f64: From<S>,
{
    fn kcfdo_enhance(self, rho: f64, k: f64) -> Result<Image<Luma<u8>>, EnhanceError> {
        let enhancement = KCfdoEnhancement::new(rho, k)?;
        enhancement.enhance(&self)
    }
}
