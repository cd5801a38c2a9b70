//! Error types for enhance-kit operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from the K-CFDO enhancement operation.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The kernel scaling factor divides both the point exponent and the
    /// Gamma-function argument, so zero is never a valid value.
    #[error("kernel scaling factor k must be nonzero")]
    ZeroKernelFactor,

    /// The Gamma function has poles at non-positive integers; requiring a
    /// strictly positive argument keeps the denominator finite and nonzero.
    #[error("gamma argument 2 - rho/k = {argument} must be positive (rho = {rho}, k = {k})")]
    GammaArgumentNotPositive { rho: f64, k: f64, argument: f64 },

    /// A sample the point transform is undefined for: negative (fractional
    /// powers of negative reals), zero under a negative exponent, or non-finite.
    #[error("sample {value} at ({x}, {y}) is outside the domain of the point transform")]
    SampleOutOfDomain { x: u32, y: u32, value: f64 },

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },
}

/// Errors from min-max normalization.
#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error("image dimensions must be non-zero, got {width}x{height}")]
    EmptyImage { width: u32, height: u32 },

    /// Every sample equals `value`, so the observed range is zero and the
    /// rescale would divide by zero.
    #[error("all samples equal {value}; min-max range is zero")]
    DegenerateRange { value: f64 },
}

/// Errors from reading and writing image files.
#[derive(Debug, Error)]
pub enum ImageIoError {
    #[error("input image not found: {path}")]
    NotFound { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("input path {path} has no file name component")]
    MissingFileName { path: PathBuf },
}

/// Errors from the file-to-file enhancement drivers.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Io(#[from] ImageIoError),

    #[error(transparent)]
    Enhance(#[from] EnhanceError),
}
