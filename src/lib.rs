//! # enhance-kit
//!
//! A Rust library for fractional-order grayscale image enhancement.
//!
//! This crate implements the K-CFDO transform, a gamma-like intensity
//! correction built on the real Gamma function, together with the glue
//! needed to run it over image files:
//!
//! - **K-CFDO Enhancement**: per-sample transform `r * r^((1-rho)/k) / Γ(2 - rho/k)`
//!   with validated parameters, min-max normalization and 8-bit output
//! - **Min-Max Normalization**: standalone linear rescale of float buffers to [0, 1]
//! - **Image I/O glue**: grayscale read/write with error kinds per failure,
//!   idempotent output-directory creation, file-to-file and file-to-directory drivers
//!
//! ## Example Usage
//!
//! ```no_run
//! use enhance_kit::{enhance_into_dir, KCfdoEnhanceExt, KCfdoEnhancement};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Enhance an in-memory grayscale buffer
//! let gray = enhance_kit::read_grayscale("radiograph.png")?;
//! let enhanced = gray.kcfdo_enhance(0.5, 1.5)?;
//!
//! // Or drive a whole file through the pipeline
//! let enhancement = KCfdoEnhancement::new(0.5, 1.5)?;
//! let saved = enhance_into_dir("radiograph.png", "enhanced/", &enhancement)?;
//! println!("wrote {}", saved.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Features
//!
//! - `serde`: Enables serialization support (optional)

mod enhance_kit;
mod error;
mod io;
mod utils;

#[cfg(test)]
mod test_utils;

pub use enhance_kit::kcfdo::{KCfdoEnhanceExt, KCfdoEnhancement};
pub use enhance_kit::normalize::MinMaxNormalizeExt;
pub use error::{EnhanceError, ImageIoError, NormalizeError, PipelineError};
pub use io::{enhance_file, enhance_into_dir, ensure_dir, read_grayscale, write_grayscale};

// Re-export imageproc::definitions::Image for convenience
pub use imageproc::definitions::Image;
