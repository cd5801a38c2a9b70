//! File-level glue around the enhancement operations.
//!
//! Reads a grayscale image from disk, runs the K-CFDO enhancement and writes
//! the 8-bit result back, with the output format inferred from the path
//! extension. Directory creation is idempotent.

use std::path::{Path, PathBuf};

use image::{GrayImage, ImageReader};
use log::info;

use crate::enhance_kit::kcfdo::KCfdoEnhancement;
use crate::error::{ImageIoError, PipelineError};

/// Reads the image at `path` and converts it to 8-bit grayscale.
///
/// # Errors
/// * `ImageIoError::NotFound` - If the path does not exist
/// * `ImageIoError::Read` - If the file cannot be opened for another reason
/// * `ImageIoError::Decode` - If the content is not a decodable image
pub fn read_grayscale<P: AsRef<Path>>(path: P) -> Result<GrayImage, ImageIoError> {
    let path = path.as_ref();
    let reader = ImageReader::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ImageIoError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ImageIoError::Read {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let decoded = reader.decode().map_err(|source| ImageIoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_luma8())
}

/// Writes an 8-bit grayscale image to `path` in the format implied by its
/// extension.
///
/// # Errors
/// * `ImageIoError::Write` - On unwritable paths or encoding failures
pub fn write_grayscale<P: AsRef<Path>>(path: P, image: &GrayImage) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    image.save(path).map_err(|source| ImageIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates `dir` and any missing parents; succeeds if it already exists.
///
/// # Errors
/// * `ImageIoError::CreateDir` - On permission or path issues
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> Result<(), ImageIoError> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir).map_err(|source| ImageIoError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Enhances the image at `input` and writes the result to `output`.
///
/// # Errors
/// Surfaces read, enhancement and write failures immediately; no partial
/// output is left behind on enhancement errors.
pub fn enhance_file<P, Q>(
    input: P,
    output: Q,
    enhancement: &KCfdoEnhancement,
) -> Result<(), PipelineError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let gray = read_grayscale(&input)?;
    let enhanced = enhancement.enhance(&gray)?;
    write_grayscale(&output, &enhanced)?;
    info!("enhanced image saved to {}", output.as_ref().display());
    Ok(())
}

/// Enhances the image at `input` into `output_dir`, named after the input's
/// file name. The directory is created if absent. Returns the output path.
///
/// # Errors
/// As [`enhance_file`], plus `ImageIoError::MissingFileName` when `input`
/// has no final path component and `ImageIoError::CreateDir` when the
/// output directory cannot be created.
pub fn enhance_into_dir<P, Q>(
    input: P,
    output_dir: Q,
    enhancement: &KCfdoEnhancement,
) -> Result<PathBuf, PipelineError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let input = input.as_ref();
    let output_dir = output_dir.as_ref();

    ensure_dir(output_dir)?;
    let file_name = input
        .file_name()
        .ok_or_else(|| ImageIoError::MissingFileName {
            path: input.to_path_buf(),
        })?;
    let output = output_dir.join(file_name);
    enhance_file(input, &output, enhancement)?;
    Ok(output)
}
