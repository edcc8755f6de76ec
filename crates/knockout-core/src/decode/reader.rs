//! Decoding of arbitrary raster formats into RGBA8.

use std::io::{Cursor, ErrorKind};
use std::path::Path;

use image::{ImageError, ImageReader};
use tracing::{debug, instrument};

use super::{DecodeError, DecodedImage};

/// Decode an image from bytes, normalizing it to RGBA8.
///
/// The format is guessed from the content rather than a file extension. Any
/// colour type the `image` crate understands (grey, grey+alpha, RGB, RGBA,
/// 16-bit variants) is converted; images without alpha become fully opaque.
///
/// # Errors
///
/// Returns `DecodeError::UnsupportedFormat` if the format is not recognized.
/// Returns `DecodeError::CorruptedFile` if the data is corrupted or truncated.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format();
    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::UnsupportedFormat,
        other => DecodeError::CorruptedFile(other.to_string()),
    })?;

    debug!(
        ?format,
        color = ?img.color(),
        width = img.width(),
        height = img.height(),
        "Image decoded"
    );

    Ok(DecodedImage::from_rgba_image(img.into_rgba8()))
}

/// Read and decode an image file.
///
/// # Errors
///
/// Returns `DecodeError::NotFound` if the path does not exist or is not a
/// regular file, `DecodeError::Io` for other read failures, and any
/// [`decode_image`] error otherwise.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn open_image(path: &Path) -> Result<DecodedImage, DecodeError> {
    if path.is_dir() {
        return Err(DecodeError::NotFound(path.to_path_buf()));
    }

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => DecodeError::NotFound(path.to_path_buf()),
        _ => DecodeError::Io(e.to_string()),
    })?;

    debug!(bytes = bytes.len(), "Input read");
    decode_image(&bytes)
}
