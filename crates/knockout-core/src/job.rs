//! End-to-end knockout: validate, decode, filter, encode, write.
//!
//! # Order of operations
//!
//! 1. Output path must name a PNG file; anything else fails before any I/O
//! 2. Input is read and decoded to RGBA8
//! 3. Near-black pixels are replaced
//! 4. The result is encoded and written in one step
//!
//! A missing input is not an error: it is reported as
//! [`Outcome::InputNotFound`] and nothing is written.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::decode::{open_image, DecodeError};
use crate::encode::{write_png, EncodeError};
use crate::filter::{make_transparent_in_place, Threshold};

/// Settings for a knockout run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Pixels with red, green and blue all at or below this value become
    /// transparent.
    #[serde(default)]
    pub threshold: Threshold,
}

impl FilterOptions {
    pub fn new(threshold: impl Into<Threshold>) -> Self {
        Self {
            threshold: threshold.into(),
        }
    }
}

/// Hard failures of a knockout run.
#[derive(Debug, Error)]
pub enum KnockoutError {
    /// The output path does not name a PNG file.
    #[error("Output file must be a .png to support transparency: '{}'", .0.display())]
    InvalidOutputFormat(PathBuf),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// What a completed run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Number of pixels replaced by the transparent sentinel.
    pub replaced: usize,
}

/// Result of a run that did not fail hard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The output file was written.
    Saved(Summary),
    /// The input path does not resolve to a readable file; nothing was written.
    InputNotFound(PathBuf),
}

/// Check whether a path names a PNG file (case-insensitive `.png` suffix).
pub fn is_png_path(path: &Path) -> bool {
    path.to_string_lossy().to_ascii_lowercase().ends_with(".png")
}

/// Reject output paths that cannot store per-pixel alpha.
pub fn validate_output_path(path: &Path) -> Result<(), KnockoutError> {
    if is_png_path(path) {
        Ok(())
    } else {
        Err(KnockoutError::InvalidOutputFormat(path.to_path_buf()))
    }
}

/// Make near-black pixels of `input` transparent and save the result to
/// `output` as PNG.
///
/// # Errors
///
/// * `KnockoutError::InvalidOutputFormat` - `output` does not end in `.png`;
///   raised before the input is touched
/// * `KnockoutError::Decode` - the input exists but cannot be read or decoded
/// * `KnockoutError::Encode` - encoding or writing the output failed
#[instrument(skip_all, fields(input = %input.display(), output = %output.display(), threshold = options.threshold.value()))]
pub fn make_black_transparent(
    input: &Path,
    output: &Path,
    options: &FilterOptions,
) -> Result<Outcome, KnockoutError> {
    validate_output_path(output)?;

    let mut image = match open_image(input) {
        Ok(image) => image,
        Err(DecodeError::NotFound(path)) => {
            warn!("Input file not found");
            return Ok(Outcome::InputNotFound(path));
        }
        Err(e) => return Err(e.into()),
    };

    let replaced = make_transparent_in_place(&mut image.pixels, options.threshold);
    write_png(output, &image)?;

    info!(
        width = image.width,
        height = image.height,
        replaced,
        "Transparent image saved"
    );

    Ok(Outcome::Saved(Summary {
        output: output.to_path_buf(),
        width: image.width,
        height: image.height,
        replaced,
    }))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: any path without a `.png` suffix is rejected without
        /// touching the filesystem.
        #[test]
        fn prop_non_png_output_rejected(
            stem in "[a-z]{1,8}",
            ext in prop::sample::select(vec!["jpg", "jpeg", "bmp", "gif", "webp", "pn", "pngx"]),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let output = dir.path().join(format!("{stem}.{ext}"));
            let input = dir.path().join("does-not-exist.png");

            let result = make_black_transparent(&input, &output, &FilterOptions::default());
            prop_assert!(matches!(result, Err(KnockoutError::InvalidOutputFormat(_))));
            prop_assert!(!output.exists());
        }
    }
}
