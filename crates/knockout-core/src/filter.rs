//! Near-black to transparent pixel filter.
//!
//! A pixel is "near black" when its red, green and blue channels are all at
//! or below the threshold. Every such pixel is replaced by
//! [`Rgba::TRANSPARENT`]; all other pixels pass through untouched, alpha
//! included.
//!
//! # Algorithm
//!
//! ```text
//! for each pixel p = (r, g, b, a):
//!     if r <= t && g <= t && b <= t { TRANSPARENT } else { p }
//! ```
//!
//! The test is a per-channel conjunction, not a luminance measure, and alpha
//! never takes part in it.
//!
//! # Idempotence
//!
//! For any threshold below 255 a second pass is a no-op: the sentinel's colour
//! channels are 255 and never match again. At 255 every pixel matches, so a
//! second pass maps the sentinel onto itself.

use serde::{Deserialize, Serialize};

use crate::pixel::Rgba;

/// Inclusive upper bound for a channel to count as "dark enough".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Threshold(pub u8);

impl Threshold {
    /// Suitable for pure black; raise it to also remove dark greys.
    pub const DEFAULT: Threshold = Threshold(20);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// Check whether a pixel qualifies for replacement.
#[inline]
pub fn is_near_black(px: Rgba, threshold: Threshold) -> bool {
    let t = threshold.0;
    px.r <= t && px.g <= t && px.b <= t
}

/// Map a single pixel through the filter.
#[inline]
pub fn knock_out(px: Rgba, threshold: Threshold) -> Rgba {
    if is_near_black(px, threshold) {
        Rgba::TRANSPARENT
    } else {
        px
    }
}

/// Produce a new pixel sequence with every near-black pixel replaced.
///
/// The output has the same length and order as the input.
pub fn make_transparent(pixels: &[Rgba], threshold: Threshold) -> Vec<Rgba> {
    pixels.iter().map(|&px| knock_out(px, threshold)).collect()
}

/// Apply the filter in place to packed RGBA8 bytes (4 bytes per pixel,
/// row-major order).
///
/// Returns the number of pixels that were replaced. A trailing partial pixel
/// is left untouched.
pub fn make_transparent_in_place(pixels: &mut [u8], threshold: Threshold) -> usize {
    let mut replaced = 0;
    for chunk in pixels.chunks_exact_mut(4) {
        let px = Rgba::new(chunk[0], chunk[1], chunk[2], chunk[3]);
        if is_near_black(px, threshold) {
            chunk.copy_from_slice(&Rgba::TRANSPARENT.to_array());
            replaced += 1;
        }
    }
    replaced
}


// ============================================================================
// Property-Based Tests
// ============================================================================
