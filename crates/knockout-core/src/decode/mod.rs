//! Image decoding for the knockout pipeline.
//!
//! This module provides functionality for:
//! - Reading an input file and mapping a missing path to `DecodeError::NotFound`
//! - Decoding any format the `image` crate is built with (JPEG, PNG, BMP, GIF,
//!   TIFF, WebP)
//! - Normalizing every colour type to RGBA8, defaulting alpha to 255
//!
//! # Examples
//!
//! ```ignore
//! use knockout_core::decode::open_image;
//!
//! let image = open_image("photo.jpeg".as_ref()).unwrap();
//! println!("Decoded {}x{} image", image.width, image.height);
//! ```

mod reader;
mod types;

pub use reader::{decode_image, open_image};
pub use types::{DecodeError, DecodedImage};
