//! Image encoding for the knockout pipeline.
//!
//! Output is always PNG, written in one step after the image has been fully
//! encoded in memory.
//!
//! # Examples
//!
//! ```ignore
//! use knockout_core::encode::encode_png;
//!
//! let pixels = vec![255u8, 255, 255, 0]; // one transparent pixel
//! let png_bytes = encode_png(&pixels, 1, 1).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, write_png, EncodeError};
