//! Knockout Core - near-black to transparent image filter
//!
//! This crate decodes a raster image, replaces every pixel whose red, green
//! and blue channels are all at or below a threshold with a transparent
//! sentinel, and writes the result as PNG.

pub mod decode;
pub mod encode;
pub mod filter;
pub mod job;
pub mod pixel;

pub use filter::{is_near_black, make_transparent, make_transparent_in_place, Threshold};
pub use job::{
    is_png_path, make_black_transparent, validate_output_path, FilterOptions, KnockoutError,
    Outcome, Summary,
};
pub use pixel::Rgba;
