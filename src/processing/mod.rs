// src/processing/mod.rs

//! In-place image optimization via the `image` and `jpeg-encoder` crates.
//!
//! # Architecture
//!
//! - [`executor`]: Drives the sequential batch and folds errors into per-file outcomes.
//! - [`resize`]: Caps the width with Lanczos3 resampling.
//! - [`formats`]: Normalises the color layout and encodes JPEG.

pub mod executor;
pub mod formats;
pub mod resize;

pub use executor::{execute_batch, optimize_image, run};
