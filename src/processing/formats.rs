// src/processing/formats.rs

//! Color layout normalisation and JPEG encoding.

use image::DynamicImage;
use jpeg_encoder::{ColorType, Encoder};
use crate::utils::{OptimizerError, OptimizerResult};

/// Converts `image` into a layout JPEG can store.
///
/// 8-bit RGB and grayscale pass through. 16-bit grayscale is narrowed to
/// 8 bits. Everything else (alpha, expanded palettes, 16-bit and float
/// color) becomes 8-bit RGB, discarding alpha.
pub fn normalize_color(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        DynamicImage::ImageLuma16(_) => DynamicImage::ImageLuma8(image.into_luma8()),
        other => DynamicImage::ImageRgb8(other.into_rgb8()),
    }
}

/// Encodes an already normalised `image` as JPEG with optimized Huffman tables.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> OptimizerResult<Vec<u8>> {
    let (data, color_type) = match image {
        DynamicImage::ImageRgb8(buf) => (buf.as_raw().as_slice(), ColorType::Rgb),
        DynamicImage::ImageLuma8(buf) => (buf.as_raw().as_slice(), ColorType::Luma),
        other => {
            return Err(OptimizerError::format(format!(
                "Unsupported color layout for JPEG: {:?}",
                other.color()
            )));
        }
    };

    let width = jpeg_dimension(image.width())?;
    let height = jpeg_dimension(image.height())?;

    let mut bytes = Vec::new();
    let mut encoder = Encoder::new(&mut bytes, quality);
    encoder.set_optimized_huffman_tables(true);
    encoder.encode(data, width, height, color_type)?;

    Ok(bytes)
}

fn jpeg_dimension(value: u32) -> OptimizerResult<u16> {
    u16::try_from(value).map_err(|_| {
        OptimizerError::format(format!("Dimension {value} exceeds the JPEG limit of {}", u16::MAX))
    })
}
