// src/processing/resize.rs

//! Width-cap resizing.

use image::DynamicImage;
use image::imageops::FilterType;
use crate::core::{Dimensions, ResizeInfo};

/// Returns the target dimensions when `current` is wider than `max_width`.
///
/// The height is scaled by the same ratio and floored, but never drops to 0.
/// Returns `None` when no resize is needed.
pub fn capped_dimensions(current: Dimensions, max_width: u32) -> Option<Dimensions> {
    if current.width <= max_width {
        return None;
    }

    let height = u64::from(current.height) * u64::from(max_width) / u64::from(current.width);
    // height < current.height here, so it always fits back into u32
    let height = (height as u32).max(1);

    Some(Dimensions::new(max_width, height))
}

/// Downscales `image` to `max_width` with a Lanczos3 filter if it is wider.
///
/// Will not enlarge the image if it is already narrower than the cap.
pub fn apply_width_cap(image: DynamicImage, max_width: u32) -> (DynamicImage, Option<ResizeInfo>) {
    let from = Dimensions::new(image.width(), image.height());

    match capped_dimensions(from, max_width) {
        Some(to) => {
            let resized = image.resize_exact(to.width, to.height, FilterType::Lanczos3);
            (resized, Some(ResizeInfo { from, to }))
        }
        None => (image, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn wide_images_are_capped_proportionally() {
        assert_eq!(
            capped_dimensions(Dimensions::new(3840, 2160), 1920),
            Some(Dimensions::new(1920, 1080))
        );
        // 1000 * 1920 / 2001 = 959.52..
        assert_eq!(
            capped_dimensions(Dimensions::new(2001, 1000), 1920),
            Some(Dimensions::new(1920, 959))
        );
    }

    #[test]
    fn narrow_or_exact_images_are_left_alone() {
        assert_eq!(capped_dimensions(Dimensions::new(1920, 5000), 1920), None);
        assert_eq!(capped_dimensions(Dimensions::new(10, 10), 1920), None);
    }

    #[test]
    fn panoramas_keep_at_least_one_row() {
        assert_eq!(
            capped_dimensions(Dimensions::new(100_000, 10), 100),
            Some(Dimensions::new(100, 1))
        );
    }

    #[test]
    fn apply_width_cap_resamples() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(400, 300));

        let (out, info) = apply_width_cap(image, 200);

        assert_eq!((out.width(), out.height()), (200, 150));
        let info = info.unwrap();
        assert_eq!(info.from, Dimensions::new(400, 300));
        assert_eq!(info.to, Dimensions::new(200, 150));
    }

    #[test]
    fn apply_width_cap_is_a_noop_when_narrow() {
        let image = DynamicImage::ImageRgb8(RgbImage::new(120, 80));

        let (out, info) = apply_width_cap(image, 200);

        assert_eq!((out.width(), out.height()), (120, 80));
        assert!(info.is_none());
    }
}
