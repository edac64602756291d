// SPDX-License-Identifier: MPL-2.0
//! Pixel extraction for a confirmed crop.

use crate::crop::PixelRect;
use crate::error::{CropError, Result};
use image_rs::{DynamicImage, GenericImageView};

/// Copies the pixels covered by `rect` out of `image`.
///
/// The rectangle is first intersected with the image; an empty intersection
/// is an error rather than a 1×1 fallback.
pub fn crop(image: &DynamicImage, rect: PixelRect) -> Result<DynamicImage> {
    let (img_width, img_height) = image.dimensions();
    let region = rect.clamp_to(img_width, img_height);

    if region.is_empty() {
        tracing::debug!(?rect, img_width, img_height, "crop region outside image");
        return Err(CropError::EmptyRegion.into());
    }

    Ok(image.crop_imm(region.x, region.y, region.width, region.height))
}
