// SPDX-License-Identifier: MPL-2.0
//! Mapping between viewport space and image pixel space.

use crate::domain::crop::ZoomScale;
use crate::domain::geometry::{Point, Rect, Size};

/// Pan/zoom transform applied to the image inside the viewport.
///
/// `pan_offset` is the scrolled distance in viewport units (the scaled
/// content's coordinate at the viewport's top-left corner) and
/// `content_size` is the unscaled image size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoomState {
    pub pan_offset: Point,
    pub scale: ZoomScale,
    pub content_size: Size,
}

impl ZoomState {
    #[must_use]
    pub fn new(content_size: Size, scale: ZoomScale) -> Self {
        Self {
            pan_offset: Point::ORIGIN,
            scale,
            content_size,
        }
    }

    /// Size of the content once scaled, in viewport units.
    #[must_use]
    pub fn scaled_content(&self) -> Size {
        self.content_size.scale(self.scale.value())
    }

    /// Keeps the pan offset inside the scrollable range for `viewport`.
    #[must_use]
    pub fn clamp_pan(mut self, viewport: Size) -> Self {
        let scaled = self.scaled_content();
        let max_x = (scaled.width - viewport.width).max(0.0);
        let max_y = (scaled.height - viewport.height).max(0.0);
        self.pan_offset = Point::new(
            self.pan_offset.x.clamp(0.0, max_x),
            self.pan_offset.y.clamp(0.0, max_y),
        );
        self
    }
}

/// Translates the crop rectangle into image space.
///
/// With an active overlay (`Some(crop)`) the crop rectangle is offset by the
/// pan and divided by the scale; without one the whole visible viewport is
/// the crop.
#[must_use]
pub fn image_rect(crop: Option<Rect>, zoom: &ZoomState, viewport: Size) -> Rect {
    let scale = zoom.scale.value();
    let pan = zoom.pan_offset;

    match crop {
        Some(crop) => Rect::new(
            (pan.x + crop.x) / scale,
            (pan.y + crop.y) / scale,
            crop.width / scale,
            crop.height / scale,
        ),
        None => Rect::new(
            pan.x / scale,
            pan.y / scale,
            viewport.width / scale,
            viewport.height / scale,
        ),
    }
}

/// Integer rectangle in image pixels, ready for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Truncates every component toward zero; negative values become 0.
    #[must_use]
    pub fn from_image_rect(rect: Rect) -> Self {
        // `as` truncates and saturates, NaN maps to 0
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let truncate = |value: f32| value as u32;
        Self::new(
            truncate(rect.x),
            truncate(rect.y),
            truncate(rect.width),
            truncate(rect.height),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Intersects the rectangle with an image of `width × height` pixels.
    #[must_use]
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        let x = self.x.min(width);
        let y = self.y.min(height);
        Self::new(
            x,
            y,
            self.width.min(width - x),
            self.height.min(height - y),
        )
    }
}
