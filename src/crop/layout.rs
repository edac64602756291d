// SPDX-License-Identifier: MPL-2.0
//! Placement of the scaled image inside the host frame.
//!
//! The image is scaled down (never up) to fit the frame, centered, and
//! surrounded by a margin of half a finger while the crop overlay is visible
//! so handles on the image border stay reachable.

use crate::domain::crop::ZoomScale;
use crate::domain::geometry::{ceil_to_half, center_rect, fit_scale, Rect, Size};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Layout {
    /// Image plus margin, centered in the host frame.
    pub aspect: Rect,
    /// Visible image area, relative to `aspect`. Crop rectangles live in
    /// `Rect::with_size(viewport.size())`.
    pub viewport: Rect,
    /// Scale that fits the image into the viewport.
    pub scale: ZoomScale,
}

impl Layout {
    #[must_use]
    pub fn compute(frame: Size, image: Size, margin: f32) -> Self {
        let inner = Rect::with_size(frame).inset(margin, margin);
        if image.is_empty() || inner.is_empty() {
            return Self::default();
        }

        let scale = fit_scale(Rect::with_size(image), inner).min(1.0);
        let scaled = image.scale(scale);

        let aspect_size = Size::new(scaled.width + margin * 2.0, scaled.height + margin * 2.0);
        let aspect = center_rect(Rect::with_size(aspect_size), Rect::with_size(frame));
        let viewport = Rect::new(margin, margin, scaled.width, scaled.height);

        Self {
            aspect: snap(aspect),
            viewport: snap(viewport),
            scale: ZoomScale::new(scale),
        }
    }

    /// Crop rectangles must stay inside this rectangle.
    #[must_use]
    pub fn crop_bounds(&self) -> Rect {
        Rect::with_size(self.viewport.size())
    }
}

fn snap(rect: Rect) -> Rect {
    Rect::new(
        ceil_to_half(rect.x),
        ceil_to_half(rect.y),
        ceil_to_half(rect.width),
        ceil_to_half(rect.height),
    )
}
