// SPDX-License-Identifier: MPL-2.0
//! Crop newtypes.
//!
//! This module provides type-safe wrappers for crop configuration values,
//! ensuring they are always within valid ranges.

use crate::config::defaults;
use crate::domain::geometry::Size;

// =============================================================================
// FingerSize
// =============================================================================

/// Edge length of a crop handle hit target, guaranteed to be within
/// [`defaults::MIN_FINGER_SIZE`]..=[`defaults::MAX_FINGER_SIZE`].
///
/// Corner hit targets are `value × value` squares and edge strips are
/// `value` thick, all centered on the crop rectangle's boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FingerSize(f32);

impl FingerSize {
    /// Creates a new finger size, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.clamp(defaults::MIN_FINGER_SIZE, defaults::MAX_FINGER_SIZE))
    }

    /// Returns the raw edge length.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Half the edge length: how far a hit target reaches past the boundary.
    #[must_use]
    pub fn reach(self) -> f32 {
        self.0 / 2.0
    }
}

impl Default for FingerSize {
    fn default() -> Self {
        Self(defaults::DEFAULT_FINGER_SIZE)
    }
}

// =============================================================================
// MinCropSize
// =============================================================================

/// Floor for the crop rectangle's width and height.
///
/// Both dimensions are clamped to `0..=MAX_MIN_CROP_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinCropSize(Size);

impl MinCropSize {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self(Size::new(clamp_dimension(width), clamp_dimension(height)))
    }

    #[must_use]
    pub fn width(self) -> f32 {
        self.0.width
    }

    #[must_use]
    pub fn height(self) -> f32 {
        self.0.height
    }

    #[must_use]
    pub fn as_size(self) -> Size {
        self.0
    }

    /// Returns whether a container of `size` can hold a minimum-sized crop.
    #[must_use]
    pub fn fits_in(self, size: Size) -> bool {
        self.0.width <= size.width && self.0.height <= size.height
    }
}

impl Default for MinCropSize {
    fn default() -> Self {
        Self::new(defaults::DEFAULT_MIN_CROP_SIZE, defaults::DEFAULT_MIN_CROP_SIZE)
    }
}

fn clamp_dimension(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, defaults::MAX_MIN_CROP_SIZE)
    } else {
        defaults::DEFAULT_MIN_CROP_SIZE
    }
}

// =============================================================================
// ZoomScale
// =============================================================================

/// Zoom factor between viewport space and image space, always strictly
/// positive so it can safely be divided by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new zoom scale, clamping the value to the valid range.
    ///
    /// Non-finite input falls back to `1.0`.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        if !scale.is_finite() {
            return Self::default();
        }
        Self(scale.clamp(defaults::MIN_ZOOM_SCALE, defaults::MAX_ZOOM_SCALE))
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Clamps the scale between `min` and `max` (both already valid scales).
    #[must_use]
    pub fn clamp_between(self, min: ZoomScale, max: ZoomScale) -> Self {
        Self(self.0.clamp(min.0, max.0.max(min.0)))
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(1.0)
    }
}
