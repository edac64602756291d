// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Touch**: Hit-target size for crop handles
//! - **Crop**: Minimum crop rectangle size
//! - **Zoom**: Zoom scale bounds

// ==========================================================================
// Touch Defaults
// ==========================================================================

/// Default edge length of a crop handle hit target, in view units.
pub const DEFAULT_FINGER_SIZE: f32 = 30.0;

/// Smallest accepted hit target.
pub const MIN_FINGER_SIZE: f32 = 1.0;

/// Largest accepted hit target.
pub const MAX_FINGER_SIZE: f32 = 200.0;

// ==========================================================================
// Crop Defaults
// ==========================================================================

/// Default minimum width and height of the crop rectangle, in view units.
pub const DEFAULT_MIN_CROP_SIZE: f32 = 30.0;

/// Upper bound for the configured minimum crop size.
pub const MAX_MIN_CROP_SIZE: f32 = 4096.0;

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Default maximum zoom scale (2 = 200%).
pub const DEFAULT_MAX_ZOOM_SCALE: f32 = 2.0;

/// Smallest zoom scale the mapper will divide by.
pub const MIN_ZOOM_SCALE: f32 = 0.001;

/// Largest zoom scale accepted anywhere.
pub const MAX_ZOOM_SCALE: f32 = 16.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_FINGER_SIZE > 0.0);
    assert!(MAX_FINGER_SIZE > MIN_FINGER_SIZE);
    assert!(DEFAULT_FINGER_SIZE >= MIN_FINGER_SIZE);
    assert!(DEFAULT_FINGER_SIZE <= MAX_FINGER_SIZE);

    assert!(DEFAULT_MIN_CROP_SIZE > 0.0);
    assert!(DEFAULT_MIN_CROP_SIZE <= MAX_MIN_CROP_SIZE);

    assert!(MIN_ZOOM_SCALE > 0.0);
    assert!(MAX_ZOOM_SCALE > MIN_ZOOM_SCALE);
    assert!(DEFAULT_MAX_ZOOM_SCALE >= 1.0);
    assert!(DEFAULT_MAX_ZOOM_SCALE <= MAX_ZOOM_SCALE);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finger_defaults_are_valid() {
        assert_eq!(DEFAULT_FINGER_SIZE, 30.0);
        assert!(DEFAULT_FINGER_SIZE >= MIN_FINGER_SIZE);
        assert!(DEFAULT_FINGER_SIZE <= MAX_FINGER_SIZE);
    }

    #[test]
    fn min_crop_default_matches_finger_size() {
        assert_eq!(DEFAULT_MIN_CROP_SIZE, DEFAULT_FINGER_SIZE);
    }

    #[test]
    fn zoom_defaults_are_valid() {
        assert_eq!(DEFAULT_MAX_ZOOM_SCALE, 2.0);
        assert!(MIN_ZOOM_SCALE < 1.0);
        assert!(MAX_ZOOM_SCALE >= DEFAULT_MAX_ZOOM_SCALE);
    }
}
