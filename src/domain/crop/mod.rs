// SPDX-License-Identifier: MPL-2.0
//! Crop domain types.
//!
//! - [`FingerSize`], [`MinCropSize`], [`ZoomScale`]: clamped value objects
//! - [`Zone`], [`Edge`], [`ZoneClassifier`]: hit testing of the crop rectangle

pub mod newtypes;
pub mod zone;

pub use newtypes::{FingerSize, MinCropSize, ZoomScale};
pub use zone::{Edge, Zone, ZoneClassifier};
