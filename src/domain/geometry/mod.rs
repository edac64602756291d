// SPDX-License-Identifier: MPL-2.0
//! Geometry domain types.
//!
//! This module provides the value types every other crop component works
//! with, plus pure fitting helpers:
//! - [`Point`], [`Vector`], [`Size`], [`Rect`]: plain `f32` geometry
//! - [`fit_with_min_size`]: clamp a rectangle into bounds with a size floor
//! - [`fit_scale`] / [`fill_scale`]: aspect-preserving scale factors

pub mod fit;
pub mod types;

pub use fit::{ceil_to_half, center_rect, fill_scale, fit_scale, fit_with_min_size};
pub use types::{Point, Rect, Size, Vector};
