// SPDX-License-Identifier: MPL-2.0
//! Domain layer - pure geometry and crop value types.
//!
//! Nothing in here depends on an external crate, performs I/O or logs, so
//! every rule can be tested in isolation.
//!
//! # Modules
//!
//! - [`geometry`]: [`Point`](geometry::Point), [`Rect`](geometry::Rect) and
//!   fitting helpers such as [`fit_with_min_size`](geometry::fit_with_min_size)
//! - [`crop`]: [`Zone`](crop::Zone) classification and clamped value objects
//!   ([`FingerSize`](crop::FingerSize), [`MinCropSize`](crop::MinCropSize),
//!   [`ZoomScale`](crop::ZoomScale))

pub mod crop;
pub mod geometry;
