// SPDX-License-Identifier: MPL-2.0
//! Image pixel handling.

pub mod image_transform;
