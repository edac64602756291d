// SPDX-License-Identifier: MPL-2.0
//! `lens_crop` is an interactive image-crop engine.
//!
//! It classifies touches against a crop rectangle's handles, moves and
//! resizes the rectangle with sticky edges and a guaranteed minimum size,
//! and maps the result through pan/zoom into image pixels. Rendering and
//! animation are left to the host, which drives a
//! [`CropperState`](crop::CropperState) and is notified of every change.

pub mod config;
pub mod crop;
pub mod domain;
pub mod error;
pub mod interop;
pub mod media;

#[cfg(test)]
pub(crate) mod test_utils;
