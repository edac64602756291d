// SPDX-License-Identifier: MPL-2.0
//! Interactive crop engine.
//!
//! - [`manipulator`]: drag state machine moving and resizing the crop rectangle
//! - [`mapper`]: viewport to image pixel mapping under pan/zoom
//! - [`layout`]: placement of the scaled image in the host frame
//! - [`cropper`]: facade the host drives with frames, touches and overlay requests

pub mod cropper;
pub mod layout;
pub mod manipulator;
pub mod mapper;
pub mod observer;

pub use cropper::{CropperSettings, CropperState, OverlayState, TouchTarget, Transition};
pub use layout::Layout;
pub use manipulator::{CropManipulator, DragSession, DragState};
pub use mapper::{PixelRect, ZoomState};
pub use observer::CropObserver;
