// SPDX-License-Identifier: MPL-2.0
//! Change notifications sent to the host.

use crate::domain::geometry::Rect;

/// Receives the crop rectangle every time it changes.
///
/// Hosts typically schedule a redraw here. Every notifying method of
/// [`CropperState`](super::CropperState) also returns the new rectangle, so
/// installing an observer is optional.
pub trait CropObserver {
    fn crop_rect_changed(&mut self, rect: Rect);
}

impl<F> CropObserver for F
where
    F: FnMut(Rect),
{
    fn crop_rect_changed(&mut self, rect: Rect) {
        self(rect);
    }
}
