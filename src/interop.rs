// SPDX-License-Identifier: MPL-2.0
//! Conversions to and from `iced_core` geometry.
//!
//! An iced canvas host feeds cursor positions in as [`iced_core::Point`] and
//! draws the crop rectangle back out as an [`iced_core::Rectangle`].

use crate::domain::geometry::{Point, Rect, Size};

impl From<iced_core::Point> for Point {
    fn from(point: iced_core::Point) -> Self {
        Point::new(point.x, point.y)
    }
}

impl From<Point> for iced_core::Point {
    fn from(point: Point) -> Self {
        iced_core::Point::new(point.x, point.y)
    }
}

impl From<iced_core::Size> for Size {
    fn from(size: iced_core::Size) -> Self {
        Size::new(size.width, size.height)
    }
}

impl From<Size> for iced_core::Size {
    fn from(size: Size) -> Self {
        iced_core::Size::new(size.width, size.height)
    }
}

impl From<iced_core::Rectangle> for Rect {
    fn from(rect: iced_core::Rectangle) -> Self {
        Rect::new(rect.x, rect.y, rect.width, rect.height)
    }
}

impl From<Rect> for iced_core::Rectangle {
    fn from(rect: Rect) -> Self {
        iced_core::Rectangle {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
        }
    }
}
