// SPDX-License-Identifier: MPL-2.0
//! Hit zones of the crop rectangle.
//!
//! Every zone is a hit target centered on the rectangle boundary: corner
//! squares sit on the four corners and edge strips run between them. Regions
//! are half-open and do not overlap while the rectangle is at least one
//! finger wide on each axis.

use super::newtypes::FingerSize;
use crate::domain::geometry::{Point, Rect};

/// Side of the crop rectangle moved by a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Top and left edges move the origin; bottom and right only the size.
    #[must_use]
    pub fn is_leading(self) -> bool {
        matches!(self, Edge::Top | Edge::Left)
    }

    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Part of the crop rectangle under a touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Zone {
    #[default]
    None,
    TopLeftCorner,
    TopEdge,
    TopRightCorner,
    RightEdge,
    BottomRightCorner,
    BottomEdge,
    BottomLeftCorner,
    LeftEdge,
}

impl Zone {
    /// All interactive zones, clockwise from the top-left corner.
    pub const HANDLES: [Zone; 8] = [
        Zone::TopLeftCorner,
        Zone::TopEdge,
        Zone::TopRightCorner,
        Zone::RightEdge,
        Zone::BottomRightCorner,
        Zone::BottomEdge,
        Zone::BottomLeftCorner,
        Zone::LeftEdge,
    ];

    /// Edges a drag in this zone moves, in application order.
    #[must_use]
    pub fn edges(self) -> &'static [Edge] {
        match self {
            Zone::None => &[],
            Zone::TopLeftCorner => &[Edge::Top, Edge::Left],
            Zone::TopEdge => &[Edge::Top],
            Zone::TopRightCorner => &[Edge::Top, Edge::Right],
            Zone::RightEdge => &[Edge::Right],
            Zone::BottomRightCorner => &[Edge::Bottom, Edge::Right],
            Zone::BottomEdge => &[Edge::Bottom],
            Zone::BottomLeftCorner => &[Edge::Bottom, Edge::Left],
            Zone::LeftEdge => &[Edge::Left],
        }
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        self.edges().len() == 2
    }

    #[must_use]
    pub fn is_none(self) -> bool {
        self == Zone::None
    }
}

/// Maps touch points to [`Zone`]s using hit targets of a given [`FingerSize`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ZoneClassifier {
    finger: FingerSize,
}

impl ZoneClassifier {
    #[must_use]
    pub fn new(finger: FingerSize) -> Self {
        Self { finger }
    }

    #[must_use]
    pub fn finger_size(&self) -> FingerSize {
        self.finger
    }

    /// Hit target of `zone` around `rect`, or `None` for [`Zone::None`].
    ///
    /// Edge strips can come out empty when `rect` is shorter than one finger
    /// on that axis; empty regions contain no point.
    #[must_use]
    pub fn region(&self, zone: Zone, rect: Rect) -> Option<Rect> {
        let f = self.finger.value();
        let h = self.finger.reach();

        let region = match zone {
            Zone::None => return None,
            Zone::TopLeftCorner => Rect::new(rect.min_x() - h, rect.min_y() - h, f, f),
            Zone::TopRightCorner => Rect::new(rect.max_x() - h, rect.min_y() - h, f, f),
            Zone::BottomRightCorner => Rect::new(rect.max_x() - h, rect.max_y() - h, f, f),
            Zone::BottomLeftCorner => Rect::new(rect.min_x() - h, rect.max_y() - h, f, f),
            Zone::TopEdge => Rect::new(rect.min_x() + h, rect.min_y() - h, rect.width - f, f),
            Zone::BottomEdge => Rect::new(rect.min_x() + h, rect.max_y() - h, rect.width - f, f),
            Zone::RightEdge => Rect::new(rect.max_x() - h, rect.min_y() + h, f, rect.height - f),
            Zone::LeftEdge => Rect::new(rect.min_x() - h, rect.min_y() + h, f, rect.height - f),
        };

        Some(region)
    }

    /// Classifies `point` against the hit targets of `rect`.
    ///
    /// Edges are tested before corners. A degenerate `container` disables
    /// every zone.
    #[must_use]
    pub fn classify(&self, rect: Rect, point: Point, container: Rect) -> Zone {
        if container.is_empty() {
            return Zone::None;
        }

        const ORDER: [Zone; 8] = [
            Zone::TopEdge,
            Zone::BottomEdge,
            Zone::RightEdge,
            Zone::LeftEdge,
            Zone::TopLeftCorner,
            Zone::TopRightCorner,
            Zone::BottomLeftCorner,
            Zone::BottomRightCorner,
        ];

        ORDER
            .into_iter()
            .find(|zone| {
                self.region(*zone, rect)
                    .is_some_and(|region| region.contains(point))
            })
            .unwrap_or(Zone::None)
    }
}
