// SPDX-License-Identifier: MPL-2.0
//! Drag state machine for the crop rectangle.
//!
//! A drag starts when a touch lands on one of the rectangle's [`Zone`]s and
//! lasts until the touch ends. Each move applies the incremental translation
//! (`current - previous`) to the edges owned by the zone, then pins those
//! edges to the container or to the minimum size whenever the finger has
//! travelled past the point where the edge would cross them. The finger keeps
//! the same offset from the edge it grabbed ("stickiness"), so an edge only
//! starts moving back once the finger returns to where the edge is.
//!
//! Every axis is handled as a one-dimensional span; top/left are *leading*
//! edges (origin and size change), bottom/right are *trailing* edges (size
//! only).

use crate::domain::crop::{Edge, FingerSize, MinCropSize, Zone, ZoneClassifier};
use crate::domain::geometry::{Point, Rect, Vector};

/// Snapshot taken when a drag starts. Only exists while a touch is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub zone: Zone,
    pub rect_before_drag: Rect,
    pub touch_before_drag: Point,
    pub last_touch: Point,
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Owns the drag session of a single pointer and turns moves into rectangles.
#[derive(Debug, Clone, Default)]
pub struct CropManipulator {
    classifier: ZoneClassifier,
    min_size: MinCropSize,
    state: DragState,
}

impl CropManipulator {
    #[must_use]
    pub fn new(finger: FingerSize, min_size: MinCropSize) -> Self {
        Self {
            classifier: ZoneClassifier::new(finger),
            min_size,
            state: DragState::Idle,
        }
    }

    #[must_use]
    pub fn classifier(&self) -> &ZoneClassifier {
        &self.classifier
    }

    #[must_use]
    pub fn min_size(&self) -> MinCropSize {
        self.min_size
    }

    pub fn set_min_size(&mut self, min_size: MinCropSize) {
        self.min_size = min_size;
    }

    pub fn set_finger_size(&mut self, finger: FingerSize) {
        self.classifier = ZoneClassifier::new(finger);
    }

    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(session) => Some(session),
        }
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Zone of the active drag, [`Zone::None`] while idle.
    #[must_use]
    pub fn zone(&self) -> Zone {
        self.session().map_or(Zone::None, |session| session.zone)
    }

    /// Starts a drag if `touch` hits a zone of `crop`.
    ///
    /// Returns the zone that was hit. A second touch while a drag is active
    /// is ignored and reported as [`Zone::None`].
    pub fn begin(&mut self, crop: Rect, container: Rect, touch: Point) -> Zone {
        if self.is_dragging() {
            tracing::debug!(?touch, "ignoring touch while a drag is active");
            return Zone::None;
        }

        let zone = self.classifier.classify(crop, touch, container);
        if zone.is_none() {
            return zone;
        }

        if !self.min_size.fits_in(container.size()) {
            tracing::warn!(
                min_width = self.min_size.width(),
                min_height = self.min_size.height(),
                container_width = container.width,
                container_height = container.height,
                "minimum crop size exceeds the container; the container wins"
            );
        }

        tracing::debug!(?zone, ?crop, "crop drag started");
        self.state = DragState::Dragging(DragSession {
            zone,
            rect_before_drag: crop,
            touch_before_drag: touch,
            last_touch: touch,
        });
        zone
    }

    /// Applies the move from `previous` to `current` to `crop`.
    ///
    /// Returns the new rectangle when it differs from `crop`; `None` when the
    /// rectangle did not change or no drag is active.
    pub fn drag(
        &mut self,
        crop: Rect,
        container: Rect,
        current: Point,
        previous: Point,
    ) -> Option<Rect> {
        let DragState::Dragging(session) = &mut self.state else {
            return None;
        };
        session.last_touch = current;

        if container.is_empty() {
            return None;
        }

        let moved = move_rect(session, crop, container, self.min_size, current, current - previous);
        (moved != crop).then_some(moved)
    }

    /// Like [`drag`](Self::drag), using the last seen touch as the previous
    /// position. Useful for hosts that only report absolute cursor positions.
    pub fn drag_to(&mut self, crop: Rect, container: Rect, current: Point) -> Option<Rect> {
        let previous = self.session()?.last_touch;
        self.drag(crop, container, current, previous)
    }

    /// Ends the drag. The last emitted rectangle stays as it is.
    pub fn end(&mut self) -> Option<DragSession> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::Dragging(session) => {
                tracing::debug!(zone = ?session.zone, "crop drag ended");
                Some(session)
            }
        }
    }
}

/// Computes the rectangle produced by moving the zone's edges of `crop` by
/// `translation`, followed by [`clamp_to_drag_bounds`].
#[must_use]
pub fn move_rect(
    session: &DragSession,
    crop: Rect,
    container: Rect,
    min_size: MinCropSize,
    current: Point,
    translation: Vector,
) -> Rect {
    let x_axis = AxisDrag {
        before: Span::horizontal(session.rect_before_drag),
        container: Span::horizontal(container),
        min: min_size.width(),
        touch_start: session.touch_before_drag.x,
        touch_now: current.x,
    };
    let y_axis = AxisDrag {
        before: Span::vertical(session.rect_before_drag),
        container: Span::vertical(container),
        min: min_size.height(),
        touch_start: session.touch_before_drag.y,
        touch_now: current.y,
    };

    let mut x = Span::horizontal(crop);
    let mut y = Span::vertical(crop);

    for edge in session.zone.edges() {
        match edge {
            Edge::Top => y = move_leading_edge(y, translation.y, &y_axis),
            Edge::Bottom => y = move_trailing_edge(y, translation.y, &y_axis),
            Edge::Left => x = move_leading_edge(x, translation.x, &x_axis),
            Edge::Right => x = move_trailing_edge(x, translation.x, &x_axis),
        }
    }

    let x = settle(x, &x_axis);
    let y = settle(y, &y_axis);
    Rect::new(x.start, y.start, x.len, y.len)
}

/// Final clamp applied after every move.
///
/// Holds on its own, whatever the per-edge pass produced: the origin stays
/// inside the container and at least one minimum size before the far edge the
/// drag started with, the size stays at or above the minimum and never
/// reaches past the container. When the minimum does not fit the container,
/// the container wins. The result never has a negative size.
#[must_use]
pub fn clamp_to_drag_bounds(
    rect: Rect,
    rect_before_drag: Rect,
    container: Rect,
    min_size: MinCropSize,
) -> Rect {
    let axis = |span: Span, before: Span, container: Span, min: f32| {
        settle(
            span,
            &AxisDrag {
                before,
                container,
                min,
                touch_start: 0.0,
                touch_now: 0.0,
            },
        )
    };

    let x = axis(
        Span::horizontal(rect),
        Span::horizontal(rect_before_drag),
        Span::horizontal(container),
        min_size.width(),
    );
    let y = axis(
        Span::vertical(rect),
        Span::vertical(rect_before_drag),
        Span::vertical(container),
        min_size.height(),
    );
    Rect::new(x.start, y.start, x.len, y.len)
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Span {
    start: f32,
    len: f32,
}

impl Span {
    fn new(start: f32, len: f32) -> Self {
        Self { start, len }
    }

    fn horizontal(rect: Rect) -> Self {
        Self::new(rect.x, rect.width)
    }

    fn vertical(rect: Rect) -> Self {
        Self::new(rect.y, rect.height)
    }

    fn end(self) -> f32 {
        self.start + self.len
    }
}

/// Per-axis inputs of a move.
struct AxisDrag {
    before: Span,
    container: Span,
    min: f32,
    touch_start: f32,
    touch_now: f32,
}

fn move_leading_edge(span: Span, delta: f32, axis: &AxisDrag) -> Span {
    let mut moved = Span::new(span.start + delta, span.len - delta);

    let point_in_edge = axis.touch_start - axis.before.start;
    let min_stick = axis.container.start + point_in_edge;
    let max_stick = axis.before.end() - axis.min + point_in_edge;

    if axis.touch_now < min_stick || moved.start < axis.container.start {
        moved = Span::new(axis.container.start, axis.before.end() - axis.container.start);
    }
    if axis.touch_now > max_stick || moved.len < axis.min {
        moved = Span::new(axis.before.end() - axis.min, axis.min);
    }

    moved
}

fn move_trailing_edge(span: Span, delta: f32, axis: &AxisDrag) -> Span {
    let mut moved = Span::new(span.start, span.len + delta);

    let point_in_edge = axis.touch_start - axis.before.end();
    let max_stick = axis.container.end() + point_in_edge;
    let min_stick = axis.before.start + axis.min + point_in_edge;

    if axis.touch_now > max_stick || moved.end() > axis.container.end() {
        moved.len = axis.container.end() - moved.start;
    }
    if axis.touch_now < min_stick || moved.len < axis.min {
        moved.len = axis.min;
    }

    moved
}

fn settle(span: Span, axis: &AxisDrag) -> Span {
    let start = span
        .start
        .min(axis.before.end() - axis.min)
        .max(axis.container.start);
    let len = span
        .len
        .max(axis.min)
        .min(axis.container.end() - start)
        .max(0.0);
    Span::new(start, len)
}
