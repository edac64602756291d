// SPDX-License-Identifier: MPL-2.0
//! Rectangle fitting, scaling and centering helpers.

use super::types::{Rect, Size};

/// Returns `a`'s size positioned so it is centered in `b`.
///
/// The origin is relative to `b`'s own coordinate space (`b.origin` is not
/// added) and is not clamped: a rectangle bigger than `b` gets a negative
/// origin.
#[must_use]
pub fn center_rect(a: Rect, within: Rect) -> Rect {
    Rect::new(
        (within.width - a.width) / 2.0,
        (within.height - a.height) / 2.0,
        a.width,
        a.height,
    )
}

/// Scale that makes `a` fit inside `into` while preserving its aspect ratio.
///
/// Callers clamp to `1.0` themselves when upscaling is unwanted.
#[must_use]
pub fn fit_scale(a: Rect, into: Rect) -> f32 {
    (into.height / a.height).min(into.width / a.width)
}

/// Scale that makes `a` cover `into` while preserving its aspect ratio.
#[must_use]
pub fn fill_scale(a: Rect, into: Rect) -> f32 {
    (into.height / a.height).max(into.width / a.width)
}

/// Moves and shrinks `a` so it lies within `into`, never going below `min`.
///
/// Each axis is handled independently: the size is first raised to the
/// minimum and the origin pulled inside `into`; if the far edge still
/// overflows, either the size shrinks to fit or, when even the minimum would
/// not fit from that origin, the rectangle snaps to the minimum against the
/// far edge.
#[must_use]
pub fn fit_with_min_size(a: Rect, into: Rect, min: Size) -> Rect {
    let (x, width) = fit_axis(a.x, a.width, into.x, into.max_x(), min.width);
    let (y, height) = fit_axis(a.y, a.height, into.y, into.max_y(), min.height);
    Rect::new(x, y, width, height)
}

fn fit_axis(origin: f32, size: f32, bound_start: f32, bound_end: f32, min: f32) -> (f32, f32) {
    let mut size = size.max(min);
    let mut origin = origin.max(bound_start);

    if origin + size > bound_end {
        if bound_end - min < origin {
            size = min;
            origin = bound_end - size;
        } else {
            size = bound_end - origin;
        }
    }

    (origin, size)
}

/// Rounds `value` up to the next multiple of one half.
#[must_use]
pub fn ceil_to_half(value: f32) -> f32 {
    (value * 2.0).ceil() / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn center_rect_places_smaller_rect_in_middle() {
        let outer = Rect::new(0.0, 0.0, 500.0, 300.0);
        let inner = Rect::new(0.0, 0.0, 100.0, 200.0);
        assert_eq!(center_rect(inner, outer), Rect::new(200.0, 50.0, 100.0, 200.0));
    }

    #[test]
    fn center_rect_allows_negative_origin() {
        let outer = Rect::new(0.0, 0.0, 500.0, 300.0);
        let inner = Rect::new(0.0, 0.0, 800.0, 500.0);
        assert_eq!(
            center_rect(inner, outer),
            Rect::new(-150.0, -100.0, 800.0, 500.0)
        );
    }

    #[test]
    fn fit_scale_picks_limiting_axis() {
        let scale = fit_scale(
            Rect::new(0.0, 0.0, 500.0, 300.0),
            Rect::new(0.0, 0.0, 100.0, 200.0),
        );
        assert_abs_diff_eq!(scale, 0.2, epsilon = F32_EPSILON);
    }

    #[test]
    fn fill_scale_picks_covering_axis() {
        let scale = fill_scale(
            Rect::new(0.0, 0.0, 100.0, 200.0),
            Rect::new(0.0, 0.0, 500.0, 300.0),
        );
        assert_abs_diff_eq!(scale, 5.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn fit_with_min_size_pulls_rect_inside_and_shrinks() {
        let fitted = fit_with_min_size(
            Rect::new(-20.0, 150.0, 100.0, 200.0),
            Rect::new(0.0, 0.0, 500.0, 300.0),
            Size::new(150.0, 150.0),
        );
        assert_eq!(fitted, Rect::new(0.0, 150.0, 150.0, 150.0));
    }

    #[test]
    fn fit_with_min_size_snaps_to_far_edge_when_minimum_overflows() {
        let fitted = fit_with_min_size(
            Rect::new(280.0, 0.0, 10.0, 50.0),
            Rect::new(0.0, 0.0, 300.0, 300.0),
            Size::new(40.0, 40.0),
        );
        assert_eq!(fitted, Rect::new(260.0, 0.0, 40.0, 50.0));
    }

    #[test]
    fn fit_with_min_size_keeps_valid_rect_untouched() {
        let rect = Rect::new(10.0, 10.0, 100.0, 100.0);
        let fitted = fit_with_min_size(
            rect,
            Rect::new(0.0, 0.0, 300.0, 300.0),
            Size::new(30.0, 30.0),
        );
        assert_eq!(fitted, rect);
    }

    #[test]
    fn fit_with_min_size_respects_offset_container() {
        let fitted = fit_with_min_size(
            Rect::new(0.0, 0.0, 500.0, 20.0),
            Rect::new(15.0, 15.0, 200.0, 200.0),
            Size::new(30.0, 30.0),
        );
        assert_eq!(fitted, Rect::new(15.0, 15.0, 200.0, 30.0));
    }

    #[test]
    fn ceil_to_half_rounds_up() {
        assert_eq!(ceil_to_half(10.0), 10.0);
        assert_eq!(ceil_to_half(10.1), 10.5);
        assert_eq!(ceil_to_half(10.5), 10.5);
        assert_eq!(ceil_to_half(10.6), 11.0);
    }
}
