// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal viewport containment.

use kurbo::{Rect, Vec2};

/// Shift that keeps an element horizontally inside `[0, viewport_width]`.
///
/// `rect` is the element's measured bounds, which already include `last_shift`.
/// The result replaces `last_shift`; it is derived from the unshifted position on every
/// call rather than accumulated.
///
/// - Overflowing on the left: shift right by exactly the overflow.
/// - Overflowing on the right: shift left to align the right edges, but never so far that
///   the left edge crosses zero. An element wider than the viewport ends up left-aligned.
/// - Otherwise: no shift.
///
/// The vertical component is always zero.
pub fn compute_shift(rect: Rect, last_shift: Vec2, viewport_width: f64) -> Vec2 {
    let left = rect.x0 - last_shift.x;
    let width = rect.width();

    if left < 0.0 {
        Vec2::new(-left, 0.0)
    } else if left + width > viewport_width {
        let furthest = if left < 0.0 { left } else { -left };
        let desired = viewport_width - (left + width);
        Vec2::new(furthest.max(desired), 0.0)
    } else {
        Vec2::ZERO
    }
}
