// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document seam the controller reads from and writes to.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Rect, Vec2};

/// Read/write access to the document hosting dropdowns.
///
/// Implement this over a browser DOM binding, a retained widget tree, or use the in-memory
/// [`Document`](crate::document::Document). All geometry is in viewport coordinates.
pub trait DropdownHost {
    /// Small copyable handle for an element.
    type Element: Copy + Eq + Hash + Debug;

    /// Every element carrying [`attributes::DROPDOWN`](crate::attributes::DROPDOWN), in document order.
    fn dropdowns(&self) -> Vec<Self::Element>;

    /// Value of attribute `name` on `element`, if present.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<&str>;

    /// Set attribute `name` on `element`, replacing any previous value.
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// First descendant of `root` (excluding `root` itself) carrying attribute `marker`.
    fn find_marked(&self, root: Self::Element, marker: &str) -> Option<Self::Element>;

    /// Whether `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: Self::Element, node: Self::Element) -> bool;

    /// Measured bounds of `element`, including any translation applied to it or its ancestors.
    fn bounding_rect(&self, element: Self::Element) -> Rect;

    /// Width of the viewport, excluding scrollbars.
    fn viewport_width(&self) -> f64;

    /// Replace the 2D translation applied to `element`.
    fn set_translation(&mut self, element: Self::Element, translation: Vec2);
}
