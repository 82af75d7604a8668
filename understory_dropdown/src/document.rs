// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small in-memory document implementing [`DropdownHost`].
//!
//! Elements form a tree rooted at [`Document::root`]. Each element has string attributes,
//! layout bounds in viewport coordinates, and a translation. Measured bounds are the layout
//! bounds offset by the element's own translation and those of its ancestors, the way a CSS
//! `transform: translate(..)` moves a whole subtree.
//!
//! This is enough to drive the controller in tests, demos, and headless tooling. It does not
//! perform layout.

use alloc::borrow::ToOwned;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Rect, Vec2};
use smallvec::SmallVec;

use crate::attributes;
use crate::host::DropdownHost;

/// Identifier for an element in a [`Document`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(u32);

impl ElementId {
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Documents never approach u32::MAX elements."
    )]
    const fn new(idx: usize) -> Self {
        Self(idx as u32)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug)]
struct Element {
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attributes: SmallVec<[(String, String); 4]>,
    bounds: Rect,
    translation: Vec2,
}

impl Element {
    fn new(parent: Option<ElementId>, bounds: Rect) -> Self {
        Self {
            parent,
            children: Vec::new(),
            attributes: SmallVec::new(),
            bounds,
            translation: Vec2::ZERO,
        }
    }
}

/// In-memory element tree with a fixed-width viewport.
#[derive(Clone, Debug)]
pub struct Document {
    elements: Vec<Element>,
    viewport_width: f64,
}

impl Document {
    /// Create a document containing only a root element spanning the viewport width.
    pub fn new(viewport_width: f64) -> Self {
        let root = Element::new(None, Rect::new(0.0, 0.0, viewport_width, 0.0));
        Self {
            elements: vec![root],
            viewport_width,
        }
    }

    /// The root element.
    pub const fn root(&self) -> ElementId {
        ElementId(0)
    }

    /// Append a new child of `parent` with the given layout bounds.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this document.
    pub fn append(&mut self, parent: ElementId, bounds: Rect) -> ElementId {
        let id = ElementId::new(self.elements.len());
        self.elements.push(Element::new(Some(parent), bounds));
        self.elements[parent.idx()].children.push(id);
        id
    }

    /// Parent of `element`, or `None` for the root.
    pub fn parent_of(&self, element: ElementId) -> Option<ElementId> {
        self.elements[element.idx()].parent
    }

    /// Children of `element` in insertion order.
    pub fn children_of(&self, element: ElementId) -> &[ElementId] {
        &self.elements[element.idx()].children
    }

    /// Set attribute `name` on `element`.
    pub fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        let attrs = &mut self.elements[element.idx()].attributes;
        if let Some((_, v)) = attrs.iter_mut().find(|(n, _)| n == name) {
            value.clone_into(v);
        } else {
            attrs.push((name.to_string(), value.to_string()));
        }
    }

    /// Remove attribute `name` from `element`, returning its previous value.
    pub fn remove_attribute(&mut self, element: ElementId, name: &str) -> Option<String> {
        let attrs = &mut self.elements[element.idx()].attributes;
        let pos = attrs.iter().position(|(n, _)| n == name)?;
        Some(attrs.remove(pos).1)
    }

    /// Value of attribute `name` on `element`.
    pub fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        self.elements[element.idx()]
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether `element` has attribute `name`, whatever its value.
    pub fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.attribute(element, name).is_some()
    }

    /// Layout bounds of `element`, before any translation.
    pub fn layout_bounds(&self, element: ElementId) -> Rect {
        self.elements[element.idx()].bounds
    }

    /// Replace the layout bounds of `element`.
    pub fn set_layout_bounds(&mut self, element: ElementId, bounds: Rect) {
        self.elements[element.idx()].bounds = bounds;
    }

    /// Translation applied directly to `element`.
    pub fn translation(&self, element: ElementId) -> Vec2 {
        self.elements[element.idx()].translation
    }

    /// Change the viewport width, as a window resize would.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    /// Pre-order traversal of the subtree under `root`, excluding `root`.
    fn descendants(&self, root: ElementId) -> impl Iterator<Item = ElementId> + '_ {
        let mut stack: Vec<ElementId> = self.children_of(root).iter().rev().copied().collect();
        core::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(self.children_of(next).iter().rev().copied());
            Some(next)
        })
    }

    fn accumulated_translation(&self, element: ElementId) -> Vec2 {
        let mut total = Vec2::ZERO;
        let mut cur = Some(element);
        while let Some(id) = cur {
            total += self.elements[id.idx()].translation;
            cur = self.parent_of(id);
        }
        total
    }
}

impl DropdownHost for Document {
    type Element = ElementId;

    fn dropdowns(&self) -> Vec<ElementId> {
        let root = self.root();
        core::iter::once(root)
            .chain(self.descendants(root))
            .filter(|&id| self.has_attribute(id, attributes::DROPDOWN))
            .collect()
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<&str> {
        Self::attribute(self, element, name)
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) {
        Self::set_attribute(self, element, name, value);
    }

    fn find_marked(&self, root: ElementId, marker: &str) -> Option<ElementId> {
        self.descendants(root).find(|&id| self.has_attribute(id, marker))
    }

    fn contains(&self, ancestor: ElementId, node: ElementId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent_of(id);
        }
        false
    }

    fn bounding_rect(&self, element: ElementId) -> Rect {
        self.layout_bounds(element) + self.accumulated_translation(element)
    }

    fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    fn set_translation(&mut self, element: ElementId, translation: Vec2) {
        self.elements[element.idx()].translation = translation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_replace_and_remove() {
        let mut doc = Document::new(100.0);
        let root = doc.root();
        doc.set_attribute(root, "a", "1");
        doc.set_attribute(root, "a", "2");
        assert_eq!(doc.attribute(root, "a"), Some("2"));
        assert_eq!(doc.remove_attribute(root, "a").as_deref(), Some("2"));
        assert!(!doc.has_attribute(root, "a"));
    }

    #[test]
    fn dropdowns_in_document_order() {
        let mut doc = Document::new(100.0);
        let root = doc.root();
        let a = doc.append(root, Rect::ZERO);
        let a_inner = doc.append(a, Rect::ZERO);
        let b = doc.append(root, Rect::ZERO);
        for id in [b, a_inner, a] {
            doc.set_attribute(id, attributes::DROPDOWN, "");
        }
        assert_eq!(doc.dropdowns(), vec![a, a_inner, b]);
    }

    #[test]
    fn find_marked_skips_root_and_searches_deep() {
        let mut doc = Document::new(100.0);
        let root = doc.root();
        let outer = doc.append(root, Rect::ZERO);
        doc.set_attribute(outer, "m", "");
        let wrapper = doc.append(outer, Rect::ZERO);
        let deep = doc.append(wrapper, Rect::ZERO);
        doc.set_attribute(deep, "m", "");
        assert_eq!(doc.find_marked(outer, "m"), Some(deep));
        assert_eq!(doc.find_marked(deep, "m"), None);
    }

    #[test]
    fn contains_is_inclusive() {
        let mut doc = Document::new(100.0);
        let root = doc.root();
        let a = doc.append(root, Rect::ZERO);
        let b = doc.append(a, Rect::ZERO);
        let c = doc.append(root, Rect::ZERO);
        assert!(doc.contains(a, a));
        assert!(doc.contains(a, b));
        assert!(!doc.contains(b, a));
        assert!(!doc.contains(a, c));
    }

    #[test]
    fn bounding_rect_includes_ancestor_translation() {
        let mut doc = Document::new(100.0);
        let root = doc.root();
        let panel = doc.append(root, Rect::new(10.0, 0.0, 50.0, 20.0));
        let item = doc.append(panel, Rect::new(15.0, 5.0, 45.0, 10.0));
        doc.set_translation(panel, Vec2::new(-5.0, 0.0));
        assert_eq!(doc.bounding_rect(panel), Rect::new(5.0, 0.0, 45.0, 20.0));
        assert_eq!(doc.bounding_rect(item), Rect::new(10.0, 5.0, 40.0, 10.0));
        assert_eq!(doc.layout_bounds(panel), Rect::new(10.0, 0.0, 50.0, 20.0));
    }
}
