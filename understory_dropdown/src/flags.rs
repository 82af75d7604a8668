// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-dropdown behavior flags and controller-wide configuration.

use crate::attributes;
use crate::host::DropdownHost;

bitflags::bitflags! {
    /// Behaviors a dropdown opts into. Resolved once from markup at setup.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct DropdownFlags: u8 {
        /// Close when a pointer goes down outside the dropdown.
        const CLOSE_ON_OUTSIDE_CLICK = 0b0000_0001;
        /// Close when Escape is pressed, wherever focus is.
        const CLOSE_ON_ESCAPE        = 0b0000_0010;
        /// Shift the content horizontally to keep it inside the viewport.
        const KEEP_IN_VIEWPORT       = 0b0000_0100;
    }
}

impl Default for DropdownFlags {
    fn default() -> Self {
        Self::all()
    }
}

impl DropdownFlags {
    /// Read the flags from `dropdown`'s attributes.
    ///
    /// Each flag stays enabled unless its attribute is exactly `"false"`; any other value,
    /// including an empty one, leaves it on.
    pub fn resolve<H: DropdownHost>(host: &H, dropdown: H::Element) -> Self {
        let mut flags = Self::default();
        for (name, flag) in [
            (attributes::CLOSE_ON_OUTSIDE_CLICK, Self::CLOSE_ON_OUTSIDE_CLICK),
            (attributes::CLOSE_ON_ESCAPE, Self::CLOSE_ON_ESCAPE),
            (attributes::KEEP_IN_VIEWPORT, Self::KEEP_IN_VIEWPORT),
        ] {
            if host.attribute(dropdown, name) == Some(attributes::FALSE) {
                flags.remove(flag);
            }
        }
        flags
    }
}

/// Controller-wide settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Quiet window, in milliseconds, after the last resize before containment re-runs.
    pub resize_delay: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self { resize_delay: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use kurbo::Rect;

    #[test]
    fn all_enabled_without_attributes() {
        let mut doc = Document::new(1000.0);
        let root = doc.root();
        let el = doc.append(root, Rect::ZERO);
        assert_eq!(DropdownFlags::resolve(&doc, el), DropdownFlags::all());
    }

    #[test]
    fn only_exact_false_disables() {
        let mut doc = Document::new(1000.0);
        let root = doc.root();
        let el = doc.append(root, Rect::ZERO);
        doc.set_attribute(el, attributes::CLOSE_ON_ESCAPE, "false");
        doc.set_attribute(el, attributes::KEEP_IN_VIEWPORT, "False");
        doc.set_attribute(el, attributes::CLOSE_ON_OUTSIDE_CLICK, "");
        let flags = DropdownFlags::resolve(&doc, el);
        assert!(!flags.contains(DropdownFlags::CLOSE_ON_ESCAPE));
        assert!(flags.contains(DropdownFlags::KEEP_IN_VIEWPORT));
        assert!(flags.contains(DropdownFlags::CLOSE_ON_OUTSIDE_CLICK));
    }
}
