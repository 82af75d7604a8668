// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Attribute names making up the dropdown markup contract.
//!
//! The open state is persisted on the dropdown root as [`OPEN`]. Flags are enabled unless
//! their attribute holds exactly [`FALSE`].

/// Marks an element as a dropdown root. Presence is enough; the value is ignored.
pub const DROPDOWN: &str = "data-dropdown";

/// Open state of a dropdown root, either [`TRUE`] or [`FALSE`].
pub const OPEN: &str = "data-dropdown-open";

/// Set to [`FALSE`] to keep a dropdown open when the pointer goes down outside it.
pub const CLOSE_ON_OUTSIDE_CLICK: &str = "data-close-on-outside-click";

/// Set to [`FALSE`] to keep a dropdown open when Escape is pressed.
pub const CLOSE_ON_ESCAPE: &str = "data-close-on-esc";

/// Set to [`FALSE`] to disable horizontal viewport containment.
pub const KEEP_IN_VIEWPORT: &str = "data-keep-in-view";

/// Marks the descendant whose clicks toggle the dropdown.
pub const TOGGLE: &str = "data-toggle-dropdown";

/// Marks the descendant that is shifted to stay inside the viewport.
pub const CONTENT: &str = "data-dropdown-content";

/// Attribute value for an enabled flag or an open dropdown.
pub const TRUE: &str = "true";

/// Attribute value for a disabled flag or a closed dropdown.
pub const FALSE: &str = "false";
