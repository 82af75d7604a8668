// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Dropdown: headless dropdown behavior.
//!
//! ## Overview
//!
//! This crate toggles dropdowns open and closed, closes them on outside pointer
//! interaction or Escape, and shifts their content horizontally so it stays inside the
//! viewport. It renders nothing and owns no document.
//! Instead, the host implements [`DropdownHost`] over its element tree and forwards input
//! events to a [`DropdownController`].
//!
//! ## Markup contract
//!
//! Dropdowns are described with attributes (see [`attributes`]):
//!
//! - A root marked [`DROPDOWN`](attributes::DROPDOWN) whose [`OPEN`](attributes::OPEN)
//!   attribute holds `"true"` or `"false"`. A missing open state is written as `"false"`.
//! - One descendant marked [`TOGGLE`](attributes::TOGGLE); clicks inside it toggle the dropdown.
//! - One descendant marked [`CONTENT`](attributes::CONTENT); this is what gets shifted.
//! - Optional opt-outs: [`CLOSE_ON_OUTSIDE_CLICK`](attributes::CLOSE_ON_OUTSIDE_CLICK),
//!   [`CLOSE_ON_ESCAPE`](attributes::CLOSE_ON_ESCAPE), and
//!   [`KEEP_IN_VIEWPORT`](attributes::KEEP_IN_VIEWPORT) set to `"false"`.
//!
//! Flags are read once per dropdown at setup into [`DropdownFlags`].
//!
//! ## Events
//!
//! - [`DropdownController::on_click`]: toggles dropdowns whose toggle contains the target.
//! - [`DropdownController::on_pointer_down`]: closes open dropdowns the pointer landed outside of.
//! - [`DropdownController::on_key_down`]: Escape closes every open dropdown that allows it.
//! - [`DropdownController::on_resize`] and [`DropdownController::on_tick`]: re-run containment
//!   once the viewport has stopped resizing for [`ControllerConfig::resize_delay`] milliseconds.
//!
//! ## Containment
//!
//! [`compute_shift`] is the pure geometry behind [`DropdownController::keep_in_viewport`].
//! It always starts from the content's unshifted position, so repeated calls do not drift.
//! Only horizontal overflow is corrected.
//!
//! ## Example
//!
//! ```
//! use kurbo::Rect;
//! use understory_dropdown::document::Document;
//! use understory_dropdown::{attributes, DropdownController, DropdownHost, Key};
//!
//! let mut doc = Document::new(1000.0);
//! let root = doc.root();
//! let menu = doc.append(root, Rect::new(900.0, 0.0, 980.0, 30.0));
//! doc.set_attribute(menu, attributes::DROPDOWN, "");
//! let button = doc.append(menu, Rect::new(900.0, 0.0, 980.0, 30.0));
//! doc.set_attribute(button, attributes::TOGGLE, "");
//! let panel = doc.append(menu, Rect::new(900.0, 30.0, 1100.0, 200.0));
//! doc.set_attribute(panel, attributes::CONTENT, "");
//!
//! let mut dropdowns = DropdownController::new();
//! assert!(dropdowns.init(&mut doc).is_empty());
//! assert_eq!(doc.attribute(menu, attributes::OPEN), Some("false"));
//!
//! // Clicking the button opens the menu and pulls the panel back into view.
//! dropdowns.on_click(&mut doc, button);
//! assert!(dropdowns.is_open(&doc, menu));
//! assert_eq!(doc.bounding_rect(panel).x1, 1000.0);
//!
//! // Escape closes it again.
//! dropdowns.on_key_down(&mut doc, Key::Escape);
//! assert!(!dropdowns.is_open(&doc, menu));
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: for `no_std` builds that rely on `libm` for floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod attributes;
pub mod document;

mod containment;
mod controller;
mod error;
mod flags;
mod host;

pub use containment::compute_shift;
pub use controller::{Affected, DropdownController, Key};
pub use error::SetupError;
pub use flags::{ControllerConfig, DropdownFlags};
pub use host::DropdownHost;
