// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drive a couple of dropdowns through a scripted session.
//!
//! A toolbar holds two menus; the right-hand one would spill past the viewport when opened.
//! The session clicks, resizes the window in a burst, presses Escape, and clicks outside,
//! printing the document state as it goes.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example dropdown_viewport`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_dropdown::document::{Document, ElementId};
use understory_dropdown::{DropdownController, DropdownHost, Key, attributes};

/// Build a dropdown whose button sits at `x` and whose panel is `panel_width` wide.
fn menu(doc: &mut Document, x: f64, panel_width: f64) -> (ElementId, ElementId, ElementId) {
    let root = doc.root();
    let menu = doc.append(root, Rect::new(x, 0.0, x + 120.0, 32.0));
    doc.set_attribute(menu, attributes::DROPDOWN, "");
    let button = doc.append(menu, Rect::new(x, 0.0, x + 120.0, 32.0));
    doc.set_attribute(button, attributes::TOGGLE, "");
    let panel = doc.append(menu, Rect::new(x, 32.0, x + panel_width, 300.0));
    doc.set_attribute(panel, attributes::CONTENT, "");
    (menu, button, panel)
}

fn report(label: &str, doc: &Document, ctl: &DropdownController<ElementId>) {
    println!("{label}");
    for &d in ctl.dropdowns() {
        let panel = doc.find_marked(d, attributes::CONTENT);
        let rect = panel.map(|p| doc.bounding_rect(p));
        println!("  {d:?}: open={} panel={rect:?}", ctl.is_open(doc, d));
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut doc = Document::new(1280.0);
    let (_file, file_button, _) = menu(&mut doc, 16.0, 240.0);
    let (_account, account_button, _) = menu(&mut doc, 1140.0, 280.0);

    let mut ctl = DropdownController::new();
    for (dropdown, err) in ctl.init(&mut doc) {
        eprintln!("{dropdown:?}: {err}");
    }
    report("initial", &doc, &ctl);

    ctl.on_click(&mut doc, account_button);
    report("account opened", &doc, &ctl);

    // A resize burst: containment runs once, 100ms after the last event.
    let mut now = 0;
    for width in [1200.0, 1100.0, 1024.0] {
        doc.set_viewport_width(width);
        ctl.on_resize(now);
        ctl.on_tick(&mut doc, now);
        now += 16;
    }
    if let Some(deadline) = ctl.next_deadline() {
        let adjusted = ctl.on_tick(&mut doc, deadline);
        println!("resize settled at {deadline}ms, adjusted {adjusted:?}");
    }
    report("after resize", &doc, &ctl);

    ctl.on_key_down(&mut doc, Key::Escape);
    report("escape", &doc, &ctl);

    ctl.on_click(&mut doc, file_button);
    ctl.on_pointer_down(&mut doc, None, Point::new(640.0, 600.0));
    report("file opened, then clicked outside", &doc, &ctl);
}
