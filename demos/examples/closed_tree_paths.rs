// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path visibility across closed encapsulation boundaries.
//!
//! The viewer embeds a third-party widget whose internals are closed: its
//! subtree appears in the propagation chain, but only the widget's own chain
//! position should be observable from outside. This demo builds one flat chain
//! and resolves it from positions inside and outside the closed region.
//!
//! Run:
//! - `cargo run -p canopy_demos --example closed_tree_paths`

use canopy_demos::Node;
use canopy_event::event::{Event, EventInit};
use canopy_event::path::PathEntry;

const APP: Node = Node(1);
const EMBED_SLOT: Node = Node(2);
const WIDGET_ROOT: Node = Node(3);
const WIDGET_BUTTON: Node = Node(4);

fn labelled(node: Node) -> &'static str {
    match node {
        APP => "app",
        EMBED_SLOT => "embed-slot",
        WIDGET_ROOT => "widget-root",
        WIDGET_BUTTON => "widget-button",
        _ => "?",
    }
}

fn show(label: &str, path: &[Node]) {
    let names: Vec<&str> = path.iter().copied().map(labelled).collect();
    println!("  from {label}: {names:?}");
}

fn main() {
    let mut event: Event<Node> = Event::new("activate", EventInit::default());
    event.set_path(vec![
        PathEntry::new(APP),
        PathEntry::closed_slot(EMBED_SLOT),
        PathEntry::closed_root(WIDGET_ROOT),
        PathEntry::new(WIDGET_BUTTON),
    ]);

    println!("== observable chains ==");

    // From inside the widget, the whole chain is visible.
    event.set_current_target(Some(WIDGET_ROOT));
    show("widget-root", &event.composed_path());

    // From past the widget, its interior is hidden but the app beyond the
    // fully crossed region stays visible.
    event.set_current_target(Some(WIDGET_BUTTON));
    show("widget-button", &event.composed_path());

    // With no current position there is nothing to observe from.
    event.set_current_target(None);
    show("nowhere", &event.composed_path());
}
