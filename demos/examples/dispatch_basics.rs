// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listener registration, namespaced removal, and cancelation.
//!
//! Run:
//! - `cargo run -p canopy_demos --example dispatch_basics`

use std::rc::Rc;

use canopy_demos::Node;
use canopy_demos::names;
use canopy_dispatch::target::{EventTarget, Listener};
use canopy_event::event::{Event, EventInit};

fn main() {
    let panel: EventTarget<Event<Node>> = EventTarget::new();

    // Two independent subscribers to the same event, addressed by namespace.
    let inspector_key = format!("{}.inspector", names::SELECTION_CHANGED);
    let outline_key = format!("{}.outline", names::SELECTION_CHANGED);

    let inspector: Listener<Event<Node>> = Rc::new(|_panel, _event| {
        println!("  inspector: selection changed");
    });
    let outline: Listener<Event<Node>> = Rc::new(|_panel, _event| {
        println!("  outline: selection changed");
    });
    panel.add_event_listener(&inspector_key, inspector);
    panel.add_event_listener(&outline_key, outline);

    println!("== both subscribers ==");
    let mut event = Event::new(names::SELECTION_CHANGED, EventInit::default());
    panel.dispatch_event(&mut event);

    // The inspector unsubscribes by key alone; the outline is untouched.
    let placeholder: Listener<Event<Node>> = Rc::new(|_panel, _event| {});
    panel.remove_event_listener(&inspector_key, &placeholder);

    println!("== after removing {inspector_key} ==");
    let mut event = Event::new(names::SELECTION_CHANGED, EventInit::default());
    panel.dispatch_event(&mut event);

    // A cancelable close request: any listener may veto it.
    let veto: Listener<Event<Node>> = Rc::new(|_panel, event| {
        println!("  veto: unsaved changes, refusing to close");
        event.prevent_default();
    });
    panel.add_event_listener(names::PANEL_CLOSING, veto);

    let mut closing = Event::new(
        names::PANEL_CLOSING,
        EventInit {
            cancelable: true,
            ..EventInit::default()
        },
    );
    let proceed = panel.dispatch_event(&mut closing);
    println!("== close request ==");
    println!("  proceed with close: {proceed}");
}
