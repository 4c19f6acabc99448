// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raising payload-bearing events through the trigger adapter.
//!
//! Host code rarely holds a bare dispatch target; it holds component handles
//! that may or may not be wired to one. `TargetSource` resolves that
//! convention, and `trigger` builds and dispatches the event in one call.
//!
//! Run:
//! - `cargo run -p canopy_demos --example trigger_adapter`

use std::rc::Rc;

use canopy_demos::Node;
use canopy_demos::names;
use canopy_dispatch::target::{EventTarget, Listener};
use canopy_dispatch::trigger::{TargetSource, trigger};
use canopy_event::custom::CustomEvent;

/// Per-document load report carried as the event payload.
#[derive(Clone, Debug, PartialEq, Eq)]
struct LoadReport {
    uri: &'static str,
    pages: u32,
}

type DocumentEvent = CustomEvent<Node, LoadReport>;

/// A viewer pane that owns a dispatch target once it has been mounted.
struct Pane {
    target: Option<EventTarget<DocumentEvent>>,
}

impl TargetSource<DocumentEvent> for Pane {
    fn event_target(&self) -> Option<&EventTarget<DocumentEvent>> {
        self.target.as_ref()
    }
}

fn main() {
    let pane = Pane {
        target: Some(EventTarget::new()),
    };

    let listener: Listener<DocumentEvent> = Rc::new(|_target, event| {
        if let Some(report) = event.detail() {
            println!("  loaded {} ({} pages)", report.uri, report.pages);
        }
    });
    pane.target
        .as_ref()
        .expect("pane is mounted")
        .add_event_listener(names::DOCUMENT_LOADED, listener);

    println!("== mounted pane ==");
    let report = LoadReport {
        uri: "doc://guide",
        pages: 12,
    };
    match trigger(&pane, names::DOCUMENT_LOADED, Some(report)) {
        Ok(handled) => println!("  dispatch returned {handled}"),
        Err(error) => println!("  error: {error}"),
    }

    // An unmounted pane exposes no dispatch capability: the one condition the
    // adapter surfaces as an error instead of tolerating silently.
    println!("== unmounted pane ==");
    let detached = Pane { target: None };
    match trigger(&detached, names::DOCUMENT_LOADED, None) {
        Ok(handled) => println!("  dispatch returned {handled}"),
        Err(error) => println!("  error: {error}"),
    }
}
