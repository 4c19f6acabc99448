// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end flows across the event value, the registry, and the adapter.

use std::cell::RefCell;
use std::rc::Rc;

use canopy_dispatch::target::{EventTarget, Listener, StopHandling};
use canopy_dispatch::trigger::{IncompatibleTargetError, TargetSource, trigger};
use canopy_event::custom::{CustomEvent, CustomEventInit};
use canopy_event::event::{Event, EventInit, EventPhase};
use canopy_event::path::PathEntry;

type PanelEvent = CustomEvent<u32, &'static str>;

struct Panel {
    target: Option<EventTarget<PanelEvent>>,
}

impl TargetSource<PanelEvent> for Panel {
    fn event_target(&self) -> Option<&EventTarget<PanelEvent>> {
        self.target.as_ref()
    }
}

#[test]
fn custom_events_flow_through_a_panel_target() {
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let panel = Panel {
        target: Some(EventTarget::new()),
    };
    let target = panel.target.as_ref().expect("panel is wired");

    let recorder: Listener<PanelEvent> = {
        let seen = Rc::clone(&seen);
        Rc::new(move |_target, event| {
            if let Some(detail) = event.detail() {
                seen.borrow_mut().push(detail);
            }
        })
    };
    target.add_event_listener("status.recorder", recorder);

    assert_eq!(trigger(&panel, "status", Some("ready")), Ok(true));
    assert_eq!(trigger(&panel, "status", Some("busy")), Ok(true));
    assert_eq!(*seen.borrow(), vec!["ready", "busy"]);

    // Namespaced removal detaches the recorder without holding the listener.
    let unused: Listener<PanelEvent> = Rc::new(|_target, _event| {});
    target.remove_event_listener("status.recorder", &unused);
    assert_eq!(trigger(&panel, "status", Some("late")), Ok(true));
    assert_eq!(*seen.borrow(), vec!["ready", "busy"]);
}

#[test]
fn unwired_panel_surfaces_the_adapter_error() {
    let panel = Panel { target: None };
    assert_eq!(
        trigger(&panel, "status", Some("ready")),
        Err(IncompatibleTargetError)
    );
}

#[test]
fn veto_flow_reports_cancellation_through_trigger() {
    let panel = Panel {
        target: Some(EventTarget::new()),
    };
    let target = panel.target.as_ref().expect("panel is wired");

    let veto: Listener<PanelEvent> = Rc::new(|_target, event| event.prevent_default());
    target.add_event_listener("closing", veto);

    // The adapter constructs cancelable events, so the veto is effective.
    assert_eq!(trigger(&panel, "closing", None), Ok(false));
}

#[test]
fn dispatched_event_resolves_visibility_from_its_assigned_position() {
    let target: EventTarget<Event<u32>> = EventTarget::new();

    let observed: Rc<RefCell<Vec<u32>>> = Rc::new(RefCell::new(Vec::new()));
    let observer: Listener<Event<u32>> = {
        let observed = Rc::clone(&observed);
        Rc::new(move |_target, event| {
            *observed.borrow_mut() = event.composed_path();
        })
    };
    target.add_event_listener("activate", observer);

    let mut event = Event::new("activate", EventInit::default());
    event.set_path(vec![
        PathEntry::new(1),
        PathEntry::closed_slot(2),
        PathEntry::closed_root(3),
        PathEntry::new(4),
    ]);
    // The dispatching host assigns the position; the registry does not.
    event.set_target(Some(4));
    event.set_current_target(Some(4));
    event.set_event_phase(EventPhase::AtTarget);

    assert!(target.dispatch_event(&mut event));
    assert_eq!(*observed.borrow(), vec![1, 4]);
    assert_eq!(event.event_phase(), EventPhase::AtTarget);
}

#[test]
fn enforce_policy_composes_with_custom_events() {
    let seen: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    let target: EventTarget<PanelEvent> =
        EventTarget::with_stop_handling(StopHandling::Enforce);

    let first: Listener<PanelEvent> = {
        let seen = Rc::clone(&seen);
        Rc::new(move |_target, event| {
            seen.borrow_mut().push("first");
            event.stop_immediate_propagation();
        })
    };
    let second: Listener<PanelEvent> = {
        let seen = Rc::clone(&seen);
        Rc::new(move |_target, _event| seen.borrow_mut().push("second"))
    };
    target.add_event_listener("status", first);
    target.add_event_listener("status", second);

    let mut event = PanelEvent::new(
        "status",
        CustomEventInit {
            detail: Some("ready"),
            ..CustomEventInit::default()
        },
    );
    assert!(target.dispatch_event(&mut event));
    assert_eq!(*seen.borrow(), vec!["first"]);
}
