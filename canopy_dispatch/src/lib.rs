// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_dispatch --heading-base-level=0

//! Canopy Dispatch: per-target listener registries with namespaced addressing
//! and synchronous dispatch.
//!
//! ## Overview
//!
//! This crate provides the dispatch half of the Canopy primitive:
//! [`EventTarget`](target::EventTarget), a registry mapping event-type strings
//! to ordered listener sequences. Producers register listeners (optionally
//! under a dotted `"type.namespace"` key for independent removal), construct an
//! event value from `canopy_event`, and call
//! [`dispatch_event`](target::EventTarget::dispatch_event); the registry
//! invokes every listener currently in the sequence in registration order and
//! returns `false` iff some listener canceled a cancelable event.
//!
//! There is no implicit shared bus: every registry is explicitly constructed
//! and explicitly passed, so tests get isolated instances.
//!
//! ## Live iteration
//!
//! Listeners receive the dispatching target and may mutate its registry
//! mid-pass; the pass iterates the live sequence, not a snapshot, so such
//! mutations are observable within the same dispatch. See
//! [`EventTarget::dispatch_event`](target::EventTarget::dispatch_event) for
//! the exact semantics, and [`StopHandling`](target::StopHandling) for how the
//! immediate-stop flag is treated between invocations.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use canopy_dispatch::target::{EventTarget, Listener};
//! use canopy_event::event::{Event, EventInit};
//!
//! let target: EventTarget<Event<u32>> = EventTarget::new();
//!
//! let listener: Listener<Event<u32>> = Rc::new(|_target, event| {
//!     event.prevent_default();
//! });
//! target.add_event_listener("close", Rc::clone(&listener));
//!
//! let mut event = Event::new(
//!     "close",
//!     EventInit {
//!         cancelable: true,
//!         ..EventInit::default()
//!     },
//! );
//! // false: a listener canceled the cancelable event.
//! assert!(!target.dispatch_event(&mut event));
//!
//! target.remove_event_listener("close", &listener);
//! let mut event = Event::new("close", EventInit::default());
//! assert!(target.dispatch_event(&mut event));
//! ```
//!
//! ## Concurrency
//!
//! Everything here is single-threaded, fully synchronous, and cooperative;
//! `Rc`/`RefCell` make a registry `!Send`/`!Sync` by construction. A hosting
//! application that shares targets across threads must wrap each mutating call
//! (not a whole dispatch pass) in its own mutual exclusion, so that
//! mid-dispatch add/remove stays observable.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod target;
pub mod trigger;

pub use target::{Dispatchable, EventTarget, Listener, ListenerFn, StopHandling};
pub use trigger::{IncompatibleTargetError, TargetSource, trigger};
