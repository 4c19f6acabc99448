// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_event --heading-base-level=0

//! Canopy Event: cancelable, in-process event values with closed-tree path visibility.
//!
//! ## Overview
//!
//! This crate provides the event value half of the Canopy dispatch primitive:
//! a plain, synchronous event object ([`Event`]) carrying a type string,
//! init-derived flags, and an explicit propagation chain, plus a payload-bearing
//! variant ([`CustomEvent`](custom::CustomEvent)). Events are constructed by
//! whoever raises them, handed to a dispatcher (for example
//! `canopy_dispatch::EventTarget`), and mutated cooperatively by listeners
//! through a small flag state machine:
//!
//! - [`Event::prevent_default`] sets the canceled flag, but only on a
//!   cancelable event outside a passive-listener context.
//! - [`Event::stop_propagation`] and [`Event::stop_immediate_propagation`] set
//!   purely observable stop flags; there is no tree here to halt, so honoring
//!   them is the integrating dispatcher's choice.
//! - [`Event::init_event`] reinitializes an event for reuse, refused while a
//!   dispatch pass is in progress.
//!
//! ## Propagation chains and visibility
//!
//! There is no scene graph in this crate. The owner of an event supplies a flat
//! chain of [`PathEntry`](path::PathEntry) items, where entries may be marked
//! as the root of a closed subtree or as the slot that re-enters one.
//! [`Event::composed_path`] (backed by the pure [`path::visible_path`]) then
//! computes which chain items are observable from the event's current target,
//! without materializing a tree.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_event::event::{Event, EventInit};
//!
//! let mut event: Event<u32> = Event::new(
//!     "refresh",
//!     EventInit {
//!         cancelable: true,
//!         ..EventInit::default()
//!     },
//! );
//!
//! assert_eq!(event.event_type(), "refresh");
//! assert!(!event.default_prevented());
//!
//! // A listener objects to the default action.
//! event.prevent_default();
//! assert!(event.default_prevented());
//! ```
//!
//! ## Integration with Canopy
//!
//! - `canopy_dispatch` routes these values through per-target listener
//!   registries and returns `!default_prevented()` from its dispatch pass.
//! - Applications that need the property-style surface of older event APIs can
//!   enable the `legacy` feature for the `legacy::LegacyEvent` shim.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod custom;
pub mod event;
#[cfg(feature = "legacy")]
pub mod legacy;
pub mod path;

pub use custom::{CustomEvent, CustomEventInit};
pub use event::{Event, EventInit, EventPhase};
pub use path::PathEntry;
