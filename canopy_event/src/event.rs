// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event values and their flag state machine.
//!
//! ## Overview
//!
//! [`Event`] is a synchronous, cooperatively mutated event value. Its
//! `bubbles`/`cancelable`/`composed` booleans are fixed at construction from an
//! [`EventInit`], while a small set of internal flags (canceled, stop,
//! immediate stop, passive-listener, dispatch-in-progress) moves forward during
//! a single dispatch pass. [`Event::init_event`] transitions back to a
//! fresh-flags state, and is refused while a dispatch pass is in progress.
//!
//! `target` and `current_target` are node keys assigned by whoever performs
//! dispatch, never by the event itself. The key type `K` is supplied by the
//! application (an id, a slotmap key, an interned handle).
//!
//! ## Flag contracts
//!
//! - [`Event::prevent_default`] sets the canceled flag only if the event is
//!   cancelable and not currently inside a passive-listener context; otherwise
//!   it is silently ignored.
//! - [`Event::stop_propagation`] sets only the stop flag. This model has no
//!   tree to halt, so the flag is observable/informational unless the
//!   integrating dispatcher chooses to honor it.
//! - [`Event::stop_immediate_propagation`] sets both the stop flag and the
//!   immediate-stop flag.
//! - [`Event::default_prevented`] reflects the canceled flag exactly.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_event::event::{Event, EventInit};
//!
//! // A non-cancelable event silently ignores prevent_default.
//! let mut inert: Event<u32> = Event::new("resize", EventInit::default());
//! inert.prevent_default();
//! assert!(!inert.default_prevented());
//!
//! let mut event: Event<u32> = Event::new(
//!     "close",
//!     EventInit {
//!         cancelable: true,
//!         ..EventInit::default()
//!     },
//! );
//! event.prevent_default();
//! assert!(event.default_prevented());
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use bitflags::bitflags;

use crate::path::{PathEntry, visible_path};

bitflags! {
    /// Internal state flags of an [`Event`].
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    struct EventFlags: u8 {
        const INITIALIZED = 1 << 0;
        const STOP_PROPAGATION = 1 << 1;
        const STOP_IMMEDIATE_PROPAGATION = 1 << 2;
        const CANCELED = 1 << 3;
        const IN_PASSIVE_LISTENER = 1 << 4;
        const DISPATCH = 1 << 5;
    }
}

/// Phase of event propagation.
///
/// This model performs no tree traversal, so events sit at [`EventPhase::None`]
/// or [`EventPhase::AtTarget`]; the capturing and bubbling variants exist for
/// integrating dispatchers that maintain their own traversal.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum EventPhase {
    /// Not currently being dispatched.
    #[default]
    None,
    /// Parent-to-target traversal (unused by the built-in dispatcher).
    Capturing,
    /// At the dispatch target.
    AtTarget,
    /// Target-to-parent traversal (unused by the built-in dispatcher).
    Bubbling,
}

/// Recognized construction options for a base [`Event`].
///
/// This is the statically described option schema for plain events: exactly
/// these fields are recognized, and a field left at its default falls back to
/// the kind's default (`false` for all three). Use struct update syntax to set
/// a subset:
///
/// ```
/// use canopy_event::event::EventInit;
///
/// let init = EventInit {
///     cancelable: true,
///     ..EventInit::default()
/// };
/// assert!(!init.bubbles);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct EventInit {
    /// Whether the event is flagged as bubbling.
    pub bubbles: bool,
    /// Whether [`Event::prevent_default`] may set the canceled flag.
    pub cancelable: bool,
    /// Whether the event is flagged as crossing closed-subtree boundaries.
    pub composed: bool,
}

/// A cancelable, optionally reinitializable event value.
///
/// Constructed once per occurrence via [`Event::new`]; flags only move forward
/// during a single dispatch pass, and [`Event::init_event`] resets them while
/// no dispatch is in progress. The event is owned by whichever code constructs
/// and dispatches it; a listener registry never retains it beyond the call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event<K> {
    event_type: String,
    bubbles: bool,
    cancelable: bool,
    composed: bool,
    target: Option<K>,
    current_target: Option<K>,
    phase: EventPhase,
    trusted: bool,
    flags: EventFlags,
    path: Vec<PathEntry<K>>,
}

impl<K: Copy + Eq> Event<K> {
    /// Creates an event of the given type.
    ///
    /// Options absent from `init` (left at their defaults) take the base-event
    /// defaults. The new event starts initialized, untrusted, untargeted, and
    /// with an empty propagation chain.
    #[must_use]
    pub fn new(event_type: impl Into<String>, init: EventInit) -> Self {
        Self {
            event_type: event_type.into(),
            bubbles: init.bubbles,
            cancelable: init.cancelable,
            composed: init.composed,
            target: None,
            current_target: None,
            phase: EventPhase::None,
            trusted: false,
            flags: EventFlags::INITIALIZED,
            path: Vec::new(),
        }
    }

    /// Returns the event's type string.
    #[must_use]
    #[inline]
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Returns whether the event is flagged as bubbling.
    #[must_use]
    #[inline]
    pub fn bubbles(&self) -> bool {
        self.bubbles
    }

    /// Returns whether the event may be canceled.
    #[must_use]
    #[inline]
    pub fn cancelable(&self) -> bool {
        self.cancelable
    }

    /// Returns whether the event is flagged as crossing closed-subtree boundaries.
    #[must_use]
    #[inline]
    pub fn composed(&self) -> bool {
        self.composed
    }

    /// Returns the node the event was originally dispatched to, if assigned.
    #[must_use]
    #[inline]
    pub fn target(&self) -> Option<K> {
        self.target
    }

    /// Assigns the original dispatch target.
    ///
    /// Called by whoever performs dispatch; the event never assigns this
    /// itself.
    #[inline]
    pub fn set_target(&mut self, target: Option<K>) {
        self.target = target;
    }

    /// Returns the node whose listeners are currently being invoked, if assigned.
    #[must_use]
    #[inline]
    pub fn current_target(&self) -> Option<K> {
        self.current_target
    }

    /// Assigns the current dispatch position.
    ///
    /// Called by whoever performs dispatch. [`Event::composed_path`] resolves
    /// visibility from this position.
    #[inline]
    pub fn set_current_target(&mut self, current_target: Option<K>) {
        self.current_target = current_target;
    }

    /// Returns the current propagation phase.
    #[must_use]
    #[inline]
    pub fn event_phase(&self) -> EventPhase {
        self.phase
    }

    /// Sets the propagation phase (driven by the integrating dispatcher).
    #[inline]
    pub fn set_event_phase(&mut self, phase: EventPhase) {
        self.phase = phase;
    }

    /// Returns whether the event was produced by the host rather than
    /// synthesized by application code.
    #[must_use]
    #[inline]
    pub fn is_trusted(&self) -> bool {
        self.trusted
    }

    /// Marks the event as host-produced (or not).
    #[inline]
    pub fn set_trusted(&mut self, trusted: bool) {
        self.trusted = trusted;
    }

    /// Returns whether the event has been initialized.
    ///
    /// Always `true` for events built with [`Event::new`]; reinitialization
    /// keeps it set.
    #[must_use]
    #[inline]
    pub fn initialized(&self) -> bool {
        self.flags.contains(EventFlags::INITIALIZED)
    }

    /// Sets the canceled flag, if permitted.
    ///
    /// The flag is set only when the event is cancelable and not currently in
    /// a passive-listener context; otherwise the call is silently ignored.
    pub fn prevent_default(&mut self) {
        self.set_canceled();
    }

    /// Returns whether a listener canceled the event's default action.
    #[must_use]
    #[inline]
    pub fn default_prevented(&self) -> bool {
        self.flags.contains(EventFlags::CANCELED)
    }

    /// Sets the stop flag.
    ///
    /// There is no tree to halt in this model; the flag is observable through
    /// [`Event::propagation_stopped`] and honored (or not) by the integrating
    /// dispatcher.
    pub fn stop_propagation(&mut self) {
        self.flags.insert(EventFlags::STOP_PROPAGATION);
    }

    /// Returns whether a listener requested that propagation stop.
    #[must_use]
    #[inline]
    pub fn propagation_stopped(&self) -> bool {
        self.flags.contains(EventFlags::STOP_PROPAGATION)
    }

    /// Sets both the stop flag and the immediate-stop flag.
    pub fn stop_immediate_propagation(&mut self) {
        self.flags
            .insert(EventFlags::STOP_PROPAGATION | EventFlags::STOP_IMMEDIATE_PROPAGATION);
    }

    /// Returns whether a listener requested an immediate stop.
    #[must_use]
    #[inline]
    pub fn immediate_propagation_stopped(&self) -> bool {
        self.flags
            .contains(EventFlags::STOP_IMMEDIATE_PROPAGATION)
    }

    /// Returns whether the event is currently in a passive-listener context.
    #[must_use]
    #[inline]
    pub fn in_passive_listener(&self) -> bool {
        self.flags.contains(EventFlags::IN_PASSIVE_LISTENER)
    }

    /// Marks the passive-listener context.
    ///
    /// Set by an integrating dispatcher around passive listener invocations;
    /// while set, [`Event::prevent_default`] is inert.
    pub fn set_in_passive_listener(&mut self, passive: bool) {
        self.flags.set(EventFlags::IN_PASSIVE_LISTENER, passive);
    }

    /// Returns whether a dispatch pass is currently in progress.
    #[must_use]
    #[inline]
    pub fn is_dispatching(&self) -> bool {
        self.flags.contains(EventFlags::DISPATCH)
    }

    /// Marks a dispatch pass in progress (or finished).
    ///
    /// Driven by the dispatcher around its listener pass. While set,
    /// [`Event::init_event`] is refused.
    pub fn set_dispatching(&mut self, dispatching: bool) {
        self.flags.set(EventFlags::DISPATCH, dispatching);
    }

    /// Returns the explicit propagation chain.
    #[must_use]
    #[inline]
    pub fn path(&self) -> &[PathEntry<K>] {
        &self.path
    }

    /// Replaces the explicit propagation chain.
    ///
    /// The chain is supplied by the event's owner before
    /// [`Event::composed_path`] is queried; it is never computed here.
    pub fn set_path(&mut self, path: Vec<PathEntry<K>>) {
        self.path = path;
    }

    /// Computes the chain items observable from the current target.
    ///
    /// Resolved lazily from the explicit chain via [`visible_path`]; this is
    /// not part of dispatch. Returns an empty sequence when the chain is empty
    /// or no current target has been assigned.
    ///
    /// ```
    /// use canopy_event::event::{Event, EventInit};
    /// use canopy_event::path::PathEntry;
    ///
    /// let mut event: Event<&str> = Event::new("select", EventInit::default());
    /// event.set_path(vec![
    ///     PathEntry::new("outer"),
    ///     PathEntry::new("inner"),
    /// ]);
    /// event.set_current_target(Some("inner"));
    /// assert_eq!(event.composed_path(), vec!["outer", "inner"]);
    /// ```
    #[must_use]
    pub fn composed_path(&self) -> Vec<K> {
        match self.current_target {
            Some(current_target) => visible_path(&self.path, current_target),
            None => Vec::new(),
        }
    }

    /// Reinitializes the event for reuse.
    ///
    /// A no-op while a dispatch pass is in progress. Resets the stop,
    /// immediate-stop, and canceled flags, clears the trusted mark and the
    /// original target, and replaces the type and `bubbles`/`cancelable`
    /// options. The propagation chain, `composed` option, current target, and
    /// phase are left as they were.
    ///
    /// ```
    /// use canopy_event::event::{Event, EventInit};
    ///
    /// let mut event: Event<u32> = Event::new(
    ///     "close",
    ///     EventInit {
    ///         cancelable: true,
    ///         ..EventInit::default()
    ///     },
    /// );
    /// event.prevent_default();
    ///
    /// event.init_event("open", false, false);
    /// assert_eq!(event.event_type(), "open");
    /// assert!(!event.default_prevented());
    /// ```
    pub fn init_event(&mut self, event_type: impl Into<String>, bubbles: bool, cancelable: bool) {
        if self.is_dispatching() {
            return;
        }
        self.initialize(event_type, bubbles, cancelable);
    }

    /// Shared reinitialization core, without the dispatch guard.
    pub(crate) fn initialize(
        &mut self,
        event_type: impl Into<String>,
        bubbles: bool,
        cancelable: bool,
    ) {
        self.event_type = event_type.into();
        self.flags.insert(EventFlags::INITIALIZED);
        self.flags.remove(
            EventFlags::STOP_PROPAGATION
                | EventFlags::STOP_IMMEDIATE_PROPAGATION
                | EventFlags::CANCELED,
        );
        self.trusted = false;
        self.target = None;
        self.bubbles = bubbles;
        self.cancelable = cancelable;
    }

    /// The canceled-flag setter shared by [`Event::prevent_default`] and the
    /// legacy return-value shim.
    pub(crate) fn set_canceled(&mut self) {
        if self.cancelable && !self.in_passive_listener() {
            self.flags.insert(EventFlags::CANCELED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cancelable_init() -> EventInit {
        EventInit {
            cancelable: true,
            ..EventInit::default()
        }
    }

    #[test]
    fn new_event_merges_init_against_defaults() {
        let event: Event<u32> = Event::new("load", EventInit::default());
        assert!(!event.bubbles());
        assert!(!event.cancelable());
        assert!(!event.composed());
        assert!(event.initialized());
        assert!(!event.is_trusted());
        assert_eq!(event.event_phase(), EventPhase::None);
        assert_eq!(event.target(), None);
        assert_eq!(event.current_target(), None);
    }

    #[test]
    fn prevent_default_requires_cancelable() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        event.prevent_default();
        assert!(!event.default_prevented());

        let mut event: Event<u32> = Event::new("load", cancelable_init());
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn prevent_default_ignored_in_passive_listener_context() {
        let mut event: Event<u32> = Event::new("scroll", cancelable_init());
        event.set_in_passive_listener(true);
        event.prevent_default();
        assert!(!event.default_prevented());

        event.set_in_passive_listener(false);
        event.prevent_default();
        assert!(event.default_prevented());
    }

    #[test]
    fn stop_propagation_sets_only_the_stop_flag() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        event.stop_propagation();
        assert!(event.propagation_stopped());
        assert!(!event.immediate_propagation_stopped());
    }

    #[test]
    fn stop_immediate_propagation_sets_both_flags() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        event.stop_immediate_propagation();
        assert!(event.propagation_stopped());
        assert!(event.immediate_propagation_stopped());
    }

    #[test]
    fn init_event_resets_flags_and_replaces_options() {
        let mut event: Event<u32> = Event::new("close", cancelable_init());
        event.set_target(Some(7));
        event.set_trusted(true);
        event.prevent_default();
        event.stop_immediate_propagation();

        event.init_event("open", true, false);

        assert_eq!(event.event_type(), "open");
        assert!(event.bubbles());
        assert!(!event.cancelable());
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
        assert!(!event.immediate_propagation_stopped());
        assert!(!event.is_trusted());
        assert_eq!(event.target(), None);
        assert!(event.initialized());
    }

    #[test]
    fn init_event_keeps_current_target_and_path() {
        let mut event: Event<u32> = Event::new("close", EventInit::default());
        event.set_current_target(Some(3));
        event.set_path(vec![PathEntry::new(3)]);

        event.init_event("open", false, false);

        assert_eq!(event.current_target(), Some(3));
        assert_eq!(event.path().len(), 1);
    }

    #[test]
    fn init_event_is_refused_mid_dispatch() {
        let mut event: Event<u32> = Event::new("close", cancelable_init());
        event.prevent_default();
        event.set_dispatching(true);

        event.init_event("open", false, false);

        assert_eq!(event.event_type(), "close");
        assert!(event.default_prevented());

        event.set_dispatching(false);
        event.init_event("open", false, false);
        assert_eq!(event.event_type(), "open");
        assert!(!event.default_prevented());
    }

    #[test]
    fn composed_path_without_current_target_is_empty() {
        let mut event: Event<u32> = Event::new("select", EventInit::default());
        event.set_path(vec![PathEntry::new(1), PathEntry::new(2)]);
        assert!(event.composed_path().is_empty());
    }
}
