// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-target listener registry and its synchronous dispatch pass.
//!
//! ## Addressing
//!
//! Listeners are registered under plain event-type strings, or under a dotted
//! `"type.namespace"` key (a `.` at byte position 1 or later). A namespaced
//! registration behaves exactly like a plain registration under the substring
//! before the first dot, with one addition: the registry remembers the full
//! dotted key so the listener can later be removed by key alone, without the
//! caller holding on to it. A type string starting with a dot is an ordinary
//! plain type; an empty type string is ignored.
//!
//! ## Removal
//!
//! Listener identity is `Rc` pointer identity. Plain removal drops the first
//! matching occurrence only; namespaced removal drops the remembered listener
//! for that exact key. Unknown types, keys, and listeners are silent no-ops.
//!
//! ## Dispatch
//!
//! [`EventTarget::dispatch_event`] invokes every listener currently in the
//! type's sequence, in registration order, passing the target and the event.
//! The pass iterates the live sequence, so a listener that mutates the
//! registry affects the same in-progress iteration. The return value is the
//! negation of the event's canceled flag.

use alloc::rc::Rc;
use alloc::string::String;
use core::cell::RefCell;

use hashbrown::HashMap;
use smallvec::SmallVec;

use canopy_event::custom::CustomEvent;
use canopy_event::event::Event;

/// The callable shape of a listener: the dispatching target and the event.
pub type ListenerFn<E> = dyn Fn(&EventTarget<E>, &mut E);

/// A registered listener. Identity (for removal) is `Rc` pointer identity.
pub type Listener<E> = Rc<ListenerFn<E>>;

/// Per-type listener sequence. Insertion order is significant and duplicates
/// are permitted.
type ListenerSeq<E> = SmallVec<[Listener<E>; 2]>;

/// The capability surface the registry requires of an event value.
///
/// Implemented for [`Event`] and [`CustomEvent`]; a toolkit with its own event
/// wrapper implements this to route it through an [`EventTarget`].
pub trait Dispatchable {
    /// The type string used to select the listener sequence.
    fn event_type(&self) -> &str;

    /// Whether a listener canceled the event's default action.
    fn default_prevented(&self) -> bool;

    /// Whether a listener requested an immediate stop.
    fn immediate_propagation_stopped(&self) -> bool;

    /// Whether a dispatch pass is currently in progress.
    fn is_dispatching(&self) -> bool;

    /// Marks a dispatch pass in progress (or finished).
    fn set_dispatching(&mut self, dispatching: bool);
}

impl<K: Copy + Eq> Dispatchable for Event<K> {
    fn event_type(&self) -> &str {
        self.event_type()
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented()
    }

    fn immediate_propagation_stopped(&self) -> bool {
        self.immediate_propagation_stopped()
    }

    fn is_dispatching(&self) -> bool {
        self.is_dispatching()
    }

    fn set_dispatching(&mut self, dispatching: bool) {
        self.set_dispatching(dispatching);
    }
}

impl<K: Copy + Eq, D> Dispatchable for CustomEvent<K, D> {
    fn event_type(&self) -> &str {
        self.event_type()
    }

    fn default_prevented(&self) -> bool {
        self.default_prevented()
    }

    fn immediate_propagation_stopped(&self) -> bool {
        self.base().immediate_propagation_stopped()
    }

    fn is_dispatching(&self) -> bool {
        self.base().is_dispatching()
    }

    fn set_dispatching(&mut self, dispatching: bool) {
        self.base_mut().set_dispatching(dispatching);
    }
}

/// How the dispatch pass treats the immediate-stop flag between invocations.
///
/// Some existing event consumers rely on the pass running to completion even
/// after a listener requested an immediate stop, observing the flag afterward
/// instead. [`StopHandling::Observe`] keeps that behavior;
/// [`StopHandling::Enforce`] exits the pass as soon as the flag is seen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum StopHandling {
    /// Record the flag only; the pass runs to completion.
    #[default]
    Observe,
    /// Stop invoking listeners once a completed invocation set the flag.
    Enforce,
}

/// A listener registry addressed by event-type string.
///
/// The registry owns two tables: `listeners`, mapping each plain type to its
/// ordered listener sequence, and `namespaces`, mapping each dotted key to the
/// single listener registered under it (used solely for removal by key). A
/// namespace key maps to at most one listener at a time; removing it also
/// removes that exact listener from the bare-type sequence.
///
/// Registries are explicitly constructed and explicitly passed; there is no
/// process-wide default instance. Interior mutability lets listeners mutate
/// the registry through the shared reference they are handed during dispatch.
pub struct EventTarget<E> {
    listeners: RefCell<HashMap<String, ListenerSeq<E>>>,
    namespaces: RefCell<HashMap<String, Listener<E>>>,
    stop_handling: StopHandling,
}

impl<E> core::fmt::Debug for EventTarget<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("EventTarget")
            .field("types", &self.listeners.borrow().len())
            .field("namespaces", &self.namespaces.borrow().len())
            .field("stop_handling", &self.stop_handling)
            .finish_non_exhaustive()
    }
}

impl<E> Default for EventTarget<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EventTarget<E> {
    /// Creates an empty registry with [`StopHandling::Observe`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(HashMap::new()),
            namespaces: RefCell::new(HashMap::new()),
            stop_handling: StopHandling::Observe,
        }
    }

    /// Creates an empty registry with the given stop handling.
    #[must_use]
    pub fn with_stop_handling(stop_handling: StopHandling) -> Self {
        Self {
            stop_handling,
            ..Self::new()
        }
    }

    /// Returns how the dispatch pass treats the immediate-stop flag.
    #[must_use]
    #[inline]
    pub fn stop_handling(&self) -> StopHandling {
        self.stop_handling
    }

    /// Changes how the dispatch pass treats the immediate-stop flag.
    pub fn set_stop_handling(&mut self, stop_handling: StopHandling) {
        self.stop_handling = stop_handling;
    }

    /// Registers a listener for an event type.
    ///
    /// An empty type is ignored. A dotted type (`"type.namespace"`, dot at
    /// byte position ≥ 1) registers the listener under the bare type and
    /// additionally remembers it under the full dotted key, overwriting any
    /// prior mapping for that exact key. Re-registering the same listener
    /// under the same type is not deduplicated; it is invoked once per
    /// registration.
    pub fn add_event_listener(&self, event_type: &str, listener: Listener<E>) {
        if event_type.is_empty() {
            return;
        }
        match namespace_base(event_type) {
            Some(base) => {
                self.namespaces
                    .borrow_mut()
                    .insert(String::from(event_type), Rc::clone(&listener));
                self.push_listener(base, listener);
            }
            None => self.push_listener(event_type, listener),
        }
    }

    /// Removes a listener for an event type.
    ///
    /// For a dotted type the passed listener is ignored: the listener
    /// remembered for that namespace key is removed from the bare-type
    /// sequence and the key is forgotten; an unknown key is a silent no-op.
    /// For a plain type the first pointer-identical occurrence is removed
    /// (duplicates stay registered); an unknown type or listener is a silent
    /// no-op.
    pub fn remove_event_listener(&self, event_type: &str, listener: &Listener<E>) {
        if event_type.is_empty() {
            return;
        }
        match namespace_base(event_type) {
            Some(base) => {
                let remembered = self.namespaces.borrow_mut().remove(event_type);
                if let Some(remembered) = remembered {
                    self.remove_first(base, &remembered);
                }
            }
            None => self.remove_first(event_type, listener),
        }
    }

    /// Returns the number of listeners currently registered for a plain type.
    #[must_use]
    pub fn listener_count(&self, event_type: &str) -> usize {
        self.listeners
            .borrow()
            .get(event_type)
            .map_or(0, |sequence| sequence.len())
    }

    /// Dispatches an event to every listener registered for its type.
    ///
    /// Returns `true` immediately when no sequence exists for the type.
    /// Otherwise the event's dispatch flag is set for the duration of the
    /// pass (refusing reinitialization), and every listener currently in the
    /// sequence is invoked in order with this target and the event. The pass
    /// iterates the live sequence:
    ///
    /// - a listener appended mid-pass for the same type is invoked in the
    ///   same pass;
    /// - removing a not-yet-reached listener prevents its invocation;
    /// - removing an already-reached listener shifts the remainder one slot
    ///   down, which skips the entry that follows the removal point.
    ///
    /// Under [`StopHandling::Enforce`] the pass also exits early once an
    /// invocation has set the immediate-stop flag; under the default
    /// [`StopHandling::Observe`] the flag is left for the caller to inspect.
    ///
    /// Returns `false` iff some listener canceled a cancelable event.
    pub fn dispatch_event(&self, event: &mut E) -> bool
    where
        E: Dispatchable,
    {
        if !self.listeners.borrow().contains_key(event.event_type()) {
            return true;
        }
        // The pass stays keyed to the sequence selected at entry.
        let event_type = String::from(event.event_type());

        let was_dispatching = event.is_dispatching();
        event.set_dispatching(true);

        let mut index = 0;
        loop {
            let listener = {
                let listeners = self.listeners.borrow();
                match listeners.get(event_type.as_str()) {
                    Some(sequence) if index < sequence.len() => Rc::clone(&sequence[index]),
                    _ => break,
                }
            };
            (*listener)(self, event);
            if self.stop_handling == StopHandling::Enforce
                && event.immediate_propagation_stopped()
            {
                break;
            }
            index += 1;
        }

        event.set_dispatching(was_dispatching);
        !event.default_prevented()
    }

    fn push_listener(&self, event_type: &str, listener: Listener<E>) {
        self.listeners
            .borrow_mut()
            .entry(String::from(event_type))
            .or_default()
            .push(listener);
    }

    fn remove_first(&self, event_type: &str, listener: &Listener<E>) {
        let mut listeners = self.listeners.borrow_mut();
        if let Some(sequence) = listeners.get_mut(event_type) {
            if let Some(position) = sequence.iter().position(|l| Rc::ptr_eq(l, listener)) {
                sequence.remove(position);
            }
        }
    }
}

/// Splits off the bare type of a dotted `"type.namespace"` key.
///
/// Returns `None` for plain types: no dot, or a dot at byte position 0 (such
/// a string is an ordinary type, not a namespace).
fn namespace_base(event_type: &str) -> Option<&str> {
    match event_type.find('.') {
        Some(dot) if dot >= 1 => Some(&event_type[..dot]),
        _ => None,
    }
}
