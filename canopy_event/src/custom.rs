// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Payload-bearing events.
//!
//! [`CustomEvent`] composes a base [`Event`] with an opaque `detail` payload
//! chosen by the application. Its option schema ([`CustomEventInit`])
//! recognizes the three base options plus `detail`, and
//! [`CustomEvent::init_custom_event`] reinitializes base fields and payload in
//! one combined call, under the same mid-dispatch guard as the base reinit.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_event::custom::{CustomEvent, CustomEventInit};
//!
//! let event: CustomEvent<u32, &str> = CustomEvent::new(
//!     "status",
//!     CustomEventInit {
//!         cancelable: true,
//!         detail: Some("ready"),
//!         ..CustomEventInit::default()
//!     },
//! );
//!
//! assert_eq!(event.event_type(), "status");
//! assert_eq!(event.detail(), Some(&"ready"));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::event::{Event, EventInit};

/// Recognized construction options for a [`CustomEvent`].
///
/// The statically described option schema for payload-bearing events: the
/// three base options plus `detail`. Defaults are `false` and no payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CustomEventInit<D> {
    /// Whether the event is flagged as bubbling.
    pub bubbles: bool,
    /// Whether `prevent_default` may set the canceled flag.
    pub cancelable: bool,
    /// Whether the event is flagged as crossing closed-subtree boundaries.
    pub composed: bool,
    /// The opaque payload carried to listeners.
    pub detail: Option<D>,
}

impl<D> Default for CustomEventInit<D> {
    fn default() -> Self {
        Self {
            bubbles: false,
            cancelable: false,
            composed: false,
            detail: None,
        }
    }
}

/// An [`Event`] extended with an opaque `detail` payload.
///
/// The base event is reachable through [`CustomEvent::base`] and
/// [`CustomEvent::base_mut`]; the flag operations listeners commonly need are
/// also available directly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CustomEvent<K, D> {
    base: Event<K>,
    detail: Option<D>,
}

impl<K: Copy + Eq, D> CustomEvent<K, D> {
    /// Creates a payload-bearing event of the given type.
    #[must_use]
    pub fn new(event_type: impl Into<String>, init: CustomEventInit<D>) -> Self {
        Self {
            base: Event::new(
                event_type,
                EventInit {
                    bubbles: init.bubbles,
                    cancelable: init.cancelable,
                    composed: init.composed,
                },
            ),
            detail: init.detail,
        }
    }

    /// Returns the base event.
    #[must_use]
    #[inline]
    pub fn base(&self) -> &Event<K> {
        &self.base
    }

    /// Returns the base event mutably.
    #[inline]
    pub fn base_mut(&mut self) -> &mut Event<K> {
        &mut self.base
    }

    /// Returns the payload, if any.
    #[must_use]
    #[inline]
    pub fn detail(&self) -> Option<&D> {
        self.detail.as_ref()
    }

    /// Returns the event's type string.
    #[must_use]
    #[inline]
    pub fn event_type(&self) -> &str {
        self.base.event_type()
    }

    /// Sets the canceled flag, if permitted (see [`Event::prevent_default`]).
    pub fn prevent_default(&mut self) {
        self.base.prevent_default();
    }

    /// Returns whether a listener canceled the event's default action.
    #[must_use]
    #[inline]
    pub fn default_prevented(&self) -> bool {
        self.base.default_prevented()
    }

    /// Sets the stop flag (see [`Event::stop_propagation`]).
    pub fn stop_propagation(&mut self) {
        self.base.stop_propagation();
    }

    /// Sets the stop and immediate-stop flags.
    pub fn stop_immediate_propagation(&mut self) {
        self.base.stop_immediate_propagation();
    }

    /// Computes the chain items observable from the current target
    /// (see [`Event::composed_path`]).
    #[must_use]
    pub fn composed_path(&self) -> Vec<K> {
        self.base.composed_path()
    }

    /// Reinitializes base fields and payload in one combined call.
    ///
    /// A no-op while a dispatch pass is in progress, like
    /// [`Event::init_event`].
    pub fn init_custom_event(
        &mut self,
        event_type: impl Into<String>,
        bubbles: bool,
        cancelable: bool,
        detail: Option<D>,
    ) {
        if self.base.is_dispatching() {
            return;
        }
        self.base.initialize(event_type, bubbles, cancelable);
        self.detail = detail;
    }
}
