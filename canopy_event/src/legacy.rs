// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legacy boolean-property surface, for embedders porting from property-style
//! event APIs.
//!
//! Older event models expose cancellation and stop state as assignable boolean
//! properties (`cancelBubble`, `returnValue`) with side effects on write. The
//! core keeps those behaviors as explicit methods; this optional shim restores
//! the property-shaped surface on top of them:
//!
//! - [`LegacyEvent::set_cancel_bubble`] latches the stop flag on a `true`
//!   assignment and ignores `false`.
//! - [`LegacyEvent::set_return_value`] routes a `false` assignment through the
//!   canceled-flag setter (so cancelable/passive gating still applies) and
//!   ignores `true`.
//! - [`LegacyEvent::src_element`] aliases the original target.
//!
//! ```
//! use canopy_event::event::{Event, EventInit};
//! use canopy_event::legacy::LegacyEvent;
//!
//! let mut event: Event<u32> = Event::new(
//!     "close",
//!     EventInit {
//!         cancelable: true,
//!         ..EventInit::default()
//!     },
//! );
//!
//! assert!(event.return_value());
//! event.set_return_value(false);
//! assert!(event.default_prevented());
//!
//! event.set_cancel_bubble(true);
//! assert!(event.cancel_bubble());
//! // A false assignment does not clear the latch.
//! event.set_cancel_bubble(false);
//! assert!(event.cancel_bubble());
//! ```

use crate::custom::CustomEvent;
use crate::event::Event;

/// Property-style aliases for the stop and canceled flags.
pub trait LegacyEvent<K> {
    /// Reads the stop flag (`cancelBubble` alias).
    fn cancel_bubble(&self) -> bool;

    /// Latches the stop flag on `true`; `false` assignments are ignored.
    fn set_cancel_bubble(&mut self, value: bool);

    /// Reads the negation of the canceled flag (`returnValue` alias).
    fn return_value(&self) -> bool;

    /// Routes a `false` assignment through the canceled-flag setter; `true`
    /// assignments are ignored.
    fn set_return_value(&mut self, value: bool);

    /// Aliases the original dispatch target (`srcElement`).
    fn src_element(&self) -> Option<K>;
}

impl<K: Copy + Eq> LegacyEvent<K> for Event<K> {
    fn cancel_bubble(&self) -> bool {
        self.propagation_stopped()
    }

    fn set_cancel_bubble(&mut self, value: bool) {
        if value {
            self.stop_propagation();
        }
    }

    fn return_value(&self) -> bool {
        !self.default_prevented()
    }

    fn set_return_value(&mut self, value: bool) {
        if !value {
            self.set_canceled();
        }
    }

    fn src_element(&self) -> Option<K> {
        self.target()
    }
}

impl<K: Copy + Eq, D> LegacyEvent<K> for CustomEvent<K, D> {
    fn cancel_bubble(&self) -> bool {
        self.base().propagation_stopped()
    }

    fn set_cancel_bubble(&mut self, value: bool) {
        self.base_mut().set_cancel_bubble(value);
    }

    fn return_value(&self) -> bool {
        !self.default_prevented()
    }

    fn set_return_value(&mut self, value: bool) {
        self.base_mut().set_return_value(value);
    }

    fn src_element(&self) -> Option<K> {
        self.base().target()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventInit;

    #[test]
    fn return_value_respects_cancelable_gating() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        event.set_return_value(false);
        // Not cancelable: the assignment is ignored, like prevent_default.
        assert!(event.return_value());
        assert!(!event.default_prevented());
    }

    #[test]
    fn return_value_false_cancels_a_cancelable_event() {
        let mut event: Event<u32> = Event::new(
            "close",
            EventInit {
                cancelable: true,
                ..EventInit::default()
            },
        );
        event.set_return_value(false);
        assert!(!event.return_value());
        assert!(event.default_prevented());

        // Re-assigning true does not un-cancel.
        event.set_return_value(true);
        assert!(event.default_prevented());
    }

    #[test]
    fn cancel_bubble_is_a_true_only_latch() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        event.set_cancel_bubble(false);
        assert!(!event.cancel_bubble());

        event.set_cancel_bubble(true);
        event.set_cancel_bubble(false);
        assert!(event.cancel_bubble());
        assert!(event.propagation_stopped());
    }

    #[test]
    fn src_element_aliases_target() {
        let mut event: Event<u32> = Event::new("load", EventInit::default());
        assert_eq!(event.src_element(), None);
        event.set_target(Some(5));
        assert_eq!(event.src_element(), Some(5));
    }
}
