// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Convenience adapter: raise a payload-bearing event on anything that can
//! reach a dispatch target.
//!
//! Host applications often hand around component handles that *carry* an
//! [`EventTarget`] rather than being one. [`TargetSource`] captures that
//! convention: a type resolves itself to a target, or reports that it cannot.
//! [`trigger`] then builds a cancelable [`CustomEvent`] around a payload and
//! dispatches it in one call.
//!
//! Failing to resolve a target is the one misuse this stack surfaces as an
//! error rather than tolerating silently: dispatching into nothing is almost
//! always a wiring bug in the host.
//!
//! ## Minimal example
//!
//! ```
//! use std::rc::Rc;
//! use canopy_dispatch::target::{EventTarget, Listener};
//! use canopy_dispatch::trigger::trigger;
//! use canopy_event::custom::CustomEvent;
//!
//! let target: EventTarget<CustomEvent<u32, &str>> = EventTarget::new();
//! let listener: Listener<CustomEvent<u32, &str>> = Rc::new(|_target, event| {
//!     assert_eq!(event.detail(), Some(&"saved"));
//! });
//! target.add_event_listener("status", listener);
//!
//! let handled = trigger(&target, "status", Some("saved")).unwrap();
//! assert!(handled);
//! ```

use core::fmt;

use canopy_event::custom::{CustomEvent, CustomEventInit};

use crate::target::EventTarget;

/// Resolves the "a target, or an object carrying one" convention.
///
/// Implemented by [`EventTarget`] itself and by host types that embed one
/// (possibly optionally, for components that may not be wired up yet).
pub trait TargetSource<E> {
    /// Returns the dispatch target this value can reach, if any.
    fn event_target(&self) -> Option<&EventTarget<E>>;
}

impl<E> TargetSource<E> for EventTarget<E> {
    #[inline]
    fn event_target(&self) -> Option<&EventTarget<E>> {
        Some(self)
    }
}

/// Error returned when a value exposes no reachable dispatch target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IncompatibleTargetError;

impl fmt::Display for IncompatibleTargetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attempt to trigger an event on an object with no reachable dispatch target")
    }
}

impl core::error::Error for IncompatibleTargetError {}

/// Builds a cancelable [`CustomEvent`] carrying `detail` and dispatches it on
/// the target `source` resolves to.
///
/// Returns the dispatch result: `false` iff at least one listener canceled
/// the event. Errors only when `source` exposes no reachable target.
pub fn trigger<K, D, S>(
    source: &S,
    event_type: &str,
    detail: Option<D>,
) -> Result<bool, IncompatibleTargetError>
where
    K: Copy + Eq,
    S: TargetSource<CustomEvent<K, D>> + ?Sized,
{
    let Some(target) = source.event_target() else {
        return Err(IncompatibleTargetError);
    };
    let mut event = CustomEvent::new(
        event_type,
        CustomEventInit {
            cancelable: true,
            detail,
            ..CustomEventInit::default()
        },
    );
    Ok(target.dispatch_event(&mut event))
}
