// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared pieces for the Canopy demos.
//!
//! The event-name catalog lives on the host side of the boundary: the dispatch
//! core treats event types as plain strings, and each application ships its own
//! table of identifiers. The demos model a small panel-based viewer.

/// Event-type identifiers used by the demo viewer.
///
/// Namespaced subscriptions append a `.namespace` suffix to these at the call
/// site (for example `"canopypanelopened.inspector"`); the suffix is a
/// subscription address, not part of the event's identity.
pub mod names {
    /// A panel finished opening.
    pub const PANEL_OPENED: &str = "canopypanelopened";
    /// A panel is about to close; cancelable.
    pub const PANEL_CLOSING: &str = "canopypanelclosing";
    /// A panel finished closing.
    pub const PANEL_CLOSED: &str = "canopypanelclosed";
    /// The selection changed within a panel.
    pub const SELECTION_CHANGED: &str = "canopyselectionchanged";
    /// A document finished loading into the viewer.
    pub const DOCUMENT_LOADED: &str = "canopydocumentloaded";
    /// A document failed to load.
    pub const DOCUMENT_LOAD_FAILED: &str = "canopydocumentloadfailed";
}

/// Node keys for the demo viewer's widget handles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node(pub u32);
