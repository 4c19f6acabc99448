// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path visibility: which entries of a flat propagation chain are observable
//! across closed-subtree boundaries.
//!
//! ## Overview
//!
//! A propagation chain is a flat, ordered sequence of [`PathEntry`] items with
//! root-most entries toward one end. Instead of materializing a tree, entries
//! carry two markers: `root_of_closed_tree` records where the chain crosses
//! into a closed subtree, and `slot_in_closed_tree` records where it crosses
//! back out through that subtree's slot. [`visible_path`] scans the chain in
//! both directions from a viewing position and keeps exactly the items whose
//! hidden depth never exceeds the viewer's own, so entries inside a closed
//! subtree stay hidden from outside while ancestors beyond a fully crossed
//! subtree are re-exposed.
//!
//! The scan is asymmetric on purpose: an entry's entering marker adjusts the
//! depth counter *before* the visibility test and its exiting marker adjusts
//! it *after*, so a boundary entry itself is counted on the hidden side in one
//! direction and on the visible side in the other.
//!
//! ## Minimal example
//!
//! ```
//! use canopy_event::path::{PathEntry, visible_path};
//!
//! // A closed region sits between `a` and the viewer `d`.
//! let chain = vec![
//!     PathEntry::new("a"),
//!     PathEntry::closed_slot("b"),
//!     PathEntry::closed_root("c"),
//!     PathEntry::new("d"),
//! ];
//!
//! // The region's interior is hidden, but `a` beyond it stays visible.
//! assert_eq!(visible_path(&chain, "d"), vec!["a", "d"]);
//! ```

use alloc::vec::Vec;

/// One entry of an explicit propagation chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PathEntry<K> {
    /// The chain item (an application node key).
    pub item: K,
    /// Marks the entry where the chain crosses into a closed subtree.
    pub root_of_closed_tree: bool,
    /// Marks the slot entry where the chain crosses back out of a closed subtree.
    pub slot_in_closed_tree: bool,
}

impl<K> PathEntry<K> {
    /// An ordinary chain entry with no boundary markers.
    #[must_use]
    pub fn new(item: K) -> Self {
        Self {
            item,
            root_of_closed_tree: false,
            slot_in_closed_tree: false,
        }
    }

    /// An entry marked as the root of a closed subtree.
    #[must_use]
    pub fn closed_root(item: K) -> Self {
        Self {
            item,
            root_of_closed_tree: true,
            slot_in_closed_tree: false,
        }
    }

    /// An entry marked as a slot inside a closed subtree.
    #[must_use]
    pub fn closed_slot(item: K) -> Self {
        Self {
            item,
            root_of_closed_tree: false,
            slot_in_closed_tree: true,
        }
    }
}

/// Computes the chain items observable from `current_target`'s position.
///
/// The resolver is a pure function over the explicit chain; it is invoked
/// independently and lazily, never as part of a dispatch pass.
///
/// The scan proceeds in three steps:
///
/// 1. Locate `current_target` from the last index downward, tracking the
///    hidden depth at its position (`root_of_closed_tree` increments before
///    the item test, `slot_in_closed_tree` decrements after it).
/// 2. Walk the remaining lower indices. An entry is kept while the running
///    hidden depth does not exceed the lowest depth seen so far; leaving a
///    closed subtree through its slot lowers that bound, re-exposing entries
///    beyond the boundary.
/// 3. Walk the upper indices with the marker roles mirrored.
///
/// `current_target` itself always appears, between the two scans' results. If
/// it never matches a chain item, the locate step falls through to index 0
/// with the accumulated depth, and the upper scan covers the rest of the
/// chain.
#[must_use]
pub fn visible_path<K: Copy + Eq>(path: &[PathEntry<K>], current_target: K) -> Vec<K> {
    if path.is_empty() {
        return Vec::new();
    }

    let mut current_target_index = 0;
    let mut current_target_hidden_level: i32 = 0;

    for index in (0..path.len()).rev() {
        let entry = &path[index];
        if entry.root_of_closed_tree {
            current_target_hidden_level += 1;
        }
        if entry.item == current_target {
            current_target_index = index;
            break;
        }
        if entry.slot_in_closed_tree {
            current_target_hidden_level -= 1;
        }
    }

    let mut composed = Vec::with_capacity(path.len());

    // Lower indices: entering markers hide, exiting markers lower the bound.
    let mut current_hidden_level = current_target_hidden_level;
    let mut max_hidden_level = current_target_hidden_level;
    for index in (0..current_target_index).rev() {
        let entry = &path[index];
        if entry.root_of_closed_tree {
            current_hidden_level += 1;
        }
        if current_hidden_level <= max_hidden_level {
            composed.push(entry.item);
        }
        if entry.slot_in_closed_tree {
            current_hidden_level -= 1;
            if current_hidden_level < max_hidden_level {
                max_hidden_level = current_hidden_level;
            }
        }
    }
    composed.reverse();

    composed.push(current_target);

    // Upper indices: same walk with the marker roles mirrored.
    let mut current_hidden_level = current_target_hidden_level;
    let mut max_hidden_level = current_target_hidden_level;
    for entry in &path[current_target_index + 1..] {
        if entry.slot_in_closed_tree {
            current_hidden_level += 1;
        }
        if current_hidden_level <= max_hidden_level {
            composed.push(entry.item);
        }
        if entry.root_of_closed_tree {
            current_hidden_level -= 1;
            if current_hidden_level < max_hidden_level {
                max_hidden_level = current_hidden_level;
            }
        }
    }

    composed
}
