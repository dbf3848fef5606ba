// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Struct-of-arrays sublayer storage with validation and checked-state
//! management.

use alloc::vec::Vec;

use super::error::MalformedTreeError;
use super::node::{NO_PARENT, SublayerNode};
use super::traverse::Children;

/// Sentinel value indicating "no slot" in index link fields.
pub const INVALID: u32 = u32::MAX;

/// A validated sublayer tree for one layer of a dynamic map service.
///
/// Built once per rendering of the layer's sublayer list via
/// [`from_nodes`](Self::from_nodes) and rebuilt whenever the layer is
/// redrawn. Checked state mutates in place as the user toggles checkboxes;
/// the tree is discarded when the hosting widget is torn down.
///
/// Internally each sublayer occupies a slot in parallel arrays, addressed
/// through `parent` / `first_child` / `next_sibling` links with [`INVALID`]
/// as the null link. Service-assigned ids map to slots by linear scan; the
/// trees in question are small (a map service's sublayer count), so no
/// index structure is kept.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SublayerTree {
    // -- Identity --
    ids: Vec<i32>,

    // -- Topology --
    parent: Vec<u32>,
    first_child: Vec<u32>,
    next_sibling: Vec<u32>,

    // -- Checkbox state (set by callers) --
    checked: Vec<bool>,
}

impl SublayerTree {
    /// Builds a tree from the full flattened node list of one layer,
    /// validating every invariant up front.
    ///
    /// Child links are built in each node's `child_ids` order; root order
    /// follows the input slice.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedTreeError`] when ids are duplicated, a parent
    /// reference cannot be resolved, parent/child listings disagree or
    /// repeat an id, or the parent graph contains a cycle. No partially
    /// validated tree is ever returned.
    pub fn from_nodes(nodes: &[SublayerNode]) -> Result<Self, MalformedTreeError> {
        let len = nodes.len();
        let slot_of = |id: i32| nodes.iter().position(|n| n.id == id);

        // Ids must be unique before any of them can be resolved.
        for (i, node) in nodes.iter().enumerate() {
            if nodes[..i].iter().any(|other| other.id == node.id) {
                return Err(MalformedTreeError::DuplicateId { id: node.id });
            }
        }

        // Resolve parent references.
        let mut parent = Vec::with_capacity(len);
        for node in nodes {
            if node.parent_id == NO_PARENT {
                parent.push(INVALID);
            } else {
                match slot_of(node.parent_id) {
                    Some(p) => parent.push(p as u32),
                    None => {
                        return Err(MalformedTreeError::MissingParent {
                            node: node.id,
                            parent: node.parent_id,
                        });
                    }
                }
            }
        }

        // Child listings must agree with the children's parent references,
        // in both directions. Resolved slots are kept for link building.
        let mut child_slots: Vec<Vec<u32>> = Vec::with_capacity(len);
        for node in nodes {
            let mut slots = Vec::with_capacity(node.child_ids.len());
            for &child_id in &node.child_ids {
                match slot_of(child_id) {
                    Some(c) => {
                        if nodes[c].parent_id != node.id {
                            return Err(MalformedTreeError::ChildParentMismatch {
                                node: node.id,
                                child: child_id,
                            });
                        }
                        // A repeated listing resolves to the same slot and
                        // would turn the sibling chain into a self-loop.
                        if slots.contains(&(c as u32)) {
                            return Err(MalformedTreeError::DuplicateChild {
                                node: node.id,
                                child: child_id,
                            });
                        }
                        slots.push(c as u32);
                    }
                    None => {
                        return Err(MalformedTreeError::UnknownChild {
                            node: node.id,
                            child: child_id,
                        });
                    }
                }
            }
            child_slots.push(slots);
        }
        for (i, node) in nodes.iter().enumerate() {
            let p = parent[i];
            if p != INVALID && !nodes[p as usize].child_ids.contains(&node.id) {
                return Err(MalformedTreeError::UnlistedChild {
                    parent: node.parent_id,
                    child: node.id,
                });
            }
        }

        // A cycle of mutually consistent nodes has no root; walking the
        // parent chain from any member never terminates. Bound the walk by
        // the node count to detect it.
        for (i, node) in nodes.iter().enumerate() {
            let mut current = parent[i];
            let mut steps = 0usize;
            while current != INVALID {
                steps += 1;
                if steps > len {
                    return Err(MalformedTreeError::Cycle { node: node.id });
                }
                current = parent[current as usize];
            }
        }

        // Build child links in child_ids order.
        let mut first_child = alloc::vec![INVALID; len];
        let mut next_sibling = alloc::vec![INVALID; len];
        for (i, slots) in child_slots.iter().enumerate() {
            let mut prev = INVALID;
            for &c in slots {
                if prev == INVALID {
                    first_child[i] = c;
                } else {
                    next_sibling[prev as usize] = c;
                }
                prev = c;
            }
        }

        Ok(Self {
            ids: nodes.iter().map(|n| n.id).collect(),
            parent,
            first_child,
            next_sibling,
            checked: nodes.iter().map(|n| n.checked).collect(),
        })
    }

    /// Returns the number of sublayers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns whether the tree has no sublayers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Returns all sublayer ids in input order.
    #[must_use]
    pub fn ids(&self) -> &[i32] {
        &self.ids
    }

    // -- Checkbox state --

    /// Returns the checked state of a sublayer.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the tree.
    #[must_use]
    pub fn checked(&self, id: i32) -> bool {
        self.checked[self.slot(id)]
    }

    /// Sets the checked state of a sublayer.
    ///
    /// This is the explicit update call the hosting view layer invokes when
    /// the user toggles a checkbox; the model is never re-derived from
    /// rendered markup.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the tree.
    pub fn set_checked(&mut self, id: i32, checked: bool) {
        let slot = self.slot(id);
        self.checked[slot] = checked;
    }

    // -- Topology queries --

    /// Returns whether a sublayer has children.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the tree.
    #[must_use]
    pub fn is_container(&self, id: i32) -> bool {
        self.first_child[self.slot(id)] != INVALID
    }

    /// Returns the parent id of a sublayer, or `None` for roots.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the tree.
    #[must_use]
    pub fn parent(&self, id: i32) -> Option<i32> {
        let p = self.parent[self.slot(id)];
        if p == INVALID {
            None
        } else {
            Some(self.ids[p as usize])
        }
    }

    /// Returns an iterator over the direct children of a sublayer, in
    /// listed order.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not in the tree.
    #[must_use]
    pub fn children(&self, id: i32) -> Children<'_> {
        Children::new(self, self.first_child[self.slot(id)])
    }

    /// Returns the ids of root-level sublayers, in input order.
    #[must_use]
    pub fn roots(&self) -> Vec<i32> {
        let mut roots = Vec::new();
        for (i, &p) in self.parent.iter().enumerate() {
            if p == INVALID {
                roots.push(self.ids[i]);
            }
        }
        roots
    }

    // -- Internal helpers --

    /// Maps a service id to its slot, panicking on unknown ids.
    ///
    /// Unknown ids indicate a caller bug: the tree was validated at
    /// construction and ids never change afterwards.
    fn slot(&self, id: i32) -> usize {
        match self.ids.iter().position(|&n| n == id) {
            Some(slot) => slot,
            None => panic!("unknown sublayer id {id}"),
        }
    }

    // -- Raw-slot accessors for the resolver and traversal --

    pub(crate) fn slot_count(&self) -> usize {
        self.ids.len()
    }

    pub(crate) fn id_at(&self, slot: u32) -> i32 {
        self.ids[slot as usize]
    }

    pub(crate) fn parent_at(&self, slot: u32) -> u32 {
        self.parent[slot as usize]
    }

    pub(crate) fn first_child_at(&self, slot: u32) -> u32 {
        self.first_child[slot as usize]
    }

    pub(crate) fn next_sibling_at(&self, slot: u32) -> u32 {
        self.next_sibling[slot as usize]
    }

    pub(crate) fn checked_at(&self, slot: u32) -> bool {
        self.checked[slot as usize]
    }
}
