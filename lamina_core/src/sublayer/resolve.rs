// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visibility resolution: checked state → visible layer ids.
//!
//! Dynamic map services apply their own parent/child precedence to the
//! visible-ids array: a checked sublayer accompanied by an unchecked
//! ancestor id is treated as hidden regardless of its own state. Relying on
//! that server-side logic produces wrong results, so the resolver excludes
//! ancestor-unchecked descendants client-side before the array is ever
//! sent.
//!
//! The suppression check is deliberately *shallow*: a candidate is
//! suppressed exactly when an unchecked node lists the candidate's id among
//! its direct children, which in a validated tree means its immediate
//! parent is unchecked. Multi-level override (unchecked grandparent,
//! checked parent) is not applied; the service's documented behavior only
//! covers one level and deeper nesting is not exercised by known hosts.

use alloc::vec::Vec;

use super::error::MalformedTreeError;
use super::node::{SHOW_NONE, SublayerNode};
use super::store::{INVALID, SublayerTree};
use crate::trace::{ResolveEvent, Tracer};

impl SublayerTree {
    /// Computes the visible layer id array for the service's
    /// set-visible-layers call.
    ///
    /// Only checked leaves contribute; containers never contribute their
    /// own id, and a checked leaf under an unchecked immediate parent is
    /// suppressed. When nothing survives, the result is `[`[`SHOW_NONE`]`]`;
    /// the service reads an empty array as "show all", the opposite of
    /// "show none".
    ///
    /// Pure function of the current snapshot: ids are unique by
    /// construction, so the output carries no duplicates, and the order is
    /// input order (the service attaches no meaning to it).
    #[must_use]
    pub fn visible_layer_ids(&self) -> Vec<i32> {
        let mut out = Vec::new();
        self.visible_layer_ids_into(&mut out);
        out
    }

    /// Like [`visible_layer_ids`](Self::visible_layer_ids), but reuses a
    /// caller-provided buffer to avoid allocation.
    pub fn visible_layer_ids_into(&self, out: &mut Vec<i32>) {
        self.resolve(out, &mut Tracer::none());
    }

    /// Like [`visible_layer_ids`](Self::visible_layer_ids), emitting a
    /// [`ResolveEvent`] describing the outcome to the given tracer.
    #[must_use]
    pub fn visible_layer_ids_traced(&self, tracer: &mut Tracer<'_>) -> Vec<i32> {
        let mut out = Vec::new();
        self.resolve(&mut out, tracer);
        out
    }

    fn resolve(&self, out: &mut Vec<i32>, tracer: &mut Tracer<'_>) {
        out.clear();
        let mut candidates = 0_u32;
        let mut suppressed = 0_u32;

        for slot in 0..self.slot_count() as u32 {
            if !self.checked_at(slot) {
                continue;
            }
            // Containers never contribute their own id.
            if self.first_child_at(slot) != INVALID {
                continue;
            }
            candidates += 1;

            // Shallow suppression: only the immediate parent's state
            // counts. In a validated tree "some unchecked node lists this
            // id among its children" is exactly "the parent is unchecked".
            let parent = self.parent_at(slot);
            if parent != INVALID && !self.checked_at(parent) {
                suppressed += 1;
                continue;
            }
            out.push(self.id_at(slot));
        }

        let show_none = out.is_empty();
        if show_none {
            out.push(SHOW_NONE);
        }

        tracer.resolve(&ResolveEvent {
            candidates,
            suppressed,
            visible: if show_none { 0 } else { out.len() as u32 },
            show_none,
        });
    }
}

/// Validates `nodes` and resolves their visible layer ids in one call.
///
/// This is the single-function contract for hosts that keep plain records
/// rather than a long-lived [`SublayerTree`]: input is the full flattened
/// node list for one layer, output the id array (or the [`SHOW_NONE`]
/// sentinel list).
///
/// # Errors
///
/// Returns [`MalformedTreeError`] when the node list fails validation; no
/// partial result is produced.
pub fn resolve_visible_layer_ids(nodes: &[SublayerNode]) -> Result<Vec<i32>, MalformedTreeError> {
    Ok(SublayerTree::from_nodes(nodes)?.visible_layer_ids())
}
