// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree traversal utilities.

use super::store::{INVALID, SublayerTree};

/// An iterator over the direct children of a sublayer, in listed order.
///
/// Created by [`SublayerTree::children`].
#[derive(Debug)]
pub struct Children<'a> {
    tree: &'a SublayerTree,
    current: u32,
}

impl<'a> Children<'a> {
    pub(crate) fn new(tree: &'a SublayerTree, first: u32) -> Self {
        Self {
            tree,
            current: first,
        }
    }
}

impl Iterator for Children<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        if self.current == INVALID {
            return None;
        }
        let slot = self.current;
        self.current = self.tree.next_sibling_at(slot);
        Some(self.tree.id_at(slot))
    }
}
