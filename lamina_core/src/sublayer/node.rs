// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sublayer records and sentinel ids.

use alloc::vec::Vec;

/// Sentinel parent id marking a root-level sublayer.
///
/// Map services report `-1` as the parent of top-level sublayers.
pub const NO_PARENT: i32 = -1;

/// Sentinel id requesting that *no* sublayers be rendered.
///
/// An empty visible-ids array means "show all layers" to a dynamic map
/// service, so "show none" must be requested explicitly as `[-1]`.
pub const SHOW_NONE: i32 = -1;

/// One entry of a map service's sublayer hierarchy.
///
/// Ids are assigned by the upstream service and are unique within a tree.
/// The hosting view layer builds these records from whatever live
/// representation it uses and keeps [`checked`](Self::checked) in sync with
/// user input via [`SublayerTree::set_checked`](super::SublayerTree::set_checked);
/// the model is never re-derived by scraping rendered markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SublayerNode {
    /// Service-assigned id, unique within the tree.
    pub id: i32,
    /// Parent sublayer id, or [`NO_PARENT`] for roots.
    pub parent_id: i32,
    /// Ordered ids of direct children (empty for leaves).
    pub child_ids: Vec<i32>,
    /// Current user-toggled checkbox state.
    pub checked: bool,
}

impl SublayerNode {
    /// Creates a node from its raw parts.
    #[must_use]
    pub fn new(id: i32, parent_id: i32, child_ids: Vec<i32>, checked: bool) -> Self {
        Self {
            id,
            parent_id,
            child_ids,
            checked,
        }
    }

    /// Creates a leaf node (no children).
    #[must_use]
    pub fn leaf(id: i32, parent_id: i32, checked: bool) -> Self {
        Self::new(id, parent_id, Vec::new(), checked)
    }

    /// Creates a container node with the given ordered children.
    #[must_use]
    pub fn container(id: i32, parent_id: i32, child_ids: Vec<i32>, checked: bool) -> Self {
        Self::new(id, parent_id, child_ids, checked)
    }

    /// Returns whether this node has children.
    ///
    /// A container's own checked state has no direct effect on the service
    /// call; only its checked leaves contribute ids.
    #[must_use]
    pub fn is_container(&self) -> bool {
        !self.child_ids.is_empty()
    }

    /// Returns whether this node is root-level.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id == NO_PARENT
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn leaf_is_not_container() {
        let node = SublayerNode::leaf(3, NO_PARENT, true);
        assert!(!node.is_container());
        assert!(node.is_root());
    }

    #[test]
    fn container_with_children() {
        let node = SublayerNode::container(1, NO_PARENT, vec![2, 3], false);
        assert!(node.is_container());
        assert_eq!(node.child_ids, vec![2, 3]);
    }

    #[test]
    fn nested_node_is_not_root() {
        let node = SublayerNode::leaf(2, 1, true);
        assert!(!node.is_root());
    }
}
