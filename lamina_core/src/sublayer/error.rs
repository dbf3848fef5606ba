// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tree validation errors.

use core::fmt;

/// A sublayer tree failed validation.
///
/// Each variant names the offending id(s) so the hosting UI can surface the
/// problem as a non-fatal notification. Validation failures indicate a bug
/// in the upstream data source; the resolver never attempts to skip
/// malformed nodes, since doing so would send an incorrect visibility list
/// to the map service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MalformedTreeError {
    /// Two nodes share the same id.
    DuplicateId {
        /// The id that appears more than once.
        id: i32,
    },
    /// A node's parent reference cannot be resolved.
    MissingParent {
        /// The node whose parent is missing.
        node: i32,
        /// The parent id that matches no node in the tree.
        parent: i32,
    },
    /// A node lists the same child id more than once.
    DuplicateChild {
        /// The node whose child list is wrong.
        node: i32,
        /// The id listed more than once.
        child: i32,
    },
    /// A node lists a child id that matches no node in the tree.
    UnknownChild {
        /// The node whose child list is wrong.
        node: i32,
        /// The listed id that does not exist.
        child: i32,
    },
    /// A listed child names a different node as its parent.
    ChildParentMismatch {
        /// The node that lists the child.
        node: i32,
        /// The child whose `parent_id` disagrees.
        child: i32,
    },
    /// A node names a parent that does not list it among its children.
    UnlistedChild {
        /// The named parent.
        parent: i32,
        /// The node missing from the parent's child list.
        child: i32,
    },
    /// The parent graph contains a cycle.
    Cycle {
        /// A node on the cycle.
        node: i32,
    },
}

impl MalformedTreeError {
    /// Returns the id most useful to report: the unresolved reference for
    /// dangling links, otherwise the node at fault.
    #[must_use]
    pub fn offending_id(&self) -> i32 {
        match *self {
            Self::DuplicateId { id } => id,
            Self::DuplicateChild { child, .. } => child,
            Self::MissingParent { parent, .. } => parent,
            Self::UnknownChild { child, .. } => child,
            Self::ChildParentMismatch { child, .. } => child,
            Self::UnlistedChild { child, .. } => child,
            Self::Cycle { node } => node,
        }
    }
}

impl fmt::Display for MalformedTreeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId { id } => write!(f, "duplicate sublayer id {id}"),
            Self::DuplicateChild { node, child } => {
                write!(f, "sublayer {node} lists child {child} more than once")
            }
            Self::MissingParent { node, parent } => {
                write!(f, "sublayer {node} references missing parent {parent}")
            }
            Self::UnknownChild { node, child } => {
                write!(f, "sublayer {node} lists nonexistent child {child}")
            }
            Self::ChildParentMismatch { node, child } => {
                write!(
                    f,
                    "sublayer {child} is listed by {node} but names a different parent"
                )
            }
            Self::UnlistedChild { parent, child } => {
                write!(
                    f,
                    "sublayer {child} names parent {parent} but is not among its children"
                )
            }
            Self::Cycle { node } => write!(f, "cycle in sublayer tree at id {node}"),
        }
    }
}

impl core::error::Error for MalformedTreeError {}
