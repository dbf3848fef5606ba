// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sublayer tree data model and visibility resolution.
//!
//! A *sublayer* is a named layer nested within a dynamic map service,
//! identified by a small integer id assigned by the service (never generated
//! here). Each sublayer has:
//!
//! - An id and an optional parent id ([`NO_PARENT`] marks roots).
//! - An ordered list of direct child ids (empty for leaves).
//! - A `checked` flag, the user-toggled checkbox state.
//!
//! [`SublayerNode`] is the plain record the hosting view layer hands over;
//! [`SublayerTree`] is the validated, indexable form. Construction via
//! [`SublayerTree::from_nodes`] checks every invariant up front and fails
//! with [`MalformedTreeError`] instead of attempting partial recovery;
//! a malformed tree would otherwise produce a wrong visibility list, which
//! is a correctness problem on the server, not a cosmetic one.
//!
//! Sublayers are stored in struct-of-arrays layout with slot-index links
//! (`parent` / `first_child` / `next_sibling`, [`INVALID`] as the null
//! link) so traversal never chases heap pointers.
//!
//! # Resolution
//!
//! [`SublayerTree::visible_layer_ids`] converts the current checked state
//! into the id array for the service's set-visible-layers call:
//!
//! - Only checked *leaves* contribute; a node with children is a container
//!   whose own id never appears in the output.
//! - A checked leaf whose immediate parent is unchecked is *suppressed*:
//!   the service would ignore its checked state anyway, so the id is
//!   excluded client-side. The rule is shallow: an unchecked grandparent
//!   with a checked parent does not suppress.
//! - An empty survivor set yields `[`[`SHOW_NONE`]`]` rather than an empty
//!   array, because the service reads an empty array as "show all".

mod error;
mod node;
mod resolve;
mod store;
mod traverse;

pub use error::MalformedTreeError;
pub use node::{NO_PARENT, SHOW_NONE, SublayerNode};
pub use resolve::resolve_visible_layer_ids;
pub use store::{INVALID, SublayerTree};
pub use traverse::Children;
