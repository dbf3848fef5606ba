// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sublayer tree model and visibility resolution for dynamic map services.
//!
//! `lamina_core` provides the portable, view-independent logic behind a map
//! service layer list: a validated tree of sublayer checkbox states and the
//! resolver that turns that tree into the exact "visible layer IDs" array a
//! dynamic map service expects. It is `no_std` compatible (with `alloc`) and
//! has no dependencies.
//!
//! # Architecture
//!
//! The crate is organized around a toggle loop that turns checkbox events
//! into visibility updates on the upstream service:
//!
//! ```text
//!   Service metadata (layerInfos)
//!       │
//!       ▼
//!   SublayerTree::from_nodes() ──validates──► SublayerTree
//!       │                                         │
//!       │  user toggles a checkbox                │
//!       └──► set_checked(id, state) ──────────────┤
//!                                                 ▼
//!                          visible_layer_ids() ──► [i32] ──► setVisibleLayers
//! ```
//!
//! **[`sublayer`]** — The tree model and resolver. Nodes carry the ids the
//! upstream service assigned; storage is struct-of-arrays with slot-index
//! links for cheap traversal. Construction validates parent references,
//! id uniqueness, parent/child listing consistency, and acyclicity, failing
//! fast with [`MalformedTreeError`](sublayer::MalformedTreeError) rather
//! than sending a wrong visibility list to the service.
//!
//! **[`scale`]** — Scale-range visibility test mirroring the service's
//! min/max scale semantics (a bound of zero is unbounded).
//!
//! **[`badge`]** — Layer-type badge-class derivation: camel/Pascal word
//! splitting with the `ArcGIS` acronym rule, lowercased and dash-joined.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for toggle-loop instrumentation, with zero-overhead
//! [`Tracer`](trace::Tracer) wrapper.
//!
//! # The suppression rule
//!
//! Dynamic map services treat a checked sublayer as hidden whenever the
//! visible-ids array also carries an unchecked ancestor's view of it.
//! Concretely: if a sublayer's id appears in the list while its parent is
//! unchecked, the server ignores the sublayer's checked state. The resolver
//! therefore excludes such ids client-side. The rule is *shallow*: only the
//! immediate parent's state is consulted, never a transitive ancestor
//! closure. See [`sublayer`] for details.
//!
//! # Crate features
//!
//! - `trace` (disabled by default): enables `Tracer` method bodies (one
//!   branch per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod badge;
pub mod scale;
pub mod sublayer;
pub mod trace;
