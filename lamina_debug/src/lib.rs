// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing and JSON snapshot export for lamina diagnostics.
//!
//! This crate provides development-time views of the
//! [`lamina_core`](lamina_core) toggle loop:
//!
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](lamina_core::trace::TraceSink) writing one
//!   human-readable line per event.
//! - [`pretty::outline`] — an indented checkbox outline of a
//!   [`SublayerTree`](lamina_core::sublayer::SublayerTree).
//! - [`snapshot::export`] — a JSON dump of a tree's nodes for bug reports,
//!   round-trippable through the service metadata shape.

pub mod pretty;
pub mod snapshot;
