// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the toggle loop.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! layer-list instrumentation calls as the user interacts with the widget.
//! All method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace`
//! feature is **off**, every `Tracer` method compiles to nothing (zero
//! overhead). When **on**, each method performs a single `Option` branch
//! before dispatching.
//!
//! # Crate features
//!
//! - `trace` — enables the `Tracer` method bodies (one branch per call).

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a sublayer tree is (re)built from service metadata.
#[derive(Clone, Copy, Debug)]
pub struct TreeBuiltEvent {
    /// Total sublayers in the tree.
    pub node_count: u32,
    /// Root-level sublayers.
    pub root_count: u32,
}

/// Emitted when the hosting view layer toggles a checkbox.
#[derive(Clone, Copy, Debug)]
pub struct ToggleEvent {
    /// The toggled sublayer's id.
    pub id: i32,
    /// The new checked state.
    pub checked: bool,
}

/// Emitted after each visibility resolution.
#[derive(Clone, Copy, Debug)]
pub struct ResolveEvent {
    /// Checked leaves considered.
    pub candidates: u32,
    /// Candidates excluded by the unchecked-parent rule.
    pub suppressed: u32,
    /// Ids in the result (0 when the sentinel was substituted).
    pub visible: u32,
    /// Whether the show-none sentinel was substituted for an empty result.
    pub show_none: bool,
}

/// Emitted when a malformed tree is rejected and the visibility update is
/// skipped.
///
/// The hosting UI surfaces this as a non-fatal notification rather than
/// crashing the containing page.
#[derive(Clone, Copy, Debug)]
pub struct TreeRejectedEvent {
    /// The id named by the validation error.
    pub offending_id: i32,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from the toggle loop.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a sublayer tree is built or rebuilt.
    fn on_tree_built(&mut self, e: &TreeBuiltEvent) {
        _ = e;
    }

    /// Called when a checkbox is toggled.
    fn on_toggle(&mut self, e: &ToggleEvent) {
        _ = e;
    }

    /// Called after a visibility resolution.
    fn on_resolve(&mut self, e: &ResolveEvent) {
        _ = e;
    }

    /// Called when a malformed tree is rejected.
    fn on_tree_rejected(&mut self, e: &TreeRejectedEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing.
/// When **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`TreeBuiltEvent`].
    #[inline]
    pub fn tree_built(&mut self, e: &TreeBuiltEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tree_built(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ToggleEvent`].
    #[inline]
    pub fn toggle(&mut self, e: &ToggleEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_toggle(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ResolveEvent`].
    #[inline]
    pub fn resolve(&mut self, e: &ResolveEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_resolve(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TreeRejectedEvent`].
    #[inline]
    pub fn tree_rejected(&mut self, e: &TreeRejectedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_tree_rejected(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
