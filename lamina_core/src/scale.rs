// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale-range visibility.
//!
//! Map services attach `minScale` / `maxScale` bounds to layers and
//! sublayers. Scale values are representative-fraction denominators, so a
//! *larger* number means zoomed further out: `minScale` is the most
//! zoomed-out scale at which the layer draws, `maxScale` the most
//! zoomed-in, and a bound of zero means unbounded on that side. Hosting
//! widgets use this to mark list entries that are hidden purely because of
//! the current zoom level.

/// A layer's scale visibility bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaleRange {
    /// Most zoomed-out scale at which the layer draws (0 = unbounded).
    pub min_scale: f64,
    /// Most zoomed-in scale at which the layer draws (0 = unbounded).
    pub max_scale: f64,
}

impl ScaleRange {
    /// A range with no bounds; visible at every scale.
    pub const UNBOUNDED: Self = Self {
        min_scale: 0.0,
        max_scale: 0.0,
    };

    /// Creates a range from service metadata values.
    #[must_use]
    pub const fn new(min_scale: f64, max_scale: f64) -> Self {
        Self {
            min_scale,
            max_scale,
        }
    }

    /// Returns whether a layer with this range draws at the given map
    /// scale.
    ///
    /// A zero bound is ignored; otherwise the scale must be at or below
    /// `min_scale` and at or above `max_scale`.
    #[must_use]
    pub fn visible_at(&self, scale: f64) -> bool {
        (self.min_scale == 0.0 || self.min_scale >= scale)
            && (self.max_scale == 0.0 || self.max_scale <= scale)
    }
}
