// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ArcGIS REST map-service metadata and legend models.
//!
//! This crate turns the JSON a dynamic map service publishes into the
//! `lamina_core` model:
//!
//! - [`map_service::ServiceInfo`] — a service's `layerInfos` metadata,
//!   convertible to [`SublayerNode`](lamina_core::sublayer::SublayerNode)
//!   records with checked state seeded from either an explicit visible-id
//!   list or each sublayer's default visibility.
//! - [`legend::LegendResponse`] — a legend request's response, with typed
//!   per-layer legend items and data-URL building for the embedded swatch
//!   images.
//!
//! Legend rendering and HTTP retrieval stay with the hosting application;
//! only the response models live here.

pub mod legend;
pub mod map_service;
