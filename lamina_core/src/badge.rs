// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layer-type badge-class derivation.
//!
//! Layer lists tag each entry with a CSS badge class derived from the
//! service's layer type name, e.g. `"ArcGISFeatureLayer"` →
//! `"layer-type-arcgis-feature-layer"`. The view layer pairs the derived
//! class with its generic `badge` class; only the string work lives here.

use alloc::string::String;
use alloc::vec::Vec;

/// Splits a camel- or Pascal-case name into words.
///
/// A word is a lowercase run with an optional single leading letter, so
/// `"oneTwoThree"` yields `["one", "Two", "Three"]`. Characters that start
/// no word (digits, punctuation, bare uppercase runs) are skipped.
#[must_use]
pub fn split_words(s: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let lead = bytes[i];
        if lead.is_ascii_alphabetic() && i + 1 < bytes.len() && bytes[i + 1].is_ascii_lowercase() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_lowercase() {
                j += 1;
            }
            words.push(&s[i..j]);
            i = j;
        } else if lead.is_ascii_lowercase() {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_lowercase() {
                j += 1;
            }
            words.push(&s[i..j]);
            i = j;
        } else {
            i += 1;
        }
    }
    words
}

/// Splits a layer type name into words, treating `ArcGIS` as one word.
///
/// Without the acronym rule the generic splitter would break `"ArcGIS"`
/// into `"Arc"` plus a stranded `GIS`.
#[must_use]
pub fn split_layer_type_words(layer_type: &str) -> Vec<&str> {
    const ACRONYM: &str = "ArcGIS";

    let mut words = Vec::new();
    let bytes = layer_type.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if layer_type[i..].starts_with(ACRONYM) {
            words.push(&layer_type[i..i + ACRONYM.len()]);
            i += ACRONYM.len();
        } else if bytes[i].is_ascii_uppercase()
            && i + 1 < bytes.len()
            && bytes[i + 1].is_ascii_lowercase()
        {
            let mut j = i + 1;
            while j < bytes.len() && bytes[j].is_ascii_lowercase() {
                j += 1;
            }
            words.push(&layer_type[i..j]);
            i = j;
        } else {
            i += 1;
        }
    }
    words
}

/// Derives a CSS class name from a layer type name.
///
/// Words are lowercased and dash-joined: `"ArcGISFeatureLayer"` →
/// `"arcgis-feature-layer"`.
#[must_use]
pub fn layer_type_class(layer_type: &str) -> String {
    let words = split_layer_type_words(layer_type);
    let mut out = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push('-');
        }
        for c in word.chars() {
            out.push(c.to_ascii_lowercase());
        }
    }
    out
}

/// Derives the full badge class for a layer type.
///
/// `"ArcGISFeatureLayer"` → `"layer-type-arcgis-feature-layer"`.
#[must_use]
pub fn layer_type_badge_class(layer_type: &str) -> String {
    let mut out = String::from("layer-type-");
    out.push_str(&layer_type_class(layer_type));
    out
}
