// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legend response models.
//!
//! A map service's legend endpoint returns one entry per sublayer, each with
//! a list of swatch items carrying base64 image data. The models here are
//! the typed form of that response; turning them into markup (and fetching
//! them) belongs to the hosting application.

use std::fmt;

use lamina_core::scale::ScaleRange;
use serde::Deserialize;

/// Failed to parse a legend response.
#[derive(Debug)]
pub struct LegendParseError(serde_json::Error);

impl fmt::Display for LegendParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed legend response: {}", self.0)
    }
}

impl std::error::Error for LegendParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// One swatch in a sublayer's legend.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItem {
    /// Swatch label; empty for single-symbol layers.
    #[serde(default)]
    pub label: String,
    /// Relative image URL on the service, if published.
    #[serde(default)]
    pub url: Option<String>,
    /// Base64-encoded image bytes.
    pub image_data: String,
    /// MIME type of the image data.
    pub content_type: String,
    /// Rendered height in pixels, if published.
    #[serde(default)]
    pub height: Option<u32>,
    /// Rendered width in pixels, if published.
    #[serde(default)]
    pub width: Option<u32>,
    /// Classification values the swatch represents, if any.
    #[serde(default)]
    pub values: Option<Vec<String>>,
}

impl LegendItem {
    /// Returns a `data:` URL for the swatch image.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.image_data)
    }
}

/// The legend of one sublayer.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendLayer {
    /// The sublayer this legend belongs to.
    pub layer_id: i32,
    /// Sublayer display name.
    pub layer_name: String,
    /// Geometry/layer type reported by the service.
    #[serde(default)]
    pub layer_type: Option<String>,
    /// Most zoomed-out drawing scale (0 = unbounded).
    #[serde(default)]
    pub min_scale: f64,
    /// Most zoomed-in drawing scale (0 = unbounded).
    #[serde(default)]
    pub max_scale: f64,
    /// Swatches, in service order.
    pub legend: Vec<LegendItem>,
}

impl LegendLayer {
    /// Returns the sublayer's scale bounds.
    #[must_use]
    pub fn scale_range(&self) -> ScaleRange {
        ScaleRange::new(self.min_scale, self.max_scale)
    }
}

/// The top level of a legend request's response.
#[derive(Clone, Debug, Deserialize)]
pub struct LegendResponse {
    /// Per-sublayer legends.
    pub layers: Vec<LegendLayer>,
}

impl LegendResponse {
    /// Parses a legend response JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`LegendParseError`] when the document is not a valid
    /// legend response.
    pub fn from_json(json: &str) -> Result<Self, LegendParseError> {
        serde_json::from_str(json).map_err(LegendParseError)
    }

    /// Looks up the legend for a sublayer id.
    #[must_use]
    pub fn layer_for(&self, layer_id: i32) -> Option<&LegendLayer> {
        self.layers.iter().find(|l| l.layer_id == layer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGEND_JSON: &str = r#"{
        "layers": [
            {
                "layerId": 1,
                "layerName": "Interstate",
                "layerType": "Feature Layer",
                "minScale": 500000,
                "maxScale": 0,
                "legend": [
                    {
                        "label": "Interstate",
                        "url": "c2330ff4",
                        "imageData": "iVBORw0KGgo=",
                        "contentType": "image/png",
                        "height": 20,
                        "width": 20,
                        "values": ["I"]
                    }
                ]
            },
            {
                "layerId": 3,
                "layerName": "Mileposts",
                "legend": [
                    {
                        "label": "",
                        "imageData": "R0lGODlh",
                        "contentType": "image/gif"
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn parses_legend_layers() {
        let response = LegendResponse::from_json(LEGEND_JSON).unwrap();
        assert_eq!(response.layers.len(), 2);
        assert_eq!(response.layers[0].layer_name, "Interstate");
        assert_eq!(response.layers[0].legend[0].values.as_deref(), Some(&["I".to_string()][..]));
    }

    #[test]
    fn layer_lookup_is_by_id_not_position() {
        let response = LegendResponse::from_json(LEGEND_JSON).unwrap();
        assert_eq!(response.layer_for(3).unwrap().layer_name, "Mileposts");
        assert!(response.layer_for(2).is_none());
    }

    #[test]
    fn data_url_embeds_content_type_and_payload() {
        let response = LegendResponse::from_json(LEGEND_JSON).unwrap();
        let item = &response.layers[1].legend[0];
        assert_eq!(item.data_url(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn scale_range_defaults_to_unbounded() {
        let response = LegendResponse::from_json(LEGEND_JSON).unwrap();
        assert!(response.layers[1].scale_range().visible_at(1.0));
        assert!(!response.layers[0].scale_range().visible_at(1_000_000.0));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = LegendResponse::from_json("[]").unwrap_err();
        assert!(err.to_string().contains("malformed legend response"));
    }
}
