// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Map-service metadata: the `layerInfos` a dynamic service publishes.

use std::fmt;

use lamina_core::scale::ScaleRange;
use lamina_core::sublayer::{NO_PARENT, SublayerNode};
use serde::Deserialize;

/// Failed to parse service metadata JSON.
#[derive(Debug)]
pub struct MetadataError(serde_json::Error);

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed map-service metadata: {}", self.0)
    }
}

impl std::error::Error for MetadataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

/// One entry of a service's `layers` metadata array.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerInfo {
    /// Service-assigned sublayer id.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Parent sublayer id; `-1` for root-level entries.
    #[serde(default = "default_parent_layer_id")]
    pub parent_layer_id: i32,
    /// Direct child ids, or `null` for leaves.
    #[serde(default)]
    pub sub_layer_ids: Option<Vec<i32>>,
    /// Whether the sublayer is visible before any user interaction.
    #[serde(default = "default_true")]
    pub default_visibility: bool,
    /// Most zoomed-out drawing scale (0 = unbounded).
    #[serde(default)]
    pub min_scale: f64,
    /// Most zoomed-in drawing scale (0 = unbounded).
    #[serde(default)]
    pub max_scale: f64,
}

const fn default_parent_layer_id() -> i32 {
    NO_PARENT
}

const fn default_true() -> bool {
    true
}

impl LayerInfo {
    /// Returns the sublayer's scale bounds.
    #[must_use]
    pub fn scale_range(&self) -> ScaleRange {
        ScaleRange::new(self.min_scale, self.max_scale)
    }

    fn node(&self, checked: bool) -> SublayerNode {
        SublayerNode::new(
            self.id,
            self.parent_layer_id,
            self.sub_layer_ids.clone().unwrap_or_default(),
            checked,
        )
    }
}

/// Map-service metadata relevant to the layer list.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// Sublayer metadata in service order.
    #[serde(default)]
    pub layers: Vec<LayerInfo>,
    /// Whether the service supports the dynamic-layers capability.
    #[serde(default)]
    pub supports_dynamic_layers: bool,
}

impl ServiceInfo {
    /// Parses a service metadata JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError`] when the document is not valid service
    /// metadata.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        serde_json::from_str(json).map_err(MetadataError)
    }

    /// Returns the CSS class the hosting widget applies when the service
    /// supports the dynamic-layers capability, or `None` when it does not.
    #[must_use]
    pub fn capability_badge_class(&self) -> Option<&'static str> {
        self.supports_dynamic_layers
            .then_some("supports-dynamic-layers")
    }

    /// Converts the metadata to sublayer records with checked state taken
    /// from each entry's default visibility.
    #[must_use]
    pub fn sublayer_nodes(&self) -> Vec<SublayerNode> {
        self.layers
            .iter()
            .map(|info| info.node(info.default_visibility))
            .collect()
    }

    /// Converts the metadata to sublayer records with checked state taken
    /// from an explicit visible-id list (a layer's current `visibleLayers`).
    #[must_use]
    pub fn sublayer_nodes_with_visible(&self, visible: &[i32]) -> Vec<SublayerNode> {
        self.layers
            .iter()
            .map(|info| info.node(visible.contains(&info.id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use lamina_core::sublayer::SublayerTree;

    use super::*;

    const SERVICE_JSON: &str = r#"{
        "supportsDynamicLayers": true,
        "layers": [
            {
                "id": 0,
                "name": "Highways",
                "parentLayerId": -1,
                "defaultVisibility": true,
                "subLayerIds": [1, 2],
                "minScale": 0,
                "maxScale": 0
            },
            {
                "id": 1,
                "name": "Interstate",
                "parentLayerId": 0,
                "defaultVisibility": true,
                "subLayerIds": null,
                "minScale": 500000,
                "maxScale": 0
            },
            {
                "id": 2,
                "name": "State Route",
                "parentLayerId": 0,
                "defaultVisibility": false,
                "subLayerIds": null,
                "minScale": 0,
                "maxScale": 0
            },
            {
                "id": 3,
                "name": "Mileposts",
                "parentLayerId": -1,
                "defaultVisibility": true,
                "subLayerIds": null,
                "minScale": 0,
                "maxScale": 0
            }
        ]
    }"#;

    #[test]
    fn parses_layer_infos() {
        let info = ServiceInfo::from_json(SERVICE_JSON).unwrap();
        assert!(info.supports_dynamic_layers);
        assert_eq!(info.layers.len(), 4);
        assert_eq!(info.layers[0].name, "Highways");
        assert_eq!(info.layers[1].parent_layer_id, 0);
        assert_eq!(info.layers[0].sub_layer_ids.as_deref(), Some(&[1, 2][..]));
        assert!(info.layers[1].sub_layer_ids.is_none());
    }

    #[test]
    fn nodes_seed_checked_from_default_visibility() {
        let info = ServiceInfo::from_json(SERVICE_JSON).unwrap();
        let nodes = info.sublayer_nodes();
        let tree = SublayerTree::from_nodes(&nodes).unwrap();
        assert!(tree.checked(1));
        assert!(!tree.checked(2));
        assert_eq!(tree.roots(), vec![0, 3]);
    }

    #[test]
    fn nodes_seed_checked_from_visible_list() {
        let info = ServiceInfo::from_json(SERVICE_JSON).unwrap();
        let nodes = info.sublayer_nodes_with_visible(&[0, 2]);
        let tree = SublayerTree::from_nodes(&nodes).unwrap();
        assert!(tree.checked(0));
        assert!(!tree.checked(1));
        assert!(tree.checked(2));
        assert!(!tree.checked(3));
    }

    #[test]
    fn capability_badge_follows_the_flag() {
        let info = ServiceInfo::from_json(SERVICE_JSON).unwrap();
        assert_eq!(
            info.capability_badge_class(),
            Some("supports-dynamic-layers")
        );
        let info = ServiceInfo::from_json(r#"{"layers": []}"#).unwrap();
        assert_eq!(info.capability_badge_class(), None);
    }

    #[test]
    fn scale_range_flows_through() {
        let info = ServiceInfo::from_json(SERVICE_JSON).unwrap();
        let range = info.layers[1].scale_range();
        assert!(range.visible_at(250_000.0));
        assert!(!range.visible_at(1_000_000.0));
    }

    #[test]
    fn missing_optional_fields_take_defaults() {
        let info = ServiceInfo::from_json(r#"{"layers": [{"id": 7, "name": "Only"}]}"#).unwrap();
        let layer = &info.layers[0];
        assert_eq!(layer.parent_layer_id, NO_PARENT);
        assert!(layer.default_visibility);
        assert!(layer.sub_layer_ids.is_none());
        assert_eq!(layer.scale_range(), ScaleRange::UNBOUNDED);
        assert!(!info.supports_dynamic_layers);
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = ServiceInfo::from_json("{not json").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("malformed map-service metadata"), "{msg}");
    }
}
