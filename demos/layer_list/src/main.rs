// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Simulated layer-list session that exercises the resolver and diagnostics.
//!
//! Parses canned map-service metadata, builds a sublayer tree, replays a
//! few checkbox toggles through a traced resolve loop, and shows the
//! non-fatal handling of malformed metadata. Each tree belongs to one
//! simulated layer-list widget; nothing is shared module-globally.

use lamina_core::sublayer::{SublayerTree, resolve_visible_layer_ids};
use lamina_core::trace::{ToggleEvent, Tracer, TreeBuiltEvent, TreeRejectedEvent};
use lamina_debug::pretty::{self, PrettyPrintSink};
use lamina_service::map_service::ServiceInfo;

const SERVICE_JSON: &str = r#"{
    "supportsDynamicLayers": true,
    "layers": [
        {"id": 0, "name": "Highways", "parentLayerId": -1, "defaultVisibility": true,
         "subLayerIds": [1, 2], "minScale": 0, "maxScale": 0},
        {"id": 1, "name": "Interstate", "parentLayerId": 0, "defaultVisibility": true,
         "subLayerIds": null, "minScale": 500000, "maxScale": 0},
        {"id": 2, "name": "State Route", "parentLayerId": 0, "defaultVisibility": false,
         "subLayerIds": null, "minScale": 0, "maxScale": 0},
        {"id": 3, "name": "Mileposts", "parentLayerId": -1, "defaultVisibility": true,
         "subLayerIds": null, "minScale": 0, "maxScale": 0}
    ]
}"#;

/// Metadata with an unresolvable parent reference, as a broken service
/// might publish.
const BROKEN_JSON: &str = r#"{
    "layers": [
        {"id": 7, "name": "Orphan", "parentLayerId": 42, "subLayerIds": null}
    ]
}"#;

fn main() {
    let mut sink = PrettyPrintSink::new(Box::new(std::io::stdout()));

    let info = ServiceInfo::from_json(SERVICE_JSON).expect("canned metadata parses");
    if let Some(class) = info.capability_badge_class() {
        println!("widget class: {class}");
    }
    let nodes = info.sublayer_nodes();
    let mut tree = SublayerTree::from_nodes(&nodes).expect("canned metadata is well formed");

    {
        let mut tracer = Tracer::new(&mut sink);
        tracer.tree_built(&TreeBuiltEvent {
            node_count: tree.len() as u32,
            root_count: tree.roots().len() as u32,
        });
    }

    println!("{}", pretty::outline(&tree));

    // Replay a short toggle session: hide the Highways group, then turn
    // State Route on underneath it, then re-enable the group.
    for (id, checked) in [(0, false), (2, true), (0, true)] {
        tree.set_checked(id, checked);
        let mut tracer = Tracer::new(&mut sink);
        tracer.toggle(&ToggleEvent { id, checked });
        let visible = tree.visible_layer_ids_traced(&mut tracer);
        println!("setVisibleLayers({visible:?})");
    }

    println!("{}", pretty::outline(&tree));

    // A malformed tree is surfaced and the visibility update skipped; the
    // session continues.
    let broken = ServiceInfo::from_json(BROKEN_JSON).expect("canned metadata parses");
    match resolve_visible_layer_ids(&broken.sublayer_nodes()) {
        Ok(ids) => println!("setVisibleLayers({ids:?})"),
        Err(err) => {
            let mut tracer = Tracer::new(&mut sink);
            tracer.tree_rejected(&TreeRejectedEvent {
                offending_id: err.offending_id(),
            });
            eprintln!("skipping visibility update: {err}");
        }
    }
}
