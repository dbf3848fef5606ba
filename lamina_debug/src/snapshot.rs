// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! JSON snapshot export.
//!
//! [`export`] writes a tree's nodes as a JSON array in the service
//! metadata shape (`parentLayerId`, `subLayerIds`) plus the current
//! checked state, so a misbehaving tree can be attached to a bug report
//! and replayed.

use std::io::{self, Write};

use lamina_core::sublayer::{NO_PARENT, SublayerTree};
use serde_json::{Value, json};

/// Exports a sublayer tree snapshot as JSON.
///
/// Node order is the tree's input order. `subLayerIds` is `null` for
/// leaves, matching what services publish.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn export(tree: &SublayerTree, writer: &mut dyn Write) -> io::Result<()> {
    let mut nodes: Vec<Value> = Vec::new();

    for &id in tree.ids() {
        let child_ids: Vec<i32> = tree.children(id).collect();
        nodes.push(json!({
            "id": id,
            "parentLayerId": tree.parent(id).unwrap_or(NO_PARENT),
            "subLayerIds": if child_ids.is_empty() {
                Value::Null
            } else {
                json!(child_ids)
            },
            "checked": tree.checked(id),
        }));
    }

    serde_json::to_writer_pretty(&mut *writer, &nodes)?;
    writer.write_all(b"\n")
}
