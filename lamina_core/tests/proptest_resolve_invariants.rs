// Copyright 2026 the Lamina Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property suite for visibility resolution.
//!
//! Trees are generated as forests of standalone leaves and one-level
//! containers (the shapes dynamic map services actually produce), with
//! arbitrary checked flags. The oracle mirrors the service rule as written:
//! a checked leaf survives unless some unchecked node lists its id among
//! its direct children.

use lamina_core::sublayer::{
    MalformedTreeError, NO_PARENT, SHOW_NONE, SublayerNode, resolve_visible_layer_ids,
};
use proptest::prelude::*;

/// One root-level entry: a standalone leaf or a container of leaves.
#[derive(Clone, Debug)]
enum Entry {
    Leaf { checked: bool },
    Container { checked: bool, leaves: Vec<bool> },
}

fn arb_entry() -> impl Strategy<Value = Entry> {
    prop_oneof![
        any::<bool>().prop_map(|checked| Entry::Leaf { checked }),
        (any::<bool>(), prop::collection::vec(any::<bool>(), 1..4))
            .prop_map(|(checked, leaves)| Entry::Container { checked, leaves }),
    ]
}

fn arb_forest() -> impl Strategy<Value = Vec<SublayerNode>> {
    prop::collection::vec(arb_entry(), 0..8).prop_map(|entries| {
        let mut nodes = Vec::new();
        let mut next_id = 0_i32;
        for entry in entries {
            match entry {
                Entry::Leaf { checked } => {
                    nodes.push(SublayerNode::leaf(next_id, NO_PARENT, checked));
                    next_id += 1;
                }
                Entry::Container { checked, leaves } => {
                    let container_id = next_id;
                    next_id += 1;
                    let child_ids: Vec<i32> =
                        (0..leaves.len() as i32).map(|i| next_id + i).collect();
                    nodes.push(SublayerNode::container(
                        container_id,
                        NO_PARENT,
                        child_ids,
                        checked,
                    ));
                    for leaf_checked in leaves {
                        nodes.push(SublayerNode::leaf(next_id, container_id, leaf_checked));
                        next_id += 1;
                    }
                }
            }
        }
        nodes
    })
}

/// Naive restatement of the service rule, straight off the node records.
fn oracle(nodes: &[SublayerNode]) -> Vec<i32> {
    let suppressed = |id: i32| {
        nodes
            .iter()
            .filter(|n| !n.checked)
            .any(|n| n.child_ids.contains(&id))
    };
    let mut out: Vec<i32> = nodes
        .iter()
        .filter(|n| n.checked && !n.is_container() && !suppressed(n.id))
        .map(|n| n.id)
        .collect();
    if out.is_empty() {
        out.push(SHOW_NONE);
    }
    out
}

fn as_set(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}

proptest! {
    #[test]
    fn matches_the_naive_oracle(nodes in arb_forest()) {
        let resolved = resolve_visible_layer_ids(&nodes).unwrap();
        prop_assert_eq!(as_set(resolved), as_set(oracle(&nodes)));
    }

    #[test]
    fn zero_checked_leaves_yield_exactly_the_sentinel(nodes in arb_forest()) {
        let mut nodes = nodes;
        for node in &mut nodes {
            if !node.is_container() {
                node.checked = false;
            }
        }
        prop_assert_eq!(resolve_visible_layer_ids(&nodes).unwrap(), vec![SHOW_NONE]);
    }

    #[test]
    fn all_checked_yields_exactly_the_leaf_ids(nodes in arb_forest()) {
        let mut nodes = nodes;
        for node in &mut nodes {
            node.checked = true;
        }
        let leaf_ids: Vec<i32> = nodes
            .iter()
            .filter(|n| !n.is_container())
            .map(|n| n.id)
            .collect();
        let expected = if leaf_ids.is_empty() {
            vec![SHOW_NONE]
        } else {
            leaf_ids
        };
        let resolved = resolve_visible_layer_ids(&nodes).unwrap();
        prop_assert_eq!(as_set(resolved), as_set(expected));
    }

    #[test]
    fn resolution_is_idempotent(nodes in arb_forest()) {
        let first = resolve_visible_layer_ids(&nodes).unwrap();
        let second = resolve_visible_layer_ids(&nodes).unwrap();
        prop_assert_eq!(as_set(first), as_set(second));
    }

    #[test]
    fn output_never_contains_container_ids_or_duplicates(nodes in arb_forest()) {
        let resolved = resolve_visible_layer_ids(&nodes).unwrap();
        let deduped = as_set(resolved.clone());
        prop_assert_eq!(resolved.len(), deduped.len());
        for node in nodes.iter().filter(|n| n.is_container()) {
            prop_assert!(!resolved.contains(&node.id));
        }
    }

    #[test]
    fn dangling_parent_fails_fast(nodes in arb_forest(), checked in any::<bool>()) {
        let mut nodes = nodes;
        // Ids are assigned sequentially from zero, so this parent cannot exist.
        let dangling_parent = nodes.len() as i32 + 100;
        let id = nodes.len() as i32 + 99;
        nodes.push(SublayerNode::leaf(id, dangling_parent, checked));
        prop_assert_eq!(
            resolve_visible_layer_ids(&nodes),
            Err(MalformedTreeError::MissingParent { node: id, parent: dangling_parent })
        );
    }
}
