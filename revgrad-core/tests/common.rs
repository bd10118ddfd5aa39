use revgrad_core::{Scalar, Variable};
use std::collections::HashMap;

// Shared helpers for the integration tests.
// allow(dead_code) because not every test crate uses every helper.

/// Builds one leaf per value.
#[allow(dead_code)]
pub fn leaves(values: &[f64]) -> Vec<Scalar> {
    values.iter().map(|&v| Scalar::new(v)).collect()
}

/// Asserts that `order` contains no duplicates and that, for every derived node in it,
/// the node precedes each of its parents.
#[allow(dead_code)]
pub fn assert_topologically_valid(order: &[Scalar]) {
    let positions: HashMap<_, _> = order
        .iter()
        .enumerate()
        .map(|(i, v)| (v.unique_id(), i))
        .collect();
    assert_eq!(positions.len(), order.len(), "a node appears twice");
    for (child_pos, child) in order.iter().enumerate() {
        for parent in child.parents() {
            let parent_pos = positions
                .get(&parent.unique_id())
                .unwrap_or_else(|| panic!("parent {} missing from order", parent.unique_id()));
            assert!(
                child_pos < *parent_pos,
                "child {} at {} must precede parent {} at {}",
                child.unique_id(),
                child_pos,
                parent.unique_id(),
                parent_pos
            );
        }
    }
}
