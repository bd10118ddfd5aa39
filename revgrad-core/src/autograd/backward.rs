// src/autograd/backward.rs

use crate::autograd::graph::topological_sort;
use crate::autograd::variable::{Variable, VariableId};
use crate::error::RevgradError;
use num_traits::Zero;
use std::collections::HashMap;

/// Runs reverse-mode accumulation from `root`, seeded with `deriv`.
///
/// Every leaf reachable from `root` receives `accumulate_derivative` calls whose sum
/// is the derivative of `root` with respect to that leaf, scaled by `deriv`. Nothing
/// is returned; all output goes through leaf mutation.
///
/// # Algorithm
/// 1. Sort the graph so each consumer precedes its inputs (`topological_sort`).
/// 2. Seed the accumulator map with `{root: deriv}`; absent entries count as zero.
/// 3. For each non-leaf, non-constant node in that order, take its accumulated
///    derivative and distribute it with `chain_rule`: contributions to leaves are
///    accumulated on the leaf immediately, contributions to intermediate nodes are
///    summed into the map.
///
/// Because every consumer is processed before its inputs, a node's entry in the map is
/// complete by the time the node itself is reached.
///
/// The map lives for the duration of this call only. Constants never receive nor
/// redistribute a derivative.
///
/// # Errors
/// Only errors raised by the `Variable` implementation (`chain_rule`,
/// `accumulate_derivative`) are propagated. The engine does not validate the graph:
/// cycles or a `chain_rule` returning the wrong number of pairs are the caller's
/// responsibility.
pub fn backpropagate<V: Variable>(root: &V, deriv: V::Derivative) -> Result<(), RevgradError> {
    if root.is_constant() {
        log::debug!(
            "backpropagate() called on constant {}. Nothing to propagate.",
            root.unique_id()
        );
        return Ok(());
    }
    if root.is_leaf() {
        log::debug!("backpropagate() called on leaf {}. Accumulating seed only.", root.unique_id());
        return root.accumulate_derivative(deriv);
    }

    let sorted_nodes = topological_sort(root);

    // --- Accumulator map: unique_id -> upstream derivative ---
    let mut derivatives: HashMap<VariableId, V::Derivative> = HashMap::new();
    derivatives.insert(root.unique_id(), deriv);

    let mut leaf_updates = 0usize;
    for node in sorted_nodes.iter() {
        if node.is_leaf() || node.is_constant() {
            continue;
        }

        let node_id = node.unique_id();
        let current = match derivatives.remove(&node_id) {
            Some(d) => d,
            None => {
                log::trace!("No derivative recorded for variable {}, using zero", node_id);
                V::Derivative::zero()
            }
        };
        log::trace!("Propagating {:?} through variable {}", current, node_id);

        for (parent, local) in node.chain_rule(&current)? {
            if parent.is_constant() {
                continue;
            }
            if parent.is_leaf() {
                parent.accumulate_derivative(local)?;
                leaf_updates += 1;
            } else {
                let slot = derivatives
                    .entry(parent.unique_id())
                    .or_insert_with(V::Derivative::zero);
                let previous = std::mem::replace(slot, V::Derivative::zero());
                *slot = previous + local;
            }
        }
    }

    log::debug!(
        "backpropagate: processed {} node(s), {} leaf accumulation(s)",
        sorted_nodes.len(),
        leaf_updates
    );
    Ok(())
}

#[cfg(test)]
#[path = "backward_test.rs"]
mod tests;
