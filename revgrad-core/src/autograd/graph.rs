// src/autograd/graph.rs

use crate::autograd::variable::{Variable, VariableId};
use std::collections::HashSet;

/// Work item of the explicit DFS stack.
enum Visit<V> {
    /// First time the node is popped: mark it and schedule its parents.
    Enter(V),
    /// All parents have been fully explored: the node can be emitted.
    Exit(V),
}

/// Orders every variable reachable from `root` so that consumers come before their inputs.
///
/// For any edge `parent -> child` (the child consumed the parent), the child appears
/// earlier in the returned sequence than the parent. `root` is always first and each
/// node appears exactly once, deduplicated by `unique_id`. Constants are emitted but
/// never expanded; leaves have no parents to expand.
///
/// This is a depth-first post-order traversal driven by an explicit stack, so deep
/// graphs do not hit recursion limits. Parents are explored in their declared order,
/// which makes the output identical to the recursive formulation and deterministic
/// for a fixed graph.
///
/// The graph must be acyclic; cycles are not detected.
pub fn topological_sort<V: Variable>(root: &V) -> Vec<V> {
    let mut visited: HashSet<VariableId> = HashSet::new();
    let mut post_order: Vec<V> = Vec::new();
    let mut stack: Vec<Visit<V>> = vec![Visit::Enter(root.clone())];

    while let Some(item) = stack.pop() {
        match item {
            Visit::Enter(node) => {
                if !visited.insert(node.unique_id()) {
                    continue;
                }
                let expand = !node.is_constant() && !node.is_leaf();
                let parents = if expand { node.parents() } else { Vec::new() };
                stack.push(Visit::Exit(node));
                // Reversed so the first parent is popped (and explored) first.
                for parent in parents.into_iter().rev() {
                    if !visited.contains(&parent.unique_id()) {
                        stack.push(Visit::Enter(parent));
                    }
                }
            }
            Visit::Exit(node) => post_order.push(node),
        }
    }

    post_order.reverse();
    log::debug!(
        "topological_sort: {} node(s) reachable from variable {}",
        post_order.len(),
        root.unique_id()
    );
    post_order
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
