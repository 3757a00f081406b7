//! # Order Resolver
//!
//! Kahn's algorithm over a [`DependencyGraph`]: produce a total order
//! consistent with every precedence constraint, or report that the
//! constraints contain a cycle.

use std::collections::VecDeque;

use indexmap::IndexMap;
use thiserror::Error;

use crate::graph::DependencyGraph;

/// The submitted precedence pairs admit no total order.
///
/// Carries no payload; callers that want cycle-breaking suggestions run
/// [`crate::graph::CycleDiagnostics::analyze`] over the original graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cycle detected")]
pub struct CycleDetected;

/// Resolve a dependency ordering of all nodes in `graph`.
///
/// Works on a private copy of the in-degree table, leaving the caller's
/// graph untouched for diagnostics. Among multiple zero-in-degree nodes the
/// first enqueued is processed first, and the initial seed follows the
/// graph's first-mention node order, so the result is deterministic for a
/// given pair sequence. O(V + E).
///
/// Returns `Err(CycleDetected)` when at least one cycle exists; no partial
/// ordering is ever returned.
pub fn resolve_order(graph: &DependencyGraph) -> Result<Vec<String>, CycleDetected> {
    let mut remaining: IndexMap<&str, usize> = graph.in_degrees().collect();

    let mut queue: VecDeque<&str> = remaining
        .iter()
        .filter(|(_, degree)| **degree == 0)
        .map(|(node, _)| *node)
        .collect();

    let mut sorted: Vec<String> = Vec::with_capacity(graph.node_count());

    while let Some(node) = queue.pop_front() {
        sorted.push(node.to_string());

        for successor in graph.successors(node) {
            if let Some(degree) = remaining.get_mut(successor.as_str()) {
                if *degree > 0 {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(successor);
                    }
                }
            }
        }
    }

    if sorted.len() == graph.node_count() {
        Ok(sorted)
    } else {
        Err(CycleDetected)
    }
}
