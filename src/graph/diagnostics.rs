//! # Cycle Diagnostics
//!
//! Heuristic cycle-breaking suggestions for graphs the resolver rejected.

use serde::Serialize;

use crate::graph::DependencyGraph;

/// Cycle-breaking candidates for a graph that admits no total order.
///
/// Names the node with the most outgoing edges and the node with the fewest
/// incoming edges, along with their counts. Removing an edge between
/// high-fan-out and low-fan-in nodes is a reasonable first move when
/// untangling a dependency knot, but this is a best-effort suggestion only:
/// the named nodes are not guaranteed to sit on every cycle, and removing
/// one edge between them need not make the graph acyclic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleDiagnostics {
    pub most_outgoing: String,
    pub most_outgoing_count: usize,
    pub least_incoming: String,
    pub least_incoming_count: usize,
}

impl CycleDiagnostics {
    /// Scan `graph` for the highest-out-degree and lowest-in-degree nodes.
    ///
    /// Must run on the original graph, not the working copy the resolver
    /// consumed. Ties go to the first node encountered in first-mention
    /// order. An empty graph leaves both names as empty strings.
    pub fn analyze(graph: &DependencyGraph) -> Self {
        let mut most_outgoing = (String::new(), 0usize);
        let mut least_incoming = (String::new(), usize::MAX);

        for (node, successors) in graph.adjacency() {
            if successors.len() > most_outgoing.1 {
                most_outgoing = (node.to_string(), successors.len());
            }
        }

        for (node, degree) in graph.in_degrees() {
            if degree < least_incoming.1 {
                least_incoming = (node.to_string(), degree);
            }
        }

        if least_incoming.0.is_empty() {
            least_incoming.1 = 0;
        }

        Self {
            most_outgoing: most_outgoing.0,
            most_outgoing_count: most_outgoing.1,
            least_incoming: least_incoming.0,
            least_incoming_count: least_incoming.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::PrecedencePair;

    fn graph(raw: &[(&str, &str)]) -> DependencyGraph {
        let pairs: Vec<PrecedencePair> = raw
            .iter()
            .map(|(from, to)| PrecedencePair::new(*from, *to))
            .collect();
        DependencyGraph::from_pairs(&pairs)
    }

    #[test]
    fn names_high_fan_out_and_low_fan_in_nodes() {
        // A fans out to three nodes inside a cycle back to A; E is only a target.
        let diagnostics = CycleDiagnostics::analyze(&graph(&[
            ("A", "B"),
            ("A", "C"),
            ("A", "D"),
            ("D", "A"),
            ("B", "E"),
        ]));

        assert_eq!(diagnostics.most_outgoing, "A");
        assert_eq!(diagnostics.most_outgoing_count, 3);
        assert_eq!(diagnostics.least_incoming, "A");
        assert_eq!(diagnostics.least_incoming_count, 1);
    }

    #[test]
    fn triangle_ties_break_on_first_mention() {
        let diagnostics =
            CycleDiagnostics::analyze(&graph(&[("A", "B"), ("B", "C"), ("C", "A")]));

        // Every node has out-degree 1 and in-degree 1; A was mentioned first.
        assert_eq!(diagnostics.most_outgoing, "A");
        assert_eq!(diagnostics.most_outgoing_count, 1);
        assert_eq!(diagnostics.least_incoming, "A");
        assert_eq!(diagnostics.least_incoming_count, 1);
    }

    #[test]
    fn self_loop_names_the_node_both_ways() {
        let diagnostics = CycleDiagnostics::analyze(&graph(&[("X", "X")]));

        assert_eq!(diagnostics.most_outgoing, "X");
        assert_eq!(diagnostics.most_outgoing_count, 1);
        assert_eq!(diagnostics.least_incoming, "X");
        assert_eq!(diagnostics.least_incoming_count, 1);
    }

    #[test]
    fn zero_in_degree_node_wins_least_incoming() {
        let diagnostics =
            CycleDiagnostics::analyze(&graph(&[("root", "A"), ("A", "B"), ("B", "A")]));

        assert_eq!(diagnostics.least_incoming, "root");
        assert_eq!(diagnostics.least_incoming_count, 0);
    }

    #[test]
    fn empty_graph_is_handled_gracefully() {
        let diagnostics = CycleDiagnostics::analyze(&DependencyGraph::default());

        assert_eq!(diagnostics.most_outgoing, "");
        assert_eq!(diagnostics.most_outgoing_count, 0);
        assert_eq!(diagnostics.least_incoming, "");
        assert_eq!(diagnostics.least_incoming_count, 0);
    }
}
