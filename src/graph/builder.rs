//! # Graph Builder
//!
//! Converts an unordered list of precedence pairs into the adjacency and
//! in-degree tables consumed by the order resolver.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single "from must precede to" constraint between two identifiers.
///
/// Pairs may repeat; a duplicate pair contributes an additional edge and an
/// additional in-degree increment on the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrecedencePair {
    pub from: String,
    pub to: String,
}

impl PrecedencePair {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Directed dependency graph built from a precedence pair list.
///
/// Holds two parallel tables keyed by node identifier: the ordered successor
/// lists and the incoming-edge counts. Both tables always share the same key
/// set; every node mentioned as either endpoint of any pair is present, with
/// an empty successor list and an in-degree of 0 when never a source or
/// target respectively.
///
/// Tables are insertion-ordered (nodes in first-mention order, successors in
/// edge-addition order), which makes every downstream scan reproducible for
/// a given input sequence: the resolver's zero-in-degree seed and the
/// diagnostics max/min passes always visit nodes the same way.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    adjacency: IndexMap<String, Vec<String>>,
    in_degree: IndexMap<String, usize>,
}

impl DependencyGraph {
    /// Build the graph from a precedence pair list.
    ///
    /// Runs in O(P) for P pairs and performs no validation; callers are
    /// expected to have validated identifiers upstream.
    pub fn from_pairs(pairs: &[PrecedencePair]) -> Self {
        let mut graph = Self::default();

        for pair in pairs {
            graph.add_edge(&pair.from, &pair.to);
        }

        graph
    }

    fn add_edge(&mut self, from: &str, to: &str) {
        self.adjacency.entry(from.to_string()).or_default();
        self.adjacency.entry(to.to_string()).or_default();
        self.in_degree.entry(from.to_string()).or_default();
        self.in_degree.entry(to.to_string()).or_default();

        if let Some(successors) = self.adjacency.get_mut(from) {
            successors.push(to.to_string());
        }
        if let Some(degree) = self.in_degree.get_mut(to) {
            *degree += 1;
        }
    }

    /// Number of distinct nodes mentioned by any pair.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of edges, counting duplicates.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Direct successors of `node`, in edge-addition order.
    ///
    /// Unknown nodes yield an empty slice rather than a missing-key fault.
    pub fn successors(&self, node: &str) -> &[String] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Incoming edge count for `node`, defaulting to 0 for unknown nodes.
    pub fn in_degree(&self, node: &str) -> usize {
        self.in_degree.get(node).copied().unwrap_or(0)
    }

    /// Nodes with their successor lists, in first-mention order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.adjacency
            .iter()
            .map(|(node, successors)| (node.as_str(), successors.as_slice()))
    }

    /// Nodes with their in-degrees, in first-mention order.
    pub fn in_degrees(&self) -> impl Iterator<Item = (&str, usize)> {
        self.in_degree
            .iter()
            .map(|(node, degree)| (node.as_str(), *degree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<PrecedencePair> {
        raw.iter()
            .map(|(from, to)| PrecedencePair::new(*from, *to))
            .collect()
    }

    #[test]
    fn builds_adjacency_and_in_degree() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("BTC", "ETH"), ("ETH", "XRP")]));

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.successors("BTC"), ["ETH"]);
        assert_eq!(graph.successors("ETH"), ["XRP"]);
        assert_eq!(graph.successors("XRP"), Vec::<String>::new().as_slice());
        assert_eq!(graph.in_degree("BTC"), 0);
        assert_eq!(graph.in_degree("ETH"), 1);
        assert_eq!(graph.in_degree("XRP"), 1);
    }

    #[test]
    fn every_mentioned_node_is_present_in_both_tables() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("A", "B")]));

        let adjacency_nodes: Vec<&str> = graph.adjacency().map(|(node, _)| node).collect();
        let degree_nodes: Vec<&str> = graph.in_degrees().map(|(node, _)| node).collect();
        assert_eq!(adjacency_nodes, degree_nodes);
        assert_eq!(adjacency_nodes, ["A", "B"]);
    }

    #[test]
    fn duplicate_pairs_add_duplicate_edges() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("A", "B"), ("A", "B")]));

        assert_eq!(graph.successors("A"), ["B", "B"]);
        assert_eq!(graph.in_degree("B"), 2);
    }

    #[test]
    fn self_loop_counts_against_its_own_node() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("X", "X")]));

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.successors("X"), ["X"]);
        assert_eq!(graph.in_degree("X"), 1);
    }

    #[test]
    fn nodes_keep_first_mention_order() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("C", "A"), ("B", "A"), ("A", "D")]));

        let nodes: Vec<&str> = graph.adjacency().map(|(node, _)| node).collect();
        assert_eq!(nodes, ["C", "A", "B", "D"]);
    }

    #[test]
    fn unknown_node_lookups_default() {
        let graph = DependencyGraph::from_pairs(&pairs(&[("A", "B")]));

        assert!(graph.successors("missing").is_empty());
        assert_eq!(graph.in_degree("missing"), 0);
    }
}
