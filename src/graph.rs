//!
//! Directed multigraph stored as adjacency multisets
//!
//! * `MultiGraph`: node -> multiset of destination nodes
//! * `balance`: degree imbalance analysis and the temporary edge
//! * `chooser`: injectable choice strategy for the traversal
//! * `euler`: Eulerian circuit by walk and cycle splicing
//!
pub mod balance;
pub mod chooser;
pub mod euler;

use fnv::FnvHashMap as HashMap;
use itertools::Itertools;
use petgraph::dot::Dot;
use petgraph::graph::{DiGraph, NodeIndex};
use std::hash::Hash;

///
/// Trait for node labels of `MultiGraph`
///
pub trait GraphNode: Eq + Hash + Clone + std::fmt::Debug {}
impl<T: Eq + Hash + Clone + std::fmt::Debug> GraphNode for T {}

///
/// Directed multigraph whose edges are implicit occurrences in
/// destination multisets.
///
/// Parallel edges are kept as duplicated destinations.
/// A node without outgoing edges is never stored as a key, so every key
/// has at least one outgoing edge.
///
#[derive(Debug, Clone)]
pub struct MultiGraph<N: GraphNode> {
    childs: HashMap<N, Vec<N>>,
    n_edges: usize,
}

impl<N: GraphNode> Default for MultiGraph<N> {
    fn default() -> Self {
        MultiGraph {
            childs: HashMap::default(),
            n_edges: 0,
        }
    }
}

impl<N: GraphNode> MultiGraph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }
    /// Create a graph from a list of (source, target) edges
    pub fn from_edges<I: IntoIterator<Item = (N, N)>>(edges: I) -> Self {
        let mut graph = Self::new();
        for (source, target) in edges {
            graph.add_edge(source, target);
        }
        graph
    }
    /// Append an edge `source -> target`. Duplicates are retained.
    pub fn add_edge(&mut self, source: N, target: N) {
        self.childs.entry(source).or_insert_with(Vec::new).push(target);
        self.n_edges += 1;
    }
    /// The number of edges, counting parallel edges separately
    pub fn n_edges(&self) -> usize {
        self.n_edges
    }
    /// The number of nodes, including nodes with only incoming edges
    pub fn n_nodes(&self) -> usize {
        self.nodes().len()
    }
    /// Graph has no edges
    pub fn is_empty(&self) -> bool {
        self.n_edges == 0
    }
    /// Destinations of outgoing edges of the node
    pub fn childs(&self, node: &N) -> &[N] {
        self.childs.get(node).map(|v| v.as_slice()).unwrap_or(&[])
    }
    /// The number of outgoing edges of the node
    pub fn out_degree(&self, node: &N) -> usize {
        self.childs(node).len()
    }
    /// Check the node has any unused outgoing edge
    pub fn has_out_edges(&self, node: &N) -> bool {
        self.childs.contains_key(node)
    }
    /// Nodes with at least one outgoing edge
    pub fn sources(&self) -> impl Iterator<Item = &N> + '_ {
        self.childs.keys()
    }
    /// All nodes appearing as a key or as a destination, without duplicates
    pub fn nodes(&self) -> Vec<N> {
        self.childs
            .iter()
            .flat_map(|(source, targets)| std::iter::once(source).chain(targets.iter()))
            .unique()
            .cloned()
            .collect()
    }
    /// Iterator over all edges as `(source, target)`
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N)> + '_ {
        self.childs
            .iter()
            .flat_map(|(source, targets)| targets.iter().map(move |target| (source, target)))
    }
    /// Indegree of each node that has incoming edges
    pub fn in_degrees(&self) -> HashMap<N, usize> {
        let mut in_degrees: HashMap<N, usize> = HashMap::default();
        for (_, target) in self.edges() {
            *in_degrees.entry(target.clone()).or_insert(0) += 1;
        }
        in_degrees
    }
    ///
    /// Remove the `i`-th outgoing edge of the node and return its target.
    ///
    /// Removal swaps the last destination into slot `i`, so it is O(1).
    /// If the node loses its last outgoing edge, it is removed from the keys.
    ///
    pub fn take_edge(&mut self, node: &N, i: usize) -> Option<N> {
        let targets = self.childs.get_mut(node)?;
        if i >= targets.len() {
            return None;
        }
        let target = targets.swap_remove(i);
        if targets.is_empty() {
            self.childs.remove(node);
        }
        self.n_edges -= 1;
        Some(target)
    }
    ///
    /// Convert into petgraph::DiGraph whose node weight is the label.
    ///
    /// Parallel edges are merged into a single petgraph edge whose weight
    /// is the multiplicity.
    ///
    pub fn to_petgraph(&self) -> DiGraph<N, usize> {
        let mut graph = DiGraph::new();

        // mapping from label to node index
        let mut ids: HashMap<N, NodeIndex> = HashMap::default();
        for node in self.nodes() {
            let id = graph.add_node(node.clone());
            ids.insert(node, id);
        }

        for ((source, target), multiplicity) in self.edges().counts() {
            graph.add_edge(ids[source], ids[target], multiplicity);
        }

        graph
    }
}

impl<N: GraphNode + std::fmt::Display> MultiGraph<N> {
    /// DOT representation with labels as node names and multiplicities as
    /// edge labels
    pub fn as_dot(&self) -> String {
        let graph = self.to_petgraph();
        format!("{}", Dot::with_config(&graph, &[]))
    }
}

//
// tests
//
