//!
//! Eulerian circuit and path of a multigraph
//!
//! The circuit is built by a random walk that consumes edges until it gets
//! stuck (which happens only at its start node in a balanced graph), and
//! then repeatedly restarting from a visit of the circuit whose node still
//! has unused edges and splicing the new closed walk in at that visit.
//!
//! The circuit is kept as a linked list over an arena of visits, so a splice
//! costs the length of the spliced cycle. Visits whose node ran out of edges
//! are dropped from the restart candidates lazily when picked, so every
//! visit is added and removed at most once.
//!
use super::balance::{analyze, balance, Imbalance};
use super::chooser::EdgeChooser;
use super::{GraphNode, MultiGraph};
use crate::error::{AssemblyError, Result};
use log::debug;

///
/// Walk from `start`, consuming a chosen unused edge at each step, until the
/// current node has no outgoing edges. Returns the visited nodes including
/// `start`.
///
/// An index from the chooser is taken modulo the number of candidates.
///
pub fn walk<N: GraphNode, C: EdgeChooser>(
    graph: &mut MultiGraph<N>,
    start: N,
    chooser: &mut C,
) -> Vec<N> {
    let mut path = vec![start.clone()];
    let mut node = start;
    loop {
        let n_childs = graph.out_degree(&node);
        if n_childs == 0 {
            break;
        }
        let i = chooser.choose(n_childs) % n_childs;
        match graph.take_edge(&node, i) {
            Some(child) => {
                path.push(child.clone());
                node = child;
            }
            None => break,
        }
    }
    path
}

///
/// Closed walk as a singly linked list of visits
///
struct Circuit<N> {
    nodes: Vec<N>,
    next: Vec<Option<usize>>,
}

impl<N: Clone> Circuit<N> {
    fn from_walk(walk: Vec<N>) -> Self {
        let n = walk.len();
        let next = (1..=n).map(|i| if i < n { Some(i) } else { None }).collect();
        Circuit { nodes: walk, next }
    }
    fn len(&self) -> usize {
        self.nodes.len()
    }
    fn node(&self, visit: usize) -> &N {
        &self.nodes[visit]
    }
    ///
    /// Insert the closed walk `cycle` at the visit `at`, whose node is
    /// `cycle[0]`. Returns the range of the new visits.
    ///
    fn splice(&mut self, at: usize, cycle: Vec<N>) -> std::ops::Range<usize> {
        let after = self.next[at];
        let start = self.nodes.len();
        let mut prev = at;
        for node in cycle.into_iter().skip(1) {
            let visit = self.nodes.len();
            self.nodes.push(node);
            self.next.push(None);
            self.next[prev] = Some(visit);
            prev = visit;
        }
        self.next[prev] = after;
        start..self.nodes.len()
    }
    /// nodes in the order of visits
    fn into_vec(self) -> Vec<N> {
        let mut nodes: Vec<Option<N>> = self.nodes.into_iter().map(Some).collect();
        let mut ret = Vec::with_capacity(nodes.len());
        let mut cursor = if nodes.is_empty() { None } else { Some(0) };
        while let Some(visit) = cursor {
            if let Some(node) = nodes[visit].take() {
                ret.push(node);
            }
            cursor = self.next[visit];
        }
        ret
    }
}

///
/// Get an Eulerian circuit of the balanced graph, starting from a node
/// picked by the chooser.
///
/// The edges of the graph are consumed; the graph is empty on success.
/// The returned circuit has `E+1` nodes, the first being equal to the last.
/// An empty graph gives an empty circuit.
///
/// # Errors
///
/// * `MalformedGraph` if the graph is not balanced.
/// * `IncompleteTraversal` if the graph is disconnected.
///
pub fn euler_circuit<N: GraphNode, C: EdgeChooser>(
    graph: &mut MultiGraph<N>,
    chooser: &mut C,
) -> Result<Vec<N>> {
    if graph.is_empty() {
        return Ok(Vec::new());
    }
    let starts: Vec<N> = graph.sources().cloned().collect();
    let start = starts[chooser.choose(starts.len()) % starts.len()].clone();
    euler_circuit_from(graph, start, chooser)
}

///
/// Get an Eulerian circuit of the balanced graph starting from `start`.
///
/// `start` must have an outgoing edge unless the graph is empty.
///
pub fn euler_circuit_from<N: GraphNode, C: EdgeChooser>(
    graph: &mut MultiGraph<N>,
    start: N,
    chooser: &mut C,
) -> Result<Vec<N>> {
    let n_edges = graph.n_edges();
    if n_edges == 0 {
        return Ok(Vec::new());
    }
    match analyze(graph)? {
        Imbalance::Balanced => {}
        Imbalance::NearlyBalanced { .. } => {
            return Err(AssemblyError::MalformedGraph {
                n_sources: 1,
                n_sinks: 1,
                max_imbalance: 1,
            });
        }
    }
    if !graph.has_out_edges(&start) {
        return Err(AssemblyError::IncompleteTraversal {
            n_remaining_edges: n_edges,
            n_traversed_edges: 0,
        });
    }

    let mut circuit = Circuit::from_walk(walk(graph, start, chooser));
    // visits that may still have unused edges
    let mut candidates: Vec<usize> = (0..circuit.len()).collect();

    while !graph.is_empty() {
        if candidates.is_empty() {
            return Err(AssemblyError::IncompleteTraversal {
                n_remaining_edges: graph.n_edges(),
                n_traversed_edges: n_edges - graph.n_edges(),
            });
        }
        let i = chooser.choose(candidates.len()) % candidates.len();
        let at = candidates[i];
        if !graph.has_out_edges(circuit.node(at)) {
            candidates.swap_remove(i);
            continue;
        }
        let cycle = walk(graph, circuit.node(at).clone(), chooser);
        debug!(
            "splice: restart at {:?} with {} edges, {} edges remain",
            cycle[0],
            cycle.len() - 1,
            graph.n_edges()
        );
        candidates.extend(circuit.splice(at, cycle));
    }

    debug_assert_eq!(circuit.len(), n_edges + 1);
    Ok(circuit.into_vec())
}

///
/// Get an Eulerian path of the balanced or nearly balanced graph.
///
/// A nearly balanced graph is balanced with a temporary edge from the sink
/// to the source, and the circuit is cut at that edge: the path runs from
/// the source to the sink and has `E+1` nodes. A balanced graph gives the
/// closed circuit, whose first node equals the last.
///
/// The edges of the graph are consumed.
///
pub fn eulerian_path<N: GraphNode, C: EdgeChooser>(
    graph: &mut MultiGraph<N>,
    chooser: &mut C,
) -> Result<Vec<N>> {
    let temporary_edge = balance(graph)?;
    let n_edges = graph.n_edges();
    let circuit = euler_circuit(graph, chooser)?;
    match temporary_edge {
        Some(edge) => edge
            .excise(&circuit)
            .ok_or(AssemblyError::IncompleteTraversal {
                n_remaining_edges: 1,
                n_traversed_edges: n_edges - 1,
            }),
        None => Ok(circuit),
    }
}

//
// tests
//
