//!
//! Degree balance of the multigraph
//!
//! A graph has an Eulerian circuit only if every node is balanced
//! (indegree == outdegree), and an Eulerian path only if it is nearly
//! balanced: exactly one source (out - in = +1) and one sink
//! (out - in = -1). A nearly balanced graph is turned into a balanced one
//! by adding a temporary edge sink -> source.
//!
use super::{GraphNode, MultiGraph};
use crate::error::{AssemblyError, Result};
use fnv::FnvHashMap as HashMap;
use log::info;

///
/// Classification of a graph that admits an Eulerian walk
///
#[derive(Debug, Clone, PartialEq)]
pub enum Imbalance<N> {
    /// every node is balanced
    Balanced,
    /// one source and one sink
    NearlyBalanced { source: N, sink: N },
}

///
/// Summary of the degrees of all nodes
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DegreeStats {
    pub n_nodes: usize,
    pub n_edges: usize,
    /// nodes with out > in
    pub n_sources: usize,
    /// nodes with in > out
    pub n_sinks: usize,
    pub n_balanced: usize,
    /// max |out - in|
    pub max_imbalance: usize,
}

impl std::fmt::Display for DegreeStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "n_nodes={} n_edges={} n_sources={} n_sinks={} n_balanced={} max_imbalance={}",
            self.n_nodes,
            self.n_edges,
            self.n_sources,
            self.n_sinks,
            self.n_balanced,
            self.max_imbalance
        )
    }
}

///
/// `out - in` of every node appearing in the graph
///
pub fn degree_imbalances<N: GraphNode>(graph: &MultiGraph<N>) -> HashMap<N, i64> {
    let in_degrees = graph.in_degrees();
    graph
        .nodes()
        .into_iter()
        .map(|node| {
            let n_in = in_degrees.get(&node).copied().unwrap_or(0) as i64;
            let n_out = graph.out_degree(&node) as i64;
            (node, n_out - n_in)
        })
        .collect()
}

pub fn degree_stats<N: GraphNode>(graph: &MultiGraph<N>) -> DegreeStats {
    let imbalances = degree_imbalances(graph);
    let mut stats = DegreeStats {
        n_nodes: imbalances.len(),
        n_edges: graph.n_edges(),
        ..DegreeStats::default()
    };
    for &imbalance in imbalances.values() {
        if imbalance > 0 {
            stats.n_sources += 1;
        } else if imbalance < 0 {
            stats.n_sinks += 1;
        } else {
            stats.n_balanced += 1;
        }
        stats.max_imbalance = stats.max_imbalance.max(imbalance.unsigned_abs() as usize);
    }
    stats
}

///
/// Find the source/sink pair of the graph.
///
/// Each unbalanced node is counted by the sign of its imbalance, so two
/// nodes with the same imbalance are never confused. Anything other than
/// zero or exactly one (+1, -1) pair is `MalformedGraph`.
///
pub fn analyze<N: GraphNode>(graph: &MultiGraph<N>) -> Result<Imbalance<N>> {
    let mut sources: Vec<(N, i64)> = Vec::new();
    let mut sinks: Vec<(N, i64)> = Vec::new();
    for (node, imbalance) in degree_imbalances(graph) {
        if imbalance > 0 {
            sources.push((node, imbalance));
        } else if imbalance < 0 {
            sinks.push((node, imbalance));
        }
    }

    match (sources.as_slice(), sinks.as_slice()) {
        ([], []) => Ok(Imbalance::Balanced),
        ([(source, 1)], [(sink, -1)]) => Ok(Imbalance::NearlyBalanced {
            source: source.clone(),
            sink: sink.clone(),
        }),
        _ => {
            let max_imbalance = sources
                .iter()
                .chain(sinks.iter())
                .map(|(_, imbalance)| imbalance.unsigned_abs() as usize)
                .max()
                .unwrap_or(0);
            Err(AssemblyError::MalformedGraph {
                n_sources: sources.len(),
                n_sinks: sinks.len(),
                max_imbalance,
            })
        }
    }
}

///
/// Synthetic edge `sink -> source` added to balance the graph
///
#[derive(Debug, Clone, PartialEq)]
pub struct TemporaryEdge<N> {
    pub sink: N,
    pub source: N,
}

impl<N: GraphNode> TemporaryEdge<N> {
    ///
    /// Cut a closed circuit at this edge.
    ///
    /// The circuit `[v0, ..., v0]` is rotated so that it starts right after
    /// an occurrence of `sink, source` and the temporary edge is dropped.
    /// The returned path starts at the source and ends at the sink and has
    /// `circuit.len() - 1` nodes.
    ///
    /// Returns `None` if the circuit does not use this edge.
    ///
    pub fn excise(&self, circuit: &[N]) -> Option<Vec<N>> {
        if circuit.len() < 2 {
            return None;
        }
        // drop the closing node
        let cycle = &circuit[..circuit.len() - 1];
        let m = cycle.len();
        let i = (0..m).find(|&i| cycle[i] == self.sink && cycle[(i + 1) % m] == self.source)?;
        let mut path = Vec::with_capacity(m);
        path.extend_from_slice(&cycle[i + 1..]);
        path.extend_from_slice(&cycle[..=i]);
        Some(path)
    }
}

///
/// Make the graph balanced.
///
/// If the graph is nearly balanced, the temporary edge is added and
/// returned so it can be excised after the traversal.
///
pub fn balance<N: GraphNode>(graph: &mut MultiGraph<N>) -> Result<Option<TemporaryEdge<N>>> {
    match analyze(graph)? {
        Imbalance::Balanced => {
            info!("graph is balanced");
            Ok(None)
        }
        Imbalance::NearlyBalanced { source, sink } => {
            info!("graph is nearly balanced: source={:?} sink={:?}", source, sink);
            graph.add_edge(sink.clone(), source.clone());
            Ok(Some(TemporaryEdge { sink, source }))
        }
    }
}

//
// tests
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_graph() {
        let g = MultiGraph::from_edges(vec![(0, 1), (1, 2), (2, 0), (0, 0)]);
        assert_eq!(analyze(&g).unwrap(), Imbalance::Balanced);
        let stats = degree_stats(&g);
        assert_eq!(stats.n_balanced, 3);
        assert_eq!(stats.max_imbalance, 0);
    }
    #[test]
    fn nearly_balanced_graph() {
        // 0 -> 1 -> 2 -> 1 -> 3
        let mut g = MultiGraph::from_edges(vec![(0, 1), (1, 2), (2, 1), (1, 3)]);
        assert_eq!(
            analyze(&g).unwrap(),
            Imbalance::NearlyBalanced { source: 0, sink: 3 }
        );
        let stats = degree_stats(&g);
        assert_eq!(stats.n_sources, 1);
        assert_eq!(stats.n_sinks, 1);
        assert_eq!(stats.max_imbalance, 1);

        let temp = balance(&mut g).unwrap().unwrap();
        assert_eq!(temp, TemporaryEdge { sink: 3, source: 0 });
        assert_eq!(g.n_edges(), 5);
        assert_eq!(analyze(&g).unwrap(), Imbalance::Balanced);
        assert_eq!(balance(&mut g).unwrap(), None);
    }
    #[test]
    fn two_sources_are_malformed() {
        // 0 -> 1 and 2 -> 3
        let g = MultiGraph::from_edges(vec![(0, 1), (2, 3)]);
        match analyze(&g) {
            Err(AssemblyError::MalformedGraph {
                n_sources,
                n_sinks,
                max_imbalance,
            }) => {
                assert_eq!(n_sources, 2);
                assert_eq!(n_sinks, 2);
                assert_eq!(max_imbalance, 1);
            }
            r => panic!("should be malformed but {:?}", r),
        }
    }
    #[test]
    fn large_imbalance_is_malformed() {
        // 0 has +2, 1 and 2 have -1
        let g = MultiGraph::from_edges(vec![(0, 1), (0, 2)]);
        assert!(matches!(
            analyze(&g),
            Err(AssemblyError::MalformedGraph {
                n_sources: 1,
                n_sinks: 2,
                max_imbalance: 2
            })
        ));
        // 0 has +2, 1 has -2
        let mut g = MultiGraph::from_edges(vec![(0, 1), (0, 1)]);
        assert!(matches!(
            balance(&mut g),
            Err(AssemblyError::MalformedGraph {
                n_sources: 1,
                n_sinks: 1,
                max_imbalance: 2
            })
        ));
        // nothing is added on failure
        assert_eq!(g.n_edges(), 2);
    }
    #[test]
    fn excise_temporary_edge() {
        let temp = TemporaryEdge { sink: 3, source: 0 };
        // temporary edge in the middle
        let circuit = vec![1, 2, 1, 3, 0, 1];
        assert_eq!(temp.excise(&circuit), Some(vec![0, 1, 2, 1, 3]));
        // temporary edge at the wraparound
        let circuit = vec![0, 1, 2, 1, 3, 0];
        assert_eq!(temp.excise(&circuit), Some(vec![0, 1, 2, 1, 3]));
        // temporary edge at the head
        let circuit = vec![3, 0, 1, 2, 1, 3];
        assert_eq!(temp.excise(&circuit), Some(vec![0, 1, 2, 1, 3]));
        // not found
        assert_eq!(temp.excise(&[1, 2, 1]), None);
        assert_eq!(temp.excise(&[1]), None);
    }
}
