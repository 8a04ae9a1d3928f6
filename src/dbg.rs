//!
//! Paired de Bruijn graph
//!
//! Each (k,d)-read pair `A|B` is an edge from `prefix(A)|prefix(B)` to
//! `suffix(A)|suffix(B)`. Nodes are pairs of (k-1)-mers separated by
//! `d + 1` bases.
//!
use crate::error::{AssemblyError, Result};
use crate::graph::balance::{degree_stats, DegreeStats};
use crate::graph::MultiGraph;
use crate::kmer::{PairLabel, ReadPair};
use log::info;

///
/// De Bruijn graph of (k,d)-read pairs
///
#[derive(Debug, Clone)]
pub struct PairedDbg {
    k: usize,
    d: usize,
    graph: MultiGraph<PairLabel>,
}

impl PairedDbg {
    ///
    /// Build the graph from read pairs.
    ///
    /// Every read pair adds one edge, so duplicated read pairs become
    /// parallel edges.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `k < 2`
    /// * `NoReadPairs` if `pairs` is empty
    /// * `KmerSizeMismatch` if any k-mer is not of length `k`
    ///
    pub fn from_read_pairs(k: usize, d: usize, pairs: &[ReadPair]) -> Result<Self> {
        if k < 2 {
            return Err(AssemblyError::InvalidParameter(format!(
                "k should be >= 2 but k={}",
                k
            )));
        }
        if pairs.is_empty() {
            return Err(AssemblyError::NoReadPairs);
        }

        let mut graph = MultiGraph::new();
        for pair in pairs {
            for kmer in [&pair.first, &pair.second] {
                if kmer.k() != k {
                    return Err(AssemblyError::KmerSizeMismatch {
                        expected: k,
                        found: kmer.k(),
                    });
                }
            }
            graph.add_edge(pair.prefix(), pair.suffix());
        }

        let dbg = PairedDbg { k, d, graph };
        info!("paired dbg k={} d={} {}", k, d, dbg.degree_stats());
        Ok(dbg)
    }
    /// k-mer size of the read pairs
    pub fn k(&self) -> usize {
        self.k
    }
    /// gap size between the two k-mers of a read pair
    pub fn d(&self) -> usize {
        self.d
    }
    pub fn n_nodes(&self) -> usize {
        self.graph.n_nodes()
    }
    pub fn n_edges(&self) -> usize {
        self.graph.n_edges()
    }
    pub fn graph(&self) -> &MultiGraph<PairLabel> {
        &self.graph
    }
    pub fn into_graph(self) -> MultiGraph<PairLabel> {
        self.graph
    }
    pub fn degree_stats(&self) -> DegreeStats {
        degree_stats(&self.graph)
    }
    /// DOT format of the graph
    pub fn as_dot(&self) -> String {
        self.graph.as_dot()
    }
}

impl std::fmt::Display for PairedDbg {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut edges: Vec<String> = self
            .graph
            .edges()
            .map(|(source, target)| format!("{}->{}", source, target))
            .collect();
        edges.sort();
        write!(f, "k={},d={},{}", self.k, self.d, edges.join(","))
    }
}

//
// tests
//
